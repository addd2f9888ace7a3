use super::block::Block;
use super::common::{null_as_default, Image, Link, Logo, RecordMeta};
use super::shape::{RelationShape, Shape};
use crate::types::DocumentId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

fn visible_by_default() -> bool {
    true
}

/// An unset boolean arrives as `null`; the banner shows unless hidden explicitly.
fn null_as_visible<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
}

/// `layout.banner` component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "visible_by_default", deserialize_with = "null_as_visible")]
    pub is_visible: bool,
    #[serde(default)]
    pub link: Option<Link>,
}

impl RelationShape for Banner {
    fn relation_shape() -> Shape {
        Shape::nested([("link", Link::relation_shape())])
    }
}

/// `layout.header` component
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default)]
    pub logo: Option<Logo>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nav_items: Vec<Link>,
    #[serde(default)]
    pub cta: Option<Link>,
}

impl RelationShape for Header {
    fn relation_shape() -> Shape {
        Shape::nested([
            ("logo", Logo::relation_shape()),
            ("navItems", Link::relation_shape()),
            ("cta", Link::relation_shape()),
        ])
    }
}

/// `layout.footer` component
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Footer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default)]
    pub logo: Option<Logo>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nav_items: Vec<Link>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub social_links: Vec<Logo>,
    #[serde(default)]
    pub text: Option<String>,
}

impl RelationShape for Footer {
    fn relation_shape() -> Shape {
        Shape::nested([
            ("logo", Logo::relation_shape()),
            ("navItems", Link::relation_shape()),
            ("socialLinks", Logo::relation_shape()),
        ])
    }
}

/// The `global` single type: site-wide banner, header and footer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Global {
    #[serde(flatten)]
    pub meta: RecordMeta,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub banner: Option<Banner>,
    #[serde(default)]
    pub header: Option<Header>,
    #[serde(default)]
    pub footer: Option<Footer>,
}

impl RelationShape for Global {
    fn relation_shape() -> Shape {
        Shape::nested([
            ("banner", Banner::relation_shape()),
            ("header", Header::relation_shape()),
            ("footer", Footer::relation_shape()),
        ])
    }
}

/// The `landing-page` single type.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingPage {
    #[serde(flatten)]
    pub meta: RecordMeta,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub blocks: Vec<Block>,
}

impl RelationShape for LandingPage {
    fn relation_shape() -> Shape {
        Shape::nested([("blocks", Block::relation_shape())])
    }
}

/// An entry of the `page` collection type.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    #[serde(flatten)]
    pub meta: RecordMeta,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub blocks: Vec<Block>,
}

impl RelationShape for Page {
    fn relation_shape() -> Shape {
        Shape::nested([("blocks", Block::relation_shape())])
    }
}

/// An entry of the `author` collection type.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_id: Option<DocumentId>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub image: Option<Image>,
}

impl RelationShape for Author {
    fn relation_shape() -> Shape {
        Shape::nested([("image", Image::relation_shape())])
    }
}

/// An entry of the `tag` collection type.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTag {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_id: Option<DocumentId>,
    #[serde(default)]
    pub title: Option<String>,
}

/// An entry of the `article` collection type, as pulled by the posts loader.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(flatten)]
    pub meta: RecordMeta,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub featured_image: Option<Image>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content_tags: Vec<ContentTag>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub blocks: Vec<Block>,
}

impl RelationShape for Article {
    fn relation_shape() -> Shape {
        Shape::nested([
            ("featuredImage", Image::relation_shape()),
            ("author", Author::relation_shape()),
            ("contentTags", Shape::Leaf),
            ("blocks", Block::relation_shape()),
        ])
    }
}

/// An article as embedded in a featured-articles block.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_id: Option<DocumentId>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub featured_image: Option<Image>,
}

impl RelationShape for ArticleSummary {
    fn relation_shape() -> Shape {
        Shape::nested([
            ("featuredImage", Image::relation_shape()),
            ("author", Author::relation_shape()),
        ])
    }
}
