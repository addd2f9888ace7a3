use super::common::{null_as_default, BlockMeta, Card, Image, Link};
use super::records::ArticleSummary;
use super::shape::{RelationShape, Shape};
use serde::{Deserialize, Serialize};

/// `blocks.hero`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroBlock {
    #[serde(flatten)]
    pub meta: BlockMeta,
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub image: Option<Image>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub links: Vec<Link>,
}

impl RelationShape for HeroBlock {
    fn relation_shape() -> Shape {
        Shape::nested([
            ("image", Image::relation_shape()),
            ("links", Link::relation_shape()),
        ])
    }
}

/// `blocks.heading-section`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingSectionBlock {
    #[serde(flatten)]
    pub meta: BlockMeta,
    #[serde(default)]
    pub sub_heading: Option<String>,
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub anchor_link: Option<String>,
}

impl RelationShape for HeadingSectionBlock {
    fn relation_shape() -> Shape {
        Shape::nested([])
    }
}

/// `blocks.card-grid`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardGridBlock {
    #[serde(flatten)]
    pub meta: BlockMeta,
    #[serde(default, deserialize_with = "null_as_default")]
    pub card: Vec<Card>,
}

impl RelationShape for CardGridBlock {
    fn relation_shape() -> Shape {
        Shape::nested([("card", Card::relation_shape())])
    }
}

/// `blocks.content-with-image`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentWithImageBlock {
    #[serde(flatten)]
    pub meta: BlockMeta,
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub link: Option<Link>,
    #[serde(default)]
    pub image: Option<Image>,
    /// Image on the left instead of the right. Defaults to `false` in the schema.
    #[serde(default, deserialize_with = "null_as_default")]
    pub reversed: bool,
}

impl RelationShape for ContentWithImageBlock {
    fn relation_shape() -> Shape {
        Shape::nested([
            ("image", Image::relation_shape()),
            ("link", Link::relation_shape()),
        ])
    }
}

/// `blocks.faqs`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqsBlock {
    #[serde(flatten)]
    pub meta: BlockMeta,
    #[serde(default, deserialize_with = "null_as_default")]
    pub faq: Vec<Card>,
}

impl RelationShape for FaqsBlock {
    fn relation_shape() -> Shape {
        Shape::nested([("faq", Card::relation_shape())])
    }
}

/// `blocks.person-card`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonCardBlock {
    #[serde(flatten)]
    pub meta: BlockMeta,
    #[serde(default)]
    pub person_name: Option<String>,
    #[serde(default)]
    pub person_job: Option<String>,
    #[serde(default)]
    pub image: Option<Image>,
    #[serde(default)]
    pub text: Option<String>,
}

impl RelationShape for PersonCardBlock {
    fn relation_shape() -> Shape {
        Shape::nested([("image", Image::relation_shape())])
    }
}

/// `blocks.markdown`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkdownBlock {
    #[serde(flatten)]
    pub meta: BlockMeta,
    #[serde(default)]
    pub content: Option<String>,
}

impl RelationShape for MarkdownBlock {
    fn relation_shape() -> Shape {
        Shape::nested([])
    }
}

/// `blocks.featured-articles`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedArticlesBlock {
    #[serde(flatten)]
    pub meta: BlockMeta,
    #[serde(default, deserialize_with = "null_as_default")]
    pub articles: Vec<ArticleSummary>,
}

impl RelationShape for FeaturedArticlesBlock {
    fn relation_shape() -> Shape {
        Shape::nested([("articles", ArticleSummary::relation_shape())])
    }
}

/// `blocks.newsletter`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterBlock {
    #[serde(flatten)]
    pub meta: BlockMeta,
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub form_id: Option<String>,
}

impl RelationShape for NewsletterBlock {
    fn relation_shape() -> Shape {
        Shape::nested([])
    }
}

/// A dynamic-zone entry whose tag is outside the known set.
///
/// Only the common attributes survive; variant-specific fields are dropped
/// because no populate branch exists for them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UnknownBlock {
    #[serde(skip)]
    pub component: String,
    #[serde(flatten)]
    pub meta: BlockMeta,
}
