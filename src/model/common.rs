use super::shape::{RelationShape, Shape};
use crate::types::DocumentId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Treats an explicit `null` the same as an absent field.
///
/// Strapi sends `null` for unset components and relations; the type layer
/// wants an empty list or a default instead.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Common fields for all blocks
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_id: Option<DocumentId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    /// Free-form payload some components carry alongside their attributes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl BlockMeta {
    pub fn with_id(id: u64) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }
}

/// Identity and bookkeeping timestamps shared by every top-level record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_id: Option<DocumentId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

impl RecordMeta {
    /// The key a local content entry is stored under: `documentId`, else `id`.
    pub fn entry_key(&self) -> Option<String> {
        self.document_id
            .as_ref()
            .map(|id| id.as_str().to_string())
            .or_else(|| self.id.map(|id| id.to_string()))
    }
}

/// An uploaded media file, restricted to the two fields this layer requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_id: Option<DocumentId>,
    pub url: String,
    #[serde(default)]
    pub alternative_text: Option<String>,
}

impl RelationShape for Image {
    fn relation_shape() -> Shape {
        Shape::Media
    }
}

/// Visual style of a link rendered as a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LinkType {
    Primary,
    Secondary,
}

/// `shared.link` component
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub href: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_external: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_button_link: bool,
    #[serde(default, rename = "type")]
    pub link_type: Option<LinkType>,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            ..Self::default()
        }
    }

    /// Label to render, falling back to the href itself.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.href)
    }
}

impl RelationShape for Link {
    fn relation_shape() -> Shape {
        Shape::Leaf
    }
}

/// `shared.logo` component
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Logo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default)]
    pub logo_text: Option<String>,
    #[serde(default)]
    pub logo_link: Option<String>,
    #[serde(default)]
    pub image: Option<Image>,
}

impl RelationShape for Logo {
    fn relation_shape() -> Shape {
        Shape::nested([("image", Image::relation_shape())])
    }
}

/// `shared.card` component, used by both card grids and FAQ lists.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

impl RelationShape for Card {
    fn relation_shape() -> Shape {
        Shape::Leaf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_tolerates_nulls() {
        let link: Link = serde_json::from_str(
            r#"{"id": 3, "href": "/blog", "label": null, "isExternal": null, "type": "PRIMARY"}"#,
        )
        .unwrap();
        assert_eq!(link.href, "/blog");
        assert!(!link.is_external);
        assert!(!link.is_button_link);
        assert_eq!(link.link_type, Some(LinkType::Primary));
        assert_eq!(link.display_label(), "/blog");
    }

    #[test]
    fn test_entry_key_prefers_document_id() {
        let meta = RecordMeta {
            id: Some(7),
            document_id: Some(DocumentId::parse("abc").unwrap()),
            ..RecordMeta::default()
        };
        assert_eq!(meta.entry_key().as_deref(), Some("abc"));

        let numeric = RecordMeta {
            id: Some(7),
            ..RecordMeta::default()
        };
        assert_eq!(numeric.entry_key().as_deref(), Some("7"));
        assert_eq!(RecordMeta::default().entry_key(), None);
    }
}
