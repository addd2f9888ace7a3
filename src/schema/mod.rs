//! Backend schema declarations for the site's components and content types.
//!
//! These mirror the `schema.json` files Strapi keeps for each component and
//! content type. They are consumed here to validate populate trees (every
//! populated key must be a relational attribute of its target) and can be
//! emitted back out in Strapi's own layout.

mod components;
mod content_types;
mod validate;

pub use components::{BLOCK_COMPONENTS, COMPONENTS};
pub use content_types::CONTENT_TYPES;
pub use validate::{validate, SchemaViolation, ViolationKind};

use serde_json::{json, Map, Value};

/// Relation cardinality between content types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    OneToOne,
    OneToMany,
    ManyToOne,
    ManyToMany,
}

impl RelationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationKind::OneToOne => "oneToOne",
            RelationKind::OneToMany => "oneToMany",
            RelationKind::ManyToOne => "manyToOne",
            RelationKind::ManyToMany => "manyToMany",
        }
    }
}

/// One attribute of a component or content type.
#[derive(Debug, Clone, PartialEq)]
pub enum Attribute {
    String,
    Text,
    RichText,
    Uid {
        target_field: &'static str,
    },
    Boolean {
        default: Option<bool>,
    },
    Enumeration {
        values: &'static [&'static str],
    },
    Media {
        multiple: bool,
        allowed_types: &'static [&'static str],
    },
    Component {
        component: &'static str,
        repeatable: bool,
    },
    DynamicZone {
        components: &'static [&'static str],
    },
    Relation {
        relation: RelationKind,
        target: &'static str,
    },
}

impl Attribute {
    /// Scalars are always returned; everything else must be populated.
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Attribute::String
                | Attribute::Text
                | Attribute::RichText
                | Attribute::Uid { .. }
                | Attribute::Boolean { .. }
                | Attribute::Enumeration { .. }
        )
    }

    pub fn to_json(&self) -> Value {
        match self {
            Attribute::String => json!({ "type": "string" }),
            Attribute::Text => json!({ "type": "text" }),
            Attribute::RichText => json!({ "type": "richtext" }),
            Attribute::Uid { target_field } => {
                json!({ "type": "uid", "targetField": target_field })
            }
            Attribute::Boolean { default: Some(d) } => json!({ "type": "boolean", "default": d }),
            Attribute::Boolean { default: None } => json!({ "type": "boolean" }),
            Attribute::Enumeration { values } => json!({ "type": "enumeration", "enum": values }),
            Attribute::Media {
                multiple,
                allowed_types,
            } => json!({
                "type": "media",
                "multiple": multiple,
                "required": false,
                "allowedTypes": allowed_types,
            }),
            Attribute::Component {
                component,
                repeatable,
            } => json!({
                "type": "component",
                "repeatable": repeatable,
                "component": component,
            }),
            Attribute::DynamicZone { components } => {
                json!({ "type": "dynamiczone", "components": components })
            }
            Attribute::Relation { relation, target } => json!({
                "type": "relation",
                "relation": relation.as_str(),
                "target": target,
            }),
        }
    }
}

fn attributes_to_json(attributes: &[(&'static str, Attribute)]) -> Value {
    let mut map = Map::new();
    for (name, attribute) in attributes {
        map.insert((*name).to_string(), attribute.to_json());
    }
    Value::Object(map)
}

/// A reusable component (`<category>.<name>`).
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentSchema {
    pub uid: &'static str,
    pub collection_name: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub attributes: &'static [(&'static str, Attribute)],
}

impl ComponentSchema {
    pub fn attribute(&self, name: &str) -> Option<&'static Attribute> {
        find_attribute(self.attributes, name)
    }

    /// The component's `schema.json` as Strapi writes it.
    pub fn to_json(&self) -> Value {
        json!({
            "collectionName": self.collection_name,
            "info": {
                "displayName": self.display_name,
                "description": self.description,
            },
            "options": {},
            "attributes": attributes_to_json(self.attributes),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Single,
    Collection,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Single => "singleType",
            ContentKind::Collection => "collectionType",
        }
    }
}

/// A content type (`api::<name>.<name>`).
#[derive(Debug, Clone, PartialEq)]
pub struct ContentTypeSchema {
    pub uid: &'static str,
    pub kind: ContentKind,
    pub collection_name: &'static str,
    pub singular_name: &'static str,
    pub plural_name: &'static str,
    pub display_name: &'static str,
    pub draft_and_publish: bool,
    pub attributes: &'static [(&'static str, Attribute)],
}

impl ContentTypeSchema {
    pub fn attribute(&self, name: &str) -> Option<&'static Attribute> {
        find_attribute(self.attributes, name)
    }

    /// The REST route segment: singular for single types, plural otherwise.
    pub fn route(&self) -> &'static str {
        match self.kind {
            ContentKind::Single => self.singular_name,
            ContentKind::Collection => self.plural_name,
        }
    }

    pub fn to_json(&self) -> Value {
        json!({
            "kind": self.kind.as_str(),
            "collectionName": self.collection_name,
            "info": {
                "singularName": self.singular_name,
                "pluralName": self.plural_name,
                "displayName": self.display_name,
            },
            "options": { "draftAndPublish": self.draft_and_publish },
            "attributes": attributes_to_json(self.attributes),
        })
    }
}

fn find_attribute(
    attributes: &'static [(&'static str, Attribute)],
    name: &str,
) -> Option<&'static Attribute> {
    attributes
        .iter()
        .find(|(attr_name, _)| *attr_name == name)
        .map(|(_, attribute)| attribute)
}

/// Either kind of schema, for code that walks attributes.
#[derive(Debug, Clone, Copy)]
pub enum SchemaRef {
    Component(&'static ComponentSchema),
    ContentType(&'static ContentTypeSchema),
}

impl SchemaRef {
    pub fn uid(&self) -> &'static str {
        match self {
            SchemaRef::Component(c) => c.uid,
            SchemaRef::ContentType(c) => c.uid,
        }
    }

    pub fn attributes(&self) -> &'static [(&'static str, Attribute)] {
        match self {
            SchemaRef::Component(c) => c.attributes,
            SchemaRef::ContentType(c) => c.attributes,
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&'static Attribute> {
        find_attribute(self.attributes(), name)
    }
}

/// Looks up a component by uid, e.g. `blocks.hero`.
pub fn component(uid: &str) -> Option<&'static ComponentSchema> {
    COMPONENTS.iter().find(|c| c.uid == uid)
}

/// Looks up a content type by uid (`api::article.article`) or singular name.
pub fn content_type(name: &str) -> Option<&'static ContentTypeSchema> {
    CONTENT_TYPES
        .iter()
        .find(|c| c.uid == name || c.singular_name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ComponentType;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_block_components_match_component_types() {
        let tags: Vec<&str> = ComponentType::ALL.iter().map(|t| t.as_str()).collect();
        let mut declared = BLOCK_COMPONENTS.to_vec();
        let mut expected = tags.clone();
        declared.sort_unstable();
        expected.sort_unstable();
        assert_eq!(declared, expected);

        for tag in tags {
            assert!(component(tag).is_some(), "no schema for {}", tag);
        }
    }

    #[test]
    fn test_component_schema_json() {
        let hero = component("blocks.hero").unwrap();
        let value = hero.to_json();
        assert_eq!(value["collectionName"], "components_blocks_heroes");
        assert_eq!(value["info"]["displayName"], "Hero");
        assert_eq!(
            value["attributes"]["links"],
            json!({ "type": "component", "repeatable": true, "component": "shared.link" })
        );
        assert_eq!(value["attributes"]["image"]["allowedTypes"], json!(["images"]));
    }

    #[test]
    fn test_link_enumeration_and_defaults() {
        let link = component("shared.link").unwrap();
        assert_eq!(
            link.attribute("type"),
            Some(&Attribute::Enumeration {
                values: &["PRIMARY", "SECONDARY"]
            })
        );
        assert_eq!(
            link.attribute("isExternal"),
            Some(&Attribute::Boolean {
                default: Some(false)
            })
        );
    }

    #[test]
    fn test_content_type_lookup_and_routes() {
        let article = content_type("article").unwrap();
        assert_eq!(article.uid, "api::article.article");
        assert_eq!(article.route(), "articles");
        assert_eq!(content_type("api::global.global").unwrap().route(), "global");
        assert!(content_type("comment").is_none());
        assert_eq!(article.to_json()["kind"], "collectionType");
    }

    #[test]
    fn test_every_reference_resolves() {
        let all_attributes = COMPONENTS
            .iter()
            .flat_map(|c| c.attributes.iter())
            .chain(CONTENT_TYPES.iter().flat_map(|c| c.attributes.iter()));
        for (name, attribute) in all_attributes {
            match attribute {
                Attribute::Component { component: uid, .. } => {
                    assert!(component(uid).is_some(), "{} -> {}", name, uid)
                }
                Attribute::DynamicZone { components } => {
                    for uid in *components {
                        assert!(component(uid).is_some(), "{} -> {}", name, uid);
                    }
                }
                Attribute::Relation { target, .. } => {
                    assert!(content_type(target).is_some(), "{} -> {}", name, target)
                }
                _ => {}
            }
        }
    }
}
