//! Population specs: which relations and media fields Strapi should return.
//!
//! Strapi v5 returns only scalar attributes unless a request names the
//! components, relations, media and dynamic zones it wants in a nested
//! `populate` parameter. This module models that parameter as data, holds the
//! site's shared definitions, and encodes them into query strings.

pub mod audit;
mod definitions;
mod query;

pub use definitions::{
    article_populate, blocks_populate, global_populate, landing_page_populate, page_populate,
};
pub use query::{PageRequest, Query};

use crate::constants::MEDIA_FIELDS;
use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// One include directive for a relation, component, media or dynamic zone.
#[derive(Debug, Clone, PartialEq)]
pub enum PopulateNode {
    /// `true`: include the target with its scalar fields, nothing nested.
    Include,
    /// An object restricting fields, populating further, or branching per tag.
    Select(Selection),
}

/// The object form of a populate entry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selection {
    /// `fields: [...]`: scalar fields to return; empty means all of them.
    pub fields: Vec<String>,
    /// `populate: ...`: nested relations of the target.
    pub populate: Relations,
    /// `on: { tag: ... }`: per-component rules inside a dynamic zone.
    pub on: IndexMap<String, PopulateNode>,
}

/// A `populate` value: nothing, everything one level deep, or named entries.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Relations {
    #[default]
    None,
    /// `"*"`
    All,
    Fields(IndexMap<String, PopulateNode>),
}

impl PopulateNode {
    pub fn include() -> Self {
        PopulateNode::Include
    }

    /// A media relation restricted to `url` and `alternativeText`.
    pub fn media() -> Self {
        Self::fields(MEDIA_FIELDS)
    }

    pub fn fields<S: Into<String>>(fields: impl IntoIterator<Item = S>) -> Self {
        PopulateNode::Select(Selection {
            fields: fields.into_iter().map(Into::into).collect(),
            ..Selection::default()
        })
    }

    /// `{ populate: { name: node, ... } }`
    pub fn nested<S: Into<String>>(entries: impl IntoIterator<Item = (S, PopulateNode)>) -> Self {
        PopulateNode::Select(Selection {
            populate: Relations::fields(entries),
            ..Selection::default()
        })
    }

    /// `{ populate: "*" }`
    pub fn all_relations() -> Self {
        PopulateNode::Select(Selection {
            populate: Relations::All,
            ..Selection::default()
        })
    }

    /// `{ on: { tag: node, ... } }`
    pub fn dynamic_zone<S: Into<String>>(
        branches: impl IntoIterator<Item = (S, PopulateNode)>,
    ) -> Self {
        PopulateNode::Select(Selection {
            on: branches.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            ..Selection::default()
        })
    }

    pub fn as_selection(&self) -> Option<&Selection> {
        match self {
            PopulateNode::Include => None,
            PopulateNode::Select(selection) => Some(selection),
        }
    }

    /// The branch of an `on` map for a component tag, if one is declared.
    pub fn variant(&self, tag: &str) -> Option<&PopulateNode> {
        self.as_selection().and_then(|s| s.on.get(tag))
    }

    /// Nested populate entry by field name.
    pub fn child(&self, name: &str) -> Option<&PopulateNode> {
        self.as_selection().and_then(|s| s.populate.get(name))
    }

    pub fn is_media_selection(&self) -> bool {
        self.as_selection().is_some_and(Selection::is_media_only)
    }
}

impl Selection {
    /// Exactly `url` + `alternativeText`, with nothing populated below.
    pub fn is_media_only(&self) -> bool {
        self.fields.len() == MEDIA_FIELDS.len()
            && MEDIA_FIELDS
                .iter()
                .all(|media| self.fields.iter().any(|f| f == media))
            && matches!(self.populate, Relations::None)
            && self.on.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && matches!(self.populate, Relations::None) && self.on.is_empty()
    }
}

impl Relations {
    pub fn fields<S: Into<String>>(entries: impl IntoIterator<Item = (S, PopulateNode)>) -> Self {
        Relations::Fields(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn get(&self, name: &str) -> Option<&PopulateNode> {
        match self {
            Relations::Fields(map) => map.get(name),
            Relations::None | Relations::All => None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Relations::None)
    }
}

impl Serialize for PopulateNode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PopulateNode::Include => serializer.serialize_bool(true),
            PopulateNode::Select(selection) => selection.serialize(serializer),
        }
    }
}

impl Serialize for Selection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        if !self.fields.is_empty() {
            map.serialize_entry("fields", &self.fields)?;
        }
        if !self.populate.is_none() {
            map.serialize_entry("populate", &self.populate)?;
        }
        if !self.on.is_empty() {
            map.serialize_entry("on", &self.on)?;
        }
        map.end()
    }
}

impl Serialize for Relations {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Relations::None => serializer.serialize_none(),
            Relations::All => serializer.serialize_str("*"),
            Relations::Fields(map) => map.serialize(serializer),
        }
    }
}
