//! Populate coverage audit.
//!
//! Every relational field a model type declares must be named in the populate
//! tree sent for it, otherwise Strapi omits it and the typed value silently
//! falls back to its default. The audit compares each shared definition with
//! the [`Shape`] of the type it is decoded into, and with the backend schema.

use super::{
    article_populate, global_populate, landing_page_populate, page_populate, PopulateNode,
    Relations,
};
use crate::error::AppError;
use crate::model::{Article, Global, LandingPage, Page, RelationShape, Shape};
use crate::schema::{self, SchemaRef, SchemaViolation};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GapKind {
    /// The type reads the field but the tree never asks for it.
    NotPopulated,
    /// A media field is populated without the `url`/`alternativeText` restriction.
    MediaNotRestricted,
    /// A dynamic zone has no `on` branch for one of the block variants.
    MissingVariant,
}

/// A field the type expects that the populate tree does not deliver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageGap {
    pub path: String,
    pub kind: GapKind,
}

impl fmt::Display for CoverageGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self.kind {
            GapKind::NotPopulated => "not populated",
            GapKind::MediaNotRestricted => "media not restricted to url and alternativeText",
            GapKind::MissingVariant => "no populate branch for this block variant",
        };
        write!(f, "{}: {}", self.path, reason)
    }
}

/// Compares a populate tree against the relations a type declares.
///
/// `shape` is normally `T::relation_shape()` for the root type; anything
/// other than [`Shape::Nested`] at the root is treated as having no fields.
pub fn check_coverage(relations: &Relations, shape: &Shape) -> Vec<CoverageGap> {
    let mut gaps = Vec::new();
    if let Shape::Nested(fields) = shape {
        check_fields("", relations, fields, &mut gaps);
    }
    gaps
}

fn join(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", path, name)
    }
}

fn gap(path: String, kind: GapKind, out: &mut Vec<CoverageGap>) {
    out.push(CoverageGap { path, kind });
}

fn check_fields(
    path: &str,
    relations: &Relations,
    fields: &[(&'static str, Shape)],
    out: &mut Vec<CoverageGap>,
) {
    for (name, shape) in fields {
        let field_path = join(path, name);
        match relations {
            Relations::None => gap(field_path, GapKind::NotPopulated, out),
            Relations::All => check_node(field_path, &PopulateNode::Include, shape, out),
            Relations::Fields(entries) => match entries.get(*name) {
                Some(node) => check_node(field_path, node, shape, out),
                None => gap(field_path, GapKind::NotPopulated, out),
            },
        }
    }
}

fn check_node(path: String, node: &PopulateNode, shape: &Shape, out: &mut Vec<CoverageGap>) {
    match shape {
        Shape::Leaf => {}
        Shape::Media => {
            if !node.is_media_selection() {
                gap(path, GapKind::MediaNotRestricted, out);
            }
        }
        Shape::Nested(fields) => match node {
            PopulateNode::Include => check_fields(&path, &Relations::None, fields, out),
            PopulateNode::Select(selection) => {
                check_fields(&path, &selection.populate, fields, out)
            }
        },
        Shape::Zone(variants) => {
            for (tag, variant) in variants {
                let branch_path = format!("{}[{}]", path, tag);
                match node.variant(tag) {
                    Some(branch) => check_node(branch_path, branch, variant, out),
                    None => gap(branch_path, GapKind::MissingVariant, out),
                }
            }
        }
    }
}

/// Coverage and schema results for one content type.
#[derive(Debug, Clone)]
pub struct AuditEntry {
    pub content_type: &'static str,
    pub gaps: Vec<CoverageGap>,
    pub violations: Vec<SchemaViolation>,
}

impl AuditEntry {
    fn run(content_type: &'static str, relations: Relations, shape: Shape) -> Self {
        let violations = match schema::content_type(content_type) {
            Some(declared) => schema::validate(SchemaRef::ContentType(declared), &relations),
            None => Vec::new(),
        };
        let entry = Self {
            content_type,
            gaps: check_coverage(&relations, &shape),
            violations,
        };
        log::debug!(
            "audited {}: {} gap(s), {} schema violation(s)",
            content_type,
            entry.gaps.len(),
            entry.violations.len()
        );
        entry
    }

    pub fn is_clean(&self) -> bool {
        self.gaps.is_empty() && self.violations.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct AuditReport {
    pub entries: Vec<AuditEntry>,
}

impl AuditReport {
    pub fn is_clean(&self) -> bool {
        self.entries.iter().all(AuditEntry::is_clean)
    }

    /// Every problem as `<content type>: <path>: <reason>`.
    pub fn issues(&self) -> Vec<String> {
        self.entries
            .iter()
            .flat_map(|entry| {
                let gaps = entry.gaps.iter().map(ToString::to_string);
                let violations = entry.violations.iter().map(ToString::to_string);
                gaps.chain(violations)
                    .map(move |issue| format!("{}: {}", entry.content_type, issue))
            })
            .collect()
    }

    pub fn into_result(self) -> Result<Self, AppError> {
        if self.is_clean() {
            Ok(self)
        } else {
            Err(AppError::AuditFailed {
                issues: self.issues(),
            })
        }
    }
}

/// Audits every shared populate definition against its record type.
pub fn audit_all() -> AuditReport {
    AuditReport {
        entries: vec![
            AuditEntry::run("global", global_populate(), Global::relation_shape()),
            AuditEntry::run(
                "landing-page",
                landing_page_populate(),
                LandingPage::relation_shape(),
            ),
            AuditEntry::run("page", page_populate(), Page::relation_shape()),
            AuditEntry::run("article", article_populate(), Article::relation_shape()),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Block, HeroBlock};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_shared_definitions_are_complete() {
        let report = audit_all();
        assert_eq!(report.issues(), Vec::<String>::new());
        assert!(report.into_result().is_ok());
    }

    #[test]
    fn test_missing_nested_media_is_a_gap() {
        let relations = Relations::fields([("blocks", {
            let mut zone = crate::populate::blocks_populate().clone();
            if let PopulateNode::Select(selection) = &mut zone {
                selection
                    .on
                    .insert("blocks.hero".to_string(), PopulateNode::include());
            }
            zone
        })]);
        let gaps = check_coverage(&relations, &Page::relation_shape());
        assert_eq!(
            gaps,
            vec![
                CoverageGap {
                    path: "blocks[blocks.hero].image".to_string(),
                    kind: GapKind::NotPopulated,
                },
                CoverageGap {
                    path: "blocks[blocks.hero].links".to_string(),
                    kind: GapKind::NotPopulated,
                },
            ]
        );
    }

    #[test]
    fn test_dropped_variant_is_reported() {
        let mut zone = crate::populate::blocks_populate().clone();
        if let PopulateNode::Select(selection) = &mut zone {
            selection.on.shift_remove("blocks.markdown");
        }
        let gaps = check_coverage(
            &Relations::fields([("blocks", zone)]),
            &Shape::nested([("blocks", Block::relation_shape())]),
        );
        assert_eq!(
            gaps,
            vec![CoverageGap {
                path: "blocks[blocks.markdown]".to_string(),
                kind: GapKind::MissingVariant,
            }]
        );
    }

    #[test]
    fn test_wildcard_counts_as_include() {
        let gaps = check_coverage(&Relations::All, &HeroBlock::relation_shape());
        assert_eq!(
            gaps.iter().map(ToString::to_string).collect::<Vec<_>>(),
            vec!["image: media not restricted to url and alternativeText"]
        );
    }

    #[test]
    fn test_failed_audit_lists_issues() {
        let report = AuditReport {
            entries: vec![AuditEntry::run(
                "article",
                Relations::fields([("author", PopulateNode::include())]),
                Article::relation_shape(),
            )],
        };
        assert!(!report.is_clean());
        let issues = report.issues();
        assert!(issues.contains(&"article: featuredImage: not populated".to_string()));
        assert!(issues.contains(&"article: author.image: not populated".to_string()));
        match report.into_result() {
            Err(AppError::AuditFailed { issues }) => assert_eq!(issues.len(), 4),
            other => panic!("expected audit failure, got {:?}", other),
        }
    }
}
