// src/output/plan.rs
//! Builds output plans from loaded content. Pure: serialises, never writes.

use super::paths::{entry_filename, entry_path, sanitize_filename};
use super::types::{DeliveryTarget, OutputPlan};
use crate::collections::{Collections, ContentEntry};
use crate::error::AppError;
use crate::schema::{COMPONENTS, CONTENT_TYPES};
use serde::Serialize;
use std::path::Path;

/// Mirrors one collection into `<content_dir>/<collection>/`: one
/// `WriteFile` per entry, then a prune of entry files the backend no longer
/// returns.
pub fn plan_collection<T: Serialize>(
    plan: OutputPlan,
    content_dir: &Path,
    collection: &str,
    entries: &[ContentEntry<T>],
) -> Result<OutputPlan, AppError> {
    let dir = content_dir.join(sanitize_filename(collection));
    let mut plan = plan.with_operation(DeliveryTarget::CreateDirectory { path: dir.clone() });
    for entry in entries {
        plan = plan.with_operation(DeliveryTarget::WriteFile {
            path: entry_path(content_dir, collection, &entry.id),
            content: to_json(&entry.data)?,
        });
    }
    let keep = entries.iter().map(|e| entry_filename(&e.id)).collect();
    Ok(plan.with_operation(DeliveryTarget::PruneEntries { dir, keep }))
}

/// The full `sync` plan: posts, then pages.
pub fn plan_sync(content_dir: &Path, collections: &Collections) -> Result<OutputPlan, AppError> {
    let plan = plan_collection(OutputPlan::new(), content_dir, "strapiPosts", &collections.posts)?;
    plan_collection(plan, content_dir, "strapiPages", &collections.pages)
}

/// Prints a value as pretty JSON.
pub fn plan_stdout<T: Serialize>(value: &T) -> Result<OutputPlan, AppError> {
    Ok(OutputPlan::new().with_operation(DeliveryTarget::PrintToStdout {
        content: to_json(value)?,
    }))
}

/// Strapi's on-disk schema layout under a backend `src/` directory:
/// `components/<category>/<name>.json` and
/// `api/<name>/content-types/<name>/schema.json`.
pub fn plan_schema(out_dir: &Path) -> Result<OutputPlan, AppError> {
    let mut plan = OutputPlan::new();
    for component in COMPONENTS {
        let (category, name) = component
            .uid
            .split_once('.')
            .unwrap_or(("shared", component.uid));
        plan = plan.with_operation(DeliveryTarget::WriteFile {
            path: out_dir
                .join("components")
                .join(category)
                .join(format!("{}.json", name)),
            content: to_json(&component.to_json())?,
        });
    }
    for content_type in CONTENT_TYPES {
        let name = content_type.singular_name;
        plan = plan.with_operation(DeliveryTarget::WriteFile {
            path: out_dir
                .join("api")
                .join(name)
                .join("content-types")
                .join(name)
                .join("schema.json"),
            content: to_json(&content_type.to_json())?,
        });
    }
    Ok(plan)
}

fn to_json<T: Serialize>(value: &T) -> Result<String, AppError> {
    let mut content = serde_json::to_string_pretty(value)?;
    content.push('\n');
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Page;
    use std::path::PathBuf;

    #[test]
    fn test_sync_plan_layout() {
        let page = Page {
            title: Some("Home".to_string()),
            ..Page::default()
        };
        let collections = Collections {
            posts: Vec::new(),
            pages: vec![ContentEntry {
                id: "home-doc".to_string(),
                data: page,
            }],
        };

        let plan = plan_sync(Path::new("content"), &collections).unwrap();
        assert_eq!(plan.len(), 5);
        assert_eq!(
            plan.operations[0],
            DeliveryTarget::CreateDirectory {
                path: PathBuf::from("content/strapiPosts")
            }
        );
        assert_eq!(
            plan.operations[1],
            DeliveryTarget::PruneEntries {
                dir: PathBuf::from("content/strapiPosts"),
                keep: Vec::new(),
            }
        );
        assert_eq!(
            plan.operations[4],
            DeliveryTarget::PruneEntries {
                dir: PathBuf::from("content/strapiPages"),
                keep: vec!["home-doc.json".to_string()],
            }
        );
        match &plan.operations[3] {
            DeliveryTarget::WriteFile { path, content } => {
                assert_eq!(path, &PathBuf::from("content/strapiPages/home-doc.json"));
                assert!(content.contains("\"title\": \"Home\""));
                assert!(content.ends_with('\n'));
            }
            other => panic!("unexpected operation: {:?}", other),
        }
    }

    #[test]
    fn test_schema_plan_layout() {
        let plan = plan_schema(Path::new("backend/src")).unwrap();
        assert_eq!(plan.len(), COMPONENTS.len() + CONTENT_TYPES.len());
        let paths: Vec<PathBuf> = plan
            .operations
            .iter()
            .filter_map(|op| match op {
                DeliveryTarget::WriteFile { path, .. } => Some(path.clone()),
                _ => None,
            })
            .collect();
        assert!(paths.contains(&PathBuf::from("backend/src/components/blocks/hero.json")));
        assert!(paths.contains(&PathBuf::from(
            "backend/src/api/article/content-types/article/schema.json"
        )));
    }
}
