// src/output/writer.rs
//! Runs output plans. The only place the content store touches disk.

use super::types::{DeliveryTarget, Effect, OutputPlan, OutputReport};
use crate::error::AppError;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Runs every operation in order.
///
/// A failed operation is recorded in the report and the rest still run;
/// callers decide with [`OutputReport::into_result`].
pub fn deliver(plan: OutputPlan) -> Result<OutputReport, AppError> {
    let started = Instant::now();
    let mut report = OutputReport::default();
    log::debug!("Delivering {} operation(s)", plan.len());

    for operation in plan.operations {
        match apply(&operation) {
            Ok(effect) => report.record(effect),
            Err(e) => {
                log::error!("Delivery failed: {}", e);
                report.record_failure(operation, &e);
            }
        }
    }

    report.elapsed_ms = started.elapsed().as_millis() as u64;
    log::info!(
        "Content store: {} written, {} removed, {} failed ({}ms)",
        report.written.len(),
        report.removed.len(),
        report.failures.len(),
        report.elapsed_ms
    );
    Ok(report)
}

fn apply(operation: &DeliveryTarget) -> Result<Effect, AppError> {
    match operation {
        DeliveryTarget::WriteFile { path, content } => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, content)?;
            log::debug!("Wrote {}", path.display());
            Ok(Effect::Wrote {
                path: path.clone(),
                bytes: content.len(),
            })
        }
        DeliveryTarget::CreateDirectory { path } => {
            ensure_directory(path)?;
            Ok(Effect::Unchanged)
        }
        DeliveryTarget::PruneEntries { dir, keep } => prune_entries(dir, keep).map(Effect::Removed),
        DeliveryTarget::PrintToStdout { content } => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            if !content.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
            stdout.flush()?;
            Ok(Effect::Printed {
                bytes: content.len(),
            })
        }
    }
}

fn ensure_directory(path: &Path) -> Result<(), AppError> {
    if path.is_dir() {
        return Ok(());
    }
    if path.exists() {
        return Err(AppError::Io(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("{} exists and is not a directory", path.display()),
        )));
    }
    fs::create_dir_all(path)?;
    Ok(())
}

/// Deletes stale entry files. Subdirectories and non-JSON files are left alone.
fn prune_entries(dir: &Path, keep: &[String]) -> Result<Vec<PathBuf>, AppError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut stale = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_entry = path.is_file() && path.extension().is_some_and(|ext| ext == "json");
        let kept = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| keep.iter().any(|k| k == name));
        if is_entry && !kept {
            stale.push(path);
        }
    }
    stale.sort();

    for path in &stale {
        fs::remove_file(path)?;
        log::info!("Removed stale entry {}", path.display());
    }
    Ok(stale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deliver_writes_nested_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("strapiPages").join("home.json");
        let plan = OutputPlan::new().with_operation(DeliveryTarget::WriteFile {
            path: path.clone(),
            content: "{}".to_string(),
        });

        let report = deliver(plan).unwrap();
        assert!(report.is_success());
        assert_eq!(report.bytes_written, 2);
        assert_eq!(report.written, vec![path.clone()]);
        assert_eq!(fs::read_to_string(path).unwrap(), "{}");
    }

    #[test]
    fn test_prune_keeps_listed_entries_and_foreign_files() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["keep.json", "gone.json", "notes.md"] {
            fs::write(dir.path().join(name), "{}").unwrap();
        }
        fs::create_dir(dir.path().join("drafts.json")).unwrap();

        let report = deliver(OutputPlan::new().with_operation(DeliveryTarget::PruneEntries {
            dir: dir.path().to_path_buf(),
            keep: vec!["keep.json".to_string()],
        }))
        .unwrap();

        assert_eq!(report.removed, vec![dir.path().join("gone.json")]);
        assert!(dir.path().join("keep.json").exists());
        assert!(dir.path().join("notes.md").exists());
        assert!(dir.path().join("drafts.json").is_dir());
    }

    #[test]
    fn test_prune_missing_directory_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let report = deliver(OutputPlan::new().with_operation(DeliveryTarget::PruneEntries {
            dir: dir.path().join("strapiPosts"),
            keep: Vec::new(),
        }))
        .unwrap();
        assert!(report.is_success());
        assert!(report.removed.is_empty());
    }

    #[test]
    fn test_directory_over_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("taken");
        fs::write(&file, "x").unwrap();

        let report = deliver(
            OutputPlan::new().with_operation(DeliveryTarget::CreateDirectory { path: file }),
        )
        .unwrap();
        assert_eq!(report.failures.len(), 1);
        assert!(matches!(
            report.into_result(),
            Err(AppError::DeliveryFailed { .. })
        ));
    }
}
