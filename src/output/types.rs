// src/output/types.rs
//! Plans and reports for content-store writes.

use crate::error::AppError;
use std::path::PathBuf;

/// Operations in the order they will run. Building one never touches disk.
#[derive(Debug, Clone, Default)]
pub struct OutputPlan {
    pub operations: Vec<DeliveryTarget>,
}

impl OutputPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_operation(mut self, operation: DeliveryTarget) -> Self {
        self.operations.push(operation);
        self
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeliveryTarget {
    /// Parent directories are created as needed.
    WriteFile { path: PathBuf, content: String },
    CreateDirectory { path: PathBuf },
    /// Removes every `*.json` file directly under `dir` whose name is not in `keep`.
    PruneEntries { dir: PathBuf, keep: Vec<String> },
    PrintToStdout { content: String },
}

/// What one operation changed.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Wrote { path: PathBuf, bytes: usize },
    Removed(Vec<PathBuf>),
    Printed { bytes: usize },
    Unchanged,
}

#[derive(Debug, Clone)]
pub struct DeliveryFailure {
    pub operation: DeliveryTarget,
    pub error: String,
}

/// Outcome of [`deliver`](super::deliver): files touched, bytes out, and
/// the operations that failed.
#[derive(Debug, Clone, Default)]
pub struct OutputReport {
    pub written: Vec<PathBuf>,
    pub removed: Vec<PathBuf>,
    pub bytes_written: usize,
    pub failures: Vec<DeliveryFailure>,
    pub elapsed_ms: u64,
}

impl OutputReport {
    pub fn record(&mut self, effect: Effect) {
        match effect {
            Effect::Wrote { path, bytes } => {
                self.bytes_written += bytes;
                self.written.push(path);
            }
            Effect::Removed(paths) => self.removed.extend(paths),
            Effect::Printed { bytes } => self.bytes_written += bytes,
            Effect::Unchanged => {}
        }
    }

    pub fn record_failure(&mut self, operation: DeliveryTarget, error: &AppError) {
        self.failures.push(DeliveryFailure {
            operation,
            error: error.to_string(),
        });
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Fails with [`AppError::DeliveryFailed`] listing every failed operation.
    pub fn into_result(self) -> Result<Self, AppError> {
        if self.is_success() {
            return Ok(self);
        }
        Err(AppError::DeliveryFailed {
            failures: self.failures.into_iter().map(|f| f.error).collect(),
        })
    }
}
