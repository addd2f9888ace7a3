// src/pipeline.rs
//! Sync capability traits: pull remote content, then store it locally.
//!
//! Each trait describes a single stage so either side can be swapped in tests.

use crate::api::ContentFetcher;
use crate::collections::Collections;
use crate::error::AppError;
use crate::output::{deliver, plan_sync, OutputReport};
use std::path::PathBuf;

/// Pulls every collection from the backend.
#[async_trait::async_trait]
pub trait ContentSource {
    async fn pull(&self) -> Result<Collections, AppError>;
}

/// Persists loaded collections.
pub trait ContentStore {
    fn store(&self, collections: &Collections) -> Result<OutputReport, AppError>;
}

#[async_trait::async_trait]
impl ContentSource for ContentFetcher {
    async fn pull(&self) -> Result<Collections, AppError> {
        Collections::load(self).await
    }
}

/// Writes entries as JSON files under a content directory.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    pub content_dir: PathBuf,
}

impl DirectoryStore {
    pub fn new(content_dir: impl Into<PathBuf>) -> Self {
        Self {
            content_dir: content_dir.into(),
        }
    }
}

impl ContentStore for DirectoryStore {
    fn store(&self, collections: &Collections) -> Result<OutputReport, AppError> {
        let plan = plan_sync(&self.content_dir, collections)?;
        deliver(plan)?.into_result()
    }
}

/// Runs both stages.
pub async fn sync(
    source: &(dyn ContentSource + Sync),
    store: &dyn ContentStore,
) -> Result<(Collections, OutputReport), AppError> {
    let collections = source.pull().await?;
    let report = store.store(&collections)?;
    Ok((collections, report))
}
