// src/api/mod.rs
//! Strapi REST interaction: the ability to read content from the backend.
//!
//! I/O lives behind [`StrapiTransport`]; parsing lives in [`parser`]; the
//! site-level fetch functions live in [`fetcher`] and depend only on the
//! trait, never on HTTP details.

pub mod client;
pub mod fetcher;
pub mod parser;

use crate::error::AppError;

pub use client::{ApiResponse, StrapiHttpClient};
pub use fetcher::ContentFetcher;
pub use parser::parse_envelope;

/// The ability to issue a GET against the Strapi REST API.
///
/// `route` is relative to `<base>/api/` (e.g. `global`, `articles`);
/// `params` are already flattened into `qs` bracket keys.
#[async_trait::async_trait]
pub trait StrapiTransport: Send + Sync {
    async fn get(
        &self,
        route: &str,
        params: &[(String, String)],
    ) -> Result<ApiResponse<String>, AppError>;
}
