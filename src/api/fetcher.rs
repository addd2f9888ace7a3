// src/api/fetcher.rs
//! The site's fetch functions.
//!
//! Each call is one GET with the shared populate definition for its content
//! type. Nothing is cached or retried; transport errors propagate unchanged.

use super::{parse_envelope, StrapiTransport};
use crate::error::AppError;
use crate::model::{Envelope, Global, LandingPage};
use crate::populate::{global_populate, landing_page_populate, Query};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Fetches typed content through a [`StrapiTransport`].
#[derive(Clone)]
pub struct ContentFetcher {
    transport: Arc<dyn StrapiTransport>,
}

impl ContentFetcher {
    pub fn new(transport: Arc<dyn StrapiTransport>) -> Self {
        Self { transport }
    }

    /// GET `/api/<name>` for a single type.
    pub async fn get_single_type<T>(&self, name: &str, query: &Query) -> Result<Envelope<T>, AppError>
    where
        T: DeserializeOwned,
    {
        self.fetch(name, query).await
    }

    /// GET `/api/<plural>` for one page of a collection type.
    pub async fn get_collection<T>(
        &self,
        plural: &str,
        query: &Query,
    ) -> Result<Envelope<Vec<T>>, AppError>
    where
        T: DeserializeOwned,
    {
        self.fetch(plural, query).await
    }

    async fn fetch<T>(&self, route: &str, query: &Query) -> Result<Envelope<T>, AppError>
    where
        T: DeserializeOwned,
    {
        let params = query.to_params();
        log::debug!("fetching {} with {}", route, query.to_query_string());
        let response = self.transport.get(route, &params).await?;
        parse_envelope(response, route)
    }

    /// The site-wide `global` record.
    ///
    /// Fails with "No global data found" when the envelope carries no data.
    pub async fn get_global_page_data(&self) -> Result<Global, AppError> {
        let envelope: Envelope<Global> = self
            .get_single_type("global", &Query::populate(global_populate()))
            .await?;
        if !envelope.has_data() {
            log::warn!("global single type returned no data");
        }
        envelope.into_required("global")
    }

    /// The `landing-page` envelope, returned as-is even when `data` is absent.
    pub async fn get_landing_page_data(&self) -> Result<Envelope<LandingPage>, AppError> {
        let envelope: Envelope<LandingPage> = self
            .get_single_type("landing-page", &Query::populate(landing_page_populate()))
            .await?;
        match &envelope.data {
            Some(page) => log::info!("landing page loaded with {} block(s)", page.blocks.len()),
            None => log::warn!("landing-page single type returned no data"),
        }
        Ok(envelope)
    }
}
