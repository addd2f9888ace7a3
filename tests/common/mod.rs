// tests/common/mod.rs
//! Shared helpers: an in-memory transport serving fixture bodies.

#![allow(dead_code)]

use reqwest::StatusCode;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use strapi_blocks::{ApiResponse, AppError, ContentFetcher, StrapiTransport};

pub const GLOBAL: &str = include_str!("../fixtures/api_responses/global.json");
pub const GLOBAL_MISSING: &str = include_str!("../fixtures/api_responses/global_missing.json");
pub const LANDING_PAGE: &str = include_str!("../fixtures/api_responses/landing_page.json");
pub const ARTICLES: &str = include_str!("../fixtures/api_responses/articles.json");
pub const PAGES: &str = include_str!("../fixtures/api_responses/pages.json");
pub const NOT_FOUND: &str = include_str!("../fixtures/api_responses/not_found.json");

/// One recorded GET.
#[derive(Debug, Clone)]
pub struct Request {
    pub route: String,
    pub params: Vec<(String, String)>,
}

impl Request {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Serves queued responses per route and records every request.
///
/// The last queued response for a route is repeated; unknown routes get
/// Strapi's 404 body.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<HashMap<String, VecDeque<(StatusCode, String)>>>,
    requests: Mutex<Vec<Request>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, route: &str, status: StatusCode, body: impl Into<String>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .entry(route.to_string())
            .or_default()
            .push_back((status, body.into()));
        self
    }

    pub fn ok(self, route: &str, body: impl Into<String>) -> Self {
        self.respond(route, StatusCode::OK, body)
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl StrapiTransport for MockTransport {
    async fn get(
        &self,
        route: &str,
        params: &[(String, String)],
    ) -> Result<ApiResponse<String>, AppError> {
        self.requests.lock().unwrap().push(Request {
            route: route.to_string(),
            params: params.to_vec(),
        });

        let mut responses = self.responses.lock().unwrap();
        let (status, data) = match responses.get_mut(route) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap(),
            Some(queue) if !queue.is_empty() => queue.front().cloned().unwrap(),
            _ => (StatusCode::NOT_FOUND, NOT_FOUND.to_string()),
        };

        Ok(ApiResponse {
            data,
            status,
            url: format!("http://localhost:1337/api/{}", route),
        })
    }
}

/// A fetcher over the mock, plus a handle for inspecting requests.
pub fn fetcher(transport: MockTransport) -> (ContentFetcher, Arc<MockTransport>) {
    let transport = Arc::new(transport);
    (ContentFetcher::new(transport.clone()), transport)
}
