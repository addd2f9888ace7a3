// src/api/client.rs
//! Thin reqwest wrapper for the Strapi REST API.
//!
//! Builds `<base>/api/<route>` URLs, attaches the encoded query and hands the
//! raw body back with its status. No parsing, no retries.

use crate::constants::STRAPI_API_PREFIX;
use crate::error::AppError;
use crate::types::ValidatedUrl;
use reqwest::{header, Client, Response};

/// A reqwest client bound to one Strapi instance.
#[derive(Clone)]
pub struct StrapiHttpClient {
    client: Client,
    base_url: ValidatedUrl,
}

impl StrapiHttpClient {
    pub fn new(base_url: ValidatedUrl) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers())
            .build()?;
        Ok(Self { client, base_url })
    }

    fn create_headers() -> header::HeaderMap {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        headers
    }

    pub fn base_url(&self) -> &ValidatedUrl {
        &self.base_url
    }

    /// Full URL for a route, without the query.
    pub fn endpoint(&self, route: &str) -> String {
        self.base_url.join_segments(&[STRAPI_API_PREFIX, route])
    }
}

#[async_trait::async_trait]
impl super::StrapiTransport for StrapiHttpClient {
    async fn get(
        &self,
        route: &str,
        params: &[(String, String)],
    ) -> Result<ApiResponse<String>, AppError> {
        let url = self.endpoint(route);
        log::debug!("GET {} ({} query params)", url, params.len());

        let response = self.client.get(&url).query(params).send().await?;
        log::debug!("GET {} -> {}", route, response.status());

        extract_response_text(response).await
    }
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
    pub url: String,
}

/// Extracts the response body as text along with status and URL.
pub async fn extract_response_text(response: Response) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text().await?;

    Ok(ApiResponse {
        data: text,
        status,
        url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_api_prefix() {
        let base = ValidatedUrl::parse("http://localhost:1337/").unwrap();
        let client = StrapiHttpClient::new(base).unwrap();
        assert_eq!(client.endpoint("global"), "http://localhost:1337/api/global");
        assert_eq!(
            client.endpoint("/articles"),
            "http://localhost:1337/api/articles"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let base = ValidatedUrl::parse("https://cms.example.com/strapi").unwrap();
        let client = StrapiHttpClient::new(base).unwrap();
        assert_eq!(
            client.endpoint("landing-page"),
            "https://cms.example.com/strapi/api/landing-page"
        );
    }
}
