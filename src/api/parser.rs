// src/api/parser.rs
//! Response parsing: envelopes on success, Strapi error bodies otherwise.
//!
//! Decoding straight into the declared types is the structural check at the
//! fetch boundary. A 2xx body that does not fit is reported with a preview of
//! what came back rather than passed on half-filled.

use super::client::ApiResponse;
use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::{AppError, StrapiErrorCode};
use crate::model::Envelope;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// `{ "data": null, "error": { ... } }`
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: StrapiError,
}

#[derive(Debug, Deserialize)]
struct StrapiError {
    #[serde(default)]
    status: Option<u16>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Parses a response into an envelope of `T`.
///
/// `content_type` only labels errors.
pub fn parse_envelope<T>(
    result: ApiResponse<String>,
    content_type: &str,
) -> Result<Envelope<T>, AppError>
where
    T: DeserializeOwned,
{
    if result.status.is_success() {
        parse_success(&result.data, &result.url, content_type)
    } else {
        Err(parse_error(&result))
    }
}

fn parse_success<T>(body: &str, url: &str, content_type: &str) -> Result<Envelope<T>, AppError>
where
    T: DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        log::error!("Failed to parse {} response from {}: {}", content_type, url, e);
        AppError::ShapeMismatch {
            content_type: content_type.to_string(),
            source: e,
            body: preview(body),
        }
    })
}

fn parse_error(result: &ApiResponse<String>) -> AppError {
    let http_status = result.status.as_u16();

    if let Ok(ErrorBody { error }) = serde_json::from_str::<ErrorBody>(&result.data) {
        let code = match error.name.as_deref() {
            Some(name) => StrapiErrorCode::from_error_name(name),
            None => StrapiErrorCode::from_http_status(http_status),
        };
        return AppError::StrapiService {
            code,
            status: error.status.unwrap_or(http_status),
            message: error
                .message
                .unwrap_or_else(|| format!("HTTP {} from {}", result.status, result.url)),
        };
    }

    // Not a Strapi error body (proxy page, empty body, ...)
    log::debug!("Unstructured error body from {}: {}", result.url, preview(&result.data));
    AppError::StrapiService {
        code: StrapiErrorCode::from_http_status(http_status),
        status: http_status,
        message: format!("HTTP {} from {}", result.status, result.url),
    }
}

fn preview(body: &str) -> String {
    if body.chars().count() > ERROR_BODY_PREVIEW_LENGTH {
        let head: String = body.chars().take(ERROR_BODY_PREVIEW_LENGTH).collect();
        format!("{}...", head)
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Global;
    use reqwest::StatusCode;

    fn response(status: StatusCode, body: &str) -> ApiResponse<String> {
        ApiResponse {
            data: body.to_string(),
            status,
            url: "http://localhost:1337/api/global".to_string(),
        }
    }

    #[test]
    fn test_success_envelope() {
        let envelope: Envelope<Global> = parse_envelope(
            response(StatusCode::OK, r#"{"data": {"id": 1, "title": "Site"}, "meta": {}}"#),
            "global",
        )
        .unwrap();
        assert_eq!(envelope.data.unwrap().title.as_deref(), Some("Site"));
    }

    #[test]
    fn test_strapi_error_body() {
        let body = r#"{"data": null, "error": {"status": 403, "name": "ForbiddenError", "message": "Forbidden", "details": {}}}"#;
        let err = parse_envelope::<Global>(response(StatusCode::FORBIDDEN, body), "global")
            .unwrap_err();
        match err {
            AppError::StrapiService {
                code,
                status,
                message,
            } => {
                assert_eq!(code, StrapiErrorCode::Forbidden);
                assert_eq!(status, 403);
                assert_eq!(message, "Forbidden");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_unstructured_error_falls_back_to_status() {
        let err = parse_envelope::<Global>(
            response(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>"),
            "global",
        )
        .unwrap_err();
        match err {
            AppError::StrapiService { code, status, .. } => {
                assert_eq!(code, StrapiErrorCode::HttpStatus(502));
                assert_eq!(status, 502);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_shape_mismatch_keeps_preview() {
        let body = format!(r#"{{"data": {{"title": 42}}, "pad": "{}"}}"#, "x".repeat(600));
        let err = parse_envelope::<Global>(response(StatusCode::OK, &body), "global").unwrap_err();
        match err {
            AppError::ShapeMismatch {
                content_type,
                body,
                ..
            } => {
                assert_eq!(content_type, "global");
                assert!(body.ends_with("..."));
                assert_eq!(body.chars().count(), ERROR_BODY_PREVIEW_LENGTH + 3);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
