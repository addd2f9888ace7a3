// src/error.rs
//! Application error types with structured error handling.
//!
//! The fetch layer has a deliberately small failure vocabulary: absent
//! payloads, transport failures, backend error envelopes and responses whose
//! shape does not match the declared types.

use std::fmt;
use thiserror::Error;

/// Strapi error names as a typed vocabulary.
///
/// Strapi reports failures as `{ "error": { "name": "NotFoundError", ... } }`.
/// Matching on this enum instead of raw strings keeps callers honest about
/// which cases they handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrapiErrorCode {
    /// The requested single type or entry does not exist (or is unpublished)
    NotFound,
    /// The public role / token lacks `find` permission for this content type
    Forbidden,
    /// Authentication required or rejected
    Unauthorized,
    /// Query parameters were rejected (e.g. an unknown populate key)
    Validation,
    /// Generic application-level failure raised by a controller or service
    Application,
    /// Too many requests
    RateLimited,
    /// Strapi internal server error
    InternalServer,
    /// HTTP status code fallback when the error body is unparseable
    HttpStatus(u16),
    /// An error name this client doesn't recognize yet
    Unknown(String),
}

impl StrapiErrorCode {
    /// Parse the `error.name` field of a Strapi error body.
    pub fn from_error_name(name: &str) -> Self {
        match name {
            "NotFoundError" => Self::NotFound,
            "ForbiddenError" | "PolicyError" => Self::Forbidden,
            "UnauthorizedError" => Self::Unauthorized,
            "ValidationError" => Self::Validation,
            "ApplicationError" => Self::Application,
            "RateLimitError" => Self::RateLimited,
            "InternalServerError" => Self::InternalServer,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Create from an HTTP status code when the error body is unparseable.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            404 => Self::NotFound,
            403 => Self::Forbidden,
            401 => Self::Unauthorized,
            429 => Self::RateLimited,
            other => Self::HttpStatus(other),
        }
    }

    /// Whether this error means the content simply doesn't exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

impl fmt::Display for StrapiErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "NotFoundError"),
            Self::Forbidden => write!(f, "ForbiddenError"),
            Self::Unauthorized => write!(f, "UnauthorizedError"),
            Self::Validation => write!(f, "ValidationError"),
            Self::Application => write!(f, "ApplicationError"),
            Self::RateLimited => write!(f, "RateLimitError"),
            Self::InternalServer => write!(f, "InternalServerError"),
            Self::HttpStatus(code) => write!(f, "http_{}", code),
            Self::Unknown(name) => write!(f, "{}", name),
        }
    }
}

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// The envelope came back with `data: null` or without `data` at all.
    #[error("No {content_type} data found")]
    MissingData { content_type: String },

    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("Strapi returned an error ({code}, HTTP {status}): {message}")]
    StrapiService {
        code: StrapiErrorCode,
        status: u16,
        message: String,
    },

    /// A 2xx body that does not match the declared type for its content type.
    #[error("Response for {content_type} does not match the expected shape: {source}\nBody: {body}")]
    ShapeMismatch {
        content_type: String,
        #[source]
        source: serde_json::Error,
        body: String,
    },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Filesystem IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Populate audit failed with {} issue(s):\n{}", issues.len(), issues.join("\n"))]
    AuditFailed { issues: Vec<String> },

    #[error("Output delivery failed: {}", failures.join(", "))]
    DeliveryFailed { failures: Vec<String> },

    #[error(transparent)]
    Validation(#[from] crate::types::ValidationError),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedResponse(err.to_string())
    }
}

impl AppError {
    /// Whether this error reports absent content rather than a broken request.
    pub fn is_missing_content(&self) -> bool {
        match self {
            AppError::MissingData { .. } => true,
            AppError::StrapiService { code, .. } => code.is_not_found(),
            _ => false,
        }
    }
}

/// Result type alias for convenience
pub type Result<T, E = AppError> = std::result::Result<T, E>;
