use thiserror::Error;

mod domain_types;
mod ids;

pub use domain_types::*;
pub use ids::*;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid document ID: {0}")]
    InvalidDocumentId(String),

    #[error("Invalid URL: {url} - {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Empty required field: {0}")]
    EmptyField(&'static str),

    #[error("Invalid content type name: {name} - {reason}")]
    InvalidContentType { name: String, reason: String },

    #[error("Unknown component: {0}")]
    UnknownComponent(String),
}
