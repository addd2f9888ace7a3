use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// Strapi's response wrapper: `{ data: <record | records | null>, meta: {...} }`.
///
/// A body without a `data` key deserialises the same as `data: null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

impl<T> Envelope<T> {
    pub fn new(data: Option<T>) -> Self {
        Self { data, meta: None }
    }

    pub fn has_data(&self) -> bool {
        self.data.is_some()
    }

    pub fn pagination(&self) -> Option<&Pagination> {
        self.meta.as_ref().and_then(|m| m.pagination.as_ref())
    }

    /// Unwraps the payload, failing with [`AppError::MissingData`] when absent.
    pub fn into_required(self, content_type: &str) -> Result<T, AppError> {
        self.data.ok_or_else(|| AppError::MissingData {
            content_type: content_type.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

/// Page-based pagination metadata of a collection response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
    pub page_count: u32,
    pub total: u64,
}

impl Pagination {
    pub fn is_last_page(&self) -> bool {
        self.page >= self.page_count
    }
}
