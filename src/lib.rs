// src/lib.rs
//! strapi-blocks library: typed content fetching for a Strapi-backed site.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling**: `AppError`, `StrapiErrorCode`, `ValidationError`
//! - **Configuration**: `SiteConfig`, `CommandLineInput`
//! - **Population specs**: `PopulateNode`, `Relations`, `Query`, the shared definitions
//! - **Domain model**: `Block` and its variants, records, `Envelope`
//! - **Schema declarations**: components and content types as data
//! - **API client**: `StrapiTransport`, `StrapiHttpClient`, `ContentFetcher`
//! - **Collections**: `strapi_posts`, `strapi_pages`, `CollectionLoader`

pub mod analytics;
pub mod api;
pub mod collections;
pub mod config;
pub mod constants;
pub mod error;
pub mod model;
pub mod output;
pub mod pipeline;
pub mod populate;
pub mod schema;
pub mod types;

// --- Error Handling ---
pub use crate::error::{AppError, StrapiErrorCode};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{Command, CommandLineInput, SiteConfig};

// --- Population Specs ---
pub use crate::populate::audit::{audit_all, check_coverage, AuditReport, CoverageGap, GapKind};
pub use crate::populate::{
    article_populate, blocks_populate, global_populate, landing_page_populate, page_populate,
    PopulateNode, Query, Relations, Selection,
};

// --- Domain Model ---
pub use crate::model::{
    Article, ArticleSummary, Author, Banner, Block, BlockMeta, Card, ComponentType, ContentTag,
    Envelope, Footer, Global, Header, Image, LandingPage, Link, LinkType, Logo, Meta, Page,
    Pagination, RecordMeta, RelationShape, Shape,
};

// --- Domain Types ---
pub use crate::types::{ContentTypeName, DocumentId, ValidatedUrl};

// --- API Client ---
pub use crate::api::{
    parse_envelope, ApiResponse, ContentFetcher, StrapiHttpClient, StrapiTransport,
};

// --- Collections ---
pub use crate::collections::{
    strapi_pages, strapi_posts, CollectionLoader, CollectionRecord, Collections, ContentEntry,
};
