// src/constants.rs
//! Domain constants that define the operational boundaries of the system.
//!
//! Each constant is named for the domain concept it constrains. Reading them
//! tells you where the backend lives, what the fetch layer asks for, and how
//! much it pulls per request.

// ---------------------------------------------------------------------------
// Strapi API boundaries
// ---------------------------------------------------------------------------

/// Base URL used when neither `--strapi-url` nor `STRAPI_URL` is set.
pub const DEFAULT_STRAPI_URL: &str = "http://localhost:1337";

/// Environment variable holding the Strapi base URL.
pub const STRAPI_URL_ENV: &str = "STRAPI_URL";

/// Path prefix under which Strapi mounts its REST API.
pub const STRAPI_API_PREFIX: &str = "api";

/// Entries requested per page when a collection loader walks pagination.
///
/// Strapi's default `maxLimit` is 100. Using it keeps round-trips down for
/// the small collections a marketing site carries.
pub const COLLECTION_PAGE_SIZE: u32 = 100;

/// Upper bound on pages a collection loader will request.
///
/// Guards against a backend that keeps reporting a growing `pageCount`.
pub const COLLECTION_MAX_PAGES: u32 = 500;

// ---------------------------------------------------------------------------
// Population policy
// ---------------------------------------------------------------------------

/// The only sub-fields ever requested for a media relation.
pub const MEDIA_FIELDS: [&str; 2] = ["url", "alternativeText"];

/// Discriminator key Strapi uses for dynamic-zone entries.
pub const COMPONENT_DISCRIMINATOR: &str = "__component";

// ---------------------------------------------------------------------------
// Local content store
// ---------------------------------------------------------------------------

/// Directory the `sync` command writes collection entries into.
pub const DEFAULT_CONTENT_DIR: &str = "src/content/strapi";

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters shown when previewing response bodies in errors.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 500;
