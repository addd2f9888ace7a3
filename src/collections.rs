// src/collections.rs
//! Content collection loaders.
//!
//! A loader pulls every entry of one collection type, walking Strapi's
//! page-based pagination, and keys each entry by its document id so it can be
//! stored as a local content entry.

use crate::api::ContentFetcher;
use crate::constants::{COLLECTION_MAX_PAGES, COLLECTION_PAGE_SIZE};
use crate::error::AppError;
use crate::model::{Article, Page, RecordMeta};
use crate::populate::{article_populate, page_populate, Query};
use crate::schema;
use crate::types::ContentTypeName;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;

/// A record type that can be stored as a collection entry.
pub trait CollectionRecord: DeserializeOwned + Serialize + Send {
    fn record_meta(&self) -> &RecordMeta;
}

impl CollectionRecord for Article {
    fn record_meta(&self) -> &RecordMeta {
        &self.meta
    }
}

impl CollectionRecord for Page {
    fn record_meta(&self) -> &RecordMeta {
        &self.meta
    }
}

/// One loaded entry: its key in the content store and the record itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentEntry<T> {
    pub id: String,
    pub data: T,
}

/// Loads every entry of one collection type with a fixed populate tree.
#[derive(Debug, Clone)]
pub struct CollectionLoader<T> {
    /// Name of the local collection (`strapiPosts`, `strapiPages`).
    pub name: &'static str,
    /// Singular content type name (`article`, `page`).
    pub content_type: &'static str,
    pub query: Query,
    _record: PhantomData<fn() -> T>,
}

/// Articles, with featured image, author image, tags and blocks.
pub fn strapi_posts() -> CollectionLoader<Article> {
    CollectionLoader::new("strapiPosts", "article", Query::populate(article_populate()))
}

/// Pages, with blocks.
pub fn strapi_pages() -> CollectionLoader<Page> {
    CollectionLoader::new("strapiPages", "page", Query::populate(page_populate()))
}

impl<T: CollectionRecord> CollectionLoader<T> {
    pub fn new(name: &'static str, content_type: &'static str, query: Query) -> Self {
        Self {
            name,
            content_type,
            query,
            _record: PhantomData,
        }
    }

    /// REST route for the collection, e.g. `articles`.
    ///
    /// Declared content types use their plural name; anything else is
    /// pluralised from the validated singular name.
    pub fn route(&self) -> Result<String, AppError> {
        if let Some(declared) = schema::content_type(self.content_type) {
            return Ok(declared.route().to_string());
        }
        Ok(ContentTypeName::new(self.content_type)?.pluralize())
    }

    /// Fetches every page of the collection.
    pub async fn load(&self, fetcher: &ContentFetcher) -> Result<Vec<ContentEntry<T>>, AppError> {
        let route = self.route()?;
        let mut records = Vec::new();
        let mut page = 1u32;

        loop {
            let query = self.query.clone().with_page(page, COLLECTION_PAGE_SIZE);
            let envelope = fetcher.get_collection::<T>(&route, &query).await?;
            let pagination = envelope.pagination().copied();
            records.extend(envelope.data.unwrap_or_default());

            match pagination {
                Some(p) if !p.is_last_page() => {}
                _ => break,
            }
            if page >= COLLECTION_MAX_PAGES {
                log::warn!(
                    "{}: stopped after {} pages, backend still reports more",
                    self.name,
                    COLLECTION_MAX_PAGES
                );
                break;
            }
            page += 1;
        }

        let entries = key_entries(self.name, records);
        log::info!("{}: loaded {} entries", self.name, entries.len());
        Ok(entries)
    }
}

fn key_entries<T: CollectionRecord>(collection: &str, records: Vec<T>) -> Vec<ContentEntry<T>> {
    records
        .into_iter()
        .filter_map(|record| match record.record_meta().entry_key() {
            Some(id) => Some(ContentEntry { id, data: record }),
            None => {
                log::warn!("{}: skipping entry with neither documentId nor id", collection);
                None
            }
        })
        .collect()
}

/// Both site collections, loaded together.
#[derive(Debug, Clone, Default)]
pub struct Collections {
    pub posts: Vec<ContentEntry<Article>>,
    pub pages: Vec<ContentEntry<Page>>,
}

impl Collections {
    pub async fn load(fetcher: &ContentFetcher) -> Result<Self, AppError> {
        let posts_loader = strapi_posts();
        let pages_loader = strapi_pages();
        let (posts, pages) = tokio::try_join!(posts_loader.load(fetcher), pages_loader.load(fetcher))?;
        Ok(Self { posts, pages })
    }

    pub fn len(&self) -> usize {
        self.posts.len() + self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DocumentId;

    #[test]
    fn test_loaders_target_their_routes() {
        assert_eq!(strapi_posts().route().unwrap(), "articles");
        assert_eq!(strapi_pages().route().unwrap(), "pages");
        assert_eq!(strapi_posts().name, "strapiPosts");
        assert_eq!(strapi_pages().content_type, "page");
    }

    #[test]
    fn test_undeclared_collection_routes() {
        let categories: CollectionLoader<Page> =
            CollectionLoader::new("categories", "category", Query::default());
        assert_eq!(categories.route().unwrap(), "categories");

        let invalid: CollectionLoader<Page> =
            CollectionLoader::new("bad", "Bad Name", Query::default());
        assert!(matches!(invalid.route(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_loader_queries_use_shared_populate() {
        assert_eq!(strapi_posts().query.populate, article_populate());
        assert_eq!(strapi_pages().query.populate, page_populate());
        assert!(strapi_posts().query.pagination.is_none());
    }

    #[test]
    fn test_entries_keyed_by_document_id_then_id() {
        let mut with_document = Page::default();
        with_document.meta.document_id = Some(DocumentId::parse("abc123").unwrap());
        with_document.meta.id = Some(1);
        let mut with_id = Page::default();
        with_id.meta.id = Some(7);
        let anonymous = Page::default();

        let entries = key_entries("strapiPages", vec![with_document, with_id, anonymous]);
        let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["abc123", "7"]);
    }
}
