//! The document-store boundary and the public facade over it.
//!
//! The core owns no persistence. [`ContentStore`] is the narrow contract a
//! host application implements, typically a thin wrapper over whatever
//! database or CMS holds the documents. Store failures surface as
//! [`QueryError::StoreUnavailable`] and propagate unchanged: the core knows
//! nothing about the store's retry policy, so it neither retries nor
//! suppresses.
//!
//! [`Catalog`] is what the surrounding application calls. Every method
//! fetches a fresh corpus snapshot, runs the pure query pipeline over it,
//! and returns owned results. Nothing is cached between calls.

use tracing::debug;

use crate::engine::run_query;
use crate::error::QueryError;
use crate::related::find_related;
use crate::tags::extract_tags;
use crate::types::{Document, QueryFilter, ResultPage, SearchConfig, SortSpec};

/// Optional narrowing applied by the store itself before documents reach
/// the core (e.g. "published only"). Opaque to the query pipeline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreFilter {
    pub category: Option<String>,
}

/// The external document store, as seen by the core.
pub trait ContentStore {
    /// Full or store-filtered corpus fetch; the candidate pool for scoring.
    fn list_all(&self, filter: Option<&StoreFilter>) -> Result<Vec<Document>, QueryError>;

    /// Lookup by stable identifier. `Ok(None)` means the document does not
    /// exist; `Err` is reserved for store failures.
    fn get_by_id(&self, id: &str) -> Result<Option<Document>, QueryError>;

    /// Lookup by human-readable slug.
    fn get_by_slug(&self, slug: &str) -> Result<Option<Document>, QueryError>;
}

/// Content-discovery facade: free-text search, tag filtering, related
/// documents, and general paginated listing over a [`ContentStore`].
///
/// Holds only configuration; every call is independent and safe to issue
/// concurrently.
#[derive(Debug, Clone)]
pub struct Catalog<S> {
    store: S,
    config: SearchConfig,
}

impl<S: ContentStore> Catalog<S> {
    pub fn new(store: S) -> Self {
        Catalog {
            store,
            config: SearchConfig::new(),
        }
    }

    pub fn with_config(store: S, config: SearchConfig) -> Self {
        Catalog { store, config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Free-text fuzzy search, best match first.
    pub fn search(&self, query: &str, page: usize, limit: usize) -> Result<ResultPage, QueryError> {
        let corpus = self.store.list_all(None)?;
        run_query(
            &corpus,
            &QueryFilter::text(query),
            None,
            page,
            limit,
            &self.config,
        )
    }

    /// Documents carrying `tag`, newest first.
    pub fn list_by_tag(
        &self,
        tag: &str,
        page: usize,
        limit: usize,
    ) -> Result<ResultPage, QueryError> {
        let corpus = self.store.list_all(None)?;
        run_query(
            &corpus,
            &QueryFilter::tag(tag),
            None,
            page,
            limit,
            &self.config,
        )
    }

    /// All distinct tags in the corpus, sorted ascending.
    pub fn list_tags(&self) -> Result<Vec<String>, QueryError> {
        let corpus = self.store.list_all(None)?;
        Ok(extract_tags(&corpus))
    }

    /// Documents most similar to `document_id`, best first.
    ///
    /// A missing target is [`QueryError::NotFound`], distinct from an empty
    /// result, which means the target exists but nothing relates to it.
    pub fn related_to(&self, document_id: &str, limit: usize) -> Result<Vec<Document>, QueryError> {
        if limit == 0 {
            return Err(QueryError::invalid("limit must be >= 1"));
        }
        let target = self
            .store
            .get_by_id(document_id)?
            .ok_or_else(|| QueryError::NotFound {
                id: document_id.to_string(),
            })?;
        let corpus = self.store.list_all(None)?;

        let related = find_related(
            &target,
            &corpus,
            limit,
            &self.config.related,
            &self.config.weights,
        );
        debug!(doc_id = %document_id, count = related.len(), "related documents resolved");
        Ok(related)
    }

    /// General paginated listing: any filter combination plus explicit sort.
    pub fn list_page(
        &self,
        filter: &QueryFilter,
        sort: Option<SortSpec>,
        page: usize,
        limit: usize,
    ) -> Result<ResultPage, QueryError> {
        let corpus = self.store.list_all(None)?;
        run_query(&corpus, filter, sort, page, limit, &self.config)
    }

    /// Lookup by slug with a typed NotFound.
    pub fn get_by_slug(&self, slug: &str) -> Result<Document, QueryError> {
        self.store
            .get_by_slug(slug)?
            .ok_or_else(|| QueryError::NotFound {
                id: slug.to_string(),
            })
    }
}

/// In-memory store over a fixed document list.
///
/// The reference [`ContentStore`] implementation; also what the tests use.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    documents: Vec<Document>,
}

impl InMemoryStore {
    pub fn new(documents: Vec<Document>) -> Self {
        InMemoryStore { documents }
    }
}

impl ContentStore for InMemoryStore {
    fn list_all(&self, filter: Option<&StoreFilter>) -> Result<Vec<Document>, QueryError> {
        let docs = match filter.and_then(|f| f.category.as_deref()) {
            Some(category) => self
                .documents
                .iter()
                .filter(|d| d.category.as_deref() == Some(category))
                .cloned()
                .collect(),
            None => self.documents.clone(),
        };
        Ok(docs)
    }

    fn get_by_id(&self, id: &str) -> Result<Option<Document>, QueryError> {
        Ok(self.documents.iter().find(|d| d.id == id).cloned())
    }

    fn get_by_slug(&self, slug: &str) -> Result<Option<Document>, QueryError> {
        Ok(self.documents.iter().find(|d| d.slug == slug).cloned())
    }
}
