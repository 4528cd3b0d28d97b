//! Content discovery for document collections: fuzzy search, tag filtering,
//! related-document ranking, and paginated listing.
//!
//! The crate is a pure library. It consumes a document store through the
//! narrow [`ContentStore`] trait and owns no persistence, no network surface,
//! and no index state: every query builds its transient score tables over an
//! immutable corpus snapshot and discards them with the response.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐     ┌────────────┐     ┌─────────────┐
//! │  fuzzy.rs  │     │  tags.rs   │     │ related.rs  │
//! │ (tokenized │     │ (extract,  │     │ (tag overlap│
//! │  matcher)  │     │  filter)   │     │  + content) │
//! └─────┬──────┘     └─────┬──────┘     └──────┬──────┘
//!       │                  │                   │
//!       ▼                  ▼                   │
//! ┌─────────────────────────────┐              │
//! │          engine.rs          │              │
//! │  (filter → sort → paginate) │              │
//! └─────────────┬───────────────┘              │
//!               ▼                              ▼
//! ┌─────────────────────────────────────────────────┐
//! │                    store.rs                     │
//! │   (ContentStore trait, Catalog facade:          │
//! │    search / list_by_tag / list_tags /           │
//! │    related_to / list_page)                      │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use sift::{Catalog, InMemoryStore, Document};
//! use chrono::{TimeZone, Utc};
//!
//! let when = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//! let docs = vec![Document {
//!     id: "attention".into(),
//!     slug: "attention-is-all-you-need".into(),
//!     title: "Attention Is All You Need".into(),
//!     excerpt: "The transformer architecture".into(),
//!     body: "We propose a new architecture based solely on attention.".into(),
//!     tags: vec!["nlp".into(), "transformers".into()],
//!     category: None,
//!     published_at: when,
//!     updated_at: when,
//! }];
//!
//! let catalog = Catalog::new(InMemoryStore::new(docs));
//! let page = catalog.search("transformer", 1, 10)?;
//! assert_eq!(page.total, 1);
//! # Ok::<(), sift::QueryError>(())
//! ```
//!
//! # Determinism
//!
//! All sorts are stable and all tie-breaks fall back to corpus order, so
//! identical inputs over an unchanged corpus produce byte-identical output.
//! Match scores only order candidates within a single query; comparing them
//! across queries is meaningless.

// Module declarations
mod engine;
mod error;
mod fuzzy;
mod related;
mod store;
mod tags;
mod types;
mod utils;

#[doc(hidden)]
pub mod testing;

// Re-exports for public API
pub use engine::run_query;
pub use error::QueryError;
pub use fuzzy::{distance_document, score_document, token_distance};
pub use related::find_related;
pub use store::{Catalog, ContentStore, InMemoryStore, StoreFilter};
pub use tags::{extract_tags, filter_by_tag};
pub use types::{
    Document, FieldWeights, QueryFilter, RelatedConfig, ResultPage, SearchConfig, SortDirection,
    SortField, SortSpec,
};
pub use utils::{normalize, tokenize};
