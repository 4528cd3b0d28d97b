//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use chrono::{DateTime, TimeZone, Utc};

use crate::types::Document;

/// Deterministic timestamp offset by `days` from a fixed epoch.
///
/// Tests rely on byte-identical output across runs, so no `Utc::now()`.
pub fn ts(days: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + chrono::Duration::days(days)
}

/// Create a test document. `id` doubles as the slug.
///
/// This is the canonical implementation used across all tests.
pub fn make_doc(id: &str, title: &str, body: &str, tags: &[&str]) -> Document {
    Document {
        id: id.to_string(),
        slug: id.to_string(),
        title: title.to_string(),
        excerpt: format!("Excerpt for {}", title),
        body: body.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        category: None,
        published_at: ts(0),
        updated_at: ts(0),
    }
}

/// Create a test document with explicit excerpt and publish day.
pub fn make_doc_full(
    id: &str,
    title: &str,
    excerpt: &str,
    body: &str,
    tags: &[&str],
    published_day: i64,
) -> Document {
    Document {
        id: id.to_string(),
        slug: id.to_string(),
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        body: body.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        category: None,
        published_at: ts(published_day),
        updated_at: ts(published_day),
    }
}

/// Create a test document with a category.
pub fn make_doc_with_category(id: &str, title: &str, category: &str) -> Document {
    let mut doc = make_doc(id, title, "", &[]);
    doc.category = Some(category.to_string());
    doc
}
