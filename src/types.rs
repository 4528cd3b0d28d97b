// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a content-discovery query.
//!
//! These types define how documents, field weights, and result pages fit
//! together. Everything here is a plain value: queries receive an immutable
//! corpus snapshot, build transient score tables, and return owned results.
//! Nothing survives between calls.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **FieldWeights**: every weight is `>= 0`, at least one is `> 0`.
//!   Weights are static configuration, never derived from corpus data.
//! - **ResultPage**: `items.len() <= limit ∧ total >= items.len()`.
//!   Page numbering is 1-based; `total_pages = ceil(total / limit)`.
//! - **Scores**: match scores order candidates within one query only.
//!   Comparing scores across queries is meaningless.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// DOCUMENT
// =============================================================================

/// A blog post or research paper record, owned by the external store.
///
/// The core reads immutable snapshots and never mutates documents. `tags`
/// keep their stored order but are treated with set semantics wherever they
/// are compared or deduplicated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Unique, stable identifier.
    pub id: String,
    /// Human-readable identifier, blog-style ("attention-is-all-you-need").
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub body: String,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub published_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// FIELD WEIGHTS
// =============================================================================

/// Per-field weights for the fuzzy matcher.
///
/// A weight of zero removes the field from scoring entirely. Defaults rank
/// title matches highest and body matches lowest:
/// title (3.0) > excerpt (2.0) = tags (2.0) > body (1.0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldWeights {
    pub title: f64,
    pub excerpt: f64,
    pub body: f64,
    pub tags: f64,
}

impl Default for FieldWeights {
    fn default() -> Self {
        FieldWeights {
            title: 3.0,
            excerpt: 2.0,
            body: 1.0,
            tags: 2.0,
        }
    }
}

// =============================================================================
// SORTING
// =============================================================================

/// Fields a result set can be sorted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Title,
    PublishedAt,
    UpdatedAt,
}

impl SortField {
    /// The direction used when a caller names a field but no direction.
    ///
    /// Time-ordered fields default to newest-first; title defaults to
    /// ascending. Encoded here once so call sites cannot disagree.
    pub fn default_direction(self) -> SortDirection {
        match self {
            SortField::Title => SortDirection::Ascending,
            SortField::PublishedAt | SortField::UpdatedAt => SortDirection::Descending,
        }
    }
}

impl std::str::FromStr for SortField {
    type Err = crate::QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(SortField::Title),
            "publishedAt" | "published_at" => Ok(SortField::PublishedAt),
            "updatedAt" | "updated_at" => Ok(SortField::UpdatedAt),
            other => Err(crate::QueryError::invalid(format!(
                "unknown sort field '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// A requested ordering: field plus optional direction.
///
/// `direction: None` means "use the field's default direction".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortSpec {
    pub field: SortField,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<SortDirection>,
}

impl SortSpec {
    pub fn new(field: SortField) -> Self {
        SortSpec {
            field,
            direction: None,
        }
    }

    /// The effective direction after applying the field default.
    pub fn effective_direction(&self) -> SortDirection {
        self.direction.unwrap_or(self.field.default_direction())
    }
}

// =============================================================================
// QUERY FILTER
// =============================================================================

/// What to keep from the corpus before sorting and pagination.
///
/// Precedence when several are set: text search narrows first, then the tag
/// and category filters intersect exactly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl QueryFilter {
    pub fn text(query: impl Into<String>) -> Self {
        QueryFilter {
            text: Some(query.into()),
            ..QueryFilter::default()
        }
    }

    pub fn tag(tag: impl Into<String>) -> Self {
        QueryFilter {
            tag: Some(tag.into()),
            ..QueryFilter::default()
        }
    }
}

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Knobs for related-document ranking.
///
/// The content-similarity threshold is deliberately independent from the
/// main search threshold; the two tune different recall problems.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedConfig {
    /// Normalized-distance cutoff for the content-similarity sub-search.
    pub content_threshold: f64,
    /// Weight of each shared tag.
    pub tag_weight: f64,
    /// Weight of the content-similarity component.
    pub content_weight: f64,
    /// When fewer than `limit` candidates score above zero, pad the tail
    /// with zero-score candidates in corpus order. Off by default: an empty
    /// related list is more honest than an arbitrary one.
    pub include_zero_scores: bool,
}

impl Default for RelatedConfig {
    fn default() -> Self {
        RelatedConfig {
            content_threshold: 0.6,
            tag_weight: 3.0,
            content_weight: 2.0,
            include_zero_scores: false,
        }
    }
}

/// Top-level configuration for the query engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchConfig {
    pub weights: FieldWeights,
    /// Normalized-distance cutoff for free-text search. Tunable default;
    /// 0.4 keeps one-or-two-typo matches and drops everything vaguer.
    #[serde(default = "default_search_threshold")]
    pub search_threshold: f64,
    pub related: RelatedConfig,
}

fn default_search_threshold() -> f64 {
    0.4
}

impl SearchConfig {
    pub fn new() -> Self {
        SearchConfig {
            weights: FieldWeights::default(),
            search_threshold: default_search_threshold(),
            related: RelatedConfig::default(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig::new()
    }
}

// =============================================================================
// RESULT PAGE
// =============================================================================

/// One page of query results plus total-count metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultPage {
    pub items: Vec<Document>,
    /// Count of all matches, not just this page.
    pub total: usize,
    /// 1-based page number as requested.
    pub page: usize,
    pub limit: usize,
    /// `ceil(total / limit)`; zero for an empty result set.
    pub total_pages: usize,
}

impl ResultPage {
    /// Assemble a page from the full ordered match list.
    ///
    /// `skip = (page - 1) * limit`; a skip past the end yields an empty item
    /// list with the correct total, which callers treat as "no more pages".
    /// Saturating: any positive page is valid, however large.
    pub fn paginate(matches: Vec<Document>, page: usize, limit: usize) -> Self {
        let total = matches.len();
        let total_pages = total.div_ceil(limit);
        let skip = (page - 1).saturating_mul(limit);
        let items: Vec<Document> = matches.into_iter().skip(skip).take(limit).collect();
        ResultPage {
            items,
            total,
            page,
            limit,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::make_doc;
    use std::str::FromStr;

    #[test]
    fn sort_field_parses_both_casings() {
        assert_eq!(SortField::from_str("title").unwrap(), SortField::Title);
        assert_eq!(
            SortField::from_str("publishedAt").unwrap(),
            SortField::PublishedAt
        );
        assert_eq!(
            SortField::from_str("updated_at").unwrap(),
            SortField::UpdatedAt
        );
    }

    #[test]
    fn unknown_sort_field_is_invalid_argument() {
        let err = SortField::from_str("popularity").unwrap_err();
        assert!(matches!(err, crate::QueryError::InvalidArgument { .. }));
    }

    #[test]
    fn time_fields_default_descending_title_ascending() {
        assert_eq!(
            SortField::PublishedAt.default_direction(),
            SortDirection::Descending
        );
        assert_eq!(
            SortField::UpdatedAt.default_direction(),
            SortDirection::Descending
        );
        assert_eq!(
            SortField::Title.default_direction(),
            SortDirection::Ascending
        );
    }

    #[test]
    fn paginate_respects_limit_and_total() {
        let docs: Vec<Document> = (0..5)
            .map(|i| make_doc(&format!("d{}", i), &format!("Doc {}", i), "", &[]))
            .collect();

        let page = ResultPage::paginate(docs.clone(), 1, 2);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total, 5);
        assert_eq!(page.total_pages, 3);

        let last = ResultPage::paginate(docs.clone(), 3, 2);
        assert_eq!(last.items.len(), 1);

        let past_end = ResultPage::paginate(docs, 4, 2);
        assert!(past_end.items.is_empty());
        assert_eq!(past_end.total, 5);
    }

    #[test]
    fn paginate_huge_page_is_empty_not_overflow() {
        let docs: Vec<Document> = (0..3)
            .map(|i| make_doc(&format!("d{}", i), &format!("Doc {}", i), "", &[]))
            .collect();

        // skip computation must saturate, not wrap back into range
        let page = ResultPage::paginate(docs, usize::MAX, 2);
        assert!(page.items.is_empty());
        assert_eq!(page.total, 3);
        assert_eq!(page.page, usize::MAX);
    }

    #[test]
    fn result_page_serializes_camel_case() {
        let page = ResultPage::paginate(Vec::new(), 1, 10);
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["totalPages"], 0);
        assert_eq!(json["total"], 0);
        assert!(json["items"].as_array().unwrap().is_empty());
    }
}
