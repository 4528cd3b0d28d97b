//! The paginated query engine: filter, sort, paginate.
//!
//! One entry point, [`run_query`], applies the pipeline in a fixed order:
//!
//! 1. validate arguments (`page >= 1`, `limit >= 1`, non-empty filters)
//! 2. text search narrows the corpus (fuzzy score above threshold), best
//!    match first
//! 3. tag and category filters intersect exactly
//! 4. stable sort on the requested field
//! 5. `skip = (page - 1) * limit`, take `limit`
//!
//! Every sort in this module is stable, so equal keys keep corpus order and
//! repeated queries over an unchanged corpus are byte-identical.
//!
//! When no sort is requested, a text query keeps its relevance order and a
//! non-text query falls back to `published_at` descending.

use tracing::debug;

use crate::error::QueryError;
use crate::fuzzy::score_document;
use crate::tags::filter_by_tag;
use crate::types::{
    Document, QueryFilter, ResultPage, SearchConfig, SortDirection, SortField, SortSpec,
};

/// Validate 1-based page and limit.
fn validate_paging(page: usize, limit: usize) -> Result<(), QueryError> {
    if page == 0 {
        return Err(QueryError::invalid("page must be >= 1"));
    }
    if limit == 0 {
        return Err(QueryError::invalid("limit must be >= 1"));
    }
    Ok(())
}

/// Narrow the corpus to fuzzy matches, ordered best-first.
///
/// The sort is stable on the (inverted) score, so equally scored documents
/// keep their corpus order.
fn text_search(corpus: &[Document], query: &str, config: &SearchConfig) -> Vec<Document> {
    let mut scored: Vec<(f64, &Document)> = corpus
        .iter()
        .filter_map(|doc| {
            score_document(query, doc, &config.weights, config.search_threshold)
                .map(|score| (score, doc))
        })
        .collect();

    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    scored.into_iter().map(|(_, doc)| doc.clone()).collect()
}

/// Stable sort in place on the requested field and direction.
fn sort_documents(documents: &mut [Document], sort: SortSpec) {
    let descending = sort.effective_direction() == SortDirection::Descending;
    match sort.field {
        SortField::Title => documents.sort_by(|a, b| {
            let ord = a.title.cmp(&b.title);
            if descending { ord.reverse() } else { ord }
        }),
        SortField::PublishedAt => documents.sort_by(|a, b| {
            let ord = a.published_at.cmp(&b.published_at);
            if descending { ord.reverse() } else { ord }
        }),
        SortField::UpdatedAt => documents.sort_by(|a, b| {
            let ord = a.updated_at.cmp(&b.updated_at);
            if descending { ord.reverse() } else { ord }
        }),
    }
}

/// Run a full query over a corpus snapshot.
///
/// The corpus is a read-only value for the duration of the call; all score
/// tables are transient. See the module docs for pipeline order.
pub fn run_query(
    corpus: &[Document],
    filter: &QueryFilter,
    sort: Option<SortSpec>,
    page: usize,
    limit: usize,
    config: &SearchConfig,
) -> Result<ResultPage, QueryError> {
    validate_paging(page, limit)?;

    let text_query = match &filter.text {
        Some(t) if t.trim().is_empty() => {
            return Err(QueryError::invalid("text filter must be non-empty"));
        }
        Some(t) => Some(t.as_str()),
        None => None,
    };
    if let Some(category) = &filter.category {
        if category.trim().is_empty() {
            return Err(QueryError::invalid("category filter must be non-empty"));
        }
    }

    // Text search first: it both narrows and ranks.
    let mut matches: Vec<Document> = match text_query {
        Some(query) => text_search(corpus, query, config),
        None => corpus.to_vec(),
    };

    // Exact-match intersections preserve the order established above.
    if let Some(tag) = &filter.tag {
        let kept: std::collections::HashSet<String> = filter_by_tag(&matches, tag)?
            .into_iter()
            .map(|d| d.id.clone())
            .collect();
        matches.retain(|d| kept.contains(&d.id));
    }
    if let Some(category) = &filter.category {
        matches.retain(|d| d.category.as_deref() == Some(category.as_str()));
    }

    match sort {
        Some(spec) => sort_documents(&mut matches, spec),
        // Relevance order already holds for text queries; everything else
        // defaults to newest-first.
        None if text_query.is_none() => {
            sort_documents(&mut matches, SortSpec::new(SortField::PublishedAt));
        }
        None => {}
    }

    debug!(
        total = matches.len(),
        page,
        limit,
        has_text = text_query.is_some(),
        "query resolved"
    );

    Ok(ResultPage::paginate(matches, page, limit))
}
