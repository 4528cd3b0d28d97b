//! Related-document ranking: tag overlap plus content similarity.
//!
//! For each candidate `c ≠ target`:
//!
//! ```text
//! tag_score     = tag_weight * |tags(c) ∩ tags(target)|
//! content_score = content_weight * (1 - distance)      (0 when no match)
//! total         = tag_score + content_score
//! ```
//!
//! The tag weight (default 3.0) is tuned to dominate content similarity
//! whenever topical overlap exists: the content component is bounded by
//! `content_weight` (default 2.0), so a single shared tag outranks any
//! purely textual resemblance. The content query is the target's title and
//! excerpt concatenated, matched with the related-specific threshold, a
//! separate knob from the search threshold.
//!
//! Ranking is a stable descending sort; ties keep corpus order. Candidates
//! with zero total are dropped unless [`RelatedConfig::include_zero_scores`]
//! asks for limit-filling padding.

use std::collections::HashSet;

use crate::fuzzy::distance_document;
use crate::types::{Document, FieldWeights, RelatedConfig};

/// Count of tags shared between two documents, set semantics.
fn shared_tag_count(a: &Document, b: &Document) -> usize {
    let a_tags: HashSet<&str> = a.tags.iter().map(String::as_str).collect();
    b.tags
        .iter()
        .map(String::as_str)
        .collect::<HashSet<&str>>()
        .intersection(&a_tags)
        .count()
}

/// Rank `corpus` by similarity to `target`, excluding the target itself.
///
/// Returns at most `limit` documents, best first. A corpus containing only
/// the target yields an empty vec.
pub fn find_related(
    target: &Document,
    corpus: &[Document],
    limit: usize,
    config: &RelatedConfig,
    weights: &FieldWeights,
) -> Vec<Document> {
    let content_query = format!("{} {}", target.title, target.excerpt);

    let mut scored: Vec<(f64, &Document)> = Vec::new();
    let mut zeros: Vec<&Document> = Vec::new();

    for candidate in corpus {
        if candidate.id == target.id {
            continue;
        }

        let tag_score = config.tag_weight * shared_tag_count(target, candidate) as f64;
        let content_score = distance_document(
            &content_query,
            candidate,
            weights,
            config.content_threshold,
        )
        .map_or(0.0, |d| config.content_weight * (1.0 - d));

        let total = tag_score + content_score;
        if total > 0.0 {
            scored.push((total, candidate));
        } else {
            zeros.push(candidate);
        }
    }

    // Stable sort: equal totals keep corpus order.
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

    let mut related: Vec<Document> = scored
        .into_iter()
        .take(limit)
        .map(|(_, doc)| doc.clone())
        .collect();

    if config.include_zero_scores && related.len() < limit {
        related.extend(
            zeros
                .into_iter()
                .take(limit - related.len())
                .cloned(),
        );
    }

    related
}
