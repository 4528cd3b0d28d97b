// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tokenized fuzzy matching over weighted document fields.
//!
//! The matcher answers one question: how close is this query to this
//! document? Distance is normalized Levenshtein on tokens, `edits /
//! max(len_a, len_b)`, so 0.0 is an exact match and 1.0 shares nothing.
//! Matching is order-insensitive: each query token independently finds its
//! best counterpart among a field's tokens, so "networks neural" matches
//! "neural networks" as well as the other way around.
//!
//! A field passes when its mean per-token distance is below the threshold.
//! Passing fields contribute `weight * (1 - distance)` to an accumulator,
//! which is divided by the sum of all populated nonzero weights ("active
//! weights") to produce a composite in [0, 1]. A document matching on one
//! of four populated fields therefore scores below one matching on all four.
//!
//! Everything here is a pure function over its inputs; no state survives a
//! call.

use crate::types::{Document, FieldWeights};
use crate::utils::tokenize;

/// The edit-distance lower bound: `|len(a) - len(b)|`.
///
/// If two strings differ in length by more than the budget implied by the
/// threshold, skip the O(nm) DP entirely. This catches most non-matches
/// before allocating anything.
fn length_gap(a_len: usize, b_len: usize) -> usize {
    a_len.abs_diff(b_len)
}

/// Levenshtein distance between `a` and `b`, or `None` once it provably
/// exceeds `max`.
///
/// Bounded DP with two early exits:
/// 1. If the length difference exceeds `max`, return `None` immediately
/// 2. If the minimum row value exceeds `max`, abandon the DP early
///
/// Uses character counts, not byte lengths, for Unicode correctness.
fn levenshtein_bounded(a: &str, b: &str, max: usize) -> Option<usize> {
    let a_len = a.chars().count();
    let b_len = b.chars().count();

    if length_gap(a_len, b_len) > max {
        return None;
    }
    if a_len == 0 {
        return Some(b_len);
    }
    if b_len == 0 {
        return Some(a_len);
    }

    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        let mut min_row = dp[0];

        for (j, bc) in b.chars().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
            if dp[j + 1] < min_row {
                min_row = dp[j + 1];
            }
        }

        if min_row > max {
            return None;
        }
    }

    (dp[b_len] <= max).then_some(dp[b_len])
}

/// Normalized distance between two tokens: `edits / max(char_len)`.
///
/// 0.0 = identical, 1.0 = nothing in common. `threshold` bounds the DP: any
/// pair whose normalized distance would reach it returns `None` instead.
pub fn token_distance(a: &str, b: &str, threshold: f64) -> Option<f64> {
    let a_len = a.chars().count();
    let b_len = b.chars().count();
    let longest = a_len.max(b_len);
    if longest == 0 {
        return None;
    }

    // Edit budget implied by the threshold; strict inequality, so the
    // budget is the largest edit count with distance < threshold.
    let max_edits = (threshold * longest as f64).ceil() as usize;
    let max_edits = max_edits.saturating_sub(1).min(longest);

    let edits = levenshtein_bounded(a, b, max_edits)?;
    let distance = edits as f64 / longest as f64;
    (distance < threshold).then_some(distance)
}

/// Distance from the query to one field's token list.
///
/// Each query token takes its best (minimum) distance against the field's
/// tokens, independent of position. The field distance is the mean of those
/// bests; an unmatched query token counts as 1.0. `None` when the mean
/// reaches the threshold.
fn field_distance(query_tokens: &[String], field_tokens: &[String], threshold: f64) -> Option<f64> {
    if query_tokens.is_empty() || field_tokens.is_empty() {
        return None;
    }

    let mut sum = 0.0;
    for q in query_tokens {
        let best = field_tokens
            .iter()
            .filter_map(|t| token_distance(q, t, threshold))
            .fold(f64::INFINITY, f64::min);
        sum += if best.is_finite() { best } else { 1.0 };
    }

    let mean = sum / query_tokens.len() as f64;
    (mean < threshold).then_some(mean)
}

/// Composite match score for a document, or `None` for no match.
///
/// Higher is better; range (0, 1]. `None` covers three cases the caller
/// must not rank: an effectively empty query, a document with no populated
/// field under a nonzero weight, and no field passing the threshold.
pub fn score_document(
    query: &str,
    doc: &Document,
    weights: &FieldWeights,
    threshold: f64,
) -> Option<f64> {
    let query_tokens = tokenize(query);
    if query_tokens.is_empty() {
        return None;
    }

    let tags_joined = doc.tags.join(" ");
    let fields: [(&str, f64); 4] = [
        (doc.title.as_str(), weights.title),
        (doc.excerpt.as_str(), weights.excerpt),
        (doc.body.as_str(), weights.body),
        (tags_joined.as_str(), weights.tags),
    ];

    let mut accumulator = 0.0;
    let mut active_weight = 0.0;
    let mut passed = false;

    for (text, weight) in fields {
        if weight <= 0.0 {
            continue;
        }
        let field_tokens = tokenize(text);
        if field_tokens.is_empty() {
            continue;
        }
        active_weight += weight;
        if let Some(distance) = field_distance(&query_tokens, &field_tokens, threshold) {
            accumulator += weight * (1.0 - distance);
            passed = true;
        }
    }

    if !passed || active_weight <= 0.0 {
        return None;
    }
    Some(accumulator / active_weight)
}

/// Weighted distance for a document: `1 - score`, lower is better.
///
/// This is the inverted scale the related-document ranker consumes.
pub fn distance_document(
    query: &str,
    doc: &Document,
    weights: &FieldWeights,
    threshold: f64,
) -> Option<f64> {
    score_document(query, doc, weights, threshold).map(|s| 1.0 - s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::make_doc;

    const THRESHOLD: f64 = 0.4;

    #[test]
    fn token_distance_exact_match_is_zero() {
        assert_eq!(token_distance("hello", "hello", THRESHOLD), Some(0.0));
    }

    #[test]
    fn token_distance_one_typo_passes() {
        // 1 edit / 11 chars ≈ 0.09
        let d = token_distance("transformer", "transformre", THRESHOLD).unwrap();
        assert!(d > 0.0 && d < 0.2);
    }

    #[test]
    fn token_distance_unrelated_words_fail() {
        assert_eq!(token_distance("quantum", "gardening", THRESHOLD), None);
    }

    #[test]
    fn token_distance_length_gap_short_circuits() {
        // |1 - 20| = 19 edits minimum, hopeless under any sane threshold
        assert_eq!(token_distance("a", "aaaaaaaaaaaaaaaaaaaa", THRESHOLD), None);
    }

    #[test]
    fn score_is_order_insensitive() {
        let doc = make_doc("d0", "Neural Networks Explained", "", &[]);
        let forward = score_document("neural networks", &doc, &FieldWeights::default(), THRESHOLD);
        let reversed =
            score_document("networks neural", &doc, &FieldWeights::default(), THRESHOLD);
        assert_eq!(forward, reversed);
        assert!(forward.is_some());
    }

    #[test]
    fn empty_query_is_no_match() {
        let doc = make_doc("d0", "Anything", "text", &[]);
        assert_eq!(
            score_document("   ", &doc, &FieldWeights::default(), THRESHOLD),
            None
        );
    }

    #[test]
    fn document_with_no_populated_fields_is_no_match() {
        let mut doc = make_doc("d0", "", "", &[]);
        doc.excerpt = String::new();
        assert_eq!(
            score_document("query", &doc, &FieldWeights::default(), THRESHOLD),
            None
        );
    }

    #[test]
    fn zero_weight_field_is_ignored() {
        let mut doc = make_doc("d0", "", "transformer architectures", &[]);
        doc.excerpt = String::new();
        let no_body = FieldWeights {
            body: 0.0,
            ..FieldWeights::default()
        };
        assert_eq!(score_document("transformer", &doc, &no_body, THRESHOLD), None);
        assert!(
            score_document("transformer", &doc, &FieldWeights::default(), THRESHOLD).is_some()
        );
    }

    #[test]
    fn matching_more_fields_scores_higher() {
        let everywhere = make_doc(
            "d0",
            "Transformer Models",
            "the transformer changed everything",
            &["transformer"],
        );
        let mut title_only = make_doc("d1", "Transformer Models", "unrelated words here", &["misc"]);
        title_only.excerpt = "completely different summary".to_string();

        let w = FieldWeights::default();
        let a = score_document("transformer", &everywhere, &w, THRESHOLD).unwrap();
        let b = score_document("transformer", &title_only, &w, THRESHOLD).unwrap();
        assert!(a > b, "full-field match {} should beat title-only {}", a, b);
    }

    #[test]
    fn typo_tolerant_against_title() {
        let doc = make_doc("d0", "Attention Is All You Need", "", &[]);
        assert!(
            score_document("attentoin", &doc, &FieldWeights::default(), THRESHOLD).is_some()
        );
    }

    #[test]
    fn distance_inverts_score() {
        let doc = make_doc("d0", "Graph Algorithms", "", &[]);
        let w = FieldWeights::default();
        let s = score_document("graph", &doc, &w, THRESHOLD).unwrap();
        let d = distance_document("graph", &doc, &w, THRESHOLD).unwrap();
        assert!((s + d - 1.0).abs() < 1e-12);
    }
}
