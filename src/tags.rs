//! Tag extraction and exact-tag filtering.
//!
//! Tags are case-sensitive opaque strings. Matching is exact equality: a
//! tag filter is a precision tool, never fuzzy. Extraction deduplicates via
//! a `BTreeSet` so the output is sorted ascending and deterministic.

use std::collections::BTreeSet;

use crate::error::QueryError;
use crate::types::Document;

/// All distinct tags across the corpus, sorted ascending.
pub fn extract_tags(documents: &[Document]) -> Vec<String> {
    let set: BTreeSet<&str> = documents
        .iter()
        .flat_map(|d| d.tags.iter())
        .map(String::as_str)
        .collect();
    set.into_iter().map(str::to_string).collect()
}

/// Documents carrying `tag`, in their original relative order.
///
/// An empty tag (after trimming) is an error, not "match all". A tag absent
/// from the corpus returns an empty vec.
pub fn filter_by_tag<'a>(
    documents: &'a [Document],
    tag: &str,
) -> Result<Vec<&'a Document>, QueryError> {
    if tag.trim().is_empty() {
        return Err(QueryError::invalid("tag filter must be non-empty"));
    }
    Ok(documents
        .iter()
        .filter(|d| d.tags.iter().any(|t| t == tag))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::make_doc;

    fn corpus() -> Vec<Document> {
        vec![
            make_doc("a", "First", "", &["nlp", "transformers"]),
            make_doc("b", "Second", "", &["nlp"]),
            make_doc("c", "Third", "", &["graphs", "nlp"]),
            make_doc("d", "Fourth", "", &[]),
        ]
    }

    #[test]
    fn extract_tags_dedups_and_sorts() {
        let tags = extract_tags(&corpus());
        assert_eq!(tags, vec!["graphs", "nlp", "transformers"]);
    }

    #[test]
    fn extract_tags_empty_corpus() {
        assert!(extract_tags(&[]).is_empty());
    }

    #[test]
    fn extract_tags_is_case_sensitive() {
        let docs = vec![make_doc("a", "T", "", &["NLP", "nlp"])];
        assert_eq!(extract_tags(&docs), vec!["NLP", "nlp"]);
    }

    #[test]
    fn filter_preserves_corpus_order() {
        let docs = corpus();
        let hits = filter_by_tag(&docs, "nlp").unwrap();
        let ids: Vec<&str> = hits.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn filter_is_exact_not_fuzzy() {
        let docs = corpus();
        assert!(filter_by_tag(&docs, "transformer").unwrap().is_empty());
        assert!(filter_by_tag(&docs, "NLP").unwrap().is_empty());
    }

    #[test]
    fn unknown_tag_is_empty_not_error() {
        let docs = corpus();
        assert!(filter_by_tag(&docs, "nonexistent-tag").unwrap().is_empty());
    }

    #[test]
    fn empty_tag_is_invalid_argument() {
        let docs = corpus();
        assert!(matches!(
            filter_by_tag(&docs, ""),
            Err(QueryError::InvalidArgument { .. })
        ));
        assert!(matches!(
            filter_by_tag(&docs, "   "),
            Err(QueryError::InvalidArgument { .. })
        ));
    }
}
