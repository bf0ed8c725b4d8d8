use rayon::prelude::*;

use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::{DocId, Status};
use crate::index::store::IndexStore;
use crate::query::parser::QueryParser;

/// Result of `match_document`: the plus-words that occur in the document
/// (empty if any minus-word occurs in it), plus the document's status.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub words: Vec<String>,
    pub status: Status,
}

fn status_or_out_of_range(store: &IndexStore, doc_id: DocId) -> Result<Status> {
    store
        .status_and_rating(doc_id)
        .map(|(status, _)| status)
        .ok_or_else(|| {
            Error::new(
                ErrorKind::OutOfRange,
                format!("document id {} is not live", doc_id.0),
            )
        })
}

/// Sequential matcher: query parsed with dedup/sort (spec §4.2, §4.6).
pub fn match_document_seq(
    store: &IndexStore,
    parser: &QueryParser,
    query_text: &str,
    doc_id: DocId,
) -> Result<MatchResult> {
    let status = status_or_out_of_range(store, doc_id)?;
    let query = parser.parse(query_text, true)?;

    if query
        .minus_words
        .iter()
        .any(|w| store.posting_for(w, doc_id).is_some())
    {
        return Ok(MatchResult {
            words: Vec::new(),
            status,
        });
    }

    let words = query
        .plus_words
        .into_iter()
        .filter(|w| store.posting_for(w, doc_id).is_some())
        .collect();

    Ok(MatchResult { words, status })
}

/// Parallel matcher: the query is parsed without the dedup pass (spec
/// §4.6), and the minus-word scan / plus-word filter run concurrently via
/// `rayon::join` — each only ever checks `posting_for(word, doc_id)`
/// (an `Option` lookup), so there is no dereference-before-bounds-check
/// hazard for absent words (spec §9 OQ-3). The result list is sorted and
/// deduplicated after filtering, since the parsed query itself was not.
pub fn match_document_par(
    store: &IndexStore,
    parser: &QueryParser,
    query_text: &str,
    doc_id: DocId,
) -> Result<MatchResult> {
    let status = status_or_out_of_range(store, doc_id)?;
    let query = parser.parse(query_text, false)?;

    let (minus_hit, mut words) = rayon::join(
        || {
            query
                .minus_words
                .par_iter()
                .any(|w| store.posting_for(w, doc_id).is_some())
        },
        || {
            query
                .plus_words
                .par_iter()
                .filter(|w| store.posting_for(w, doc_id).is_some())
                .cloned()
                .collect::<Vec<String>>()
        },
    );

    if minus_hit {
        return Ok(MatchResult {
            words: Vec::new(),
            status,
        });
    }

    words.sort();
    words.dedup();
    Ok(MatchResult { words, status })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn setup(stop: &[&str]) -> (IndexStore, QueryParser) {
        let stop_words: Arc<HashSet<String>> =
            Arc::new(stop.iter().map(|s| s.to_string()).collect());
        (
            IndexStore::new(stop_words.clone()),
            QueryParser::new(stop_words),
        )
    }

    #[test]
    fn matches_plus_words_present_in_document() {
        let (mut store, parser) = setup(&["is", "the", "of"]);
        store
            .add(
                DocId(41),
                "all is known".into(),
                crate::core::types::Status::Actual,
                &[],
            )
            .unwrap();
        let result = match_document_seq(&store, &parser, "all", DocId(41)).unwrap();
        assert_eq!(result.words, vec!["all".to_string()]);
    }

    #[test]
    fn minus_word_present_empties_result() {
        let (mut store, parser) = setup(&["is", "the", "of"]);
        store
            .add(
                DocId(42),
                "infest the rats nest all".into(),
                crate::core::types::Status::Actual,
                &[],
            )
            .unwrap();
        let result = match_document_seq(&store, &parser, "all -known", DocId(42)).unwrap();
        assert_eq!(result.words, Vec::<String>::new());

        let result2 = match_document_par(&store, &parser, "all -known", DocId(42)).unwrap();
        assert_eq!(result2.words, Vec::<String>::new());
    }

    #[test]
    fn out_of_range_for_unknown_id() {
        let (store, parser) = setup(&[]);
        assert!(match_document_seq(&store, &parser, "anything", DocId(999)).is_err());
        assert!(match_document_par(&store, &parser, "anything", DocId(999)).is_err());
    }

    #[test]
    fn parallel_and_sequential_agree() {
        let (mut store, parser) = setup(&["is", "the", "of"]);
        store
            .add(
                DocId(43),
                "definetry the best band of all known times".into(),
                crate::core::types::Status::Actual,
                &[],
            )
            .unwrap();
        let seq = match_document_seq(&store, &parser, "all known cat", DocId(43)).unwrap();
        let par = match_document_par(&store, &parser, "all known cat", DocId(43)).unwrap();
        assert_eq!(seq.words, par.words);
    }
}
