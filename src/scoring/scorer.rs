use rayon::prelude::*;

use crate::concurrent::sharded_map::ShardedMap;
use crate::core::config::EngineConfig;
use crate::core::error::Result;
use crate::core::types::{rank_cmp, DocId, DocumentScore, Status, MAX_RESULT_DOCUMENT_COUNT};
use crate::index::store::IndexStore;
use crate::query::parser::QueryParser;

/// Which entry point `find_top_documents` dispatches to (design note §9:
/// "execution policy as a type" — a runtime enum over two distinct
/// code paths rather than a generic policy parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionPolicy {
    Sequential,
    Parallel,
}

/// TF-IDF scoring pipeline, spec §4.5. `keep` is the predicate over
/// `(doc_id, status, rating)` that the three public convenience forms
/// (default/by-status/by-predicate) in `engine::SearchEngine` all funnel
/// through.
pub fn find_top_documents<F>(
    store: &IndexStore,
    parser: &QueryParser,
    query_text: &str,
    policy: ExecutionPolicy,
    config: &EngineConfig,
    keep: F,
) -> Result<Vec<DocumentScore>>
where
    F: Fn(DocId, Status, i32) -> bool + Sync,
{
    match policy {
        ExecutionPolicy::Sequential => find_top_documents_seq(store, parser, query_text, keep),
        ExecutionPolicy::Parallel => {
            find_top_documents_par(store, parser, query_text, config, keep)
        }
    }
}

fn find_top_documents_seq<F>(
    store: &IndexStore,
    parser: &QueryParser,
    query_text: &str,
    keep: F,
) -> Result<Vec<DocumentScore>>
where
    F: Fn(DocId, Status, i32) -> bool,
{
    let query = parser.parse(query_text, true)?;
    let doc_count = store.document_count();

    let mut acc: std::collections::HashMap<DocId, f64> = std::collections::HashMap::new();
    for word in &query.plus_words {
        let df = store.document_frequency(word);
        if df == 0 {
            continue;
        }
        let idf = (doc_count as f64 / df as f64).ln();
        for (doc_id, tf) in store.postings(word) {
            if let Some((status, rating)) = store.status_and_rating(doc_id) {
                if keep(doc_id, status, rating) {
                    *acc.entry(doc_id).or_insert(0.0) += tf * idf;
                }
            }
        }
    }

    for word in &query.minus_words {
        if store.contains_word(word) {
            for doc_id in store.postings(word).keys() {
                acc.remove(doc_id);
            }
        }
    }

    Ok(materialize(store, acc.into_iter()))
}

fn find_top_documents_par<F>(
    store: &IndexStore,
    parser: &QueryParser,
    query_text: &str,
    config: &EngineConfig,
    keep: F,
) -> Result<Vec<DocumentScore>>
where
    F: Fn(DocId, Status, i32) -> bool + Sync,
{
    let query = parser.parse(query_text, false)?;
    let doc_count = store.document_count();

    // Sized to the current document count per spec §4.5, capped by the
    // configured shard count so a huge corpus does not allocate one
    // mutex per document.
    let shard_count = doc_count.max(1).min(config.shard_count.max(1));
    let acc: ShardedMap<DocId, f64> = ShardedMap::new(shard_count);

    // Phase 1: plus-word accumulation. Plus-words and their postings are
    // both iterated in parallel. This phase fully drains (rayon's
    // `par_iter().for_each` blocks the caller) before phase 2 starts —
    // the join design note §9 calls load-bearing.
    query.plus_words.par_iter().for_each(|word| {
        let df = store.document_frequency(word);
        if df == 0 {
            return;
        }
        let idf = (doc_count as f64 / df as f64).ln();
        let postings: Vec<(DocId, f64)> = store.postings(word).into_iter().collect();
        let accumulate = |(doc_id, tf): (DocId, f64)| {
            if let Some((status, rating)) = store.status_and_rating(doc_id) {
                if keep(doc_id, status, rating) {
                    *acc.access(doc_id) += tf * idf;
                }
            }
        };
        // A word with only a handful of postings isn't worth handing to
        // rayon's scheduler: below the configured threshold, walk it on
        // this thread instead of spawning another layer of parallelism.
        if postings.len() < config.parallel_chunk_threshold {
            postings.into_iter().for_each(accumulate);
        } else {
            postings.into_par_iter().for_each(accumulate);
        }
    });

    // Phase 2: minus-word erasure, also parallel, strictly after phase 1.
    query.minus_words.par_iter().for_each(|word| {
        if store.contains_word(word) {
            let doc_ids: Vec<DocId> = store.postings(word).keys().copied().collect();
            if doc_ids.len() < config.parallel_chunk_threshold {
                doc_ids.into_iter().for_each(|doc_id| acc.erase(doc_id));
            } else {
                doc_ids.into_par_iter().for_each(|doc_id| {
                    acc.erase(doc_id);
                });
            }
        }
    });

    // Not atomic across shards, but safe here: both phases above have
    // already joined.
    let snapshot = acc.snapshot();
    Ok(materialize_parallel(store, snapshot))
}

fn materialize(
    store: &IndexStore,
    acc: impl Iterator<Item = (DocId, f64)>,
) -> Vec<DocumentScore> {
    let mut results: Vec<DocumentScore> = acc
        .map(|(id, relevance)| {
            let rating = store.status_and_rating(id).map(|(_, r)| r).unwrap_or(0);
            DocumentScore { id, relevance, rating }
        })
        .collect();
    results.sort_by(rank_cmp);
    results.truncate(MAX_RESULT_DOCUMENT_COUNT);
    results
}

fn materialize_parallel(
    store: &IndexStore,
    acc: std::collections::BTreeMap<DocId, f64>,
) -> Vec<DocumentScore> {
    let mut results: Vec<DocumentScore> = acc
        .into_iter()
        .map(|(id, relevance)| {
            let rating = store.status_and_rating(id).map(|(_, r)| r).unwrap_or(0);
            DocumentScore { id, relevance, rating }
        })
        .collect();
    results.par_sort_by(rank_cmp);
    results.truncate(MAX_RESULT_DOCUMENT_COUNT);
    results
}
