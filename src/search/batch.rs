use rayon::prelude::*;

use crate::core::error::Result;
use crate::core::types::DocumentScore;
use crate::engine::SearchEngine;
use crate::scoring::scorer::ExecutionPolicy;

/// Runs a batch of independent queries against one engine in parallel
/// (spec §4.7), grounded on the teacher's `parallel/indexer.rs`
/// par-over-a-slice style but without its chunking/progress-counter
/// machinery, which has no counterpart here — a batch of queries is
/// small and bounded, unlike a corpus of documents to index.
pub struct BatchQueryRunner;

impl BatchQueryRunner {
    /// One result per query, in the same order as `queries`.
    pub fn process(
        engine: &SearchEngine,
        queries: &[String],
        policy: ExecutionPolicy,
    ) -> Vec<Result<Vec<DocumentScore>>> {
        queries
            .par_iter()
            .map(|query| engine.find_top_documents(query, policy))
            .collect()
    }

    /// Flattens `process`'s results into a single list, preserving
    /// per-query order and each query's own rank order. Fails on the
    /// first query that fails to parse.
    pub fn process_joined(
        engine: &SearchEngine,
        queries: &[String],
        policy: ExecutionPolicy,
    ) -> Result<Vec<DocumentScore>> {
        let mut joined = Vec::new();
        for result in Self::process(engine, queries, policy) {
            joined.extend(result?);
        }
        Ok(joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{DocId, Status};

    fn engine() -> SearchEngine {
        let mut engine = SearchEngine::new::<_, &str>([]).unwrap();
        engine
            .add_document(DocId(1), "cat walks over cat", Status::Actual, &[])
            .unwrap();
        engine
            .add_document(DocId(2), "dog barks", Status::Actual, &[])
            .unwrap();
        engine
    }

    #[test]
    fn process_preserves_query_order() {
        let engine = engine();
        let queries = vec!["cat".to_string(), "dog".to_string()];
        let results = BatchQueryRunner::process(&engine, &queries, ExecutionPolicy::Sequential);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].as_ref().unwrap()[0].id, DocId(1));
        assert_eq!(results[1].as_ref().unwrap()[0].id, DocId(2));
    }

    #[test]
    fn process_joined_flattens_in_order() {
        let engine = engine();
        let queries = vec!["cat".to_string(), "dog".to_string()];
        let joined =
            BatchQueryRunner::process_joined(&engine, &queries, ExecutionPolicy::Sequential)
                .unwrap();
        assert_eq!(joined.iter().map(|d| d.id).collect::<Vec<_>>(), vec![DocId(1), DocId(2)]);
    }

    #[test]
    fn process_joined_propagates_parse_errors() {
        let engine = engine();
        let queries = vec!["cat".to_string(), "bad--word".to_string()];
        assert!(BatchQueryRunner::process_joined(&engine, &queries, ExecutionPolicy::Sequential)
            .is_err());
    }
}
