use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::analysis::tokenizer;
use crate::core::config::EngineConfig;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::{DocId, DocumentScore, Status};
use crate::index::store::IndexStore;
use crate::query::matcher::{self, MatchResult};
use crate::query::parser::QueryParser;
use crate::scoring::scorer::{self, ExecutionPolicy};

/// The public façade wiring the index store, query parser and scorer
/// together (spec §6), mirroring the teacher crate's `Database` as the
/// single entry point client code talks to (`core/database.rs`).
pub struct SearchEngine {
    store: IndexStore,
    parser: QueryParser,
    config: EngineConfig,
}

impl SearchEngine {
    /// `stop_words` may be any iterable of word-likes — a `Vec<&str>`, a
    /// single already-split slice, or (via `from_stop_words_str`) one
    /// whitespace-separated string — matching spec §6's three
    /// constructor forms. Fails with `InvalidWord` if any stop word
    /// contains a byte `< 0x20`.
    pub fn new<I, S>(stop_words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_config(stop_words, EngineConfig::default())
    }

    pub fn with_config<I, S>(stop_words: I, config: EngineConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = HashSet::new();
        for word in stop_words {
            let word = word.as_ref();
            if !tokenizer::is_valid_word(word) {
                return Err(Error::new(
                    ErrorKind::InvalidWord,
                    format!("stop word {:?} contains an invalid byte", word),
                ));
            }
            set.insert(word.to_string());
        }
        let stop_words = Arc::new(set);
        Ok(SearchEngine {
            store: IndexStore::new(stop_words.clone()),
            parser: QueryParser::new(stop_words),
            config,
        })
    }

    /// Convenience constructor for the "single string" form: splits on
    /// spaces exactly like document/query text is split.
    pub fn from_stop_words_str(stop_words: &str) -> Result<Self> {
        Self::new(tokenizer::split(stop_words))
    }

    pub fn add_document(
        &mut self,
        id: DocId,
        text: impl Into<String>,
        status: Status,
        ratings: &[i32],
    ) -> Result<()> {
        self.store.add(id, text.into(), status, ratings)
    }

    /// Default predicate: `status == ACTUAL`.
    pub fn find_top_documents(
        &self,
        query: &str,
        policy: ExecutionPolicy,
    ) -> Result<Vec<DocumentScore>> {
        self.find_top_documents_by(query, policy, |_, status, _| status == Status::Actual)
    }

    /// Predicate: `status == status`.
    pub fn find_top_documents_by_status(
        &self,
        query: &str,
        status: Status,
        policy: ExecutionPolicy,
    ) -> Result<Vec<DocumentScore>> {
        self.find_top_documents_by(query, policy, move |_, s, _| s == status)
    }

    /// Arbitrary `(id, status, rating) -> bool` predicate.
    pub fn find_top_documents_by<F>(
        &self,
        query: &str,
        policy: ExecutionPolicy,
        keep: F,
    ) -> Result<Vec<DocumentScore>>
    where
        F: Fn(DocId, Status, i32) -> bool + Sync,
    {
        scorer::find_top_documents(&self.store, &self.parser, query, policy, &self.config, keep)
    }

    pub fn match_document(
        &self,
        query: &str,
        id: DocId,
        policy: ExecutionPolicy,
    ) -> Result<MatchResult> {
        match policy {
            ExecutionPolicy::Sequential => {
                matcher::match_document_seq(&self.store, &self.parser, query, id)
            }
            ExecutionPolicy::Parallel => {
                matcher::match_document_par(&self.store, &self.parser, query, id)
            }
        }
    }

    /// Empty map if `id` is unknown. Never fails.
    pub fn get_word_frequencies(&self, id: DocId) -> HashMap<String, f64> {
        self.store.word_frequencies(id)
    }

    /// No-op (returns `false`) if `id` is not live.
    pub fn remove_document(&mut self, id: DocId, policy: ExecutionPolicy) -> bool {
        match policy {
            ExecutionPolicy::Sequential => self.store.remove(id),
            ExecutionPolicy::Parallel => self.store.remove_parallel(id),
        }
    }

    pub fn document_count(&self) -> usize {
        self.store.document_count()
    }

    pub fn iterate_ids(&self) -> impl Iterator<Item = DocId> + '_ {
        self.store.iterate_ids()
    }

    pub fn store(&self) -> &IndexStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut IndexStore {
        &mut self.store
    }
}
