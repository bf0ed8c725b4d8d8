use parking_lot::RwLock;
use rayon::prelude::*;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use crate::analysis::tokenizer;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::{mean_rating, DocId, Document, Status};

/// The inverted index, forward index, document metadata and id set —
/// spec §4.4, the largest single component in the system.
///
/// Each word bucket in the inverted index is its own
/// `RwLock<BTreeMap<DocId, f64>>` rather than the whole index living
/// behind one lock: `remove_parallel` touches distinct buckets from
/// different threads while the outer `HashMap` itself stays untouched
/// during that phase (spec §4.4's parallel-removal note), which this
/// per-bucket locking makes safe without unsafe code.
///
/// Not internally synchronized against concurrent `add`/`remove` calls —
/// per spec §5, callers serialize mutations externally. Concurrent reads
/// (`find_top_documents`, `match_document`, `word_frequencies`) are safe
/// while no mutation is in flight.
pub struct IndexStore {
    word_to_document_freqs: HashMap<String, RwLock<BTreeMap<DocId, f64>>>,
    id_to_word_freqs: HashMap<DocId, HashMap<String, f64>>,
    documents: BTreeMap<DocId, Document>,
    stop_words: Arc<HashSet<String>>,
}

impl IndexStore {
    pub fn new(stop_words: Arc<HashSet<String>>) -> Self {
        IndexStore {
            word_to_document_freqs: HashMap::new(),
            id_to_word_freqs: HashMap::new(),
            documents: BTreeMap::new(),
            stop_words,
        }
    }

    /// Tokenizes `text`, rejects any invalid token (leaving the store
    /// unchanged), computes per-word term frequencies over the non-stop
    /// tokens, and records `doc_id` with `status` and the truncated mean
    /// of `ratings`. Fails with `InvalidDocId` if `doc_id` is negative or
    /// already present.
    pub fn add(
        &mut self,
        doc_id: DocId,
        text: String,
        status: Status,
        ratings: &[i32],
    ) -> Result<()> {
        if doc_id.0 < 0 {
            return Err(Error::new(
                ErrorKind::InvalidDocId,
                format!("document id {} is negative", doc_id.0),
            ));
        }
        if self.documents.contains_key(&doc_id) {
            return Err(Error::new(
                ErrorKind::InvalidDocId,
                format!("document id {} already exists", doc_id.0),
            ));
        }

        for token in tokenizer::split(&text) {
            if !tokenizer::is_valid_word(token) {
                return Err(Error::new(
                    ErrorKind::InvalidWord,
                    format!("document {} contains an invalid word {:?}", doc_id.0, token),
                ));
            }
        }

        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut total = 0usize;
        for token in tokenizer::split(&text) {
            if self.stop_words.contains(token) {
                continue;
            }
            *counts.entry(token).or_insert(0) += 1;
            total += 1;
        }

        let mut forward = HashMap::with_capacity(counts.len());
        for (word, count) in counts {
            let tf = count as f64 / total as f64;
            forward.insert(word.to_string(), tf);
            self.word_to_document_freqs
                .entry(word.to_string())
                .or_insert_with(|| RwLock::new(BTreeMap::new()))
                .write()
                .insert(doc_id, tf);
        }

        let rating = mean_rating(ratings);
        self.id_to_word_freqs.insert(doc_id, forward);
        self.documents.insert(
            doc_id,
            Document {
                id: doc_id,
                text: text.into_boxed_str(),
                status,
                rating,
            },
        );
        Ok(())
    }

    /// Removes `doc_id`'s entry from every word bucket it appears in,
    /// pruning buckets that become empty (spec §9 OQ-2), then removes its
    /// metadata and forward-index entry. A no-op (returns `false`) if
    /// `doc_id` was not live.
    pub fn remove(&mut self, doc_id: DocId) -> bool {
        let Some(word_freqs) = self.id_to_word_freqs.remove(&doc_id) else {
            return false;
        };
        let mut emptied = Vec::new();
        for word in word_freqs.keys() {
            if let Some(lock) = self.word_to_document_freqs.get(word) {
                let mut bucket = lock.write();
                bucket.remove(&doc_id);
                if bucket.is_empty() {
                    emptied.push(word.clone());
                }
            }
        }
        for word in emptied {
            self.word_to_document_freqs.remove(&word);
        }
        self.documents.remove(&doc_id);
        true
    }

    /// Same contract as `remove`, but the per-word bucket removals run
    /// concurrently across threads (spec §4.4 parallel variant); bucket
    /// pruning happens afterward, sequentially, since it mutates the
    /// outer map.
    pub fn remove_parallel(&mut self, doc_id: DocId) -> bool {
        let Some(word_freqs) = self.id_to_word_freqs.remove(&doc_id) else {
            return false;
        };
        let words: Vec<&String> = word_freqs.keys().collect();
        let emptied: Vec<String> = words
            .par_iter()
            .filter_map(|word| {
                let lock = self.word_to_document_freqs.get(word.as_str())?;
                let mut bucket = lock.write();
                bucket.remove(&doc_id);
                if bucket.is_empty() {
                    Some((*word).clone())
                } else {
                    None
                }
            })
            .collect();
        for word in emptied {
            self.word_to_document_freqs.remove(&word);
        }
        self.documents.remove(&doc_id);
        true
    }

    /// Returns `id_to_word_freqs[doc_id]`, or an empty map if `doc_id` is
    /// unknown. Never fails.
    pub fn word_frequencies(&self, doc_id: DocId) -> HashMap<String, f64> {
        self.id_to_word_freqs
            .get(&doc_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Snapshot of `(doc_id, tf)` postings for `word`, or an empty map
    /// if `word` is not in the index.
    pub fn postings(&self, word: &str) -> BTreeMap<DocId, f64> {
        self.word_to_document_freqs
            .get(word)
            .map(|lock| lock.read().clone())
            .unwrap_or_default()
    }

    /// Number of distinct documents containing `word`.
    pub fn document_frequency(&self, word: &str) -> usize {
        self.word_to_document_freqs
            .get(word)
            .map(|lock| lock.read().len())
            .unwrap_or(0)
    }

    pub fn contains_word(&self, word: &str) -> bool {
        self.word_to_document_freqs.contains_key(word)
    }

    pub fn posting_for(&self, word: &str, doc_id: DocId) -> Option<f64> {
        self.word_to_document_freqs
            .get(word)
            .and_then(|lock| lock.read().get(&doc_id).copied())
    }

    pub fn status_and_rating(&self, doc_id: DocId) -> Option<(Status, i32)> {
        self.documents.get(&doc_id).map(|d| (d.status, d.rating))
    }

    pub fn is_live(&self, doc_id: DocId) -> bool {
        self.documents.contains_key(&doc_id)
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Ascending iteration over live ids (spec invariant 5).
    pub fn iterate_ids(&self) -> impl Iterator<Item = DocId> + '_ {
        self.documents.keys().copied()
    }

    pub fn stop_words(&self) -> &Arc<HashSet<String>> {
        &self.stop_words
    }
}
