use std::collections::{BTreeSet, HashMap};

use crate::core::types::DocId;
use crate::index::store::IndexStore;

/// Where duplicate announcements go (spec §4.8's injectable sink design
/// note — the same shape as the query-log's sink, kept separate since
/// the two are reported to independently).
pub trait DuplicateSink {
    fn report(&self, doc_id: DocId);
}

pub struct StdoutSink;

impl DuplicateSink for StdoutSink {
    fn report(&self, doc_id: DocId) {
        println!("Found duplicate document id {}", doc_id.0);
    }
}

/// Finds documents whose non-stop vocabulary exactly matches an
/// earlier (lower-id) document's and removes the later ones.
pub struct DuplicateDetector;

impl DuplicateDetector {
    /// Scans ids in ascending order, reports each duplicate via `sink`
    /// as it is found, then removes all of them once the scan is
    /// complete — `store` is not mutated mid-scan. Returns how many
    /// documents were removed.
    pub fn remove_duplicates(store: &mut IndexStore, sink: &dyn DuplicateSink) -> usize {
        let mut seen: HashMap<BTreeSet<String>, DocId> = HashMap::new();
        let mut to_remove = Vec::new();

        for doc_id in store.iterate_ids().collect::<Vec<_>>() {
            let vocabulary: BTreeSet<String> = store.word_frequencies(doc_id).into_keys().collect();
            if seen.contains_key(&vocabulary) {
                sink.report(doc_id);
                to_remove.push(doc_id);
            } else {
                seen.insert(vocabulary, doc_id);
            }
        }

        let removed = to_remove.len();
        for doc_id in to_remove {
            store.remove(doc_id);
        }
        removed
    }

    /// Same as `remove_duplicates`, reporting to a silent sink.
    pub fn remove_duplicates_silent(store: &mut IndexStore) -> usize {
        struct Silent;
        impl DuplicateSink for Silent {
            fn report(&self, _doc_id: DocId) {}
        }
        Self::remove_duplicates(store, &Silent)
    }
}
