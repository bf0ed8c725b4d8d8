pub mod analysis;
pub mod concurrent;
pub mod core;
pub mod engine;
pub mod index;
pub mod pagination;
pub mod query;
pub mod scoring;
pub mod search;

pub use crate::core::error::{Error, ErrorKind, Result};
pub use crate::core::types::{DocId, Document, DocumentScore, Status};
pub use crate::engine::SearchEngine;
pub use crate::scoring::scorer::ExecutionPolicy;

/*
┌────────────────────────────────────────────────────────────────────────────────────────────┐
│                              INMEM-FTS STRUCT ARCHITECTURE                                  │
└────────────────────────────────────────────────────────────────────────────────────────────┘

┌─────────────────────────────────────── CORE LAYER ──────────────────────────────────────────┐
│                                                                                              │
│  ┌────────────────────────────────────────────────────────────────────────────────────┐    │
│  │                           struct SearchEngine                                       │    │
│  │  ┌──────────────────────────────────────────────────────────────────────────────┐ │    │
│  │  │ store: IndexStore             // forward + inverted index, doc metadata       │ │    │
│  │  │ parser: QueryParser           // plus/minus word parsing, stop-word filter    │ │    │
│  │  │ config: EngineConfig          // shard_count, parallel_chunk_threshold        │ │    │
│  │  └──────────────────────────────────────────────────────────────────────────────┘ │    │
│  └────────────────────────────────────────────────────────────────────────────────────┘    │
│                                                                                              │
│  ┌──────────────────┐  ┌──────────────────┐  ┌───────────────────────────────────────┐    │
│  │ struct DocId     │  │ struct Document  │  │ enum Status                          │    │
│  │ • 0: i64         │  │ • id: DocId      │  │ • Actual                              │    │
│  └──────────────────┘  │ • text: Box<str> │  │ • Irrelevant                          │    │
│                        │ • status: Status │  │ • Banned                              │    │
│  ┌──────────────────┐  │ • rating: i32    │  │ • Removed                             │    │
│  │ struct Error     │  └──────────────────┘  └───────────────────────────────────────┘    │
│  │ • kind: ErrorKind│                                                                       │
│  │ • context: String│  ┌──────────────────┐  ┌───────────────────────────────────────┐    │
│  └──────────────────┘  │ struct EngineCfg │  │ struct DocumentScore                  │    │
│                        │ • shard_count    │  │ • id: DocId                           │    │
│                        │ • chunk_threshold│  │ • relevance: f64                      │    │
│                        └──────────────────┘  │ • rating: i32                         │    │
│                                               └───────────────────────────────────────┘    │
└──────────────────────────────────────────────────────────────────────────────────────────────┘

┌───────────────────────────────────── INDEXING LAYER ────────────────────────────────────────┐
│                                                                                              │
│  ┌────────────────────────────────────────────────────────────────────────────────────┐    │
│  │                           struct IndexStore                                         │    │
│  │  ┌──────────────────────────────────────────────────────────────────────────────┐ │    │
│  │  │ word_to_document_freqs: HashMap<String, RwLock<BTreeMap<DocId, f64>>>        │ │    │
│  │  │ id_to_word_freqs: HashMap<DocId, HashMap<String, f64>>                       │ │    │
│  │  │ documents: BTreeMap<DocId, Document>                                         │ │    │
│  │  │ stop_words: Arc<HashSet<String>>                                             │ │    │
│  │  └──────────────────────────────────────────────────────────────────────────────┘ │    │
│  └────────────────────────────────────────────────────────────────────────────────────┘    │
│                                                                                              │
│  ┌──────────────────────┐  ┌───────────────────────┐  ┌────────────────────────────┐      │
│  │ mod analysis::tokenizer│  │ trait ShardKey       │  │ struct ShardedMap<K, V>   │      │
│  │ • split()             │  │ • shard_bits()        │  │ • shards: Vec<Mutex<...>> │      │
│  │ • is_valid_word()     │  └───────────────────────┘  │ • access()/erase()/snapshot│      │
│  └──────────────────────┘                               └────────────────────────────┘      │
└──────────────────────────────────────────────────────────────────────────────────────────────┘

┌────────────────────────────────────── QUERY LAYER ──────────────────────────────────────────┐
│                                                                                              │
│  ┌─────────────────────┐  ┌──────────────────────┐  ┌─────────────────────────────┐        │
│  │ struct QueryParser  │  │ struct Query          │  │ struct MatchResult          │        │
│  │ • stop_words        │  │ • plus_words: Vec<..> │  │ • words: Vec<String>        │        │
│  │ • parse()           │  │ • minus_words: Vec<..>│  │ • status: Status            │        │
│  └─────────────────────┘  └──────────────────────┘  └─────────────────────────────┘        │
│                                                                                              │
│  fn match_document_seq / match_document_par (query::matcher)                               │
└──────────────────────────────────────────────────────────────────────────────────────────────┘

┌────────────────────────────────────── SCORING LAYER ────────────────────────────────────────┐
│                                                                                              │
│  ┌─────────────────────┐  ┌──────────────────────────────────────────────────────┐         │
│  │ enum ExecutionPolicy│  │ fn find_top_documents(store, parser, query, policy,  │         │
│  │ • Sequential        │  │   config, keep) -> Result<Vec<DocumentScore>>        │         │
│  │ • Parallel          │  │ tf * idf accumulation, rank_cmp sort, truncate to    │         │
│  └─────────────────────┘  │ MAX_RESULT_DOCUMENT_COUNT                           │         │
│                           └──────────────────────────────────────────────────────┘         │
└──────────────────────────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────────────── SEARCH LAYER ───────────────────────────────────────────┐
│                                                                                              │
│  ┌─────────────────────┐  ┌──────────────────────┐  ┌─────────────────────────────┐        │
│  │ struct BatchQueryRunner│ │ struct DuplicateDetector│ │ struct RollingQueryLog    │        │
│  │ • process()          │  │ • remove_duplicates() │  │ • record()                 │        │
│  │ • process_joined()   │  │ trait DuplicateSink   │  │ • empty_ratio()            │        │
│  └─────────────────────┘  └──────────────────────┘  └─────────────────────────────┘        │
└──────────────────────────────────────────────────────────────────────────────────────────────┘

┌────────────────────────────────────── RELATIONSHIPS ────────────────────────────────────────┐
│                                                                                              │
│  SearchEngine ──owns──> IndexStore ──owns──> Document                                       │
│        │                     │                                                              │
│        │                     └──backs──> ShardedMap (parallel remove/score accumulation)    │
│        │                                                                                     │
│        ├──owns──> QueryParser ──produces──> Query ──consumed_by──> scoring::scorer          │
│        │                                                                                     │
│        ├──find_top_documents──> scoring::scorer ──reads──> IndexStore                       │
│        │                                                                                     │
│        ├──match_document──> query::matcher ──reads──> IndexStore                            │
│        │                                                                                     │
│        └──used_by──> search::batch / search::duplicates / search::query_log                 │
│                                                                                               │
│  pagination::Paginator ──chunks──> &[T] (generic, independent of SearchEngine)               │
│                                                                                              │
└──────────────────────────────────────────────────────────────────────────────────────────────┘
*/
