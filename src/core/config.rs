/// Tunables for the engine's parallel execution paths.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Shard count for the `ShardedMap` accumulator used by the parallel
    /// scorer. Defaults to the number of logical CPUs, same idiom as the
    /// teacher crate's `config.indexing_threads.unwrap_or_else(||
    /// num_cpus::get())`.
    pub shard_count: usize,

    /// Minimum number of postings a plus-word must have before the
    /// parallel scorer bothers chunking its work across threads; below
    /// this, sequential iteration avoids paying rayon's scheduling
    /// overhead for a handful of documents.
    pub parallel_chunk_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            shard_count: num_cpus::get().max(1),
            parallel_chunk_threshold: 64,
        }
    }
}

impl EngineConfig {
    pub fn new(shard_count: usize, parallel_chunk_threshold: usize) -> Self {
        EngineConfig {
            shard_count: shard_count.max(1),
            parallel_chunk_threshold,
        }
    }
}
