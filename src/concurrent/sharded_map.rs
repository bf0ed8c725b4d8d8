use parking_lot::{Mutex, MutexGuard};
use std::collections::BTreeMap;
use std::ops::{Deref, DerefMut};

/// A key usable with `ShardedMap`: anything that can be read as an
/// integer for shard routing. `DocId` is the only key this crate ever
/// instantiates this with, but the map itself stays generic (per spec
/// §4.3 — "generic over an integer key K").
pub trait ShardKey: Copy + Ord {
    fn shard_bits(&self) -> i64;
}

impl ShardKey for crate::core::types::DocId {
    fn shard_bits(&self) -> i64 {
        self.0
    }
}

/// A key-sharded map with one independent lock per shard. Modeled on
/// spec §4.3 / design note §9 ("Sharded accumulator"): a `Vec<Shard>`
/// where each shard is a lock plus an ordered map, so `snapshot()` never
/// needs a separate sort pass. The teacher crate already depends on
/// `parking_lot` for its top-level `RwLock` (`core/database.rs`); reusing
/// `parking_lot::Mutex` here is the same dependency, not a new one.
pub struct ShardedMap<K, V> {
    shards: Vec<Mutex<BTreeMap<K, V>>>,
}

/// A scoped handle holding its shard's lock for its lifetime, exposing a
/// mutable reference to the value at `key` (inserted as `V::default()` if
/// absent). No other operation on the same shard can proceed while this
/// handle is alive; other shards are unaffected.
pub struct ShardGuard<'a, K: Ord, V> {
    guard: MutexGuard<'a, BTreeMap<K, V>>,
    key: K,
}

impl<'a, K: Ord, V> Deref for ShardGuard<'a, K, V> {
    type Target = V;
    fn deref(&self) -> &V {
        self.guard.get(&self.key).expect("access() always inserts the key first")
    }
}

impl<'a, K: Ord, V> DerefMut for ShardGuard<'a, K, V> {
    fn deref_mut(&mut self) -> &mut V {
        self.guard.get_mut(&self.key).expect("access() always inserts the key first")
    }
}

impl<K, V> ShardedMap<K, V>
where
    K: ShardKey,
    V: Default,
{
    /// `shard_count` is clamped to at least 1.
    pub fn new(shard_count: usize) -> Self {
        let shard_count = shard_count.max(1);
        let mut shards = Vec::with_capacity(shard_count);
        shards.resize_with(shard_count, || Mutex::new(BTreeMap::new()));
        ShardedMap { shards }
    }

    fn shard_index(&self, key: &K) -> usize {
        (key.shard_bits() as u64 as usize) % self.shards.len()
    }

    /// Locks the owning shard and returns a scoped mutable handle to
    /// `key`'s value, inserting `V::default()` if `key` is absent.
    pub fn access(&self, key: K) -> ShardGuard<'_, K, V> {
        let idx = self.shard_index(&key);
        let mut guard = self.shards[idx].lock();
        guard.entry(key).or_insert_with(V::default);
        ShardGuard { guard, key }
    }

    /// Removes `key` if present. Idempotent.
    pub fn erase(&self, key: K) {
        let idx = self.shard_index(&key);
        self.shards[idx].lock().remove(&key);
    }

    /// Locks each shard in turn, copies its contents, releases, advances.
    /// Not atomic across shards — callers must ensure the producer phase
    /// has completed before calling this (the scorer enforces this with
    /// a rayon join between the plus-accumulation and minus-erasure
    /// phases; see `scoring::scorer`).
    pub fn snapshot(&self) -> BTreeMap<K, V>
    where
        K: Clone,
        V: Clone,
    {
        let mut merged = BTreeMap::new();
        for shard in &self.shards {
            let guard = shard.lock();
            for (k, v) in guard.iter() {
                merged.insert(k.clone(), v.clone());
            }
        }
        merged
    }
}
