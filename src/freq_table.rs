//! FreqTable: chained hash table with multiset semantics.

use crate::chain::{self, Arena, Bucket, Chain, Head};
use crate::config::TableConfig;
use crate::error::TableError;
use crate::growth::{alloc_buckets, bucket_index};
use core::fmt;
use core::hash::{BuildHasher, BuildHasherDefault, Hash};
use std::alloc::Layout;
use zwohash::ZwoHasher;

/// Default hash collaborator. Unseeded, so equal keys hash equally across
/// tables and across runs.
pub type DefaultHashBuilder = BuildHasherDefault<ZwoHasher>;

pub struct FreqTable<K, S = DefaultHashBuilder> {
    hasher: S,
    pub(crate) buckets: Box<[Head]>,
    pub(crate) entries: Arena<K>,
    pub(crate) collisions: usize,
    max_load: f64,
    growth_factor: usize,
}

impl<K> FreqTable<K>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self::with_config(TableConfig::default())
    }
}

impl<K> Default for FreqTable<K>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, S> FreqTable<K, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    pub fn with_config(config: TableConfig) -> Self {
        Self::with_config_and_hasher(config, S::default())
    }

    pub fn try_with_config(config: TableConfig) -> Result<Self, TableError> {
        Self::try_with_config_and_hasher(config, S::default())
    }
}

impl<K, S> FreqTable<K, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Create a table with `capacity` empty buckets that grows by the default
    /// factor once its load exceeds `max_load`.
    ///
    /// Panics if `capacity` is zero or `max_load` is not a positive finite
    /// number. Aborts the process if the bucket array cannot be allocated.
    pub fn with_capacity_and_hasher(hasher: S, capacity: usize, max_load: f64) -> Self {
        Self::with_config_and_hasher(TableConfig::new(capacity, max_load), hasher)
    }

    /// Panics on an invalid config; aborts on allocation failure.
    pub fn with_config_and_hasher(config: TableConfig, hasher: S) -> Self {
        match Self::try_with_config_and_hasher(config, hasher) {
            Ok(table) => table,
            Err(e) => fail_fast(e),
        }
    }

    /// Fallible constructor: reports invalid parameters and bucket allocation
    /// failure instead of terminating.
    pub fn try_with_config_and_hasher(config: TableConfig, hasher: S) -> Result<Self, TableError> {
        config.validate()?;
        Ok(Self {
            hasher,
            buckets: alloc_buckets(config.initial_capacity)?,
            entries: Arena::with_key(),
            collisions: 0,
            max_load: config.max_load,
            growth_factor: config.growth_factor,
        })
    }

    /// Count one occurrence of `key`, taking ownership of it.
    ///
    /// A new key gets its own entry with frequency 1. A key that is already
    /// present bumps the stored entry's frequency and the incoming key is
    /// dropped. Returns the key's frequency after the insert.
    ///
    /// Inserting a new key may grow the table; allocation failure during
    /// growth aborts the process. See [`FreqTable::try_insert`].
    pub fn insert(&mut self, key: K) -> usize {
        let frequency = self.tally(key);
        if frequency == 1 {
            while self.over_threshold() {
                self.grow(self.growth_factor);
            }
        }
        frequency
    }

    /// Like [`FreqTable::insert`], but a failed bucket allocation during
    /// growth is returned. The key is counted either way and the table keeps
    /// its previous bucket array.
    pub fn try_insert(&mut self, key: K) -> Result<usize, TableError> {
        let frequency = self.tally(key);
        if frequency == 1 {
            while self.over_threshold() {
                self.try_grow(self.growth_factor)?;
            }
        }
        Ok(frequency)
    }

    /// Bucket that `key` maps to at the current capacity. Always `< capacity`.
    pub fn bucket_index(&self, key: &K) -> usize {
        bucket_index(self.hasher.hash_one(key), self.buckets.len())
    }

    // Find-or-create without any load check.
    fn tally(&mut self, key: K) -> usize {
        let hash = self.hasher.hash_one(&key);
        let index = bucket_index(hash, self.buckets.len());
        let head = self.buckets[index];
        if head.is_some() {
            if let Some(k) = chain::find(&self.entries, head, hash, &key) {
                let entry = &mut self.entries[k];
                entry.frequency += 1;
                return entry.frequency;
            }
            self.collisions += 1;
        }
        chain::push_front(
            &mut self.entries,
            &mut self.buckets[index],
            chain::make_entry(key, hash, 1),
        );
        1
    }
}

impl<K, S> FreqTable<K, S> {
    /// Number of distinct keys stored.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Entries sharing a bucket with an earlier entry: the sum over all
    /// non-empty buckets of `chain length - 1`.
    pub fn collisions(&self) -> usize {
        self.collisions
    }

    pub fn load_factor(&self) -> f64 {
        self.entries.len() as f64 / self.buckets.len() as f64
    }

    pub fn max_load(&self) -> f64 {
        self.max_load
    }

    pub fn growth_factor(&self) -> usize {
        self.growth_factor
    }

    pub fn hasher(&self) -> &S {
        &self.hasher
    }

    pub(crate) fn over_threshold(&self) -> bool {
        self.load_factor() > self.max_load
    }

    /// Structural view of the bucket array, one item per bucket including
    /// empty ones, in index order.
    pub fn buckets(&self) -> Buckets<'_, K> {
        Buckets {
            arena: &self.entries,
            heads: self.buckets.iter().enumerate(),
        }
    }

    /// Every `(key, frequency)` pair, bucket by bucket. The order carries no
    /// meaning and changes when the table grows.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            buckets: self.buckets(),
            chain: None,
            remaining: self.entries.len(),
        }
    }

    /// Tear the table down: release every chain (dropping each entry and its
    /// key), then the bucket array, then the table itself.
    pub fn destroy(mut self) {
        let mut released = 0;
        for head in self.buckets.iter_mut() {
            released += chain::release_chain(&mut self.entries, head);
        }
        debug_assert!(self.entries.is_empty(), "entry outside of any chain");
        log::trace!("released {released} entries");
    }
}

impl<K, S> fmt::Debug for FreqTable<K, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FreqTable")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .field("collisions", &self.collisions)
            .field("max_load", &self.max_load)
            .field("growth_factor", &self.growth_factor)
            .finish_non_exhaustive()
    }
}

impl<'a, K, S> IntoIterator for &'a FreqTable<K, S> {
    type Item = (&'a K, usize);
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Allocation failure and precondition violations end the program.
/// Out-of-memory goes through the global allocation error handler, the same
/// path a failed `Vec` allocation takes. A bucket count with no valid layout
/// and capacity overflow abort directly; only bad parameters panic.
pub(crate) fn fail_fast(err: TableError) -> ! {
    log::error!("{err}");
    match err {
        TableError::Alloc { buckets } => match Layout::array::<Head>(buckets) {
            Ok(layout) => std::alloc::handle_alloc_error(layout),
            Err(_) => std::process::abort(),
        },
        TableError::CapacityOverflow { .. } => std::process::abort(),
        _ => panic!("{err}"),
    }
}

/// Iterator over the buckets of a `FreqTable`.
pub struct Buckets<'a, K> {
    arena: &'a Arena<K>,
    heads: core::iter::Enumerate<core::slice::Iter<'a, Head>>,
}

impl<'a, K> Iterator for Buckets<'a, K> {
    type Item = Bucket<'a, K>;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (index, &head) = self.heads.next()?;
        Some(Bucket {
            arena: self.arena,
            head,
            index,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.heads.size_hint()
    }
}

impl<'a, K> ExactSizeIterator for Buckets<'a, K> {}

/// Iterator over all `(key, frequency)` pairs of a `FreqTable`.
pub struct Iter<'a, K> {
    buckets: Buckets<'a, K>,
    chain: Option<Chain<'a, K>>,
    remaining: usize,
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = (&'a K, usize);
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.chain.as_mut().and_then(Iterator::next) {
                self.remaining -= 1;
                return Some(item);
            }
            self.chain = Some(self.buckets.next()?.iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K> ExactSizeIterator for Iter<'a, K> {}
