//! pairsofwords: a chained, frequency-counting hash table and the word-pair
//! counter built on it.
//!
//! Internal Design:
//!
//! Summary
//! - `FreqTable<K, S>` is a hash table with multiset semantics: inserting a
//!   key that is already present bumps its frequency instead of adding a
//!   second entry.
//! - Layers:
//!   - `chain`: entries and the singly linked, push-to-front bucket chains
//!     threaded through a `SlotMap` arena.
//!   - `freq_table`: bucket array, insertion, counters, traversal, teardown.
//!   - `growth`: load-triggered reflow into a larger bucket array.
//!   - `tokenize`/`report`: word and word-pair streams, report ordering and
//!     formatting for the `pairsofwords` binary.
//!
//! Constraints
//! - Single-threaded; every mutation goes through `&mut FreqTable`.
//! - Keys are moved into the table. On a duplicate insert the incoming key
//!   is dropped and the stored one is kept.
//! - No lookup, removal or shrinking. Entries live until the table is
//!   destroyed.
//!
//! Hasher and rehashing invariants
//! - The hash collaborator is any `BuildHasher`; it must be deterministic for
//!   the table's lifetime. The default is unseeded.
//! - Each entry caches its `u64` hash. Growth derives new bucket indices from
//!   the cached hash, so `K: Hash` never runs after insertion and growth needs
//!   no trait bounds on `K` or `S`.
//! - Growth relinks entries; it never moves, copies or recreates them. Only
//!   the bucket array is reallocated.
//!
//! Counters
//! - `len()` is the number of distinct keys.
//! - `collisions()` equals `Σ max(chain_len - 1, 0)` over all buckets. Inserts
//!   maintain it incrementally; growth recounts it from the new chains.
//!
//! Failure policy
//! - Allocation failure is fatal by default: the process aborts through the
//!   global allocation error handler. `try_with_config*`, `try_insert` and
//!   `try_grow` return `TableError` for a failed bucket array allocation
//!   instead. Entry storage follows the global allocator's policy on both
//!   paths.
//! - Invalid parameters (zero capacity, non-positive or non-finite max load,
//!   growth factor below 2) panic in the infallible constructors. Capacity
//!   overflow on growth aborts like an allocation failure.

mod chain;
pub mod config;
pub mod error;
pub mod freq_table;
mod freq_table_proptest;
mod growth;
pub mod report;
pub mod tokenize;

// Public surface
pub use chain::{Bucket, Chain};
pub use config::TableConfig;
pub use error::TableError;
pub use freq_table::{DefaultHashBuilder, FreqTable};
