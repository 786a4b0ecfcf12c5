//! Load-triggered growth: reflow every entry into a larger bucket array.
//!
//! Growth never touches an entry's key or frequency. Each entry is unlinked
//! from its old chain and pushed onto the front of the chain its cached hash
//! selects at the new capacity. Only the bucket array is reallocated.
//! Collisions are recounted from the new chains afterwards instead of being
//! tracked through the reflow.

use crate::chain::{self, Arena, Head};
use crate::config::validate_growth_factor;
use crate::error::TableError;
use crate::freq_table::{fail_fast, FreqTable};

impl<K, S> FreqTable<K, S> {
    /// Multiply the capacity by `growth_factor` and redistribute every entry.
    ///
    /// Panics if `growth_factor < 2`; aborts if the new bucket array cannot be
    /// allocated.
    pub fn grow(&mut self, growth_factor: usize) {
        if let Err(e) = self.try_grow(growth_factor) {
            fail_fast(e);
        }
    }

    /// Fallible [`FreqTable::grow`]. On error the table is unchanged.
    pub fn try_grow(&mut self, growth_factor: usize) -> Result<(), TableError> {
        validate_growth_factor(growth_factor)?;
        let old_capacity = self.buckets.len();
        let new_capacity =
            old_capacity
                .checked_mul(growth_factor)
                .ok_or(TableError::CapacityOverflow {
                    capacity: old_capacity,
                    growth_factor,
                })?;
        let mut buckets = alloc_buckets(new_capacity)?;

        for head in self.buckets.iter_mut() {
            let mut cur = head.take();
            while let Some(k) = cur {
                let entry = &self.entries[k];
                cur = entry.next;
                let index = bucket_index(entry.hash, new_capacity);
                chain::relink_front(&mut self.entries, &mut buckets[index], k);
            }
        }

        // Old array is dropped here; its entries now hang off `buckets`.
        self.buckets = buckets;
        self.collisions = count_collisions(&self.entries, &self.buckets);

        log::debug!(
            "grew table from {} to {} buckets ({} entries, {} collisions)",
            old_capacity,
            new_capacity,
            self.entries.len(),
            self.collisions
        );
        Ok(())
    }
}

#[inline]
pub(crate) fn bucket_index(hash: u64, capacity: usize) -> usize {
    (hash % capacity as u64) as usize
}

/// Allocate `capacity` empty buckets, reporting allocation failure.
pub(crate) fn alloc_buckets(capacity: usize) -> Result<Box<[Head]>, TableError> {
    let mut buckets: Vec<Head> = Vec::new();
    buckets
        .try_reserve_exact(capacity)
        .map_err(|_| TableError::Alloc { buckets: capacity })?;
    buckets.resize(capacity, None);
    Ok(buckets.into_boxed_slice())
}

/// `Σ max(chain_len - 1, 0)` over all buckets.
pub(crate) fn count_collisions<K>(arena: &Arena<K>, buckets: &[Head]) -> usize {
    buckets
        .iter()
        .map(|&head| chain::chain_len(arena, head).saturating_sub(1))
        .sum()
}
