//! Bucket chains: intrusive, singly linked, push-to-front lists threaded
//! through the table's entry arena.
//!
//! Entries live in a `SlotMap` owned by the table. A chain is just the
//! `EntryKey` of its first entry; each entry stores the key of the next one.
//! Relinking an entry only rewrites `next` links, so an entry (and its key
//! storage) never moves or gets recreated once inserted.

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Stable identity of one entry inside a table's arena.
    pub struct EntryKey;
}

#[derive(Debug)]
pub(crate) struct Entry<K> {
    pub(crate) key: K,
    pub(crate) frequency: usize,
    // Cached output of the hash collaborator; bucket indices are always
    // derived from it, so `K: Hash` never runs after insertion.
    pub(crate) hash: u64,
    pub(crate) next: Option<EntryKey>,
}

pub(crate) type Arena<K> = SlotMap<EntryKey, Entry<K>>;

/// A bucket slot: `None` for an empty chain, otherwise the chain's first entry.
pub(crate) type Head = Option<EntryKey>;

pub(crate) fn make_entry<K>(key: K, hash: u64, frequency: usize) -> Entry<K> {
    Entry {
        key,
        frequency,
        hash,
        next: None,
    }
}

/// Store `entry` in the arena and make it the new head of `head`'s chain.
/// O(1); uniqueness is the caller's responsibility.
pub(crate) fn push_front<K>(arena: &mut Arena<K>, head: &mut Head, mut entry: Entry<K>) -> EntryKey {
    entry.next = *head;
    let k = arena.insert(entry);
    *head = Some(k);
    k
}

/// Move an entry that already lives in the arena to the front of `head`'s
/// chain. The caller must have unlinked it from its previous chain.
pub(crate) fn relink_front<K>(arena: &mut Arena<K>, head: &mut Head, k: EntryKey) {
    arena[k].next = *head;
    *head = Some(k);
}

/// Drop every entry of the chain (and with it the owned key) and leave the
/// head empty. Returns the number of entries released.
pub(crate) fn release_chain<K>(arena: &mut Arena<K>, head: &mut Head) -> usize {
    let mut released = 0;
    let mut cur = head.take();
    while let Some(k) = cur {
        let removed = arena.remove(k);
        debug_assert!(removed.is_some(), "chain links must refer to live entries");
        let Some(entry) = removed else { break };
        cur = entry.next;
        released += 1;
    }
    released
}

/// Linear scan for an entry whose key equals `key`.
pub(crate) fn find<K: Eq>(arena: &Arena<K>, head: Head, hash: u64, key: &K) -> Option<EntryKey> {
    let mut cur = head;
    while let Some(k) = cur {
        let entry = &arena[k];
        if entry.hash == hash && entry.key == *key {
            return Some(k);
        }
        cur = entry.next;
    }
    None
}

pub(crate) fn chain_len<K>(arena: &Arena<K>, head: Head) -> usize {
    Chain { arena, cur: head }.count()
}

/// Read-only view of one bucket of a `FreqTable`.
pub struct Bucket<'a, K> {
    pub(crate) arena: &'a Arena<K>,
    pub(crate) head: Head,
    pub(crate) index: usize,
}

impl<'a, K> Bucket<'a, K> {
    /// Position of this bucket in the table's bucket array.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Number of entries in the chain. Walks the chain.
    pub fn len(&self) -> usize {
        chain_len(self.arena, self.head)
    }

    /// Walk the chain from its head, most recently linked entry first.
    pub fn iter(&self) -> Chain<'a, K> {
        Chain {
            arena: self.arena,
            cur: self.head,
        }
    }
}

impl<'a, K> IntoIterator for Bucket<'a, K> {
    type Item = (&'a K, usize);
    type IntoIter = Chain<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the `(key, frequency)` pairs of one chain.
pub struct Chain<'a, K> {
    arena: &'a Arena<K>,
    cur: Head,
}

impl<'a, K> Iterator for Chain<'a, K> {
    type Item = (&'a K, usize);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let arena = self.arena;
        let entry = &arena[self.cur?];
        self.cur = entry.next;
        Some((&entry.key, entry.frequency))
    }
}
