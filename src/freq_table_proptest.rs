#![cfg(test)]

// Property tests for FreqTable kept inside the crate so they can check the
// bucket array and the entry arena directly.

use crate::chain::chain_len;
use crate::config::TableConfig;
use crate::freq_table::FreqTable;
use crate::growth::{bucket_index, count_collisions};
use proptest::prelude::*;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hasher};

// Low-entropy hasher so small pools still produce long chains.
#[derive(Clone, Default)]
struct LenBuildHasher;
#[derive(Default)]
struct LenHasher(u64);
impl BuildHasher for LenBuildHasher {
    type Hasher = LenHasher;
    fn build_hasher(&self) -> Self::Hasher {
        LenHasher::default()
    }
}
impl Hasher for LenHasher {
    fn write(&mut self, bytes: &[u8]) {
        self.0 = self.0.wrapping_add(bytes.len() as u64);
    }
    fn finish(&self) -> u64 {
        self.0
    }
}

const MAX_EXPLICIT_CAPACITY: usize = 1 << 12;

#[derive(Clone, Debug)]
enum Op {
    Insert(usize),
    TryInsert(usize),
    Grow(usize),
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<Op>)> {
    proptest::collection::vec("[a-z]{0,6}", 1..=12).prop_flat_map(|pool| {
        let idx = 0..pool.len();
        let op = prop_oneof![
            6 => idx.clone().prop_map(Op::Insert),
            3 => idx.prop_map(Op::TryInsert),
            1 => (2usize..=4).prop_map(Op::Grow),
        ];
        proptest::collection::vec(op, 1..120).prop_map(move |ops| (pool.clone(), ops))
    })
}

fn check_structure<S>(t: &FreqTable<String, S>, model: &HashMap<String, usize>) -> Result<(), TestCaseError> {
    let capacity = t.capacity();
    prop_assert!(capacity > 0);
    prop_assert_eq!(t.len(), model.len());

    // Every entry is reachable from exactly one chain, in the bucket its hash selects.
    let mut reachable = 0;
    for (index, &head) in t.buckets.iter().enumerate() {
        let mut cur = head;
        while let Some(k) = cur {
            let e = &t.entries[k];
            prop_assert_eq!(bucket_index(e.hash, capacity), index);
            prop_assert!(e.frequency >= 1);
            reachable += 1;
            cur = e.next;
        }
    }
    prop_assert_eq!(reachable, t.entries.len());

    let recount: usize = t
        .buckets
        .iter()
        .map(|&h| chain_len(&t.entries, h).saturating_sub(1))
        .sum();
    prop_assert_eq!(t.collisions(), recount);
    prop_assert_eq!(t.collisions(), count_collisions(&t.entries, &t.buckets));

    let seen: HashMap<String, usize> = t.iter().map(|(k, f)| (k.clone(), f)).collect();
    prop_assert_eq!(seen.len(), t.len(), "traversal yielded a key twice");
    prop_assert_eq!(&seen, model);
    Ok(())
}

// Property: state-machine equivalence against a HashMap<String, usize> model.
// - insert/try_insert return the key's frequency after the insert.
// - len equals the number of distinct keys; frequencies match the model.
// - collisions equals Σ max(chain_len - 1, 0) after every insert and every growth.
// - every entry sits in the bucket its cached hash selects, and the load is
//   at or below max_load once an insert returns.
// - growth multiplies capacity and preserves the (key, frequency) multiset.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine(
        (pool, ops) in arb_scenario(),
        initial in 1usize..=8,
        max_load in prop_oneof![Just(0.5f64), Just(1.0f64), Just(2.5f64)],
    ) {
        let config = TableConfig::new(initial, max_load).with_growth_factor(3);
        let mut sut: FreqTable<String, LenBuildHasher> =
            FreqTable::with_config_and_hasher(config, LenBuildHasher);
        let mut model: HashMap<String, usize> = HashMap::new();

        for op in ops {
            match op {
                Op::Insert(i) | Op::TryInsert(i) => {
                    let key = pool[i].clone();
                    let expected = {
                        let f = model.entry(key.clone()).or_insert(0);
                        *f += 1;
                        *f
                    };
                    let got = match op {
                        Op::Insert(_) => sut.insert(key),
                        _ => sut.try_insert(key).unwrap(),
                    };
                    prop_assert_eq!(got, expected);
                    prop_assert!(sut.load_factor() <= sut.max_load());
                }
                // Explicit growth stops at 4096 buckets; check_structure walks
                // the whole array after every op.
                Op::Grow(_) if sut.capacity() >= MAX_EXPLICIT_CAPACITY => {}
                Op::Grow(factor) => {
                    let before = sut.capacity();
                    sut.grow(factor);
                    prop_assert_eq!(sut.capacity(), before * factor);
                }
            }
            check_structure(&sut, &model)?;
        }
    }
}

// Property: with the default hasher, the table's final state depends only on
// the multiset of inserted keys, never on the growth schedule.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_growth_schedule_is_invisible(keys in proptest::collection::vec("[a-c]{1,3}", 0..200)) {
        let mut small: FreqTable<String> = FreqTable::with_config(TableConfig::new(1, 0.5).with_growth_factor(2));
        let mut large: FreqTable<String> = FreqTable::with_config(TableConfig::new(4096, 1.0));
        for k in &keys {
            small.insert(k.clone());
            large.insert(k.clone());
        }
        prop_assert_eq!(large.capacity(), 4096);
        let a: HashMap<String, usize> = small.iter().map(|(k, f)| (k.clone(), f)).collect();
        let b: HashMap<String, usize> = large.iter().map(|(k, f)| (k.clone(), f)).collect();
        prop_assert_eq!(a, b);
        prop_assert_eq!(small.len(), large.len());
    }
}
