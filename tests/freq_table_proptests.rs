// FreqTable property tests over the public API.
//
// Property 1: multiset semantics against a counting model.
//  - len() == number of distinct keys inserted.
//  - a key inserted n times reports frequency n, both from insert() and
//    from full traversal.
//
// Property 2: bucket accounting after every insert.
//  - collisions() == Σ max(chain_len - 1, 0) over buckets().
//  - every key traversed from bucket i maps to bucket i; i < capacity().
//  - load_factor() <= max_load() once insert returns.
use pairsofwords::{FreqTable, TableConfig};
use proptest::prelude::*;
use std::collections::HashMap;

fn config() -> impl Strategy<Value = TableConfig> {
    (1usize..=16, prop_oneof![Just(0.25f64), Just(0.75), Just(1.0), Just(3.0)], 2usize..=4)
        .prop_map(|(c, l, g)| TableConfig::new(c, l).with_growth_factor(g))
}

proptest! {
    #[test]
    fn prop_multiset_semantics(cfg in config(), keys in proptest::collection::vec("[a-e]{1,2}", 0..300)) {
        let mut t: FreqTable<String> = FreqTable::with_config(cfg);
        let mut model: HashMap<String, usize> = HashMap::new();
        for k in keys {
            let n = model.entry(k.clone()).or_insert(0);
            *n += 1;
            prop_assert_eq!(t.insert(k), *n);
        }
        prop_assert_eq!(t.len(), model.len());
        let seen: HashMap<String, usize> = t.iter().map(|(k, f)| (k.clone(), f)).collect();
        prop_assert_eq!(seen, model);
    }
}

proptest! {
    #[test]
    fn prop_bucket_accounting(cfg in config(), keys in proptest::collection::vec(0u16..500, 1..200)) {
        let mut t: FreqTable<u16> = FreqTable::with_config(cfg);
        for k in keys {
            t.insert(k);
            prop_assert!(t.load_factor() <= t.max_load());

            let mut collisions = 0;
            for bucket in t.buckets() {
                prop_assert!(bucket.index() < t.capacity());
                collisions += bucket.len().saturating_sub(1);
                for (key, _) in bucket.iter() {
                    prop_assert_eq!(t.bucket_index(key), bucket.index());
                }
            }
            prop_assert_eq!(t.collisions(), collisions);
        }
    }
}
