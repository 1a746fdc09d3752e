#![cfg(feature = "hash")]
//! Property tests for HashSet: uniqueness, membership round-trips and complete iteration over
//! every bucket layout.

use std::collections::BTreeSet;
use std::hash::{BuildHasher, Hash, Hasher};

use adt_collections::collections::hash::HashSet;
use proptest::prelude::*;

/// Hashes a u64 to itself, so bucket placement is `value % num_buckets`.
#[derive(Debug, Default, Clone, Copy)]
struct Modulo;

#[derive(Default)]
struct ModuloHasher(u64);

impl Hasher for ModuloHasher {
    fn finish(&self) -> u64 {
        self.0
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.0 = self.0.rotate_left(8) ^ u64::from(*byte);
        }
    }

    fn write_u64(&mut self, value: u64) {
        self.0 = value;
    }
}

impl BuildHasher for Modulo {
    type Hasher = ModuloHasher;

    fn build_hasher(&self) -> Self::Hasher {
        ModuloHasher::default()
    }
}

fn build(buckets: usize, items: &[u64]) -> HashSet<u64, Modulo> {
    let mut set = HashSet::with_buckets(buckets);
    for item in items {
        set.insert(*item);
    }
    set
}

proptest! {
    /// len always matches the number of distinct items inserted, and re-inserting fails.
    #[test]
    fn prop_insert_keeps_items_unique(
        items in prop::collection::vec(0_u64..64, 0..200),
        buckets in 1_usize..16,
    ) {
        let mut set = HashSet::<u64, Modulo>::with_buckets(buckets);
        let mut distinct = BTreeSet::new();

        for item in &items {
            prop_assert_eq!(set.insert(*item), distinct.insert(*item));
        }
        prop_assert_eq!(set.len(), distinct.len());

        for item in &distinct {
            prop_assert!(!set.insert(*item), "Re-inserting {} should be rejected", item);
        }
        prop_assert_eq!(set.len(), distinct.len());
    }

    /// contains follows insert and remove, and each removal shrinks the set by exactly one.
    #[test]
    fn prop_insert_remove_round_trip(
        items in prop::collection::vec(any::<u64>(), 1..100),
        buckets in 1_usize..32,
    ) {
        let mut set = build(buckets, &items);

        for item in &items {
            prop_assert!(set.contains(item));
        }

        let distinct: BTreeSet<_> = items.iter().copied().collect();
        for item in &distinct {
            let before = set.len();
            prop_assert!(set.remove(item));
            prop_assert!(!set.contains(item));
            prop_assert_eq!(set.len(), before - 1);
            prop_assert!(!set.remove(item), "Removing {} twice should fail", item);
        }
        prop_assert!(set.is_empty());
    }

    /// Iteration visits every item exactly once, in both directions.
    #[test]
    fn prop_iteration_is_complete(
        items in prop::collection::btree_set(0_u64..512, 0..100),
        buckets in 1_usize..64,
    ) {
        let items: Vec<_> = items.into_iter().collect();
        let set = build(buckets, &items);

        let forward: Vec<u64> = set.iter().copied().collect();
        prop_assert_eq!(forward.len(), set.len());
        prop_assert_eq!(forward.iter().copied().collect::<BTreeSet<_>>().len(), items.len());

        let mut backward: Vec<u64> = set.iter().rev().copied().collect();
        backward.reverse();
        prop_assert_eq!(&backward, &forward);

        let mut cursor = set.begin();
        let mut visited = 0;
        while cursor != set.end() {
            prop_assert!(cursor.current().is_some());
            visited += 1;
            cursor.move_next();
        }
        prop_assert_eq!(visited, items.len());
    }

    /// Every item in one bucket and every item in its own bucket both iterate completely.
    #[test]
    fn prop_iteration_extreme_layouts(count in 0_u64..40) {
        let items: Vec<u64> = (0..count).collect();

        let crowded = build(1, &items);
        prop_assert_eq!(crowded.iter().copied().collect::<Vec<_>>(), items.clone());

        let spread = build(64, &items);
        for (bucket, item) in items.iter().enumerate() {
            prop_assert_eq!(&spread[bucket], &[*item][..]);
        }
        prop_assert_eq!(spread.iter().copied().collect::<Vec<_>>(), items);
    }
}

#[test]
fn query_returns_the_stored_payload() {
    #[derive(Debug, Clone)]
    struct Entry {
        key: u64,
        payload: &'static str,
    }

    impl Hash for Entry {
        fn hash<H: Hasher>(&self, state: &mut H) {
            self.key.hash(state);
        }
    }

    impl PartialEq for Entry {
        fn eq(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    impl Eq for Entry {}

    let mut set: HashSet<Entry> = HashSet::with_buckets(8);
    set.insert(Entry { key: 1, payload: "stored" });

    let mut probe = Entry { key: 1, payload: "probe" };
    assert!(set.query(&mut probe));
    assert_eq!(probe.payload, "stored");

    assert!(set.update(Entry { key: 1, payload: "updated" }));
    let mut probe = Entry { key: 1, payload: "probe" };
    assert!(set.query(&mut probe));
    assert_eq!(probe.payload, "updated");
}
