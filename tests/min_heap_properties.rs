#![cfg(feature = "heap")]
//! Property tests for MinHeap: the parent/child order holds after any sequence of operations and
//! items always come out in ascending order.

use adt_collections::collections::heap::MinHeap;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Insert(i32),
    DelMin,
    DelData(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<i32>().prop_map(Op::Insert),
        1 => Just(Op::DelMin),
        1 => any::<usize>().prop_map(Op::DelData),
    ]
}

fn is_ordered<T: Ord>(heap: &MinHeap<T>) -> bool {
    let data = heap.as_slice();
    (1..data.len()).all(|child| data[(child - 1) / 2] <= data[child])
}

proptest! {
    /// The heap order holds after every insert, del_min and del_data, and the heap always holds
    /// the same multiset of items as a plain sorted model.
    #[test]
    fn prop_order_survives_any_operations(ops in prop::collection::vec(op(), 0..200)) {
        let mut heap = MinHeap::new();
        let mut model: Vec<i32> = Vec::new();

        for op in ops {
            match op {
                Op::Insert(item) => {
                    heap.insert(item);
                    model.push(item);
                },
                Op::DelMin => {
                    model.sort();
                    let expected = if model.is_empty() { None } else { Some(model.remove(0)) };
                    prop_assert_eq!(heap.del_min(), expected);
                },
                Op::DelData(seed) => {
                    if heap.is_empty() {
                        continue;
                    }
                    let index = seed % heap.len();
                    let target = heap[index];
                    prop_assert_eq!(heap.del_data(index), target);

                    let pos = model.iter().position(|item| *item == target);
                    prop_assert!(pos.is_some());
                    if let Some(pos) = pos {
                        model.swap_remove(pos);
                    }
                },
            }

            prop_assert!(is_ordered(&heap), "Heap order broken: {:?}", heap);
            prop_assert_eq!(heap.len(), model.len());
        }

        model.sort();
        prop_assert_eq!(heap.into_sorted_vec(), model);
    }

    /// Repeatedly taking the minimum produces the inserted items in non-decreasing order.
    #[test]
    fn prop_extraction_is_sorted(items in prop::collection::vec(any::<i16>(), 0..300)) {
        let mut heap = MinHeap::with_cap(items.len());
        for item in &items {
            heap.insert(*item);
        }

        let mut extracted = Vec::with_capacity(items.len());
        while let Some(min) = heap.min().copied() {
            prop_assert_eq!(heap.del_min(), Some(min));
            extracted.push(min);
        }

        let mut expected = items;
        expected.sort();
        prop_assert_eq!(extracted, expected);
    }

    /// Deleting an inner (non-root, non-leaf) index removes exactly that item.
    #[test]
    fn prop_del_data_inner_index(
        items in prop::collection::vec(any::<u8>(), 3..100),
        seed in any::<usize>(),
    ) {
        let mut heap: MinHeap<(u8, usize)> = items
            .iter()
            .enumerate()
            .map(|(id, item)| (*item, id))
            .collect();

        // Indices 1..len/2 are neither the root nor leaves.
        let inner = heap.len() / 2 - 1;
        prop_assume!(inner > 0);
        let index = 1 + seed % inner;

        let target = heap[index];
        prop_assert_eq!(heap.del_data(index), target);
        prop_assert_eq!(heap.position(&target), None);
        prop_assert!(is_ordered(&heap));
        prop_assert_eq!(heap.len(), items.len() - 1);
    }
}
