use std::fmt::{self, Debug, Formatter};
use std::ops::Index;

use super::Iter;
use crate::util::error::IndexOutOfBounds;
use crate::util::result::ResultExtension;

/// A priority queue which always has its smallest item at the root, stored as an implicit binary
/// tree in a single contiguous buffer.
///
/// The item at index `i` has its children at `2i + 1` and `2i + 2` and its parent at
/// `(i - 1) / 2`. For every index other than the root, the parent compares less than or equal to
/// the child. Ties are never reordered, only strictly smaller items are moved above larger ones.
///
/// Unlike [`std::collections::BinaryHeap`], items can be removed from any index with
/// [`del_data`](MinHeap::del_data). Indices aren't stable though: any insertion or deletion may
/// move items around, so an index obtained before a mutation needs to be looked up again (e.g.
/// with [`position`](MinHeap::position)) before it is reused.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the MinHeap.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `min` | `O(1)` |
/// | `insert` | `O(log n)`*, `O(n)` |
/// | `del_min` | `O(log n)` |
/// | `del_data` | `O(log n)` |
/// | `position` | `O(n)` |
/// | `from` | `O(n)` |
///
/// \* If the MinHeap doesn't have enough capacity for the new item, `insert` will take `O(n)`.
pub struct MinHeap<T: Ord> {
    pub(crate) data: Vec<T>,
}

impl<T: Ord> MinHeap<T> {
    /// Creates a new, empty MinHeap. Memory will be allocated by the first insertion.
    pub const fn new() -> MinHeap<T> {
        MinHeap { data: Vec::new() }
    }

    /// Creates a new MinHeap with space for at least `cap` items before reallocating.
    pub fn with_cap(cap: usize) -> MinHeap<T> {
        MinHeap {
            data: Vec::with_capacity(cap),
        }
    }

    /// Returns the number of items in the MinHeap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the MinHeap contains no items.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of items the MinHeap can hold without reallocating.
    pub fn cap(&self) -> usize {
        self.data.capacity()
    }

    /// Adds `item` to the MinHeap, moving it up the tree until its parent is no greater than it.
    pub fn insert(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    /// Returns a reference to the smallest item, or None if the MinHeap is empty.
    pub fn min(&self) -> Option<&T> {
        self.data.first()
    }

    /// Removes and returns the smallest item, or None if the MinHeap is empty.
    ///
    /// The last item takes the root's place and is then moved down the tree.
    pub fn del_min(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }

        Some(self.remove_at(0))
    }

    /// Removes and returns the item at `index`, which doesn't need to be the smallest item.
    ///
    /// The last item takes its place and is then moved either up or down the tree, whichever
    /// restores the heap order.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds. See [`try_del_data`](MinHeap::try_del_data) for a
    /// version which doesn't panic.
    pub fn del_data(&mut self, index: usize) -> T {
        self.try_del_data(index).throw()
    }

    /// Removes and returns the item at `index`, or an error if `index` is out of bounds.
    pub fn try_del_data(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(self.remove_at(index))
    }

    /// Returns the current index of an item equal to `item`, if there is one. If there are several,
    /// the one closest to the front of the buffer is returned.
    pub fn position(&self, item: &T) -> Option<usize> {
        self.data.iter().position(|stored| stored == item)
    }

    /// Returns a reference to the item at `index` in tree order, or None if it is out of bounds.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Returns all items as a slice, in tree order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns an iterator over all items, as references, in tree order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Removes all items, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Ensures that the MinHeap can hold at least `extra` more items without reallocating.
    pub fn reserve(&mut self, extra: usize) {
        log::trace!("reserving {extra} additional MinHeap slots (len {})", self.len());
        self.data.reserve(extra);
    }

    /// Consumes the MinHeap and returns its buffer, in tree order.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the MinHeap and returns its items in ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(min) = self.del_min() {
            sorted.push(min);
        }
        sorted
    }
}

impl<T: Ord> MinHeap<T> {
    pub(crate) fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index < self.len() {
            Ok(())
        } else {
            Err(IndexOutOfBounds {
                index,
                len: self.len(),
            })
        }
    }

    /// Swaps the item at `index` with the last one, removes it and repairs the tree at `index`.
    /// `index` must be in bounds.
    pub(crate) fn remove_at(&mut self, index: usize) -> T {
        let removed = self.data.swap_remove(index);

        // If index was the last slot, nothing took its place.
        if index < self.data.len() {
            self.repair(index);
        }

        removed
    }

    /// Restores the heap order after the item at `index` was replaced. The rest of the tree is
    /// assumed to be ordered, so only one direction can be out of order.
    pub(crate) fn repair(&mut self, index: usize) {
        if index > 0 && self.data[index] < self.data[parent(index)] {
            self.sift_up(index);
        } else {
            self.sift_down(index);
        }
    }

    pub(crate) fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let above = parent(index);
            if self.data[index] >= self.data[above] {
                break;
            }

            self.data.swap(index, above);
            index = above;
        }
    }

    pub(crate) fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();

        loop {
            let mut smallest = index;
            for child in children(index) {
                if child < len && self.data[child] < self.data[smallest] {
                    smallest = child;
                }
            }

            if smallest == index {
                break;
            }

            self.data.swap(index, smallest);
            index = smallest;
        }
    }
}

const fn parent(index: usize) -> usize {
    (index - 1) / 2
}

const fn children(index: usize) -> [usize; 2] {
    [2 * index + 1, 2 * index + 2]
}

impl<T: Ord> Index<usize> for MinHeap<T> {
    type Output = T;

    /// Returns the item at `index` in tree order.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    fn index(&self, index: usize) -> &Self::Output {
        self.check_index(index).throw();
        &self.data[index]
    }
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Clone> Clone for MinHeap<T> {
    fn clone(&self) -> Self {
        MinHeap {
            data: self.data.clone(),
        }
    }
}

impl<T: Ord> From<Vec<T>> for MinHeap<T> {
    /// Turns an unordered buffer into a MinHeap in linear time, by moving every parent down the
    /// tree, starting from the last one.
    fn from(value: Vec<T>) -> Self {
        let mut heap = MinHeap { data: value };
        for index in (0..heap.len() / 2).rev() {
            heap.sift_down(index);
        }
        heap
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        MinHeap::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T: Ord> Extend<T> for MinHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);

        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Ord + Debug> Debug for MinHeap<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinHeap")
            .field("data", &self.data)
            .field("len", &self.len())
            .field("cap", &self.cap())
            .finish()
    }
}
