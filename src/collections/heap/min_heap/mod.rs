//! A module containing [`MinHeap`] and its iterators.
//!
//! Both [`Iter`] and [`IntoIter`] produce items in the heap's internal (tree) order, not sorted
//! order. Use [`MinHeap::into_sorted_vec`] or repeated [`MinHeap::del_min`] for that.

mod iter;
mod min_heap;

pub use iter::*;
pub use min_heap::*;
