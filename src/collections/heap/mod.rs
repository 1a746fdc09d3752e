//! Heap-based collection types. Currently this is only [`MinHeap`], an array-backed binary
//! min-heap which supports removal from any position.

pub mod min_heap;

#[doc(inline)]
pub use min_heap::MinHeap;
