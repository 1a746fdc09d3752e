//! Strongly typed errors raised by the collections in this crate.

use derive_more::{Display, Error};

/// An index was used which isn't less than the number of slots in the collection.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Index {index} out of bounds for collection with {len} elements!")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}
