//! Hash-based collection types. Currently this is only [`HashSet`], a set with a fixed number of
//! chained buckets.

pub mod set;

#[doc(inline)]
pub use set::HashSet;
