//! A module containing [`HashSet`] and associated types.
//!
//! [`Cursor`] provides position-based traversal over every element in the set, bucket by bucket,
//! while [`Iter`] and [`IntoIter`] are the usual borrowed and owned iterators built on top of it.
//!
//! There is no mutable iterator over the elements of a set because mutating the entries in place
//! could change their hash and leave them in the wrong bucket.
//!
//! [`HashSet`] is also re-exported under the parent module.

mod cursor;
mod hash_set;
mod iter;

pub use cursor::*;
pub use hash_set::*;
pub use iter::*;
