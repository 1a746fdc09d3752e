//! Traits shared between collection types, along with the iterators their provided methods return.

pub mod set;

#[doc(inline)]
pub use set::Set;
