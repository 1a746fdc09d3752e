#[cfg(test)]
pub(crate) mod alloc;
pub mod error;
#[cfg(feature = "hash")]
pub(crate) mod fmt;
#[cfg(test)]
pub(crate) mod hash;
#[cfg(test)]
pub(crate) mod panic;
pub(crate) mod result;
