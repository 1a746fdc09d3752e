//! General-purpose collection types.
//!
//! Each collection sits behind its own feature, [`hash`] and [`heap`], with [`traits`] holding
//! behaviour shared between set-like types.

#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "heap")]
pub mod heap;
#[cfg(feature = "traits")]
pub mod traits;
