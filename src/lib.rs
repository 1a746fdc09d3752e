//! Two small, owned container types meant to be used as building blocks by higher-level tools.
//!
//! # Contents
//! - [`HashSet`](collections::hash::HashSet): an open-chaining set with a fixed number of buckets,
//!   where the bucket array is only allocated once something is actually stored. Iteration walks
//!   the buckets in order through a bi-directional [`Cursor`](collections::hash::set::Cursor).
//! - [`MinHeap`](collections::heap::MinHeap): an array-backed binary min-heap which, on top of the
//!   usual insert / peek / pop, supports deleting the element at any position.
//!
//! # Error Handling
//! Neither container reports expected outcomes (element missing, container empty) as errors, they
//! use [`bool`]s and [`Option`]s instead. Where a method can only fail through misuse (indexing
//! out of bounds), it panics with a strongly typed error from this crate, and a `try_` variant
//! returning a [`Result`] is provided if that's useful.
//!
//! # Logging
//! Storage lifecycle events (allocating buckets, resetting a set, reserving heap capacity) are
//! reported at `trace` level through the [`log`] facade. Installing a logger is left to the
//! consumer.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;

pub use util::error;
