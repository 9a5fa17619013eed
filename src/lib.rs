//! A hash table which resolves collisions by separate chaining and resizes itself to keep its
//! chains short.
//!
//! # Purpose
//! This crate is a learning exercise in writing a classic data structure properly, rather than
//! reaching for [`std::collections::HashMap`]. The table is small enough to read in one sitting,
//! but complete enough to be used like any other map: it supports borrowed lookups, iteration,
//! indexing, [`Extend`] and [`FromIterator`].
//!
//! # Method
//! [`HashTable`](collections::hash::HashTable) stores an array of slots, each holding a chain of
//! key-value pairs. A key's slot is its hash, masked to 31 bits, modulo the number of slots. The
//! table doubles its slots when it holds ten entries per slot and halves them after a removal that
//! leaves two or fewer, rebuilding every chain each time.
//!
//! # Error Handling
//! Lookups return [`Option`]s, so an absent key can never be confused with a stored value. Removing
//! an absent key is an error, reported as [`KeyNotFound`](collections::hash::table::KeyNotFound)
//! through a [`Result`]. Keys that can't be hashed are rejected at compile time by the
//! [`Hash`](std::hash::Hash) + [`Eq`] bounds. Indexing with a missing key panics, as it does for
//! the standard library's maps.
//!
//! # Logging
//! Resizes are reported through the [`log`] facade at `debug` level, with the threshold crossings
//! that cause them at `trace` level. No logger is installed by this crate.
//!
//! # Dependencies
//! Errors are derived with `derive_more` and diagnostics go through `log`. Everything else is
//! written against [`std`].

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
