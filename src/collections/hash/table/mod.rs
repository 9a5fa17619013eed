//! A module containing [`HashTable`] and associated types.
//!
//! Alongside the table itself, this module provides [`KeyNotFound`], the error returned when
//! removing an absent key, and types for owned and borrowed iteration over entries, keys or values.
//!
//! There is no iterator with mutable access to keys, because changing a key in place could move
//! it to a different slot, which would cause a logic error.
//!
//! [`HashTable`] is also re-exported under the parent module.

mod error;
mod hash_table;
mod iter;

pub use error::*;
pub use hash_table::*;
pub use iter::*;
