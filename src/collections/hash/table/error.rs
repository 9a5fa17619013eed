use derive_more::{Display, Error};

/// Returned when removing a key that the [`HashTable`](super::HashTable) doesn't contain.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Key not found in HashTable!")]
pub struct KeyNotFound;
