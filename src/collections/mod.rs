//! Various general-purpose collection types.
//!
//! # Purpose
//! These types are written to learn about the data structures themselves, as well as the concepts
//! around them, such as hashing, collision resolution and amortised resizing.

#[cfg(feature = "hash")]
pub mod hash;
