#[cfg(feature = "hash")]
pub mod fmt;
#[cfg(test)]
pub mod hash;
#[cfg(test)]
pub mod logger;
#[cfg(test)]
pub mod panic;
