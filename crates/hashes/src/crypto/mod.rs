//! Cryptographic hash functions.

pub mod sha256;

#[cfg(feature = "alloc")]
pub use sha256::Sha256Handle;
pub use sha256::{Sha256, Sha256Digest};
