//! Streaming SHA-256.
//!
//! This crate is `no_std` compatible and has no library dependencies outside
//! the workspace besides the `log` facade. Dev-only dependencies are used for
//! oracle testing and benchmarking.
//!
//! # Modules
//!
//! - [`crypto`] - The SHA-256 engine and its digest value type.
//! - [`io`] - Reader/writer adapters (`std` feature).
//!
//! # Example
//!
//! ```
//! use hashes::{Digest, crypto::Sha256};
//!
//! let mut h = Sha256::new();
//! h.update(b"a");
//! h.update(b"bc");
//! assert_eq!(
//!   h.finalize().to_string(),
//!   "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! ```
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod crypto;
#[cfg(feature = "std")]
pub mod io;

mod util;

pub use traits::{AllocationError, Digest, UsageError, UsageErrorKind};
