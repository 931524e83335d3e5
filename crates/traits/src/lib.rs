//! Core digest traits for the SHA-256 workspace.
//!
//! This crate provides the trait every hasher in the workspace conforms to,
//! plus the error types shared by the engine and its callers. It is `no_std`
//! compatible and has zero dependencies.
//!
//! # Traits
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | [`Digest`] | Streaming cryptographic hash with a single-use, consuming finalize |
//!
//! # Error Types
//!
//! - [`AllocationError`] - Heap-allocated hash state could not be obtained
//! - [`UsageError`] - A checked handle was used after it was finalized
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod digest;
pub mod error;
#[cfg(feature = "std")]
pub mod io;

pub use digest::Digest;
pub use error::{AllocationError, UsageError, UsageErrorKind};
