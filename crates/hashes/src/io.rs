//! I/O adapters for the SHA-256 engine.
//!
//! [`DigestReader`] and [`DigestWriter`] wrap [`std::io::Read`] and
//! [`std::io::Write`] and hash exactly the bytes transferred.
//!
//! # Example
//!
//! ```rust
//! use hashes::{Digest, crypto::Sha256};
//! use std::io::Read;
//!
//! let mut reader = Sha256::reader(&b"abc"[..]);
//! let mut sink = Vec::new();
//! reader.read_to_end(&mut sink)?;
//! assert_eq!(reader.finalize(), Sha256::digest(b"abc"));
//! # Ok::<(), std::io::Error>(())
//! ```

pub use traits::io::{DigestReader, DigestWriter};
