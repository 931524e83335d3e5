//! SHA-256 (FIPS 180-4).
//!
//! [`Sha256`] is the streaming hash state. It buffers input into 64-byte
//! blocks, compresses each full block as soon as it exists, and on
//! [`finalize`](Digest::finalize) appends the standard padding and the
//! message bit length. `finalize` consumes the state, so a finished hasher
//! cannot be updated or finalized again.
//!
//! [`Sha256Handle`] offers the same lifecycle as a heap-allocated handle whose
//! misuse is reported at run time instead of rejected at compile time.
#![allow(clippy::indexing_slicing)] // Fixed-size block buffer, offsets bounded by BLOCK_LEN

use core::fmt;

use traits::Digest;

mod compress;
pub mod constants;
#[cfg(feature = "alloc")]
mod handle;
mod output;

use compress::{compress_block, compress_blocks};
use constants::{BLOCK_LEN, DIGEST_LEN, DIGEST_WORDS, H0, LENGTH_FIELD_OFFSET};
#[cfg(feature = "alloc")]
pub use handle::Sha256Handle;
pub use output::Sha256Digest;

/// Streaming SHA-256 state.
///
/// Between calls, fewer than [`BLOCK_LEN`] bytes are ever buffered: a block
/// that fills up is compressed before `update` returns.
///
/// Equality compares the observable hash state (running words, buffered
/// bytes, total length), so two hashers fed the same bytes in different
/// chunkings compare equal.
#[derive(Clone)]
pub struct Sha256 {
  state: [u32; DIGEST_WORDS],
  block: [u8; BLOCK_LEN],
  block_len: usize,
  total_len: u64,
}

impl Default for Sha256 {
  #[inline]
  fn default() -> Self {
    Self {
      state: H0,
      block: [0u8; BLOCK_LEN],
      block_len: 0,
      total_len: 0,
    }
  }
}

impl Sha256 {
  /// Total bytes passed to `update` so far.
  ///
  /// Wraps at 2^64; see [`finalize`](Digest::finalize) for how the length
  /// field is derived.
  #[inline]
  #[must_use]
  pub const fn bytes_hashed(&self) -> u64 {
    self.total_len
  }

  /// Bytes buffered and not yet compressed. Always `< BLOCK_LEN`.
  #[inline]
  #[must_use]
  pub const fn buffered_len(&self) -> usize {
    self.block_len
  }

  #[inline]
  fn buffered(&self) -> &[u8] {
    &self.block[..self.block_len]
  }
}

impl Digest for Sha256 {
  const OUTPUT_SIZE: usize = DIGEST_LEN;
  type Output = Sha256Digest;

  #[inline]
  fn new() -> Self {
    Self::default()
  }

  fn update(&mut self, mut data: &[u8]) {
    self.total_len = self.total_len.wrapping_add(data.len() as u64);

    if self.block_len != 0 {
      let need = BLOCK_LEN - self.block_len;
      if data.len() < need {
        let end = self.block_len + data.len();
        self.block[self.block_len..end].copy_from_slice(data);
        self.block_len = end;
        return;
      }

      let (head, rest) = data.split_at(need);
      self.block[self.block_len..].copy_from_slice(head);
      compress_block(&mut self.state, &self.block);
      self.block_len = 0;
      data = rest;
    }

    // Whole blocks are compressed straight from the caller's buffer.
    let (blocks, rest) = data.as_chunks::<BLOCK_LEN>();
    compress_blocks(&mut self.state, blocks);

    self.block[..rest.len()].copy_from_slice(rest);
    self.block_len = rest.len();
  }

  /// Pad and compress the final block(s).
  ///
  /// The length field holds `bytes_hashed() * 8` modulo 2^64, matching the
  /// FIPS 180-4 definition for every message shorter than 2^64 bits.
  fn finalize(mut self) -> Self::Output {
    debug_assert!(self.block_len < BLOCK_LEN);
    let bit_len = self.total_len.wrapping_mul(8);

    self.block[self.block_len] = 0x80;
    self.block_len += 1;

    // No room left for the length field: flush and start an empty block.
    if self.block_len > LENGTH_FIELD_OFFSET {
      self.block[self.block_len..].fill(0);
      compress_block(&mut self.state, &self.block);
      self.block = [0u8; BLOCK_LEN];
      self.block_len = 0;
    }

    self.block[self.block_len..LENGTH_FIELD_OFFSET].fill(0);
    self.block[LENGTH_FIELD_OFFSET..].copy_from_slice(&bit_len.to_be_bytes());
    compress_block(&mut self.state, &self.block);

    Sha256Digest::from_words(self.state)
  }
}

impl PartialEq for Sha256 {
  fn eq(&self, other: &Self) -> bool {
    self.state == other.state && self.total_len == other.total_len && self.buffered() == other.buffered()
  }
}

impl Eq for Sha256 {}

impl fmt::Debug for Sha256 {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Sha256")
      .field("state", &self.state)
      .field("buffered", &self.buffered())
      .field("total_len", &self.total_len)
      .finish()
  }
}
