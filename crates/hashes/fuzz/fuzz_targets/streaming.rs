//! Fuzz target for the streaming SHA-256 API.
//!
//! Arbitrary chunkings (including empty chunks) must leave the hasher in the
//! same state as a single update and produce the same digest.

#![no_main]

use arbitrary::Arbitrary;
use hashes::{Digest as _, crypto::Sha256};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  /// Chunk sizes for streaming updates; reused cyclically, 0 means an empty update.
  chunk_sizes: Vec<u8>,
}

fuzz_target!(|input: Input| {
  let data = &input.data;

  let mut whole = Sha256::new();
  whole.update(data);

  let mut hasher = Sha256::new();
  let mut offset = 0;
  let mut chunk_idx = 0usize;
  let mut empty_run = 0;

  while offset < data.len() {
    let chunk_size = if input.chunk_sizes.is_empty() {
      1
    } else {
      usize::from(input.chunk_sizes[chunk_idx % input.chunk_sizes.len()])
    };
    chunk_idx = chunk_idx.wrapping_add(1);

    // Bound runs of empty updates so an all-zero size list still terminates.
    let chunk_size = if chunk_size == 0 && empty_run >= 4 { 1 } else { chunk_size };
    empty_run = if chunk_size == 0 { empty_run + 1 } else { 0 };

    let end = offset.saturating_add(chunk_size).min(data.len());
    hasher.update(&data[offset..end]);
    offset = end;
  }

  assert_eq!(hasher, whole, "sha256 streaming state mismatch");
  assert!(hasher.buffered_len() < 64);
  assert_eq!(hasher.finalize(), whole.finalize(), "sha256 streaming digest mismatch");
});
