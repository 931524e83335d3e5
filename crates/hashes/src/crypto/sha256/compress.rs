//! The SHA-256 compression function.
//!
//! One call consumes exactly one 64-byte block: the block is expanded into a
//! 64-word message schedule, 64 rounds mix it into the working variables, and
//! the result is added back into the running hash. Every addition wraps
//! modulo 2^32.
#![allow(clippy::indexing_slicing)] // Fixed-size schedule, indices bounded by SCHEDULE_LEN

use super::constants::{BLOCK_LEN, DIGEST_WORDS, K, SCHEDULE_LEN};
use crate::util::rotr32;

#[inline(always)]
fn ch(x: u32, y: u32, z: u32) -> u32 {
  (x & y) ^ (!x & z)
}

#[inline(always)]
fn maj(x: u32, y: u32, z: u32) -> u32 {
  (x & y) ^ (x & z) ^ (y & z)
}

#[inline(always)]
fn big_sigma0(x: u32) -> u32 {
  rotr32(x, 2) ^ rotr32(x, 13) ^ rotr32(x, 22)
}

#[inline(always)]
fn big_sigma1(x: u32) -> u32 {
  rotr32(x, 6) ^ rotr32(x, 11) ^ rotr32(x, 25)
}

#[inline(always)]
fn small_sigma0(x: u32) -> u32 {
  rotr32(x, 7) ^ rotr32(x, 18) ^ (x >> 3)
}

#[inline(always)]
fn small_sigma1(x: u32) -> u32 {
  rotr32(x, 17) ^ rotr32(x, 19) ^ (x >> 10)
}

/// Expand a block into the message schedule: 16 big-endian words taken
/// directly, 48 derived from earlier words.
#[inline]
pub(crate) fn schedule(block: &[u8; BLOCK_LEN]) -> [u32; SCHEDULE_LEN] {
  let mut w = [0u32; SCHEDULE_LEN];
  let (words, _) = block.as_chunks::<4>();
  for (slot, bytes) in w.iter_mut().zip(words) {
    *slot = u32::from_be_bytes(*bytes);
  }

  for i in 16..SCHEDULE_LEN {
    w[i] = w[i - 16]
      .wrapping_add(small_sigma0(w[i - 15]))
      .wrapping_add(w[i - 7])
      .wrapping_add(small_sigma1(w[i - 2]));
  }
  w
}

/// Mix one block into `state`.
#[inline]
pub(crate) fn compress_block(state: &mut [u32; DIGEST_WORDS], block: &[u8; BLOCK_LEN]) {
  let w = schedule(block);
  let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

  for (&k, &wi) in K.iter().zip(w.iter()) {
    let t1 = h
      .wrapping_add(big_sigma1(e))
      .wrapping_add(ch(e, f, g))
      .wrapping_add(k)
      .wrapping_add(wi);
    let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

    h = g;
    g = f;
    f = e;
    e = d.wrapping_add(t1);
    d = c;
    c = b;
    b = a;
    a = t1.wrapping_add(t2);
  }

  for (word, mixed) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
    *word = word.wrapping_add(mixed);
  }
}

/// Mix a run of whole blocks into `state`, in order.
#[inline]
pub(crate) fn compress_blocks(state: &mut [u32; DIGEST_WORDS], blocks: &[[u8; BLOCK_LEN]]) {
  for block in blocks {
    compress_block(state, block);
  }
}
