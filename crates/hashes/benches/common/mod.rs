use core::hint::black_box;

use criterion::{BenchmarkGroup, Throughput, measurement::WallTime};
use hashes::{Digest as _, crypto::Sha256};

/// A benchmark payload and the length it is reported under.
pub struct BenchInput {
  pub len: usize,
  pub data: Vec<u8>,
}

impl BenchInput {
  /// `len` bytes of SHA-256 counter-mode output keyed by `label`.
  pub fn generate(len: usize, label: &[u8]) -> Self {
    let mut data = Vec::with_capacity(len);
    let mut counter = 0u64;
    while data.len() < len {
      let block = Sha256::digest_vectored(&[label, &counter.to_be_bytes()]).to_bytes();
      let take = block.len().min(len - data.len());
      data.extend_from_slice(&block[..take]);
      counter += 1;
    }
    black_box(&data);
    Self { len, data }
  }

  /// Empty inputs are counted per call; everything else per byte.
  pub fn throughput(&self) -> Throughput {
    match self.len {
      0 => Throughput::Elements(1),
      n => Throughput::Bytes(n as u64),
    }
  }

  pub fn apply(&self, group: &mut BenchmarkGroup<'_, WallTime>) {
    group.throughput(self.throughput());
  }
}

/// Padding edges (55/56, 63/64/65, 119/120), then payload sizes.
pub const SIZES: [usize; 16] = [
  0,
  1,
  3,
  55,
  56,
  63,
  64,
  65,
  119,
  120,
  256,
  1024,
  4 << 10,
  16 << 10,
  64 << 10,
  1 << 20,
];

pub fn sized_inputs() -> Vec<BenchInput> {
  SIZES.into_iter().map(|len| BenchInput::generate(len, b"sha256/one-shot")).collect()
}
