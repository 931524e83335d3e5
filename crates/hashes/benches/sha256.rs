//! SHA-256 benchmarks
//!
//! Run: `cargo bench -p hashes`
//! Native: `RUSTFLAGS='-C target-cpu=native' cargo bench -p hashes`

use core::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use hashes::{Digest as _, crypto::Sha256};

mod common;

fn one_shot(c: &mut Criterion) {
  let inputs = common::sized_inputs();
  let mut group = c.benchmark_group("sha256/one-shot");

  for input in &inputs {
    let (len, data) = (input.len, &input.data);
    input.apply(&mut group);

    group.bench_with_input(BenchmarkId::new("hashes", len), data, |b, d| {
      b.iter(|| black_box(Sha256::digest(black_box(d))))
    });
    group.bench_with_input(BenchmarkId::new("sha2", len), data, |b, d| {
      b.iter(|| {
        use sha2::Digest as _;
        let out = sha2::Sha256::digest(black_box(d));
        black_box(out)
      })
    });
  }

  group.finish();
}

fn streaming(c: &mut Criterion) {
  const LEN: usize = 64 * 1024;
  let input = common::BenchInput::generate(LEN, b"sha256/streaming");
  let data = &input.data;
  let mut group = c.benchmark_group("sha256/streaming-64KiB");
  input.apply(&mut group);

  // Odd sizes keep a partial block buffered across every call.
  for chunk in [1usize, 7, 63, 64, 65, 4096] {
    group.bench_with_input(BenchmarkId::from_parameter(chunk), data, |b, d| {
      b.iter(|| {
        let mut h = Sha256::new();
        for part in d.chunks(chunk) {
          h.update(black_box(part));
        }
        black_box(h.finalize())
      })
    });
  }

  group.finish();
}

criterion_group!(benches, one_shot, streaming);
criterion_main!(benches);
