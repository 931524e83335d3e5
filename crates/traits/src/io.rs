//! `std::io` adapters that hash data as it moves.
//!
//! [`DigestReader`] and [`DigestWriter`] pass every call through to the
//! wrapped reader or writer and feed the transferred bytes to a [`Digest`].
//! Only bytes actually transferred are hashed, so short reads and partial
//! vectored reads are accounted for exactly.

use std::io::{self, IoSlice, IoSliceMut, Read, Write};

use crate::Digest;

/// Wraps a [`Read`] and computes a digest of everything read through it.
///
/// # Example
///
/// ```rust
/// # use traits::Digest;
/// # #[derive(Clone, Default)]
/// # struct Count(u64);
/// # impl Digest for Count {
/// #   const OUTPUT_SIZE: usize = 8;
/// #   type Output = u64;
/// #   fn new() -> Self { Self(0) }
/// #   fn update(&mut self, data: &[u8]) { self.0 += data.len() as u64; }
/// #   fn finalize(self) -> Self::Output { self.0 }
/// # }
/// use std::io::Read;
///
/// let mut reader = Count::reader(&b"hello world"[..]);
/// let mut head = [0u8; 5];
/// reader.read_exact(&mut head)?;
/// assert_eq!(reader.finalize(), 5);
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone)]
pub struct DigestReader<R, D: Digest> {
  inner: R,
  hasher: D,
}

impl<R, D: Digest> DigestReader<R, D> {
  #[inline]
  #[must_use]
  pub fn new(inner: R) -> Self {
    Self { inner, hasher: D::new() }
  }

  /// The running hasher, for forking an intermediate digest via `clone`.
  #[inline]
  pub fn hasher(&self) -> &D {
    &self.hasher
  }

  /// Finalize the digest, dropping the reader.
  #[inline]
  #[must_use]
  pub fn finalize(self) -> D::Output {
    self.hasher.finalize()
  }

  #[inline]
  pub fn into_parts(self) -> (R, D::Output) {
    (self.inner, self.hasher.finalize())
  }

  #[inline]
  pub fn inner(&self) -> &R {
    &self.inner
  }

  #[inline]
  pub fn inner_mut(&mut self) -> &mut R {
    &mut self.inner
  }
}

impl<R: Read, D: Digest> Read for DigestReader<R, D> {
  #[inline]
  fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
    let n = self.inner.read(buf)?;
    if let Some(data) = buf.get(..n) {
      self.hasher.update(data);
    }
    Ok(n)
  }

  fn read_vectored(&mut self, bufs: &mut [IoSliceMut<'_>]) -> io::Result<usize> {
    let n = self.inner.read_vectored(bufs)?;
    let mut remaining = n;
    for buf in bufs.iter() {
      if remaining == 0 {
        break;
      }
      let take = remaining.min(buf.len());
      if take == 0 {
        continue;
      }
      if let Some(data) = buf.get(..take) {
        self.hasher.update(data);
      }
      remaining -= take;
    }
    Ok(n)
  }
}

/// Wraps a [`Write`] and computes a digest of everything written through it.
///
/// Bytes are hashed only for the length the inner writer reports as
/// written, so a short `write` leaves the digest consistent with the data
/// that actually reached the sink.
#[derive(Clone)]
pub struct DigestWriter<W, D: Digest> {
  inner: W,
  hasher: D,
}

impl<W, D: Digest> DigestWriter<W, D> {
  #[inline]
  #[must_use]
  pub fn new(inner: W) -> Self {
    Self { inner, hasher: D::new() }
  }

  #[inline]
  pub fn hasher(&self) -> &D {
    &self.hasher
  }

  #[inline]
  #[must_use]
  pub fn finalize(self) -> D::Output {
    self.hasher.finalize()
  }

  #[inline]
  pub fn into_parts(self) -> (W, D::Output) {
    (self.inner, self.hasher.finalize())
  }

  #[inline]
  pub fn inner(&self) -> &W {
    &self.inner
  }

  #[inline]
  pub fn inner_mut(&mut self) -> &mut W {
    &mut self.inner
  }
}

impl<W: Write, D: Digest> Write for DigestWriter<W, D> {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    let n = self.inner.write(buf)?;
    if let Some(data) = buf.get(..n) {
      self.hasher.update(data);
    }
    Ok(n)
  }

  fn write_vectored(&mut self, bufs: &[IoSlice<'_>]) -> io::Result<usize> {
    let n = self.inner.write_vectored(bufs)?;
    let mut remaining = n;
    for buf in bufs {
      if remaining == 0 {
        break;
      }
      let take = remaining.min(buf.len());
      if take == 0 {
        continue;
      }
      if let Some(data) = buf.get(..take) {
        self.hasher.update(data);
      }
      remaining -= take;
    }
    Ok(n)
  }

  #[inline]
  fn flush(&mut self) -> io::Result<()> {
    self.inner.flush()
  }
}
