//! Cryptographic digest trait.
//!
//! Streaming updates followed by exactly one finalize. `finalize` takes the
//! hasher by value, so a finalized state cannot be updated or finalized again:
//! the compiler rejects both.

use core::fmt::Debug;

/// Cryptographic hash function producing a fixed-size digest.
///
/// A fresh hasher is the only way to hash a second input; there is no reset.
/// Cloning a hasher forks the computation, which is how a caller takes an
/// intermediate digest without giving up the running state.
pub trait Digest: Clone + Default {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// The digest output type.
  type Output: Copy + Eq + Debug;

  /// Create a new hasher in its initial state.
  #[must_use]
  fn new() -> Self;

  /// Absorb `data`. Any length is accepted, including zero.
  fn update(&mut self, data: &[u8]);

  /// Update the hasher with multiple non-contiguous buffers.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Update the hasher with `std::io::IoSlice` buffers.
  #[cfg(feature = "std")]
  #[inline]
  fn update_io_slices(&mut self, bufs: &[std::io::IoSlice<'_>]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Pad, compress the final block(s) and return the digest.
  #[must_use]
  fn finalize(self) -> Self::Output;

  /// Compute the digest of data in one shot.
  #[inline]
  #[must_use]
  fn digest(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }

  /// Compute the digest of multiple buffers in one shot.
  #[inline]
  #[must_use]
  fn digest_vectored(bufs: &[&[u8]]) -> Self::Output {
    let mut h = Self::new();
    h.update_vectored(bufs);
    h.finalize()
  }

  /// Wrap a reader to compute the digest of everything read through it.
  ///
  /// # Example
  ///
  /// ```rust
  /// # use traits::Digest;
  /// # #[derive(Clone, Default)]
  /// # struct SumDigest(u8);
  /// # impl Digest for SumDigest {
  /// #   const OUTPUT_SIZE: usize = 1;
  /// #   type Output = u8;
  /// #   fn new() -> Self { Self(0) }
  /// #   fn update(&mut self, data: &[u8]) {
  /// #     self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(b));
  /// #   }
  /// #   fn finalize(self) -> Self::Output { self.0 }
  /// # }
  /// # use std::io::Cursor;
  /// let mut reader = SumDigest::reader(Cursor::new(b"abc".to_vec()));
  /// std::io::copy(&mut reader, &mut std::io::sink())?;
  /// assert_eq!(reader.finalize(), b'a'.wrapping_add(b'b').wrapping_add(b'c'));
  /// # Ok::<(), std::io::Error>(())
  /// ```
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn reader<R>(inner: R) -> crate::io::DigestReader<R, Self>
  where
    Self: Sized,
  {
    crate::io::DigestReader::new(inner)
  }

  /// Wrap a writer to compute the digest of everything written through it.
  ///
  /// # Example
  ///
  /// ```rust
  /// # use traits::Digest;
  /// # #[derive(Clone, Default)]
  /// # struct SumDigest(u8);
  /// # impl Digest for SumDigest {
  /// #   const OUTPUT_SIZE: usize = 1;
  /// #   type Output = u8;
  /// #   fn new() -> Self { Self(0) }
  /// #   fn update(&mut self, data: &[u8]) {
  /// #     self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(b));
  /// #   }
  /// #   fn finalize(self) -> Self::Output { self.0 }
  /// # }
  /// # use std::io::Write;
  /// let mut writer = SumDigest::writer(Vec::new());
  /// writer.write_all(b"hi")?;
  /// let (out, digest) = writer.into_parts();
  /// assert_eq!(out, b"hi".to_vec());
  /// assert_eq!(digest, b'h'.wrapping_add(b'i'));
  /// # Ok::<(), std::io::Error>(())
  /// ```
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn writer<W>(inner: W) -> crate::io::DigestWriter<W, Self>
  where
    Self: Sized,
  {
    crate::io::DigestWriter::new(inner)
  }
}

#[cfg(test)]
mod tests {
  use super::Digest;

  /// Order-sensitive toy digest: enough to observe how the provided methods
  /// feed `update`.
  #[derive(Clone, Default)]
  struct Fold(u32, u64);

  impl Digest for Fold {
    const OUTPUT_SIZE: usize = 12;
    type Output = (u32, u64);

    fn new() -> Self {
      Self::default()
    }

    fn update(&mut self, data: &[u8]) {
      for &b in data {
        self.0 = self.0.wrapping_mul(31).wrapping_add(u32::from(b));
      }
      self.1 = self.1.wrapping_add(data.len() as u64);
    }

    fn finalize(self) -> Self::Output {
      (self.0, self.1)
    }
  }

  #[test]
  fn digest_is_new_update_finalize() {
    let mut h = Fold::new();
    h.update(b"hello");
    assert_eq!(Fold::digest(b"hello"), h.finalize());
  }

  #[test]
  fn vectored_matches_contiguous() {
    assert_eq!(Fold::digest_vectored(&[b"he", b"", b"llo"]), Fold::digest(b"hello"));
  }

  #[test]
  fn clone_forks_the_computation() {
    let mut h = Fold::new();
    h.update(b"he");
    let fork = h.clone();
    h.update(b"llo");
    assert_eq!(fork.finalize(), Fold::digest(b"he"));
    assert_eq!(h.finalize(), Fold::digest(b"hello"));
  }
}
