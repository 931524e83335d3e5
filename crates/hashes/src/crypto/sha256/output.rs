use core::fmt;

use super::constants::{DIGEST_LEN, DIGEST_WORDS};

/// A finished SHA-256 digest: eight 32-bit words, most significant first.
///
/// Formats (via [`Display`](fmt::Display) and [`LowerHex`](fmt::LowerHex)) as
/// 64 lowercase hex digits with no separators.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Sha256Digest([u32; DIGEST_WORDS]);

impl Sha256Digest {
  #[inline]
  #[must_use]
  pub const fn from_words(words: [u32; DIGEST_WORDS]) -> Self {
    Self(words)
  }

  #[inline]
  #[must_use]
  pub const fn words(&self) -> [u32; DIGEST_WORDS] {
    self.0
  }

  /// The digest as 32 bytes, each word big-endian.
  #[must_use]
  pub fn to_bytes(&self) -> [u8; DIGEST_LEN] {
    let mut out = [0u8; DIGEST_LEN];
    let (chunks, _) = out.as_chunks_mut::<4>();
    for (chunk, word) in chunks.iter_mut().zip(self.0) {
      *chunk = word.to_be_bytes();
    }
    out
  }
}

impl From<Sha256Digest> for [u8; DIGEST_LEN] {
  #[inline]
  fn from(digest: Sha256Digest) -> Self {
    digest.to_bytes()
  }
}

impl From<Sha256Digest> for [u32; DIGEST_WORDS] {
  #[inline]
  fn from(digest: Sha256Digest) -> Self {
    digest.0
  }
}

impl PartialEq<[u8; DIGEST_LEN]> for Sha256Digest {
  fn eq(&self, other: &[u8; DIGEST_LEN]) -> bool {
    self.to_bytes() == *other
  }
}

impl fmt::LowerHex for Sha256Digest {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for word in self.0 {
      write!(f, "{word:08x}")?;
    }
    Ok(())
  }
}

impl fmt::Display for Sha256Digest {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::LowerHex::fmt(self, f)
  }
}
