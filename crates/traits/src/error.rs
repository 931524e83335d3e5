//! Error types for hash state lifecycle operations.
//!
//! The hashing algorithm itself is total: every byte sequence has a digest.
//! The only failures are at the resource boundary (obtaining state) and
//! lifecycle misuse of a runtime-checked handle.

use core::fmt;

/// Hash state could not be allocated.
///
/// Returned by fallible constructors that place the state on the heap. The
/// caller never receives a partially initialized state.
///
/// # Examples
///
/// ```
/// use traits::AllocationError;
///
/// let err = AllocationError::new(112);
/// assert_eq!(err.size(), 112);
/// assert_eq!(err.to_string(), "failed to allocate 112 bytes for hash state");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct AllocationError {
  size: usize,
}

impl AllocationError {
  /// Create an allocation error for a request of `size` bytes.
  #[inline]
  #[must_use]
  pub const fn new(size: usize) -> Self {
    Self { size }
  }

  /// Size of the request that failed, in bytes.
  #[inline]
  #[must_use]
  pub const fn size(&self) -> usize {
    self.size
  }
}

impl fmt::Display for AllocationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "failed to allocate {} bytes for hash state", self.size)
  }
}

impl core::error::Error for AllocationError {}

/// Which lifecycle rule a handle operation broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum UsageErrorKind {
  /// `update` after the digest was taken.
  UpdateAfterFinalize,
  /// `digest` requested a second time.
  AlreadyFinalized,
}

impl UsageErrorKind {
  #[inline]
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::UpdateAfterFinalize => "update called after digest was taken",
      Self::AlreadyFinalized => "digest already taken",
    }
  }
}

/// A finalized hash handle was used again.
///
/// The padding step is not idempotent: finalizing twice or absorbing more
/// input after finalizing would silently produce a non-standard digest, so
/// checked handles refuse with this error instead.
///
/// # Examples
///
/// ```
/// use traits::{UsageError, UsageErrorKind};
///
/// let err = UsageError::new(UsageErrorKind::AlreadyFinalized);
/// assert_eq!(err.kind(), UsageErrorKind::AlreadyFinalized);
/// assert_eq!(err.to_string(), "digest already taken");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UsageError {
  kind: UsageErrorKind,
}

impl UsageError {
  #[inline]
  #[must_use]
  pub const fn new(kind: UsageErrorKind) -> Self {
    Self { kind }
  }

  #[inline]
  #[must_use]
  pub const fn kind(&self) -> UsageErrorKind {
    self.kind
  }
}

impl From<UsageErrorKind> for UsageError {
  #[inline]
  fn from(kind: UsageErrorKind) -> Self {
    Self::new(kind)
  }
}

impl fmt::Display for UsageError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.kind.as_str())
  }
}

impl core::error::Error for UsageError {}
