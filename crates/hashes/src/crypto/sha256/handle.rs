//! Heap-allocated SHA-256 state with run-time lifecycle checks.

use alloc::{alloc::alloc as allocate, boxed::Box};
use core::alloc::Layout;

use traits::{AllocationError, Digest, UsageError, UsageErrorKind};

use super::{Sha256, Sha256Digest};

const _: () = assert!(core::mem::size_of::<Sha256>() != 0);

/// Box `value` without aborting when the allocator is exhausted.
fn try_box(value: Sha256) -> Result<Box<Sha256>, AllocationError> {
  let layout = Layout::new::<Sha256>();
  // SAFETY: `Sha256` is not zero-sized (checked above), so `layout` is valid
  // for `alloc`.
  let ptr = unsafe { allocate(layout) }.cast::<Sha256>();
  if ptr.is_null() {
    return Err(AllocationError::new(layout.size()));
  }
  // SAFETY: `ptr` is non-null, aligned for `Sha256` and owns `layout` bytes
  // from the global allocator. It is initialized before `Box` takes it.
  unsafe {
    ptr.write(value);
    Ok(Box::from_raw(ptr))
  }
}

/// A SHA-256 computation behind a handle: `create`, any number of `update`s,
/// one `digest`, then `destroy` (or drop).
///
/// Once the digest has been taken the state is released and the handle is
/// terminal: further `update` or `digest` calls return a [`UsageError`]
/// rather than silently re-padding.
///
/// # Example
///
/// ```
/// use hashes::{UsageErrorKind, crypto::Sha256Handle};
///
/// let mut h = Sha256Handle::create()?;
/// h.update(b"abc")?;
/// let digest = h.digest()?;
/// assert_eq!(digest.words()[0], 0xba7816bf);
///
/// assert_eq!(h.digest().unwrap_err().kind(), UsageErrorKind::AlreadyFinalized);
/// h.destroy();
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct Sha256Handle {
  state: Option<Box<Sha256>>,
}

impl Sha256Handle {
  /// Allocate a fresh hash state.
  ///
  /// # Errors
  ///
  /// [`AllocationError`] if the allocator cannot provide the state.
  pub fn create() -> Result<Self, AllocationError> {
    let state = try_box(Sha256::new())?;
    Ok(Self { state: Some(state) })
  }

  /// Absorb `data`.
  ///
  /// # Errors
  ///
  /// [`UsageErrorKind::UpdateAfterFinalize`] once the digest has been taken.
  pub fn update(&mut self, data: &[u8]) -> Result<(), UsageError> {
    let Some(state) = self.state.as_deref_mut() else {
      return Err(misuse(UsageErrorKind::UpdateAfterFinalize));
    };
    state.update(data);
    Ok(())
  }

  /// Finalize and release the state.
  ///
  /// # Errors
  ///
  /// [`UsageErrorKind::AlreadyFinalized`] on every call after the first.
  pub fn digest(&mut self) -> Result<Sha256Digest, UsageError> {
    let Some(state) = self.state.take() else {
      return Err(misuse(UsageErrorKind::AlreadyFinalized));
    };
    Ok((*state).finalize())
  }

  #[inline]
  #[must_use]
  pub fn is_finalized(&self) -> bool {
    self.state.is_none()
  }

  /// Release the handle. Equivalent to dropping it.
  #[inline]
  pub fn destroy(self) {
    drop(self);
  }
}

fn misuse(kind: UsageErrorKind) -> UsageError {
  let err = UsageError::new(kind);
  log::warn!("sha256 handle misuse: {err}");
  err
}
