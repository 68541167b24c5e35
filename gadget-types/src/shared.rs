//! Copy-on-write payload handle.
//!
//! Every gadget stores its fields in a payload behind a [`Shared`] handle.
//! Cloning the handle only bumps an atomic reference count; the payload is
//! cloned lazily, the first time a handle that is not the sole owner asks
//! for mutable access.

use std::fmt;
use std::sync::Arc;

/// A shared, reference-counted payload with clone-on-write semantics.
///
/// Two handles produced by `clone()` point at the same payload until one of
/// them calls [`Shared::mutate`]. At that point, if the payload is still
/// shared, the mutating handle detaches onto its own copy, so the other
/// handles never observe the write.
pub struct Shared<P> {
    inner: Arc<P>,
}

impl<P> Shared<P> {
    /// Wraps a payload in a fresh, unshared handle.
    #[must_use]
    pub fn new(payload: P) -> Self {
        Self {
            inner: Arc::new(payload),
        }
    }

    /// Returns an immutable view of the payload. Never allocates.
    #[must_use]
    pub fn read(&self) -> &P {
        &self.inner
    }

    /// Number of handles currently referencing this payload.
    #[must_use]
    pub fn share_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Returns true if another handle references the same payload.
    #[must_use]
    pub fn is_shared(&self) -> bool {
        self.share_count() > 1
    }

    /// Returns true if both handles reference the identical payload.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Address of the payload, usable as an identity key.
    #[must_use]
    pub fn addr(&self) -> usize {
        Arc::as_ptr(&self.inner) as usize
    }
}

impl<P: Clone> Shared<P> {
    /// Returns a mutable view of the payload, detaching first if shared.
    ///
    /// May allocate: when the share count is above one the payload is cloned
    /// and this handle is rebound to the clone before the view is returned.
    pub fn mutate(&mut self) -> &mut P {
        Arc::make_mut(&mut self.inner)
    }

    /// Consumes the handle, returning the payload (cloned if still shared).
    #[must_use]
    pub fn into_inner(self) -> P {
        Arc::unwrap_or_clone(self.inner)
    }
}

impl<P> Clone for Shared<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<P: Default> Default for Shared<P> {
    fn default() -> Self {
        Self::new(P::default())
    }
}

impl<P: fmt::Debug> fmt::Debug for Shared<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt(f)
    }
}

impl<P> From<P> for Shared<P> {
    fn from(payload: P) -> Self {
        Self::new(payload)
    }
}
