//! Link keys with a reserved "no link" sentinel.
//!
//! Nodes refer to their neighbours by storage key rather than by pointer.
//! An absent neighbour is encoded as [`Key::NONE`] so a node carries two plain
//! integers instead of two `Option`s. The sentinel never leaves the crate:
//! public accessors translate it into `None`.

/// A copyable storage key with a sentinel "no link" value.
///
/// # Example
///
/// ```
/// use nexus_sorted::Key;
///
/// let key: usize = 7;
/// assert!(key.is_some());
/// assert!(usize::NONE.is_none());
/// assert_eq!(usize::NONE.into_option(), None);
/// ```
pub trait Key: Copy + Eq {
    /// Sentinel value meaning "no neighbour".
    const NONE: Self;

    /// Returns `true` if this is the sentinel value.
    #[inline]
    fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    /// Returns `true` if this is NOT the sentinel value.
    #[inline]
    fn is_some(&self) -> bool {
        !self.is_none()
    }

    /// Converts the sentinel into `None`, anything else into `Some`.
    #[inline]
    fn into_option(self) -> Option<Self> {
        if self.is_none() { None } else { Some(self) }
    }
}

impl Key for usize {
    const NONE: Self = usize::MAX;
}
