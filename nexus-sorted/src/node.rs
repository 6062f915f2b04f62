//! The chain cell: one token plus its two neighbour links.

use crate::Key;

/// A stored token and its `prev`/`next` links.
///
/// Nodes are created by the chain after validation and live in its arena.
/// Callers see them through [`Element`](crate::Element).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<K: Key = usize> {
    pub(crate) value: String,
    pub(crate) prev: K,
    pub(crate) next: K,
}

impl<K: Key> Node<K> {
    /// Creates a new unlinked node.
    #[inline]
    pub(crate) fn new(value: String) -> Self {
        Self {
            value,
            prev: K::NONE,
            next: K::NONE,
        }
    }

    /// Returns the stored token.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Exchanges the two links, turning this node around in place.
    #[inline]
    pub(crate) fn swap_links(&mut self) {
        core::mem::swap(&mut self.prev, &mut self.next);
    }
}
