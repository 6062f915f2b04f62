//! Borrowed view of one stored token.

use core::fmt;

use crate::{Key, Node, NodeSlab};

/// A stored token together with its position in the chain.
///
/// Returned by lookups such as [`SortedList::get`](crate::SortedList::get).
/// The view borrows the chain, so it cannot outlive a mutation.
///
/// # Example
///
/// ```
/// use nexus_sorted::{SortedChain, SortedList};
///
/// let mut chain = SortedChain::new();
/// chain.add("banana");
/// chain.add("Apple");
///
/// let first = chain.first().unwrap();
/// assert_eq!(first.value(), "Apple");
/// assert_eq!(first.next().map(|e| e.value()), Some("banana"));
/// assert!(first.prev().is_none());
/// ```
#[derive(Clone, Copy)]
pub struct Element<'a> {
    storage: &'a NodeSlab,
    key: usize,
    node: &'a Node,
}

impl<'a> Element<'a> {
    #[inline]
    pub(crate) fn new(storage: &'a NodeSlab, key: usize) -> Option<Self> {
        storage.get(key).map(|node| Self { storage, key, node })
    }

    /// The stored token.
    #[inline]
    pub fn value(&self) -> &'a str {
        self.node.value()
    }

    /// Arena key of this element. Stable until the element is removed.
    #[inline]
    pub fn key(&self) -> usize {
        self.key
    }

    /// The element after this one, head to tail.
    #[inline]
    pub fn next(&self) -> Option<Element<'a>> {
        Element::new(self.storage, self.node.next.into_option()?)
    }

    /// The element before this one.
    #[inline]
    pub fn prev(&self) -> Option<Element<'a>> {
        Element::new(self.storage, self.node.prev.into_option()?)
    }
}

impl PartialEq for Element<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && core::ptr::eq(self.storage, other.storage)
    }
}

impl Eq for Element<'_> {}

impl fmt::Debug for Element<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("key", &self.key)
            .field("value", &self.value())
            .finish()
    }
}

impl fmt::Display for Element<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}
