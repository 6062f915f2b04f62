//! Enumerating and dumping a chain.
//!
//! [`Values`] is the lazy sequence behind [`SortedList::print`]: it walks
//! head to tail once and cannot be rewound. The text dump puts every token on
//! its own line.

use core::fmt;
use core::iter::FusedIterator;
use std::io;

use crate::list::Iter;
use crate::{NodeSlab, SortedChain};

#[cfg(doc)]
use crate::SortedList;

/// Iterator over the tokens of a [`SortedChain`], head to tail.
pub struct Values<'a> {
    inner: Iter<'a, NodeSlab, usize>,
}

impl<'a> Iterator for Values<'a> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl DoubleEndedIterator for Values<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl FusedIterator for Values<'_> {}

impl SortedChain {
    /// Returns the tokens in traversal order.
    ///
    /// ```
    /// use nexus_sorted::SortedChain;
    ///
    /// let chain: SortedChain = ["pear", "Fig"].into_iter().collect();
    /// let mut values = chain.values();
    /// assert_eq!(values.next(), Some("Fig"));
    /// assert_eq!(values.next(), Some("pear"));
    /// assert_eq!(values.next(), None);
    /// ```
    #[inline]
    pub fn values(&self) -> Values<'_> {
        Values {
            inner: self.list.iter(&self.storage),
        }
    }

    /// Writes every token to `out`, one per line, head to tail.
    pub fn write_to<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        for value in self.values() {
            writeln!(out, "{value}")?;
        }
        Ok(())
    }
}

impl fmt::Display for SortedChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.values() {
            writeln!(f, "{value}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a SortedChain {
    type Item = &'a str;
    type IntoIter = Values<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.values()
    }
}
