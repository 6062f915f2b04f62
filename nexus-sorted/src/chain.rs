//! The self-ordering chain and its capability trait.
//!
//! [`SortedChain`] owns its node arena and keeps every token sorted
//! case-insensitively in its current [`Direction`]. Flipping the direction
//! reverses the links in place instead of re-sorting.
//!
//! Nothing here reports errors. Invalid or duplicate input is ignored,
//! out-of-range access yields `None` or `false`, and the chain is left as it
//! was. [`SortedChain::try_add`] is the one place that says *why* an insert
//! was refused.
//!
//! # Example
//!
//! ```
//! use nexus_sorted::{SortedChain, SortedList};
//!
//! let mut chain = SortedChain::new();
//! chain.add("banana");
//! chain.add("Apple");
//! chain.add("cherry");
//! chain.add("abc123"); // ignored
//! chain.add("APPLE"); // ignored, duplicate
//!
//! assert_eq!(chain.values().collect::<Vec<_>>(), ["Apple", "banana", "cherry"]);
//!
//! chain.order_descending();
//! assert_eq!(chain.values().collect::<Vec<_>>(), ["cherry", "banana", "Apple"]);
//!
//! assert!(chain.remove("BANANA"));
//! assert_eq!(chain.size(), 2);
//! ```

use crate::{Direction, Element, List, NodeSlab, Rejected, token};

/// Operations of a self-ordering token list.
///
/// Indices are 0-based from the head. Lookups return `None` and removals
/// return `false` when there is nothing to act on.
pub trait SortedList {
    /// Number of stored tokens.
    fn size(&self) -> usize;

    /// Inserts `value` at its sorted position.
    ///
    /// Silently ignored if `value` is not a non-empty run of ASCII letters
    /// or an equal token (ignoring case) is already stored.
    fn add(&mut self, value: &str);

    /// Element at `index`, or `None` if out of range.
    fn get(&self, index: usize) -> Option<Element<'_>>;

    /// Head element, or `None` if empty.
    fn first(&self) -> Option<Element<'_>>;

    /// Tail element, or `None` if empty.
    fn last(&self) -> Option<Element<'_>>;

    /// Returns `true` if a token equal to `value` (ignoring case) is stored.
    fn is_present(&self, value: &str) -> bool;

    /// Removes the head element. Returns `false` if empty.
    fn remove_first(&mut self) -> bool;

    /// Removes the tail element. Returns `false` if empty.
    fn remove_last(&mut self) -> bool;

    /// Removes the element at `index`. Returns `false` if out of range.
    fn remove_at(&mut self, index: usize) -> bool;

    /// Removes the token equal to `value` (ignoring case).
    /// Returns `false` if there is none.
    fn remove(&mut self, value: &str) -> bool;

    /// Switches to ascending order. No-op if already ascending.
    fn order_ascending(&mut self);

    /// Switches to descending order. No-op if already descending.
    fn order_descending(&mut self);

    /// Writes every token to stdout, one per line, head to tail.
    fn print(&self);
}

/// A sorted, duplicate-free chain of alphabetic tokens.
///
/// Tokens live in a slab arena and are linked by key. The chain tracks head,
/// tail and length, so `size`, `first` and `last` are O(1); positional access
/// and value lookups walk from the head.
#[derive(Debug, Default)]
pub struct SortedChain {
    pub(crate) storage: NodeSlab,
    pub(crate) list: List<NodeSlab>,
    direction: Direction,
}

impl SortedChain {
    /// Creates an empty ascending chain.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty ascending chain with room for `capacity` tokens
    /// before the arena reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: NodeSlab::with_capacity(capacity),
            list: List::new(),
            direction: Direction::default(),
        }
    }

    /// Creates an empty chain that starts out in `direction`.
    pub fn with_direction(direction: Direction) -> Self {
        Self {
            direction,
            ..Self::default()
        }
    }

    /// Current ordering direction.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns `true` if the chain holds no tokens.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Inserts `value` at its sorted position, returning the new element's key.
    ///
    /// # Errors
    ///
    /// - [`Rejected::NotAlphabetic`] if `value` is not one or more ASCII letters
    /// - [`Rejected::Duplicate`] if an equal token (ignoring case) is stored
    ///
    /// The chain is unchanged on error.
    pub fn try_add(&mut self, value: &str) -> Result<usize, Rejected> {
        if !token::is_token(value) {
            return Err(Rejected::NotAlphabetic(value.to_owned()));
        }
        if self.is_present(value) {
            return Err(Rejected::Duplicate(value.to_owned()));
        }

        let direction = self.direction;
        let successor = self
            .list
            .keys(&self.storage)
            .find(|&key| direction.goes_after(self.storage[key].value(), value));

        let key = match successor {
            Some(before) => self
                .list
                .insert_before(&mut self.storage, before, value.to_owned()),
            None => self.list.push_back(&mut self.storage, value.to_owned()),
        };
        Ok(key)
    }

    /// 0-based position of the token equal to `value` (ignoring case).
    ///
    /// Each element is compared once, head to tail.
    pub fn position(&self, value: &str) -> Option<usize> {
        self.list
            .iter(&self.storage)
            .position(|stored| token::matches(stored, value))
    }

    /// Drops every token. The direction is kept.
    pub fn clear(&mut self) {
        self.list.clear(&mut self.storage);
    }

    /// Reverses every link in place and makes the former tail the head.
    fn reverse_links(&mut self) {
        self.list.reverse(&mut self.storage);
    }

    fn reorder(&mut self, direction: Direction) {
        if self.direction == direction {
            return;
        }
        self.reverse_links();
        self.direction = direction;
        log::trace!("chain of {} reordered {direction}", self.list.len());
    }
}

impl SortedList for SortedChain {
    #[inline]
    fn size(&self) -> usize {
        self.list.len()
    }

    fn add(&mut self, value: &str) {
        if let Err(rejected) = self.try_add(value) {
            log::trace!("ignored add: {rejected}");
        }
    }

    fn get(&self, index: usize) -> Option<Element<'_>> {
        let key = self.list.key_at(&self.storage, index)?;
        Element::new(&self.storage, key)
    }

    #[inline]
    fn first(&self) -> Option<Element<'_>> {
        Element::new(&self.storage, self.list.front_key()?)
    }

    #[inline]
    fn last(&self) -> Option<Element<'_>> {
        Element::new(&self.storage, self.list.back_key()?)
    }

    fn is_present(&self, value: &str) -> bool {
        self.position(value).is_some()
    }

    fn remove_first(&mut self) -> bool {
        self.list.pop_front(&mut self.storage).is_some()
    }

    fn remove_last(&mut self) -> bool {
        self.list.pop_back(&mut self.storage).is_some()
    }

    fn remove_at(&mut self, index: usize) -> bool {
        let Some(key) = self.list.key_at(&self.storage, index) else {
            return false;
        };
        self.list.remove(&mut self.storage, key).is_some()
    }

    fn remove(&mut self, value: &str) -> bool {
        match self.position(value) {
            Some(index) => self.remove_at(index),
            None => false,
        }
    }

    #[inline]
    fn order_ascending(&mut self) {
        self.reorder(Direction::Ascending);
    }

    #[inline]
    fn order_descending(&mut self) {
        self.reorder(Direction::Descending);
    }

    fn print(&self) {
        let mut stdout = std::io::stdout().lock();
        if let Err(err) = self.write_to(&mut stdout) {
            log::warn!("failed to print chain: {err}");
        }
    }
}

impl<S: AsRef<str>> Extend<S> for SortedChain {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for value in iter {
            self.add(value.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for SortedChain {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut chain = SortedChain::new();
        chain.extend(iter);
        chain
    }
}
