//! Doubly-linked list of tokens over external storage.
//!
//! Nodes live in user-provided [`Storage`]; the list only tracks head, tail
//! and length, and rewires `prev`/`next` keys. Splicing and unlinking are O(1)
//! once the key is known, and nothing is ever moved in memory.
//!
//! # Storage Invariant
//!
//! A list instance must always be used with the same storage instance.
//! Every access is checked, so a wrong storage or a key that belongs to
//! another list cannot corrupt memory. `unlink` refuses keys whose
//! neighbours do not point back at them or whose missing neighbour is not
//! this list's head or tail. An interior node of a different list that
//! shares the same storage still passes those checks, so keep each key
//! with the list that linked it.
//!
//! # Example
//!
//! ```
//! use nexus_sorted::{List, NodeSlab};
//!
//! let mut storage = NodeSlab::new();
//! let mut list: List<NodeSlab> = List::new();
//!
//! let a = list.push_back(&mut storage, "alpha".into());
//! let c = list.push_back(&mut storage, "gamma".into());
//! list.insert_before(&mut storage, c, "beta".into());
//!
//! let values: Vec<_> = list.iter(&storage).collect();
//! assert_eq!(values, ["alpha", "beta", "gamma"]);
//!
//! list.reverse(&mut storage);
//! assert_eq!(list.front_key(), Some(c));
//! assert_eq!(list.back_key(), Some(a));
//! ```

use std::marker::PhantomData;

use crate::{Key, Node, Storage};

/// Slab storage for chain nodes.
pub type NodeSlab = slab::Slab<Node<usize>>;

/// A doubly-linked list over external storage.
///
/// The list tracks head, tail, and length. Nodes live in user-provided
/// storage, wrapped in [`Node`].
#[derive(Debug)]
pub struct List<S, K: Key = usize>
where
    S: Storage<Node<K>, Key = K>,
{
    head: K,
    tail: K,
    len: usize,
    _marker: PhantomData<S>,
}

impl<S, K: Key> Default for List<S, K>
where
    S: Storage<Node<K>, Key = K>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S, K: Key> List<S, K>
where
    S: Storage<Node<K>, Key = K>,
{
    /// Creates an empty list.
    #[inline]
    pub const fn new() -> Self {
        Self {
            head: K::NONE,
            tail: K::NONE,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the head node's key, or `None` if empty.
    #[inline]
    pub fn front_key(&self) -> Option<K> {
        self.head.into_option()
    }

    /// Returns the tail node's key, or `None` if empty.
    #[inline]
    pub fn back_key(&self) -> Option<K> {
        self.tail.into_option()
    }

    // ========================================================================
    // Insert operations (allocate + link)
    // ========================================================================

    /// Stores `value` and links it at the back.
    #[inline]
    pub fn push_back(&mut self, storage: &mut S, value: String) -> K {
        let key = storage.insert(Node::new(value));
        self.link_back(storage, key);
        key
    }

    /// Stores `value` and links it immediately before `before`.
    ///
    /// Falls back to the back of the list if `before` is not a stored key.
    #[inline]
    pub fn insert_before(&mut self, storage: &mut S, before: K, value: String) -> K {
        let key = storage.insert(Node::new(value));
        if !self.link_before(storage, before, key) {
            self.link_back(storage, key);
        }
        key
    }

    // ========================================================================
    // Link operations (just relink, no alloc/dealloc)
    // ========================================================================

    /// Links an existing, unlinked node to the back of the list.
    ///
    /// Returns `false` if `key` is not in storage.
    pub fn link_back(&mut self, storage: &mut S, key: K) -> bool {
        let tail = self.tail;
        let Some(node) = storage.get_mut(key) else {
            return false;
        };
        node.prev = tail;
        node.next = K::NONE;

        match storage.get_mut(tail) {
            Some(old_tail) => old_tail.next = key,
            None => self.head = key,
        }

        self.tail = key;
        self.len += 1;
        true
    }

    /// Links an existing, unlinked node immediately before `before`.
    ///
    /// Returns `false` if either key is not in storage.
    pub fn link_before(&mut self, storage: &mut S, before: K, key: K) -> bool {
        let Some(prev) = storage.get(before).map(|node| node.prev) else {
            return false;
        };
        let Some(node) = storage.get_mut(key) else {
            return false;
        };
        node.next = before;
        node.prev = prev;

        if let Some(successor) = storage.get_mut(before) {
            successor.prev = key;
        }

        match storage.get_mut(prev) {
            Some(predecessor) => predecessor.next = key,
            None => self.head = key,
        }

        self.len += 1;
        true
    }

    /// Unlinks a node from the list without deallocating.
    ///
    /// Neighbours are joined to each other; at either end the list's
    /// head or tail moves instead. Returns `true` if the node was in the list.
    pub fn unlink(&mut self, storage: &mut S, key: K) -> bool {
        let Some((prev, next)) = storage.get(key).map(|node| (node.prev, node.next)) else {
            return false;
        };

        if self.len == 0 || !self.is_linked(storage, key, prev, next) {
            return false;
        }

        match storage.get_mut(prev) {
            Some(predecessor) => predecessor.next = next,
            None => self.head = next,
        }

        match storage.get_mut(next) {
            Some(successor) => successor.prev = prev,
            None => self.tail = prev,
        }

        if let Some(node) = storage.get_mut(key) {
            node.prev = K::NONE;
            node.next = K::NONE;
        }

        self.len -= 1;
        true
    }

    /// Returns `true` if both neighbours of `key` agree it sits between them,
    /// with this list's head or tail standing in for a missing neighbour.
    fn is_linked(&self, storage: &S, key: K, prev: K, next: K) -> bool {
        let back = match storage.get(prev) {
            Some(predecessor) => predecessor.next == key,
            None => prev.is_none() && self.is_head(key),
        };
        let forward = match storage.get(next) {
            Some(successor) => successor.prev == key,
            None => next.is_none() && self.is_tail(key),
        };
        back && forward
    }

    // ========================================================================
    // Remove operations (unlink + deallocate)
    // ========================================================================

    /// Unlinks and deallocates the node at `key`, returning its token.
    #[inline]
    pub fn remove(&mut self, storage: &mut S, key: K) -> Option<String> {
        if !self.unlink(storage, key) {
            return None;
        }
        storage.remove(key).map(|node| node.value)
    }

    /// Removes and returns the front token.
    #[inline]
    pub fn pop_front(&mut self, storage: &mut S) -> Option<String> {
        let key = self.front_key()?;
        self.remove(storage, key)
    }

    /// Removes and returns the back token.
    #[inline]
    pub fn pop_back(&mut self, storage: &mut S) -> Option<String> {
        let key = self.back_key()?;
        self.remove(storage, key)
    }

    /// Deallocates every node and resets the list.
    pub fn clear(&mut self, storage: &mut S) {
        let mut current = self.head;
        while let Some(node) = storage.remove(current) {
            current = node.next;
        }
        self.head = K::NONE;
        self.tail = K::NONE;
        self.len = 0;
    }

    // ========================================================================
    // Reordering
    // ========================================================================

    /// Reverses traversal direction in place.
    ///
    /// Every node's `prev` and `next` are exchanged and head and tail trade
    /// places. O(n); no token is copied or moved.
    pub fn reverse(&mut self, storage: &mut S) {
        if self.len < 2 {
            return;
        }

        let mut current = self.head;
        while let Some(node) = storage.get_mut(current) {
            let next = node.next;
            node.swap_links();
            current = next;
        }

        core::mem::swap(&mut self.head, &mut self.tail);
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Returns `true` if `key` is the head node.
    #[inline]
    pub fn is_head(&self, key: K) -> bool {
        self.head == key
    }

    /// Returns `true` if `key` is the tail node.
    #[inline]
    pub fn is_tail(&self, key: K) -> bool {
        self.tail == key
    }

    /// Returns the key of the previous node before `key`.
    ///
    /// Returns `None` if `key` is the head or invalid.
    #[inline]
    pub fn prev_key(&self, storage: &S, key: K) -> Option<K> {
        storage.get(key)?.prev.into_option()
    }

    /// Returns the key at 0-based position `index`, walking from the head.
    pub fn key_at(&self, storage: &S, index: usize) -> Option<K> {
        if index >= self.len {
            return None;
        }
        self.keys(storage).nth(index)
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Returns an iterator over tokens, front to back.
    #[inline]
    pub fn iter<'a>(&self, storage: &'a S) -> Iter<'a, S, K> {
        Iter {
            keys: self.keys(storage),
        }
    }

    /// Returns an iterator over keys, front to back.
    ///
    /// Useful when you plan to modify the list afterwards (collect keys first).
    #[inline]
    pub fn keys<'a>(&self, storage: &'a S) -> Keys<'a, S, K> {
        Keys {
            storage,
            front: self.head,
            back: self.tail,
        }
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over list keys.
pub struct Keys<'a, S, K: Key> {
    storage: &'a S,
    front: K,
    back: K,
}

impl<S, K: Key> Iterator for Keys<'_, S, K>
where
    S: Storage<Node<K>, Key = K>,
{
    type Item = K;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let key = self.front;
        let node = self.storage.get(key)?;

        // Check if we've met in the middle
        if self.front == self.back {
            self.front = K::NONE;
            self.back = K::NONE;
        } else {
            self.front = node.next;
        }

        Some(key)
    }
}

impl<S, K: Key> DoubleEndedIterator for Keys<'_, S, K>
where
    S: Storage<Node<K>, Key = K>,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let key = self.back;
        let node = self.storage.get(key)?;

        if self.front == self.back {
            self.front = K::NONE;
            self.back = K::NONE;
        } else {
            self.back = node.prev;
        }

        Some(key)
    }
}

/// Iterator over list tokens.
pub struct Iter<'a, S, K: Key> {
    keys: Keys<'a, S, K>,
}

impl<'a, S, K: Key + 'a> Iterator for Iter<'a, S, K>
where
    S: Storage<Node<K>, Key = K>,
{
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let key = self.keys.next()?;
        self.keys.storage.get(key).map(Node::value)
    }
}

impl<'a, S, K: Key + 'a> DoubleEndedIterator for Iter<'a, S, K>
where
    S: Storage<Node<K>, Key = K>,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let key = self.keys.next_back()?;
        self.keys.storage.get(key).map(Node::value)
    }
}
