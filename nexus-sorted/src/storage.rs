//! Arena storage with stable keys.
//!
//! Storage hands out a key on insert that stays valid until that entry is
//! removed. Linked structures store these keys in place of pointers, so a
//! removed neighbour can never leave a dangling reference behind.

use crate::Key;

/// Growable slab-like storage with stable keys.
///
/// # Requirements
///
/// Implementations must provide:
/// - **Stable keys**: a key remains valid until explicitly removed
/// - **O(1)** insert, remove, get operations
/// - **Slot reuse**: removed slots can be reused by future inserts
///
/// Insertion is infallible; the arena grows as needed.
pub trait Storage<T> {
    /// Key type for this storage.
    type Key: Key;

    /// Inserts a value, returning its stable key.
    fn insert(&mut self, value: T) -> Self::Key;

    /// Removes and returns the value at `key`, if present.
    fn remove(&mut self, key: Self::Key) -> Option<T>;

    /// Returns a reference to the value at `key`, if present.
    fn get(&self, key: Self::Key) -> Option<&T>;

    /// Returns a mutable reference to the value at `key`, if present.
    fn get_mut(&mut self, key: Self::Key) -> Option<&mut T>;

    /// Number of occupied slots.
    fn len(&self) -> usize;

    /// Returns `true` if no slot is occupied.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every stored value.
    fn clear(&mut self);
}

// =============================================================================
// slab::Slab implementation
// =============================================================================

impl<T> Storage<T> for slab::Slab<T> {
    type Key = usize;

    #[inline]
    fn insert(&mut self, value: T) -> Self::Key {
        slab::Slab::insert(self, value)
    }

    #[inline]
    fn remove(&mut self, key: Self::Key) -> Option<T> {
        self.try_remove(key)
    }

    #[inline]
    fn get(&self, key: Self::Key) -> Option<&T> {
        slab::Slab::get(self, key)
    }

    #[inline]
    fn get_mut(&mut self, key: Self::Key) -> Option<&mut T> {
        slab::Slab::get_mut(self, key)
    }

    #[inline]
    fn len(&self) -> usize {
        slab::Slab::len(self)
    }

    #[inline]
    fn clear(&mut self) {
        slab::Slab::clear(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_get_remove() {
        let mut storage: slab::Slab<String> = slab::Slab::new();

        let key = Storage::insert(&mut storage, "alpha".to_string());
        assert_eq!(Storage::get(&storage, key).map(String::as_str), Some("alpha"));
        assert_eq!(Storage::len(&storage), 1);

        assert_eq!(Storage::remove(&mut storage, key).as_deref(), Some("alpha"));
        assert!(Storage::get(&storage, key).is_none());
        assert!(Storage::is_empty(&storage));
    }

    #[test]
    fn remove_nonexistent() {
        let mut storage: slab::Slab<u64> = slab::Slab::new();

        let key = Storage::insert(&mut storage, 42u64);
        Storage::remove(&mut storage, key);

        // Double remove returns None
        assert_eq!(Storage::remove(&mut storage, key), None);
        assert_eq!(Storage::remove(&mut storage, 1_000), None);
    }

    #[test]
    fn slot_reuse() {
        let mut storage: slab::Slab<u64> = slab::Slab::new();

        let k1 = Storage::insert(&mut storage, 1u64);
        Storage::remove(&mut storage, k1);

        let k2 = Storage::insert(&mut storage, 2u64);
        assert_eq!(k1, k2);
    }

    #[test]
    fn get_mut_and_clear() {
        let mut storage: slab::Slab<u64> = slab::Slab::new();

        let key = Storage::insert(&mut storage, 1u64);
        if let Some(value) = Storage::get_mut(&mut storage, key) {
            *value = 5;
        }
        assert_eq!(Storage::get(&storage, key), Some(&5));

        Storage::clear(&mut storage);
        assert!(Storage::is_empty(&storage));
    }
}
