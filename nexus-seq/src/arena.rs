//! Growable slab arena with stable keys.
//!
//! The linked stores keep their nodes here and link them by key instead of
//! by pointer. A key stays valid until its entry is removed; removed slots
//! go on a LIFO free stack and are reused by the next insert. The arena
//! keeps its peak size until it drains completely.
//!
//! Allocation is fallible: growing the entry vector goes through
//! `try_reserve`, and an insert fails with
//! [`SeqError::AllocationFailure`] when memory is exhausted or when the key
//! type cannot address the new slot.

use core::ops::{Index, IndexMut};

use crate::{Key, Result, SeqError};

/// Slab-like node storage addressed by `K`.
///
/// # Example
///
/// ```
/// use nexus_seq::Arena;
///
/// let mut arena: Arena<&str> = Arena::new();
/// let a = arena.try_insert("a").unwrap();
/// let b = arena.try_insert("b").unwrap();
///
/// assert_eq!(arena[a], "a");
/// assert_eq!(arena.remove(a), Some("a"));
///
/// // LIFO slot reuse
/// let c = arena.try_insert("c").unwrap();
/// assert_eq!(c, a);
/// assert_eq!(arena[b], "b");
/// ```
#[derive(Clone)]
pub struct Arena<T, K: Key = u32> {
    entries: Vec<Option<T>>,
    free: Vec<K>,
}

impl<T, K: Key> Default for Arena<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K: Key> Arena<T, K> {
    /// Creates an empty arena without allocating.
    #[inline]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Returns the number of occupied slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len() - self.free.len()
    }

    /// Returns `true` if no slots are occupied.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of slots the arena can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Inserts a value, returning its stable key.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::AllocationFailure`] if the entry storage cannot
    /// grow or `K` cannot address another slot. The arena is unchanged.
    pub fn try_insert(&mut self, value: T) -> Result<K> {
        if let Some(key) = self.free.pop() {
            self.entries[key.as_usize()] = Some(value);
            return Ok(key);
        }

        let slot = self.entries.len();
        let requested = slot + 1;
        let key = K::try_from_usize(slot).ok_or(SeqError::AllocationFailure { requested })?;

        let old_capacity = self.entries.capacity();
        self.entries
            .try_reserve(1)
            .map_err(|_| SeqError::AllocationFailure { requested })?;
        // The free stack must be able to take back every slot without
        // allocating, so removal stays infallible.
        self.free
            .try_reserve(requested - self.free.len())
            .map_err(|_| SeqError::AllocationFailure { requested })?;

        if self.entries.capacity() != old_capacity {
            tracing::trace!(
                old_capacity,
                new_capacity = self.entries.capacity(),
                "arena grew"
            );
        }

        self.entries.push(Some(value));
        Ok(key)
    }

    /// Removes and returns the value at `key`, if present.
    ///
    /// Vacated slots keep their entry memory for reuse while anything else
    /// is stored. Removing the last occupied slot releases the storage, as
    /// [`clear`](Arena::clear) does, so a drained arena holds nothing.
    pub fn remove(&mut self, key: K) -> Option<T> {
        let value = self.entries.get_mut(key.as_usize())?.take()?;
        self.free.push(key);
        if self.free.len() == self.entries.len() {
            tracing::trace!(released = self.entries.capacity(), "arena drained");
            self.clear();
        }
        Some(value)
    }

    /// Returns a reference to the value at `key`, if present.
    #[inline]
    pub fn get(&self, key: K) -> Option<&T> {
        self.entries.get(key.as_usize())?.as_ref()
    }

    /// Returns a mutable reference to the value at `key`, if present.
    #[inline]
    pub fn get_mut(&mut self, key: K) -> Option<&mut T> {
        self.entries.get_mut(key.as_usize())?.as_mut()
    }

    /// Removes every value and releases the entry storage.
    pub fn clear(&mut self) {
        self.entries = Vec::new();
        self.free = Vec::new();
    }
}

/// # Panics
///
/// Panics if `key` is vacant or out of bounds. Stores only index with keys
/// reached through their own links.
impl<T, K: Key> Index<K> for Arena<T, K> {
    type Output = T;

    #[inline]
    fn index(&self, key: K) -> &T {
        match self.get(key) {
            Some(value) => value,
            None => panic!("vacant arena key {key:?}"),
        }
    }
}

impl<T, K: Key> IndexMut<K> for Arena<T, K> {
    #[inline]
    fn index_mut(&mut self, key: K) -> &mut T {
        match self.get_mut(key) {
            Some(value) => value,
            None => panic!("vacant arena key {key:?}"),
        }
    }
}

impl<T: core::fmt::Debug, K: Key> core::fmt::Debug for Arena<T, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Arena")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}
