//! Index-indirected store: element buffer plus a position -> slot map.
//!
//! Elements are appended to the next free physical slot and never move on
//! insert; only the slot array is shifted. Positional reads go through one
//! indirection (`elems[slots[i]]`).
//!
//! # Dense slots
//!
//! The slot array is kept dense after every structural change: with `n`
//! elements, `slots` is always a permutation of `0..n`. Removing a slot
//! `s` therefore compacts the element buffer and renumbers every slot
//! greater than `s`, an O(n) pass. Insertion shifts the slot array, also
//! O(n) in the worst case. Both element and slot buffers share one
//! capacity and grow/shrink together under the [`GrowthPolicy`].
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `get` / `set` / `get_and_set` | O(1) |
//! | `insert` | O(n - i) slot shift, O(n) when growing |
//! | `remove` / `delete` / `get_and_delete` | O(n) |
//!
//! # Example
//!
//! ```
//! use nexus_seq::{IndexedStore, SeqStore};
//!
//! let mut store: IndexedStore<char> = IndexedStore::new();
//! store.push_back('b').unwrap();
//! store.push_front('a').unwrap();
//! store.push_back('c').unwrap();
//!
//! assert_eq!(store.to_vec(), vec!['a', 'b', 'c']);
//! // physical slots in insertion order
//! assert_eq!(store.slots(), &[1, 0, 2]);
//! ```

use core::iter::FusedIterator;
use core::slice;

use crate::store::impl_store_common;
use crate::{GrowthPolicy, Key, Result, SeqError, SeqStore};

/// Sequence backed by an element buffer and a position -> slot index array.
///
/// `K` is the slot index type. It bounds the number of elements: a store
/// keyed by `u16` holds at most `u16::MAX` elements.
pub struct IndexedStore<T, K: Key = u32> {
    elems: Vec<T>,
    slots: Vec<K>,
    capacity: usize,
    policy: GrowthPolicy,
}

impl<T: Copy, K: Key> Default for IndexedStore<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy, K: Key> Clone for IndexedStore<T, K> {
    fn clone(&self) -> Self {
        let mut elems = Vec::with_capacity(self.capacity);
        elems.extend_from_slice(&self.elems);
        let mut slots = Vec::with_capacity(self.capacity);
        slots.extend_from_slice(&self.slots);
        Self {
            elems,
            slots,
            capacity: self.capacity,
            policy: self.policy,
        }
    }
}

impl<T: Copy, K: Key> IndexedStore<T, K> {
    /// Creates an empty store with the default policy. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self::with_policy(GrowthPolicy::DEFAULT)
    }

    /// Creates an empty store with a custom growth policy.
    #[inline]
    pub const fn with_policy(policy: GrowthPolicy) -> Self {
        Self {
            elems: Vec::new(),
            slots: Vec::new(),
            capacity: 0,
            policy,
        }
    }

    /// Returns the shared capacity of the element and slot buffers.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the growth policy.
    #[inline]
    pub const fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    /// Returns the position -> physical slot map.
    #[inline]
    pub fn slots(&self) -> &[K] {
        &self.slots
    }

    #[inline]
    fn slot(&self, index: usize) -> Result<usize> {
        self.slots
            .get(index)
            .map(Key::as_usize)
            .ok_or(SeqError::out_of_range(index, self.slots.len()))
    }

    /// Allocates empty element and slot buffers of `capacity`.
    ///
    /// Either both succeed or neither is kept.
    fn allocate(capacity: usize) -> Result<(Vec<T>, Vec<K>)> {
        let failed = |_| SeqError::AllocationFailure {
            requested: capacity,
        };
        let mut elems = Vec::new();
        elems.try_reserve_exact(capacity).map_err(failed)?;
        let mut slots = Vec::new();
        slots.try_reserve_exact(capacity).map_err(failed)?;
        Ok((elems, slots))
    }

    fn grow_and_insert(&mut self, index: usize, slot: K, value: T) -> Result<()> {
        let new_capacity = self
            .policy
            .grow(self.capacity)
            .ok_or(SeqError::AllocationFailure {
                requested: usize::MAX,
            })?;
        let (mut elems, mut slots) = Self::allocate(new_capacity)?;

        elems.extend_from_slice(&self.elems);
        elems.push(value);

        slots.extend_from_slice(&self.slots[..index]);
        slots.push(slot);
        slots.extend_from_slice(&self.slots[index..]);

        tracing::trace!(
            strategy = "indexed",
            old_capacity = self.capacity,
            new_capacity,
            "grow"
        );
        self.elems = elems;
        self.slots = slots;
        self.capacity = new_capacity;
        Ok(())
    }

    /// Removes position `index` into fresh, smaller buffers.
    fn shrink_and_remove(&mut self, index: usize) -> Result<T> {
        let slot = self.slots[index].as_usize();
        let new_capacity = self.policy.shrink_target(self.slots.len());
        let (mut elems, mut slots) = Self::allocate(new_capacity)?;

        let value = self.elems[slot];
        elems.extend_from_slice(&self.elems[..slot]);
        elems.extend_from_slice(&self.elems[slot + 1..]);

        slots.extend_from_slice(&self.slots[..index]);
        slots.extend_from_slice(&self.slots[index + 1..]);

        tracing::trace!(
            strategy = "indexed",
            old_capacity = self.capacity,
            new_capacity,
            "shrink"
        );
        self.elems = elems;
        self.slots = slots;
        self.capacity = new_capacity;
        self.renumber_after(slot);
        Ok(value)
    }

    /// Closes the gap left by physical slot `removed`.
    #[inline]
    fn renumber_after(&mut self, removed: usize) {
        for slot in &mut self.slots {
            let s = slot.as_usize();
            if s > removed {
                *slot = K::from_usize(s - 1);
            }
        }
    }
}

impl<T: Copy, K: Key> SeqStore<T> for IndexedStore<T, K> {
    type Iter<'a>
        = Iter<'a, T, K>
    where
        T: 'a,
        K: 'a;

    #[inline]
    fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    fn get_ref(&self, index: usize) -> Result<&T> {
        let slot = self.slot(index)?;
        Ok(&self.elems[slot])
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let slot = self.slot(index)?;
        Ok(&mut self.elems[slot])
    }

    fn insert(&mut self, index: usize, value: T) -> Result<()> {
        let len = self.slots.len();
        if index > len {
            return Err(SeqError::out_of_range(index, len));
        }

        // The new element always takes the next physical slot.
        let slot = K::try_from_usize(len).ok_or(SeqError::AllocationFailure {
            requested: len + 1,
        })?;

        if len >= self.capacity {
            return self.grow_and_insert(index, slot, value);
        }

        self.elems.push(value);
        self.slots.insert(index, slot);
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        let slot = self.slot(index)?;

        if self.policy.should_shrink(self.slots.len(), self.capacity) {
            return self.shrink_and_remove(index);
        }

        let value = self.elems.remove(slot);
        self.slots.remove(index);
        self.renumber_after(slot);
        Ok(value)
    }

    /// Removes and returns the element at `index`; the last position takes
    /// its place. **Does not preserve order.**
    ///
    /// The physical buffer is still compacted, so this is O(n). When the
    /// removal triggers a shrink the order is preserved instead.
    fn get_and_delete(&mut self, index: usize) -> Result<T> {
        let slot = self.slot(index)?;

        if self.policy.should_shrink(self.slots.len(), self.capacity) {
            return self.shrink_and_remove(index);
        }

        let value = self.elems.remove(slot);
        self.slots.swap_remove(index);
        self.renumber_after(slot);
        Ok(value)
    }

    fn clear(&mut self) {
        self.elems = Vec::new();
        self.slots = Vec::new();
        self.capacity = 0;
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        Iter {
            elems: &self.elems,
            slots: self.slots.iter(),
        }
    }
}

impl_store_common!(IndexedStore<T, K>);

/// Positional iterator over an [`IndexedStore`].
pub struct Iter<'a, T, K> {
    elems: &'a [T],
    slots: slice::Iter<'a, K>,
}

impl<'a, T, K: Key> Iterator for Iter<'a, T, K> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.slots.next()?;
        Some(&self.elems[slot.as_usize()])
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T, K: Key> DoubleEndedIterator for Iter<'_, T, K> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let slot = self.slots.next_back()?;
        Some(&self.elems[slot.as_usize()])
    }
}

impl<T, K: Key> ExactSizeIterator for Iter<'_, T, K> {}

impl<T, K: Key> FusedIterator for Iter<'_, T, K> {}
