//! Circular doubly-linked store.
//!
//! Nodes form a closed ring: every node has live `prev` and `next` links
//! and the last node is `first.prev`. A single node links to itself on both
//! sides. No link is ever `K::NONE` while the node is in the ring, so both
//! ends are reachable in O(1) and [`rotate`](RingStore::rotate) only moves
//! the `first` marker.
//!
//! Positional lookup walks forward from `first` when `i <= len / 2`, and
//! backward from `first.prev` otherwise.
//!
//! # Example
//!
//! ```
//! use nexus_seq::{RingStore, SeqStore};
//!
//! let mut ring: RingStore<u8> = (1..=5).collect();
//! ring.rotate(2);
//! assert_eq!(ring.to_vec(), vec![3, 4, 5, 1, 2]);
//!
//! assert_eq!(ring.pop_back(), Ok(2));
//! assert_eq!(ring.back(), Some(&1));
//! ```

use core::iter::FusedIterator;

use crate::doubly::Node;
use crate::store::impl_store_common;
use crate::{Arena, Key, Result, SeqError, SeqStore};

/// Sequence backed by a circular doubly-linked node chain.
pub struct RingStore<T, K: Key = u32> {
    nodes: Arena<Node<T, K>, K>,
    first: K,
    len: usize,
}

impl<T: Copy, K: Key> Default for RingStore<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy, K: Key> Clone for RingStore<T, K> {
    fn clone(&self) -> Self {
        let mut store = Self::new();
        store.extend(self.iter().copied());
        store
    }
}

impl<T: Copy, K: Key> RingStore<T, K> {
    /// Creates an empty ring. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            first: K::NONE,
            len: 0,
        }
    }

    /// Returns the element at position 0.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.nodes.get(self.first).map(|node| &node.value)
    }

    /// Returns the element at position `len - 1`.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        let last = self.nodes.get(self.first)?.prev;
        Some(&self.nodes[last].value)
    }

    /// Moves the start of the ring forward by `n` positions, so the element
    /// previously at position `n % len` is now at position 0.
    ///
    /// Walks O(min(n, len - n)) links. No-op on an empty ring.
    ///
    /// ```
    /// use nexus_seq::{RingStore, SeqStore};
    ///
    /// let mut ring: RingStore<u32> = (0..4).collect();
    /// ring.rotate(5);
    /// assert_eq!(ring.to_vec(), vec![1, 2, 3, 0]);
    /// ```
    pub fn rotate(&mut self, n: usize) {
        if self.len == 0 {
            return;
        }
        self.first = self.node_at(n % self.len);
    }

    /// Returns the key of the node at `index`. `index` must be in range.
    fn node_at(&self, index: usize) -> K {
        if index <= self.len / 2 {
            let mut key = self.first;
            for _ in 0..index {
                key = self.nodes[key].next;
            }
            key
        } else {
            let mut key = self.nodes[self.first].prev;
            for _ in index + 1..self.len {
                key = self.nodes[key].prev;
            }
            key
        }
    }

    #[inline]
    fn checked_node(&self, index: usize) -> Result<K> {
        if index >= self.len {
            return Err(SeqError::out_of_range(index, self.len));
        }
        Ok(self.node_at(index))
    }

    /// Links an unlinked node directly before `before` on the ring.
    #[inline]
    fn link_before(&mut self, before: K, key: K) {
        let prev = self.nodes[before].prev;
        let node = &mut self.nodes[key];
        node.prev = prev;
        node.next = before;
        self.nodes[prev].next = key;
        self.nodes[before].prev = key;
    }
}

impl<T: Copy, K: Key> SeqStore<T> for RingStore<T, K> {
    type Iter<'a>
        = Iter<'a, T, K>
    where
        T: 'a,
        K: 'a;

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    fn get_ref(&self, index: usize) -> Result<&T> {
        let key = self.checked_node(index)?;
        Ok(&self.nodes[key].value)
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let key = self.checked_node(index)?;
        Ok(&mut self.nodes[key].value)
    }

    fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len {
            return Err(SeqError::out_of_range(index, self.len));
        }

        let key = self.nodes.try_insert(Node::new(value))?;

        if self.len == 0 {
            let node = &mut self.nodes[key];
            node.prev = key;
            node.next = key;
            self.first = key;
        } else {
            // Position len sits between the last node and first.
            let before = if index == self.len {
                self.first
            } else {
                self.node_at(index)
            };
            self.link_before(before, key);
            if index == 0 {
                self.first = key;
            }
        }

        self.len += 1;
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        let key = self.checked_node(index)?;

        if self.len == 1 {
            self.first = K::NONE;
        } else {
            let Node { prev, next, .. } = self.nodes[key];
            self.nodes[prev].next = next;
            self.nodes[next].prev = prev;
            if key == self.first {
                self.first = next;
            }
        }

        self.len -= 1;
        match self.nodes.remove(key) {
            Some(node) => Ok(node.value),
            None => unreachable!("linked key {key:?} not in arena"),
        }
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.first = K::NONE;
        self.len = 0;
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        let back = match self.nodes.get(self.first) {
            Some(node) => node.prev,
            None => K::NONE,
        };
        Iter {
            nodes: &self.nodes,
            front: self.first,
            back,
            remaining: self.len,
        }
    }
}

impl_store_common!(RingStore<T, K>);

/// Positional iterator over a [`RingStore`], starting at `first`.
pub struct Iter<'a, T, K: Key> {
    nodes: &'a Arena<Node<T, K>, K>,
    front: K,
    back: K,
    remaining: usize,
}

impl<'a, T, K: Key> Iterator for Iter<'a, T, K> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.nodes[self.front];
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, K: Key> DoubleEndedIterator for Iter<'_, T, K> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.nodes[self.back];
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T, K: Key> ExactSizeIterator for Iter<'_, T, K> {}

impl<T, K: Key> FusedIterator for Iter<'_, T, K> {}
