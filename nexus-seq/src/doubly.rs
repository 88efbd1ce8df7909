//! Doubly-linked store with head and tail.
//!
//! Nodes live in an [`Arena`] and link both ways by key. Positional lookup
//! walks from whichever end is closer: forward from the head when
//! `i <= (len - 1) / 2`, backward from the tail otherwise. Both ends are
//! O(1); interior positions cost O(min(i, len - i)).
//!
//! # Invariants
//!
//! - `head.prev` and `tail.next` are `K::NONE`.
//! - Following `next` from the head visits exactly `len` nodes, and so
//!   does following `prev` from the tail.
//!
//! # Example
//!
//! ```
//! use nexus_seq::{DoublyStore, SeqStore};
//!
//! let mut store: DoublyStore<i64> = DoublyStore::new();
//! store.push_back(2).unwrap();
//! store.push_back(3).unwrap();
//! store.push_front(1).unwrap();
//!
//! assert_eq!(store.front(), Some(&1));
//! assert_eq!(store.back(), Some(&3));
//! assert_eq!(store.iter().rev().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
//! ```

use core::iter::FusedIterator;

use crate::store::impl_store_common;
use crate::{Arena, Key, Result, SeqError, SeqStore};

/// A node with links in both directions. Shared with the ring store.
#[derive(Clone, Debug)]
pub(crate) struct Node<T, K> {
    pub(crate) value: T,
    pub(crate) prev: K,
    pub(crate) next: K,
}

impl<T, K: Key> Node<T, K> {
    /// Creates a new unlinked node.
    #[inline]
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            prev: K::NONE,
            next: K::NONE,
        }
    }
}

/// Sequence backed by a doubly-linked node chain.
pub struct DoublyStore<T, K: Key = u32> {
    nodes: Arena<Node<T, K>, K>,
    head: K,
    tail: K,
    len: usize,
}

impl<T: Copy, K: Key> Default for DoublyStore<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy, K: Key> Clone for DoublyStore<T, K> {
    fn clone(&self) -> Self {
        let mut store = Self::new();
        store.extend(self.iter().copied());
        store
    }
}

impl<T: Copy, K: Key> DoublyStore<T, K> {
    /// Creates an empty store. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            head: K::NONE,
            tail: K::NONE,
            len: 0,
        }
    }

    /// Returns the first element.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.nodes.get(self.head).map(|node| &node.value)
    }

    /// Returns the last element.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.nodes.get(self.tail).map(|node| &node.value)
    }

    /// Returns the key of the node at `index`, walking from the nearer end.
    /// `index` must be in range.
    fn node_at(&self, index: usize) -> K {
        if index <= (self.len - 1) / 2 {
            let mut key = self.head;
            for _ in 0..index {
                key = self.nodes[key].next;
            }
            key
        } else {
            let mut key = self.tail;
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

    // ========================================================================
    // Link operations (relink only, no alloc/dealloc)
    // ========================================================================

    /// Links an unlinked node at the back.
    #[inline]
    fn link_back(&mut self, key: K) {
        let node = &mut self.nodes[key];
        node.prev = self.tail;
        node.next = K::NONE;

        if self.tail.is_some() {
            self.nodes[self.tail].next = key;
        } else {
            self.head = key;
        }

        self.tail = key;
        self.len += 1;
    }

    /// Links an unlinked node directly before `before`.
    #[inline]
    fn link_before(&mut self, before: K, key: K) {
        let prev = self.nodes[before].prev;
        let node = &mut self.nodes[key];
        node.next = before;
        node.prev = prev;

        self.nodes[before].prev = key;

        if prev.is_some() {
            self.nodes[prev].next = key;
        } else {
            self.head = key;
        }

        self.len += 1;
    }

    /// Unlinks a node without releasing it.
    #[inline]
    fn unlink(&mut self, key: K) {
        let Node { prev, next, .. } = self.nodes[key];

        if prev.is_some() {
            self.nodes[prev].next = next;
        } else {
            self.head = next;
        }

        if next.is_some() {
            self.nodes[next].prev = prev;
        } else {
            self.tail = prev;
        }

        self.len -= 1;
    }
}

impl<T: Copy, K: Key> SeqStore<T> for DoublyStore<T, K> {
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
        if index == self.len {
            self.link_back(key);
        } else {
            let before = self.node_at(index);
            self.link_before(before, key);
        }
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        let key = self.checked_node(index)?;
        self.unlink(key);
        match self.nodes.remove(key) {
            Some(node) => Ok(node.value),
            None => unreachable!("linked key {key:?} not in arena"),
        }
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.head = K::NONE;
        self.tail = K::NONE;
        self.len = 0;
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        Iter {
            nodes: &self.nodes,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }
}

impl_store_common!(DoublyStore<T, K>);

/// Positional iterator over a [`DoublyStore`].
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
