//! Forward-only linked store.
//!
//! Nodes live in an [`Arena`] and link forward by key. Every positional
//! operation walks from the head through the predecessor of the target
//! position, so the front is O(1) and everything else is O(i).
//!
//! # Example
//!
//! ```
//! use nexus_seq::{SeqStore, SinglyStore};
//!
//! let mut store: SinglyStore<u32> = SinglyStore::new();
//! store.push_front(2).unwrap();
//! store.push_front(1).unwrap();
//! store.push_back(3).unwrap();
//!
//! assert_eq!(store.front(), Some(&1));
//! assert_eq!(store.remove(1), Ok(2));
//! assert_eq!(store.to_vec(), vec![1, 3]);
//! ```

use core::iter::FusedIterator;

use crate::store::impl_store_common;
use crate::{Arena, Key, Result, SeqError, SeqStore};

#[derive(Clone, Debug)]
struct Node<T, K> {
    value: T,
    next: K,
}

/// Sequence backed by a forward-linked node chain.
pub struct SinglyStore<T, K: Key = u32> {
    nodes: Arena<Node<T, K>, K>,
    head: K,
    len: usize,
}

impl<T: Copy, K: Key> Default for SinglyStore<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy, K: Key> Clone for SinglyStore<T, K> {
    fn clone(&self) -> Self {
        let mut store = Self::new();
        store.extend(self.iter().copied());
        store
    }
}

impl<T: Copy, K: Key> SinglyStore<T, K> {
    /// Creates an empty store. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            head: K::NONE,
            len: 0,
        }
    }

    /// Returns the first element.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.nodes.get(self.head).map(|node| &node.value)
    }

    /// Returns the key of the node at `index`. `index` must be in range.
    #[inline]
    fn node_at(&self, index: usize) -> K {
        let mut key = self.head;
        for _ in 0..index {
            key = self.nodes[key].next;
        }
        key
    }

    /// Returns the key of the node preceding `index`. `index` must be in
    /// `1..=len`.
    #[inline]
    fn prev_node(&self, index: usize) -> K {
        self.node_at(index - 1)
    }

    #[inline]
    fn checked_node(&self, index: usize) -> Result<K> {
        if index >= self.len {
            return Err(SeqError::out_of_range(index, self.len));
        }
        Ok(self.node_at(index))
    }
}

impl<T: Copy, K: Key> SeqStore<T> for SinglyStore<T, K> {
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

        let key = self.nodes.try_insert(Node {
            value,
            next: K::NONE,
        })?;

        if index == 0 {
            self.nodes[key].next = self.head;
            self.head = key;
        } else {
            let prev = self.prev_node(index);
            self.nodes[key].next = self.nodes[prev].next;
            self.nodes[prev].next = key;
        }

        self.len += 1;
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        if index >= self.len {
            return Err(SeqError::out_of_range(index, self.len));
        }

        let key = if index == 0 {
            let key = self.head;
            self.head = self.nodes[key].next;
            key
        } else {
            let prev = self.prev_node(index);
            let key = self.nodes[prev].next;
            self.nodes[prev].next = self.nodes[key].next;
            key
        };

        self.len -= 1;
        match self.nodes.remove(key) {
            Some(node) => Ok(node.value),
            None => unreachable!("linked key {key:?} not in arena"),
        }
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.head = K::NONE;
        self.len = 0;
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        Iter {
            nodes: &self.nodes,
            next: self.head,
            remaining: self.len,
        }
    }
}

impl_store_common!(SinglyStore<T, K>);

/// Positional iterator over a [`SinglyStore`].
pub struct Iter<'a, T, K: Key> {
    nodes: &'a Arena<Node<T, K>, K>,
    next: K,
    remaining: usize,
}

impl<'a, T, K: Key> Iterator for Iter<'a, T, K> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.next.is_none() {
            return None;
        }
        let node = &self.nodes[self.next];
        self.next = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, K: Key> ExactSizeIterator for Iter<'_, T, K> {}

impl<T, K: Key> FusedIterator for Iter<'_, T, K> {}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Basic operations
    // ========================================================================

    #[test]
    fn new_is_empty() {
        let store: SinglyStore<u64> = SinglyStore::new();
        assert!(store.is_empty());
        assert_eq!(store.front(), None);
        assert_eq!(store.iter().next(), None);
    }

    #[test]
    fn push_front_is_lifo() {
        let mut store: SinglyStore<u64> = SinglyStore::new();
        for v in 0..5 {
            store.push_front(v).unwrap();
        }
        assert_eq!(store.to_vec(), vec![4, 3, 2, 1, 0]);
        assert_eq!(store.front(), Some(&4));
    }

    #[test]
    fn insert_interior_and_tail() {
        let mut store: SinglyStore<u64> = [1, 3].into_iter().collect();
        store.insert(1, 2).unwrap();
        store.insert(3, 4).unwrap();
        assert_eq!(store.to_vec(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn remove_head_middle_tail() {
        let mut store: SinglyStore<u64> = (0..5).collect();
        assert_eq!(store.remove(0), Ok(0));
        assert_eq!(store.remove(1), Ok(2));
        assert_eq!(store.remove(2), Ok(4));
        assert_eq!(store.to_vec(), vec![1, 3]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn get_and_delete_preserves_order() {
        let mut store: SinglyStore<u64> = (0..4).collect();
        assert_eq!(store.get_and_delete(1), Ok(1));
        assert_eq!(store.to_vec(), vec![0, 2, 3]);
    }

    #[test]
    fn set_and_get_and_set() {
        let mut store: SinglyStore<u64> = (0..3).collect();
        store.set(2, 20).unwrap();
        assert_eq!(store.get_and_set(0, 10), Ok(0));
        assert_eq!(store.to_vec(), vec![10, 1, 20]);
    }

    #[test]
    fn pops_drain_both_ends() {
        let mut store: SinglyStore<u64> = (0..4).collect();
        assert_eq!(store.pop_back(), Ok(3));
        assert_eq!(store.pop_front(), Ok(0));
        assert_eq!(store.to_vec(), vec![1, 2]);
        store.pop_front().unwrap();
        store.pop_front().unwrap();
        assert_eq!(store.pop_back(), Err(SeqError::out_of_range(usize::MAX, 0)));
    }

    #[test]
    fn nodes_are_reused_after_remove() {
        let mut store: SinglyStore<u64> = (0..8).collect();
        let capacity = store.nodes.capacity();
        for _ in 0..100 {
            store.remove(3).unwrap();
            store.insert(5, 9).unwrap();
        }
        assert_eq!(store.nodes.capacity(), capacity);
        assert_eq!(store.len(), 8);
    }

    // ========================================================================
    // Bounds
    // ========================================================================

    #[test]
    fn bounds() {
        let mut store: SinglyStore<u64> = (0..3).collect();
        assert_eq!(store.get(3), Err(SeqError::out_of_range(3, 3)));
        assert_eq!(store.set(3, 0), Err(SeqError::out_of_range(3, 3)));
        assert_eq!(store.delete(3), Err(SeqError::out_of_range(3, 3)));
        assert_eq!(store.insert(4, 0), Err(SeqError::out_of_range(4, 3)));
        assert_eq!(store.get(usize::MAX), Err(SeqError::out_of_range(usize::MAX, 3)));
        assert_eq!(store.to_vec(), vec![0, 1, 2]);
    }

    #[test]
    fn narrow_key_exhaustion_leaves_store_intact() {
        let mut store: SinglyStore<u8, u8> = SinglyStore::new();
        for i in 0..255u8 {
            store.push_front(i).unwrap();
        }
        assert_eq!(
            store.push_front(0),
            Err(SeqError::AllocationFailure { requested: 256 })
        );
        assert_eq!(store.len(), 255);
        assert_eq!(store.front(), Some(&254));
    }

    #[test]
    fn clear_then_reuse() {
        let mut store: SinglyStore<u64> = (0..10).collect();
        store.clear();
        assert!(store.is_empty());
        store.push_back(7).unwrap();
        assert_eq!(store.to_vec(), vec![7]);
    }

    #[test]
    fn render_and_debug() {
        let store: SinglyStore<u64> = (1..=3).collect();
        assert_eq!(format!("{store:?}"), "[1, 2, 3]");
        assert_eq!(store.render(|v| format!("<{v}>")).to_string(), "[<1>, <2>, <3>]");
        assert_eq!(SinglyStore::<u64>::new().render(|v| *v).to_string(), "[]");
    }

    #[test]
    fn stress_random_against_vec() {
        use rand::rngs::SmallRng;
        use rand::{Rng, SeedableRng};

        let mut rng = SmallRng::seed_from_u64(4242);
        let mut store: SinglyStore<u64> = SinglyStore::new();
        let mut reference: Vec<u64> = Vec::new();

        for step in 0..3000u64 {
            if rng.random_range(0..100) < 60 || reference.is_empty() {
                let index = rng.random_range(0..=reference.len());
                store.insert(index, step).unwrap();
                reference.insert(index, step);
            } else {
                let index = rng.random_range(0..reference.len());
                assert_eq!(store.remove(index), Ok(reference.remove(index)));
            }
        }

        assert_eq!(store.len(), reference.len());
        assert_eq!(store.to_vec(), reference);
    }
}
