//! Contiguous growable array store.
//!
//! Element `i` lives at buffer slot `i`. Capacity is managed explicitly by a
//! [`GrowthPolicy`]: it changes only when an insert finds the buffer full
//! (grow) or a removal finds it at most `1/shrink_divisor` full above the
//! threshold (shrink). Every reallocation obtains the new buffer before the
//! old one is released, so a failed resize leaves the store untouched.
//!
//! # Complexity
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `get` / `set` / `get_and_set` | O(1) |
//! | `insert` | O(1) amortised at the back, O(n) worst case |
//! | `remove` / `delete` | O(n - i), O(n) when shrinking |
//! | `get_and_delete` | O(1), O(n) when shrinking |
//! | `locate` | O(n) |
//!
//! # Example
//!
//! ```
//! use nexus_seq::{ArrayStore, SeqStore};
//!
//! let mut store: ArrayStore<u32> = ArrayStore::new();
//! store.insert(0, 1).unwrap();
//! store.push_front(2).unwrap();
//! store.push_back(3).unwrap();
//! assert_eq!(store.as_slice(), &[2, 1, 3]);
//!
//! // get_and_delete moves the last element into the hole
//! assert_eq!(store.get_and_delete(0), Ok(2));
//! assert_eq!(store.as_slice(), &[3, 1]);
//! ```

use crate::store::impl_store_common;
use crate::{GrowthPolicy, Result, SeqError, SeqStore};

/// Sequence backed by one contiguous buffer.
pub struct ArrayStore<T> {
    buf: Vec<T>,
    /// Logical capacity under the policy. The buffer's real capacity is at
    /// least this, so in-place inserts never reallocate.
    capacity: usize,
    policy: GrowthPolicy,
}

impl<T: Copy> Default for ArrayStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy> Clone for ArrayStore<T> {
    fn clone(&self) -> Self {
        let mut buf = Vec::with_capacity(self.capacity);
        buf.extend_from_slice(&self.buf);
        Self {
            buf,
            capacity: self.capacity,
            policy: self.policy,
        }
    }
}

impl<T: Copy> ArrayStore<T> {
    /// Creates an empty store with the default policy. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self::with_policy(GrowthPolicy::DEFAULT)
    }

    /// Creates an empty store with a custom growth policy.
    #[inline]
    pub const fn with_policy(policy: GrowthPolicy) -> Self {
        Self {
            buf: Vec::new(),
            capacity: 0,
            policy,
        }
    }

    /// Returns the current capacity in elements.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the growth policy.
    #[inline]
    pub const fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    /// Returns the elements as a slice in positional order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buf
    }

    /// Returns the elements as a mutable slice in positional order.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buf
    }

    #[inline]
    fn check(&self, index: usize) -> Result<()> {
        if index < self.buf.len() {
            Ok(())
        } else {
            Err(SeqError::out_of_range(index, self.buf.len()))
        }
    }

    /// Allocates an empty buffer able to hold `capacity` elements.
    fn allocate(capacity: usize) -> Result<Vec<T>> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(capacity)
            .map_err(|_| SeqError::AllocationFailure {
                requested: capacity,
            })?;
        Ok(buf)
    }

    /// Grows into a fresh buffer, writing `value` at `index` while copying.
    fn grow_and_insert(&mut self, index: usize, value: T) -> Result<()> {
        let new_capacity = self
            .policy
            .grow(self.capacity)
            .ok_or(SeqError::AllocationFailure {
                requested: usize::MAX,
            })?;
        let mut buf = Self::allocate(new_capacity)?;

        buf.extend_from_slice(&self.buf[..index]);
        buf.push(value);
        buf.extend_from_slice(&self.buf[index..]);

        tracing::trace!(
            strategy = "array",
            old_capacity = self.capacity,
            new_capacity,
            "grow"
        );
        self.buf = buf;
        self.capacity = new_capacity;
        Ok(())
    }

    /// Shrinks into a fresh buffer, leaving out the element at `index`.
    ///
    /// Order is preserved.
    fn shrink_and_remove(&mut self, index: usize) -> Result<T> {
        let len = self.buf.len();
        let new_capacity = self.policy.shrink_target(len);
        let mut buf = Self::allocate(new_capacity)?;

        let value = self.buf[index];
        buf.extend_from_slice(&self.buf[..index]);
        buf.extend_from_slice(&self.buf[index + 1..]);

        tracing::trace!(
            strategy = "array",
            old_capacity = self.capacity,
            new_capacity,
            "shrink"
        );
        self.buf = buf;
        self.capacity = new_capacity;
        Ok(value)
    }
}

impl<T: Copy> SeqStore<T> for ArrayStore<T> {
    type Iter<'a>
        = core::slice::Iter<'a, T>
    where
        T: 'a;

    #[inline]
    fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    fn get_ref(&self, index: usize) -> Result<&T> {
        let len = self.buf.len();
        self.buf
            .get(index)
            .ok_or(SeqError::out_of_range(index, len))
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.buf.len();
        self.buf
            .get_mut(index)
            .ok_or(SeqError::out_of_range(index, len))
    }

    fn insert(&mut self, index: usize, value: T) -> Result<()> {
        let len = self.buf.len();
        if index > len {
            return Err(SeqError::out_of_range(index, len));
        }

        if len >= self.capacity {
            return self.grow_and_insert(index, value);
        }

        // Real buffer capacity >= self.capacity > len: no reallocation.
        self.buf.insert(index, value);
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        self.check(index)?;

        if self.policy.should_shrink(self.buf.len(), self.capacity) {
            return self.shrink_and_remove(index);
        }

        Ok(self.buf.remove(index))
    }

    /// Removes and returns the element at `index` in O(1) by moving the last
    /// element into its place. **Does not preserve order.**
    ///
    /// When the removal triggers a shrink the elements are copied into the
    /// new buffer in order instead.
    fn get_and_delete(&mut self, index: usize) -> Result<T> {
        self.check(index)?;

        if self.policy.should_shrink(self.buf.len(), self.capacity) {
            return self.shrink_and_remove(index);
        }

        Ok(self.buf.swap_remove(index))
    }

    fn clear(&mut self) {
        self.buf = Vec::new();
        self.capacity = 0;
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        self.buf.iter()
    }
}

impl_store_common!(ArrayStore<T>);
