//! The operation set shared by every storage strategy.
//!
//! [`SeqStore`] is the seam between the [`Sequence`](crate::Sequence)
//! facade and the five stores. Stores implement a handful of primitives;
//! push/pop, search, swap and formatting are provided on top of them and
//! overridden only where a strategy has a cheaper path.
//!
//! # Iteration
//!
//! [`SeqStore::iter`] and [`SeqStore::for_each`] borrow the store shared,
//! so structural mutation during a visit does not compile:
//!
//! ```compile_fail
//! use nexus_seq::{ArrayStore, SeqStore};
//!
//! let mut store: ArrayStore<u32> = [1, 2, 3].into_iter().collect();
//! for value in store.iter() {
//!     store.push_back(*value).unwrap();
//! }
//! ```

use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;

use crate::{Result, SeqError};

/// An ordered sequence of `Copy` elements addressable by position.
///
/// Positions are 0-based. Insertion accepts `0..=len`; every other
/// positional operation accepts `0..len` and returns
/// [`SeqError::OutOfRange`] otherwise. Elements enter and leave by value.
pub trait SeqStore<T: Copy> {
    /// Positional iterator over shared references.
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns a reference to the element at `index`.
    fn get_ref(&self, index: usize) -> Result<&T>;

    /// Returns a mutable reference to the element at `index`.
    fn get_mut(&mut self, index: usize) -> Result<&mut T>;

    /// Inserts `value` so that it ends up at `index`, shifting later
    /// elements back by one position.
    fn insert(&mut self, index: usize, value: T) -> Result<()>;

    /// Removes and returns the element at `index`, preserving the order of
    /// the remaining elements.
    fn remove(&mut self, index: usize) -> Result<T>;

    /// Removes every element and releases owned memory.
    fn clear(&mut self);

    /// Returns an iterator in positional order.
    fn iter(&self) -> Self::Iter<'_>;

    /// Returns `true` if the store holds no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a copy of the element at `index`.
    #[inline]
    fn get(&self, index: usize) -> Result<T> {
        self.get_ref(index).copied()
    }

    /// Overwrites the element at `index`.
    #[inline]
    fn set(&mut self, index: usize, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Stores `value` at `index` and returns the element it replaced.
    #[inline]
    fn get_and_set(&mut self, index: usize, value: T) -> Result<T> {
        let slot = self.get_mut(index)?;
        Ok(core::mem::replace(slot, value))
    }

    /// Removes the element at `index`, preserving order.
    #[inline]
    fn delete(&mut self, index: usize) -> Result<()> {
        self.remove(index).map(drop)
    }

    /// Removes and returns the element at `index`.
    ///
    /// Contiguous stores override this with an unordered removal (the last
    /// element takes the vacated position). Linked stores keep the order. Use [`remove`](SeqStore::remove) when order matters.
    #[inline]
    fn get_and_delete(&mut self, index: usize) -> Result<T> {
        self.remove(index)
    }

    /// Returns the first position whose element compares `Equal` to
    /// `probe` under `cmp(stored, probe)`.
    fn locate<F>(&self, probe: &T, mut cmp: F) -> Result<usize>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.iter()
            .position(|stored| cmp(stored, probe) == Ordering::Equal)
            .ok_or(SeqError::NotFound)
    }

    /// Returns the first position holding an element equal to `probe`.
    #[inline]
    fn position(&self, probe: &T) -> Result<usize>
    where
        T: PartialEq,
    {
        self.iter()
            .position(|stored| stored == probe)
            .ok_or(SeqError::NotFound)
    }

    /// Calls `visit` on every element in positional order.
    #[inline]
    fn for_each<F>(&self, visit: F)
    where
        F: FnMut(&T),
    {
        self.iter().for_each(visit);
    }

    /// Inserts at position 0.
    #[inline]
    fn push_front(&mut self, value: T) -> Result<()> {
        self.insert(0, value)
    }

    /// Inserts at position `len`.
    #[inline]
    fn push_back(&mut self, value: T) -> Result<()> {
        let len = self.len();
        self.insert(len, value)
    }

    /// Removes and returns the first element via
    /// [`get_and_delete`](SeqStore::get_and_delete).
    ///
    /// **Unordered on contiguous stores:** the last element moves to the
    /// front. Use `remove(0)` to keep the order.
    #[inline]
    fn pop_front(&mut self) -> Result<T> {
        self.get_and_delete(0)
    }

    /// Removes and returns the last element via
    /// [`get_and_delete`](SeqStore::get_and_delete).
    #[inline]
    fn pop_back(&mut self) -> Result<T> {
        // wraps to usize::MAX when empty, which is out of range
        let last = self.len().wrapping_sub(1);
        self.get_and_delete(last)
    }

    /// Copies the elements into a `Vec` in positional order.
    #[inline]
    fn to_vec(&self) -> Vec<T> {
        self.iter().copied().collect()
    }

    /// Returns a `Display` adapter rendering `[a, b, c]` with `to_text`
    /// producing each element's text.
    ///
    /// ```
    /// use nexus_seq::{DoublyStore, SeqStore};
    ///
    /// let store: DoublyStore<u8> = [1, 2, 3].into_iter().collect();
    /// assert_eq!(store.render(|v| v * 10).to_string(), "[10, 20, 30]");
    /// ```
    #[inline]
    fn render<F, D>(&self, to_text: F) -> Render<'_, T, Self, F>
    where
        Self: Sized,
        F: Fn(&T) -> D,
        D: fmt::Display,
    {
        Render {
            store: self,
            to_text,
            _marker: PhantomData,
        }
    }
}

/// `Display` adapter returned by [`SeqStore::render`].
pub struct Render<'a, T, S, F> {
    store: &'a S,
    to_text: F,
    _marker: PhantomData<fn(&T)>,
}

impl<T, S, F, D> fmt::Display for Render<'_, T, S, F>
where
    T: Copy,
    S: SeqStore<T>,
    F: Fn(&T) -> D,
    D: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.store.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", (self.to_text)(value))?;
        }
        f.write_str("]")
    }
}

/// Implements the standard traits every store shares on top of
/// [`SeqStore`]: `Debug`, `PartialEq`/`Eq`, `Extend`, `FromIterator` and
/// `IntoIterator` for references.
macro_rules! impl_store_common {
    ($name:ident < T $(, $k:ident)? >) => {
        impl<T: Copy + core::fmt::Debug $(, $k: $crate::Key)?> core::fmt::Debug
            for $name<T $(, $k)?>
        {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.debug_list()
                    .entries($crate::SeqStore::iter(self))
                    .finish()
            }
        }

        impl<T: Copy + PartialEq $(, $k: $crate::Key)?> PartialEq for $name<T $(, $k)?> {
            fn eq(&self, other: &Self) -> bool {
                $crate::SeqStore::len(self) == $crate::SeqStore::len(other)
                    && $crate::SeqStore::iter(self).eq($crate::SeqStore::iter(other))
            }
        }

        impl<T: Copy + Eq $(, $k: $crate::Key)?> Eq for $name<T $(, $k)?> {}

        /// # Panics
        ///
        /// Panics if an element cannot be allocated, like `Vec`.
        impl<T: Copy $(, $k: $crate::Key)?> Extend<T> for $name<T $(, $k)?> {
            fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
                for value in iter {
                    if let Err(err) = $crate::SeqStore::push_back(self, value) {
                        panic!("{}: {err}", stringify!($name));
                    }
                }
            }
        }

        impl<T: Copy $(, $k: $crate::Key)?> FromIterator<T> for $name<T $(, $k)?> {
            fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
                let mut store = Self::new();
                store.extend(iter);
                store
            }
        }

        impl<'a, T: Copy $(, $k: $crate::Key)?> IntoIterator for &'a $name<T $(, $k)?> {
            type Item = &'a T;
            type IntoIter = <$name<T $(, $k)?> as $crate::SeqStore<T>>::Iter<'a>;

            #[inline]
            fn into_iter(self) -> Self::IntoIter {
                $crate::SeqStore::iter(self)
            }
        }
    };
}

pub(crate) use impl_store_common;
