//! Strategy-selected sequence facade.
//!
//! [`Sequence`] is a closed enum over the five stores. Every operation is a
//! `match` that forwards to the selected store, so the facade has exactly
//! the contract and complexity of the strategy it wraps. Strategies are
//! chosen at construction by [`Strategy`], or from an external tag via
//! [`Sequence::from_tag`] / [`str::parse`].
//!
//! # Example
//!
//! ```
//! use nexus_seq::{SeqStore, Sequence, Strategy};
//!
//! let mut seq: Sequence<u32> = Sequence::new(Strategy::Doubly);
//! seq.push_back(2).unwrap();
//! seq.push_front(1).unwrap();
//! assert_eq!(seq.to_vec(), vec![1, 2]);
//! assert_eq!(seq.strategy(), Strategy::Doubly);
//!
//! let strategy: Strategy = "ring".parse().unwrap();
//! let ring: Sequence<u32> = Sequence::new(strategy);
//! assert!(ring.is_empty());
//! ```

use core::fmt;
use core::str::FromStr;

use crate::{
    ArrayStore, DoublyStore, GrowthPolicy, IndexedStore, Result, RingStore, SeqError, SeqStore,
    SinglyStore,
};

/// Storage strategy tag.
///
/// The `u8` tags are stable: `Array = 0`, `Indexed = 1`, `Singly = 2`,
/// `Doubly = 3`, `Ring = 4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Strategy {
    /// [`ArrayStore`]: contiguous buffer.
    Array = 0,
    /// [`IndexedStore`]: element buffer plus position -> slot map.
    Indexed = 1,
    /// [`SinglyStore`]: forward-linked nodes.
    Singly = 2,
    /// [`DoublyStore`]: doubly-linked nodes with head and tail.
    Doubly = 3,
    /// [`RingStore`]: circular doubly-linked nodes.
    Ring = 4,
}

impl Strategy {
    /// Every strategy, in tag order.
    pub const ALL: [Strategy; 5] = [
        Strategy::Array,
        Strategy::Indexed,
        Strategy::Singly,
        Strategy::Doubly,
        Strategy::Ring,
    ];

    /// Returns the stable tag.
    #[inline]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Returns the lowercase name accepted by `FromStr`.
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::Array => "array",
            Strategy::Indexed => "indexed",
            Strategy::Singly => "singly",
            Strategy::Doubly => "doubly",
            Strategy::Ring => "ring",
        }
    }
}

impl TryFrom<u8> for Strategy {
    type Error = SeqError;

    fn try_from(tag: u8) -> Result<Self> {
        match tag {
            0 => Ok(Strategy::Array),
            1 => Ok(Strategy::Indexed),
            2 => Ok(Strategy::Singly),
            3 => Ok(Strategy::Doubly),
            4 => Ok(Strategy::Ring),
            other => Err(SeqError::InvalidVariant(other)),
        }
    }
}

impl FromStr for Strategy {
    type Err = SeqError;

    /// Parses a strategy name. Unknown names fail with
    /// `InvalidVariant(u8::MAX)`.
    fn from_str(s: &str) -> Result<Self> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or(SeqError::InvalidVariant(u8::MAX))
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A sequence whose storage strategy is chosen at runtime.
///
/// Equality compares elements positionally, regardless of strategy.
pub enum Sequence<T> {
    /// Contiguous buffer.
    Array(ArrayStore<T>),
    /// Index-indirected buffer.
    Indexed(IndexedStore<T>),
    /// Forward-linked nodes.
    Singly(SinglyStore<T>),
    /// Doubly-linked nodes.
    Doubly(DoublyStore<T>),
    /// Circular doubly-linked nodes.
    Ring(RingStore<T>),
}

/// Forwards `$body` to whichever store `$seq` holds, bound as `$store`.
macro_rules! dispatch {
    ($seq:expr, $store:ident => $body:expr) => {
        match $seq {
            Sequence::Array($store) => $body,
            Sequence::Indexed($store) => $body,
            Sequence::Singly($store) => $body,
            Sequence::Doubly($store) => $body,
            Sequence::Ring($store) => $body,
        }
    };
}

impl<T: Copy> Sequence<T> {
    /// Creates an empty sequence using `strategy` and the default policy.
    pub fn new(strategy: Strategy) -> Self {
        Self::with_policy(strategy, GrowthPolicy::DEFAULT)
    }

    /// Creates an empty sequence using `strategy`.
    ///
    /// `policy` sizes the buffers of the array and indexed strategies; the
    /// linked strategies ignore it.
    pub fn with_policy(strategy: Strategy, policy: GrowthPolicy) -> Self {
        tracing::debug!(%strategy, "sequence created");
        match strategy {
            Strategy::Array => Sequence::Array(ArrayStore::with_policy(policy)),
            Strategy::Indexed => Sequence::Indexed(IndexedStore::with_policy(policy)),
            Strategy::Singly => Sequence::Singly(SinglyStore::new()),
            Strategy::Doubly => Sequence::Doubly(DoublyStore::new()),
            Strategy::Ring => Sequence::Ring(RingStore::new()),
        }
    }

    /// Creates an empty sequence from a raw strategy tag.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::InvalidVariant`] for tags above 4.
    ///
    /// ```
    /// use nexus_seq::{SeqError, Sequence, Strategy};
    ///
    /// let seq: Sequence<u8> = Sequence::from_tag(1).unwrap();
    /// assert_eq!(seq.strategy(), Strategy::Indexed);
    /// assert_eq!(Sequence::<u8>::from_tag(9).unwrap_err(), SeqError::InvalidVariant(9));
    /// ```
    pub fn from_tag(tag: u8) -> Result<Self> {
        Strategy::try_from(tag).map(Self::new)
    }

    /// Returns the strategy this sequence was created with.
    pub const fn strategy(&self) -> Strategy {
        match self {
            Sequence::Array(_) => Strategy::Array,
            Sequence::Indexed(_) => Strategy::Indexed,
            Sequence::Singly(_) => Strategy::Singly,
            Sequence::Doubly(_) => Strategy::Doubly,
            Sequence::Ring(_) => Strategy::Ring,
        }
    }
}

impl<T: Copy> SeqStore<T> for Sequence<T> {
    type Iter<'a>
        = SeqIter<'a, T>
    where
        T: 'a;

    #[inline]
    fn len(&self) -> usize {
        dispatch!(self, store => store.len())
    }

    #[inline]
    fn get_ref(&self, index: usize) -> Result<&T> {
        dispatch!(self, store => store.get_ref(index))
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        dispatch!(self, store => store.get_mut(index))
    }

    #[inline]
    fn insert(&mut self, index: usize, value: T) -> Result<()> {
        dispatch!(self, store => store.insert(index, value))
    }

    #[inline]
    fn remove(&mut self, index: usize) -> Result<T> {
        dispatch!(self, store => store.remove(index))
    }

    #[inline]
    fn get_and_delete(&mut self, index: usize) -> Result<T> {
        dispatch!(self, store => store.get_and_delete(index))
    }

    fn clear(&mut self) {
        tracing::debug!(strategy = %self.strategy(), len = self.len(), "sequence cleared");
        dispatch!(self, store => store.clear())
    }

    fn iter(&self) -> Self::Iter<'_> {
        match self {
            Sequence::Array(store) => SeqIter::Array(store.iter()),
            Sequence::Indexed(store) => SeqIter::Indexed(store.iter()),
            Sequence::Singly(store) => SeqIter::Singly(store.iter()),
            Sequence::Doubly(store) => SeqIter::Doubly(store.iter()),
            Sequence::Ring(store) => SeqIter::Ring(store.iter()),
        }
    }
}

impl<T: Copy> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        match self {
            Sequence::Array(store) => Sequence::Array(store.clone()),
            Sequence::Indexed(store) => Sequence::Indexed(store.clone()),
            Sequence::Singly(store) => Sequence::Singly(store.clone()),
            Sequence::Doubly(store) => Sequence::Doubly(store.clone()),
            Sequence::Ring(store) => Sequence::Ring(store.clone()),
        }
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("strategy", &self.strategy())
            .field("elements", &DebugElements(self))
            .finish()
    }
}

struct DebugElements<'a, T>(&'a Sequence<T>);

impl<T: Copy + fmt::Debug> fmt::Debug for DebugElements<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<T: Copy + PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Copy + Eq> Eq for Sequence<T> {}

/// # Panics
///
/// Panics if an element cannot be allocated, like `Vec`.
impl<T: Copy> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        dispatch!(self, store => store.extend(iter))
    }
}

impl<'a, T: Copy> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = SeqIter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Positional iterator over a [`Sequence`].
pub enum SeqIter<'a, T> {
    /// Iterates an [`ArrayStore`].
    Array(core::slice::Iter<'a, T>),
    /// Iterates an [`IndexedStore`].
    Indexed(crate::indexed::Iter<'a, T, u32>),
    /// Iterates a [`SinglyStore`].
    Singly(crate::singly::Iter<'a, T, u32>),
    /// Iterates a [`DoublyStore`].
    Doubly(crate::doubly::Iter<'a, T, u32>),
    /// Iterates a [`RingStore`].
    Ring(crate::ring::Iter<'a, T, u32>),
}

impl<'a, T> Iterator for SeqIter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self {
            SeqIter::Array(iter) => iter.next(),
            SeqIter::Indexed(iter) => iter.next(),
            SeqIter::Singly(iter) => iter.next(),
            SeqIter::Doubly(iter) => iter.next(),
            SeqIter::Ring(iter) => iter.next(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            SeqIter::Array(iter) => iter.size_hint(),
            SeqIter::Indexed(iter) => iter.size_hint(),
            SeqIter::Singly(iter) => iter.size_hint(),
            SeqIter::Doubly(iter) => iter.size_hint(),
            SeqIter::Ring(iter) => iter.size_hint(),
        }
    }
}

impl<T> ExactSizeIterator for SeqIter<'_, T> {}
