//! Positional sequences over interchangeable storage strategies.
//!
//! Every store in this crate holds an ordered run of `Copy` elements
//! addressed by 0-based position and exposes the same operation set,
//! [`SeqStore`]. What differs is the layout, and so the cost model:
//!
//! ```text
//! ArrayStore    - one contiguous buffer, O(1) positional access
//! IndexedStore  - element buffer + position -> slot map, elements never move on insert
//! SinglyStore   - forward-linked nodes, O(1) at the front
//! DoublyStore   - doubly-linked nodes, walks from the nearer end
//! RingStore     - circular doubly-linked nodes, O(1) at both ends, rotatable
//! ```
//!
//! [`Sequence`] wraps any of the five behind one type, selected at runtime
//! by [`Strategy`].
//!
//! # Quick Start
//!
//! ```
//! use nexus_seq::{SeqStore, Sequence, Strategy};
//!
//! let mut seq: Sequence<u32> = Sequence::new(Strategy::Array);
//!
//! seq.insert(0, 1).unwrap();
//! seq.push_front(2).unwrap();
//! seq.push_back(3).unwrap();
//! assert_eq!(seq.to_vec(), vec![2, 1, 3]);
//!
//! assert_eq!(seq.get_and_set(1, 10), Ok(1));
//! assert_eq!(seq.position(&3), Ok(2));
//! assert_eq!(seq.render(|v| *v).to_string(), "[2, 10, 3]");
//! ```
//!
//! # Errors
//!
//! Operations return [`Result`] with a [`SeqError`]:
//!
//! | Error | Cause |
//! |-------|-------|
//! | `OutOfRange` | position outside `0..=len` (insert) or `0..len` (everything else) |
//! | `AllocationFailure` | a buffer or node could not be allocated |
//! | `NotFound` | `locate` / `position` found no match |
//! | `InvalidVariant` | unknown strategy tag or name |
//!
//! A failed operation leaves the store exactly as it was. Resizes obtain
//! the new buffer before releasing the old one.
//!
//! # Capacity
//!
//! [`ArrayStore`] and [`IndexedStore`] size their buffers with a
//! [`GrowthPolicy`]: fast doubling below a threshold, 5/4 growth above it,
//! and a shrink with hysteresis once the buffer is at most half full. The
//! linked stores keep nodes in an [`Arena`] and reuse freed slots.
//!
//! # Logging
//!
//! Reallocations are reported through `tracing` at `trace` level; facade
//! creation and clearing at `debug` level. No subscriber is installed.
//!
//! # Order of `get_and_delete`
//!
//! On [`ArrayStore`] and [`IndexedStore`], `get_and_delete` moves the last
//! element into the vacated position and so does not preserve order. Use
//! [`SeqStore::remove`] for an ordered removal that returns the value.

#![warn(missing_docs)]

pub mod arena;
pub mod array;
pub mod doubly;
pub mod error;
pub mod indexed;
pub mod key;
pub mod policy;
pub mod ring;
pub mod sequence;
pub mod singly;
pub mod store;

pub use arena::Arena;
pub use array::ArrayStore;
pub use doubly::DoublyStore;
pub use error::{Result, SeqError};
pub use indexed::IndexedStore;
pub use key::Key;
pub use policy::{GrowthPolicy, PolicyBuilder, PolicyError};
pub use ring::RingStore;
pub use sequence::{SeqIter, Sequence, Strategy};
pub use singly::SinglyStore;
pub use store::{Render, SeqStore};
