//! Small value containers used alongside `nexus-seq`.
//!
//! | Type | Capacity | Full / empty behaviour |
//! |------|----------|------------------------|
//! | [`BumpStack`] | Fixed at construction | Panics (fail-fast) |
//! | [`RingQueue`] | Fixed at construction | `Err(Full)` / `None` |
//! | [`LinkedQueue`] | Growable | Never full / `None` |
//! | [`ByteString`] | Growable | n/a |
//!
//! # Example
//!
//! ```
//! use nexus_kit::{ByteString, RingQueue};
//!
//! let mut queue: RingQueue<u32> = RingQueue::with_capacity(2);
//! queue.enqueue(1).unwrap();
//! queue.enqueue(2).unwrap();
//! assert_eq!(queue.enqueue(3).unwrap_err().into_inner(), 3);
//!
//! let text = ByteString::from("abcabd");
//! assert_eq!(text.find(&ByteString::from("abd")), Some(3));
//! ```

#![warn(missing_docs)]

pub mod bytes;
pub mod linked_queue;
pub mod ring_queue;
pub mod stack;

pub use bytes::ByteString;
pub use linked_queue::LinkedQueue;
pub use ring_queue::{Full, RingQueue};
pub use stack::BumpStack;
