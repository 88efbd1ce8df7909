//! Fixed-capacity FIFO ring buffer.
//!
//! The queue tracks the slot of the front value and the number of queued
//! values; the back slot is `(front + len) % capacity`. Capacity is exact
//! (not rounded to a power of two).

use std::fmt;
use std::mem::MaybeUninit;

/// Error returned when the queue is full. Carries the rejected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Full<T>(pub T);

impl<T> Full<T> {
    /// Returns the value that could not be enqueued.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Display for Full<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "queue is full")
    }
}

impl<T: fmt::Debug> std::error::Error for Full<T> {}

/// Bounded FIFO queue of `Copy` values.
///
/// # Example
///
/// ```
/// use nexus_kit::RingQueue;
///
/// let mut queue: RingQueue<char> = RingQueue::with_capacity(3);
/// queue.enqueue('a').unwrap();
/// queue.enqueue('b').unwrap();
/// assert_eq!(queue.dequeue(), Some('a'));
/// assert_eq!(queue.len(), 1);
/// ```
pub struct RingQueue<T> {
    slots: Box<[MaybeUninit<T>]>,
    /// Slot of the front value.
    front: usize,
    len: usize,
}

impl<T: Copy> RingQueue<T> {
    /// Creates a queue holding at most `capacity` values.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be non-zero");

        let slots = (0..capacity).map(|_| MaybeUninit::uninit()).collect();
        Self {
            slots,
            front: 0,
            len: 0,
        }
    }

    /// Appends a value at the back.
    ///
    /// # Errors
    ///
    /// Returns `Err(Full(value))` if the queue is full.
    #[inline]
    pub fn enqueue(&mut self, value: T) -> Result<(), Full<T>> {
        if self.is_full() {
            return Err(Full(value));
        }
        let slot = (self.front + self.len) % self.slots.len();
        self.slots[slot].write(value);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the value at the front.
    #[inline]
    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        // Safety: the `len` slots from `front` were written by enqueue
        let value = unsafe { self.slots[self.front].assume_init_read() };
        self.front = (self.front + 1) % self.slots.len();
        self.len -= 1;
        Some(value)
    }

    /// Returns the value at the front without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        // Safety: the `len` slots from `front` were written by enqueue
        Some(unsafe { self.slots[self.front].assume_init_ref() })
    }

    /// Returns the number of queued values.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing is queued.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `enqueue` would fail.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Returns the maximum number of queued values.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for RingQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingQueue")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "capacity must be non-zero")]
    fn zero_capacity_panics() {
        let _ = RingQueue::<u8>::with_capacity(0);
    }

    #[test]
    fn fifo_order() {
        let mut queue: RingQueue<u64> = RingQueue::with_capacity(4);
        for i in 0..4 {
            queue.enqueue(i).unwrap();
        }
        for i in 0..4 {
            assert_eq!(queue.dequeue(), Some(i));
        }
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn full_returns_value() {
        let mut queue: RingQueue<u64> = RingQueue::with_capacity(2);
        queue.enqueue(1).unwrap();
        queue.enqueue(2).unwrap();
        assert!(queue.is_full());

        let err = queue.enqueue(3).unwrap_err();
        assert_eq!(err, Full(3));
        assert_eq!(err.to_string(), "queue is full");
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn exact_non_power_of_two_capacity() {
        let mut queue: RingQueue<u8> = RingQueue::with_capacity(3);
        assert_eq!(queue.capacity(), 3);
        for i in 0..3 {
            queue.enqueue(i).unwrap();
        }
        assert!(queue.enqueue(9).is_err());
    }

    #[test]
    fn wraps_around_many_laps() {
        let mut queue: RingQueue<u64> = RingQueue::with_capacity(5);
        let mut next_out = 0;
        for i in 0..1000u64 {
            queue.enqueue(i).unwrap();
            if queue.len() == 3 {
                assert_eq!(queue.peek(), Some(&next_out));
                assert_eq!(queue.dequeue(), Some(next_out));
                next_out += 1;
            }
        }
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn front_wraps_to_slot_zero() {
        let mut queue: RingQueue<u32> = RingQueue::with_capacity(3);
        queue.enqueue(0).unwrap();
        queue.enqueue(1).unwrap();
        queue.dequeue().unwrap();
        queue.dequeue().unwrap();
        assert_eq!(queue.front, 2);

        for i in 10..13 {
            queue.enqueue(i).unwrap();
        }
        assert!(queue.is_full());
        for i in 10..13 {
            assert_eq!(queue.dequeue(), Some(i));
        }
        assert_eq!(queue.front, 2);
        assert!(queue.is_empty());
    }

    #[test]
    fn matches_vecdeque() {
        use rand::rngs::SmallRng;
        use rand::{Rng, SeedableRng};
        use std::collections::VecDeque;

        let mut rng = SmallRng::seed_from_u64(5);
        let mut queue: RingQueue<u32> = RingQueue::with_capacity(16);
        let mut model: VecDeque<u32> = VecDeque::new();

        for step in 0..10_000u32 {
            if rng.random_bool(0.5) {
                match queue.enqueue(step) {
                    Ok(()) => model.push_back(step),
                    Err(Full(v)) => {
                        assert_eq!(v, step);
                        assert_eq!(model.len(), 16);
                    }
                }
            } else {
                assert_eq!(queue.dequeue(), model.pop_front());
            }
            assert_eq!(queue.len(), model.len());
        }
    }
}
