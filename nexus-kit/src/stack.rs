//! Fixed-capacity value stack.
//!
//! The whole buffer is allocated once at construction and `push` only bumps
//! the top. Overflow and popping an empty stack are programming errors and
//! panic rather than return an error.

/// Size in bytes of the buffer reserved by [`BumpStack::new`].
pub const DEFAULT_STACK_BYTES: usize = 2 * 1024 * 1024;

/// LIFO stack of `Copy` values with a fixed capacity.
///
/// # Example
///
/// ```
/// use nexus_kit::BumpStack;
///
/// let mut stack: BumpStack<u64> = BumpStack::with_capacity(2);
/// stack.push(1);
/// stack.push(2);
/// assert_eq!(stack.peek(), Some(&2));
/// assert_eq!(stack.pop(), 2);
/// assert_eq!(stack.pop(), 1);
/// assert!(stack.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct BumpStack<T> {
    buf: Vec<T>,
    capacity: usize,
}

impl<T: Copy> Default for BumpStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy> BumpStack<T> {
    /// Creates a stack sized to [`DEFAULT_STACK_BYTES`] worth of `T`.
    ///
    /// Zero-sized types get one slot per byte.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_STACK_BYTES / size_of::<T>().max(1))
    }

    /// Creates a stack holding at most `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Pushes a value onto the top.
    ///
    /// # Panics
    ///
    /// Panics if the stack is full.
    #[inline]
    pub fn push(&mut self, value: T) {
        assert!(
            self.buf.len() < self.capacity,
            "stack overflow: capacity {} exhausted",
            self.capacity
        );
        self.buf.push(value);
    }

    /// Removes and returns the top value.
    ///
    /// # Panics
    ///
    /// Panics if the stack is empty.
    #[inline]
    pub fn pop(&mut self) -> T {
        match self.buf.pop() {
            Some(value) => value,
            None => panic!("pop from empty stack"),
        }
    }

    /// Returns the top value without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.buf.last()
    }

    /// Returns the number of values on the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if the stack holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns `true` if another push would panic.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.buf.len() == self.capacity
    }

    /// Returns the maximum number of values.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_capacity_is_two_mebibytes() {
        let stack: BumpStack<u64> = BumpStack::new();
        assert_eq!(stack.capacity(), DEFAULT_STACK_BYTES / 8);

        let bytes: BumpStack<u8> = BumpStack::default();
        assert_eq!(bytes.capacity(), DEFAULT_STACK_BYTES);

        let unit: BumpStack<()> = BumpStack::new();
        assert_eq!(unit.capacity(), DEFAULT_STACK_BYTES);
    }

    #[test]
    fn lifo_order() {
        let mut stack: BumpStack<u32> = BumpStack::with_capacity(8);
        for i in 0..8 {
            stack.push(i);
        }
        assert!(stack.is_full());
        for i in (0..8).rev() {
            assert_eq!(stack.pop(), i);
        }
        assert!(stack.is_empty());
        assert_eq!(stack.peek(), None);
    }

    #[test]
    fn peek_does_not_pop() {
        let mut stack: BumpStack<[u8; 3]> = BumpStack::with_capacity(1);
        stack.push([1, 2, 3]);
        assert_eq!(stack.peek(), Some(&[1, 2, 3]));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    #[should_panic(expected = "stack overflow")]
    fn push_past_capacity_panics() {
        let mut stack: BumpStack<u8> = BumpStack::with_capacity(1);
        stack.push(1);
        stack.push(2);
    }

    #[test]
    #[should_panic(expected = "pop from empty stack")]
    fn pop_empty_panics() {
        let mut stack: BumpStack<u8> = BumpStack::with_capacity(1);
        stack.pop();
    }
}
