//! Unbounded FIFO queue of linked nodes.
//!
//! Nodes live in a [`slab::Slab`] and link front-to-back by slab key, so a
//! dequeue frees a slot that the next enqueue reuses without allocating.

use slab::Slab;

#[derive(Debug)]
struct Node<T> {
    value: T,
    next: Option<usize>,
}

/// Unbounded FIFO queue.
///
/// # Example
///
/// ```
/// use nexus_kit::LinkedQueue;
///
/// let mut queue = LinkedQueue::new();
/// queue.enqueue("first");
/// queue.enqueue("second");
/// assert_eq!(queue.peek(), Some(&"first"));
/// assert_eq!(queue.dequeue(), Some("first"));
/// assert_eq!(queue.len(), 1);
/// ```
#[derive(Debug)]
pub struct LinkedQueue<T> {
    nodes: Slab<Node<T>>,
    /// Oldest node, next to dequeue.
    front: Option<usize>,
    /// Newest node.
    back: Option<usize>,
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedQueue<T> {
    /// Creates an empty queue. Does not allocate.
    pub const fn new() -> Self {
        Self {
            nodes: Slab::new(),
            front: None,
            back: None,
        }
    }

    /// Appends a value at the back.
    pub fn enqueue(&mut self, value: T) {
        let key = self.nodes.insert(Node { value, next: None });
        match self.back {
            Some(back) => self.nodes[back].next = Some(key),
            None => self.front = Some(key),
        }
        self.back = Some(key);
    }

    /// Removes and returns the oldest value.
    pub fn dequeue(&mut self) -> Option<T> {
        let key = self.front?;
        let node = self.nodes.remove(key);
        self.front = node.next;
        if self.front.is_none() {
            self.back = None;
        }
        Some(node.value)
    }

    /// Returns the oldest value without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.front.map(|key| &self.nodes[key].value)
    }

    /// Returns the number of queued values.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if nothing is queued.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front.is_none()
    }

    /// Drops every queued value and releases node storage.
    pub fn clear(&mut self) {
        self.nodes = Slab::new();
        self.front = None;
        self.back = None;
    }
}
