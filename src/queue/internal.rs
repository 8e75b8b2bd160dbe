//! Internal RingQueue implementation with sentinel-based state tracking
//!
//! This module provides the core queue state machine:
//! - Preallocated fixed-length buffer with modular index arithmetic
//! - Tail sentinel (`None`) distinguishing empty from full
//! - Canonical empty-state reset on the last dequeue
//! - Derived occupancy (no stored element count)

use crate::queue::error::{QueueError, QueueResult};
use crate::queue::types::QueueStats;

/// Fixed-capacity FIFO queue over a circular buffer
///
/// The buffer is allocated once at construction and addressed with
/// modular arithmetic; removal never shifts data. `head` is the index of
/// the oldest element, `tail` the index of the newest. `tail == None` is
/// the out-of-band sentinel for "no elements since the last empty state";
/// it is what keeps an empty queue distinguishable from a full one, since
/// both present the same head/tail adjacency under modular arithmetic.
///
/// # Example
///
/// ```rust
/// use ringqueue::queue::RingQueue;
///
/// # fn main() -> Result<(), ringqueue::queue::QueueError> {
/// let mut queue = RingQueue::new(2)?;
/// queue.enqueue(10)?;
/// queue.enqueue(20)?;
/// assert!(queue.enqueue(30).is_err()); // full, state unchanged
/// assert_eq!(queue.dequeue()?, 10);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RingQueue {
    /// Circular backing buffer, length fixed at construction
    buffer: Vec<i32>,
    /// Index of the next element to be dequeued
    head: usize,
    /// Index of the most recently enqueued element; `None` means the
    /// queue has held nothing since the last empty state
    tail: Option<usize>,
}

impl RingQueue {
    /// Create an empty queue with a fixed capacity of `capacity` elements
    ///
    /// The backing buffer is allocated here and never resized. Returns
    /// `QueueError::InvalidCapacity` for a zero capacity rather than
    /// allocating an unusable zero-length buffer.
    pub fn new(capacity: usize) -> QueueResult<Self> {
        if capacity == 0 {
            return Err(QueueError::InvalidCapacity { capacity });
        }

        log::trace!("ring queue created: capacity={}", capacity);

        Ok(Self {
            buffer: vec![0; capacity],
            head: 0,
            tail: None,
        })
    }

    /// Fixed capacity of the queue
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Number of logically present elements
    ///
    /// Always derived from the index pair; the queue stores no count.
    pub fn len(&self) -> usize {
        let capacity = self.buffer.len();
        match self.tail {
            None => 0,
            Some(tail) => (tail + capacity - self.head) % capacity + 1,
        }
    }

    /// True iff the queue holds no elements
    pub fn is_empty(&self) -> bool {
        // Both conditions: the last dequeue resets head alongside the
        // tail sentinel, and every query relies on that coupling.
        self.tail.is_none() && self.head == 0
    }

    /// True iff the queue holds exactly `capacity` elements
    pub fn is_full(&self) -> bool {
        // Full iff the tail sits capacity - 1 ahead of the head. The
        // empty state never satisfies this: its tail is the sentinel.
        let capacity = self.buffer.len();
        self.tail == Some((self.head + capacity - 1) % capacity)
    }

    /// Peek the oldest element without removing it
    pub fn front(&self) -> QueueResult<i32> {
        if self.is_empty() {
            return Err(QueueError::QueueEmpty);
        }
        Ok(self.buffer[self.head])
    }

    /// Peek the newest element without removing it
    pub fn rear(&self) -> QueueResult<i32> {
        match self.tail {
            Some(tail) => Ok(self.buffer[tail]),
            None => Err(QueueError::QueueEmpty),
        }
    }

    /// Append `value` at the tail
    ///
    /// Fails with `QueueError::QueueFull` when the queue already holds
    /// `capacity` elements; a failed enqueue mutates nothing.
    pub fn enqueue(&mut self, value: i32) -> QueueResult<()> {
        if self.is_full() {
            return Err(QueueError::QueueFull {
                capacity: self.buffer.len(),
            });
        }

        // The sentinel steps to slot 0, coinciding with head == 0 in the
        // canonical empty state; an occupied tail advances one slot with
        // wraparound.
        let tail = match self.tail {
            None => 0,
            Some(tail) => (tail + 1) % self.buffer.len(),
        };
        self.buffer[tail] = value;
        self.tail = Some(tail);

        Ok(())
    }

    /// Remove and return the oldest element
    ///
    /// Fails with `QueueError::QueueEmpty` when there is nothing to
    /// remove; a failed dequeue mutates nothing.
    pub fn dequeue(&mut self) -> QueueResult<i32> {
        let Some(tail) = self.tail else {
            return Err(QueueError::QueueEmpty);
        };

        let value = self.buffer[self.head];

        if self.head == tail {
            // Removing the last element. Reset to the canonical empty
            // state instead of advancing head: the advanced index pair
            // would satisfy the full-queue test.
            self.head = 0;
            self.tail = None;
            log::trace!("last element dequeued, reset to canonical empty state");
        } else {
            self.head = (self.head + 1) % self.buffer.len();
        }

        Ok(value)
    }

    /// Drop all elements, restoring the canonical empty state
    ///
    /// Equivalent to dequeuing until empty, but O(1). Slot contents are
    /// not scrubbed; they are unreachable once the indices reset.
    pub fn clear(&mut self) {
        self.head = 0;
        self.tail = None;
        log::trace!("ring queue cleared: capacity={}", self.buffer.len());
    }

    /// Iterate the elements in FIFO order without consuming them
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            queue: self,
            offset: 0,
            remaining: self.len(),
        }
    }

    /// Snapshot of the observable state
    pub fn stats(&self) -> QueueStats {
        QueueStats {
            capacity: self.buffer.len(),
            len: self.len(),
            head: self.head,
            tail: self.tail,
        }
    }
}

/// Immutable iterator over the queue in FIFO order, head to tail
pub struct Iter<'a> {
    queue: &'a RingQueue,
    offset: usize,
    remaining: usize,
}

impl Iterator for Iter<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        if self.remaining == 0 {
            return None;
        }
        let index = (self.queue.head + self.offset) % self.queue.buffer.len();
        self.offset += 1;
        self.remaining -= 1;
        Some(self.queue.buffer[index])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a RingQueue {
    type Item = i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
