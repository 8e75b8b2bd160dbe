//! Ring Queue Component
//!
//! A fixed-capacity FIFO queue backed by a single preallocated buffer
//! addressed with modular arithmetic. Every operation completes in O(1)
//! and the buffer is allocated exactly once, at construction.
//!
//! # Overview
//!
//! The queue distinguishes its two adjacency-identical states (empty and
//! full) with an out-of-band tail sentinel rather than a stored element
//! count. Key properties:
//!
//! - **Fixed capacity**: the buffer never grows or shrinks after construction
//! - **O(1) operations**: enqueue, dequeue, and both peeks are constant time
//! - **Total operations**: capacity violations surface as error values,
//!   never as panics, and never leave partial mutations behind
//! - **Derived occupancy**: logical size is computed from the indices on
//!   every call, so each mutation is responsible for keeping them coherent
//!
//! # Architecture
//!
//! ```text
//!               tail (most recently enqueued)
//!                 │
//!   ┌───┬───┬───┬─▼─┬───┬───┐
//!   │   │ 7 │ 9 │ 4 │   │   │   capacity = 6, len = 3
//!   └───┴─▲─┴───┴───┴───┴───┘
//!         │
//!       head (next to dequeue)      indices advance mod capacity
//! ```
//!
//! When the last element is dequeued the indices reset to the canonical
//! empty state (`head = 0`, no tail) instead of advancing; without that
//! reset the post-dequeue indices would be indistinguishable from a full
//! queue.
//!
//! # Example Usage
//!
//! ```rust
//! use ringqueue::queue::{QueueError, RingQueue};
//!
//! # fn example() -> Result<(), QueueError> {
//! let mut queue = RingQueue::new(3)?;
//!
//! queue.enqueue(1)?;
//! queue.enqueue(2)?;
//! queue.enqueue(3)?;
//! assert!(queue.is_full());
//!
//! assert_eq!(queue.front()?, 1);
//! assert_eq!(queue.rear()?, 3);
//!
//! assert_eq!(queue.dequeue()?, 1);
//! assert_eq!(queue.front()?, 2);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

mod error;
mod internal;
mod types;

pub mod api;

pub use error::{QueueError, QueueResult};
pub use internal::{Iter, RingQueue};
pub use types::QueueStats;

#[cfg(test)]
mod tests;
