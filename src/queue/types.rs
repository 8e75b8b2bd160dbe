//! Type definitions for the ring queue
//!
//! This module contains the observable-state structures used for
//! diagnostics and for state-preservation assertions in tests.

/// Snapshot of the queue's observable state
///
/// The snapshot exposes the index pair driving the queue's state machine
/// without granting mutable access to it. Two snapshots compare equal iff
/// the queues they were taken from are observably identical.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueStats {
    /// Fixed capacity of the backing buffer
    pub capacity: usize,
    /// Number of logically present elements (derived, never stored)
    pub len: usize,
    /// Index of the next element to be dequeued
    pub head: usize,
    /// Index of the most recently enqueued element; `None` while the
    /// queue is in the canonical empty state
    pub tail: Option<usize>,
}
