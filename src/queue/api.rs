//! Public API for the ring queue
//!
//! This module provides the complete public API for the ring queue
//! component. External callers should import from here rather than from
//! the internal modules. See the module documentation for usage examples
//! and the state-machine details.

// Core queue component
pub use crate::queue::internal::{Iter, RingQueue};

// Error handling
pub use crate::queue::error::{QueueError, QueueResult};

// Observable-state types
pub use crate::queue::types::QueueStats;
