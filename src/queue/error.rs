//! Queue Error Types

#[derive(Debug, thiserror::Error)]
pub enum QueueError {
    #[error("Invalid capacity: {capacity} (must be at least 1)")]
    InvalidCapacity { capacity: usize },

    #[error("Queue is full (capacity: {capacity})")]
    QueueFull { capacity: usize },

    #[error("Queue is empty")]
    QueueEmpty,
}

/// Result type for queue operations
pub type QueueResult<T> = Result<T, QueueError>;
