//! Iteration tests for the ring queue
//!
//! These tests verify FIFO-order traversal, exact-size reporting, and
//! that iteration stays correct once the buffer has wrapped.

#[cfg(test)]
mod tests {
    use crate::queue::api::RingQueue;

    #[test]
    fn test_iter_yields_fifo_order() {
        let mut queue = RingQueue::new(4).unwrap();
        for value in [3, 1, 4, 1] {
            queue.enqueue(value).unwrap();
        }

        let collected: Vec<i32> = queue.iter().collect();
        assert_eq!(collected, vec![3, 1, 4, 1]);
    }

    #[test]
    fn test_iter_on_empty_queue() {
        let queue = RingQueue::new(3).unwrap();

        let mut iter = queue.iter();
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_iter_after_wraparound() {
        let mut queue = RingQueue::new(3).unwrap();

        queue.enqueue(1).unwrap();
        queue.enqueue(2).unwrap();
        queue.enqueue(3).unwrap();
        queue.dequeue().unwrap();
        queue.dequeue().unwrap();
        queue.enqueue(4).unwrap();
        queue.enqueue(5).unwrap(); // physically at slot 1, logically last

        let collected: Vec<i32> = queue.iter().collect();
        assert_eq!(
            collected,
            vec![3, 4, 5],
            "Iteration must follow logical order, not slot order"
        );
    }

    #[test]
    fn test_iter_reports_exact_size() {
        let mut queue = RingQueue::new(5).unwrap();
        queue.enqueue(1).unwrap();
        queue.enqueue(2).unwrap();
        queue.enqueue(3).unwrap();

        let mut iter = queue.iter();
        assert_eq!(iter.len(), 3);
        iter.next();
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.size_hint(), (2, Some(2)));
    }

    #[test]
    fn test_iter_does_not_consume() {
        let mut queue = RingQueue::new(3).unwrap();
        queue.enqueue(7).unwrap();
        queue.enqueue(8).unwrap();

        let before = queue.stats();
        let _: Vec<i32> = queue.iter().collect();
        let _: Vec<i32> = (&queue).into_iter().collect();
        assert_eq!(queue.stats(), before);
    }
}
