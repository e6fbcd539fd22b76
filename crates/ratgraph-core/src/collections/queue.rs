use std::fmt;

use crate::error::{RatError, Result};

/// Starting capacity of a new queue; doubled whenever an enqueue would overflow.
pub const DEFAULT_CAPACITY: usize = 3;

/// FIFO queue over a ring buffer.
///
/// `front` indexes the oldest element and `len` counts occupied slots, so the
/// rear slot is `(front + len) % capacity`. Growth unrolls the ring into a
/// buffer twice the size, preserving logical order.
pub struct CircularQueue<T> {
    slots: Vec<Option<T>>,
    front: usize,
    len: usize,
}

impl<T> CircularQueue<T> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            slots: std::iter::repeat_with(|| None).take(capacity).collect(),
            front: 0,
            len: 0,
        }
    }

    /// Add an element at the rear, expanding the buffer if it is full.
    pub fn enqueue(&mut self, element: T) {
        if self.len == self.slots.len() {
            self.expand_capacity();
        }
        let rear = (self.front + self.len) % self.slots.len();
        self.slots[rear] = Some(element);
        self.len += 1;
    }

    /// Remove and return the element at the front.
    pub fn dequeue(&mut self) -> Result<T> {
        if self.len == 0 {
            return Err(RatError::empty_collection("dequeue"));
        }
        let element = self.slots[self.front]
            .take()
            .ok_or_else(|| RatError::empty_collection("dequeue"))?;
        self.front = (self.front + 1) % self.slots.len();
        self.len -= 1;
        Ok(element)
    }

    /// Borrow the element at the front without removing it.
    pub fn first(&self) -> Result<&T> {
        if self.len == 0 {
            return Err(RatError::empty_collection("first"));
        }
        self.slots[self.front]
            .as_ref()
            .ok_or_else(|| RatError::empty_collection("first"))
    }

    pub fn size(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Iterate front to rear.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        let capacity = self.slots.len();
        (0..self.len).filter_map(move |offset| self.slots[(self.front + offset) % capacity].as_ref())
    }

    fn expand_capacity(&mut self) {
        let capacity = self.slots.len();
        let mut larger: Vec<Option<T>> = Vec::with_capacity(capacity * 2);
        for offset in 0..self.len {
            larger.push(self.slots[(self.front + offset) % capacity].take());
        }
        larger.resize_with(capacity * 2, || None);
        self.slots = larger;
        self.front = 0;
    }
}

impl<T> Default for CircularQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_queue_is_empty() {
        let q: CircularQueue<u32> = CircularQueue::new();
        assert!(q.is_empty());
        assert_eq!(q.size(), 0);
        assert_eq!(q.capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn test_fifo_order() {
        let mut q = CircularQueue::new();
        q.enqueue(5);
        q.enqueue(7);
        q.enqueue(9);
        assert_eq!(q.size(), 3);
        assert_eq!(*q.first().unwrap(), 5);
        assert_eq!(q.dequeue().unwrap(), 5);
        assert_eq!(q.dequeue().unwrap(), 7);
        assert_eq!(q.dequeue().unwrap(), 9);
        assert!(q.is_empty());
    }

    #[test]
    fn test_wrap_around_without_growth() {
        let mut q = CircularQueue::new();
        q.enqueue(5);
        q.enqueue(7);
        q.enqueue(9);
        q.dequeue().unwrap();
        // Rear wraps into the slot freed at index 0
        q.enqueue(13);
        assert_eq!(q.capacity(), DEFAULT_CAPACITY);
        assert_eq!(q.iter().copied().collect::<Vec<_>>(), vec![7, 9, 13]);
    }

    #[test]
    fn test_growth_preserves_order_after_wrap() {
        let mut q = CircularQueue::new();
        q.enqueue(1);
        q.enqueue(2);
        q.enqueue(3);
        q.dequeue().unwrap();
        q.enqueue(4);
        q.enqueue(5);
        assert_eq!(q.capacity(), DEFAULT_CAPACITY * 2);
        assert_eq!(q.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4, 5]);
        assert_eq!(q.dequeue().unwrap(), 2);
        assert_eq!(*q.first().unwrap(), 3);
    }

    #[test]
    fn test_many_elements() {
        let mut q = CircularQueue::new();
        for i in 0..1000 {
            q.enqueue(i);
        }
        assert_eq!(q.size(), 1000);
        for i in 0..1000 {
            assert_eq!(q.dequeue().unwrap(), i);
        }
        assert!(q.is_empty());
    }

    #[test]
    fn test_dequeue_empty_is_error() {
        let mut q: CircularQueue<String> = CircularQueue::new();
        let err = q.dequeue().unwrap_err();
        assert!(matches!(err, RatError::EmptyCollection { ref operation } if operation == "dequeue"));
    }

    #[test]
    fn test_first_empty_is_error() {
        let mut q = CircularQueue::new();
        q.enqueue("a");
        q.dequeue().unwrap();
        assert!(matches!(
            q.first(),
            Err(RatError::EmptyCollection { .. })
        ));
    }

    #[test]
    fn test_debug_lists_front_to_rear() {
        let mut q = CircularQueue::new();
        q.enqueue('x');
        q.enqueue('y');
        assert_eq!(format!("{:?}", q), "['x', 'y']");
    }
}
