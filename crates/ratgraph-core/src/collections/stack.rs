use crate::error::{RatError, Result};

/// LIFO stack.
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, element: T) {
        self.items.push(element);
    }

    /// Remove and return the top element.
    pub fn pop(&mut self) -> Result<T> {
        self.items
            .pop()
            .ok_or_else(|| RatError::empty_collection("pop"))
    }

    /// Borrow the top element without removing it.
    pub fn peek(&self) -> Result<&T> {
        self.items
            .last()
            .ok_or_else(|| RatError::empty_collection("peek"))
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}
