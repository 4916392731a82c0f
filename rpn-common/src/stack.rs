//! LIFO stack used by the scanning passes

use crate::error::EmptyStackError;

/// A last-in-first-out container. Items are only added and removed at the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T = char> {
    elements: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Push an item onto the top
    pub fn push(&mut self, element: T) {
        self.elements.push(element);
    }

    /// Remove and return the top item
    pub fn pop(&mut self) -> Result<T, EmptyStackError> {
        self.elements.pop().ok_or(EmptyStackError::Pop)
    }

    /// Borrow the top item without removing it
    pub fn peek(&self) -> Result<&T, EmptyStackError> {
        self.elements.last().ok_or(EmptyStackError::Peek)
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Drop every item, leaving the stack ready for an unrelated input
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Iterate from bottom to top
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}
