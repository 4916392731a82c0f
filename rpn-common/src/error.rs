//! Error handling for the stack
//!
//! Syntax problems in an expression are reported as data by the analyzer.
//! The only failure that is an actual error is touching the top of an
//! empty stack.

use thiserror::Error;

/// Raised when the top of an empty stack is popped or peeked
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyStackError {
    #[error("Empty stack popped")]
    Pop,

    #[error("Peek on empty stack")]
    Peek,
}
