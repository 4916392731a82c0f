//! RPN Converter - Common Types
//!
//! This crate contains the LIFO stack shared by both analysis passes and
//! the error type it reports on underflow.

pub mod error;
pub mod stack;

pub use error::EmptyStackError;
pub use stack::Stack;
