//! Expression analysis for simple arithmetic input
//!
//! Two single-pass scans over the same input: a delimiter balance check and,
//! for balanced input, an infix to postfix rewrite. Each scan builds its own
//! stack, so running one never affects the other.

pub mod postfix;
pub mod syntax;

#[cfg(test)]
mod tests;

use log::debug;
use rpn_common::EmptyStackError;
use serde::Serialize;

pub use postfix::{is_operator, precedence};
pub use syntax::{CommentLookahead, SyntaxStatus};

/// Holds one expression and runs the analysis passes over it
#[derive(Debug, Clone, Default)]
pub struct ExpressionAnalyzer {
    input: String,
    lookahead: CommentLookahead,
}

/// Outcome of running the full check-then-convert flow on one input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub input: String,
    pub status: SyntaxStatus,
    /// Only present when the input was balanced
    pub postfix: Option<String>,
}

impl Analysis {
    pub fn is_balanced(&self) -> bool {
        self.status.is_balanced()
    }
}

impl ExpressionAnalyzer {
    /// Create an analyzer with an empty input
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer that resolves `*` lookahead with the given mode
    pub fn with_lookahead(lookahead: CommentLookahead) -> Self {
        Self {
            input: String::new(),
            lookahead,
        }
    }

    pub fn set_lookahead(&mut self, lookahead: CommentLookahead) {
        self.lookahead = lookahead;
    }

    pub fn lookahead(&self) -> CommentLookahead {
        self.lookahead
    }

    /// Store the expression to analyze. Nothing is validated here.
    pub fn parse_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Check that every opener has a matching, correctly nested closer
    pub fn check_syntax(&self) -> Result<SyntaxStatus, EmptyStackError> {
        syntax::check_balance(&self.input, self.lookahead)
    }

    /// Rewrite the infix input into postfix order
    ///
    /// Malformed input is not rejected; run [`check_syntax`](Self::check_syntax)
    /// first.
    pub fn postfix_expression(&self) -> Result<String, EmptyStackError> {
        postfix::to_postfix(&self.input)
    }

    /// Check the input and convert it only if it is balanced
    pub fn analyze(&self) -> Result<Analysis, EmptyStackError> {
        let status = self.check_syntax()?;
        let postfix = if status.is_balanced() {
            Some(self.postfix_expression()?)
        } else {
            None
        };

        debug!("Analyzed {:?}: {} ({:?})", self.input, status, postfix);

        Ok(Analysis {
            input: self.input.clone(),
            status,
            postfix,
        })
    }
}
