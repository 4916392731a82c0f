//! Delimiter balance checking
//!
//! `{`, `[` and `(` must be closed by their partner in nesting order. A `/`
//! is treated as the start of a comment and is closed by a `*` that is
//! followed by `/`.

use log::{debug, trace};
use rpn_common::{EmptyStackError, Stack};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Result of a balance check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxStatus {
    Balanced,
    /// Openers were left over once the whole input was scanned
    NonEmptyStack,
    /// A closer met the wrong opener, or had nothing to close
    Mismatch,
}

impl SyntaxStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SyntaxStatus::Balanced => "Symbol Balanced",
            SyntaxStatus::NonEmptyStack => "Error1: Non-empty stack after passing",
            SyntaxStatus::Mismatch => "Error3: Symbol mismatch or Error2: Empty stack popped",
        }
    }

    pub fn is_balanced(&self) -> bool {
        matches!(self, SyntaxStatus::Balanced)
    }
}

impl fmt::Display for SyntaxStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SyntaxStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Which `*` decides whether a `*` closes a comment
///
/// `FirstOccurrence` looks past the first `*` anywhere in the input, for every
/// `*` scanned. With several `*` in one input that means a later `*/` can be
/// missed, or a lone `*` can be taken as a terminator. `CurrentPosition`
/// looks past the `*` being scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommentLookahead {
    #[default]
    FirstOccurrence,
    CurrentPosition,
}

impl FromStr for CommentLookahead {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first-occurrence" => Ok(CommentLookahead::FirstOccurrence),
            "current-position" => Ok(CommentLookahead::CurrentPosition),
            _ => Err(format!(
                "Invalid comment lookahead: {s} (expected first-occurrence or current-position)"
            )),
        }
    }
}

impl fmt::Display for CommentLookahead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommentLookahead::FirstOccurrence => write!(f, "first-occurrence"),
            CommentLookahead::CurrentPosition => write!(f, "current-position"),
        }
    }
}

/// Scan `input` once, left to right, and report whether its delimiters balance
pub fn check_balance(
    input: &str,
    lookahead: CommentLookahead,
) -> Result<SyntaxStatus, EmptyStackError> {
    let chars: Vec<char> = input.chars().collect();
    let first_star = chars.iter().position(|&c| c == '*');
    let mut stack = Stack::new();

    for (index, &c) in chars.iter().enumerate() {
        match c {
            '{' | '[' | '(' | '/' => {
                trace!("push {c:?} at {index}");
                stack.push(c);
            }
            '}' | ']' | ')' => {
                let opener = match c {
                    '}' => '{',
                    ']' => '[',
                    _ => '(',
                };
                // Emptiness is checked first so the pop cannot underflow
                if stack.is_empty() || stack.pop()? != opener {
                    debug!("Mismatched {c:?} at {index}");
                    return Ok(SyntaxStatus::Mismatch);
                }
            }
            '*' => {
                if closes_comment(&chars, index, first_star, lookahead) {
                    trace!("comment terminator at {index}");
                    if stack.is_empty() || stack.pop()? != '/' {
                        debug!("Comment terminator at {index} has no matching '/'");
                        return Ok(SyntaxStatus::Mismatch);
                    }
                }
            }
            _ => {}
        }
    }

    if stack.is_empty() {
        Ok(SyntaxStatus::Balanced)
    } else {
        let leftover: String = stack.iter().collect();
        debug!("{} unclosed symbol(s) left: {leftover:?}", stack.len());
        Ok(SyntaxStatus::NonEmptyStack)
    }
}

/// Whether the `*` at `index` should be treated as the start of `*/`
///
/// `first_star` is the position of the first `*` in `chars`, found once per
/// scan.
fn closes_comment(
    chars: &[char],
    index: usize,
    first_star: Option<usize>,
    lookahead: CommentLookahead,
) -> bool {
    let star = match lookahead {
        CommentLookahead::FirstOccurrence => first_star.unwrap_or(index),
        CommentLookahead::CurrentPosition => index,
    };
    chars.get(star + 1) == Some(&'/')
}
