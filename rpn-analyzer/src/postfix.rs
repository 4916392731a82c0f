//! Infix to postfix conversion
//!
//! A simplified shunting-yard pass: operands go straight to the output,
//! operators wait on a stack until something of lower precedence arrives.
//! There is no associativity distinction, no unary minus and no exponent.

use log::{debug, trace};
use rpn_common::{EmptyStackError, Stack};

/// Binary operators the converter reorders
pub fn is_operator(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/')
}

/// Binding strength of `c`. Anything that is not an operator is 0, which
/// keeps `(` on the stack while operators are popped.
pub fn precedence(c: char) -> u8 {
    match c {
        '*' | '/' => 2,
        '+' | '-' => 1,
        _ => 0,
    }
}

/// Rewrite `input` into postfix order
///
/// Characters that are neither ASCII alphanumerics, parentheses nor operators
/// are dropped. An unmatched `)` is not an error.
pub fn to_postfix(input: &str) -> Result<String, EmptyStackError> {
    let mut stack = Stack::new();
    let mut output = String::with_capacity(input.len());

    for c in input.chars() {
        if c.is_ascii_alphanumeric() {
            output.push(c);
        } else if c == '(' {
            stack.push(c);
        } else if c == ')' {
            while !stack.is_empty() && *stack.peek()? != '(' {
                output.push(stack.pop()?);
            }
            if !stack.is_empty() {
                // Discard the '('
                stack.pop()?;
            }
        } else if is_operator(c) {
            while !stack.is_empty() && precedence(*stack.peek()?) >= precedence(c) {
                output.push(stack.pop()?);
            }
            trace!("push operator {c:?} after {output:?}");
            stack.push(c);
        }
    }

    while !stack.is_empty() {
        output.push(stack.pop()?);
    }

    debug!("Postfix of {input:?} is {output:?}");
    Ok(output)
}
