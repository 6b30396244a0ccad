#![doc(html_root_url = "https://docs.rs/splitex/0.1.0")]
//! Splitex is a small arithmetic expression evaluator. It does not tokenize. Instead, the
//! expression string is recursively split at top-level operators, i.e., operators that are
//! not enclosed by brackets.
//!
//! ```rust
//! # use std::error::Error;
//! # fn main() -> Result<(), Box<dyn Error>> {
//! #
//! use splitex::evaluate;
//! assert_eq!(evaluate("((1 + 1) * 2) / (3 - 1)")?, 2.0);
//! assert_eq!(evaluate("-2^2")?, -4.0);
//! #
//! #     Ok(())
//! # }
//! ```
//!
//! Supported are the binary operators `+`, `-`, `*`, `/`, and `^` together with brackets.
//! Operators are considered in the order `+`, `-`, `*`, `/`, `^` and the first operator with
//! a top-level occurrence determines where the string is split. `+` and `*` are searched from
//! left to right, `-`, `/`, and `^` from right to left. Hence, `-`, `/`, and also `^` are
//! left-associative, e.g., `2^3^2` is `(2^3)^2`. Empty operands are zero. A leading minus
//! is therefore a subtraction from zero with the lowest priority, e.g., `-2^2` is `0-(2^2)`.
//!
//! If you are interested in the tree, use [`parse`](parse) or [`SplitEx`](SplitEx).
//!
//! ```rust
//! # use std::error::Error;
//! # fn main() -> Result<(), Box<dyn Error>> {
//! #
//! use splitex::{parse, Node, OperatorKind};
//! let tree = parse::<f64>("8 / 2 / 2")?;
//! match &tree {
//!     Node::BinaryOp { kind, right, .. } => {
//!         assert_eq!(*kind, OperatorKind::Div);
//!         assert_eq!(**right, Node::Constant(2.0));
//!     }
//!     _ => unreachable!(),
//! }
//! assert_eq!(format!("{}", tree), "((8 / 2) / 2)");
//! assert_eq!(tree.eval(), 2.0);
//! #
//! #     Ok(())
//! # }
//! ```
//!
//! Parsing fails if a (sub-)expression does not contain any digit or if a part of the string
//! that is neither split nor stripped of brackets is not a number. Evaluation never fails.
//! Division by zero results in `inf` or `NaN`.
//!
//! With the feature `serde`, [`SplitEx`](SplitEx) can be serialized to and deserialized
//! from its string representation.

use tracing::debug;

mod expression;
mod node;
mod operators;
mod parser;
mod result;
mod scanner;

pub use {
    expression::SplitEx,
    node::{eval, Node},
    operators::{Operator, OperatorKind, ScanDirection, OPERATORS},
    parser::parse,
    result::{ExError, ExResult, ParseError, ParseResult},
    scanner::is_top_level,
};

/// Parses and evaluates a string in double precision.
///
/// # Arguments
///
/// * `expression` - string to be evaluated, e.g., `1 + 2 * 3`
///
/// # Errors
///
/// Returns an [`ExError`](ExError) with a message that can be shown to a user if the string
/// cannot be parsed. An empty string is valid and evaluates to zero.
///
pub fn evaluate(expression: &str) -> ExResult<f64> {
    let tree = parse::<f64>(expression)?;
    let res = tree.eval();
    debug!("evaluated '{}' to {}", expression, res);
    Ok(res)
}

#[cfg(test)]
mod test {
    use crate::evaluate;

    #[test]
    fn test_evaluate() {
        assert_eq!(evaluate("1 + 2 * 3"), Ok(7.0));
        assert_eq!(evaluate(""), Ok(0.0));
        assert_eq!(
            evaluate("2 + x").unwrap_err().msg,
            "expression must contain at least one digit"
        );
        assert!(evaluate("1 / 0").unwrap().is_infinite());
    }
}
