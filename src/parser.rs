use std::borrow::Cow;
use std::str::FromStr;

use lazy_static::lazy_static;
use num::Float;
use regex::Regex;
use tracing::trace;

use crate::node::Node;
use crate::operators::OPERATORS;
use crate::result::{ParseError, ParseResult};
use crate::scanner::{find_split_point, locate_outer_brackets, strip_brackets};

/// Removes all whitespace, not only leading and trailing.
pub fn remove_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Digits of any script count, e.g., `٣`. Only ascii digits form valid literals though.
pub fn contains_digit(text: &str) -> bool {
    text.chars().any(|c| c.is_numeric())
}

/// Returns the text if it is a complete numeric literal such as `3`, `-1.5`, `.5`, `2.`,
/// or `1e3`.
pub fn is_numeric_text(text: &str) -> Option<&str> {
    lazy_static! {
        static ref RE_NUMBER: Regex =
            Regex::new(r"^-?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][0-9]+)?$").unwrap();
    }
    RE_NUMBER.find(text).map(|m| m.as_str())
}

fn parse_literal<T>(expr: &str) -> ParseResult<Node<T>>
where
    T: Float + FromStr,
{
    is_numeric_text(expr)
        .and_then(|num_str| num_str.parse::<T>().ok())
        .map(Node::Constant)
        .ok_or_else(|| ParseError::InvalidLiteral(expr.to_string()))
}

/// Splits a whitespace-free expression at the first top-level occurrence of the weakest binding
/// operator and recurses into both parts. If no operator is at top-level, the first opening and
/// the last closing bracket are removed and the search starts over. What remains after that
/// must be a number.
fn split<T>(expr: &str) -> ParseResult<Node<T>>
where
    T: Float + FromStr,
{
    if expr.is_empty() {
        return Ok(Node::zero());
    }
    if !contains_digit(expr) {
        return Err(ParseError::NoDigit);
    }
    let mut expr = Cow::Borrowed(expr);
    loop {
        for op in OPERATORS.iter() {
            if let Some(pos) = find_split_point(&expr, op) {
                trace!("splitting '{}' at {} by '{}'", expr, pos, op.repr);
                let left = split(&expr[..pos])?;
                let right = split(&expr[pos + 1..])?;
                return Ok(Node::binary(op.kind, left, right));
            }
        }
        match locate_outer_brackets(&expr) {
            Some((open, close)) => {
                let stripped = strip_brackets(&expr, open, close);
                trace!("stripped brackets of '{}' to '{}'", expr, stripped);
                expr = Cow::Owned(stripped);
            }
            None => return parse_literal(&expr),
        }
    }
}

/// Parses a string into an expression tree.
///
/// An empty string, also after whitespace removal, results in the constant zero. This is
/// what makes empty operands such as the left side of `-5` work.
///
/// # Arguments
///
/// * `text` - the expression, e.g., `(1 + 2) * 3`
///
/// # Errors
///
/// * [`ParseError::NoDigit`](ParseError::NoDigit) if a (sub-)expression does not contain digits
/// * [`ParseError::InvalidLiteral`](ParseError::InvalidLiteral) if a remaining leaf is not a number
///
pub fn parse<T>(text: &str) -> ParseResult<Node<T>>
where
    T: Float + FromStr,
{
    split(&remove_whitespace(text))
}
