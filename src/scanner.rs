use crate::operators::Operator;

const BRACKET_OPEN: u8 = b'(';
const BRACKET_CLOSE: u8 = b')';

/// Checks whether the character at byte position `pos` is outside of all brackets, i.e., the
/// bracket depth right after processing it is zero. Unbalanced brackets are not an error; the
/// depth may become negative. Positions beyond the end count as top-level.
///
/// # Arguments
///
/// * `expr` - expression without whitespace
/// * `pos` - byte position within `expr`
///
pub fn is_top_level(expr: &str, pos: usize) -> bool {
    let mut depth = 0i64;
    for (i, c) in expr.bytes().enumerate() {
        if c == BRACKET_OPEN {
            depth += 1;
        } else if c == BRACKET_CLOSE {
            depth -= 1;
        }
        if i == pos {
            return depth == 0;
        }
    }
    true
}

/// Returns the first top-level position of the operator's symbol in the operator's scan
/// direction.
///
/// Operator symbols are ascii, hence a matching byte is always at a char boundary.
pub fn find_split_point(expr: &str, op: &Operator) -> Option<usize> {
    let bytes = expr.as_bytes();
    let repr = op.repr as u8;
    op.positions(expr)
        .find(|&pos| bytes[pos] == repr && is_top_level(expr, pos))
}

/// Locates the first opening and the last closing bracket. The two are not checked to form a
/// matching pair. Returns `None` if one of them is missing or if the opening bracket comes
/// after the closing one, since then there is nothing that could be enclosed.
pub fn locate_outer_brackets(expr: &str) -> Option<(usize, usize)> {
    let open = expr.bytes().position(|c| c == BRACKET_OPEN)?;
    let close = expr.bytes().rposition(|c| c == BRACKET_CLOSE)?;
    if open < close {
        Some((open, close))
    } else {
        None
    }
}

/// Removes the bytes at `open` and `close` from `expr`, requires `open < close`.
pub fn strip_brackets(expr: &str, open: usize, close: usize) -> String {
    let mut res = String::with_capacity(expr.len() - 2);
    res.push_str(&expr[..open]);
    res.push_str(&expr[open + 1..close]);
    res.push_str(&expr[close + 1..]);
    res
}

#[cfg(test)]
mod test {
    use super::{find_split_point, is_top_level, locate_outer_brackets, strip_brackets};
    use crate::operators::{OperatorKind, OPERATORS};

    fn op(kind: OperatorKind) -> &'static crate::operators::Operator {
        OPERATORS.iter().find(|op| op.kind == kind).unwrap()
    }

    #[test]
    fn test_top_level() {
        let expr = "1+(2*3)-4";
        let reference = [true, true, false, false, false, false, true, true, true];
        for (pos, r) in reference.iter().enumerate() {
            assert_eq!(is_top_level(expr, pos), *r, "pos {}", pos);
        }
        // the opening bracket itself already counts as nested
        assert!(!is_top_level("(1)", 0));
        assert!(is_top_level("(1)", 2));
        // negative depth is not top-level
        assert!(!is_top_level("1)+(2", 2));
        assert!(is_top_level("1", 5));
        assert!(is_top_level("", 0));
    }

    #[test]
    fn test_split_point() {
        assert_eq!(find_split_point("1+2+3", op(OperatorKind::Add)), Some(1));
        assert_eq!(find_split_point("1-2-3", op(OperatorKind::Sub)), Some(3));
        assert_eq!(find_split_point("8/2/2", op(OperatorKind::Div)), Some(3));
        assert_eq!(find_split_point("2^2^2", op(OperatorKind::Pow)), Some(3));
        assert_eq!(find_split_point("2*(3*4)", op(OperatorKind::Mul)), Some(1));
        assert_eq!(find_split_point("(1+2)", op(OperatorKind::Add)), None);
        assert_eq!(find_split_point("(1-2)-3", op(OperatorKind::Sub)), Some(5));
        assert_eq!(find_split_point("-5", op(OperatorKind::Sub)), Some(0));
        assert_eq!(find_split_point("", op(OperatorKind::Sub)), None);
        assert_eq!(find_split_point("ä+1", op(OperatorKind::Add)), Some(2));
    }

    #[test]
    fn test_outer_brackets() {
        assert_eq!(locate_outer_brackets("(1)"), Some((0, 2)));
        assert_eq!(locate_outer_brackets("(1)*(2)"), Some((0, 6)));
        assert_eq!(locate_outer_brackets("((1)"), Some((0, 3)));
        assert_eq!(locate_outer_brackets("(1"), None);
        assert_eq!(locate_outer_brackets("1)"), None);
        assert_eq!(locate_outer_brackets(")1("), None);
        assert_eq!(locate_outer_brackets("1"), None);
    }

    #[test]
    fn test_strip() {
        assert_eq!(strip_brackets("(1)", 0, 2), "1");
        assert_eq!(strip_brackets("(1)*(2)", 0, 6), "1)*(2");
        assert_eq!(strip_brackets("-((2))", 1, 5), "-(2)");
        assert_eq!(strip_brackets("()", 0, 1), "");
    }
}
