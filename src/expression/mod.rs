use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use num::Float;

use crate::node::Node;
use crate::{parser, ExError, ExResult};

#[cfg(feature = "serde")]
mod serde;

/// A parsed expression together with the string it has been parsed from.
///
/// ```rust
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// #
/// use splitex::SplitEx;
/// let expr = SplitEx::<f64>::parse("(1 + 2) * 3 - 1")?;
/// assert_eq!(expr.eval(), 8.0);
/// assert_eq!(format!("{}", expr), "(1 + 2) * 3 - 1");
/// assert_eq!(format!("{}", expr.root()), "(((1 + 2) * 3) - 1)");
/// #
/// #     Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Debug)]
pub struct SplitEx<T: Float = f64> {
    text: String,
    root: Node<T>,
}

impl<T> SplitEx<T>
where
    T: Float + FromStr,
{
    /// Parses an expression string.
    ///
    /// # Errors
    ///
    /// An [`ExError`](ExError) with a human-readable message is returned if the string does not
    /// contain any digit or if a part of it cannot be interpreted as a number.
    pub fn parse(text: &str) -> ExResult<Self> {
        let root = parser::parse(text)?;
        Ok(SplitEx {
            text: text.to_string(),
            root,
        })
    }

    pub fn eval(&self) -> T {
        self.root.eval()
    }

    /// Returns the string the expression has been parsed from.
    pub fn unparse(&self) -> &str {
        self.text.as_str()
    }

    pub fn root(&self) -> &Node<T> {
        &self.root
    }

    pub fn into_root(self) -> Node<T> {
        self.root
    }
}

impl<T> FromStr for SplitEx<T>
where
    T: Float + FromStr,
{
    type Err = ExError;
    fn from_str(text: &str) -> ExResult<Self> {
        Self::parse(text)
    }
}

impl<T: Float> Display for SplitEx<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod test {
    use super::SplitEx;
    use crate::{node::Node, ExResult};
    use std::str::FromStr;

    #[test]
    fn test_parse() -> ExResult<()> {
        let expr = SplitEx::<f64>::parse(" 1 / (1 + 1)")?;
        assert_eq!(expr.eval(), 0.5);
        assert_eq!(expr.unparse(), " 1 / (1 + 1)");
        assert_eq!(expr.root().n_nodes(), 5);
        let expr = SplitEx::<f32>::from_str("2^(-1)")?;
        assert_eq!(expr.eval(), 0.5f32);
        assert_eq!(SplitEx::<f64>::parse("")?.into_root(), Node::Constant(0.0));
        Ok(())
    }

    #[test]
    fn test_errors() {
        let err = SplitEx::<f64>::parse("x").unwrap_err();
        assert_eq!(err.msg, "expression must contain at least one digit");
        let err = SplitEx::<f64>::parse("2 * 3x").unwrap_err();
        assert_eq!(err.msg, "invalid syntax, cannot parse '3x' as a number");
    }
}
