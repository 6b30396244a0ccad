use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Reasons why a string could not be split into an expression tree. Both are detected while
/// parsing. Evaluation of a successfully parsed tree cannot fail.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub enum ParseError {
    /// The whitespace-free (sub-)expression does not contain a single decimal digit.
    NoDigit,
    /// A leaf that remained after operator splitting and bracket stripping is not a number.
    InvalidLiteral(String),
}
impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ParseError::NoDigit => write!(f, "expression must contain at least one digit"),
            ParseError::InvalidLiteral(text) => {
                write!(f, "invalid syntax, cannot parse '{}' as a number", text)
            }
        }
    }
}
impl Error for ParseError {}

/// This will be thrown at you if something within Splitex went wrong. Ok, obviously it is not an
/// exception, so thrown needs to be understood figuratively. It carries a message that can be
/// shown to the user verbatim.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub struct ExError {
    pub msg: String,
}
impl ExError {
    pub fn new(msg: &str) -> ExError {
        ExError {
            msg: msg.to_string(),
        }
    }
}
impl Display for ExError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.msg)
    }
}
impl Error for ExError {}

impl From<ParseError> for ExError {
    fn from(e: ParseError) -> Self {
        ExError { msg: e.to_string() }
    }
}

/// Result of the recursive splitter with [`ParseError`](ParseError) as error type.
pub type ParseResult<U> = Result<U, ParseError>;

/// Splitex' result type with [`ExError`](ExError) as error type.
pub type ExResult<U> = Result<U, ExError>;

/// Creates an [`ExError`](ExError) with a formatted message.
/// ```rust
/// # use std::error::Error;
/// use splitex::{format_exerr, ExError};
/// # fn main() -> Result<(), Box<dyn Error>> {
/// assert_eq!(format_exerr!("some error {}", 1), ExError::new("some error 1"));
/// #     Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! format_exerr {
    ($s:literal $(, $exps:expr)*) => {
        $crate::ExError::new(format!($s $(, $exps)*).as_str())
    }
}

/// Creates an `Err(ExError)` with a formatted message.
#[macro_export]
macro_rules! exerr {
    ($s:literal $(, $exps:expr)*) => {
        Err($crate::format_exerr!($s $(, $exps)*))
    }
}

#[cfg(test)]
mod test {
    use crate::{ExError, ExResult, ParseError};

    #[test]
    fn test_messages() {
        assert_eq!(
            ParseError::NoDigit.to_string(),
            "expression must contain at least one digit"
        );
        assert_eq!(
            ParseError::InvalidLiteral("1a".to_string()).to_string(),
            "invalid syntax, cannot parse '1a' as a number"
        );
        let ex: ExError = ParseError::NoDigit.into();
        assert_eq!(ex.msg, ParseError::NoDigit.to_string());
    }

    #[test]
    fn test_macros() {
        let r: ExResult<f64> = exerr!("no expression {}", "here");
        assert_eq!(r, Err(ExError::new("no expression here")));
    }
}
