use num::Float;
use std::fmt::{self, Display, Formatter};

/// The five supported binary operations.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum OperatorKind {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl OperatorKind {
    /// Character that represents the operation in an expression string.
    pub fn symbol(self) -> char {
        match self {
            OperatorKind::Add => '+',
            OperatorKind::Sub => '-',
            OperatorKind::Mul => '*',
            OperatorKind::Div => '/',
            OperatorKind::Pow => '^',
        }
    }

    /// Combines two operands. Division by zero is not special-cased and results in
    /// `inf` or `NaN` as defined by IEEE-754.
    pub fn apply<T: Float>(self, a: T, b: T) -> T {
        match self {
            OperatorKind::Add => a + b,
            OperatorKind::Sub => a - b,
            OperatorKind::Mul => a * b,
            OperatorKind::Div => a / b,
            OperatorKind::Pow => a.powf(b),
        }
    }
}

impl Display for OperatorKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Order in which an operator symbol is searched for in an expression string.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum ScanDirection {
    /// Left to right, the leftmost top-level occurrence becomes the split point.
    Forward,
    /// Right to left, the rightmost top-level occurrence becomes the split point. This makes
    /// the operation left-associative since the left part keeps all earlier occurrences.
    Backward,
}

/// Entry of the operator table.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub struct Operator {
    pub kind: OperatorKind,
    /// Representation of the operator in the string to be parsed, e.g., `-`.
    pub repr: char,
    pub scan: ScanDirection,
}

impl Operator {
    /// Byte positions of `expr` in the order they are visited when looking for this operator.
    pub fn positions(&self, expr: &str) -> Box<dyn Iterator<Item = usize>> {
        let n = expr.len();
        match self.scan {
            ScanDirection::Forward => Box::new(0..n),
            ScanDirection::Backward => Box::new((0..n).rev()),
        }
    }
}

/// All binary operators. The order must not be changed. Weaker binding operators come first,
/// since the first operator that has a top-level occurrence determines the outermost split.
pub static OPERATORS: [Operator; 5] = [
    Operator {
        kind: OperatorKind::Add,
        repr: '+',
        scan: ScanDirection::Forward,
    },
    Operator {
        kind: OperatorKind::Sub,
        repr: '-',
        scan: ScanDirection::Backward,
    },
    Operator {
        kind: OperatorKind::Mul,
        repr: '*',
        scan: ScanDirection::Forward,
    },
    Operator {
        kind: OperatorKind::Div,
        repr: '/',
        scan: ScanDirection::Backward,
    },
    Operator {
        kind: OperatorKind::Pow,
        repr: '^',
        scan: ScanDirection::Backward,
    },
];
