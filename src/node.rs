use num::Float;
use std::fmt::{self, Display, Formatter};

use crate::operators::OperatorKind;

const OVERFLOWING_LITERAL: &str = "1e999";

/// Node of an expression tree. Children are exclusively owned, hence a tree has neither
/// sharing nor cycles. Textually empty operands are represented as `Constant(0)`.
#[derive(Clone, PartialEq, Debug)]
pub enum Node<T: Float = f64> {
    Constant(T),
    BinaryOp {
        kind: OperatorKind,
        left: Box<Node<T>>,
        right: Box<Node<T>>,
    },
}

impl<T: Float> Node<T> {
    pub fn binary(kind: OperatorKind, left: Node<T>, right: Node<T>) -> Self {
        Node::BinaryOp {
            kind,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn zero() -> Self {
        Node::Constant(T::zero())
    }

    /// Evaluates the tree bottom up. Evaluation cannot fail, division by zero results in
    /// `inf` or `NaN`.
    pub fn eval(&self) -> T {
        match self {
            Node::Constant(x) => *x,
            Node::BinaryOp { kind, left, right } => kind.apply(left.eval(), right.eval()),
        }
    }

    /// Number of nodes on the longest path from the root to a leaf, a leaf has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Node::Constant(_) => 1,
            Node::BinaryOp { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    pub fn n_nodes(&self) -> usize {
        match self {
            Node::Constant(_) => 1,
            Node::BinaryOp { left, right, .. } => 1 + left.n_nodes() + right.n_nodes(),
        }
    }
}

/// Evaluates an expression tree, see [`Node::eval`](Node::eval).
pub fn eval<T: Float>(node: &Node<T>) -> T {
    node.eval()
}

/// Canonical representation where each binary operation is enclosed by brackets, e.g.,
/// `((1 + 2) * 3)`. Parsing the canonical representation of a parsed tree results in the same
/// tree. Infinite constants stem from overflowing literals and are written as a literal that
/// overflows again.
impl<T: Float + Display> Display for Node<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Node::Constant(x) if x.is_infinite() => {
                let sign = if x.is_sign_negative() { "-" } else { "" };
                write!(f, "{}{}", sign, OVERFLOWING_LITERAL)
            }
            Node::Constant(x) => write!(f, "{}", x),
            Node::BinaryOp { kind, left, right } => write!(f, "({} {} {})", left, kind, right),
        }
    }
}
