use std::fmt::Display;

use tracing::trace;

use crate::ast::ast::AstNode;

use super::diagnostics::Diagnostics;

/// The value of an expression and whether it is a whole number.
///
/// `is_integer` tracks how the value was produced, not what it is: `4/2`
/// yields `2.0` with `is_integer == false`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvalResult {
    pub value: f64,
    pub is_integer: bool,
}

impl EvalResult {
    pub fn integer(value: f64) -> Self {
        EvalResult { value, is_integer: true }
    }

    pub fn float(value: f64) -> Self {
        EvalResult { value, is_integer: false }
    }

    pub fn nan() -> Self {
        EvalResult::float(f64::NAN)
    }

    pub fn is_nan(&self) -> bool {
        self.value.is_nan()
    }

    /// Same value and classification, treating two `NaN`s as equal.
    pub fn same_as(&self, other: &EvalResult) -> bool {
        self.is_integer == other.is_integer
            && (self.value == other.value || (self.is_nan() && other.is_nan()))
    }
}

impl Display for EvalResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_integer && self.value.is_finite() {
            // `+ 0.0` folds `-0` into `0`
            write!(f, "{:.0}", self.value + 0.0)
        } else {
            write!(f, "{:?}", self.value)
        }
    }
}

/// Evaluates `node`, left operand before right operand.
///
/// Every error node is reported to `diagnostics` and evaluates to `NaN`;
/// the rest of the tree is still evaluated.
pub fn evaluate(node: &AstNode, diagnostics: &mut impl Diagnostics) -> EvalResult {
    let result = match node {
        AstNode::IntLiteral(value) => EvalResult::integer(parse_literal(value)),
        AstNode::FloatLiteral(value) => EvalResult::float(parse_literal(value)),
        AstNode::Negate(operand) => {
            let operand = evaluate(operand, diagnostics);
            EvalResult {
                value: -operand.value,
                is_integer: operand.is_integer,
            }
        }
        AstNode::Multiply(lhs, rhs) => binary(lhs, rhs, diagnostics, |a, b| a * b),
        AstNode::Add(lhs, rhs) => binary(lhs, rhs, diagnostics, |a, b| a + b),
        AstNode::Subtract(lhs, rhs) => binary(lhs, rhs, diagnostics, |a, b| a - b),
        AstNode::Divide(lhs, rhs) => {
            let quotient = binary(lhs, rhs, diagnostics, |a, b| a / b);
            EvalResult::float(quotient.value)
        }
        AstNode::Error(error) => {
            diagnostics.report(error);
            EvalResult::nan()
        }
    };

    trace!(node = %node.label(), value = result.value, is_integer = result.is_integer, "evaluated");
    result
}

fn binary(
    lhs: &AstNode,
    rhs: &AstNode,
    diagnostics: &mut impl Diagnostics,
    op: fn(f64, f64) -> f64,
) -> EvalResult {
    let lhs = evaluate(lhs, diagnostics);
    let rhs = evaluate(rhs, diagnostics);

    EvalResult {
        value: op(lhs.value, rhs.value),
        is_integer: lhs.is_integer && rhs.is_integer,
    }
}

fn parse_literal(text: &str) -> f64 {
    // The lexer only produces digits and at most one `.`
    text.parse().unwrap_or(f64::NAN)
}
