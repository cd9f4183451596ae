//! Tree evaluation.
//!
//! Walks an `AstNode` post-order, computing an `f64` value and whether the
//! result is still a whole number. Error nodes never stop the walk: they
//! are reported to a `Diagnostics` sink and contribute `NaN`.

pub mod diagnostics;
pub mod evaluator;
