//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an `AstNode` tree. It is a recursive-descent parser over token
//! windows with three grammar levels:
//!
//! - Expressions, split on the rightmost `+` or binary `-`
//! - Factors, split on the rightmost `*` or `/`
//! - Unary negation and primaries (literals and bracketed expressions)
//!
//! Syntax errors never abort parsing. They become `AstNode::Error` leaves
//! at the point of failure.

pub mod expr;
pub mod lookups;
pub mod parser;

#[cfg(test)]
mod tests;
