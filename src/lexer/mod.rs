//! Lexical analysis module for the calculator.
//!
//! This module contains the lexer (tokenizer) that converts an expression
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source text using anchored regex patterns
//! - Integer and float literals, operators and brackets
//! - The start and end of input sentinel tokens
//! - Token position tracking for error reporting

pub mod lexer;
pub mod tokens;
