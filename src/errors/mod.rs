//! Error types and error handling for the calculator.
//!
//! This module defines the single error type used by every stage of the
//! pipeline. It includes:
//!
//! - An error structure carrying the source position of the failure
//! - Lexical variants, returned from the lexer as hard failures
//! - Syntax variants, embedded in the AST as error nodes
//! - Names and tips used when rendering an error for the user

pub mod errors;
