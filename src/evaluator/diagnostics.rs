use tracing::{debug, error};

use crate::{ast::ast::AstNode, errors::errors::Error, lexer::tokens::Token};

/// Side channel for syntax errors met during evaluation and for debug traces.
///
/// Nothing the sink does feeds back into evaluation.
pub trait Diagnostics {
    /// Called once for every error node the evaluator walks into.
    fn report(&mut self, error: &Error);

    fn trace_tokens(&mut self, _tokens: &[Token]) {}

    fn trace_ast(&mut self, _root: &AstNode) {}
}

/// Collects reported errors in the order they were met.
impl Diagnostics for Vec<Error> {
    fn report(&mut self, error: &Error) {
        self.push(error.clone());
    }
}

/// Forwards everything to `tracing`.
#[derive(Debug, Default)]
pub struct TracingDiagnostics {
    reported: usize,
}

impl TracingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reported(&self) -> usize {
        self.reported
    }
}

impl Diagnostics for TracingDiagnostics {
    fn report(&mut self, err: &Error) {
        self.reported += 1;
        let position = err.get_position();
        error!(
            kind = err.get_error_name(),
            offset = position.0,
            file = %position.1,
            "{}",
            err
        );
    }

    fn trace_tokens(&mut self, tokens: &[Token]) {
        for token in tokens {
            debug!(offset = token.span.start.0, "{}", token.debug());
        }
    }

    fn trace_ast(&mut self, root: &AstNode) {
        debug!("syntax tree\n{}", root.debug_tree());
    }
}
