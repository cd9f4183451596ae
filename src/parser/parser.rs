//! Parser state and entry points.
//!
//! The parser never consumes tokens. Every grammar level receives a window
//! `(start, length)` into the token slice and hands narrower windows to the
//! levels below it, so each recursive call strictly shrinks its window.
//!
//! Recursion is also bounded by nesting: every bracket, negation and binary
//! operator below the root counts one level, and a window deeper than
//! `MAX_NESTING` becomes a `NestingTooDeep` error node.

use std::cell::Cell;

use tracing::debug;

use crate::{
    ast::ast::AstNode,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::{
    expr::parse_expression,
    lookups::{binding_power, BindingPower},
};

/// Where the rightmost operator of a tier sits in a window.
#[derive(Debug)]
pub enum Split {
    /// No operator of the tier at bracket depth zero.
    None,
    /// Token index of the operator to split on.
    At(usize),
    /// The scan itself hit a syntax error.
    Failed(AstNode),
}

/// Deepest nesting the parser descends into before giving up on a window.
pub const MAX_NESTING: usize = 256;

/// The token stream being parsed.
pub struct Parser<'a> {
    tokens: &'a [Token],
    depth: Cell<usize>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            tokens,
            depth: Cell::new(0),
        }
    }

    /// Runs `parse` one nesting level deeper.
    ///
    /// Past `MAX_NESTING` the window is not parsed and an error leaf pointing
    /// at the token at `index` is returned instead.
    pub fn nested(&self, index: usize, parse: impl FnOnce() -> AstNode) -> AstNode {
        let depth = self.depth.get();
        if depth >= MAX_NESTING {
            return self.error(ErrorImpl::NestingTooDeep { limit: MAX_NESTING }, index);
        }

        self.depth.set(depth + 1);
        let ast = parse();
        self.depth.set(depth);

        ast
    }

    /// Returns the token at `index`.
    ///
    /// Windows are always inside the slice, so this only fails on a parser bug.
    pub fn token(&self, index: usize) -> &Token {
        &self.tokens[index]
    }

    pub fn kind(&self, index: usize) -> TokenKind {
        self.tokens[index].kind
    }

    /// Source position of the token at `index`, falling back to the last
    /// token for windows that run past the end.
    pub fn position_at(&self, index: usize) -> Position {
        self.tokens
            .get(index)
            .or(self.tokens.last())
            .map(|token| token.span.start.clone())
            .unwrap_or_else(Position::null)
    }

    /// Builds an error leaf pointing at the token at `index`.
    pub fn error(&self, error_impl: ErrorImpl, index: usize) -> AstNode {
        AstNode::Error(Error::new(error_impl, self.position_at(index)))
    }

    /// Error for a grammar level handed an empty window at `start`.
    ///
    /// The operand is missing from whatever precedes the window, so the
    /// error points there.
    pub fn missing_operand(&self, start: usize) -> AstNode {
        let index = start.saturating_sub(1);
        let operator = self
            .tokens
            .get(index)
            .map(|token| token.value.clone())
            .unwrap_or_default();

        self.error(ErrorImpl::MissingOperand { operator }, index)
    }

    /// Scans a window for the rightmost operator of tier `bp` at bracket depth zero.
    ///
    /// A `-` only counts as subtraction when the token before it is a literal
    /// or a `)`. The scan also reports a `)` without a matching `(` and an
    /// operator directly following another of the same tier.
    pub fn find_split(&self, start: usize, length: usize, bp: BindingPower) -> Split {
        let mut depth = 0usize;
        let mut previous: Option<TokenKind> = None;
        let mut split = None;

        for index in start..start + length {
            let kind = self.kind(index);

            match kind {
                TokenKind::LeftParen => depth += 1,
                TokenKind::RightParen => {
                    if depth == 0 {
                        return Split::Failed(self.error(ErrorImpl::IncompleteBrackets, index));
                    }
                    depth -= 1;
                }
                _ if depth == 0 && self.is_separator(kind, previous, bp) => {
                    if previous.and_then(binding_power) == Some(bp) {
                        return Split::Failed(self.error(
                            ErrorImpl::ConsecutiveOperators {
                                operator: self.token(index).value.clone(),
                            },
                            index,
                        ));
                    }
                    split = Some(index);
                }
                _ => {}
            }

            previous = Some(kind);
        }

        match split {
            Some(index) => Split::At(index),
            None => Split::None,
        }
    }

    fn is_separator(&self, kind: TokenKind, previous: Option<TokenKind>, bp: BindingPower) -> bool {
        if binding_power(kind) != Some(bp) {
            return false;
        }

        match kind {
            TokenKind::Minus => {
                previous.is_some_and(|previous| previous.is_literal() || previous == TokenKind::RightParen)
            }
            _ => true,
        }
    }

    /// Index of the `)` matching the `(` at `open`, if it lies inside the window.
    pub fn find_closing(&self, open: usize, end: usize) -> Option<usize> {
        let mut depth = 0usize;

        for index in open..end {
            match self.kind(index) {
                TokenKind::LeftParen => depth += 1,
                TokenKind::RightParen => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(index);
                    }
                }
                _ => {}
            }
        }

        None
    }
}

/// Parses the first `length` tokens, which include both sentinels.
///
/// The sentinels are stripped and the interior is parsed as one expression.
/// An empty interior yields an `EmptyInput` error node.
pub fn parse_program(tokens: &[Token], length: usize) -> AstNode {
    let parser = Parser::new(tokens);
    let length = length.min(tokens.len());

    if length <= 2 {
        return parser.error(ErrorImpl::EmptyInput, length.saturating_sub(1));
    }

    let ast = parse_expression(&parser, 1, length - 2);
    debug!(tokens = length, errors = ast.errors().len(), "parsed program");

    ast
}

/// Parses a whole token stream as produced by `tokenize`.
pub fn parse(tokens: &[Token]) -> AstNode {
    parse_program(tokens, tokens.len())
}
