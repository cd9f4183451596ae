use std::fmt::Display;

use crate::Span;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    StartOfInput,
    EndOfInput,

    IntegerLiteral,
    FloatLiteral,

    Plus,
    Minus,
    Star,
    Slash,

    LeftParen,
    RightParen,
}

impl TokenKind {
    pub fn is_literal(&self) -> bool {
        matches!(self, TokenKind::IntegerLiteral | TokenKind::FloatLiteral)
    }

    pub fn is_multiplicative(&self) -> bool {
        matches!(self, TokenKind::Star | TokenKind::Slash)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Token {
    /// One line summary used in token traces.
    pub fn debug(&self) -> String {
        if self.kind.is_literal() {
            format!("{} ({})", self.kind, self.value)
        } else {
            format!("{} ()", self.kind)
        }
    }
}
