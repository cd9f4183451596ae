use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind};

pub type RegexHandler = fn(&mut Lexer, &Regex) -> Result<(), Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Anchored, so a pattern only ever matches at the cursor
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[0-9.]+").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^[ \t\r\n]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LeftParen, "(") },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::RightParen, ")") },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Minus, "-") },
        RegexPattern { regex: Regex::new("^\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        let start = Position(0, Rc::clone(&file_name));

        Lexer {
            pos: 0,
            tokens: vec![MK_TOKEN!(
                TokenKind::StartOfInput,
                String::from("SOF"),
                Span { start: start.clone(), end: start }
            )],
            source,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        Position(self.pos as u32, Rc::clone(&self.file))
    }
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let Some(matched) = regex.find(lexer.remainder()) else {
        return Ok(());
    };
    let literal = matched.as_str().to_string();
    let start = lexer.position();

    let kind = match literal.matches('.').count() {
        0 => TokenKind::IntegerLiteral,
        1 if literal.len() == 1 => {
            return Err(Error::new(ErrorImpl::MalformedNumber { literal }, start));
        }
        1 => TokenKind::FloatLiteral,
        _ => {
            // Point at the second decimal point
            let offset = literal.match_indices('.').nth(1).map_or(0, |(i, _)| i);
            return Err(Error::new(
                ErrorImpl::TooManyDecimalPoints { literal },
                Position(start.0 + offset as u32, start.1),
            ));
        }
    };

    lexer.advance_n(literal.len());
    lexer.push(MK_TOKEN!(kind, literal, Span { start, end: lexer.position() }));
    Ok(())
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = regex.find(lexer.remainder()).map_or(0, |m| m.end());
    lexer.advance_n(matched);
    Ok(())
}

/// Splits `source` into tokens, framed by `StartOfInput` and `EndOfInput`.
///
/// Fails on the first character that cannot start a token, and on numbers
/// with more than one decimal point.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        let pattern = PATTERNS.iter().find(|pattern| pattern.regex.is_match(lex.remainder()));

        match pattern {
            Some(pattern) => (pattern.handler)(&mut lex, &pattern.regex)?,
            None => {
                let character = lex.at().unwrap_or('\0');
                return Err(Error::new(ErrorImpl::UnrecognisedCharacter { character }, lex.position()));
            }
        }
    }

    lex.push(MK_TOKEN!(TokenKind::EndOfInput, String::from("EOF"), Span { start: lex.position(), end: lex.position() }));

    for token in &lex.tokens {
        trace!(token = %token.debug(), "lexed");
    }

    Ok(lex.tokens)
}
