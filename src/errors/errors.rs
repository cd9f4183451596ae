use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// Lexical errors stop the pipeline, everything else is recoverable.
    pub fn is_lexical(&self) -> bool {
        matches!(
            self.internal_error,
            ErrorImpl::UnrecognisedCharacter { .. }
                | ErrorImpl::TooManyDecimalPoints { .. }
                | ErrorImpl::MalformedNumber { .. }
        )
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::TooManyDecimalPoints { .. } => "TooManyDecimalPoints",
            ErrorImpl::MalformedNumber { .. } => "MalformedNumber",
            ErrorImpl::EmptyInput => "EmptyInput",
            ErrorImpl::MissingOperand { .. } => "MissingOperand",
            ErrorImpl::ConsecutiveOperators { .. } => "ConsecutiveOperators",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpectedOperator { .. } => "ExpectedOperator",
            ErrorImpl::IncompleteBrackets => "IncompleteBrackets",
            ErrorImpl::EmptyBrackets => "EmptyBrackets",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { character } => ErrorTip::Suggestion(format!(
                "Remove `{}`, only numbers, + - * / and brackets are allowed",
                character
            )),
            ErrorImpl::TooManyDecimalPoints { literal } => ErrorTip::Suggestion(format!(
                "Number `{}` has more than one decimal point",
                literal
            )),
            ErrorImpl::MalformedNumber { literal } => {
                ErrorTip::Suggestion(format!("`{}` is not a number, add some digits", literal))
            }
            ErrorImpl::EmptyInput => ErrorTip::None,
            ErrorImpl::MissingOperand { operator } => ErrorTip::Suggestion(format!(
                "`{}` needs a value on both sides",
                operator
            )),
            ErrorImpl::ConsecutiveOperators { operator } => ErrorTip::Suggestion(format!(
                "Unexpected `{}` directly after another operator",
                operator
            )),
            ErrorImpl::UnexpectedToken { token } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`", token))
            }
            ErrorImpl::ExpectedOperator { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss an operator?",
                token
            )),
            ErrorImpl::IncompleteBrackets => {
                ErrorTip::Suggestion(String::from("Every `(` needs a matching `)`"))
            }
            ErrorImpl::EmptyBrackets => {
                ErrorTip::Suggestion(String::from("Brackets must contain an expression"))
            }
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Expressions can nest at most {} levels of brackets, negations and operators",
                limit
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised character: {character:?}")]
    UnrecognisedCharacter { character: char },
    #[error("too many decimal points")]
    TooManyDecimalPoints { literal: String },
    #[error("malformed number: {literal:?}")]
    MalformedNumber { literal: String },
    #[error("empty input")]
    EmptyInput,
    #[error("operator supplied only one operand")]
    MissingOperand { operator: String },
    #[error("consecutive operators")]
    ConsecutiveOperators { operator: String },
    #[error("unexpected token, expected integer or float")]
    UnexpectedToken { token: String },
    #[error("unexpected token, expected operator")]
    ExpectedOperator { token: String },
    #[error("incomplete brackets")]
    IncompleteBrackets,
    #[error("empty brackets")]
    EmptyBrackets,
    #[error("expression nested too deeply")]
    NestingTooDeep { limit: usize },
}
