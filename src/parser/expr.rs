use crate::{ast::ast::AstNode, errors::errors::ErrorImpl, lexer::tokens::TokenKind};

use super::{
    lookups::{BindingPower, BINARY_LOOKUP},
    parser::{Parser, Split},
};

/// expression := factor (( "+" | "-" ) factor)*
pub fn parse_expression(parser: &Parser, start: usize, length: usize) -> AstNode {
    if length == 0 {
        return parser.missing_operand(start);
    }

    match parser.find_split(start, length, BindingPower::Additive) {
        Split::Failed(error) => error,
        Split::None => parse_factor(parser, start, length),
        Split::At(index) => {
            let rhs_length = start + length - index - 1;
            if index == start || rhs_length == 0 {
                return operand_missing(parser, index);
            }

            parser.nested(index, || {
                let lhs = parse_expression(parser, start, index - start);
                let rhs = parse_factor(parser, index + 1, rhs_length);
                build_binary(parser, index, lhs, rhs)
            })
        }
    }
}

/// factor := unary (( "*" | "/" ) unary)*
pub fn parse_factor(parser: &Parser, start: usize, length: usize) -> AstNode {
    if length == 0 {
        return parser.missing_operand(start);
    }

    // A leading `*` or `/` only has a right operand
    if parser.kind(start).is_multiplicative() {
        return operand_missing(parser, start);
    }

    match parser.find_split(start, length, BindingPower::Multiplicative) {
        Split::Failed(error) => error,
        Split::None => parse_unary(parser, start, length),
        Split::At(index) => {
            let rhs_length = start + length - index - 1;
            if rhs_length == 0 {
                return operand_missing(parser, index);
            }

            parser.nested(index, || {
                let lhs = parse_factor(parser, start, index - start);
                let rhs = parse_unary(parser, index + 1, rhs_length);
                build_binary(parser, index, lhs, rhs)
            })
        }
    }
}

/// unary := "-" unary | primary
pub fn parse_unary(parser: &Parser, start: usize, length: usize) -> AstNode {
    if length == 0 {
        return parser.missing_operand(start);
    }

    if parser.kind(start) == TokenKind::Minus {
        if length == 1 {
            return operand_missing(parser, start);
        }

        return parser.nested(start, || {
            AstNode::negate(parse_unary(parser, start + 1, length - 1))
        });
    }

    parse_primary(parser, start, length)
}

/// primary := IntegerLiteral | FloatLiteral | "(" expression ")"
pub fn parse_primary(parser: &Parser, start: usize, length: usize) -> AstNode {
    if length == 0 {
        return parser.missing_operand(start);
    }

    let token = parser.token(start);
    let end = start + length;

    match token.kind {
        TokenKind::IntegerLiteral if length == 1 => AstNode::IntLiteral(token.value.clone()),
        TokenKind::FloatLiteral if length == 1 => AstNode::FloatLiteral(token.value.clone()),
        TokenKind::IntegerLiteral | TokenKind::FloatLiteral => expected_operator(parser, start + 1),
        TokenKind::LeftParen => {
            let Some(close) = parser.find_closing(start, end) else {
                return parser.error(ErrorImpl::IncompleteBrackets, start);
            };

            if close == start + 1 {
                return parser.error(ErrorImpl::EmptyBrackets, start);
            }

            if close + 1 != end {
                return expected_operator(parser, close + 1);
            }

            parser.nested(start, || parse_expression(parser, start + 1, close - start - 1))
        }
        TokenKind::RightParen => parser.error(ErrorImpl::IncompleteBrackets, start),
        // Depth-zero operators are split on or rejected by the levels above,
        // so a window only starts here when called directly
        _ => parser.error(
            ErrorImpl::UnexpectedToken {
                token: token.value.clone(),
            },
            start,
        ),
    }
}

fn operand_missing(parser: &Parser, index: usize) -> AstNode {
    parser.error(
        ErrorImpl::MissingOperand {
            operator: parser.token(index).value.clone(),
        },
        index,
    )
}

/// Error for a token sitting where an operator should follow a complete operand.
fn expected_operator(parser: &Parser, index: usize) -> AstNode {
    let token = parser.token(index);

    if token.kind == TokenKind::RightParen {
        return parser.error(ErrorImpl::IncompleteBrackets, index);
    }

    parser.error(
        ErrorImpl::ExpectedOperator {
            token: token.value.clone(),
        },
        index,
    )
}

fn build_binary(parser: &Parser, index: usize, lhs: AstNode, rhs: AstNode) -> AstNode {
    let token = parser.token(index);

    match BINARY_LOOKUP.get(&token.kind) {
        Some(build) => build(lhs, rhs),
        // Splits only ever land on tokens with a binding power
        None => parser.error(
            ErrorImpl::UnexpectedToken {
                token: token.value.clone(),
            },
            index,
        ),
    }
}
