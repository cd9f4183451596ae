//! Unit tests for the parser module.
//!
//! This module contains tests for parsing:
//! - Precedence and left associativity
//! - Unary negation versus binary subtraction
//! - Bracketed sub-expressions
//! - Syntax errors embedded as error nodes

use crate::{
    ast::ast::AstNode,
    errors::errors::ErrorImpl,
    lexer::lexer::tokenize,
};

use super::{
    expr::parse_primary,
    parser::{parse, parse_program, Parser, MAX_NESTING},
};

fn parse_str(source: &str) -> AstNode {
    let tokens = tokenize(source.to_string(), Some("test.txt".to_string())).unwrap();
    parse(&tokens)
}

fn int(value: &str) -> AstNode {
    AstNode::IntLiteral(value.to_string())
}

fn float(value: &str) -> AstNode {
    AstNode::FloatLiteral(value.to_string())
}

/// The error kind and source offset of a root error node.
fn root_error(source: &str) -> (ErrorImpl, u32) {
    match parse_str(source) {
        AstNode::Error(error) => (error.get_kind().clone(), error.get_position().0),
        other => panic!("expected an error node for {:?}, got {}", source, other),
    }
}

#[test]
fn test_parse_literals() {
    assert_eq!(parse_str("42"), int("42"));
    assert_eq!(parse_str("4.2"), float("4.2"));
}

#[test]
fn test_parse_precedence() {
    assert_eq!(
        parse_str("2+3*4"),
        AstNode::add(int("2"), AstNode::multiply(int("3"), int("4")))
    );
    assert_eq!(
        parse_str("(2+3)*4"),
        AstNode::multiply(AstNode::add(int("2"), int("3")), int("4"))
    );
}

#[test]
fn test_parse_left_associative() {
    assert_eq!(
        parse_str("8-2-1"),
        AstNode::subtract(AstNode::subtract(int("8"), int("2")), int("1"))
    );
    assert_eq!(
        parse_str("8/2*3"),
        AstNode::multiply(AstNode::divide(int("8"), int("2")), int("3"))
    );
    assert_eq!(
        parse_str("1+2-3+4"),
        AstNode::add(
            AstNode::subtract(AstNode::add(int("1"), int("2")), int("3")),
            int("4")
        )
    );
}

#[test]
fn test_parse_subtraction_and_negation() {
    assert_eq!(parse_str("3-2"), AstNode::subtract(int("3"), int("2")));
    assert_eq!(
        parse_str("3--2"),
        AstNode::subtract(int("3"), AstNode::negate(int("2")))
    );
    assert_eq!(
        parse_str("-3+2"),
        AstNode::add(AstNode::negate(int("3")), int("2"))
    );
    assert_eq!(
        parse_str("--3"),
        AstNode::negate(AstNode::negate(int("3")))
    );
}

#[test]
fn test_minus_after_operator_is_negation() {
    assert_eq!(
        parse_str("2*-3"),
        AstNode::multiply(int("2"), AstNode::negate(int("3")))
    );
    assert_eq!(
        parse_str("2+-3"),
        AstNode::add(int("2"), AstNode::negate(int("3")))
    );
    assert_eq!(
        parse_str("-2*3"),
        AstNode::multiply(AstNode::negate(int("2")), int("3"))
    );
}

#[test]
fn test_minus_after_bracket_is_subtraction() {
    assert_eq!(
        parse_str("(1)-2"),
        AstNode::subtract(int("1"), int("2"))
    );
    assert_eq!(
        parse_str("(1)--2"),
        AstNode::subtract(int("1"), AstNode::negate(int("2")))
    );
}

#[test]
fn test_nested_brackets_reset_negation() {
    // Inside each bracket the first `-` is a negation again
    assert_eq!(
        parse_str("1-(-2-(-3))"),
        AstNode::subtract(
            int("1"),
            AstNode::subtract(AstNode::negate(int("2")), AstNode::negate(int("3")))
        )
    );
    assert_eq!(
        parse_str("-(-(1-2))-3"),
        AstNode::subtract(
            AstNode::negate(AstNode::negate(AstNode::subtract(int("1"), int("2")))),
            int("3")
        )
    );
    assert_eq!(
        parse_str("((2))*-(3-(-4))"),
        AstNode::multiply(
            int("2"),
            AstNode::negate(AstNode::subtract(int("3"), AstNode::negate(int("4"))))
        )
    );
}

#[test]
fn test_operators_inside_brackets_are_hidden() {
    assert_eq!(
        parse_str("2*(3+4)-5"),
        AstNode::subtract(
            AstNode::multiply(int("2"), AstNode::add(int("3"), int("4"))),
            int("5")
        )
    );
}

#[test]
fn test_empty_input() {
    assert_eq!(root_error("").0, ErrorImpl::EmptyInput);
    assert_eq!(root_error("   ").0, ErrorImpl::EmptyInput);
}

#[test]
fn test_operator_with_one_operand() {
    let (kind, position) = root_error("2+");
    assert_eq!(kind, ErrorImpl::MissingOperand { operator: "+".to_string() });
    assert_eq!(kind.to_string(), "operator supplied only one operand");
    assert_eq!(position, 1);

    assert_eq!(root_error("+2").0, ErrorImpl::MissingOperand { operator: "+".to_string() });
    assert_eq!(root_error("2*").0, ErrorImpl::MissingOperand { operator: "*".to_string() });
    assert_eq!(root_error("-").0, ErrorImpl::MissingOperand { operator: "-".to_string() });
}

#[test]
fn test_leading_multiplicative_operator() {
    let (kind, position) = root_error("*3");
    assert_eq!(kind, ErrorImpl::MissingOperand { operator: "*".to_string() });
    assert_eq!(position, 0);

    assert_eq!(root_error("/3").0, ErrorImpl::MissingOperand { operator: "/".to_string() });
}

#[test]
fn test_consecutive_operators() {
    let (kind, position) = root_error("2*/3");
    assert_eq!(kind, ErrorImpl::ConsecutiveOperators { operator: "/".to_string() });
    assert_eq!(kind.to_string(), "consecutive operators");
    assert_eq!(position, 2);

    assert_eq!(root_error("2++3").0, ErrorImpl::ConsecutiveOperators { operator: "+".to_string() });
    assert_eq!(root_error("2-+3").0, ErrorImpl::ConsecutiveOperators { operator: "+".to_string() });
}

#[test]
fn test_incomplete_brackets() {
    let (kind, position) = root_error("(2+3");
    assert_eq!(kind, ErrorImpl::IncompleteBrackets);
    assert_eq!(position, 0);

    assert_eq!(root_error(")2").0, ErrorImpl::IncompleteBrackets);
    assert_eq!(root_error("2)").0, ErrorImpl::IncompleteBrackets);
    assert_eq!(root_error("((1)").0, ErrorImpl::IncompleteBrackets);
}

#[test]
fn test_empty_brackets() {
    assert_eq!(root_error("()").0, ErrorImpl::EmptyBrackets);
}

#[test]
fn test_missing_operator() {
    let (kind, position) = root_error("2 3");
    assert_eq!(kind, ErrorImpl::ExpectedOperator { token: "3".to_string() });
    assert_eq!(position, 2);

    assert_eq!(root_error("(1)(2)").0, ErrorImpl::ExpectedOperator { token: "(".to_string() });
}

#[test]
fn test_operator_after_different_tier_operator() {
    // The `+` splits first, leaving `2*` without a right operand
    let ast = parse_str("2*+3");
    assert_eq!(
        ast.errors()[0].get_kind(),
        &ErrorImpl::MissingOperand { operator: "*".to_string() }
    );

    // The `*` splits first, leaving a lone `-`
    let ast = parse_str("-*3");
    assert_eq!(ast.errors().len(), 1);
    assert_eq!(
        ast.errors()[0].get_kind(),
        &ErrorImpl::MissingOperand { operator: "-".to_string() }
    );
}

#[test]
fn test_primary_rejects_operator() {
    let tokens = tokenize("1+2".to_string(), None).unwrap();
    let parser = Parser::new(&tokens);

    match parse_primary(&parser, 2, 1) {
        AstNode::Error(error) => {
            assert_eq!(error.get_kind(), &ErrorImpl::UnexpectedToken { token: "+".to_string() });
            assert_eq!(error.to_string(), "unexpected token, expected integer or float");
            assert_eq!(error.get_position().0, 1);
        }
        other => panic!("expected an error node, got {}", other),
    }
}

#[test]
fn test_error_is_embedded_in_valid_tree() {
    let ast = parse_str("(2*/3)+1");

    match &ast {
        AstNode::Add(lhs, rhs) => {
            assert!(lhs.is_error());
            assert_eq!(**rhs, int("1"));
        }
        other => panic!("expected an addition, got {}", other),
    }
    assert_eq!(ast.errors().len(), 1);
}

#[test]
fn test_every_error_is_kept() {
    let ast = parse_str("(1+)*(2*/3)");

    let messages: Vec<String> = ast.errors().iter().map(|error| error.to_string()).collect();
    assert_eq!(messages, vec!["operator supplied only one operand", "consecutive operators"]);
}

#[test]
fn test_parse_program_window() {
    let tokens = tokenize("1+2".to_string(), None).unwrap();

    assert_eq!(parse_program(&tokens, tokens.len()), AstNode::add(int("1"), int("2")));
    // Only the sentinels
    assert!(parse_program(&tokens, 2).is_error());
    // A window longer than the stream is clamped
    assert_eq!(parse_program(&tokens, 99), AstNode::add(int("1"), int("2")));
}

#[test]
fn test_tree_has_no_shared_nodes() {
    fn collect<'a>(node: &'a AstNode, seen: &mut Vec<*const AstNode>) {
        seen.push(node as *const AstNode);
        for child in node.children() {
            collect(child, seen);
        }
    }

    let ast = parse_str("-(1+2)*3-4/(5--6)");
    let mut seen = vec![];
    collect(&ast, &mut seen);

    let count = seen.len();
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), count);
}

fn depth(node: &AstNode) -> usize {
    1 + node.children().into_iter().map(depth).max().unwrap_or(0)
}

#[test]
fn test_deep_brackets_hit_nesting_limit() {
    let source = format!("{}1{}", "(".repeat(8000), ")".repeat(8000));
    let ast = parse_str(&source);

    let errors = ast.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_kind(), &ErrorImpl::NestingTooDeep { limit: MAX_NESTING });
    assert_eq!(errors[0].get_position().0, MAX_NESTING as u32);
}

#[test]
fn test_long_negation_chain_hits_nesting_limit() {
    let source = format!("{}1", "-".repeat(20000));
    let ast = parse_str(&source);

    let errors = ast.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_kind(), &ErrorImpl::NestingTooDeep { limit: MAX_NESTING });
    assert!(depth(&ast) <= MAX_NESTING + 1);
}

#[test]
fn test_nesting_below_limit_parses() {
    let source = format!("{}1{}", "(".repeat(200), ")".repeat(200));
    assert_eq!(parse_str(&source), int("1"));

    let source = format!("{}1", "-".repeat(MAX_NESTING));
    let ast = parse_str(&source);
    assert!(!ast.has_errors());
    assert_eq!(depth(&ast), MAX_NESTING + 1);

    let source = vec!["1"; 100].join("+");
    assert!(!parse_str(&source).has_errors());
}
