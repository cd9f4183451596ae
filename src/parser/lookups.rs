use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{ast::ast::AstNode, lexer::tokens::TokenKind};

/// Operator tiers, lowest precedence first.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub enum BindingPower {
    Additive,
    Multiplicative,
}

pub type BinaryBuilder = fn(AstNode, AstNode) -> AstNode;

lazy_static! {
    pub static ref BP_LOOKUP: HashMap<TokenKind, BindingPower> = {
        let mut map = HashMap::new();
        map.insert(TokenKind::Plus, BindingPower::Additive);
        map.insert(TokenKind::Minus, BindingPower::Additive);
        map.insert(TokenKind::Star, BindingPower::Multiplicative);
        map.insert(TokenKind::Slash, BindingPower::Multiplicative);
        map
    };

    pub static ref BINARY_LOOKUP: HashMap<TokenKind, BinaryBuilder> = {
        let mut map: HashMap<TokenKind, BinaryBuilder> = HashMap::new();
        map.insert(TokenKind::Plus, AstNode::add);
        map.insert(TokenKind::Minus, AstNode::subtract);
        map.insert(TokenKind::Star, AstNode::multiply);
        map.insert(TokenKind::Slash, AstNode::divide);
        map
    };
}

pub fn binding_power(kind: TokenKind) -> Option<BindingPower> {
    BP_LOOKUP.get(&kind).copied()
}
