use std::fmt::Display;

use crate::errors::errors::Error;

/// A node of the expression tree.
///
/// Every composite node owns its operands, so the tree never shares a
/// subtree between two parents. `Error` is always a leaf.
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    IntLiteral(String),
    FloatLiteral(String),
    Negate(Box<AstNode>),
    Multiply(Box<AstNode>, Box<AstNode>),
    Divide(Box<AstNode>, Box<AstNode>),
    Add(Box<AstNode>, Box<AstNode>),
    Subtract(Box<AstNode>, Box<AstNode>),
    Error(Error),
}

impl AstNode {
    pub fn negate(operand: AstNode) -> Self {
        AstNode::Negate(Box::new(operand))
    }

    pub fn multiply(lhs: AstNode, rhs: AstNode) -> Self {
        AstNode::Multiply(Box::new(lhs), Box::new(rhs))
    }

    pub fn divide(lhs: AstNode, rhs: AstNode) -> Self {
        AstNode::Divide(Box::new(lhs), Box::new(rhs))
    }

    pub fn add(lhs: AstNode, rhs: AstNode) -> Self {
        AstNode::Add(Box::new(lhs), Box::new(rhs))
    }

    pub fn subtract(lhs: AstNode, rhs: AstNode) -> Self {
        AstNode::Subtract(Box::new(lhs), Box::new(rhs))
    }

    /// Operands in document order.
    pub fn children(&self) -> Vec<&AstNode> {
        match self {
            AstNode::IntLiteral(_) | AstNode::FloatLiteral(_) | AstNode::Error(_) => vec![],
            AstNode::Negate(operand) => vec![operand.as_ref()],
            AstNode::Multiply(lhs, rhs)
            | AstNode::Divide(lhs, rhs)
            | AstNode::Add(lhs, rhs)
            | AstNode::Subtract(lhs, rhs) => vec![lhs.as_ref(), rhs.as_ref()],
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, AstNode::Error(_))
    }

    /// Whether an error node is reachable from this node.
    pub fn has_errors(&self) -> bool {
        self.is_error() || self.children().iter().any(|child| child.has_errors())
    }

    /// Every error node in the tree, left to right.
    pub fn errors(&self) -> Vec<&Error> {
        match self {
            AstNode::Error(error) => vec![error],
            _ => self.children().into_iter().flat_map(|child| child.errors()).collect(),
        }
    }

    /// Short label used in tree traces.
    pub fn label(&self) -> String {
        match self {
            AstNode::IntLiteral(value) => format!("int {}", value),
            AstNode::FloatLiteral(value) => format!("float {}", value),
            AstNode::Negate(_) => String::from("neg"),
            AstNode::Multiply(..) => String::from("mult"),
            AstNode::Divide(..) => String::from("div"),
            AstNode::Add(..) => String::from("add"),
            AstNode::Subtract(..) => String::from("sub"),
            AstNode::Error(error) => format!("error: {}", error),
        }
    }

    /// Renders the tree one node per line, children indented under their parent.
    ///
    /// ```text
    /// add
    /// - int 2
    /// - mult
    ///   - int 3
    ///   - int 4
    /// ```
    pub fn debug_tree(&self) -> String {
        let mut out = String::new();
        self.write_tree(&mut out, 0);
        out
    }

    fn write_tree(&self, out: &mut String, depth: usize) {
        out.push_str(&self.label());
        out.push('\n');

        for child in self.children() {
            out.push_str(&"  ".repeat(depth));
            out.push_str("- ");
            child.write_tree(out, depth + 1);
        }
    }
}

impl Display for AstNode {
    /// Fully parenthesised infix form.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AstNode::IntLiteral(value) | AstNode::FloatLiteral(value) => write!(f, "{}", value),
            AstNode::Negate(operand) => write!(f, "(-{})", operand),
            AstNode::Multiply(lhs, rhs) => write!(f, "({} * {})", lhs, rhs),
            AstNode::Divide(lhs, rhs) => write!(f, "({} / {})", lhs, rhs),
            AstNode::Add(lhs, rhs) => write!(f, "({} + {})", lhs, rhs),
            AstNode::Subtract(lhs, rhs) => write!(f, "({} - {})", lhs, rhs),
            AstNode::Error(error) => write!(f, "<{}>", error),
        }
    }
}
