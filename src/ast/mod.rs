/// AST (Abstract Syntax Tree) module
/// Contains the node definitions shared by the parser and the evaluator
///
/// Submodules:
/// - ast: The `AstNode` tree and its trace rendering
pub mod ast;
