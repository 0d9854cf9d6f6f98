/// AST (Abstract Syntax Tree) module
///
/// Submodules:
/// - ast: the expression tree and its node kinds
pub mod ast;
