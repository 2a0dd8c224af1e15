/// AST (Abstract Syntax Tree) module
/// Contains the expression tree built by the parsers and walked by the evaluator
///
/// Submodules:
/// - ast: The `Node` sum type and its constructors
pub mod ast;
