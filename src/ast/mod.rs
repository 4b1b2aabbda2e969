/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the untyped AST the parser builds
///
/// Submodules:
/// - ast: Expression nodes, operators and literal values
/// - types: Type annotation syntax (`Int`, `(Int, Bool) => Unit`)
pub mod ast;
pub mod types;
