/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Program, global declarations and the write-once type annotation
/// - expressions: Expressions, variables and operators
/// - statements: Statements of procedure bodies
/// - types: Type expressions and the resolved types they denote
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;

#[cfg(test)]
mod tests;
