/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Core AST definitions, traits and variant tags
/// - expressions: Definitions for the expression nodes
/// - statements: Definitions for the statement nodes
/// - builder: Node construction and cover grammar validation
pub mod ast;
pub mod builder;
pub mod expressions;
pub mod statements;

#[cfg(test)]
mod tests;
