//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It uses a Pratt parser for expressions
//! with binding powers for precedence and handles:
//!
//! - Statement parsing (declarations, control flow, classes)
//! - Expression parsing (assignment, binary and unary ops, calls, members)
//! - The `{ ... }` and `( ... )` cover grammars
//!
//! The first error aborts the parse; there is no recovery.
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.

pub mod cover;
pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
