//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts Lang source
//! text into the classified token stream consumed by the parser. It handles:
//!
//! - Tokenization of source code using anchored regex patterns
//! - Recognition of keywords, identifiers, literals, and operators
//! - Token span tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;
