//! Error types and error handling for the parser.
//!
//! This module defines the diagnostics produced while tokenizing and
//! parsing. It includes:
//!
//! - The error taxonomy (`ErrorImpl`)
//! - Error structures carrying the offending source span
//! - Human readable suggestions for each error kind
//!
//! Every error is fatal: the first one aborts the parse.

pub mod errors;

#[cfg(test)]
mod tests;
