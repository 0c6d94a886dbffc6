//! Utility macros for the lexer and the AST.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for simple tokens
//! - `MK_EXPR_IMPL!` / `MK_STMT_IMPL!` - Implement the node traits for an AST struct

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a default lexer handler for fixed punctuation and operators.
///
/// Generates a handler function that pushes a token with the given kind
/// and advances the lexer past the literal text.
///
/// # Arguments
///
/// * `$kind` - The TokenKind to create
/// * `$value` - The literal string value (used for length calculation)
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^\\+")?,
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _regex: &Regex| -> Result<(), Error> {
            let span = lexer.span_of($value.len());
            lexer.push(MK_TOKEN!($kind, String::from($value), span));
            lexer.advance_n($value.len());
            Ok(())
        }
    };
}

/// Implements `Expr` for a cloneable node struct with a `span` field.
///
/// # Arguments
///
/// * `$node` - The node type
/// * `$tag` - The `ExprType` variant reported by `get_expr_type`
#[macro_export]
macro_rules! MK_EXPR_IMPL {
    ($node:ty, $tag:ident) => {
        impl $crate::ast::ast::Expr for $node {
            fn get_expr_type(&self) -> $crate::ast::ast::ExprType {
                $crate::ast::ast::ExprType::$tag
            }
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
            fn into_any(self: Box<Self>) -> Box<dyn std::any::Any> {
                self
            }
            fn clone_wrapper(&self) -> $crate::ast::ast::ExprWrapper {
                $crate::ast::ast::ExprWrapper::new(self.clone())
            }
            fn get_span(&self) -> &$crate::Span {
                &self.span
            }
        }
    };
}

/// Implements `Stmt` for a cloneable node struct with a `span` field.
///
/// # Arguments
///
/// * `$node` - The node type
/// * `$tag` - The `StmtType` variant reported by `get_stmt_type`
#[macro_export]
macro_rules! MK_STMT_IMPL {
    ($node:ty, $tag:ident) => {
        impl $crate::ast::ast::Stmt for $node {
            fn get_stmt_type(&self) -> $crate::ast::ast::StmtType {
                $crate::ast::ast::StmtType::$tag
            }
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
            fn into_any(self: Box<Self>) -> Box<dyn std::any::Any> {
                self
            }
            fn clone_wrapper(&self) -> $crate::ast::ast::StmtWrapper {
                $crate::ast::ast::StmtWrapper::new(self.clone())
            }
            fn get_span(&self) -> &$crate::Span {
                &self.span
            }
        }
    };
}
