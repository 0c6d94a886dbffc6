//! Node construction and the static checks of the cover grammars.
//!
//! Two productions of Lang are parsed once and reinterpreted afterwards:
//! a `{ ... }` entry list becomes either a block or an object literal, and
//! a parenthesised expression becomes either a plain expression or the
//! parameter list of a lambda. The functions here perform those
//! reinterpretations on already built nodes and reject shapes that are
//! only legal under the other reading. Everything else is total.

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::Token,
    Span,
};

use super::{
    ast::{ExprType, ExprWrapper, StmtWrapper},
    expressions::{
        BinaryExpr, IdentifierExpr, LogicalExpr, ObjectLiteralExpr, Property, SequenceExpr,
    },
    statements::{BlockStmt, ForInit},
};

/// One slot of a `{ ... }` entry list, before the call site decides
/// whether the braces were a block or an object literal.
#[derive(Debug, Clone)]
pub enum BlockEntry {
    Statement(StmtWrapper),
    Property(Property),
}

/// Interprets an entry list as a block. Fails on the first property.
pub fn as_block(entries: Vec<BlockEntry>, span: Span) -> Result<BlockStmt, Error> {
    let mut body = Vec::with_capacity(entries.len());

    for entry in entries {
        match entry {
            BlockEntry::Statement(stmt) => body.push(stmt),
            BlockEntry::Property(property) => {
                return Err(Error::new(ErrorImpl::InvalidBlockStatement, property.span));
            }
        }
    }

    Ok(BlockStmt { body, span })
}

/// Interprets an entry list as an object literal. Fails on the first statement.
pub fn as_object_literal(
    entries: Vec<BlockEntry>,
    span: Span,
) -> Result<ObjectLiteralExpr, Error> {
    let mut properties = Vec::with_capacity(entries.len());

    for entry in entries {
        match entry {
            BlockEntry::Property(property) => properties.push(property),
            BlockEntry::Statement(stmt) => {
                return Err(Error::new(
                    ErrorImpl::InvalidObjectLiteral,
                    stmt.get_span().clone(),
                ));
            }
        }
    }

    Ok(ObjectLiteralExpr { properties, span })
}

/// Converts the contents of `( ... )` into lambda parameters.
///
/// `None` stands for empty parentheses. A sequence contributes each of its
/// elements; any element that is not a bare identifier is rejected.
pub fn as_lambda_params(contents: Option<ExprWrapper>) -> Result<Vec<IdentifierExpr>, Error> {
    let Some(contents) = contents else {
        return Ok(vec![]);
    };

    let elements = if contents.get_expr_type() == ExprType::Sequence {
        match contents.into_inner::<SequenceExpr>() {
            Some(sequence) => sequence.expressions,
            None => vec![],
        }
    } else {
        vec![contents]
    };

    elements.into_iter().map(as_lambda_param).collect()
}

fn as_lambda_param(expr: ExprWrapper) -> Result<IdentifierExpr, Error> {
    let expr_type = expr.get_expr_type();
    let span = expr.get_span().clone();

    if expr_type == ExprType::Identifier {
        if let Some(identifier) = expr.into_inner::<IdentifierExpr>() {
            return Ok(identifier);
        }
    }

    Err(Error::new(
        ErrorImpl::InvalidLambdaParameter {
            found: expr_type.describe().to_string(),
        },
        span,
    ))
}

/// Checks that `expr` is a LeftHandSide: an identifier or a member access.
pub fn as_assignment_target(expr: ExprWrapper) -> Result<ExprWrapper, Error> {
    match expr.get_expr_type() {
        ExprType::Identifier | ExprType::Member => Ok(expr),
        other => Err(Error::new(
            ErrorImpl::InvalidAssignmentTarget {
                found: other.describe().to_string(),
            },
            expr.get_span().clone(),
        )),
    }
}

/// Validates the head of a for-each loop.
pub fn as_for_prop_binding(head: ForInit) -> Result<ForInit, Error> {
    match head {
        ForInit::VarDecl(decl) if decl.declarations.len() != 1 => Err(Error::new(
            ErrorImpl::InvalidForPropBinding {
                declarators: decl.declarations.len(),
            },
            decl.span,
        )),
        ForInit::VarDecl(decl) => Ok(ForInit::VarDecl(decl)),
        ForInit::Expression(expr) => Ok(ForInit::Expression(as_assignment_target(expr)?)),
    }
}

/// Builds a sequence, collapsing a single expression to itself.
pub fn make_sequence(first: ExprWrapper, rest: Vec<ExprWrapper>) -> ExprWrapper {
    let Some(last) = rest.last() else {
        return first;
    };

    let span = first.get_span().to(last.get_span());
    let mut expressions = Vec::with_capacity(rest.len() + 1);
    expressions.push(first);
    expressions.extend(rest);

    ExprWrapper::new(SequenceExpr { expressions, span })
}

/// Builds a `LogicalExpr` for `||`/`&&` and a `BinaryExpr` for everything else.
pub fn make_binary(left: ExprWrapper, operator: Token, right: ExprWrapper) -> ExprWrapper {
    let span = left.get_span().to(right.get_span());

    if operator.kind.is_logical_operator() {
        ExprWrapper::new(LogicalExpr {
            left,
            operator,
            right,
            span,
        })
    } else {
        ExprWrapper::new(BinaryExpr {
            left,
            operator,
            right,
            span,
        })
    }
}
