//! Cover grammar parsing.
//!
//! `{ ... }` and `( ... )` each cover two constructs. Both are parsed in a
//! single forward pass into a neutral shape, and the call site then picks
//! the reading through the validators in `ast::builder`:
//!
//! - `{ ... }` in statement position is a block, in expression position an
//!   object literal.
//! - `( ... )` is a parenthesised expression unless `->` follows the
//!   closing parenthesis, in which case it is a lambda parameter list.

use log::debug;

use crate::{
    ast::{
        ast::ExprWrapper,
        builder::{as_block, as_lambda_params, as_object_literal, BlockEntry},
        expressions::{
            IdentifierExpr, LambdaExpr, Literal, LiteralExpr, Property, PropertyKey, SequenceExpr,
        },
        statements::BlockStmt,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{
    expr::{parse_assignment_expression, parse_expression, parse_number},
    parser::Parser,
    stmt::parse_stmt,
};

/// Parses `{ entries }` without deciding what the braces are.
pub fn parse_block_entries(parser: &mut Parser) -> Result<(Vec<BlockEntry>, Span), Error> {
    let open = parser.expect(TokenKind::OpenCurly)?;

    let mut entries = Vec::new();
    while parser.current_token_kind() != TokenKind::CloseCurly {
        if !parser.has_tokens() {
            return Err(parser.unexpected("`}`"));
        }
        entries.push(parse_block_entry(parser)?);
    }

    let close = parser.expect(TokenKind::CloseCurly)?;
    Ok((entries, open.span.to(&close.span)))
}

fn starts_property(parser: &Parser) -> bool {
    let token = parser.current_token();
    let key_like = matches!(
        token.kind,
        TokenKind::Identifier | TokenKind::String | TokenKind::Number
    ) || token.kind.is_keyword();

    key_like && parser.peek(1).kind == TokenKind::Colon
}

fn parse_block_entry(parser: &mut Parser) -> Result<BlockEntry, Error> {
    if !starts_property(parser) {
        return Ok(BlockEntry::Statement(parse_stmt(parser)?));
    }

    let property = parse_property(parser)?;

    match parser.current_token_kind() {
        TokenKind::Comma => {
            parser.advance();
        }
        TokenKind::CloseCurly => {}
        _ => return Err(parser.unexpected("`,` or `}`")),
    }

    Ok(BlockEntry::Property(property))
}

/// PropertyName `:` AssignmentExpression
fn parse_property(parser: &mut Parser) -> Result<Property, Error> {
    let key_token = parser.advance().clone();

    let literal = |value| {
        PropertyKey::Literal(LiteralExpr {
            value,
            span: key_token.span.clone(),
        })
    };

    let key = match key_token.kind {
        TokenKind::String => literal(Literal::String(key_token.value.clone())),
        TokenKind::Number => literal(Literal::Numeric(parse_number(&key_token)?)),
        TokenKind::True => literal(Literal::Boolean(true)),
        TokenKind::False => literal(Literal::Boolean(false)),
        TokenKind::Null => literal(Literal::Null),
        // Identifiers and the remaining keywords name the property directly
        _ => PropertyKey::Identifier(IdentifierExpr {
            name: key_token.value.clone(),
            span: key_token.span.clone(),
        }),
    };

    parser.expect(TokenKind::Colon)?;
    let value = parse_assignment_expression(parser)?;

    Ok(Property {
        span: key_token.span.to(value.get_span()),
        key,
        value,
    })
}

/// `{ ... }` read as a block.
pub fn parse_block(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let (entries, span) = parse_block_entries(parser)?;
    debug!(target: "parser", "braces at {} read as a block ({} entries)", span.start.0, entries.len());

    as_block(entries, span)
}

/// `{ ... }` in expression position, read as an object literal.
pub fn parse_object_literal_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let (entries, span) = parse_block_entries(parser)?;
    debug!(target: "parser", "braces at {} read as an object literal ({} entries)", span.start.0, entries.len());

    Ok(ExprWrapper::new(as_object_literal(entries, span)?))
}

/// `( ... )`, either a parenthesised expression or the head of a lambda.
pub fn parse_parenthesized_or_lambda_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let open = parser.advance().clone();

    let contents = if parser.current_token_kind() == TokenKind::CloseParen {
        None
    } else {
        Some(parse_expression(parser)?)
    };

    parser.expect(TokenKind::CloseParen)?;

    if parser.current_token_kind() != TokenKind::Arrow {
        debug!(target: "parser", "parentheses at {} read as an expression", open.span.start.0);
        return match contents {
            Some(expr) => {
                parser.mark_parenthesized(expr.get_span());
                Ok(expr)
            }
            None => Err(parser.unexpected("`->` after `()`")),
        };
    }

    parser.advance();
    if let Some(contents) = &contents {
        reject_parenthesized_params(parser, contents)?;
    }
    let params = as_lambda_params(contents)?;
    debug!(target: "parser", "parentheses at {} read as {} lambda parameters", open.span.start.0, params.len());

    let body = parse_block(parser)?;

    Ok(ExprWrapper::new(LambdaExpr {
        span: open.span.to(&body.span),
        params,
        body,
    }))
}

/// `((a, b)) -> {}` and `(a, (b)) -> {}` are not parameter lists even though
/// the parentheses unwrap to the same nodes.
fn reject_parenthesized_params(parser: &Parser, contents: &ExprWrapper) -> Result<(), Error> {
    let mut candidates = vec![contents];
    if let Some(sequence) = contents.downcast_ref::<SequenceExpr>() {
        candidates.extend(sequence.expressions.iter());
    }

    match candidates
        .into_iter()
        .find(|expr| parser.is_parenthesized(expr.get_span()))
    {
        Some(expr) => Err(Error::new(
            ErrorImpl::InvalidLambdaParameter {
                found: "parenthesized expression".to_string(),
            },
            expr.get_span().clone(),
        )),
        None => Ok(()),
    }
}
