use log::{debug, trace};

use crate::{
    ast::{
        ast::StmtWrapper,
        builder::as_for_prop_binding,
        expressions::IdentifierExpr,
        statements::{
            BreakStmt, ClassDeclStmt, ContinueStmt, DoWhileStmt, EmptyStmt, ExpressionStmt,
            FnDeclStmt, ForInit, ForPropStmt, ForStmt, IfStmt, ReturnStmt, VarDeclStmt,
            VariableDeclarator, WhileStmt,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    cover::parse_block,
    expr::{parse_assignment_expression, parse_expression},
    parser::Parser,
};

pub fn parse_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    parser.enter_nesting()?;
    let result = parse_stmt_nested(parser);
    parser.leave_nesting();

    result
}

fn parse_stmt_nested(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let kind = parser.current_token_kind();
    trace!(target: "parser", "statement at {} starts with {}", parser.get_position().0, kind);

    if let Some(stmt_fn) = parser.get_stmt_lookup().get(&kind).copied() {
        return stmt_fn(parser);
    }

    let expression = parse_expression(parser)?;
    let semicolon = parser.expect(TokenKind::Semicolon)?;

    Ok(StmtWrapper::new(ExpressionStmt {
        span: expression.get_span().to(&semicolon.span),
        expression,
    }))
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    Ok(StmtWrapper::new(parse_block(parser)?))
}

pub fn parse_empty_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let span = parser.advance().span.clone();
    Ok(StmtWrapper::new(EmptyStmt { span }))
}

fn parse_identifier(parser: &mut Parser, what: &str) -> Result<IdentifierExpr, Error> {
    if parser.current_token_kind() != TokenKind::Identifier && parser.has_tokens() {
        return Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: parser.current_token().value.clone(),
                message: format!("expected {}", what),
            },
            parser.current_token().span.clone(),
        ));
    }

    let token = parser.expect(TokenKind::Identifier)?;
    Ok(IdentifierExpr {
        name: token.value,
        span: token.span,
    })
}

/// `let a, b = 1` without the terminating semicolon, shared with `for` heads.
pub fn parse_var_decl_list(parser: &mut Parser) -> Result<VarDeclStmt, Error> {
    let start = parser.expect(TokenKind::Let)?.span;

    let mut declarations = Vec::new();
    loop {
        let id = parse_identifier(parser, "identifier during variable declaration")?;

        let init = if parser.current_token_kind() == TokenKind::Assignment {
            parser.advance();
            Some(parse_assignment_expression(parser)?)
        } else {
            None
        };

        let span = match &init {
            Some(init) => id.span.to(init.get_span()),
            None => id.span.clone(),
        };
        declarations.push(VariableDeclarator { id, init, span });

        if parser.current_token_kind() != TokenKind::Comma {
            break;
        }
        parser.advance();
    }

    let span = match declarations.last() {
        Some(last) => start.to(&last.span),
        None => start,
    };

    Ok(VarDeclStmt { declarations, span })
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let mut declaration = parse_var_decl_list(parser)?;
    let semicolon = parser.expect(TokenKind::Semicolon)?;

    declaration.span = declaration.span.to(&semicolon.span);
    Ok(StmtWrapper::new(declaration))
}

fn parse_params(parser: &mut Parser) -> Result<Vec<IdentifierExpr>, Error> {
    parser.expect(TokenKind::OpenParen)?;

    let mut params = Vec::new();
    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            params.push(parse_identifier(parser, "parameter name")?);

            if parser.current_token_kind() != TokenKind::Comma {
                break;
            }
            parser.advance();
        }
    }

    parser.expect(TokenKind::CloseParen)?;
    Ok(params)
}

pub fn parse_fn_decl_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start = parser.advance().span.clone();

    let id = parse_identifier(parser, "function name")?;
    let params = parse_params(parser)?;
    let body = parse_block(parser)?;

    Ok(StmtWrapper::new(FnDeclStmt {
        span: start.to(&body.span),
        id,
        params,
        body,
    }))
}

pub fn parse_class_decl_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start = parser.advance().span.clone();

    let id = parse_identifier(parser, "class name")?;

    let super_class = if parser.current_token_kind() == TokenKind::Extends {
        parser.advance();
        Some(parse_identifier(parser, "superclass name")?)
    } else {
        None
    };

    let body = parse_block(parser)?;

    Ok(StmtWrapper::new(ClassDeclStmt {
        span: start.to(&body.span),
        id,
        super_class,
        body,
    }))
}

/// `if (test) consequent else alternate`
///
/// A trailing `else` is always taken by the innermost `if`, so
/// `if (a) if (b) x; else y;` attaches `else y;` to `if (b)`.
pub fn parse_if_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start = parser.advance().span.clone();

    parser.expect(TokenKind::OpenParen)?;
    let test = parse_expression(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    let consequent = parse_stmt(parser)?;

    let alternate = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        Some(parse_stmt(parser)?)
    } else {
        None
    };

    let end = match &alternate {
        Some(alternate) => alternate.get_span().clone(),
        None => consequent.get_span().clone(),
    };

    Ok(StmtWrapper::new(IfStmt {
        span: start.to(&end),
        test,
        consequent,
        alternate,
    }))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start = parser.advance().span.clone();

    parser.expect(TokenKind::OpenParen)?;
    let test = parse_expression(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    let body = parse_stmt(parser)?;

    Ok(StmtWrapper::new(WhileStmt {
        span: start.to(body.get_span()),
        test,
        body,
    }))
}

pub fn parse_do_while_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start = parser.advance().span.clone();

    let body = parse_stmt(parser)?;

    parser.expect(TokenKind::While)?;
    parser.expect(TokenKind::OpenParen)?;
    let test = parse_expression(parser)?;
    parser.expect(TokenKind::CloseParen)?;
    let semicolon = parser.expect(TokenKind::Semicolon)?;

    Ok(StmtWrapper::new(DoWhileStmt {
        span: start.to(&semicolon.span),
        body,
        test,
    }))
}

/// `for (init; test; update) body` or `for (binding : iterable) body`.
///
/// The head is parsed once; the token after it picks the loop form.
pub fn parse_for_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start = parser.advance().span.clone();
    parser.expect(TokenKind::OpenParen)?;

    let init = match parser.current_token_kind() {
        TokenKind::Semicolon => None,
        TokenKind::Let => Some(ForInit::VarDecl(parse_var_decl_list(parser)?)),
        _ => Some(ForInit::Expression(parse_expression(parser)?)),
    };

    match (parser.current_token_kind(), init) {
        (TokenKind::Colon, Some(head)) => {
            debug!(target: "parser", "for loop at {} is a for-each", start.start.0);
            let left = as_for_prop_binding(head)?;
            parser.advance();

            let right = parse_expression(parser)?;
            parser.expect(TokenKind::CloseParen)?;
            let body = parse_stmt(parser)?;

            Ok(StmtWrapper::new(ForPropStmt {
                span: start.to(body.get_span()),
                left,
                right,
                body,
            }))
        }
        (TokenKind::Semicolon, init) => {
            debug!(target: "parser", "for loop at {} is a classic for", start.start.0);
            parser.advance();

            let test = if parser.current_token_kind() != TokenKind::Semicolon {
                Some(parse_expression(parser)?)
            } else {
                None
            };
            parser.expect(TokenKind::Semicolon)?;

            let update = if parser.current_token_kind() != TokenKind::CloseParen {
                Some(parse_expression(parser)?)
            } else {
                None
            };
            parser.expect(TokenKind::CloseParen)?;

            let body = parse_stmt(parser)?;

            Ok(StmtWrapper::new(ForStmt {
                span: start.to(body.get_span()),
                init,
                test,
                update,
                body,
            }))
        }
        _ => Err(parser.unexpected("`;` or `:` in the for loop head")),
    }
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start = parser.advance().span.clone();

    let argument = if parser.current_token_kind() != TokenKind::Semicolon {
        Some(parse_expression(parser)?)
    } else {
        None
    };

    let semicolon = parser.expect(TokenKind::Semicolon)?;

    Ok(StmtWrapper::new(ReturnStmt {
        argument,
        span: start.to(&semicolon.span),
    }))
}

pub fn parse_break_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start = parser.advance().span.clone();
    let semicolon = parser.expect(TokenKind::Semicolon)?;

    Ok(StmtWrapper::new(BreakStmt {
        span: start.to(&semicolon.span),
    }))
}

pub fn parse_continue_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start = parser.advance().span.clone();
    let semicolon = parser.expect(TokenKind::Semicolon)?;

    Ok(StmtWrapper::new(ContinueStmt {
        span: start.to(&semicolon.span),
    }))
}
