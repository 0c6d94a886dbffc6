use crate::{
    ast::{
        ast::ExprWrapper,
        builder::{as_assignment_target, make_binary, make_sequence},
        expressions::{
            ArrayLiteralExpr, AssignmentExpr, CallExpr, IdentifierExpr, Literal, LiteralExpr,
            MemberExpr, NewExpr, SuperExpr, ThisExpr, UnaryExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<ExprWrapper, Error> {
    parser.enter_nesting()?;
    let result = parse_expr_nested(parser, bp);
    parser.leave_nesting();

    result
}

fn parse_expr_nested(parser: &mut Parser, bp: BindingPower) -> Result<ExprWrapper, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud_fn) = parser.get_nud_lookup().get(&token_kind).copied() else {
        return Err(parser.unexpected("an expression"));
    };

    let mut left = nud_fn(parser)?;
    // Set while `left` is the bare result of the `new` NUD
    let mut fresh_new = token_kind == TokenKind::New;

    // While LED and current BP is less than BP of current token, continue parsing lhs
    while parser.current_binding_power() > bp {
        let token_kind = parser.current_token_kind();
        let token_bp = parser.current_binding_power();

        // `new` takes exactly one argument list, so a second one cannot follow directly.
        if fresh_new && token_kind == TokenKind::OpenParen {
            return Err(parser.unexpected("an operator"));
        }

        let Some(led_fn) = parser.get_led_lookup().get(&token_kind).copied() else {
            return Err(parser.unexpected("an operator"));
        };

        left = led_fn(parser, left, token_bp)?;
        fresh_new = false;
    }

    Ok(left)
}

/// AssignmentExpression: the full operator ladder without the comma operator.
pub fn parse_assignment_expression(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    parse_expr(parser, BindingPower::Default)
}

/// Expression: one or more comma separated assignment expressions.
///
/// A single expression is returned as is, never wrapped in a sequence.
pub fn parse_expression(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let first = parse_assignment_expression(parser)?;

    let mut rest = vec![];
    while parser.current_token_kind() == TokenKind::Comma {
        parser.advance();
        rest.push(parse_assignment_expression(parser)?);
    }

    Ok(make_sequence(first, rest))
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let token = parser.advance().clone();

    let value = match token.kind {
        TokenKind::Identifier => {
            return Ok(ExprWrapper::new(IdentifierExpr {
                name: token.value,
                span: token.span,
            }));
        }
        TokenKind::This => return Ok(ExprWrapper::new(ThisExpr { span: token.span })),
        TokenKind::Number => Literal::Numeric(parse_number(&token)?),
        TokenKind::String => Literal::String(token.value.clone()),
        TokenKind::True => Literal::Boolean(true),
        TokenKind::False => Literal::Boolean(false),
        TokenKind::Null => Literal::Null,
        _ => {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken { token: token.value },
                token.span,
            ));
        }
    };

    Ok(ExprWrapper::new(LiteralExpr {
        value,
        span: token.span,
    }))
}

pub fn parse_number(token: &Token) -> Result<f64, Error> {
    token.value.parse().map_err(|_| {
        Error::new(
            ErrorImpl::NumberParseError {
                token: token.value.clone(),
            },
            token.span.clone(),
        )
    })
}

pub fn parse_binary_expr(
    parser: &mut Parser,
    left: ExprWrapper,
    bp: BindingPower,
) -> Result<ExprWrapper, Error> {
    let operator_token = parser.advance().clone();

    let right = parse_expr(parser, bp)?;

    Ok(make_binary(left, operator_token, right))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let operator_token = parser.advance().clone();
    let argument = parse_expr(parser, BindingPower::Unary)?;

    Ok(ExprWrapper::new(UnaryExpr {
        span: operator_token.span.to(argument.get_span()),
        operator: operator_token,
        argument,
    }))
}

/// Right associative: the right side is parsed at the lowest binding power,
/// so `a = b = c` becomes `a = (b = c)`.
pub fn parse_assignment_expr(
    parser: &mut Parser,
    left: ExprWrapper,
    _bp: BindingPower,
) -> Result<ExprWrapper, Error> {
    let left = as_assignment_target(left)?;
    let operator_token = parser.advance().clone();
    let right = parse_expr(parser, BindingPower::Default)?;

    Ok(ExprWrapper::new(AssignmentExpr {
        span: left.get_span().to(right.get_span()),
        operator: operator_token,
        left,
        right,
    }))
}

/// Parses `( args )` and returns the arguments and the closing parenthesis.
pub fn parse_arguments(parser: &mut Parser) -> Result<(Vec<ExprWrapper>, Token), Error> {
    parser.expect(TokenKind::OpenParen)?;

    let mut args = vec![];
    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            args.push(parse_assignment_expression(parser)?);

            if parser.current_token_kind() != TokenKind::Comma {
                break;
            }
            parser.advance();
        }
    }

    let close = parser.expect(TokenKind::CloseParen)?;
    Ok((args, close))
}

pub fn parse_call_expr(
    parser: &mut Parser,
    left: ExprWrapper,
    _bp: BindingPower,
) -> Result<ExprWrapper, Error> {
    let (arguments, close) = parse_arguments(parser)?;

    Ok(ExprWrapper::new(CallExpr {
        span: left.get_span().to(&close.span),
        callee: left,
        arguments,
    }))
}

pub fn parse_member_expr(
    parser: &mut Parser,
    left: ExprWrapper,
    _bp: BindingPower,
) -> Result<ExprWrapper, Error> {
    parser.advance();
    let property = parser.expect(TokenKind::Identifier)?;

    Ok(ExprWrapper::new(MemberExpr {
        span: left.get_span().to(&property.span),
        object: left,
        property: ExprWrapper::new(IdentifierExpr {
            name: property.value,
            span: property.span,
        }),
        computed: false,
    }))
}

pub fn parse_computed_member_expr(
    parser: &mut Parser,
    left: ExprWrapper,
    _bp: BindingPower,
) -> Result<ExprWrapper, Error> {
    parser.advance();
    let property = parse_expression(parser)?;
    let close = parser.expect(TokenKind::CloseBracket)?;

    Ok(ExprWrapper::new(MemberExpr {
        span: left.get_span().to(&close.span),
        object: left,
        property,
        computed: true,
    }))
}

/// `new Callee(args)`
///
/// The callee is parsed at `Call` strength so member accesses extend it but
/// the first `(` ends it and starts the argument list.
pub fn parse_new_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let start = parser.advance().span.clone();

    if matches!(
        parser.current_token_kind(),
        TokenKind::Plus | TokenKind::Dash | TokenKind::New | TokenKind::Super
    ) {
        return Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: parser.current_token().value.clone(),
                message: String::from("expected a member expression after `new`"),
            },
            parser.current_token().span.clone(),
        ));
    }

    let callee = parse_expr(parser, BindingPower::Call)?;

    if parser.current_token_kind() != TokenKind::OpenParen {
        return Err(parser.unexpected("`(` starting the constructor arguments"));
    }
    let (arguments, close) = parse_arguments(parser)?;

    Ok(ExprWrapper::new(NewExpr {
        span: start.to(&close.span),
        callee,
        arguments,
    }))
}

/// `super(args)`: `super` is only valid directly before an argument list.
pub fn parse_super_call_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let super_token = parser.advance().clone();

    if parser.current_token_kind() != TokenKind::OpenParen {
        let token = parser.current_token();
        if token.kind == TokenKind::EOF {
            return Err(parser.unexpected("`(` after `super`"));
        }
        return Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: token.value.clone(),
                message: String::from("`super` must be followed by an argument list"),
            },
            token.span.clone(),
        ));
    }

    let (arguments, close) = parse_arguments(parser)?;

    Ok(ExprWrapper::new(CallExpr {
        span: super_token.span.to(&close.span),
        callee: ExprWrapper::new(SuperExpr {
            span: super_token.span,
        }),
        arguments,
    }))
}

pub fn parse_array_literal_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let start = parser.advance().span.clone();

    let mut elements = vec![];
    while parser.current_token_kind() != TokenKind::CloseBracket {
        elements.push(parse_assignment_expression(parser)?);

        if parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
        } else if parser.current_token_kind() != TokenKind::CloseBracket {
            return Err(parser.unexpected("`,` or `]`"));
        }
    }

    let close = parser.expect(TokenKind::CloseBracket)?;

    Ok(ExprWrapper::new(ArrayLiteralExpr {
        elements,
        span: start.to(&close.span),
    }))
}
