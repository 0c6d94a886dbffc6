//! Unit tests for node construction and the cover grammar validators.

use std::rc::Rc;

use crate::{
    ast::{
        ast::{ExprType, ExprWrapper, StmtType, StmtWrapper},
        builder::{
            as_assignment_target, as_block, as_for_prop_binding, as_lambda_params,
            as_object_literal, make_binary, make_sequence, BlockEntry,
        },
        expressions::{
            IdentifierExpr, Literal, LiteralExpr, LiteralKind, MemberExpr, Property, PropertyKey,
            SequenceExpr,
        },
        statements::{EmptyStmt, ForInit, VarDeclStmt, VariableDeclarator},
    },
    errors::errors::ErrorImpl,
    lexer::tokens::{Token, TokenKind},
    Position, Span,
};

fn span(start: u32, end: u32) -> Span {
    let file = Rc::new("test.lang".to_string());
    Span {
        start: Position(start, Rc::clone(&file)),
        end: Position(end, file),
    }
}

fn ident(name: &str, start: u32) -> IdentifierExpr {
    IdentifierExpr {
        name: name.to_string(),
        span: span(start, start + name.len() as u32),
    }
}

fn ident_expr(name: &str, start: u32) -> ExprWrapper {
    ExprWrapper::new(ident(name, start))
}

fn number(value: f64, start: u32) -> ExprWrapper {
    ExprWrapper::new(LiteralExpr {
        value: Literal::Numeric(value),
        span: span(start, start + 1),
    })
}

fn property(key: &str, start: u32) -> BlockEntry {
    BlockEntry::Property(Property {
        key: PropertyKey::Identifier(ident(key, start)),
        value: number(1.0, start + 3),
        span: span(start, start + 4),
    })
}

fn empty_stmt(start: u32) -> BlockEntry {
    BlockEntry::Statement(StmtWrapper::new(EmptyStmt {
        span: span(start, start + 1),
    }))
}

fn token(kind: TokenKind, value: &str, start: u32) -> Token {
    Token {
        kind,
        value: value.to_string(),
        span: span(start, start + value.len() as u32),
    }
}

fn declarator(name: &str, start: u32) -> VariableDeclarator {
    VariableDeclarator {
        id: ident(name, start),
        init: None,
        span: span(start, start + name.len() as u32),
    }
}

#[test]
fn test_empty_entries_fit_both_readings() {
    let block = as_block(vec![], span(0, 2)).unwrap();
    assert!(block.body.is_empty());

    let object = as_object_literal(vec![], span(0, 2)).unwrap();
    assert!(object.properties.is_empty());
}

#[test]
fn test_as_block_keeps_statement_order() {
    let block = as_block(vec![empty_stmt(2), empty_stmt(4)], span(0, 6)).unwrap();

    assert_eq!(block.body.len(), 2);
    assert_eq!(block.body[0].get_span().start.0, 2);
    assert_eq!(block.body[1].get_span().start.0, 4);
    assert!(block.body.iter().all(|stmt| stmt.get_stmt_type() == StmtType::EmptyStmt));
}

#[test]
fn test_as_block_rejects_property() {
    let error = as_block(vec![empty_stmt(2), property("a", 4)], span(0, 10)).unwrap_err();

    assert_eq!(error.get_kind(), &ErrorImpl::InvalidBlockStatement);
    assert_eq!(error.get_position().0, 4);
}

#[test]
fn test_as_object_literal_rejects_statement() {
    let error = as_object_literal(vec![property("a", 2), empty_stmt(8)], span(0, 10)).unwrap_err();

    assert_eq!(error.get_kind(), &ErrorImpl::InvalidObjectLiteral);
    assert_eq!(error.get_position().0, 8);
}

#[test]
fn test_as_object_literal_keeps_property_order() {
    let object =
        as_object_literal(vec![property("a", 2), property("b", 8)], span(0, 14)).unwrap();

    let keys: Vec<String> = object
        .properties
        .iter()
        .map(|p| match &p.key {
            PropertyKey::Identifier(id) => id.name.clone(),
            PropertyKey::Literal(lit) => format!("{:?}", lit.value),
        })
        .collect();
    assert_eq!(keys, vec!["a", "b"]);
}

#[test]
fn test_lambda_params_from_nothing_single_and_sequence() {
    assert!(as_lambda_params(None).unwrap().is_empty());

    let params = as_lambda_params(Some(ident_expr("x", 1))).unwrap();
    assert_eq!(params.len(), 1);
    assert_eq!(params[0].name, "x");

    let sequence = make_sequence(ident_expr("a", 1), vec![ident_expr("b", 4), ident_expr("c", 7)]);
    let params = as_lambda_params(Some(sequence)).unwrap();
    let names: Vec<&str> = params.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}

#[test]
fn test_lambda_params_reject_non_identifier() {
    let sequence = make_sequence(ident_expr("a", 1), vec![number(2.0, 4)]);
    let error = as_lambda_params(Some(sequence)).unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::InvalidLambdaParameter {
            found: "literal".to_string()
        }
    );
    assert_eq!(error.get_position().0, 4);
}

#[test]
fn test_make_sequence_collapses_single_expression() {
    let single = make_sequence(ident_expr("x", 0), vec![]);
    assert_eq!(single.get_expr_type(), ExprType::Identifier);

    let pair = make_sequence(ident_expr("x", 0), vec![ident_expr("y", 3)]);
    assert_eq!(pair.get_expr_type(), ExprType::Sequence);

    let sequence = pair.downcast_ref::<SequenceExpr>().unwrap();
    assert_eq!(sequence.expressions.len(), 2);
    assert_eq!((sequence.span.start.0, sequence.span.end.0), (0, 4));
}

#[test]
fn test_make_binary_picks_node_kind() {
    let sum = make_binary(
        ident_expr("a", 0),
        token(TokenKind::Plus, "+", 2),
        ident_expr("b", 4),
    );
    assert_eq!(sum.get_expr_type(), ExprType::Binary);
    assert_eq!((sum.get_span().start.0, sum.get_span().end.0), (0, 5));

    let or = make_binary(
        ident_expr("a", 0),
        token(TokenKind::Or, "||", 2),
        ident_expr("b", 5),
    );
    assert_eq!(or.get_expr_type(), ExprType::Logical);
}

#[test]
fn test_assignment_targets() {
    assert!(as_assignment_target(ident_expr("x", 0)).is_ok());

    let member = ExprWrapper::new(MemberExpr {
        object: ident_expr("a", 0),
        property: ident_expr("b", 2),
        computed: false,
        span: span(0, 3),
    });
    assert!(as_assignment_target(member).is_ok());

    let error = as_assignment_target(number(1.0, 0)).unwrap_err();
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::InvalidAssignmentTarget {
            found: "literal".to_string()
        }
    );
}

#[test]
fn test_for_prop_binding() {
    let single = ForInit::VarDecl(VarDeclStmt {
        declarations: vec![declarator("v", 4)],
        span: span(0, 5),
    });
    assert!(as_for_prop_binding(single).is_ok());

    let double = ForInit::VarDecl(VarDeclStmt {
        declarations: vec![declarator("a", 4), declarator("b", 7)],
        span: span(0, 8),
    });
    let error = as_for_prop_binding(double).unwrap_err();
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::InvalidForPropBinding { declarators: 2 }
    );
    assert_eq!(error.get_position().0, 0);

    assert!(as_for_prop_binding(ForInit::Expression(ident_expr("v", 0))).is_ok());
    assert!(as_for_prop_binding(ForInit::Expression(number(1.0, 0))).is_err());
}

#[test]
fn test_wrapper_clone_and_into_inner() {
    let wrapper = ident_expr("x", 0);
    let copy = wrapper.clone();

    assert_eq!(copy.get_expr_type(), ExprType::Identifier);
    assert_eq!(wrapper.into_inner::<IdentifierExpr>().unwrap().name, "x");
    assert!(copy.into_inner::<LiteralExpr>().is_none());
}

#[test]
fn test_literal_kinds() {
    assert_eq!(Literal::String("s".to_string()).kind(), LiteralKind::String);
    assert_eq!(Literal::Numeric(1.5).kind(), LiteralKind::Numeric);
    assert_eq!(Literal::Boolean(false).kind(), LiteralKind::Boolean);
    assert_eq!(Literal::Null.kind(), LiteralKind::Null);
}
