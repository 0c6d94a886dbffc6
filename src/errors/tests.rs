//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::{Position, Span};
use std::rc::Rc;

fn span(start: u32, end: u32) -> Span {
    let file = Rc::new("test.lang".to_string());
    Span {
        start: Position(start, Rc::clone(&file)),
        end: Position(end, file),
    }
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        span(10, 11),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "identifier".to_string(),
        },
        span(42, 52),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_span().end.0, 52);
}

#[test]
fn test_detailed_unexpected_token_shares_kind_name() {
    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: "=".to_string(),
            message: "expected identifier".to_string(),
        },
        span(0, 1),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(
        error.get_tip().to_string(),
        "Unexpected token: `=`, expected identifier"
    );
}

#[test]
fn test_cover_grammar_error_names() {
    assert_eq!(
        Error::new(ErrorImpl::InvalidBlockStatement, span(0, 2)).get_error_name(),
        "InvalidBlockStatement"
    );
    assert_eq!(
        Error::new(ErrorImpl::InvalidObjectLiteral, span(0, 2)).get_error_name(),
        "InvalidObjectLiteral"
    );
    assert_eq!(
        Error::new(
            ErrorImpl::InvalidLambdaParameter {
                found: "binary expression".to_string()
            },
            span(0, 2)
        )
        .get_error_name(),
        "InvalidLambdaParameter"
    );
}

#[test]
fn test_static_semantics_error_names() {
    assert_eq!(
        Error::new(
            ErrorImpl::InvalidAssignmentTarget {
                found: "call expression".to_string()
            },
            span(0, 2)
        )
        .get_error_name(),
        "InvalidAssignmentTarget"
    );
    assert_eq!(
        Error::new(ErrorImpl::InvalidForPropBinding { declarators: 2 }, span(0, 2))
            .get_error_name(),
        "InvalidForPropBinding"
    );
}

#[test]
fn test_error_display_uses_message() {
    let error = Error::new(ErrorImpl::InvalidForPropBinding { declarators: 3 }, span(0, 2));

    assert_eq!(
        error.to_string(),
        "for-each binding declares 3 variables, expected 1"
    );
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        span(0, 1),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "}".to_string(),
        },
        span(0, 1),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(_) => (),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
