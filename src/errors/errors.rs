use std::fmt::Display;

use thiserror::Error;

use crate::{Position, Span};

/// A fatal diagnostic: what went wrong and where.
#[derive(Error, Debug, Clone)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    span: Span,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, span: Span) -> Self {
        Error {
            internal_error: error_impl,
            span,
        }
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_span(&self) -> &Span {
        &self.span
    }

    pub fn get_position(&self) -> &Position {
        &self.span.start
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedEndOfInput { .. } => "UnexpectedEndOfInput",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::InvalidBlockStatement => "InvalidBlockStatement",
            ErrorImpl::InvalidObjectLiteral => "InvalidObjectLiteral",
            ErrorImpl::InvalidLambdaParameter { .. } => "InvalidLambdaParameter",
            ErrorImpl::InvalidAssignmentTarget { .. } => "InvalidAssignmentTarget",
            ErrorImpl::InvalidForPropBinding { .. } => "InvalidForPropBinding",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::UnexpectedEndOfInput { expected } => {
                ErrorTip::Suggestion(format!("Input ended while expecting {}", expected))
            }
            ErrorImpl::NumberParseError { token } => {
                ErrorTip::Suggestion(format!("Invalid number: `{}`", token))
            }
            ErrorImpl::InvalidBlockStatement => ErrorTip::Suggestion(String::from(
                "Object properties cannot appear in a block, wrap the object in parentheses",
            )),
            ErrorImpl::InvalidObjectLiteral => ErrorTip::Suggestion(String::from(
                "Object literals may only contain `key: value` properties",
            )),
            ErrorImpl::InvalidLambdaParameter { found } => ErrorTip::Suggestion(format!(
                "Lambda parameters must be plain identifiers, found {}",
                found
            )),
            ErrorImpl::InvalidAssignmentTarget { found } => ErrorTip::Suggestion(format!(
                "Only identifiers and member expressions can be assigned to, found {}",
                found
            )),
            ErrorImpl::InvalidForPropBinding { declarators } => ErrorTip::Suggestion(format!(
                "A for-each loop binds exactly one variable, found {}",
                declarators
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEndOfInput { expected: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("block contains an object property")]
    InvalidBlockStatement,
    #[error("object literal contains a statement")]
    InvalidObjectLiteral,
    #[error("invalid lambda parameter: {found}")]
    InvalidLambdaParameter { found: String },
    #[error("invalid assignment target: {found}")]
    InvalidAssignmentTarget { found: String },
    #[error("for-each binding declares {declarators} variables, expected 1")]
    InvalidForPropBinding { declarators: usize },
}
