use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// Placeholder token text used when the input runs out before the grammar is satisfied.
pub const END_OF_INPUT: &str = "end of input";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedInput { .. } => "UnexpectedInput",
            ErrorImpl::UnexpectedTokenType { .. } => "UnexpectedTokenType",
            ErrorImpl::InvalidOperator { .. } => "InvalidOperator",
            ErrorImpl::InvalidNodeType { .. } => "InvalidNodeType",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::Overflow { .. } => "Overflow",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
            ErrorImpl::MismatchedParentheses => "MismatchedParentheses",
            ErrorImpl::InvalidPostfixExpression => "InvalidPostfixExpression",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedInput { token } if token == END_OF_INPUT => ErrorTip::Suggestion(
                String::from("Input ended early, is an operand or `)` missing?"),
            ),
            ErrorImpl::UnexpectedInput { token } => ErrorTip::Suggestion(format!(
                "Unexpected input: `{}`, are the tokens separated by whitespace?",
                token
            )),
            ErrorImpl::UnexpectedTokenType {
                expected,
                found,
                token,
            } => ErrorTip::Suggestion(format!(
                "Expected {}, found {} `{}`",
                expected, found, token
            )),
            ErrorImpl::InvalidOperator { .. } => ErrorTip::None,
            ErrorImpl::InvalidNodeType { .. } => ErrorTip::None,
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::Overflow { .. } => ErrorTip::Suggestion(String::from(
                "Result does not fit in a 64-bit integer",
            )),
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Parentheses may be nested at most {} deep",
                limit
            )),
            ErrorImpl::MismatchedParentheses => {
                ErrorTip::Suggestion(String::from("Every `(` needs a matching `)`"))
            }
            ErrorImpl::InvalidPostfixExpression => ErrorTip::Suggestion(String::from(
                "Each operator needs two operands and exactly one value must remain",
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at offset {}", self.internal_error, self.position.0)
    }
}

impl std::error::Error for Error {}

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

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unexpected input: {token:?}")]
    UnexpectedInput { token: String },
    #[error("unexpected token type: expected {expected}, found {found} {token:?}")]
    UnexpectedTokenType {
        expected: TokenKind,
        found: TokenKind,
        token: String,
    },
    #[error("invalid operator: {operator:?}")]
    InvalidOperator { operator: String },
    #[error("invalid node type: {kind}")]
    InvalidNodeType { kind: TokenKind },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("integer overflow evaluating {left} {operator} {right}")]
    Overflow {
        left: i64,
        operator: String,
        right: i64,
    },
    #[error("parentheses nested deeper than {limit}")]
    NestingTooDeep { limit: usize },
    #[error("mismatched parentheses")]
    MismatchedParentheses,
    #[error("invalid postfix expression")]
    InvalidPostfixExpression,
}
