use lazy_static::lazy_static;
use regex::Regex;
use std::fmt::Display;

use crate::Span;

lazy_static! {
    pub static ref NUMBER_PATTERN: Regex = Regex::new("^-?[0-9]+$").unwrap();
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Number,
    AdditiveOperator, // + or -
    OpenParen,
    CloseParen,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Number => write!(f, "{} ({})", self.kind, self.value),
            _ => write!(f, "{} `{}`", self.kind, self.value),
        }
    }
}

/// Classifies a single whitespace-delimited word.
///
/// Dispatches on the first character. A leading `-` is tried as a negative
/// number before it is tried as an operator, so `-5` is a literal while a
/// lone `-` is subtraction. The whole word has to match; `+5`, `12a` and
/// `((` are all unrecognised.
pub fn classify(word: &str) -> Option<TokenKind> {
    match *word.as_bytes().first()? {
        b'0'..=b'9' | b'-' if NUMBER_PATTERN.is_match(word) => Some(TokenKind::Number),
        b'+' | b'-' if word.len() == 1 => Some(TokenKind::AdditiveOperator),
        b'(' if word.len() == 1 => Some(TokenKind::OpenParen),
        b')' if word.len() == 1 => Some(TokenKind::CloseParen),
        _ => None,
    }
}
