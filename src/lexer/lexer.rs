use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_TOKEN,
};

use super::tokens::{classify, Token};

lazy_static! {
    static ref WORD_PATTERN: Regex = Regex::new("\\S+").unwrap();
}

#[derive(Debug, Clone)]
struct Word {
    value: String,
    span: Span,
}

/// Pull-based tokenizer over whitespace-separated words.
///
/// The input is split once up front; every call to [`Lexer::next_token`]
/// classifies exactly one word and moves the cursor forward. The cursor
/// never rewinds.
#[derive(Debug, Clone)]
pub struct Lexer {
    words: Vec<Word>,
    cursor: usize,
    end: Position,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        let words = WORD_PATTERN
            .find_iter(source)
            .map(|m| Word {
                value: m.as_str().to_string(),
                span: Span {
                    start: Position(m.start()),
                    end: Position(m.end()),
                },
            })
            .collect();

        Lexer {
            words,
            cursor: 0,
            end: Position(source.len()),
        }
    }

    pub fn has_more(&self) -> bool {
        self.cursor < self.words.len()
    }

    /// Byte offset just past the last character of the input.
    pub fn end_position(&self) -> Position {
        self.end
    }

    /// Returns the next token, `Ok(None)` once the input is exhausted, or
    /// `UnexpectedInput` when the current word is not a token. The offending
    /// word is consumed either way.
    pub fn next_token(&mut self) -> Result<Option<Token>, Error> {
        let Some(word) = self.words.get(self.cursor) else {
            return Ok(None);
        };
        self.cursor += 1;

        match classify(&word.value) {
            Some(kind) => {
                let token = MK_TOKEN!(kind, word.value.clone(), word.span.clone());
                trace!(token = %token, offset = token.span.start.0, "lexed token");
                Ok(Some(token))
            }
            None => Err(Error::new(
                ErrorImpl::UnexpectedInput {
                    token: word.value.clone(),
                },
                word.span.start,
            )),
        }
    }
}

impl Iterator for Lexer {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    Lexer::new(source).collect()
}
