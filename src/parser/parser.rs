//! Parser state and the parsing entry points.
//!
//! The parser is LL(1): it holds exactly one lookahead token pulled from the
//! lexer and decides every production from that token alone. Grammar
//! productions live in `expr.rs` as free functions taking `&mut Parser`.

use tracing::{debug, instrument};

use crate::{
    ast::ast::Node,
    config::{Config, TrailingInput},
    errors::errors::{Error, ErrorImpl, END_OF_INPUT},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::expr::parse_binary_expr;

pub struct Parser {
    /// Source of tokens not yet pulled into the lookahead
    lexer: Lexer,
    /// The next unconsumed token, `None` once the input is exhausted
    lookahead: Option<Token>,
    /// Number of currently open parentheses
    depth: usize,
    max_depth: usize,
}

impl Parser {
    /// Creates a parser over `source` and primes the lookahead.
    ///
    /// Fails if the first word is not a valid token.
    pub fn new(source: &str, max_depth: usize) -> Result<Self, Error> {
        let mut lexer = Lexer::new(source);
        let lookahead = lexer.next_token()?;

        Ok(Parser {
            lexer,
            lookahead,
            depth: 0,
            max_depth,
        })
    }

    pub fn lookahead(&self) -> Option<&Token> {
        self.lookahead.as_ref()
    }

    pub fn lookahead_kind(&self) -> Option<TokenKind> {
        self.lookahead.as_ref().map(|token| token.kind)
    }

    /// Position of the lookahead, or the end of the input when there is none.
    pub fn get_position(&self) -> Position {
        match &self.lookahead {
            Some(token) => token.span.start,
            None => self.lexer.end_position(),
        }
    }

    /// Consumes the lookahead if it is of `expected_kind` and pulls the next
    /// token in its place.
    ///
    /// An exhausted stream is `UnexpectedInput`; a token of another kind is
    /// `UnexpectedTokenType`. Neither consumes anything.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        let token = match self.lookahead.take() {
            Some(token) if token.kind == expected_kind => token,
            Some(token) => {
                let error = Error::new(
                    ErrorImpl::UnexpectedTokenType {
                        expected: expected_kind,
                        found: token.kind,
                        token: token.value.clone(),
                    },
                    token.span.start,
                );
                self.lookahead = Some(token);
                return Err(error);
            }
            None => {
                return Err(Error::new(
                    ErrorImpl::UnexpectedInput {
                        token: String::from(END_OF_INPUT),
                    },
                    self.lexer.end_position(),
                ))
            }
        };

        self.lookahead = self.lexer.next_token()?;
        Ok(token)
    }

    /// Records an opening parenthesis, failing once `max_depth` are open.
    pub fn enter_group(&mut self, position: Position) -> Result<(), Error> {
        if self.depth >= self.max_depth {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: self.max_depth,
                },
                position,
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn exit_group(&mut self) {
        self.depth -= 1;
    }

    /// Checks what is left once the top-level expression has been parsed.
    pub fn finish(&self, trailing_input: TrailingInput) -> Result<(), Error> {
        match (&self.lookahead, trailing_input) {
            (Some(token), TrailingInput::Reject) => Err(Error::new(
                ErrorImpl::UnexpectedInput {
                    token: token.value.clone(),
                },
                token.span.start,
            )),
            _ => Ok(()),
        }
    }
}

/// Parses `source` with the default configuration.
pub fn parse(source: &str) -> Result<Node, Error> {
    parse_with(source, &Config::default())
}

/// Parses a whole expression into a tree.
///
/// Runs the `BinaryExpression` production once from the top and then applies
/// the configured trailing-input policy. No partial tree is returned on
/// failure.
#[instrument(skip(config), level = "debug")]
pub fn parse_with(source: &str, config: &Config) -> Result<Node, Error> {
    let mut parser = Parser::new(source, config.max_depth)?;
    let root = parse_binary_expr(&mut parser)?;
    parser.finish(config.trailing_input)?;

    debug!(end = root.get_span().end.0, "parsed expression");
    Ok(root)
}
