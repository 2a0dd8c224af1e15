use tracing::{debug, instrument};

use crate::{
    ast::ast::Node,
    config::Config,
    errors::errors::{Error, ErrorImpl, END_OF_INPUT},
    lexer::{
        lexer::{tokenize, Lexer},
        tokens::{Token, TokenKind},
    },
    Position,
};

/// Reorders infix input into postfix order with the shunting-yard algorithm.
///
/// All operators share one precedence level and associate to the left, so an
/// incoming operator flushes every operator above the nearest `(`. Operands
/// and operators must alternate; the first token out of turn is reported as
/// `UnexpectedTokenType`.
pub fn to_postfix(source: &str, config: &Config) -> Result<Vec<Token>, Error> {
    let mut lexer = Lexer::new(source);
    let mut output = vec![];
    let mut operators: Vec<Token> = vec![];
    let mut open_groups = 0;
    let mut expect_operand = true;

    while let Some(token) = lexer.next_token()? {
        match token.kind {
            TokenKind::Number => {
                out_of_turn(&token, expect_operand)?;
                output.push(token);
                expect_operand = false;
            }
            TokenKind::AdditiveOperator => {
                out_of_turn(&token, !expect_operand)?;
                while operators
                    .last()
                    .is_some_and(|top| top.kind != TokenKind::OpenParen)
                {
                    output.extend(operators.pop());
                }
                operators.push(token);
                expect_operand = true;
            }
            TokenKind::OpenParen => {
                out_of_turn(&token, expect_operand)?;
                if open_groups >= config.max_depth {
                    return Err(Error::new(
                        ErrorImpl::NestingTooDeep {
                            limit: config.max_depth,
                        },
                        token.span.start,
                    ));
                }
                open_groups += 1;
                operators.push(token);
            }
            TokenKind::CloseParen => {
                out_of_turn(&token, !expect_operand)?;
                loop {
                    match operators.pop() {
                        Some(top) if top.kind == TokenKind::OpenParen => break,
                        Some(top) => output.push(top),
                        None => {
                            return Err(Error::new(
                                ErrorImpl::MismatchedParentheses,
                                token.span.start,
                            ))
                        }
                    }
                }
                open_groups -= 1;
            }
        }
    }

    if expect_operand {
        return Err(Error::new(
            ErrorImpl::UnexpectedInput {
                token: String::from(END_OF_INPUT),
            },
            lexer.end_position(),
        ));
    }

    while let Some(top) = operators.pop() {
        if top.kind == TokenKind::OpenParen {
            return Err(Error::new(
                ErrorImpl::MismatchedParentheses,
                top.span.start,
            ));
        }
        output.push(top);
    }

    Ok(output)
}

// `due` says whether the token may appear here; if not, report what should have.
fn out_of_turn(token: &Token, due: bool) -> Result<(), Error> {
    if due {
        return Ok(());
    }

    let expected = match token.kind {
        TokenKind::Number | TokenKind::OpenParen => TokenKind::AdditiveOperator,
        TokenKind::AdditiveOperator | TokenKind::CloseParen => TokenKind::Number,
    };

    Err(Error::new(
        ErrorImpl::UnexpectedTokenType {
            expected,
            found: token.kind,
            token: token.value.clone(),
        },
        token.span.start,
    ))
}

/// Space-separated postfix text, e.g. `1 2 3 - +`.
pub fn render(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| token.value.as_str())
        .collect::<Vec<&str>>()
        .join(" ")
}

/// Builds a tree from tokens in postfix order.
///
/// Every operator takes the two most recent subtrees; exactly one tree must
/// be left at the end. Parentheses have no place in postfix input and are
/// `InvalidNodeType`. An operator whose right operand is itself an operation
/// nests one level deeper, the way a parenthesised group does in infix, and
/// more than `max_depth` such levels is `NestingTooDeep`.
pub fn build_tree(tokens: Vec<Token>, config: &Config) -> Result<Node, Error> {
    let mut stack: Vec<(Node, usize)> = vec![];

    for token in tokens {
        match token.kind {
            TokenKind::AdditiveOperator => {
                let (Some((right, right_depth)), Some((left, left_depth))) =
                    (stack.pop(), stack.pop())
                else {
                    return Err(Error::new(
                        ErrorImpl::InvalidPostfixExpression,
                        token.span.start,
                    ));
                };

                let depth = match right.is_literal() {
                    true => left_depth,
                    false => left_depth.max(right_depth + 1),
                };
                if depth > config.max_depth {
                    return Err(Error::new(
                        ErrorImpl::NestingTooDeep {
                            limit: config.max_depth,
                        },
                        token.span.start,
                    ));
                }

                stack.push((Node::binary(token, left, right), depth));
            }
            _ => stack.push((Node::from_token(&token)?, 0)),
        }
    }

    let position = stack
        .get(1)
        .map(|(node, _)| node.get_span().start)
        .unwrap_or(Position(0));

    match (stack.pop(), stack.is_empty()) {
        (Some((root, _)), true) => Ok(root),
        _ => Err(Error::new(ErrorImpl::InvalidPostfixExpression, position)),
    }
}

/// Parses infix input by way of postfix order.
#[instrument(skip(config), level = "debug")]
pub fn parse_infix(source: &str, config: &Config) -> Result<Node, Error> {
    let postfix = to_postfix(source, config)?;
    debug!(postfix = %render(&postfix), "converted to postfix");
    build_tree(postfix, config)
}

/// Parses input that is already written in postfix order, e.g. `10 2 + 5 -`.
#[instrument(skip(config), level = "debug")]
pub fn parse_postfix(source: &str, config: &Config) -> Result<Node, Error> {
    build_tree(tokenize(source)?, config)
}
