use crate::{ast::ast::Node, errors::errors::Error, lexer::tokens::TokenKind};

use super::parser::Parser;

// BinaryExpression
//     : PrimaryExpression ( ADDITIVE_OPERATOR PrimaryExpression )*
//     ;
pub fn parse_binary_expr(parser: &mut Parser) -> Result<Node, Error> {
    let mut left = parse_primary_expr(parser)?;

    while parser.lookahead_kind() == Some(TokenKind::AdditiveOperator) {
        let operator = parser.expect(TokenKind::AdditiveOperator)?;
        let right = parse_primary_expr(parser)?;
        left = Node::binary(operator, left, right);
    }

    Ok(left)
}

// PrimaryExpression
//     : NumericLiteral
//     | ParenthesizedExpression
//     ;
pub fn parse_primary_expr(parser: &mut Parser) -> Result<Node, Error> {
    match parser.lookahead_kind() {
        Some(TokenKind::OpenParen) => parse_parenthesized_expr(parser),
        _ => parse_numeric_literal(parser),
    }
}

// ParenthesizedExpression
//     : "(" BinaryExpression ")"
//     ;
pub fn parse_parenthesized_expr(parser: &mut Parser) -> Result<Node, Error> {
    let open = parser.expect(TokenKind::OpenParen)?;
    parser.enter_group(open.span.start)?;

    let expr = parse_binary_expr(parser)?;

    parser.expect(TokenKind::CloseParen)?;
    parser.exit_group();

    Ok(expr)
}

// NumericLiteral
//     : NUMBER
//     ;
pub fn parse_numeric_literal(parser: &mut Parser) -> Result<Node, Error> {
    let token = parser.expect(TokenKind::Number)?;
    Node::from_token(&token)
}
