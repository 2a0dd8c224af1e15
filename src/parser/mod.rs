//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive descent parser that transforms the
//! token stream into a `Node` tree. The grammar, lowest precedence first:
//!
//! ```text
//! BinaryExpression        := PrimaryExpression ( AdditiveOperator PrimaryExpression )*
//! PrimaryExpression       := NumericLiteral | ParenthesizedExpression
//! ParenthesizedExpression := '(' BinaryExpression ')'
//! NumericLiteral          := NUMBER
//! ```
//!
//! Additive operators fold to the left, so `1 - 2 + 3` is `(1 - 2) + 3`.

pub mod expr;
pub mod parser;
