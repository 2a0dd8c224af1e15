//! Unit tests for the evaluator.
//!
//! Trees are built by hand here so that malformed shapes the parsers never
//! produce can be checked too.

use super::evaluator::{evaluate, evaluate_with};
use crate::ast::ast::Node;
use crate::config::OverflowPolicy;
use crate::errors::errors::ErrorImpl;
use crate::lexer::tokens::{Token, TokenKind};
use crate::{MK_SPAN, MK_TOKEN};

fn op(symbol: &str) -> Token {
    MK_TOKEN!(TokenKind::AdditiveOperator, symbol.to_string(), MK_SPAN!(0, 1))
}

fn lit(value: i64) -> Node {
    Node::literal(value, MK_SPAN!(0, 1))
}

#[test]
fn test_evaluate_literal() {
    assert_eq!(evaluate(&lit(0)).unwrap(), 0);
    assert_eq!(evaluate(&lit(-17)).unwrap(), -17);
}

#[test]
fn test_evaluate_addition_and_subtraction() {
    assert_eq!(evaluate(&Node::binary(op("+"), lit(1), lit(2))).unwrap(), 3);
    assert_eq!(evaluate(&Node::binary(op("-"), lit(1), lit(2))).unwrap(), -1);
}

#[test]
fn test_evaluate_left_leaning_chain() {
    // ((1 - 2) + 3)
    let tree = Node::binary(op("+"), Node::binary(op("-"), lit(1), lit(2)), lit(3));
    assert_eq!(evaluate(&tree).unwrap(), 2);
}

#[test]
fn test_evaluate_right_subtree() {
    // 1 - (2 + 3)
    let tree = Node::binary(op("-"), lit(1), Node::binary(op("+"), lit(2), lit(3)));
    assert_eq!(evaluate(&tree).unwrap(), -4);
}

#[test]
fn test_evaluate_long_chain() {
    let mut tree = lit(0);
    for _ in 0..1_000 {
        tree = Node::binary(op("+"), tree, lit(1));
    }

    assert_eq!(evaluate(&tree).unwrap(), 1_000);
}

#[test]
fn test_evaluate_does_not_mutate() {
    let tree = Node::binary(op("-"), lit(10), lit(4));
    let before = tree.clone();

    assert_eq!(evaluate(&tree).unwrap(), evaluate(&tree).unwrap());
    assert_eq!(tree, before);
}

#[test]
fn test_invalid_operator() {
    let tree = Node::binary(op("*"), lit(2), lit(3));
    let error = evaluate(&tree).unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::InvalidOperator {
            operator: "*".to_string()
        }
    );
}

#[test]
fn test_operator_with_wrong_kind() {
    let paren = MK_TOKEN!(TokenKind::OpenParen, "+".to_string(), MK_SPAN!(0, 1));
    let tree = Node::binary(paren, lit(2), lit(3));

    assert_eq!(evaluate(&tree).unwrap_err().get_error_name(), "InvalidOperator");
}

#[test]
fn test_checked_overflow() {
    let tree = Node::binary(op("+"), lit(i64::MAX), lit(1));
    let error = evaluate(&tree).unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::Overflow {
            left: i64::MAX,
            operator: "+".to_string(),
            right: 1
        }
    );

    let tree = Node::binary(op("-"), lit(i64::MIN), lit(1));
    assert_eq!(evaluate(&tree).unwrap_err().get_error_name(), "Overflow");
}

#[test]
fn test_saturating_and_wrapping_overflow() {
    let tree = Node::binary(op("+"), lit(i64::MAX), lit(1));

    assert_eq!(
        evaluate_with(&tree, OverflowPolicy::Saturating).unwrap(),
        i64::MAX
    );
    assert_eq!(
        evaluate_with(&tree, OverflowPolicy::Wrapping).unwrap(),
        i64::MIN
    );
}
