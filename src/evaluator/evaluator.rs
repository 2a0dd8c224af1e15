use tracing::debug;

use crate::{
    ast::ast::Node,
    config::OverflowPolicy,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

/// Reduces a tree to its value using checked arithmetic.
pub fn evaluate(node: &Node) -> Result<i64, Error> {
    evaluate_with(node, OverflowPolicy::default())
}

pub fn evaluate_with(node: &Node, policy: OverflowPolicy) -> Result<i64, Error> {
    let result = reduce(node, policy)?;
    debug!(result, start = node.get_span().start.0, "evaluated expression");
    Ok(result)
}

// The left spine of a folded chain is walked in a loop; only right children
// recurse, and every parser caps how deeply those nest.
fn reduce(node: &Node, policy: OverflowPolicy) -> Result<i64, Error> {
    let mut pending = vec![];
    let mut current = node;

    let mut acc = loop {
        match current {
            Node::Literal { value, .. } => break *value,
            Node::BinaryOp {
                operator,
                left,
                right,
                ..
            } => {
                pending.push((operator, right.as_ref()));
                current = left.as_ref();
            }
        }
    };

    for (operator, right) in pending.into_iter().rev() {
        let rhs = reduce(right, policy)?;
        acc = apply(operator, acc, rhs, policy)?;
    }

    Ok(acc)
}

fn apply(operator: &Token, left: i64, right: i64, policy: OverflowPolicy) -> Result<i64, Error> {
    if operator.kind != TokenKind::AdditiveOperator {
        return Err(invalid_operator(operator));
    }

    let result = match (operator.value.as_str(), policy) {
        ("+", OverflowPolicy::Checked) => left.checked_add(right),
        ("+", OverflowPolicy::Saturating) => Some(left.saturating_add(right)),
        ("+", OverflowPolicy::Wrapping) => Some(left.wrapping_add(right)),
        ("-", OverflowPolicy::Checked) => left.checked_sub(right),
        ("-", OverflowPolicy::Saturating) => Some(left.saturating_sub(right)),
        ("-", OverflowPolicy::Wrapping) => Some(left.wrapping_sub(right)),
        _ => return Err(invalid_operator(operator)),
    };

    result.ok_or_else(|| {
        Error::new(
            ErrorImpl::Overflow {
                left,
                operator: operator.value.clone(),
                right,
            },
            operator.span.start,
        )
    })
}

fn invalid_operator(operator: &Token) -> Error {
    Error::new(
        ErrorImpl::InvalidOperator {
            operator: operator.value.clone(),
        },
        operator.span.start,
    )
}
