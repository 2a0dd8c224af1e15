use std::{fmt::Display, mem};

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Span,
};

/// Expression tree produced by the parsers.
///
/// Children are owned exclusively by their parent, so a tree is never shared
/// and never cyclic. Parentheses leave no trace in the tree; they only decide
/// its shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Literal {
        value: i64,
        span: Span,
    },
    BinaryOp {
        /// The `+` or `-` token the node was built from.
        operator: Token,
        left: Box<Node>,
        right: Box<Node>,
        span: Span,
    },
}

impl Node {
    pub fn literal(value: i64, span: Span) -> Node {
        Node::Literal { value, span }
    }

    /// Joins two subtrees; the new node spans from the start of `left` to the end of `right`.
    pub fn binary(operator: Token, left: Node, right: Node) -> Node {
        let span = Span {
            start: left.get_span().start,
            end: right.get_span().end,
        };

        Node::BinaryOp {
            operator,
            left: Box::new(left),
            right: Box::new(right),
            span,
        }
    }

    /// Converts a single token into a leaf.
    ///
    /// Only number tokens are leaves; anything else is `InvalidNodeType`.
    pub fn from_token(token: &Token) -> Result<Node, Error> {
        if token.kind != TokenKind::Number {
            return Err(Error::new(
                ErrorImpl::InvalidNodeType { kind: token.kind },
                token.span.start,
            ));
        }

        match token.value.parse::<i64>() {
            Ok(value) => Ok(Node::literal(value, token.span.clone())),
            Err(_) => Err(Error::new(
                ErrorImpl::NumberParseError {
                    token: token.value.clone(),
                },
                token.span.start,
            )),
        }
    }

    pub fn get_span(&self) -> &Span {
        match self {
            Node::Literal { span, .. } => span,
            Node::BinaryOp { span, .. } => span,
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Node::Literal { .. })
    }

    // Swaps both children out for empty leaves.
    fn take_children(&mut self) -> Option<(Node, Node)> {
        match self {
            Node::Literal { .. } => None,
            Node::BinaryOp { left, right, .. } => Some((
                mem::replace(left.as_mut(), Node::literal(0, Span::default())),
                mem::replace(right.as_mut(), Node::literal(0, Span::default())),
            )),
        }
    }
}

// Chains are as long as the input, so children are released from a worklist
// instead of one nested drop per link.
impl Drop for Node {
    fn drop(&mut self) {
        let Some((left, right)) = self.take_children() else {
            return;
        };

        let mut pending = vec![left, right];
        while let Some(mut node) = pending.pop() {
            if let Some((left, right)) = node.take_children() {
                pending.push(left);
                pending.push(right);
            }
        }
    }
}

// Prefix notation, e.g. `(- (+ 1 2) 3)`. The left spine is written in a loop;
// only right children recurse.
impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut spine = vec![];
        let mut current = self;

        let value = loop {
            match current {
                Node::Literal { value, .. } => break value,
                Node::BinaryOp {
                    operator,
                    left,
                    right,
                    ..
                } => {
                    spine.push((operator, right.as_ref()));
                    current = left.as_ref();
                }
            }
        };

        for (operator, _) in &spine {
            write!(f, "({} ", operator.value)?;
        }
        write!(f, "{}", value)?;
        for (_, right) in spine.iter().rev() {
            write!(f, " {})", right)?;
        }

        Ok(())
    }
}
