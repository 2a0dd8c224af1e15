//! Postfix (reverse Polish) support.
//!
//! An alternative to the recursive descent parser: infix input is reordered
//! with the shunting-yard algorithm and the tree is then assembled with a
//! stack. Text that is already postfix can be turned into a tree directly.
//! Both routes produce the same `Node` trees the recursive descent parser
//! does, so the evaluator is shared.

pub mod postfix;
