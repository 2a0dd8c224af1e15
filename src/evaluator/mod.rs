//! Tree-walking evaluation.
//!
//! Reduces a parsed `Node` to a single `i64`. Evaluation is pure: the tree
//! is borrowed, never modified, and the same tree always yields the same
//! result under the same overflow policy.

pub mod evaluator;

#[cfg(test)]
mod tests;
