//! The `calculate(text) -> i64` facade over parsing and evaluation.
//!
//! The parsing strategy is pluggable through `ExpressionParser`; the
//! evaluator is shared by all of them.

pub mod calculator;

#[cfg(test)]
mod tests;
