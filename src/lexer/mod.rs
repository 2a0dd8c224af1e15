//! Lexical analysis module for the calculator.
//!
//! This module contains the lexer (tokenizer) that converts input text
//! into a stream of tokens for parsing. It handles:
//!
//! - Splitting the input on runs of whitespace
//! - Classifying each word as a number, additive operator or parenthesis
//! - Token position tracking for error reporting

pub mod lexer;
pub mod tokens;
