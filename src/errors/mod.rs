//! Error types and error handling for the calculator.
//!
//! This module defines the error types shared by every stage of the
//! pipeline. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for tokenizing, parsing and evaluation
//! - Error names and suggestions used when rendering diagnostics

pub mod errors;
