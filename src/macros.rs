//! Utility macros for the calculator.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_SPAN!` - Creates a Span from two byte offsets

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a Span covering the byte offsets `$start..$end`.
#[macro_export]
macro_rules! MK_SPAN {
    ($start:expr, $end:expr) => {
        $crate::Span {
            start: $crate::Position($start),
            end: $crate::Position($end),
        }
    };
}
