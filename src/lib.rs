#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod calculator;
pub mod config;
pub mod errors;
pub mod evaluator;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod postfix;

extern crate regex;

pub use crate::calculator::calculator::{calculate, Calculator};

/// Byte offset into the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Position(pub usize);

#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line containing byte offset `position`.
///
/// Returns the 1-based line number, the line without its newline, and the
/// offset of `position` within the line. Offsets past the end of `source`
/// land at the end of the last line.
pub fn get_line_at_position(source: &str, position: usize) -> (usize, String, usize) {
    let pos = position.min(source.len());

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if pos < end || end == source.len() {
            let line_pos = line
                .get(..pos - start)
                .map(|prefix| prefix.chars().count())
                .unwrap_or(pos - start);
            return (line_number, line.trim_end_matches('\n').to_string(), line_pos);
        }

        start = end;
        line_number += 1;
    }

    (line_number, String::new(), 0)
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_get_line_at_position() {
        let source = "1 + 2\n( 3 - x )\n";

        let (line_number, line, line_pos) = super::get_line_at_position(source, 4);
        assert_eq!(line_number, 1);
        assert_eq!(line, "1 + 2");
        assert_eq!(line_pos, 4);

        let (line_number, line, line_pos) = super::get_line_at_position(source, 14);
        assert_eq!(line_number, 2);
        assert_eq!(line, "( 3 - x )");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_at_end_of_input() {
        let (line_number, line, line_pos) = super::get_line_at_position("( 1 + 2", 7);
        assert_eq!(line_number, 1);
        assert_eq!(line, "( 1 + 2");
        assert_eq!(line_pos, 7);

        assert_eq!(super::get_line_at_position("", 0), (1, String::new(), 0));
    }

    #[test]
    fn test_positions_past_u32_range() {
        let far = u32::MAX as usize + 7;
        let position = super::Position(far);

        assert!(position > super::Position(u32::MAX as usize));
        assert_eq!(
            super::get_line_at_position("1 + 2", position.0),
            (1, "1 + 2".to_string(), 5)
        );
    }

    #[test]
    fn test_format_error() {
        let error = crate::calculate("  1 + x").unwrap_err();
        let rendered = super::format_error(&error, "  1 + x");

        assert_eq!(
            rendered,
            "Error: UnexpectedInput (Unexpected input: `x`, are the tokens separated by whitespace?)\n  |\n1 | 1 + x\n  | ----^\n"
        );
    }
}

/// Renders an error as a caret diagram under the offending line.
pub fn format_error(error: &Error, source: &str) -> String {
    /*
        Error: name (tip)
          |
        1 | 1 + x
          | ----^
    */

    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.chars().take_while(|c| c.is_whitespace()).count();
    (string.chars().skip(start).collect(), start)
}
