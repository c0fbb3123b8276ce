#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod repl;

/// Byte range of the source text a token (or diagnostic) refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }
}

/// Returns the 1-based line number, the line text and the column of `position`.
///
/// A position at or past the end of the source resolves to the end of the last line.
pub fn get_line_at_position(content: &str, position: usize) -> (usize, String, usize) {
    let mut start = 0;
    let mut line_number = 1;
    let mut last = (1, String::new(), 0);

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&position) {
            return (line_number, line.to_string(), position - start);
        }

        last = (line_number, line.to_string(), line.len());
        start = end;
        line_number += 1;
    }

    last
}


/// Formats a diagnostic with the offending source line and a caret under it.
///
/// ```text
/// Error: UnexpectedPeek (expected `=`, found `INT`)
///   |
/// 1 | let x 5;
///   | ------^
/// ```
pub fn render_diagnostic(source: &str, error: &Error) -> String {
    let (line, line_text, line_pos) = get_line_at_position(source, error.get_span().start);

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
    out.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
