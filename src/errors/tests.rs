//! Unit tests for error handling.
//!
//! This module contains tests for diagnostic messages and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::{render_diagnostic, Span};

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::NoPrefixHandler {
            kind: TokenKind::Illegal,
        },
        Span::new(10, 11),
    );

    assert_eq!(error.get_error_name(), "NoPrefixHandler");
    assert_eq!(error.get_span(), Span::new(10, 11));
}

#[test]
fn test_unexpected_peek_message() {
    let error = Error::new(
        ErrorImpl::UnexpectedPeek {
            expected: TokenKind::Assign,
            found: TokenKind::Int,
        },
        Span::new(6, 7),
    );

    assert_eq!(error.get_error_name(), "UnexpectedPeek");
    assert_eq!(
        error.to_string(),
        "expected next token to be: =, instead got: INT"
    );
}

#[test]
fn test_no_prefix_handler_message() {
    let error = Error::new(
        ErrorImpl::NoPrefixHandler {
            kind: TokenKind::Semicolon,
        },
        Span::default(),
    );

    assert_eq!(
        error.to_string(),
        "No prefix parse function found for token: ;"
    );
}

#[test]
fn test_integer_parse_message() {
    let error = Error::new(
        ErrorImpl::IntegerParse {
            literal: "99999999999999999999".to_string(),
        },
        Span::new(0, 20),
    );

    assert_eq!(error.get_error_name(), "IntegerParse");
    assert!(matches!(error.get_kind(), ErrorImpl::IntegerParse { .. }));
    assert_eq!(
        error.to_string(),
        "Could not parse: \"99999999999999999999\" as integer"
    );
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::NoPrefixHandler {
            kind: TokenKind::Illegal,
        },
        Span::default(),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::NoPrefixHandler {
            kind: TokenKind::CloseParen,
        },
        Span::default(),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "`)` cannot start an expression"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_render_diagnostic() {
    let source = "let a = 1;\n  let x 5;\n";
    let error = Error::new(
        ErrorImpl::UnexpectedPeek {
            expected: TokenKind::Assign,
            found: TokenKind::Int,
        },
        Span::new(19, 20),
    );

    let rendered = render_diagnostic(source, &error);
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(
        lines[0],
        "Error: UnexpectedPeek (expected `=`, found `INT`)"
    );
    assert_eq!(lines[1], "  |");
    assert_eq!(lines[2], "2 | let x 5;");
    assert_eq!(lines[3], "  | ------^");
}
