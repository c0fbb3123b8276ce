//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer literals
//! - Operators and delimiters
//! - Illegal bytes and end-of-input behaviour

use super::{
    lexer::{tokenize, Lexer},
    tokens::TokenKind,
};
use crate::Span;

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("fn let if else true false return");

    assert_eq!(tokens[0].kind, TokenKind::Function);
    assert_eq!(tokens[1].kind, TokenKind::Let);
    assert_eq!(tokens[2].kind, TokenKind::If);
    assert_eq!(tokens[3].kind, TokenKind::Else);
    assert_eq!(tokens[4].kind, TokenKind::True);
    assert_eq!(tokens[5].kind, TokenKind::False);
    assert_eq!(tokens[6].kind, TokenKind::Return);
    assert_eq!(tokens[7].kind, TokenKind::EOF);
    assert_eq!(tokens[6].literal, "return");
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar _underscore CamelCase letter");

    let expected = ["foo", "bar", "_underscore", "CamelCase", "letter"];
    for (token, literal) in tokens.iter().zip(expected) {
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.literal, literal);
    }
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_digits_end_an_identifier() {
    let tokens = tokenize("foo1");

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].literal, "foo");
    assert_eq!(tokens[1].kind, TokenKind::Int);
    assert_eq!(tokens[1].literal, "1");
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_integers() {
    let tokens = tokenize("42 0 1234567890");

    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[0].literal, "42");
    assert_eq!(tokens[1].literal, "0");
    assert_eq!(tokens[2].literal, "1234567890");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_no_floats_or_signs() {
    let tokens = tokenize("-3.14");

    assert_eq!(tokens[0].kind, TokenKind::Dash);
    assert_eq!(tokens[1].kind, TokenKind::Int);
    assert_eq!(tokens[1].literal, "3");
    assert_eq!(tokens[2].kind, TokenKind::Illegal);
    assert_eq!(tokens[2].literal, ".");
    assert_eq!(tokens[3].kind, TokenKind::Int);
    assert_eq!(tokens[3].literal, "14");
}

#[test]
fn test_tokenize_operators() {
    let tokens = tokenize("= + - * / < > ! == !=");

    let expected = [
        TokenKind::Assign,
        TokenKind::Plus,
        TokenKind::Dash,
        TokenKind::Star,
        TokenKind::Slash,
        TokenKind::Less,
        TokenKind::Greater,
        TokenKind::Not,
        TokenKind::Equals,
        TokenKind::NotEquals,
        TokenKind::EOF,
    ];
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, expected);
    assert_eq!(tokens[8].literal, "==");
    assert_eq!(tokens[9].literal, "!=");
}

#[test]
fn test_compound_operators_without_spaces() {
    let tokens = tokenize("a==b!=!c=d");

    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        [
            TokenKind::Identifier,
            TokenKind::Equals,
            TokenKind::Identifier,
            TokenKind::NotEquals,
            TokenKind::Not,
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_delimiters() {
    let tokens = tokenize("( ) { } , ;");

    assert_eq!(tokens[0].kind, TokenKind::OpenParen);
    assert_eq!(tokens[1].kind, TokenKind::CloseParen);
    assert_eq!(tokens[2].kind, TokenKind::OpenCurly);
    assert_eq!(tokens[3].kind, TokenKind::CloseCurly);
    assert_eq!(tokens[4].kind, TokenKind::Comma);
    assert_eq!(tokens[5].kind, TokenKind::Semicolon);
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_simple_program() {
    let tokens = tokenize("let x = 42;");

    assert_eq!(tokens.len(), 6); // let, x, =, 42, ;, EOF
    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].literal, "x");
    assert_eq!(tokens[2].kind, TokenKind::Assign);
    assert_eq!(tokens[3].kind, TokenKind::Int);
    assert_eq!(tokens[3].literal, "42");
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_function_literal() {
    let tokens = tokenize("let add = fn(x, y) {\n  x + y;\n};");

    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        [
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::Function,
            TokenKind::OpenParen,
            TokenKind::Identifier,
            TokenKind::Comma,
            TokenKind::Identifier,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::Identifier,
            TokenKind::Plus,
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::CloseCurly,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_whitespace_handling() {
    let tokens = tokenize(" \t let \r\n  x\n=\t42  ");

    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].kind, TokenKind::Assign);
    assert_eq!(tokens[3].kind, TokenKind::Int);
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_illegal_byte_advances() {
    let tokens = tokenize("let x = @;");

    assert_eq!(tokens[3].kind, TokenKind::Illegal);
    assert_eq!(tokens[3].literal, "@");
    assert_eq!(tokens[3].span, Span::new(8, 9));
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_non_ascii_is_scanned_byte_by_byte() {
    // 'é' is two bytes in UTF-8
    let tokens = tokenize("é");

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].kind, TokenKind::Illegal);
    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[1].span, Span::new(1, 2));
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_eof_is_idempotent() {
    let mut lexer = Lexer::new("x");

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    for _ in 0..3 {
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::EOF);
        assert_eq!(token.literal, "");
        assert_eq!(token.span, Span::new(1, 1));
    }
    assert!(lexer.at_eof());
}

#[test]
fn test_empty_source() {
    let tokens = tokenize("");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
}

#[test]
fn test_iterator_stops_before_eof() {
    let literals: Vec<String> = Lexer::new("a + 1").map(|t| t.literal).collect();

    assert_eq!(literals, ["a", "+", "1"]);
}

#[test]
fn test_spans() {
    let tokens = tokenize("let ab == 12");

    assert_eq!(tokens[0].span, Span::new(0, 3));
    assert_eq!(tokens[1].span, Span::new(4, 6));
    assert_eq!(tokens[2].span, Span::new(7, 9));
    assert_eq!(tokens[3].span, Span::new(10, 12));
}

#[test]
fn test_token_display() {
    let tokens = tokenize("let ==");

    assert_eq!(tokens[0].to_string(), "{Type:LET Literal:let}");
    assert_eq!(tokens[1].to_string(), "{Type:== Literal:==}");
    assert_eq!(TokenKind::Identifier.to_string(), "IDENT");
    assert_eq!(TokenKind::Int.to_string(), "INT");
}
