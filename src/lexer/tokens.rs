use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("fn", TokenKind::Function);
        map.insert("let", TokenKind::Let);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("return", TokenKind::Return);
        map
    };
}

/// Classifies a scanned word as a keyword or a plain identifier.
pub fn lookup_ident(word: &str) -> TokenKind {
    RESERVED_LOOKUP
        .get(word)
        .copied()
        .unwrap_or(TokenKind::Identifier)
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Illegal,
    EOF,

    Identifier,
    Int,

    Assign,    // =
    Plus,      // +
    Dash,      // -
    Star,      // *
    Slash,     // /
    Less,      // <
    Greater,   // >
    Not,       // !
    Equals,    // ==
    NotEquals, // !=

    Comma,
    Semicolon,
    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,

    // Reserved
    Function,
    Let,
    If,
    Else,
    True,
    False,
    Return,
}

impl TokenKind {
    /// The canonical name used in diagnostics and token dumps.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::EOF => "EOF",
            TokenKind::Identifier => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Dash => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Less => "<",
            TokenKind::Greater => ">",
            TokenKind::Not => "!",
            TokenKind::Equals => "==",
            TokenKind::NotEquals => "!=",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::OpenCurly => "{",
            TokenKind::CloseCurly => "}",
            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::Return => "RETURN",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{Type:{} Literal:{}}}", self.kind, self.literal)
    }
}

impl Token {
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}
