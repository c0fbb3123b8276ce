use tracing::trace;

use crate::MK_TOKEN;

use super::tokens::{lookup_ident, Token, TokenKind};

/// Pull-based scanner over a single source buffer.
///
/// Classification is byte-wise; multi-byte sequences are never treated as
/// one character.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: Vec<u8>,
    pos: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            source: source.as_bytes().to_vec(),
            pos: 0,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn at(&self) -> Option<u8> {
        self.source.get(self.pos).copied()
    }

    pub fn peek(&self) -> Option<u8> {
        self.source.get(self.pos + 1).copied()
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Scans the next token. Once the source is exhausted every call returns `EOF`.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        if self.at_eof() {
            let end = self.source.len();
            return MK_TOKEN!(TokenKind::EOF, String::new(), end, end);
        }

        let ch = self.source[self.pos];

        let token = match ch {
            b'=' => self.single_or_pair(b'=', TokenKind::Assign, TokenKind::Equals),
            b'!' => self.single_or_pair(b'=', TokenKind::Not, TokenKind::NotEquals),
            b'+' => self.single(TokenKind::Plus),
            b'-' => self.single(TokenKind::Dash),
            b'*' => self.single(TokenKind::Star),
            b'/' => self.single(TokenKind::Slash),
            b'<' => self.single(TokenKind::Less),
            b'>' => self.single(TokenKind::Greater),
            b',' => self.single(TokenKind::Comma),
            b';' => self.single(TokenKind::Semicolon),
            b'(' => self.single(TokenKind::OpenParen),
            b')' => self.single(TokenKind::CloseParen),
            b'{' => self.single(TokenKind::OpenCurly),
            b'}' => self.single(TokenKind::CloseCurly),
            c if is_letter(c) => self.read_word(),
            c if c.is_ascii_digit() => self.read_number(),
            // Always consumes one byte so scanning makes progress.
            _ => self.single(TokenKind::Illegal),
        };

        trace!(kind = %token.kind, literal = %token.literal, start = token.span.start, "scanned token");
        token
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\r' | b'\n') = self.at() {
            self.advance_n(1);
        }
    }

    fn single(&mut self, kind: TokenKind) -> Token {
        let start = self.pos;
        let literal = self.slice(start, start + 1);
        self.advance_n(1);
        MK_TOKEN!(kind, literal, start, self.pos)
    }

    fn single_or_pair(&mut self, second: u8, single: TokenKind, pair: TokenKind) -> Token {
        if self.peek() != Some(second) {
            return self.single(single);
        }

        let start = self.pos;
        let literal = self.slice(start, start + 2);
        self.advance_n(2);
        MK_TOKEN!(pair, literal, start, self.pos)
    }

    fn read_word(&mut self) -> Token {
        let start = self.pos;
        while self.at().is_some_and(is_letter) {
            self.advance_n(1);
        }

        let literal = self.slice(start, self.pos);
        MK_TOKEN!(lookup_ident(&literal), literal, start, self.pos)
    }

    fn read_number(&mut self) -> Token {
        let start = self.pos;
        while self.at().is_some_and(|c| c.is_ascii_digit()) {
            self.advance_n(1);
        }

        MK_TOKEN!(TokenKind::Int, self.slice(start, self.pos), start, self.pos)
    }

    fn slice(&self, start: usize, end: usize) -> String {
        self.source[start..end].iter().map(|x| *x as char).collect()
    }
}

impl Iterator for Lexer {
    type Item = Token;

    /// Yields tokens up to, but not including, `EOF`.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.is(TokenKind::EOF) {
            None
        } else {
            Some(token)
        }
    }
}

fn is_letter(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}

/// Scans the whole source, including the trailing `EOF` token.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lex = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.is(TokenKind::EOF);
        tokens.push(token);

        if done {
            break;
        }
    }

    tokens
}
