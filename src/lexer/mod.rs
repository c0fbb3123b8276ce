//! Lexical analysis module for the front-end.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into tokens on demand. It handles:
//!
//! - Recognition of keywords, identifiers and integer literals
//! - Single and two-character operators and delimiters
//! - Illegal bytes, which become `ILLEGAL` tokens instead of errors
//! - Token spans for diagnostics

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
