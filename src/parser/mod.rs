//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that pulls tokens from the lexer and
//! builds a Program. It uses a Pratt parser for expressions with operator
//! precedence and handles:
//!
//! - Statement parsing (`let`, `return`, expression statements)
//! - Expression parsing (identifiers, integers, prefix and binary operators)
//! - Error collection without aborting the parse
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
