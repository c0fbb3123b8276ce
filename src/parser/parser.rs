//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The parser keeps exactly two tokens of lookahead (`current` and `peek`)
//! and pulls a fresh token from its lexer every time it advances.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence

use std::collections::HashMap;

use tracing::debug;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    MK_TOKEN,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler,
        NUDLookup, StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// One parser owns one lexer for its whole life. Diagnostics are collected
/// rather than returned, so a parse always produces a (possibly partial)
/// Program.
pub struct Parser {
    /// The token source
    lexer: Lexer,
    /// The token being parsed
    current: Token,
    /// One token of lookahead
    peek: Token,
    /// Diagnostics recorded so far, in order
    errors: Vec<Error>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a new Parser over `lexer`.
    ///
    /// All lookup tables are populated and both `current` and `peek` are
    /// filled before this returns.
    pub fn new(lexer: Lexer) -> Self {
        let placeholder = MK_TOKEN!(TokenKind::EOF, String::new(), 0, 0);

        let mut parser = Parser {
            lexer,
            current: placeholder.clone(),
            peek: placeholder,
            errors: vec![],
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);

        parser.advance();
        parser.advance();
        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the lookahead token.
    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    /// Shifts `peek` into `current` and pulls the next token from the lexer.
    pub fn advance(&mut self) {
        self.current = std::mem::replace(&mut self.peek, self.lexer.next_token());
    }

    pub fn current_is(&self, kind: TokenKind) -> bool {
        self.current.is(kind)
    }

    pub fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.is(kind)
    }

    /// Advances only if the lookahead token is of the expected kind.
    ///
    /// # Returns
    ///
    /// Returns Ok(()) after advancing, otherwise an `UnexpectedPeek` error
    /// pointing at the lookahead token. The parser does not move on failure.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Result<(), Error> {
        if self.peek_is(expected_kind) {
            self.advance();
            Ok(())
        } else {
            Err(Error::new(
                ErrorImpl::UnexpectedPeek {
                    expected: expected_kind,
                    found: self.peek.kind,
                },
                self.peek.span,
            ))
        }
    }

    /// Binding power of the lookahead token; `Lowest` for non-operators.
    pub fn peek_precedence(&self) -> BindingPower {
        self.get_bp_lookup()
            .get(&self.peek.kind)
            .copied()
            .unwrap_or(BindingPower::Lowest)
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Diagnostic messages recorded so far, in the order they occurred.
    pub fn errors(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    /// Structured diagnostics, with the span of each offending token.
    pub fn diagnostics(&self) -> &[Error] {
        &self.errors
    }

    /// Parses statements until end-of-input.
    ///
    /// A statement that fails is recorded once in the diagnostics and left out
    /// of the Program; parsing resumes after the next `;`. Every iteration
    /// advances at least one token.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.current_is(TokenKind::EOF) {
            match parse_stmt(self) {
                Ok(stmt) => program.statements.push(stmt),
                Err(error) => {
                    debug!(%error, start = error.get_span().start, "dropping statement");
                    self.errors.push(error);
                    self.skip_statement();
                }
            }

            self.advance();
        }

        debug!(
            statements = program.len(),
            errors = self.errors.len(),
            "parsed program"
        );
        program
    }

    /// Advances until `current` is a `;` or EOF.
    fn skip_statement(&mut self) {
        while !self.current_is(TokenKind::Semicolon) && !self.current_is(TokenKind::EOF) {
            self.advance();
        }
    }
}

/// Parses source text into a Program.
///
/// This is the main entry point for parsing. It creates a lexer and a parser
/// over `source` and parses every statement until EOF.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance, whose `errors()` must be checked before trusting
///   the Program
/// - The parsed Program
pub fn parse(source: &str) -> (Parser, Program) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    (parser, program)
}
