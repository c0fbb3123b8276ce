use std::collections::HashMap;

use crate::{
    ast::{expressions::Expr, statements::Stmt},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Operator precedence, lowest to highest.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    // Reserved for call expressions
    Call,
}

/// Tokens parsed by `parse_prefix_expr`.
pub const PREFIX_OPERATORS: [TokenKind; 2] = [TokenKind::Dash, TokenKind::Not];

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;
pub type LEDHandler = fn(&mut Parser, Expr, BindingPower) -> Result<Expr, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Equality
    parser.led(TokenKind::Equals, BindingPower::Equals, parse_infix_expr);
    parser.led(TokenKind::NotEquals, BindingPower::Equals, parse_infix_expr);

    // Relational
    parser.led(TokenKind::Less, BindingPower::LessGreater, parse_infix_expr);
    parser.led(TokenKind::Greater, BindingPower::LessGreater, parse_infix_expr);

    // Additive and multiplicative
    parser.led(TokenKind::Plus, BindingPower::Sum, parse_infix_expr);
    parser.led(TokenKind::Dash, BindingPower::Sum, parse_infix_expr);
    parser.led(TokenKind::Star, BindingPower::Product, parse_infix_expr);
    parser.led(TokenKind::Slash, BindingPower::Product, parse_infix_expr);

    // Literals and symbols
    parser.nud(TokenKind::Identifier, parse_identifier_expr);
    parser.nud(TokenKind::Int, parse_integer_expr);
    for kind in PREFIX_OPERATORS {
        parser.nud(kind, parse_prefix_expr);
    }

    // Statements
    parser.stmt(TokenKind::Let, parse_let_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
