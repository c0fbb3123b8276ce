use crate::{
    ast::{
        expressions::IdentifierExpr,
        statements::{ExpressionStmt, LetStmt, ReturnStmt, Stmt},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let stmt_fn = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied();

    match stmt_fn {
        Some(stmt_fn) => stmt_fn(parser),
        None => parse_expression_stmt(parser),
    }
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, BindingPower::Lowest)?;

    skip_optional_semicolon(parser);

    Ok(Stmt::Expression(ExpressionStmt { token, expression }))
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::Identifier)?;
    let name_token = parser.current_token().clone();
    let name = IdentifierExpr {
        value: name_token.literal.clone(),
        token: name_token,
    };

    parser.expect_peek(TokenKind::Assign)?;
    parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest)?;
    skip_optional_semicolon(parser);

    Ok(Stmt::Let(LetStmt { token, name, value }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();
    parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest)?;
    skip_optional_semicolon(parser);

    Ok(Stmt::Return(ReturnStmt { token, value }))
}

/// Terminators are optional; anything other than `;` is left for the next statement.
fn skip_optional_semicolon(parser: &mut Parser) {
    if parser.peek_is(TokenKind::Semicolon) {
        parser.advance();
    }
}
