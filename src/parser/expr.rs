use crate::{
    ast::expressions::{Expr, IdentifierExpr, InfixExpr, IntegerExpr, PrefixExpr},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{BindingPower, PREFIX_OPERATORS},
    parser::Parser,
};

/// Parses one expression whose operators all bind tighter than `bp`.
///
/// On return `current` is the last token of the expression.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud_fn) = parser.get_nud_lookup().get(&token_kind).copied() else {
        return Err(Error::new(
            ErrorImpl::NoPrefixHandler { kind: token_kind },
            parser.current_token().span,
        ));
    };

    let mut left = nud_fn(parser)?;

    // While the next operator binds tighter than bp, fold it into lhs
    while !parser.peek_is(TokenKind::Semicolon) && bp < parser.peek_precedence() {
        let Some(led_fn) = parser
            .get_led_lookup()
            .get(&parser.peek_token().kind)
            .copied()
        else {
            return Ok(left);
        };

        let operator_bp = parser.peek_precedence();
        parser.advance();

        left = led_fn(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_identifier_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    Ok(Expr::Identifier(IdentifierExpr {
        value: token.literal.clone(),
        token,
    }))
}

pub fn parse_integer_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    match token.literal.parse::<i64>() {
        Ok(value) => Ok(Expr::Integer(IntegerExpr { token, value })),
        Err(_) => Err(Error::new(
            ErrorImpl::IntegerParse {
                literal: token.literal.clone(),
            },
            token.span,
        )),
    }
}

/// A run of prefix operators is collected in one pass, so `- - - a` costs
/// no extra stack per operator.
pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let mut operators = vec![parser.current_token().clone()];
    parser.advance();

    while PREFIX_OPERATORS.contains(&parser.current_token_kind()) {
        operators.push(parser.current_token().clone());
        parser.advance();
    }

    let mut rhs = parse_expr(parser, BindingPower::Prefix)?;

    // Innermost operator wraps the operand first
    for operator_token in operators.into_iter().rev() {
        rhs = Expr::Prefix(PrefixExpr {
            operator: operator_token.literal.clone(),
            token: operator_token,
            right: Box::new(rhs),
        });
    }

    Ok(rhs)
}

/// `bp` is the operator's own binding power, so equal-precedence operators
/// associate to the left.
pub fn parse_infix_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, bp)?;

    Ok(Expr::Infix(InfixExpr {
        operator: operator_token.literal.clone(),
        token: operator_token,
        left: Box::new(left),
        right: Box::new(right),
    }))
}
