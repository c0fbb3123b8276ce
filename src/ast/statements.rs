use std::fmt::{Display, Formatter, Result};

use crate::lexer::tokens::Token;

use super::expressions::{Expr, IdentifierExpr};

/// `let <name> = <value>;`
#[derive(Debug, Clone, PartialEq)]
pub struct LetStmt {
    pub token: Token,
    pub name: IdentifierExpr,
    pub value: Expr,
}

impl Display for LetStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} {} = {};", self.token.literal, self.name, self.value)
    }
}

/// `return <value>;`
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub token: Token,
    pub value: Expr,
}

impl Display for ReturnStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} {};", self.token.literal, self.value)
    }
}

/// A bare expression used as a statement. `token` is the expression's first token.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub token: Token,
    pub expression: Expr,
}

impl Display for ExpressionStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.expression)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Let(LetStmt),
    Return(ReturnStmt),
    Expression(ExpressionStmt),
}

impl Display for Stmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Stmt::Let(stmt) => write!(f, "{}", stmt),
            Stmt::Return(stmt) => write!(f, "{}", stmt),
            Stmt::Expression(stmt) => write!(f, "{}", stmt),
        }
    }
}
