use std::fmt::{Display, Formatter, Result};

use super::{expressions::Expr, statements::Stmt};

/// Node Trait
///
/// Every AST node knows the literal of the token that introduced it and
/// renders itself as fully parenthesized source-like text.
pub trait Node: Display {
    /// Returns the literal of the node's leading token.
    fn token_literal(&self) -> &str;
}

/// Root of a parsed source: top-level statements in textual order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Node for Program {
    fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(|stmt| stmt.token_literal())
            .unwrap_or("")
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

impl Node for Stmt {
    fn token_literal(&self) -> &str {
        match self {
            Stmt::Let(stmt) => &stmt.token.literal,
            Stmt::Return(stmt) => &stmt.token.literal,
            Stmt::Expression(stmt) => &stmt.token.literal,
        }
    }
}

impl Node for Expr {
    fn token_literal(&self) -> &str {
        &self.get_token().literal
    }
}
