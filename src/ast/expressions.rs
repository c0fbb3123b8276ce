use std::fmt::{Display, Formatter, Result};

use crate::{
    lexer::tokens::{Token, TokenKind},
    MK_TOKEN,
};

// LITERALS

/// Identifier Expression
#[derive(Debug, Clone, PartialEq)]
pub struct IdentifierExpr {
    pub token: Token,
    pub value: String,
}

impl Display for IdentifierExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.value)
    }
}

/// Integer Expression
/// `value` is always the exact base-10 value of `token.literal`.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerExpr {
    pub token: Token,
    pub value: i64,
}

impl Display for IntegerExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.token.literal)
    }
}

// COMPLEX

/// Prefix Expression
/// A unary operator (`-` or `!`) applied to its operand.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    pub token: Token,
    pub operator: String,
    pub right: Box<Expr>,
}

impl Display for PrefixExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "({}{})", self.operator, self.right)
    }
}

/// Infix Expression
/// A binary operation between two expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpr {
    pub token: Token,
    pub left: Box<Expr>,
    pub operator: String,
    pub right: Box<Expr>,
}

impl Display for InfixExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Identifier(IdentifierExpr),
    Integer(IntegerExpr),
    Prefix(PrefixExpr),
    Infix(InfixExpr),
}

impl Expr {
    pub fn get_token(&self) -> &Token {
        match self {
            Expr::Identifier(expr) => &expr.token,
            Expr::Integer(expr) => &expr.token,
            Expr::Prefix(expr) => &expr.token,
            Expr::Infix(expr) => &expr.token,
        }
    }
}

/// Pending output while rendering an expression tree.
enum Render<'a> {
    Expr(&'a Expr),
    Text(&'a str),
}

// Rendering and dropping walk an explicit stack, so operator chains of any
// length never recurse once per level.
impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let mut pending = vec![Render::Expr(self)];

        while let Some(item) = pending.pop() {
            match item {
                Render::Text(text) => f.write_str(text)?,
                Render::Expr(Expr::Identifier(expr)) => f.write_str(&expr.value)?,
                Render::Expr(Expr::Integer(expr)) => f.write_str(&expr.token.literal)?,
                Render::Expr(Expr::Prefix(expr)) => pending.extend([
                    Render::Text(")"),
                    Render::Expr(&*expr.right),
                    Render::Text(expr.operator.as_str()),
                    Render::Text("("),
                ]),
                Render::Expr(Expr::Infix(expr)) => pending.extend([
                    Render::Text(")"),
                    Render::Expr(&*expr.right),
                    Render::Text(" "),
                    Render::Text(expr.operator.as_str()),
                    Render::Text(" "),
                    Render::Expr(&*expr.left),
                    Render::Text("("),
                ]),
            }
        }

        Ok(())
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);

        while let Some(mut child) = pending.pop() {
            child.detach_children(&mut pending);
        }
    }
}

impl Expr {
    /// Moves operator children into `out`, leaving leaf placeholders behind.
    fn detach_children(&mut self, out: &mut Vec<Expr>) {
        match self {
            Expr::Identifier(_) | Expr::Integer(_) => {}
            Expr::Prefix(expr) => detach(&mut expr.right, out),
            Expr::Infix(expr) => {
                detach(&mut expr.left, out);
                detach(&mut expr.right, out);
            }
        }
    }
}

fn detach(child: &mut Box<Expr>, out: &mut Vec<Expr>) {
    if matches!(**child, Expr::Prefix(_) | Expr::Infix(_)) {
        let placeholder = Expr::Identifier(IdentifierExpr {
            token: MK_TOKEN!(TokenKind::Illegal, String::new(), 0, 0),
            value: String::new(),
        });
        out.push(*std::mem::replace(child, Box::new(placeholder)));
    }
}
