use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Span};

/// A recorded, non-fatal parse diagnostic.
///
/// `Display` yields the stable message of the underlying [`ErrorImpl`].
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    span: Span,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, span: Span) -> Self {
        Error {
            internal_error: error_impl,
            span,
        }
    }

    pub fn get_span(&self) -> Span {
        self.span
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match self.get_kind() {
            ErrorImpl::UnexpectedPeek { .. } => "UnexpectedPeek",
            ErrorImpl::NoPrefixHandler { .. } => "NoPrefixHandler",
            ErrorImpl::IntegerParse { .. } => "IntegerParse",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match self.get_kind() {
            ErrorImpl::UnexpectedPeek { expected, found } => ErrorTip::Suggestion(format!(
                "expected `{}`, found `{}`",
                expected, found
            )),
            ErrorImpl::NoPrefixHandler { kind: TokenKind::Illegal } => ErrorTip::None,
            ErrorImpl::NoPrefixHandler { kind } => ErrorTip::Suggestion(format!(
                "`{}` cannot start an expression",
                kind
            )),
            ErrorImpl::IntegerParse { literal } => ErrorTip::Suggestion(format!(
                "Invalid integer: `{}`, is it above the 64-bit limit?",
                literal
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("expected next token to be: {expected}, instead got: {found}")]
    UnexpectedPeek { expected: TokenKind, found: TokenKind },
    #[error("No prefix parse function found for token: {kind}")]
    NoPrefixHandler { kind: TokenKind },
    #[error("Could not parse: {literal:?} as integer")]
    IntegerParse { literal: String },
}
