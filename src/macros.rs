//! Utility macros for the front-end.
//!
//! - `MK_TOKEN!` - Creates a Token instance

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$literal` - The source text that produced the token
/// * `$start` - Byte offset of the first character
/// * `$end` - Byte offset one past the last character
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Int, "42".to_string(), 0, 2);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $literal:expr, $start:expr, $end:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            literal: $literal,
            span: $crate::Span {
                start: $start,
                end: $end,
            },
        }
    };
}
