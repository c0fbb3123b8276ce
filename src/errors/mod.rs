//! Error types and error handling for the front-end.
//!
//! This module defines the diagnostics the parser records. It includes:
//!
//! - Error structures carrying the span of the offending token
//! - Specific error variants whose messages are stable for tooling
//! - Helpful suggestions for the command-line renderer

pub mod errors;

#[cfg(test)]
mod tests;
