//! Line-oriented read-loop.
//!
//! Each input line is scanned (or parsed) on its own; nothing carries over
//! between lines.

use std::io::{self, BufRead, Write};

use clap::ValueEnum;
use tracing::debug;

use crate::{lexer::lexer::Lexer, parser::parser::parse};

pub const PROMPT: &str = ">> ";

/// What the loop does with each line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReplMode {
    /// Print every token of the line
    #[default]
    Tokens,
    /// Parse the line and print the rendered program or its diagnostics
    Ast,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplConfig {
    pub prompt: String,
    pub mode: ReplMode,
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            prompt: String::from(PROMPT),
            mode: ReplMode::default(),
        }
    }
}

/// Runs the loop until `input` is exhausted.
pub fn start(input: impl BufRead, mut output: impl Write, config: &ReplConfig) -> io::Result<()> {
    let mut lines = input.lines();

    loop {
        write!(output, "{}", config.prompt)?;
        output.flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;
        debug!(mode = ?config.mode, len = line.len(), "read line");

        match config.mode {
            ReplMode::Tokens => {
                for token in Lexer::new(&line) {
                    writeln!(output, "{}", token)?;
                }
            }
            ReplMode::Ast => {
                let (parser, program) = parse(&line);
                let errors = parser.errors();

                if errors.is_empty() {
                    writeln!(output, "{}", program)?;
                } else {
                    for error in errors {
                        writeln!(output, "\t{}", error)?;
                    }
                }
            }
        }
    }
}
