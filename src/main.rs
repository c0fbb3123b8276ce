use std::{
    env, fs,
    io::{self, IsTerminal},
    path::{Path, PathBuf},
    time::Instant,
};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use frontend::{
    parser::parser::parse,
    render_diagnostic,
    repl::{self, ReplConfig, ReplMode},
};
use tracing::info;
use tracing_subscriber::{
    filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, Layer, Registry,
};

/// Tokenize and parse programs, from a file or line by line.
#[derive(Parser, Debug)]
#[command(name = "frontend", version)]
struct Args {
    /// Source file to parse. Starts the read-loop when omitted.
    file: Option<PathBuf>,

    /// What the read-loop does with each line
    #[arg(long, value_enum, default_value_t = ReplMode::Tokens)]
    mode: ReplMode,

    /// Prompt printed before each line
    #[arg(long, default_value = repl::PROMPT)]
    prompt: String,

    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

fn init_logging(level: LogLevel) {
    let filter = LevelFilter::from_level(level.into());

    // stdout belongs to the read-loop
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .with_level(true)
        .with_ansi(io::stderr().is_terminal())
        .compact()
        .with_filter(filter);

    Registry::default().with(layer).init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_level);

    if let Some(file) = &args.file {
        return parse_file(file);
    }

    let user = env::var("USER")
        .or_else(|_| env::var("USERNAME"))
        .unwrap_or_else(|_| String::from("there"));
    println!("Welcome {}!", user);
    println!("Type in a line of code and see how it is read.");

    let config = ReplConfig {
        prompt: args.prompt,
        mode: args.mode,
    };
    repl::start(io::stdin().lock(), io::stdout(), &config).context("read-loop failed")
}

fn parse_file(path: &Path) -> Result<()> {
    let source =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let start = Instant::now();
    let (parser, program) = parse(&source);
    info!("Parsed {} in {:?}", path.display(), start.elapsed());

    let diagnostics = parser.diagnostics();
    if !diagnostics.is_empty() {
        for error in diagnostics {
            eprintln!("-> {}", path.display());
            eprintln!("{}\n", render_diagnostic(&source, error));
        }
        bail!("{} error(s) in {}", diagnostics.len(), path.display());
    }

    println!("{}", program);
    Ok(())
}
