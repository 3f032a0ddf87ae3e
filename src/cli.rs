//! Everything needed for parsing the CLI arguments for `brook`.

use clap::{Parser, ValueEnum};

/// Struct containing the CLI configuration for `brook`.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// The script to run. Omit to start a REPL; more than one path is a
    /// usage error.
    pub files: Vec<std::path::PathBuf>,

    /// Specify the log level of the interpreter.
    #[arg(value_enum, short, long, default_value_t = LogLevel::default())]
    pub verbosity: LogLevel,

    /// Dump the lexed token stream (as JSON) to stderr before parsing.
    #[arg(long)]
    pub dump_tokens: bool,

    /// Dump the parsed statement list (as JSON) to stderr before
    /// evaluating.
    #[arg(long)]
    pub dump_ast: bool,
}

impl Cli {
    pub fn init() -> Self {
        Cli::parse()
    }
}

/// Enum for specifying the log level of `brook`.
#[derive(ValueEnum, Clone, Default, Debug)]
pub enum LogLevel {
    /// The default log level. Only critical errors will be logged.
    #[default]
    Error,

    /// Also logs warnings.
    Warn,

    /// Logs information about lexing/parsing/evaluating progress.
    Info,

    /// Logs grammar rules entered and block scopes entered/left.
    Debug,

    /// Logs every token produced and every statement executed.
    Trace,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl From<&LogLevel> for log::LevelFilter {
    fn from(value: &LogLevel) -> Self {
        match value {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}
