//! The `brook` binary: picks REPL or file mode, wires stdin/stdout/
//! stderr to the core, and maps the outcome to a process exit code.
//!
//! This file — along with `cli.rs` — is the "driver" the core
//! deliberately stays ignorant of: mode selection, file I/O, and exit
//! codes all live here, never inside `lib.rs`.

mod cli;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::Context;
use cli::Cli;
use log::info;

use brook::environment::Environment;
use brook::reporter::{NullReporter, StderrReporter};

const USAGE_EXIT: u8 = 64;
const SYNTAX_ERROR_EXIT: u8 = 65;
const RUNTIME_ERROR_EXIT: u8 = 70;
const IO_ERROR_EXIT: u8 = 74;

fn main() -> ExitCode {
    let args = Cli::init();

    simple_logger::init_with_level(log_level(&args.verbosity)).expect("logger already initialized");

    match args.files.as_slice() {
        [] => {
            run_repl();
            ExitCode::SUCCESS
        }
        [path] => match run_file(path, &args) {
            Ok(code) => ExitCode::from(code),
            Err(err) => {
                eprintln!("{err:#}");
                ExitCode::from(IO_ERROR_EXIT)
            }
        },
        _ => {
            eprintln!("Usage: brook [script]");
            ExitCode::from(USAGE_EXIT)
        }
    }
}

fn log_level(level: &cli::LogLevel) -> log::Level {
    match log::LevelFilter::from(level) {
        log::LevelFilter::Off | log::LevelFilter::Error => log::Level::Error,
        log::LevelFilter::Warn => log::Level::Warn,
        log::LevelFilter::Info => log::Level::Info,
        log::LevelFilter::Debug => log::Level::Debug,
        log::LevelFilter::Trace => log::Level::Trace,
    }
}

/// Reads the file as UTF-8, evaluates it once, and returns the exit code
/// the outcome maps to: `0` on success, `65` if a syntactic error was
/// reported, `70` if evaluation raised a runtime error.
fn run_file(path: &std::path::Path, args: &Cli) -> anyhow::Result<u8> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read '{}'", path.display()))?;

    let env = Environment::global();
    let mut reporter = StderrReporter::new();
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    if args.dump_tokens {
        dump_tokens(&source);
    }
    if args.dump_ast {
        dump_ast(&source);
    }

    brook::run(&source, &env, &mut reporter, &mut stdout);

    if reporter.had_runtime_error {
        Ok(RUNTIME_ERROR_EXIT)
    } else if reporter.had_error {
        Ok(SYNTAX_ERROR_EXIT)
    } else {
        Ok(0)
    }
}

/// `prompt` `> `, one line at a time, until EOF. A syntax or runtime
/// error on one line is reported but never ends the session; the
/// syntax-error flag resets before the next line is read.
fn run_repl() {
    info!("starting REPL");
    let env = Environment::global();
    let mut reporter = StderrReporter::new();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    loop {
        print!("> ");
        io::stdout().flush().expect("flush prompt");

        let mut line = String::new();
        let bytes_read = stdin.lock().read_line(&mut line).expect("read line from stdin");
        if bytes_read == 0 {
            break; // EOF
        }

        brook::run(&line, &env, &mut reporter, &mut stdout);
        reporter.reset();
    }
}

/// Re-lexes `source` purely to dump its token stream — diagnostics are
/// discarded here (via [`NullReporter`]) since the real run that follows
/// reports them properly against the shared stderr reporter.
fn dump_tokens(source: &str) {
    let mut reporter = NullReporter::new();
    let tokens = brook::lexer::Lexer::new(source).scan_tokens(&mut reporter);
    eprintln!("{}", serde_json::to_string_pretty(&tokens).expect("serialize tokens"));
}

/// Re-lexes and re-parses `source` purely to dump its statement list —
/// diagnostics are discarded here for the same reason as [`dump_tokens`].
fn dump_ast(source: &str) {
    let mut reporter = NullReporter::new();
    let tokens = brook::lexer::Lexer::new(source).scan_tokens(&mut reporter);
    let statements = brook::parser::parse(tokens, &mut reporter);
    eprintln!(
        "{}",
        serde_json::to_string_pretty(&statements).expect("serialize AST")
    );
}
