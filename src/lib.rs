//! Core library for `brook`: lexer, parser, AST, environment, and
//! tree-walking evaluator. The CLI driver (REPL vs. file mode, process
//! exit codes, stdin/stdout/stderr plumbing) lives in `main.rs`, outside
//! this crate's public surface, per the driver-owned-state design.

pub mod ast;
pub mod environment;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod reporter;
pub mod token;
pub mod value;

use environment::Environment;
use reporter::Reporter;

/// Lexes, parses, and — if no syntactic error was reported — evaluates
/// `source` as a complete program, writing `print` output to `stdout`.
///
/// Reports no outcome of its own; the caller reads `reporter`'s own
/// `had_error`/`had_runtime_error` flags afterward — the REPL uses them to
/// decide whether to reset between lines, and the file-mode driver uses
/// them to pick the `65` (syntax) vs. `70` (runtime) exit code.
pub fn run(source: &str, env: &Environment, reporter: &mut dyn Reporter, stdout: &mut dyn std::io::Write) {
    let tokens = lexer::Lexer::new(source).scan_tokens(reporter);
    let statements = parser::parse(tokens, reporter);

    // evaluation is skipped entirely if any syntactic error was reported,
    // per the "had syntactic error gates parse->evaluate" contract.
    if reporter.had_error() {
        return;
    }

    let mut interpreter = interpreter::Interpreter::new(stdout);
    interpreter.interpret(&statements, env, reporter);
}
