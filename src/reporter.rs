//! The diagnostic sink consumed by the lexer, parser, and evaluator.
//!
//! The core never decides exit codes or owns the "had error" flags — per
//! the driver-owned-state design, it only ever calls back into whatever
//! [`Reporter`] the caller supplies. `main.rs` is the one concrete
//! implementation that matters for the shipped binary; tests supply their
//! own in-memory reporter to assert on diagnostics without touching
//! stderr.

/// Receives diagnostics from the lexer, parser, and evaluator.
///
/// Implementations decide how (and whether) to surface a diagnostic, and
/// are responsible for any process-wide bookkeeping (such as "had
/// syntactic error" flags) the caller wants to derive from it.
pub trait Reporter {
    /// A lexical or syntactic diagnostic.
    ///
    /// `location` is empty for a lexer diagnostic (no specific token to
    /// blame), `"at '<lexeme>'"` for a parser diagnostic at a real token,
    /// or `"at end"` for a parser diagnostic at the EOF sentinel.
    fn report(&mut self, line: usize, location: &str, message: &str);

    /// An uncaught runtime error, reported with line attribution only.
    fn runtime_error(&mut self, line: usize, message: &str);

    /// Whether a lexical or syntactic diagnostic has been reported since
    /// the last reset. `run` consults this once, after parsing, to decide
    /// whether to gate evaluation — the one read the core ever needs from
    /// an otherwise write-only sink.
    fn had_error(&self) -> bool;
}

/// Formats a lexical/syntactic diagnostic exactly as the acceptance
/// format requires: `[line N] Error  <location>: <message>`.
pub fn format_report(line: usize, location: &str, message: &str) -> String {
    if location.is_empty() {
        format!("[line {line}] Error  : {message}")
    } else {
        format!("[line {line}] Error  {location} : {message}")
    }
}

/// Formats a runtime-error diagnostic: `<message>\n[line N]`.
pub fn format_runtime_error(line: usize, message: &str) -> String {
    format!("{message}\n[line {line}]")
}

/// A [`Reporter`] that writes to stderr and tracks the two process-wide
/// flags the driver uses to pick an exit code.
#[derive(Default)]
pub struct StderrReporter {
    pub had_error: bool,
    pub had_runtime_error: bool,
}

impl StderrReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the syntactic-error flag between REPL lines. The runtime
    /// error flag is intentionally left alone — `main` checks it once, at
    /// process exit, for file mode; the REPL never consults it.
    pub fn reset(&mut self) {
        self.had_error = false;
    }
}

impl Reporter for StderrReporter {
    fn report(&mut self, line: usize, location: &str, message: &str) {
        eprintln!("{}", format_report(line, location, message));
        self.had_error = true;
    }

    fn runtime_error(&mut self, line: usize, message: &str) {
        eprintln!("{}", format_runtime_error(line, message));
        self.had_runtime_error = true;
    }

    fn had_error(&self) -> bool {
        self.had_error
    }
}

/// A [`Reporter`] that discards every diagnostic. Used for the debug-dump
/// passes (`--dump-tokens`/`--dump-ast`), which re-lex/re-parse the source
/// purely to serialize its tokens/AST — routing those passes through
/// `StderrReporter` would print every diagnostic a second time, on top of
/// the real run that follows.
#[derive(Default)]
pub struct NullReporter {
    had_error: bool,
}

impl NullReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Reporter for NullReporter {
    fn report(&mut self, _line: usize, _location: &str, _message: &str) {
        self.had_error = true;
    }

    fn runtime_error(&mut self, _line: usize, _message: &str) {}

    fn had_error(&self) -> bool {
        self.had_error
    }
}
