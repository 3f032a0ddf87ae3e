use std::{
    error::Error,
    io::Write,
    path::PathBuf,
    process::{Command, Output, Stdio},
};

const BROOK_PATH: &str = "./target/debug/brook";

/// The observable surface of a single interpreter run: stdout, stderr,
/// and exit code.
pub struct Expected<'a> {
    pub stdout: &'a str,
    pub stderr: &'a str,
    pub code: i32,
}

impl<'a> Expected<'a> {
    fn assert_matches(&self, output: &Output) -> Result<(), Box<dyn Error>> {
        assert_eq!(std::str::from_utf8(&output.stdout)?, self.stdout, "stdout mismatch");
        assert_eq!(std::str::from_utf8(&output.stderr)?, self.stderr, "stderr mismatch");
        assert_eq!(output.status.code(), Some(self.code), "exit code mismatch");
        Ok(())
    }
}

/// A scratch `.brook` script path unique to this test and process —
/// integration tests in one binary run as threads of the same process,
/// so the caller-supplied `label` (conventionally the test's own name)
/// keeps concurrent tests from clobbering each other's fixture file.
fn scratch_script_path(label: &str) -> PathBuf {
    std::env::temp_dir().join(format!("brook-test-{}-{label}.brook", std::process::id()))
}

/// Writes `source` to a scratch script, runs the built `brook` binary on
/// it in file mode, and asserts the captured stdout/stderr/exit code
/// match `expected`. This is the interpreter-binary analogue of the
/// teacher's `check_compilation` — there is no separate compile step
/// here, so the binary under test runs the script directly.
pub fn run_script(label: &str, source: &str, expected: Expected) -> Result<(), Box<dyn Error>> {
    let path = scratch_script_path(label);
    std::fs::write(&path, source)?;

    let result = Command::new(BROOK_PATH).arg(&path).output();
    let _ = std::fs::remove_file(&path);
    let output = result?;

    expected.assert_matches(&output)
}

/// Drives the REPL over stdin, feeding one line at a time, and asserts
/// the combined stdout/stderr/exit code match `expected`. Used for the
/// REPL-mode contract (per-line error reset, clean exit on EOF).
pub fn run_repl(lines: &[&str], expected: Expected) -> Result<(), Box<dyn Error>> {
    let mut child = Command::new(BROOK_PATH)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    {
        let stdin = child.stdin.as_mut().expect("piped stdin");
        for line in lines {
            writeln!(stdin, "{line}")?;
        }
    }

    let output = child.wait_with_output()?;
    expected.assert_matches(&output)
}

/// Runs `brook` with the given raw arguments (for usage-error and
/// multi-file-argument scenarios that never reach a script at all).
pub fn run_args(args: &[&str], expected: Expected) -> Result<(), Box<dyn Error>> {
    let output = Command::new(BROOK_PATH).args(args).output()?;
    expected.assert_matches(&output)
}
