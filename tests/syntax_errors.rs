use std::error::Error;

use test_support::{run_script, Expected};

#[test]
fn missing_semicolon_after_var_declaration_is_a_syntax_error() -> Result<(), Box<dyn Error>> {
    run_script(
        "missing_semicolon_after_var_declaration",
        "var a = 1 print a;",
        Expected {
            stdout: "",
            stderr: "[line 1] Error  at 'print' : Expect ';' after variable declaration.\n",
            code: 65,
        },
    )
}

#[test]
fn bare_semicolon_is_a_syntax_error() -> Result<(), Box<dyn Error>> {
    run_script(
        "bare_semicolon_is_a_syntax_error",
        ";",
        Expected {
            stdout: "",
            stderr: "[line 1] Error  at ';' : Expect expression.\n",
            code: 65,
        },
    )
}

#[test]
fn empty_program_exits_cleanly() -> Result<(), Box<dyn Error>> {
    run_script(
        "empty_program_exits_cleanly",
        "",
        Expected {
            stdout: "",
            stderr: "",
            code: 0,
        },
    )
}

#[test]
fn invalid_assignment_target_is_reported_and_recovers() -> Result<(), Box<dyn Error>> {
    run_script(
        "invalid_assignment_target_is_reported_and_recovers",
        "1 + 2 = 3;",
        Expected {
            stdout: "",
            stderr: "[line 1] Error  at '=' : Invalid assignment target.\n",
            code: 65,
        },
    )
}
