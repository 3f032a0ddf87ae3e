use std::error::Error;

use test_support::{run_script, Expected};

#[test]
fn operator_precedence() -> Result<(), Box<dyn Error>> {
    run_script(
        "operator_precedence",
        "print 1 + 2 * 3;",
        Expected {
            stdout: "7\n",
            stderr: "",
            code: 0,
        },
    )
}

#[test]
fn variables_add_together() -> Result<(), Box<dyn Error>> {
    run_script(
        "variables_add_together",
        "var a = 1; var b = 2; print a + b;",
        Expected {
            stdout: "3\n",
            stderr: "",
            code: 0,
        },
    )
}

#[test]
fn division_by_zero_yields_infinity_not_a_runtime_error() -> Result<(), Box<dyn Error>> {
    run_script(
        "division_by_zero_yields_infinity",
        "print 1 / 0;",
        Expected {
            stdout: "Infinity\n",
            stderr: "",
            code: 0,
        },
    )
}

#[test]
fn string_plus_number_is_a_runtime_error() -> Result<(), Box<dyn Error>> {
    run_script(
        "string_plus_number_is_a_runtime_error",
        r#"print "a" + 1;"#,
        Expected {
            stdout: "",
            stderr: "Operands must be two numbers or two strings.\n[line 1]\n",
            code: 70,
        },
    )
}
