use std::error::Error;

use test_support::{run_script, Expected};

#[test]
fn or_returns_the_truthy_operand_not_a_bool() -> Result<(), Box<dyn Error>> {
    run_script(
        "or_returns_the_truthy_operand_not_a_bool",
        r#"print nil or "fallback";"#,
        Expected {
            stdout: "fallback\n",
            stderr: "",
            code: 0,
        },
    )
}

#[test]
fn and_returns_the_second_operand_when_first_is_truthy() -> Result<(), Box<dyn Error>> {
    run_script(
        "and_returns_the_second_operand_when_first_is_truthy",
        "print 1 and 2;",
        Expected {
            stdout: "2\n",
            stderr: "",
            code: 0,
        },
    )
}
