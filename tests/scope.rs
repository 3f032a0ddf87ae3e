use std::error::Error;

use test_support::{run_script, Expected};

#[test]
fn block_shadows_then_restores_outer_binding() -> Result<(), Box<dyn Error>> {
    run_script(
        "block_shadows_then_restores_outer_binding",
        r#"var a = "outer"; { var a = "inner"; print a; } print a;"#,
        Expected {
            stdout: "inner\nouter\n",
            stderr: "",
            code: 0,
        },
    )
}

#[test]
fn while_loop_counts_up() -> Result<(), Box<dyn Error>> {
    run_script(
        "while_loop_counts_up",
        "var i = 0; while (i < 3) { print i; i = i + 1; }",
        Expected {
            stdout: "0\n1\n2\n",
            stderr: "",
            code: 0,
        },
    )
}

#[test]
fn for_loop_desugars_and_counts_up() -> Result<(), Box<dyn Error>> {
    run_script(
        "for_loop_desugars_and_counts_up",
        "for (var i = 0; i < 2; i = i + 1) print i;",
        Expected {
            stdout: "0\n1\n",
            stderr: "",
            code: 0,
        },
    )
}
