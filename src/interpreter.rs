//! Tree-walking evaluator.
//!
//! Where the teacher's `Interpreter` keeps one `Scope` stack mutated in
//! place across the whole run, this evaluator threads an [`Environment`]
//! handle down the call stack instead. A block clones its caller's
//! environment into a fresh child, evaluates into that child, and then
//! simply lets it drop — there is no explicit "restore the old scope"
//! step to forget on an error path, because the caller's own handle was
//! never touched in the first place.

use std::io::Write;

use crate::ast::{Expr, LiteralValue, Stmt};
use crate::environment::Environment;
use crate::reporter::Reporter;
use crate::token::{Token, TokenKind};
use crate::value::Value;

/// A runtime error: the offending operator/identifier token's line, plus
/// a message. Unwinds every in-progress block evaluation and is caught
/// only at [`Interpreter::interpret`]'s boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeError {
    pub line: usize,
    pub message: String,
}

impl RuntimeError {
    fn new(token: &Token, message: impl Into<String>) -> Self {
        Self {
            line: token.line,
            message: message.into(),
        }
    }
}

pub struct Interpreter<'out> {
    stdout: &'out mut dyn Write,
}

impl<'out> Interpreter<'out> {
    pub fn new(stdout: &'out mut dyn Write) -> Self {
        Self { stdout }
    }

    /// Evaluates a statement list against `env` in order. Stops at the
    /// first runtime error (reported through `reporter`); statements
    /// before the failure have already taken effect.
    pub fn interpret(&mut self, statements: &[Stmt], env: &Environment, reporter: &mut dyn Reporter) {
        for statement in statements {
            if let Err(err) = self.execute(statement, env) {
                reporter.runtime_error(err.line, &err.message);
                return;
            }
        }
    }

    fn execute(&mut self, stmt: &Stmt, env: &Environment) -> Result<(), RuntimeError> {
        log::trace!("executing statement {stmt:?}");
        match stmt {
            Stmt::Expression(expr) => {
                self.evaluate(expr, env)?;
                Ok(())
            }
            Stmt::Print(expr) => {
                let value = self.evaluate(expr, env)?;
                writeln!(self.stdout, "{value}").expect("write to stdout");
                Ok(())
            }
            Stmt::Var { name, initializer } => {
                let value = match initializer {
                    Some(expr) => self.evaluate(expr, env)?,
                    None => Value::Nil,
                };
                env.define(name.lexeme.clone(), value);
                Ok(())
            }
            Stmt::Block(statements) => {
                log::debug!("entering block scope");
                let inner = env.child();
                for statement in statements {
                    self.execute(statement, &inner)?;
                }
                log::debug!("leaving block scope");
                Ok(())
            }
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.evaluate(condition, env)?.is_truthy() {
                    self.execute(then_branch, env)
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch, env)
                } else {
                    Ok(())
                }
            }
            Stmt::While { condition, body } => {
                while self.evaluate(condition, env)?.is_truthy() {
                    self.execute(body, env)?;
                }
                Ok(())
            }
        }
    }

    fn evaluate(&mut self, expr: &Expr, env: &Environment) -> Result<Value, RuntimeError> {
        match expr {
            Expr::Literal(literal) => Ok(literal_value(literal)),
            Expr::Grouping(inner) => self.evaluate(inner, env),
            Expr::Unary { op, operand } => self.evaluate_unary(op, operand, env),
            Expr::Binary { left, op, right } => self.evaluate_binary(left, op, right, env),
            Expr::Logical { left, op, right } => self.evaluate_logical(left, op, right, env),
            Expr::Variable { name } => env
                .get(&name.lexeme)
                .ok_or_else(|| RuntimeError::new(name, format!("Undefined variable '{}'.", name.lexeme))),
            Expr::Assign { name, value } => {
                let value = self.evaluate(value, env)?;
                if env.assign(&name.lexeme, value.clone()) {
                    Ok(value)
                } else {
                    Err(RuntimeError::new(name, format!("Undefined variable '{}'.", name.lexeme)))
                }
            }
        }
    }

    fn evaluate_unary(&mut self, op: &Token, operand: &Expr, env: &Environment) -> Result<Value, RuntimeError> {
        let value = self.evaluate(operand, env)?;
        match op.kind {
            TokenKind::Minus => match value {
                Value::Number(n) => Ok(Value::Number(-n)),
                _ => Err(RuntimeError::new(op, "Operand must be a number.")),
            },
            TokenKind::Bang => Ok(Value::Bool(!value.is_truthy())),
            _ => unreachable!("parser never produces a unary op other than '!' or '-'"),
        }
    }

    fn evaluate_binary(
        &mut self,
        left: &Expr,
        op: &Token,
        right: &Expr,
        env: &Environment,
    ) -> Result<Value, RuntimeError> {
        // left-to-right, exactly once each.
        let left = self.evaluate(left, env)?;
        let right = self.evaluate(right, env)?;

        use TokenKind::*;
        match op.kind {
            Minus => numeric_binop(op, left, right, |a, b| a - b),
            Slash => numeric_binop(op, left, right, |a, b| a / b),
            Star => numeric_binop(op, left, right, |a, b| a * b),
            Plus => match (left, right) {
                (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
                (Value::Str(a), Value::Str(b)) => Ok(Value::Str(a + &b)),
                _ => Err(RuntimeError::new(op, "Operands must be two numbers or two strings.")),
            },
            Greater => comparison(op, left, right, |a, b| a > b),
            GreaterEqual => comparison(op, left, right, |a, b| a >= b),
            Less => comparison(op, left, right, |a, b| a < b),
            LessEqual => comparison(op, left, right, |a, b| a <= b),
            EqualEqual => Ok(Value::Bool(left == right)),
            BangEqual => Ok(Value::Bool(left != right)),
            _ => unreachable!("parser never produces a binary op outside this set"),
        }
    }

    fn evaluate_logical(
        &mut self,
        left: &Expr,
        op: &Token,
        right: &Expr,
        env: &Environment,
    ) -> Result<Value, RuntimeError> {
        let left = self.evaluate(left, env)?;

        match op.kind {
            TokenKind::Or if left.is_truthy() => Ok(left),
            TokenKind::Or => self.evaluate(right, env),
            TokenKind::And if !left.is_truthy() => Ok(left),
            TokenKind::And => self.evaluate(right, env),
            _ => unreachable!("parser never produces a logical op other than 'and'/'or'"),
        }
    }
}

fn literal_value(literal: &LiteralValue) -> Value {
    match literal {
        LiteralValue::Nil => Value::Nil,
        LiteralValue::Bool(b) => Value::Bool(*b),
        LiteralValue::Number(n) => Value::Number(*n),
        LiteralValue::Str(s) => Value::Str(s.clone()),
    }
}

fn numeric_binop(
    op: &Token,
    left: Value,
    right: Value,
    f: impl Fn(f64, f64) -> f64,
) -> Result<Value, RuntimeError> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(f(a, b))),
        _ => Err(RuntimeError::new(op, "Operands must be numbers.")),
    }
}

fn comparison(op: &Token, left: Value, right: Value, f: impl Fn(f64, f64) -> bool) -> Result<Value, RuntimeError> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Bool(f(a, b))),
        _ => Err(RuntimeError::new(op, "Operands must be numbers.")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Environment;
    use crate::lexer::Lexer;
    use crate::parser;
    use crate::reporter::StderrReporter;

    fn run(src: &str) -> (String, Option<RuntimeError>) {
        let mut reporter = StderrReporter::new();
        let tokens = Lexer::new(src).scan_tokens(&mut reporter);
        let statements = parser::parse(tokens, &mut reporter);
        let mut out = Vec::new();
        let mut interpreter = Interpreter::new(&mut out);
        let env = Environment::global();

        let mut runtime_error = None;
        for statement in &statements {
            if let Err(err) = interpreter.execute(statement, &env) {
                runtime_error = Some(err);
                break;
            }
        }

        (String::from_utf8(out).unwrap(), runtime_error)
    }

    #[test]
    fn arithmetic_precedence() {
        let (out, err) = run("print 1 + 2 * 3;");
        assert_eq!(out, "7\n");
        assert!(err.is_none());
    }

    #[test]
    fn block_scoping_shadows_then_restores() {
        let (out, _) = run(r#"var a = "outer"; { var a = "inner"; print a; } print a;"#);
        assert_eq!(out, "inner\nouter\n");
    }

    #[test]
    fn while_loop() {
        let (out, _) = run("var i = 0; while (i < 3) { print i; i = i + 1; }");
        assert_eq!(out, "0\n1\n2\n");
    }

    #[test]
    fn equality_is_symmetric_and_nil_equals_only_nil() {
        let (out, _) = run(
            r#"print 1 == 1; print 1 == "1"; print nil == nil; print nil == false;
               print (1 == 2) == (2 == 1); print (1 != 2) == !(1 == 2);"#,
        );
        assert_eq!(out, "true\nfalse\ntrue\nfalse\ntrue\ntrue\n");
    }

    #[test]
    fn logical_operators_return_the_operand_not_a_bool() {
        let (out, _) = run(r#"print nil or "fallback";"#);
        assert_eq!(out, "fallback\n");
        let (out, _) = run("print 1 and 2;");
        assert_eq!(out, "2\n");
    }

    #[test]
    fn string_plus_number_is_a_runtime_error() {
        let (_, err) = run(r#"print "a" + 1;"#);
        let err = err.expect("expected a runtime error");
        assert_eq!(err.message, "Operands must be two numbers or two strings.");
        assert_eq!(err.line, 1);
    }

    #[test]
    fn division_by_zero_is_not_a_runtime_error() {
        let (out, err) = run("print 1 / 0;");
        assert!(err.is_none());
        assert_eq!(out, "Infinity\n");
    }

    #[test]
    fn undefined_variable_read_is_a_runtime_error() {
        let (_, err) = run("print missing;");
        assert!(err.is_some());
    }

    #[test]
    fn assignment_never_implicitly_declares() {
        let (_, err) = run("a = 1;");
        assert!(err.is_some());
    }

    #[test]
    fn each_binary_operand_evaluates_once_left_to_right() {
        // side-effecting assignments as operands let us observe order.
        let (out, _) = run("var a = 0; var b = (a = 1) + (a = a + 1); print b; print a;");
        assert_eq!(out, "3\n2\n");
    }

    #[test]
    fn a_runtime_error_inside_a_block_does_not_corrupt_the_outer_scope() {
        // the block's fresh scope is only ever a clone-and-drop child of
        // `env` — a runtime error unwinding out of it leaves the caller's
        // own environment handle untouched, with no explicit "restore"
        // step required.
        let mut reporter = StderrReporter::new();
        let src = r#"var a = "outer"; { var a = "inner"; print "x" + 1; }"#;
        let tokens = Lexer::new(src).scan_tokens(&mut reporter);
        let statements = parser::parse(tokens, &mut reporter);
        let mut out = Vec::new();
        let mut interpreter = Interpreter::new(&mut out);
        let env = Environment::global();

        for statement in &statements {
            if interpreter.execute(statement, &env).is_err() {
                break;
            }
        }

        assert_eq!(env.get("a"), Some(Value::Str("outer".into())));
    }
}
