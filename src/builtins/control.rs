//! Control flow: if, while, eval
//!
//! None of these are special forms: the evaluator treats them like any other
//! builtin, and callers pass branches, conditions, and bodies as
//! Q-expressions. The builtin retags a Q-expression to an S-expression when
//! it wants the code to run.

use super::{define_builtin, err_arity, err_type};
use crate::env::Environment;
use crate::eval::eval;
use crate::value::Value;
use std::rc::Rc;

/// Evaluates the first branch when the condition is nonzero, otherwise the
/// second; the other branch is discarded unevaluated
pub fn builtin_if(args: Vec<Value>, env: &Rc<Environment>) -> Value {
    let [condition, then_branch, else_branch] = match <[Value; 3]>::try_from(args) {
        Ok(args) => args,
        Err(args) => return err_arity("if", 3, args.len()),
    };

    let condition = match condition {
        Value::Number(n) => n,
        other => return err_type("if", 0, "Number", &other),
    };
    let then_children = match then_branch {
        Value::Qexpr(children) => children,
        other => return err_type("if", 1, "Qexpression", &other),
    };
    let else_children = match else_branch {
        Value::Qexpr(children) => children,
        other => return err_type("if", 2, "Qexpression", &other),
    };

    let chosen = if condition != 0.0 {
        then_children
    } else {
        else_children
    };
    eval(Value::Sexpr(chosen), env)
}

/// Re-evaluates a fresh copy of the condition before each iteration and runs
/// a fresh copy of the body while it stays nonzero; the result is the last
/// body result, or `()` when the body never ran
pub fn builtin_while(args: Vec<Value>, env: &Rc<Environment>) -> Value {
    let [condition, body] = match <[Value; 2]>::try_from(args) {
        Ok(args) => args,
        Err(args) => return err_arity("while", 2, args.len()),
    };

    let condition = match condition {
        Value::Qexpr(children) => children,
        other => return err_type("while", 0, "Qexpression", &other),
    };
    let body = match body {
        Value::Qexpr(children) => children,
        other => return err_type("while", 1, "Qexpression", &other),
    };

    let mut result = Value::empty_sexpr();
    loop {
        let outcome = eval(Value::Sexpr(condition.clone()), env);
        let number = match outcome {
            Value::Number(n) => n,
            other => {
                return Value::Error(format!(
                    "while: Condition isn't a number, but {}.",
                    other.type_name()
                ))
            }
        };
        if number == 0.0 {
            break;
        }
        result = eval(Value::Sexpr(body.clone()), env);
    }
    result
}

/// Retags a Q-expression to an S-expression and evaluates it
pub fn builtin_eval(args: Vec<Value>, env: &Rc<Environment>) -> Value {
    let [arg] = match <[Value; 1]>::try_from(args) {
        Ok(arg) => arg,
        Err(args) => return err_arity("eval", 1, args.len()),
    };
    match arg {
        Value::Qexpr(children) => eval(Value::Sexpr(children), env),
        other => err_type("eval", 0, "Qexpression", &other),
    }
}

/// Register all control flow builtins in the environment
pub fn register(env: &Rc<Environment>) {
    define_builtin(env, "if", builtin_if);
    define_builtin(env, "while", builtin_while);
    define_builtin(env, "eval", builtin_eval);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins::register_builtins;
    use crate::parser;
    use crate::reader;

    fn setup() -> Rc<Environment> {
        let env = Environment::new();
        register_builtins(&env);
        env
    }

    fn eval_str(input: &str, env: &Rc<Environment>) -> String {
        let ast = parser::parse(input).expect("parse failed");
        eval(reader::read(&ast), env).to_string()
    }

    #[test]
    fn test_if_takes_the_chosen_branch() {
        let env = setup();
        assert_eq!(eval_str("if (== 1 1) {+ 1 2} {+ 3 4}", &env), "3.000000");
        assert_eq!(eval_str("if (== 1 2) {+ 1 2} {+ 3 4}", &env), "7.000000");
    }

    #[test]
    fn test_if_discards_the_other_branch_unevaluated() {
        let env = setup();
        // The else branch would be a division by zero if it ran
        assert_eq!(eval_str("if 1 {42} {/ 1 0}", &env), "42.000000");
    }

    #[test]
    fn test_if_validates_argument_types() {
        let env = setup();
        assert_eq!(
            eval_str("if {1} {2} {3}", &env),
            "Error: if: Invalid 0 argument type. Expected Number. Got Qexpression."
        );
        assert_eq!(
            eval_str("if 1 2 {3}", &env),
            "Error: if: Invalid 1 argument type. Expected Qexpression. Got Number."
        );
        assert_eq!(
            eval_str("if 1 {2} 3", &env),
            "Error: if: Invalid 2 argument type. Expected Qexpression. Got Number."
        );
    }

    #[test]
    fn test_while_loops_until_condition_is_zero() {
        let env = setup();
        eval_str("= {i} 0", &env);
        assert_eq!(eval_str("while {< i 10} {= {i} (+ i 1)}", &env), "()");
        assert_eq!(eval_str("i", &env), "10.000000");
    }

    #[test]
    fn test_while_returns_empty_when_body_never_runs() {
        let env = setup();
        assert_eq!(eval_str("while {0} {/ 1 0}", &env), "()");
    }

    #[test]
    fn test_while_condition_must_be_a_number() {
        let env = setup();
        assert_eq!(
            eval_str("while {{1}} {1}", &env),
            "Error: while: Condition isn't a number, but Qexpression."
        );
    }

    #[test]
    fn test_eval_retags_quoted_code() {
        let env = setup();
        assert_eq!(eval_str("eval {+ 1 2}", &env), "3.000000");
        assert_eq!(eval_str("eval {}", &env), "()");
    }

    #[test]
    fn test_eval_requires_a_qexpression() {
        let env = setup();
        assert_eq!(
            eval_str("eval 5", &env),
            "Error: eval: Invalid 0 argument type. Expected Qexpression. Got Number."
        );
    }
}
