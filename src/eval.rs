// ABOUTME: Evaluator module reducing values under an environment

use crate::env::Environment;
use crate::value::{Lambda, Value};
use std::rc::Rc;

/// One reduction step: symbols resolve through the environment chain,
/// S-expressions apply their head, everything else is already a value.
pub fn eval(value: Value, env: &Rc<Environment>) -> Value {
    match value {
        Value::Symbol(name) => env
            .get(&name)
            .unwrap_or_else(|| Value::Error(format!("Invalid symbol: {name}."))),
        Value::Sexpr(children) => eval_sexpr(children, env),
        other => other,
    }
}

fn eval_sexpr(children: Vec<Value>, env: &Rc<Environment>) -> Value {
    // Evaluate children left to right; the first Error becomes the value of
    // the whole expression and the rest is discarded.
    let mut evaluated = Vec::with_capacity(children.len());
    for child in children {
        let result = eval(child, env);
        if let Value::Error(_) = result {
            return result;
        }
        evaluated.push(result);
    }

    if evaluated.is_empty() {
        return Value::Sexpr(evaluated);
    }
    if evaluated.len() == 1 {
        return evaluated.remove(0);
    }

    let func = evaluated.remove(0);
    call(func, evaluated, env)
}

/// Applies a function to an already-evaluated argument list.
pub fn call(func: Value, args: Vec<Value>, env: &Rc<Environment>) -> Value {
    match func {
        Value::Builtin(builtin) => (builtin.func)(args, env),
        Value::Lambda(lambda) => apply_lambda(lambda, args, env),
        other => Value::Error(format!(
            "()'s first child is not a function, but {}.",
            other.type_name()
        )),
    }
}

fn apply_lambda(mut lambda: Lambda, mut args: Vec<Value>, env: &Rc<Environment>) -> Value {
    let formals_expected = lambda.formals.len();
    let args_given = args.len();

    while !args.is_empty() {
        if lambda.formals.is_empty() {
            return Value::Error(format!(
                "Too many args. Expected {formals_expected}. Got {args_given}."
            ));
        }

        let formal = lambda.formals.remove(0);

        // `&` binds every remaining argument as a single list
        if formal == "&" {
            if lambda.formals.len() != 1 {
                return Value::Error("`&` not followed by single formal".to_string());
            }
            let rest = lambda.formals.remove(0);
            lambda.env.define(rest, Value::Qexpr(std::mem::take(&mut args)));
            break;
        }

        lambda.env.define(formal, args.remove(0));
    }

    // A trailing `&` with no arguments left still binds its formal, to the
    // empty list
    if lambda.formals.first().map(String::as_str) == Some("&") {
        if lambda.formals.len() != 2 {
            return Value::Error("`&` not followed by single formal".to_string());
        }
        lambda.formals.remove(0);
        let rest = lambda.formals.remove(0);
        lambda.env.define(rest, Value::Qexpr(Vec::new()));
    }

    // Unbound formals remain: the call was partial, hand back the lambda
    if !lambda.formals.is_empty() {
        return Value::Lambda(lambda);
    }

    // Root the captured scope into the caller's chain, then evaluate the
    // body as an S-expression under it
    lambda.env.set_parent(Rc::clone(env));
    match *lambda.body {
        Value::Qexpr(children) | Value::Sexpr(children) => {
            eval(Value::Sexpr(children), &lambda.env)
        }
        other => eval(other, &lambda.env),
    }
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
    fn test_self_evaluating_values() {
        let env = setup();
        assert_eq!(eval_str("42", &env), "42.000000");
        assert_eq!(eval_str("\"hi\"", &env), "\"hi\"");
        assert_eq!(eval_str("{1 2 3}", &env), "{1.000000 2.000000 3.000000}");
        assert_eq!(eval_str("()", &env), "()");
    }

    #[test]
    fn test_symbol_lookup() {
        let env = setup();
        env.define("x".to_string(), Value::Number(10.0));
        assert_eq!(eval_str("x", &env), "10.000000");
    }

    #[test]
    fn test_unbound_symbol() {
        let env = setup();
        assert_eq!(eval_str("missing", &env), "Error: Invalid symbol: missing.");
    }

    #[test]
    fn test_single_child_collapses() {
        let env = setup();
        assert_eq!(eval_str("(5)", &env), "5.000000");
        assert_eq!(eval_str("((7))", &env), "7.000000");
    }

    #[test]
    fn test_head_must_be_a_function() {
        let env = setup();
        assert_eq!(
            eval_str("(1 2 3)", &env),
            "Error: ()'s first child is not a function, but Number."
        );
    }

    #[test]
    fn test_error_in_child_propagates() {
        let env = setup();
        assert_eq!(
            eval_str("+ 1 (/ 1 0) nope", &env),
            "Error: Division by zero."
        );
    }

    #[test]
    fn test_lambda_call() {
        let env = setup();
        assert_eq!(eval_str("(\\ {x y} {+ x y}) 10 32", &env), "42.000000");
    }

    #[test]
    fn test_partial_application() {
        let env = setup();
        assert_eq!(
            eval_str("(\\ {x y} {+ x y}) 10", &env),
            "(\\ {y} {+ x y})"
        );
    }

    #[test]
    fn test_curried_call_keeps_bound_arguments() {
        let env = setup();
        eval_str("def {add} (\\ {x y} {+ x y})", &env);
        eval_str("def {add2} (add 2)", &env);
        assert_eq!(eval_str("add2 40", &env), "42.000000");
        // The partial application must not leak into the source lambda
        assert_eq!(eval_str("add 2 3", &env), "5.000000");
    }

    #[test]
    fn test_too_many_arguments() {
        let env = setup();
        assert_eq!(
            eval_str("(\\ {x} {x}) 1 2", &env),
            "Error: Too many args. Expected 1. Got 2."
        );
    }

    #[test]
    fn test_variadic_binding() {
        let env = setup();
        eval_str("def {rest-of} (\\ {a & rest} {rest})", &env);
        assert_eq!(
            eval_str("rest-of 1 2 3 4", &env),
            "{2.000000 3.000000 4.000000}"
        );
        assert_eq!(eval_str("rest-of 1", &env), "{}");
    }

    #[test]
    fn test_ampersand_misuse() {
        let env = setup();
        assert_eq!(
            eval_str("(\\ {a &} {a}) 1 2", &env),
            "Error: `&` not followed by single formal"
        );
        assert_eq!(
            eval_str("(\\ {a &} {a}) 1", &env),
            "Error: `&` not followed by single formal"
        );
    }

    #[test]
    fn test_lambda_sees_caller_scope_through_parent() {
        let env = setup();
        eval_str("def {n} 100", &env);
        assert_eq!(eval_str("(\\ {x} {+ x n}) 1", &env), "101.000000");
    }

    #[test]
    fn test_recursion_through_global_lookup() {
        let env = setup();
        eval_str(
            "def {count-down} (\\ {n} {if (<= n 0) {0} {count-down (- n 1)}})",
            &env,
        );
        assert_eq!(eval_str("count-down 5", &env), "0.000000");
    }
}
