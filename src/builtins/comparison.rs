//! Comparison operations: ==, !=, >, >=, <, <=
//!
//! `==` and `!=` use structural equality over any pair of values; the
//! ordering operators require two numbers. All of them return 1 or 0.

use super::{bool_number, define_builtin, err_arity, err_type};
use crate::env::Environment;
use crate::value::Value;
use std::rc::Rc;

pub fn builtin_eq(args: Vec<Value>, _env: &Rc<Environment>) -> Value {
    structural("==", args)
}

pub fn builtin_ne(args: Vec<Value>, _env: &Rc<Environment>) -> Value {
    structural("!=", args)
}

pub fn builtin_gt(args: Vec<Value>, _env: &Rc<Environment>) -> Value {
    ordering(">", args)
}

pub fn builtin_ge(args: Vec<Value>, _env: &Rc<Environment>) -> Value {
    ordering(">=", args)
}

pub fn builtin_lt(args: Vec<Value>, _env: &Rc<Environment>) -> Value {
    ordering("<", args)
}

pub fn builtin_le(args: Vec<Value>, _env: &Rc<Environment>) -> Value {
    ordering("<=", args)
}

fn structural(name: &str, args: Vec<Value>) -> Value {
    if args.len() != 2 {
        return err_arity(name, 2, args.len());
    }
    let equal = args[0] == args[1];
    bool_number(if name == "==" { equal } else { !equal })
}

fn ordering(name: &str, args: Vec<Value>) -> Value {
    if args.len() != 2 {
        return err_arity(name, 2, args.len());
    }
    let left = match &args[0] {
        Value::Number(n) => *n,
        other => return err_type(name, 0, "Number", other),
    };
    let right = match &args[1] {
        Value::Number(n) => *n,
        other => return err_type(name, 1, "Number", other),
    };
    bool_number(match name {
        ">" => left > right,
        ">=" => left >= right,
        "<" => left < right,
        _ => left <= right,
    })
}

/// Register all comparison builtins in the environment
pub fn register(env: &Rc<Environment>) {
    define_builtin(env, "==", builtin_eq);
    define_builtin(env, "!=", builtin_ne);
    define_builtin(env, ">", builtin_gt);
    define_builtin(env, ">=", builtin_ge);
    define_builtin(env, "<", builtin_lt);
    define_builtin(env, "<=", builtin_le);
}
