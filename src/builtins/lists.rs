//! List operations: list, head, tail, join
//!
//! `head` and `tail` work on both Q-expressions and strings; `join`
//! concatenates all of one kind or the other.

use super::{define_builtin, err_arity, err_type};
use crate::env::Environment;
use crate::value::Value;
use std::rc::Rc;

/// Retags the argument list itself as a Q-expression
pub fn builtin_list(args: Vec<Value>, _env: &Rc<Environment>) -> Value {
    Value::Qexpr(args)
}

/// First element of a Q-expression as a one-element Q-expression, or the
/// first character of a string
pub fn builtin_head(args: Vec<Value>, _env: &Rc<Environment>) -> Value {
    let [arg] = match <[Value; 1]>::try_from(args) {
        Ok(arg) => arg,
        Err(args) => return err_arity("head", 1, args.len()),
    };
    match arg {
        Value::Qexpr(mut children) => {
            if children.is_empty() {
                return Value::Error("head: Argument is empty.".to_string());
            }
            children.truncate(1);
            Value::Qexpr(children)
        }
        Value::String(s) => match s.chars().next() {
            Some(first) => Value::String(first.to_string()),
            None => Value::Error("head: Argument is empty.".to_string()),
        },
        other => invalid_kind("head", &other),
    }
}

/// Everything but the first element or character
pub fn builtin_tail(args: Vec<Value>, _env: &Rc<Environment>) -> Value {
    let [arg] = match <[Value; 1]>::try_from(args) {
        Ok(arg) => arg,
        Err(args) => return err_arity("tail", 1, args.len()),
    };
    match arg {
        Value::Qexpr(mut children) => {
            if children.is_empty() {
                return Value::Error("tail: Argument is empty.".to_string());
            }
            children.remove(0);
            Value::Qexpr(children)
        }
        Value::String(s) => {
            if s.is_empty() {
                return Value::Error("tail: Argument is empty.".to_string());
            }
            let mut chars = s.chars();
            chars.next();
            Value::String(chars.as_str().to_string())
        }
        other => invalid_kind("tail", &other),
    }
}

/// Concatenates Q-expressions or strings, in order, into the first
/// argument's kind
pub fn builtin_join(args: Vec<Value>, _env: &Rc<Environment>) -> Value {
    if args.len() < 2 {
        return Value::Error(format!(
            "join: Invalid args count. Expected at least 2. Got {}.",
            args.len()
        ));
    }

    if matches!(args[0], Value::Qexpr(_)) {
        for (index, arg) in args.iter().enumerate() {
            if !matches!(arg, Value::Qexpr(_)) {
                return err_type("join", index, "Qexpression", arg);
            }
        }
        let mut joined = Vec::new();
        for arg in args {
            if let Value::Qexpr(children) = arg {
                joined.extend(children);
            }
        }
        Value::Qexpr(joined)
    } else {
        for (index, arg) in args.iter().enumerate() {
            if !matches!(arg, Value::String(_)) {
                return err_type("join", index, "String", arg);
            }
        }
        let mut joined = String::new();
        for arg in args {
            if let Value::String(s) = arg {
                joined.push_str(&s);
            }
        }
        Value::String(joined)
    }
}

fn invalid_kind(name: &str, got: &Value) -> Value {
    Value::Error(format!(
        "{name}: Invalid arg type. Expected Qexpression or String. Got {}.",
        got.type_name()
    ))
}

/// Register all list builtins in the environment
pub fn register(env: &Rc<Environment>) {
    define_builtin(env, "list", builtin_list);
    define_builtin(env, "head", builtin_head);
    define_builtin(env, "tail", builtin_tail);
    define_builtin(env, "join", builtin_join);
}
