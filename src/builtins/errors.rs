//! Error construction: error
//!
//! Errors are first-class values; this builtin lets programs raise their own.

use super::{define_builtin, err_arity, err_type};
use crate::env::Environment;
use crate::value::Value;
use std::rc::Rc;

/// Produces an Error value carrying the given message
pub fn builtin_error(args: Vec<Value>, _env: &Rc<Environment>) -> Value {
    let [message] = match <[Value; 1]>::try_from(args) {
        Ok(args) => args,
        Err(args) => return err_arity("error", 1, args.len()),
    };
    match message {
        Value::String(text) => Value::Error(text),
        other => err_type("error", 0, "String", &other),
    }
}

/// Register the error builtin in the environment
pub fn register(env: &Rc<Environment>) {
    define_builtin(env, "error", builtin_error);
}
