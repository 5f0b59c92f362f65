//! # Built-in Functions Module
//!
//! The ~30 primitive operators installed in the top-level environment at
//! startup, organized by category:
//!
//! - **[arithmetic]**: `+`, `-`, `*`, `/`
//! - **[comparison]**: `==`, `!=`, `>`, `>=`, `<`, `<=`
//! - **[logic]**: `!`, `&&`, `||`
//! - **[lists]**: `list`, `head`, `tail`, `join`
//! - **[control]**: `if`, `while`, `eval`
//! - **[variables]**: `def`, `=`, `\`
//! - **[console]**: `print`, `input`
//! - **[errors]**: `error`
//! - **[filesystem]**: `load`
//!
//! Every builtin owns its already-evaluated argument list and returns a
//! value; failures come back as `Value::Error`, never as a Rust error.

use crate::env::Environment;
use crate::value::{Builtin, BuiltinFn, Value};
use std::rc::Rc;

pub mod arithmetic;
pub mod comparison;
pub mod console;
pub mod control;
pub mod errors;
pub mod filesystem;
pub mod lists;
pub mod logic;
pub mod variables;

/// Register all built-in functions in the environment
pub fn register_builtins(env: &Rc<Environment>) {
    arithmetic::register(env);
    comparison::register(env);
    logic::register(env);
    lists::register(env);
    control::register(env);
    variables::register(env);
    console::register(env);
    errors::register(env);
    filesystem::register(env);
}

pub(crate) fn define_builtin(env: &Rc<Environment>, name: &'static str, func: BuiltinFn) {
    env.define(name.to_string(), Value::Builtin(Builtin { name, func }));
}

/// Arity mismatch against an exact expected count.
pub(crate) fn err_arity(name: &str, expected: usize, got: usize) -> Value {
    let direction = if got > expected { "many" } else { "few" };
    Value::Error(format!(
        "{name}: Too {direction} arguments. Expected {expected}. Got {got}."
    ))
}

/// Type mismatch for the argument at `index` (zero-based).
pub(crate) fn err_type(name: &str, index: usize, expected: &str, got: &Value) -> Value {
    Value::Error(format!(
        "{name}: Invalid {index} argument type. Expected {expected}. Got {}.",
        got.type_name()
    ))
}

/// Truth values are plain numbers.
pub(crate) fn bool_number(truth: bool) -> Value {
    Value::Number(if truth { 1.0 } else { 0.0 })
}
