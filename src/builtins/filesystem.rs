//! File loading: load
//!
//! Parses a source file and evaluates every top-level expression in order.
//! Errors print inline and evaluation continues, so one bad definition does
//! not stop the rest of the file.

use super::{define_builtin, err_arity, err_type};
use crate::env::Environment;
use crate::eval::eval;
use crate::parser;
use crate::reader;
use crate::value::Value;
use std::fs;
use std::rc::Rc;

pub fn builtin_load(args: Vec<Value>, env: &Rc<Environment>) -> Value {
    let [path] = match <[Value; 1]>::try_from(args) {
        Ok(args) => args,
        Err(args) => return err_arity("load", 1, args.len()),
    };
    match path {
        Value::String(path) => load_path(&path, env),
        other => err_type("load", 0, "String", &other),
    }
}

/// Reads, parses, and evaluates a file; returns `()` on success or an Error
/// describing why the file could not be read or parsed
pub fn load_path(path: &str, env: &Rc<Environment>) -> Value {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(error) => return Value::Error(format!("Error loading {path}: {error}")),
    };

    let ast = match parser::parse(&source) {
        Ok(ast) => ast,
        Err(error) => return Value::Error(format!("Error loading {path}: {error}")),
    };

    if let Value::Sexpr(expressions) = reader::read(&ast) {
        for expression in expressions {
            let result = eval(expression, env);
            if let Value::Error(_) = result {
                println!("{result}");
            }
        }
    }
    Value::empty_sexpr()
}

/// Register the load builtin in the environment
pub fn register(env: &Rc<Environment>) {
    define_builtin(env, "load", builtin_load);
}
