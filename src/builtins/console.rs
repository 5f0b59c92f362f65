//! Console I/O: print, input

use super::{define_builtin, err_arity, err_type};
use crate::env::Environment;
use crate::value::Value;
use std::io::{self, Write};
use std::rc::Rc;

/// Prints each argument followed by a space, then a newline; returns `()`
pub fn builtin_print(args: Vec<Value>, _env: &Rc<Environment>) -> Value {
    for arg in &args {
        print!("{arg} ");
    }
    println!();
    Value::empty_sexpr()
}

/// Prints a prompt and reads one line of up to `length` characters from
/// standard input, with the trailing newline removed
pub fn builtin_input(args: Vec<Value>, _env: &Rc<Environment>) -> Value {
    let [prompt, length] = match <[Value; 2]>::try_from(args) {
        Ok(args) => args,
        Err(args) => return err_arity("input", 2, args.len()),
    };

    let prompt = match prompt {
        Value::String(s) => s,
        other => return err_type("input", 0, "String", &other),
    };
    let length = match length {
        Value::Number(n) => n,
        other => return err_type("input", 1, "Number", &other),
    };
    if length < 1.0 {
        return Value::Error(format!("input: Length must be >= 1. Got {length:.6}."));
    }

    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => Value::Error("Failed to input.".to_string()),
        Ok(_) => {
            let line = line.trim_end_matches(['\n', '\r']);
            Value::String(line.chars().take(length as usize).collect())
        }
    }
}

/// Register all console builtins in the environment
pub fn register(env: &Rc<Environment>) {
    define_builtin(env, "print", builtin_print);
    define_builtin(env, "input", builtin_input);
}
