//! Definition and lambda construction: def, =, \
//!
//! `def` binds in the top-level scope, `=` in the current one. Both take a
//! Q-expression of symbols followed by one value per symbol. `\` builds a
//! lambda from a Q-expression of formals and a Q-expression body.

use super::{define_builtin, err_arity, err_type};
use crate::env::Environment;
use crate::value::{Lambda, Value};
use std::rc::Rc;

/// Defines each symbol in the global scope
pub fn builtin_def(args: Vec<Value>, env: &Rc<Environment>) -> Value {
    bind_symbols("def", args, env)
}

/// Binds each symbol in the current scope
pub fn builtin_set(args: Vec<Value>, env: &Rc<Environment>) -> Value {
    bind_symbols("=", args, env)
}

fn bind_symbols(name: &str, mut args: Vec<Value>, env: &Rc<Environment>) -> Value {
    if args.len() < 2 {
        return Value::Error(format!("{name}: Required at least one value."));
    }

    let symbols = match args.remove(0) {
        Value::Qexpr(children) => children,
        _ => return Value::Error(format!("{name}: Arguments not in {{}}.")),
    };

    let mut names = Vec::with_capacity(symbols.len());
    for symbol in symbols {
        match symbol {
            Value::Symbol(text) => names.push(text),
            _ => return Value::Error(format!("{name}: Argument not a symbol.")),
        }
    }

    if names.len() != args.len() {
        return Value::Error(format!(
            "{name}: Arguments count not equals to values count."
        ));
    }

    for (symbol, value) in names.into_iter().zip(args) {
        if name == "def" {
            env.define_global(symbol, value);
        } else {
            env.define(symbol, value);
        }
    }
    Value::empty_sexpr()
}

/// Constructs a lambda from a Q-expression of formal symbols and a
/// Q-expression body; the captured environment starts out empty
pub fn builtin_lambda(args: Vec<Value>, _env: &Rc<Environment>) -> Value {
    let [formals, body] = match <[Value; 2]>::try_from(args) {
        Ok(args) => args,
        Err(args) => return err_arity("\\", 2, args.len()),
    };

    let formals = match formals {
        Value::Qexpr(children) => children,
        other => return err_type("\\", 0, "Qexpression", &other),
    };
    if !matches!(body, Value::Qexpr(_)) {
        return err_type("\\", 1, "Qexpression", &body);
    }

    let mut names = Vec::with_capacity(formals.len());
    for (index, formal) in formals.into_iter().enumerate() {
        match formal {
            Value::Symbol(text) => names.push(text),
            other => return err_type("\\", index, "Symbol", &other),
        }
    }

    Value::Lambda(Lambda {
        formals: names,
        body: Box::new(body),
        env: Environment::new(),
    })
}

/// Register all definition builtins in the environment
pub fn register(env: &Rc<Environment>) {
    define_builtin(env, "def", builtin_def);
    define_builtin(env, "=", builtin_set);
    define_builtin(env, "\\", builtin_lambda);
}
