//! Arithmetic operations: +, -, *, /
//!
//! Left folds over a double accumulator. `-` with a single operand negates;
//! `/` reports division by zero as an Error value.

use super::{define_builtin, err_arity, err_type};
use crate::env::Environment;
use crate::value::Value;
use std::rc::Rc;

/// Returns the sum of all arguments
pub fn builtin_add(args: Vec<Value>, _env: &Rc<Environment>) -> Value {
    let numbers = match to_numbers("+", &args) {
        Ok(numbers) => numbers,
        Err(error) => return error,
    };
    Value::Number(numbers.into_iter().sum())
}

/// Subtracts subsequent arguments from the first; negates a single argument
pub fn builtin_sub(args: Vec<Value>, _env: &Rc<Environment>) -> Value {
    let numbers = match to_numbers("-", &args) {
        Ok(numbers) => numbers,
        Err(error) => return error,
    };
    if numbers.len() == 1 {
        return Value::Number(-numbers[0]);
    }
    Value::Number(numbers[1..].iter().fold(numbers[0], |acc, n| acc - n))
}

/// Returns the product of all arguments
pub fn builtin_mul(args: Vec<Value>, _env: &Rc<Environment>) -> Value {
    let numbers = match to_numbers("*", &args) {
        Ok(numbers) => numbers,
        Err(error) => return error,
    };
    Value::Number(numbers.into_iter().product())
}

/// Divides the first argument by the subsequent ones
pub fn builtin_div(args: Vec<Value>, _env: &Rc<Environment>) -> Value {
    let numbers = match to_numbers("/", &args) {
        Ok(numbers) => numbers,
        Err(error) => return error,
    };
    let mut acc = numbers[0];
    for &operand in &numbers[1..] {
        if operand == 0.0 {
            return Value::Error("Division by zero.".to_string());
        }
        acc /= operand;
    }
    Value::Number(acc)
}

/// At least one argument, all numbers.
fn to_numbers(name: &str, args: &[Value]) -> Result<Vec<f64>, Value> {
    if args.is_empty() {
        return Err(err_arity(name, 1, 0));
    }
    let mut numbers = Vec::with_capacity(args.len());
    for (index, arg) in args.iter().enumerate() {
        match arg {
            Value::Number(n) => numbers.push(*n),
            other => return Err(err_type(name, index, "Number", other)),
        }
    }
    Ok(numbers)
}

/// Register all arithmetic builtins in the environment
pub fn register(env: &Rc<Environment>) {
    define_builtin(env, "+", builtin_add);
    define_builtin(env, "-", builtin_sub);
    define_builtin(env, "*", builtin_mul);
    define_builtin(env, "/", builtin_div);
}
