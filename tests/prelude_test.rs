// ABOUTME: Tests exercising the standard library written in the language

use qlisp::builtins::filesystem::load_path;
use qlisp::builtins::register_builtins;
use qlisp::env::Environment;
use qlisp::eval::eval;
use qlisp::parser;
use qlisp::reader;
use qlisp::value::Value;
use std::rc::Rc;

/// Set up an environment with builtins and the `std` prelude loaded
fn setup() -> Rc<Environment> {
    let env = Environment::new();
    register_builtins(&env);
    let loaded = load_path("std", &env);
    assert_eq!(loaded, Value::empty_sexpr(), "std failed to load: {loaded}");
    env
}

fn eval_str(input: &str, env: &Rc<Environment>) -> String {
    let ast = parser::parse(input).expect("parse failed");
    eval(reader::read(&ast), env).to_string()
}

#[test]
fn test_atoms() {
    let env = setup();
    assert_eq!(eval_str("nil", &env), "{}");
    assert_eq!(eval_str("true", &env), "1.000000");
    assert_eq!(eval_str("false", &env), "0.000000");
}

#[test]
fn test_fun_defines_a_named_lambda() {
    let env = setup();
    assert_eq!(eval_str("fun {double x} {* x 2}", &env), "()");
    assert_eq!(eval_str("double 21", &env), "42.000000");
}

#[test]
fn test_unpack_and_pack() {
    let env = setup();
    assert_eq!(eval_str("unpack + {1 2 3}", &env), "6.000000");
    assert_eq!(eval_str("pack head 5 6 7", &env), "{5.000000}");
}

#[test]
fn test_fst() {
    let env = setup();
    assert_eq!(eval_str("fst {9 8 7}", &env), "9.000000");
}

#[test]
fn test_len() {
    let env = setup();
    assert_eq!(eval_str("len {}", &env), "0.000000");
    assert_eq!(eval_str("len {1 2 3 4}", &env), "4.000000");
}

#[test]
fn test_reverse() {
    let env = setup();
    assert_eq!(
        eval_str("reverse {1 2 3}", &env),
        "{3.000000 2.000000 1.000000}"
    );
    assert_eq!(eval_str("reverse {}", &env), "{}");
}

#[test]
fn test_map() {
    let env = setup();
    assert_eq!(
        eval_str("map (\\ {x} {* x x}) {1 2 3}", &env),
        "{1.000000 4.000000 9.000000}"
    );
    assert_eq!(eval_str("map - {5 6}", &env), "{-5.000000 -6.000000}");
}

#[test]
fn test_filter() {
    let env = setup();
    assert_eq!(
        eval_str("filter (\\ {x} {> x 2}) {5 2 11 -7 8 1}", &env),
        "{5.000000 11.000000 8.000000}"
    );
}
