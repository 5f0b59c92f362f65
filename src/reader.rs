// ABOUTME: Reader module translating a parser AST into a Value tree

use crate::parser::{Ast, Rule};
use crate::value::Value;

/// Translates an AST node into a runtime value.
///
/// The program root becomes an S-expression holding every top-level
/// expression, which is how a whole REPL line evaluates as one form.
pub fn read(ast: &Ast) -> Value {
    match ast.rule {
        Rule::Program | Rule::Sexpression => {
            Value::Sexpr(ast.children.iter().map(read).collect())
        }
        Rule::Qexpression => Value::Qexpr(ast.children.iter().map(read).collect()),
        Rule::Number => read_number(&ast.contents),
        Rule::Symbol => Value::Symbol(ast.contents.clone()),
        Rule::String => read_string(&ast.contents),
    }
}

fn read_number(text: &str) -> Value {
    match text.parse::<f64>() {
        Ok(number) if number.is_finite() => Value::Number(number),
        _ => Value::Error(format!("Invalid number: {text}.")),
    }
}

/// Strips the surrounding quotes and unescapes the contents.
fn read_string(contents: &str) -> Value {
    let inner = &contents[1..contents.len() - 1];
    Value::String(unescape(inner))
}

fn unescape(s: &str) -> String {
    let mut unescaped = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            unescaped.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => unescaped.push('\n'),
            Some('t') => unescaped.push('\t'),
            Some('r') => unescaped.push('\r'),
            Some('"') => unescaped.push('"'),
            Some('\\') => unescaped.push('\\'),
            // Unknown escapes are kept verbatim
            Some(other) => {
                unescaped.push('\\');
                unescaped.push(other);
            }
            None => unescaped.push('\\'),
        }
    }
    unescaped
}
