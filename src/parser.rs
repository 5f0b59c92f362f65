// ABOUTME: Parser module turning source text into an AST using nom combinators

use nom::{
    branch::alt,
    bytes::complete::{take_while, take_while1},
    character::complete::{char, digit1, multispace1},
    combinator::{opt, recognize, value},
    error::ErrorKind,
    multi::many0,
    IResult, Parser,
};

use crate::error::ParseError;

/// Grammar rule that produced an AST node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Program,
    Sexpression,
    Qexpression,
    Number,
    Symbol,
    String,
}

/// One node of the parse tree: the rule it matched, the text it covers (for
/// leaves), and its children (for bracketed forms and the program root).
#[derive(Debug, Clone, PartialEq)]
pub struct Ast {
    pub rule: Rule,
    pub contents: String,
    pub children: Vec<Ast>,
}

impl Ast {
    fn leaf(rule: Rule, contents: &str) -> Ast {
        Ast {
            rule,
            contents: contents.to_string(),
            children: Vec::new(),
        }
    }

    fn node(rule: Rule, children: Vec<Ast>) -> Ast {
        Ast {
            rule,
            contents: String::new(),
            children,
        }
    }
}

/// Parses a whole program: any number of expressions separated by whitespace
/// and `;` comments.
pub fn parse(source: &str) -> Result<Ast, ParseError> {
    match expressions(source) {
        Ok(("", children)) => Ok(Ast::node(Rule::Program, children)),
        Ok((rest, _)) => Err(syntax_error(source, rest)),
        Err(_) => Err(syntax_error(source, source)),
    }
}

fn syntax_error(source: &str, rest: &str) -> ParseError {
    // An unclosed bracket anywhere in the source is the most useful thing to
    // report; otherwise the leftover text is input no rule matches.
    match unclosed_bracket(source) {
        Some(expected) => ParseError::Unclosed { expected },
        None => ParseError::Unexpected {
            near: rest.chars().take(24).collect(),
        },
    }
}

/// Scans for a `(` or `{` whose closing bracket never arrives, skipping
/// string literals and comments.
fn unclosed_bracket(source: &str) -> Option<char> {
    let mut stack = Vec::new();
    let mut chars = source.chars();
    while let Some(c) = chars.next() {
        match c {
            '"' => {
                while let Some(inner) = chars.next() {
                    match inner {
                        '\\' => {
                            chars.next();
                        }
                        '"' => break,
                        _ => {}
                    }
                }
            }
            ';' => {
                for inner in chars.by_ref() {
                    if inner == '\n' || inner == '\r' {
                        break;
                    }
                }
            }
            '(' => stack.push(')'),
            '{' => stack.push('}'),
            ')' | '}' => {
                stack.pop();
            }
            _ => {}
        }
    }
    stack.pop()
}

fn expressions(input: &str) -> IResult<&str, Vec<Ast>> {
    let (mut remaining, _) = ws_and_comments(input)?;
    let mut children = Vec::new();
    while let Ok((rest, ast)) = expression(remaining) {
        children.push(ast);
        let (rest, _) = ws_and_comments(rest)?;
        remaining = rest;
    }
    Ok((remaining, children))
}

fn expression(input: &str) -> IResult<&str, Ast> {
    alt((number, symbol, string, sexpression, qexpression)).parse(input)
}

/// Skip whitespace and `;` comments
fn ws_and_comments(input: &str) -> IResult<&str, ()> {
    many0(alt((value((), multispace1), comment)))
        .map(|_| ())
        .parse(input)
}

/// Parse a comment: `;` up to the end of the line
fn comment(input: &str) -> IResult<&str, ()> {
    let (input, _) = char(';')(input)?;
    let (input, _) = take_while(|c| c != '\r' && c != '\n')(input)?;
    Ok((input, ()))
}

/// Parse a number: `-?[0-9]+(\.[0-9]+)?`
fn number(input: &str) -> IResult<&str, Ast> {
    recognize((opt(char('-')), digit1, opt((char('.'), digit1))))
        .map(|text: &str| Ast::leaf(Rule::Number, text))
        .parse(input)
}

/// Parse a symbol: `[a-zA-Z0-9_+\-*/\\=<>!&|]+`
///
/// The class includes `/` and `\`, which is how the division and lambda
/// operators are bound.
fn symbol(input: &str) -> IResult<&str, Ast> {
    take_while1(is_symbol_char)
        .map(|text: &str| Ast::leaf(Rule::Symbol, text))
        .parse(input)
}

fn is_symbol_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "_+-*/\\=<>!&|".contains(c)
}

/// Parse a string literal: `"(\\.|[^"])*"`
///
/// The node keeps the raw text including the surrounding quotes; the Reader
/// strips and unescapes it.
fn string(input: &str) -> IResult<&str, Ast> {
    let (rest, _) = char('"')(input)?;
    let mut chars = rest.char_indices();
    loop {
        match chars.next() {
            Some((i, '"')) => {
                let contents = &input[..i + 2];
                return Ok((&rest[i + 1..], Ast::leaf(Rule::String, contents)));
            }
            Some((_, '\\')) => {
                chars.next();
            }
            Some(_) => {}
            None => {
                return Err(nom::Err::Error(nom::error::Error::new(
                    input,
                    ErrorKind::Char,
                )));
            }
        }
    }
}

/// Parse an S-expression: `( Expression* )`
fn sexpression(input: &str) -> IResult<&str, Ast> {
    let (input, _) = char('(')(input)?;
    let (input, children) = expressions(input)?;
    let (input, _) = char(')')(input)?;
    Ok((input, Ast::node(Rule::Sexpression, children)))
}

/// Parse a Q-expression: `{ Expression* }`
fn qexpression(input: &str) -> IResult<&str, Ast> {
    let (input, _) = char('{')(input)?;
    let (input, children) = expressions(input)?;
    let (input, _) = char('}')(input)?;
    Ok((input, Ast::node(Rule::Qexpression, children)))
}
