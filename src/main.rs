// ABOUTME: Driver wiring the parser, reader, and evaluator into REPL and
// batch-file modes

use clap::Parser;
use qlisp::builtins::filesystem::load_path;
use qlisp::builtins::register_builtins;
use qlisp::env::Environment;
use qlisp::eval::eval;
use qlisp::parser;
use qlisp::reader;
use qlisp::value::Value;
use rustyline::error::ReadlineError;
use rustyline::{Config, DefaultEditor};
use std::path::PathBuf;
use std::rc::Rc;

/// Interpreter for a small homoiconic Lisp with evaluated and quoted lists
#[derive(Parser, Debug)]
#[command(name = "qlisp")]
#[command(version)]
#[command(about = "An interpreter for a small homoiconic Lisp")]
struct CliArgs {
    /// Source files to evaluate in order (omit to start the REPL)
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Start the REPL without loading the standard library
    #[arg(long = "no-std")]
    no_std: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    let env = Environment::new();
    register_builtins(&env);

    // Batch mode: evaluate each file in order, then exit
    if !args.files.is_empty() {
        run_files(&args.files, &env);
        return Ok(());
    }

    if !args.no_std {
        print_if_error(&load_path("std", &env));
    }

    repl(&env)
}

/// Loads each file, printing Error results inline
fn run_files(files: &[PathBuf], env: &Rc<Environment>) {
    for file in files {
        print_if_error(&load_path(&file.to_string_lossy(), env));
    }
}

fn print_if_error(result: &Value) {
    if let Value::Error(_) = result {
        println!("{result}");
    }
}

fn repl(env: &Rc<Environment>) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::builder().auto_add_history(true).build();
    let mut rl = DefaultEditor::with_config(config)
        .map_err(|e| format!("Failed to initialize REPL: {e}"))?;

    loop {
        match rl.readline(">>> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }

                // The whole line reads as one S-expression, so bare forms
                // like `+ 1 2` evaluate without parentheses
                match parser::parse(&line) {
                    Ok(ast) => println!("{}", eval(reader::read(&ast), env)),
                    Err(error) => eprintln!("{error}"),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(error) => {
                eprintln!("Error: {error}");
                break;
            }
        }
    }

    Ok(())
}
