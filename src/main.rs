//! CLI driver: reads a program (from a file path argument, or stdin if
//! none is given), runs it through the full pipeline, and prints the
//! resulting value. `spec.md` doesn't fix an invocation convention for the
//! driver beyond "a driver inspects the final environment"; this follows
//! the teacher's own `std::env::args_os()` posture.

use std::io::Read;

use cam::{evaluate, lex, optimize, parse};

fn read_source() -> std::io::Result<String> {
    match std::env::args_os().nth(1) {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn main() {
    let source = match read_source() {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: could not read source: {}", e);
            std::process::exit(1);
        }
    };

    let result = lex(&source).and_then(parse).map(optimize).and_then(|ast| evaluate(&ast));

    match result {
        Ok(value) => println!("{}", value),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
