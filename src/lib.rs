//! # cam
//!
//! A small restricted lambda-calculus surface language, compiled to the
//! point-free combinators of the Categorical Abstract Machine (CAM) of
//! Cousineau, Curien and Mauny, and run on a CAM interpreter.
//!
//! ## Overview of the pipeline
//!
//! Source text goes in, a `construct::value::Value` comes out:
//!
//! ```plain
//! &str -> lexer::lex -> Vec<Token>
//!      -> compiler::parser::parse -> construct::tree::Ast
//!      -> compiler::optimizer::optimize -> Ast (smaller, equivalent)
//!      -> vm::evaluator::evaluate -> construct::value::Value
//! ```
//!
//! The lexer is a plain longest-match scanner (`lexer::lex`). The parser is
//! a recursive-descent parser that resolves lexical scope via De Bruijn
//! indexing as it builds the `Ast`, so there's no separate name-resolution
//! pass (`compiler::parser::parse`). The optimizer is a fixpoint-iterated
//! rewrite over the `Ast`, applying the three categorical identities this
//! language is built on: projection-of-pairing, beta reduction, and the
//! associativity/identity laws of composition (`compiler::optimizer`); it
//! rebuilds the tree bottom-up directly, rather than through
//! `compiler::visitor`'s hooks, since it needs to replace nodes as it goes.
//! The evaluator is the CAM itself: an `(env, stack)` state machine driven
//! by `compiler::visitor`'s generic traversal protocol, producing a final
//! `construct::value::Value`.
//!
//! ## Example
//!
//! ```
//! use cam::{lex, parse, optimize, evaluate};
//! use cam::construct::value::Value;
//!
//! let ast = parse(lex("((lambda (x) (+ x 2)) 1)").unwrap()).unwrap();
//! let optimized = optimize(ast);
//! assert_eq!(evaluate(&optimized).unwrap(), Value::EInt(3));
//! ```
//!
//! ## Errors
//!
//! Lexing, parsing, and evaluation share one diagnostic type,
//! `error::CamError`, whose `Display` impl produces exactly the one-line
//! messages a caller can pattern-match against: `"Unexpected token: X."`,
//! `"Unexpected end of input."`, `"Unbound variable: X."`, `"Arithmetic
//! overflow: M + N."`, `"Token exceeds maximum length of N."`. Those are
//! the categories `spec.md` §7 calls user errors and resource exhaustion.
//! Programmer errors — violated CAM preconditions other than overflow —
//! are not exposed as `Result`s at all; they're bugs in the compiler, not
//! in a well-formed program, and are reported with `unreachable!`.

pub mod compiler;
pub mod construct;
pub mod error;
pub mod lexer;
pub mod vm;

pub use compiler::optimizer::optimize;
pub use compiler::parser::parse;
pub use construct::value::Value;
pub use error::CamError;
pub use lexer::lex;
pub use vm::evaluator::evaluate;
