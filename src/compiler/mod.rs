//! The compile-time half of the pipeline: surface syntax in, an optimized
//! categorical `Ast` out.
//!
//! ~> source (`&str`)
//! -> tokens          : `crate::lexer`
//! -> `Ast`           : `parser`, De Bruijn-resolved as it's built
//! -> `Ast` (smaller) : `optimizer`, iterated to a fixpoint
//! ~> run             : `crate::vm::evaluator`
//!
//! `visitor` is the generic traversal protocol `crate::vm::evaluator` drives
//! to run a program; `optimizer` rewrites the tree bottom-up on its own,
//! since replacing nodes as it walks doesn't fit `visitor`'s hook shape.

pub mod optimizer;
pub mod parser;
pub mod visitor;
