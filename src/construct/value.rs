//! Runtime values the CAM evaluator produces and consumes.
//!
//! `EClosure` holds a shared, non-owning reference into the program AST
//! (`Rc<Ast>`) rather than an owned copy: the program tree is built once by
//! the parser/optimizer and outlives every value derived from it, so
//! cloning a closure is cheap and never duplicates code.

use std::fmt;
use std::rc::Rc;

use crate::construct::tree::Ast;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    EInt(u64),
    EPair(Box<Value>, Box<Value>),
    EClosure(Box<Value>, Rc<Ast>),
    ENil,
}

impl Value {
    pub fn pair(fst: Value, snd: Value) -> Value {
        Value::EPair(Box::new(fst), Box::new(snd))
    }

    pub fn closure(context: Value, code: Rc<Ast>) -> Value {
        Value::EClosure(Box::new(context), code)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::EInt(n) => write!(f, "{}", n),
            Value::EPair(l, r) => write!(f, "({} {})", l, r),
            Value::EClosure(..) => write!(f, "<closure>"),
            Value::ENil => write!(f, "()"),
        }
    }
}
