//! The Categorical Abstract Machine: executes an `Ast` as a traversal,
//! threading a single mutable `env` register and an auxiliary stack through
//! the `Visitor` hooks of §4.3/§4.4.
//!
//! Every hook implements exactly one instruction from the CAM's table.
//! `Cur` is the only hook that returns `Flow::Skip`: its child is the body
//! of an abstraction, captured unevaluated into a closure rather than
//! walked immediately. `App` is the only hook that recurses back into
//! `walk` itself, to run a closure's body against its now-current `env`.
//!
//! Every `Require` in §4.4 (the CAM's runtime preconditions) is guaranteed
//! by construction for any `Ast` produced by this crate's own parser and
//! optimizer: a violation here is a bug in the compiler, not a user error,
//! so it's reported with `unreachable!` rather than a `Result`. `Plus`
//! overflow is the one exception: §7 classifies arithmetic/resource
//! exhaustion as a category-1/3 condition (a one-line diagnostic and an
//! unwind), not a programmer-error panic, so it takes the `CamError` path
//! below and aborts the traversal instead of calling `unreachable!`.

use std::mem;
use std::rc::Rc;

use crate::compiler::visitor::{walk, Flow, Visitor};
use crate::construct::tree::Ast;
use crate::construct::value::Value;
use crate::error::{CamError, Result};

/// `(env, stack)`, the CAM's entire mutable state, plus a slot for the one
/// runtime condition (`Plus` overflow) that surfaces as a `CamError`
/// instead of a panic.
pub struct Evaluator {
    env: Value,
    stack: Vec<Value>,
    error: Option<CamError>,
}

impl Evaluator {
    pub fn new() -> Evaluator {
        Evaluator { env: Value::ENil, stack: Vec::new(), error: None }
    }

    fn take_env(&mut self) -> Value {
        mem::replace(&mut self.env, Value::ENil)
    }
}

impl Default for Evaluator {
    fn default() -> Evaluator {
        Evaluator::new()
    }
}

impl Visitor for Evaluator {
    fn id(&mut self) -> Flow {
        Flow::Continue
    }

    fn fst(&mut self) -> Flow {
        match self.take_env() {
            Value::EPair(l, _r) => self.env = *l,
            other => unreachable!("Fst requires a pair, found {:?}", other),
        }
        Flow::Continue
    }

    fn snd(&mut self) -> Flow {
        match self.take_env() {
            Value::EPair(_l, r) => self.env = *r,
            other => unreachable!("Snd requires a pair, found {:?}", other),
        }
        Flow::Continue
    }

    fn quote(&mut self, n: u64) -> Flow {
        self.env = Value::EInt(n);
        Flow::Continue
    }

    fn plus(&mut self) -> Flow {
        match self.take_env() {
            Value::EPair(l, r) => match (*l, *r) {
                (Value::EInt(m), Value::EInt(n)) => match m.checked_add(n) {
                    Some(sum) => {
                        self.env = Value::EInt(sum);
                        Flow::Continue
                    }
                    None => {
                        self.error = Some(CamError::arithmetic_overflow(m, n));
                        Flow::Abort
                    }
                },
                (l, r) => unreachable!("Plus requires two integers, found ({:?}, {:?})", l, r),
            },
            other => unreachable!("Plus requires a pair, found {:?}", other),
        }
    }

    fn app(&mut self) -> Flow {
        match self.take_env() {
            Value::EPair(clos, v) => match *clos {
                Value::EClosure(ctx, code) => {
                    self.env = Value::pair(*ctx, *v);
                    walk(self, &code)
                }
                other => unreachable!("App requires a closure, found {:?}", other),
            },
            other => unreachable!("App requires a pair, found {:?}", other),
        }
    }

    /// PUSH: save a copy of the pre-pair environment so the second child
    /// can be evaluated against it too.
    fn pre_pair(&mut self, _fst: &Ast, _snd: &Ast) -> Flow {
        self.stack.push(self.env.clone());
        Flow::Continue
    }

    /// SWAP: the first child just replaced `env` with `f(env)`; exchange it
    /// with the saved original so the second child evaluates `g(env)`.
    fn in_pair(&mut self, _fst: &Ast, _snd: &Ast) -> Flow {
        match self.stack.last_mut() {
            Some(top) => mem::swap(top, &mut self.env),
            None => unreachable!("Pair's in-visit needs a saved environment on the stack"),
        }
        Flow::Continue
    }

    /// CONS: combine the saved `f(env)` with the just-computed `g(env)`.
    fn post_pair(&mut self, _fst: &Ast, _snd: &Ast) -> Flow {
        let l = self.stack.pop().unwrap_or_else(|| unreachable!("stack underflow in Pair"));
        let r = self.take_env();
        self.env = Value::pair(l, r);
        Flow::Continue
    }

    /// CUR: capture the current environment and a shared reference to the
    /// body, without walking it.
    fn pre_cur(&mut self, body: &Rc<Ast>) -> Flow {
        let ctx = self.take_env();
        self.env = Value::closure(ctx, body.clone());
        Flow::Skip
    }
}

/// Runs `ast` starting from `ENil` and an empty stack, returning the final
/// environment, or the one `CamError` the CAM can raise itself (`Plus`
/// overflow). Panics (via `unreachable!`) if `ast` violates any other CAM
/// precondition — that never happens for `Ast`s produced by this crate's
/// own parser and optimizer.
pub fn evaluate(ast: &Ast) -> Result<Value> {
    evaluate_in(ast, Value::ENil)
}

/// As `evaluate`, but starting from a caller-supplied initial environment —
/// used by the optimizer's preservation tests, which compare `eval(A, Γ)`
/// against `eval(optimize(A), Γ)` for environments other than `ENil`.
pub fn evaluate_in(ast: &Ast, env: Value) -> Result<Value> {
    let mut cam = Evaluator { env, stack: Vec::new(), error: None };
    let flow = walk(&mut cam, ast);
    if let Some(error) = cam.error.take() {
        return Err(error);
    }
    debug_assert_ne!(flow, Flow::Abort, "evaluator should never abort its own traversal");
    debug_assert!(cam.stack.is_empty(), "stack should be balanced after a full evaluation");
    Ok(cam.env)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::compiler::parser::parse;
    use crate::lexer::lex;

    fn run(source: &str) -> Value {
        let ast = parse(lex(source).unwrap()).unwrap();
        evaluate(&ast).unwrap()
    }

    #[test]
    fn quote_yields_its_value() {
        assert_eq!(run("1"), Value::EInt(1));
    }

    #[test]
    fn sum_of_literals() {
        assert_eq!(run("(+ 1 2)"), Value::EInt(3));
    }

    #[test]
    fn identity_application() {
        assert_eq!(run("((lambda (x) x) 42)"), Value::EInt(42));
    }

    #[test]
    fn application_with_body_sum() {
        assert_eq!(run("((lambda (x) (+ x 2)) 1)"), Value::EInt(3));
    }

    #[test]
    fn two_argument_application() {
        assert_eq!(run("((lambda (x y) (+ x y)) 3 4)"), Value::EInt(7));
    }

    #[test]
    fn three_operand_sum() {
        assert_eq!(run("((lambda (x y) (+ x y 3)) 1 2)"), Value::EInt(6));
    }

    #[test]
    fn evaluator_is_deterministic() {
        let ast = parse(lex("((lambda (x y) (+ x y)) 3 4)").unwrap()).unwrap();
        assert_eq!(evaluate(&ast), evaluate(&ast));
    }

    #[test]
    fn stack_is_balanced_after_nested_pairs() {
        // Exercises PUSH/SWAP/CONS several levels deep without leaving
        // anything behind on the stack; `evaluate`'s own debug_assert would
        // catch an imbalance.
        assert_eq!(run("((lambda (x y) (+ x y 3)) 1 2)"), Value::EInt(6));
    }

    #[test]
    fn plus_overflow_is_a_camerror_not_a_panic() {
        let ast = parse(lex("(+ 18446744073709551615 1)").unwrap()).unwrap();
        let err = evaluate(&ast).unwrap_err();
        assert_eq!(err.to_string(), "Arithmetic overflow: 18446744073709551615 + 1.");
    }
}
