//! The generic tree-traversal protocol the CAM evaluator drives to run a
//! program.
//!
//! An `Ast` consumer that only needs to *react* to structural events
//! (entering a `Pair`'s first child, leaving a `Cur`, visiting a leaf)
//! without replacing nodes can implement a few hooks instead of
//! hand-rolling its own dispatch; a single `Visitor` trait exposes one hook
//! per event, all defaulting to a no-op `Continue`, and a free `walk`
//! function drives any `Visitor` over any `Ast`. This is the
//! capability-interface shape: implement only the hooks you care about.
//! The evaluator is the one consumer in this crate shaped that way; the
//! optimizer needs to rebuild the tree as it goes and so walks `Ast`
//! directly instead (see `compiler::optimizer`).

use std::rc::Rc;

use crate::construct::tree::Ast;

/// What a hook asks the walk to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep walking normally.
    Continue,
    /// Don't descend into this node's children; treat it as already fully
    /// visited.
    Skip,
    /// Stop the walk immediately; propagates all the way back to the
    /// caller of `walk`.
    Abort,
}

/// One hook per traversal event. All thirteen default to `Continue`, so an
/// implementor only overrides what it needs.
#[allow(unused_variables)]
pub trait Visitor {
    fn id(&mut self) -> Flow {
        Flow::Continue
    }
    fn fst(&mut self) -> Flow {
        Flow::Continue
    }
    fn snd(&mut self) -> Flow {
        Flow::Continue
    }
    fn quote(&mut self, n: u64) -> Flow {
        Flow::Continue
    }
    fn plus(&mut self) -> Flow {
        Flow::Continue
    }
    fn app(&mut self) -> Flow {
        Flow::Continue
    }

    fn pre_comp(&mut self, terms: &[Ast]) -> Flow {
        Flow::Continue
    }
    fn post_comp(&mut self, terms: &[Ast]) -> Flow {
        Flow::Continue
    }

    fn pre_pair(&mut self, fst: &Ast, snd: &Ast) -> Flow {
        Flow::Continue
    }
    fn in_pair(&mut self, fst: &Ast, snd: &Ast) -> Flow {
        Flow::Continue
    }
    fn post_pair(&mut self, fst: &Ast, snd: &Ast) -> Flow {
        Flow::Continue
    }

    fn pre_cur(&mut self, body: &Rc<Ast>) -> Flow {
        Flow::Continue
    }
    fn post_cur(&mut self, body: &Rc<Ast>) -> Flow {
        Flow::Continue
    }
}

/// Drives `visitor` over `ast`, firing the appropriate hooks in pre/in/post
/// order for composite nodes and a single hook for leaves. Returns the last
/// `Flow` produced; an `Abort` anywhere short-circuits the rest of the walk.
pub fn walk<V: Visitor + ?Sized>(visitor: &mut V, ast: &Ast) -> Flow {
    match ast {
        Ast::Id => visitor.id(),
        Ast::Fst => visitor.fst(),
        Ast::Snd => visitor.snd(),
        Ast::Quote(n) => visitor.quote(*n),
        Ast::Plus => visitor.plus(),
        Ast::App => visitor.app(),

        Ast::Comp(terms) => {
            match visitor.pre_comp(terms) {
                Flow::Abort => return Flow::Abort,
                Flow::Skip => return Flow::Continue,
                Flow::Continue => {}
            }
            // `Comp(f_1..f_k)` denotes `f_1 ∘ f_2 ∘ … ∘ f_k`: the rightmost
            // (innermost, last-listed) term consumes the incoming value
            // first, and the leftmost (outermost, first-listed) term
            // produces the final one. Walking right-to-left reproduces that
            // nesting with a flat, sequential env mutation.
            for term in terms.iter().rev() {
                if walk(visitor, term) == Flow::Abort {
                    return Flow::Abort;
                }
            }
            visitor.post_comp(terms)
        }

        Ast::Pair(fst, snd) => {
            match visitor.pre_pair(fst, snd) {
                Flow::Abort => return Flow::Abort,
                Flow::Skip => return Flow::Continue,
                Flow::Continue => {}
            }
            if walk(visitor, fst) == Flow::Abort {
                return Flow::Abort;
            }
            match visitor.in_pair(fst, snd) {
                Flow::Abort => return Flow::Abort,
                Flow::Skip => return Flow::Continue,
                Flow::Continue => {}
            }
            if walk(visitor, snd) == Flow::Abort {
                return Flow::Abort;
            }
            visitor.post_pair(fst, snd)
        }

        Ast::Cur(body) => {
            match visitor.pre_cur(body) {
                Flow::Abort => return Flow::Abort,
                Flow::Skip => return Flow::Continue,
                Flow::Continue => {}
            }
            if walk(visitor, body) == Flow::Abort {
                return Flow::Abort;
            }
            visitor.post_cur(body)
        }
    }
}
