//! The categorical AST: a closed tagged sum of the CAM's combinators.
//!
//! Every node is either a leaf (`Id`, `Fst`, `Snd`, `Quote`, `Plus`, `App`)
//! or carries exactly the children its combinator needs (`Cur` one, `Pair`
//! two, `Comp` a left-to-right, outermost-to-innermost chain). There is no
//! sharing and no cycles: the tree is rooted and owned, and the optimizer
//! always produces a fresh one rather than mutating in place.
//!
//! `Cur`'s body is the one exception: it's kept behind an `Rc` rather than
//! a `Box` because the evaluator's `Cur` instruction captures a reference to
//! it in a closure (`Value::EClosure`) that must be cheap to clone and must
//! outlive the particular traversal that created it.

use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ast {
    Id,
    Fst,
    Snd,
    Quote(u64),
    Plus,
    App,
    Cur(Rc<Ast>),
    Pair(Box<Ast>, Box<Ast>),
    Comp(Vec<Ast>),
}

impl Ast {
    pub fn cur(body: Ast) -> Ast {
        Ast::Cur(Rc::new(body))
    }

    pub fn pair(fst: Ast, snd: Ast) -> Ast {
        Ast::Pair(Box::new(fst), Box::new(snd))
    }

    pub fn comp(terms: Vec<Ast>) -> Ast {
        Ast::Comp(terms)
    }

    /// `true` for the six combinators with no children.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Ast::Id | Ast::Fst | Ast::Snd | Ast::Quote(_) | Ast::Plus | Ast::App)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn constructors_box_children() {
        let cur = Ast::cur(Ast::Id);
        assert!(matches!(cur, Ast::Cur(inner) if *inner == Ast::Id));

        let pair = Ast::pair(Ast::Fst, Ast::Snd);
        assert!(matches!(pair, Ast::Pair(a, b) if *a == Ast::Fst && *b == Ast::Snd));
    }

    #[test]
    fn leaves_are_recognized() {
        assert!(Ast::Id.is_leaf());
        assert!(Ast::Quote(4).is_leaf());
        assert!(!Ast::cur(Ast::Id).is_leaf());
        assert!(!Ast::comp(vec![]).is_leaf());
    }
}
