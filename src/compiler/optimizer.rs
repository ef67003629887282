//! Fixpoint rewrite optimizer over the categorical `Ast`.
//!
//! Implements the six rewrite rules as a bottom-up recursion rather than the
//! stack-with-sentinel-markers machine: children are optimized first, and
//! the resulting (already-canonical) children are pattern-matched before the
//! parent is rebuilt. The behavior and the rewrite count are identical
//! either way, and this shape is the ordinary way to write a tree rewrite in
//! Rust.
//!
//! Rules 1-3 (Fst-of-Pair, Snd-of-Pair, Beta) fire when a `Comp`'s term list
//! has a leaf immediately followed by a matching `Pair`; rules 4-5
//! (associativity, identity) flatten nested `Comp`s and drop `Id`s while
//! that same list is being assembled; rule 6 canonicalizes an empty `Comp`
//! to `Id`.

use crate::construct::tree::Ast;

/// Runs the optimizer to a fixpoint: repeatedly rewrites `ast` until a pass
/// performs zero rewrites, then returns the result. Every rule strictly
/// shrinks the term (fewer nodes or fewer `Comp` children), so this always
/// terminates.
pub fn optimize(ast: Ast) -> Ast {
    let mut current = ast;
    loop {
        let (next, count) = optimize_once(&current);
        if count == 0 {
            return next;
        }
        current = next;
    }
}

/// A single optimization pass: returns the rewritten tree and how many
/// rewrite rules fired while building it. A `count` of `0` means `ast` was
/// already in canonical form and the returned tree is structurally equal to
/// it.
pub fn optimize_once(ast: &Ast) -> (Ast, usize) {
    match ast {
        Ast::Id | Ast::Fst | Ast::Snd | Ast::Quote(_) | Ast::Plus | Ast::App => (ast.clone(), 0),

        Ast::Cur(body) => {
            let (body_opt, count) = optimize_once(body);
            (Ast::cur(body_opt), count)
        }

        Ast::Pair(f, g) => {
            let (f_opt, c1) = optimize_once(f);
            let (g_opt, c2) = optimize_once(g);
            (Ast::pair(f_opt, g_opt), c1 + c2)
        }

        Ast::Comp(terms) => {
            let mut rewrites = 0;
            let mut children = Vec::with_capacity(terms.len());
            for term in terms {
                let (term_opt, count) = optimize_once(term);
                rewrites += count;
                children.push(term_opt);
            }

            let mut out = Vec::with_capacity(children.len());
            for term in children {
                push_term(&mut out, term, &mut rewrites);
            }

            if out.is_empty() {
                (Ast::Id, rewrites)
            } else {
                (Ast::Comp(out), rewrites)
            }
        }
    }
}

/// Appends `term` to the in-progress `Comp` term list `out`, applying
/// whichever of rules 1-5 the append triggers. `out` is always left in
/// canonical shape for the terms seen so far: no `Comp` or `Id` elements,
/// and no adjacent `Fst`/`Pair`, `Snd`/`Pair`, or `App`/`Pair(Cur(_), _)`.
fn push_term(out: &mut Vec<Ast>, term: Ast, rewrites: &mut usize) {
    match term {
        // Rule 5: an `Id` contributes nothing to a composition.
        Ast::Id => {
            *rewrites += 1;
        }

        // Rule 4: splice a nested `Comp`'s children into the parent in
        // place; each child is re-offered to `push_term` so it can still
        // combine with whatever is now on top of `out`.
        Ast::Comp(inner) => {
            *rewrites += 1;
            for t in inner {
                push_term(out, t, rewrites);
            }
        }

        Ast::Pair(l, r) => {
            if matches!(out.last(), Some(Ast::Fst)) {
                // Rule 1: Comp(Fst, Pair(f, g), ...) -> Comp(f, ...)
                out.pop();
                *rewrites += 1;
                push_term(out, *l, rewrites);
            } else if matches!(out.last(), Some(Ast::Snd)) {
                // Rule 2: Comp(Snd, Pair(f, g), ...) -> Comp(g, ...)
                out.pop();
                *rewrites += 1;
                push_term(out, *r, rewrites);
            } else if matches!(out.last(), Some(Ast::App)) && matches!(l.as_ref(), Ast::Cur(_)) {
                // Rule 3 (Beta): Comp(App, Pair(Cur(f), g), ...)
                //             -> Comp(f, Pair(Id, g), ...)
                out.pop();
                *rewrites += 1;
                if let Ast::Cur(body) = *l {
                    push_term(out, (*body).clone(), rewrites);
                }
                push_term(out, Ast::pair(Ast::Id, *r), rewrites);
            } else {
                out.push(Ast::Pair(l, r));
            }
        }

        other => {
            // Only already-optimized children reach here: `Comp` and `Id`
            // are matched above, `Pair` either combines with a preceding
            // `Fst`/`Snd`/`App` or falls through the `Pair(l, r)` arm above,
            // so what's left is always a leaf or a `Cur`.
            debug_assert!(
                other.is_leaf() || matches!(other, Ast::Cur(_)),
                "unexpected compound term reaching the Comp-assembly fallback: {:?}",
                other
            );
            out.push(other)
        }
    }
}
