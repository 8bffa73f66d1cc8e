//! Most general unifiers over function-free and skolem terms.
//!
//! Unification works on a [`Substitution`] that may hold chains of variable
//! bindings; every term is first resolved to its representative with
//! [`Substitution::find`]. A unifier that would place a function term inside
//! another function term is rejected, so results over rules produced by the
//! saturation loop never contain nested terms.

use gsat_foundation::{Atom, FunctionTerm, Substitution, Term, Variable};

/// Computes the most general unifier of two atoms, extending `seed`.
///
/// Returns `None` if the predicates differ, a constant or function symbol
/// clashes, the occurs check fails, or the unifier would nest function terms.
/// When both sides are unbound variables, the variable from `a` is bound to
/// the one from `b`. The returned substitution is idempotent.
#[must_use]
pub fn most_general_unifier(a: &Atom, b: &Atom, seed: Option<&Substitution>) -> Option<Substitution> {
    if a.predicate() != b.predicate() {
        return None;
    }
    let mut sub = seed.cloned().unwrap_or_default();
    for (s, t) in a.terms().iter().zip(b.terms()) {
        unify_terms(&mut sub, s, t)?;
    }
    let sub = sub.normalized();
    let nests = |atom: &Atom| sub.apply_atom(atom).terms().iter().any(Term::is_nested);
    if sub.iter().any(|(_, term)| term.is_nested()) || nests(a) || nests(b) {
        return None;
    }
    Some(sub)
}

/// Unifies two equally long atom lists position by position, threading one
/// substitution through every pair.
#[must_use]
pub fn variable_substitution(left: &[Atom], right: &[Atom]) -> Option<Substitution> {
    if left.len() != right.len() {
        return None;
    }
    left.iter()
        .zip(right)
        .try_fold(Substitution::new(), |sub, (a, b)| {
            most_general_unifier(a, b, Some(&sub))
        })
}

/// Extends `sub` so that `s` and `t` become equal.
///
/// On failure `sub` may hold partial bindings and should be discarded.
pub fn unify_terms(sub: &mut Substitution, s: &Term, t: &Term) -> Option<()> {
    let s = sub.find(s);
    let t = sub.find(t);
    if s == t {
        return Some(());
    }
    match (s, t) {
        (Term::Function(f), Term::Function(g)) => {
            if f.symbol() != g.symbol() {
                return None;
            }
            for (x, y) in f.args().iter().zip(g.args()) {
                unify_terms(sub, x, y)?;
            }
            Some(())
        }
        (Term::Variable(v), Term::Function(f)) | (Term::Function(f), Term::Variable(v)) => {
            bind_function(sub, v, f)
        }
        (Term::Variable(v), other) | (other, Term::Variable(v)) => {
            sub.bind(v, other);
            Some(())
        }
        _ => None,
    }
}

/// Binds `var` to `f` unless an argument of `f` resolves to `var` itself or
/// to another function term.
fn bind_function(sub: &mut Substitution, var: Variable, f: FunctionTerm) -> Option<()> {
    for arg in f.args() {
        match sub.find(arg) {
            Term::Function(_) => return None,
            Term::Variable(v) if v == var => return None,
            _ => {}
        }
    }
    sub.bind(var, Term::Function(f));
    Some(())
}
