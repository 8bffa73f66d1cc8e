//! Integration tests for most general unifiers

use gsat_foundation::{Atom, FunctionTerm, Substitution, Term, Variable};
use gsat_unify::{most_general_unifier, unify_terms, variable_substitution};

fn v(name: &str) -> Term {
    Term::var(name)
}

fn f(name: &str, args: &[&str]) -> Term {
    let vars: Vec<_> = args.iter().map(|a| Variable::new(*a)).collect();
    FunctionTerm::skolem(name, &vars).into()
}

fn p(terms: Vec<Term>) -> Atom {
    Atom::from_parts("p", terms)
}

#[test]
fn shared_variables_under_function_terms() {
    // p(f(x), x) and p(f(y), y) unify with the single binding x -> y.
    let a = p(vec![f("f", &["x"]), v("x")]);
    let b = p(vec![f("f", &["y"]), v("y")]);
    let sub = most_general_unifier(&a, &b, None).unwrap();
    assert_eq!(sub.apply_atom(&a), sub.apply_atom(&b));
    assert_eq!(sub.len(), 1);
}

#[test]
fn mismatched_function_symbols() {
    let a = p(vec![f("g", &["y"]), v("y")]);
    let b = p(vec![f("f", &["x"]), v("x")]);
    assert!(most_general_unifier(&a, &b, None).is_none());
}

#[test]
fn repeated_variables_yield_one_equation() {
    let a = p(vec![v("x"), v("x"), v("y")]);
    let b = p(vec![v("z1"), v("z2"), v("z3")]);
    let sub = most_general_unifier(&a, &b, None).unwrap();
    let image = sub.apply_atom(&a);
    assert_eq!(image, sub.apply_atom(&b));
    assert_eq!(image.terms()[0], image.terms()[1]);
    assert_ne!(image.terms()[1], image.terms()[2]);
}

#[test]
fn unifier_is_idempotent() {
    let a = p(vec![v("x"), v("y"), v("x")]);
    let b = p(vec![v("y"), v("z"), f("f", &["w"])]);
    let sub = most_general_unifier(&a, &b, None).unwrap();
    let once = sub.apply_atom(&a);
    assert_eq!(sub.apply_atom(&once), once);
}

#[test]
fn occurs_check() {
    let a = p(vec![v("x"), f("f", &["x"])]);
    let b = p(vec![f("f", &["y"]), v("y")]);
    assert!(most_general_unifier(&a, &b, None).is_none());
}

#[test]
fn unify_terms_extends_in_place() {
    let mut sub = Substitution::new();
    assert!(unify_terms(&mut sub, &v("x"), &Term::constant("a")).is_some());
    assert!(unify_terms(&mut sub, &v("x"), &Term::constant("b")).is_none());
}

#[test]
fn atom_lists_unify_pairwise() {
    let left = vec![
        Atom::from_parts("r", vec![v("x"), v("y")]),
        Atom::from_parts("s", vec![v("y")]),
    ];
    let right = vec![
        Atom::from_parts("r", vec![v("a"), v("a")]),
        Atom::from_parts("s", vec![Term::constant("c")]),
    ];
    let sub = variable_substitution(&left, &right).unwrap();
    assert_eq!(sub.resolve_deep(&v("x")), Term::constant("c"));
    assert_eq!(sub.resolve_deep(&v("a")), Term::constant("c"));
}
