//! Integration tests for substitutions

use gsat_foundation::{Atom, Substitution, Term, Variable};

#[test]
fn chains_resolve_to_representative() {
    let mut sub = Substitution::new();
    sub.bind(Variable::new("x"), Term::var("y"));
    sub.bind(Variable::new("y"), Term::constant("c"));
    assert_eq!(sub.resolve(&Term::var("x")), Term::constant("c"));
    assert_eq!(sub.find(&Term::var("x")), Term::constant("c"));
    assert_eq!(sub.resolve(&Term::var("z")), Term::var("z"));
}

#[test]
fn normalized_is_idempotent() {
    let mut sub = Substitution::new();
    sub.bind(Variable::new("x"), Term::var("y"));
    sub.bind(Variable::new("y"), Term::var("z"));
    let normal = sub.normalized();
    assert_eq!(normal.get(&Variable::new("x")), Some(&Term::var("z")));
    assert_eq!(normal.get(&Variable::new("y")), Some(&Term::var("z")));

    let atom = Atom::from_parts("R", vec![Term::var("x"), Term::var("y")]);
    let once = normal.apply_atom(&atom);
    assert_eq!(normal.apply_atom(&once), once);
}

#[test]
fn apply_is_simultaneous() {
    let sub: Substitution = [
        (Variable::new("x"), Term::var("y")),
        (Variable::new("y"), Term::var("x")),
    ]
    .into_iter()
    .collect();
    let atom = Atom::from_parts("R", vec![Term::var("x"), Term::var("y")]);
    assert_eq!(
        sub.apply_atom(&atom),
        Atom::from_parts("R", vec![Term::var("y"), Term::var("x")])
    );
}

#[test]
fn cyclic_renamings_terminate() {
    let sub: Substitution = [
        (Variable::new("x"), Term::var("y")),
        (Variable::new("y"), Term::var("x")),
    ]
    .into_iter()
    .collect();
    let resolved = sub.resolve(&Term::var("x"));
    assert!(resolved == Term::var("x") || resolved == Term::var("y"));
}
