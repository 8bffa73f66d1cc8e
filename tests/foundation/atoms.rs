//! Integration tests for terms, atoms, and atom sets

use gsat_foundation::{Atom, AtomSet, FunctionSymbol, FunctionTerm, Numbering, Predicate, Term, Variable};

fn atom(name: &str, vars: &[&str]) -> Atom {
    Atom::from_parts(name, vars.iter().map(|v| Term::var(*v)).collect())
}

// =============================================================================
// Terms and Atoms
// =============================================================================

#[test]
fn atom_display() {
    let a = Atom::from_parts("R", vec![Term::var("x"), Term::constant("c")]);
    assert_eq!(a.to_string(), "R(x, <c>)");
}

#[test]
fn atom_arity_is_checked() {
    assert!(Atom::new(Predicate::new("R", 2), vec![Term::var("x")]).is_err());
}

#[test]
fn function_term_arity_is_checked() {
    let f = FunctionSymbol::new("f", 2);
    assert!(FunctionTerm::new(f.clone(), vec![Term::var("x")]).is_err());
    assert!(FunctionTerm::new(f, vec![Term::var("x"), Term::var("y")]).is_ok());
}

#[test]
fn skolem_terms_make_atoms_functional() {
    let witness = FunctionTerm::skolem("f", &[Variable::new("x")]);
    let a = Atom::from_parts("R", vec![Term::var("x"), Term::Function(witness)]);
    assert!(a.is_functional());
    assert!(!atom("R", &["x", "y"]).is_functional());
    assert_eq!(a.to_string(), "R(x, f(x))");
}

#[test]
fn nested_terms_are_detected() {
    let inner = FunctionTerm::skolem("g", &[Variable::new("x")]);
    let outer = FunctionTerm::new(FunctionSymbol::new("f", 1), vec![Term::Function(inner.clone())])
        .unwrap();
    assert!(Term::Function(outer).is_nested());
    assert!(!Term::Function(inner).is_nested());
}

// =============================================================================
// Atom Sets
// =============================================================================

#[test]
fn atom_sets_ignore_order_and_duplicates() {
    let a: AtomSet = [atom("A", &["x"]), atom("B", &["x"]), atom("A", &["x"])]
        .into_iter()
        .collect();
    let b: AtomSet = [atom("B", &["x"]), atom("A", &["x"])].into_iter().collect();
    assert_eq!(a, b);
    assert_eq!(a.len(), 2);
}

#[test]
fn atom_set_algebra() {
    let ab: AtomSet = [atom("A", &["x"]), atom("B", &["x"])].into_iter().collect();
    let a = AtomSet::unit(atom("A", &["x"]));
    assert!(a.is_subset(&ab));
    assert!(!ab.is_subset(&a));
    assert_eq!(ab.difference(&a), AtomSet::unit(atom("B", &["x"])));
    assert_eq!(a.union(&ab), ab);
}

#[test]
fn empty_atom_set_displays_as_top() {
    assert_eq!(AtomSet::new().to_string(), "⊤");
}

// =============================================================================
// Numbering
// =============================================================================

#[test]
fn numbering_is_first_seen() {
    let mut numbering = Numbering::new();
    assert_eq!(numbering.number(&"R"), 0);
    assert_eq!(numbering.number(&"S"), 1);
    assert_eq!(numbering.number(&"R"), 0);
    assert_eq!(numbering.get(&"T"), None);
    assert_eq!(numbering.key(1), Some(&"S"));
    assert_eq!(numbering.len(), 2);
}
