//! Integration tests for dependencies, guards, and rule construction

use gsat_foundation::{Atom, ErrorKind, FunctionTerm, Term, Variable};
use gsat_rules::{Dependency, Rule, RuleArena, Side, Tgd, check_arities, compute_guard};

fn atom(name: &str, vars: &[&str]) -> Atom {
    Atom::from_parts(name, vars.iter().map(|v| Term::var(*v)).collect())
}

fn tgd(body: Vec<Atom>, head: Vec<Atom>) -> Tgd {
    Tgd::from_atoms(body, head)
}

// =============================================================================
// Input Contract
// =============================================================================

#[test]
fn empty_head_is_not_a_tgd() {
    assert!(!Dependency::new(vec![atom("A", &["x"])], vec![]).is_tgd());
    assert!(Dependency::new(vec![atom("A", &["x"])], vec![atom("B", &["x"])]).is_tgd());
}

#[test]
fn function_terms_are_malformed_input() {
    let witness = Term::Function(FunctionTerm::skolem("f", &[Variable::new("x")]));
    let dependency = Dependency::new(
        vec![Atom::from_parts("A", vec![witness])],
        vec![atom("B", &["x"])],
    );
    let err = check_arities(&[dependency]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MalformedInput(_)));
}

#[test]
fn declared_existentials_must_not_occur_in_body() {
    let dependency = Dependency::new(vec![atom("A", &["x"])], vec![atom("R", &["x", "y"])])
        .with_existentials(vec![Variable::new("x")]);
    assert!(matches!(
        dependency.validate().unwrap_err().kind,
        ErrorKind::MalformedInput(_)
    ));
}

#[test]
fn arity_mismatch_reports_input_position() {
    let input = vec![
        Dependency::new(vec![atom("A", &["x"])], vec![atom("B", &["x"])]),
        Dependency::new(vec![atom("C", &["x"])], vec![atom("A", &["x", "x"])]),
    ];
    let err = check_arities(&input).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ArityMismatch { .. }));
    assert_eq!(err.context.and_then(|c| c.input_index), Some(1));
}

// =============================================================================
// Guards
// =============================================================================

#[test]
fn guard_covers_every_body_variable() {
    let rule = tgd(
        vec![atom("A", &["x"]), atom("R", &["x", "y"])],
        vec![atom("B", &["y"])],
    );
    assert_eq!(compute_guard(&rule).unwrap(), atom("R", &["x", "y"]));
}

#[test]
fn guard_ties_break_on_predicate_name() {
    let rule = tgd(
        vec![atom("S", &["y", "x"]), atom("R", &["x", "y"])],
        vec![atom("B", &["x"])],
    );
    assert_eq!(compute_guard(&rule).unwrap(), atom("R", &["x", "y"]));
}

#[test]
fn unguarded_rules_are_rejected() {
    let rule = tgd(
        vec![atom("R", &["x"]), atom("S", &["y"])],
        vec![atom("T", &["x", "y"])],
    );
    let err = Rule::guarded(rule).unwrap_err();
    assert!(err.is_discardable());
}

#[test]
fn empty_body_is_unguarded() {
    assert!(compute_guard(&tgd(vec![], vec![atom("A", &["x"])])).is_err());
}

// =============================================================================
// Selection
// =============================================================================

#[test]
fn skolem_heads_select_the_head() {
    let witness = Term::Function(FunctionTerm::skolem("f", &[Variable::new("x")]));
    let producer = tgd(
        vec![atom("A", &["x"])],
        vec![Atom::from_parts("R", vec![Term::var("x"), witness])],
    );
    let rule = Rule::skolemized(producer).unwrap();
    assert_eq!(rule.selection().map(|s| s.side()), Some(Side::Head));
}

#[test]
fn datalog_rules_select_guard_candidates() {
    let consumer = tgd(
        vec![atom("R", &["x", "y"]), atom("U", &["y"])],
        vec![atom("P", &["x"])],
    );
    let rule = Rule::skolemized(consumer).unwrap();
    let selection = rule.selection().unwrap();
    assert_eq!(selection.side(), Side::Body);
    assert_eq!(selection.atoms(), &[atom("R", &["x", "y"])]);
}

#[test]
fn guarded_rules_have_no_selection() {
    let rule = Rule::guarded(tgd(vec![atom("A", &["x"])], vec![atom("B", &["x"])])).unwrap();
    assert!(rule.selection().is_none());
    assert_eq!(rule.guard(), &atom("A", &["x"]));
}

// =============================================================================
// Arena
// =============================================================================

#[test]
fn arena_interns_structurally_equal_rules_once() {
    let mut arena = RuleArena::new();
    let first = arena
        .intern(tgd(vec![atom("A", &["x"])], vec![atom("B", &["x"])]), Rule::guarded)
        .unwrap();
    let second = arena
        .intern(tgd(vec![atom("A", &["x"])], vec![atom("B", &["x"])]), Rule::guarded)
        .unwrap();
    assert!(first.is_new());
    assert!(!second.is_new());
    assert_eq!(first.id(), second.id());
    assert_eq!(arena.len(), 1);
}

#[test]
fn arena_does_not_store_failed_builds() {
    let mut arena = RuleArena::new();
    let unguarded = tgd(
        vec![atom("R", &["x"]), atom("S", &["y"])],
        vec![atom("T", &["x", "y"])],
    );
    assert!(arena.intern(unguarded.clone(), Rule::guarded).is_err());
    assert!(arena.find(&unguarded).is_none());
    assert!(arena.is_empty());
}
