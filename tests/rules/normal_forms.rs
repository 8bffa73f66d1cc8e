//! Integration tests for head and variable normal forms

use gsat_foundation::{Atom, Term};
use gsat_rules::{NamingMode, Tgd, VariableNaming, hnf, strip_tautology, vnf};

fn atom(name: &str, vars: &[&str]) -> Atom {
    Atom::from_parts(name, vars.iter().map(|v| Term::var(*v)).collect())
}

fn tgd(body: Vec<Atom>, head: Vec<Atom>) -> Tgd {
    Tgd::from_atoms(body, head)
}

// =============================================================================
// Head Normal Form
// =============================================================================

#[test]
fn hnf_separates_full_head_atoms() {
    let rule = tgd(
        vec![atom("A", &["x"])],
        vec![atom("R", &["x", "y"]), atom("S", &["y"]), atom("B", &["x"])],
    );
    let mut parts = hnf(&rule);
    parts.sort();
    let mut expected = vec![
        tgd(vec![atom("A", &["x"])], vec![atom("R", &["x", "y"]), atom("S", &["y"])]),
        tgd(vec![atom("A", &["x"])], vec![atom("B", &["x"])]),
    ];
    expected.sort();
    assert_eq!(parts, expected);
}

#[test]
fn hnf_leaves_full_rules_alone() {
    let rule = tgd(vec![atom("A", &["x"])], vec![atom("B", &["x"]), atom("C", &["x"])]);
    assert_eq!(hnf(&rule), vec![rule]);
}

#[test]
fn tautologies_are_stripped() {
    let rule = tgd(vec![atom("A", &["x"])], vec![atom("A", &["x"]), atom("B", &["x"])]);
    assert_eq!(
        strip_tautology(rule),
        Some(tgd(vec![atom("A", &["x"])], vec![atom("B", &["x"])]))
    );
    assert_eq!(
        strip_tautology(tgd(vec![atom("A", &["x"])], vec![atom("A", &["x"])])),
        None
    );
}

// =============================================================================
// Variable Normal Form
// =============================================================================

#[test]
fn vnf_renames_universals_and_existentials() {
    let rule = tgd(vec![atom("A", &["x"])], vec![atom("R", &["x", "y"])]);
    assert_eq!(
        vnf(&rule, &VariableNaming::new()),
        tgd(vec![atom("A", &["u0"])], vec![atom("R", &["u0", "e0"])])
    );
}

#[test]
fn vnf_is_idempotent() {
    let naming = VariableNaming::new();
    let rule = tgd(
        vec![atom("R", &["a", "b"]), atom("R", &["b", "c"]), atom("G", &["a", "b", "c"])],
        vec![atom("P", &["c"]), atom("S", &["a", "d"])],
    );
    let once = vnf(&rule, &naming);
    assert_eq!(vnf(&once, &naming), once);
}

#[test]
fn vnf_identifies_renamed_variants() {
    let naming = VariableNaming::new();
    let a = tgd(
        vec![atom("R", &["x", "y"]), atom("U", &["y"])],
        vec![atom("P", &["x"])],
    );
    let b = tgd(
        vec![atom("R", &["s", "t"]), atom("U", &["t"])],
        vec![atom("P", &["s"])],
    );
    assert_eq!(vnf(&a, &naming), vnf(&b, &naming));
}

#[test]
fn custom_prefixes_are_used() {
    let naming = VariableNaming::new()
        .with_mode(NamingMode::Naive)
        .with_prefixes("w", "v");
    let rule = tgd(vec![atom("A", &["x"])], vec![atom("R", &["x", "y"])]);
    assert_eq!(
        vnf(&rule, &naming),
        tgd(vec![atom("A", &["v0"])], vec![atom("R", &["v0", "w0"])])
    );
}
