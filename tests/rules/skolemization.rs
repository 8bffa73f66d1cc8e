//! Integration tests for skolemization

use gsat_foundation::{Atom, FunctionTerm, Term, Variable};
use gsat_rules::{Skolemizer, Tgd};

fn atom(name: &str, vars: &[&str]) -> Atom {
    Atom::from_parts(name, vars.iter().map(|v| Term::var(*v)).collect())
}

fn skolem(name: &str, vars: &[&str]) -> Term {
    let vars: Vec<Variable> = vars.iter().map(|v| Variable::new(*v)).collect();
    Term::Function(FunctionTerm::skolem(name, &vars))
}

#[test]
fn skolemize_uses_universal_variables() {
    let rule = Tgd::from_atoms(vec![atom("A", &["x", "z"])], vec![atom("R", &["x", "y"])]);
    let mut skolemizer = Skolemizer::new();
    let skolemized = skolemizer.skolemize(&rule);
    assert_eq!(
        skolemized,
        Tgd::from_atoms(
            vec![atom("A", &["x", "z"])],
            vec![Atom::from_parts("R", vec![Term::var("x"), skolem("sk#0", &["x", "z"])])]
        )
    );
    assert!(skolemized.is_full());
    assert_eq!(skolemizer.function_count(), 1);
}

#[test]
fn single_headed_splits_after_skolemizing() {
    let rule = Tgd::from_atoms(
        vec![atom("A", &["x"])],
        vec![atom("R", &["x", "y"]), atom("S", &["y"])],
    );
    let rules = Skolemizer::new().single_headed(&rule);
    assert_eq!(rules.len(), 2);
    assert!(rules.iter().all(|r| r.head().len() == 1));
    assert!(rules.iter().all(|r| r.head().is_functional()));
}

#[test]
fn frontier_projection_introduces_auxiliary_atom() {
    let rule = Tgd::from_atoms(vec![atom("A", &["x", "z"])], vec![atom("R", &["x", "y"])]);
    let mut skolemizer = Skolemizer::new();
    let rules = skolemizer.frontier_projected(&rule);
    assert_eq!(
        rules,
        vec![
            Tgd::from_atoms(vec![atom("A", &["x", "z"])], vec![atom("aux#0", &["x"])]),
            Tgd::from_atoms(
                vec![atom("aux#0", &["x"])],
                vec![Atom::from_parts("R", vec![Term::var("x"), skolem("sk#0", &["x"])])]
            ),
        ]
    );
    assert_eq!(skolemizer.predicate_count(), 1);
}

#[test]
fn full_rules_pass_through() {
    let rule = Tgd::from_atoms(vec![atom("A", &["x"])], vec![atom("B", &["x"])]);
    assert_eq!(Skolemizer::new().frontier_projected(&rule), vec![rule]);
}
