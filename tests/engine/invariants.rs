//! Integration tests for properties every saturation result must have
//!
//! Each output rule is full and guarded, and no output rule subsumes another.
//! Partial results cut short by the pop limit keep the same properties.

use gsat_engine::{Algorithm, Saturation, SaturationConfig, SaturationOutcome, Saturator};
use gsat_foundation::{Atom, Term};
use gsat_index::subsumes;
use gsat_rules::{Dependency, compute_guard};

fn atom(name: &str, vars: &[&str]) -> Atom {
    Atom::from_parts(name, vars.iter().map(|v| Term::var(*v)).collect())
}

const ALGORITHMS: [Algorithm; 3] = [
    Algorithm::Existential,
    Algorithm::Skolem,
    Algorithm::OrderedSkolem,
];

fn ontology() -> Vec<Dependency> {
    vec![
        Dependency::new(vec![atom("Person", &["x"])], vec![atom("hasParent", &["x", "y"])]),
        Dependency::new(
            vec![atom("hasParent", &["x", "y"])],
            vec![atom("Person", &["y"])],
        ),
        Dependency::new(
            vec![atom("hasParent", &["x", "y"]), atom("Person", &["y"])],
            vec![atom("HasPersonParent", &["x"])],
        ),
        Dependency::new(
            vec![atom("Employee", &["x"])],
            vec![atom("worksFor", &["x", "y"]), atom("Company", &["y"])],
        ),
        Dependency::new(
            vec![atom("worksFor", &["x", "y"]), atom("Company", &["y"])],
            vec![atom("Employed", &["x"])],
        ),
        Dependency::new(vec![atom("Employed", &["x"])], vec![atom("Person", &["x"])]),
        Dependency::new(
            vec![atom("Employed", &["x"]), atom("Retired", &["x"])],
            vec![Atom::bottom()],
        ),
    ]
}

fn chain(length: usize) -> Vec<Dependency> {
    (0..length)
        .flat_map(|i| {
            let role = format!("R{i}");
            let witness = format!("D{i}");
            [
                Dependency::new(
                    vec![atom(&format!("C{i}"), &["x"])],
                    vec![atom(&role, &["x", "y"]), atom(&witness, &["y"])],
                ),
                Dependency::new(
                    vec![atom(&role, &["x", "y"]), atom(&witness, &["y"])],
                    vec![atom(&format!("C{}", i + 1), &["x"])],
                ),
            ]
        })
        .collect()
}

fn assert_well_formed(result: &Saturation) {
    for rule in &result.full_rules {
        assert!(rule.is_full(), "non-full output rule {rule}");
        assert!(compute_guard(rule).is_ok(), "unguarded output rule {rule}");
    }
    for (i, a) in result.full_rules.iter().enumerate() {
        for (j, b) in result.full_rules.iter().enumerate() {
            if i != j {
                assert!(!subsumes(a, b), "{a} subsumes {b}");
            }
        }
    }
}

// =============================================================================
// Completed Runs
// =============================================================================

#[test]
fn ontology_output_is_guarded_and_minimal() {
    for algorithm in ALGORITHMS {
        let config = SaturationConfig::new().with_algorithm(algorithm);
        let result = Saturator::new(config).run(&ontology()).unwrap();
        assert!(result.is_complete());
        assert_well_formed(&result);
    }
}

#[test]
fn chain_output_is_guarded_and_minimal() {
    for algorithm in ALGORITHMS {
        let config = SaturationConfig::exhaustive().with_algorithm(algorithm);
        let result = Saturator::new(config).run(&chain(5)).unwrap();
        assert!(result.is_complete());
        assert_well_formed(&result);
    }
}

// =============================================================================
// Partial Runs
// =============================================================================

#[test]
fn pop_limit_stops_mid_fixpoint() {
    for algorithm in ALGORITHMS {
        let config = SaturationConfig::new().with_algorithm(algorithm).with_max_pops(3);
        let result = Saturator::new(config).run(&chain(4)).unwrap();
        assert_eq!(result.outcome, SaturationOutcome::PopLimitReached);
        assert!(!result.is_complete());
        assert_eq!(result.stats.pops, 3);
        assert!(!result.full_rules.is_empty());
        assert_well_formed(&result);
    }
}

#[test]
fn every_partial_result_is_guarded_and_minimal() {
    for algorithm in ALGORITHMS {
        let config = SaturationConfig::new().with_algorithm(algorithm);
        let complete = Saturator::new(config.clone()).run(&ontology()).unwrap();
        assert!(complete.is_complete());

        for limit in 0..complete.stats.pops {
            let result = Saturator::new(config.clone().with_max_pops(limit))
                .run(&ontology())
                .unwrap();
            assert_eq!(result.outcome, SaturationOutcome::PopLimitReached);
            assert_eq!(result.stats.pops, limit);
            assert_well_formed(&result);
        }

        let exact = Saturator::new(config.with_max_pops(complete.stats.pops))
            .run(&ontology())
            .unwrap();
        assert!(exact.is_complete());
        assert_eq!(exact.full_rules, complete.full_rules);
    }
}
