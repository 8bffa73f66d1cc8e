//! Integration tests for derived rule sets

use gsat_engine::{Algorithm, SaturationConfig, Saturator, evolve};
use gsat_foundation::{Atom, Term};
use gsat_rules::{Dependency, Tgd, hnf};

fn atom(name: &str, vars: &[&str]) -> Atom {
    Atom::from_parts(name, vars.iter().map(|v| Term::var(*v)).collect())
}

fn tgd(body: Vec<Atom>, head: Vec<Atom>) -> Tgd {
    Tgd::from_atoms(body, head)
}

const ALGORITHMS: [Algorithm; 3] = [
    Algorithm::Existential,
    Algorithm::Skolem,
    Algorithm::OrderedSkolem,
];

fn saturate(algorithm: Algorithm, input: &[Dependency]) -> Vec<Tgd> {
    let config = SaturationConfig::new().with_algorithm(algorithm);
    let result = Saturator::new(config).run(input).unwrap();
    assert!(result.is_complete());
    result.full_rules
}

// =============================================================================
// Scenario
// =============================================================================

/// A(x) → ∃y R(x,y);  R(x,y) → U(y);  R(x,y) ∧ U(y) → P(x)
fn scenario() -> Vec<Dependency> {
    vec![
        Dependency::new(vec![atom("A", &["x"])], vec![atom("R", &["x", "y"])]),
        Dependency::new(vec![atom("R", &["x", "y"])], vec![atom("U", &["y"])]),
        Dependency::new(
            vec![atom("R", &["x", "y"]), atom("U", &["y"])],
            vec![atom("P", &["x"])],
        ),
    ]
}

#[test]
fn scenario_derives_shortcut() {
    let mut expected = vec![
        tgd(vec![atom("R", &["u1", "u0"])], vec![atom("U", &["u0"])]),
        tgd(
            vec![atom("R", &["u0", "u1"]), atom("U", &["u1"])],
            vec![atom("P", &["u0"])],
        ),
        tgd(vec![atom("A", &["u0"])], vec![atom("P", &["u0"])]),
    ];
    expected.sort();

    for algorithm in ALGORITHMS {
        assert_eq!(saturate(algorithm, &scenario()), expected, "{algorithm:?}");
    }
}

#[test]
fn scenario_output_is_datalog() {
    for algorithm in ALGORITHMS {
        for rule in saturate(algorithm, &scenario()) {
            assert!(rule.is_full(), "{rule}");
            assert!(rule.is_function_free(), "{rule}");
        }
    }
}

#[test]
fn evolve_step_joins_the_witness() {
    let non_full = tgd(vec![atom("A", &["x"])], vec![atom("R", &["x", "y"]), atom("U", &["y"])]);
    let full = tgd(
        vec![atom("R", &["x", "y"]), atom("U", &["y"])],
        vec![atom("P", &["x"])],
    );
    let evolved = evolve(&non_full, &full);
    assert_eq!(evolved.len(), 1);
    assert_eq!(evolved[0].body(), non_full.body());
    assert!(evolved[0].head().contains(&atom("P", &["x"])));

    let full_part: Vec<Tgd> = hnf(&evolved[0]).into_iter().filter(Tgd::is_full).collect();
    assert_eq!(full_part, vec![tgd(vec![atom("A", &["x"])], vec![atom("P", &["x"])])]);
}

// =============================================================================
// Constraints and Chains
// =============================================================================

#[test]
fn negative_constraints_propagate() {
    let input = vec![
        Dependency::new(vec![atom("A", &["x"])], vec![atom("R", &["x", "y"])]),
        Dependency::new(vec![atom("R", &["x", "y"])], vec![atom("B", &["y"])]),
        Dependency::new(
            vec![atom("R", &["x", "y"]), atom("B", &["y"])],
            vec![Atom::bottom()],
        ),
    ];
    let inconsistent = tgd(vec![atom("A", &["u0"])], vec![Atom::bottom()]);
    for algorithm in ALGORITHMS {
        let rules = saturate(algorithm, &input);
        assert!(rules.contains(&inconsistent), "{algorithm:?}: {rules:?}");
    }
}

/// `C_i(x) → ∃y R_i(x,y) ∧ D_i(y)` and `R_i(x,y) ∧ D_i(y) → C_{i+1}(x)`.
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

#[test]
fn chain_derives_one_shortcut_per_step() {
    let length = 4;
    for algorithm in ALGORITHMS {
        let rules = saturate(algorithm, &chain(length));
        assert_eq!(rules.len(), 2 * length, "{algorithm:?}: {rules:?}");
        for i in 0..length {
            let shortcut = tgd(
                vec![atom(&format!("C{i}"), &["u0"])],
                vec![atom(&format!("C{}", i + 1), &["u0"])],
            );
            assert!(rules.contains(&shortcut), "{algorithm:?}: missing {shortcut}");
        }
    }
}

#[test]
fn algorithms_agree_on_chains() {
    let input = chain(3);
    let existential = saturate(Algorithm::Existential, &input);
    assert_eq!(saturate(Algorithm::Skolem, &input), existential);
    assert_eq!(saturate(Algorithm::OrderedSkolem, &input), existential);
}
