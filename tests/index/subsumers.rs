//! Integration tests for subsumers
//!
//! Every strategy must keep exactly the same rules; the filters only decide
//! how many candidates get verified.

use gsat_foundation::{Atom, Term};
use gsat_index::{
    ExactAtomSubsumer, ExhaustiveFilter, FilterSubsumer, Granularity, PredicateFilter, Subsumer,
    TrieFilter, subsumes,
};
use gsat_rules::{Rule, RuleArena, RuleId, Tgd};

fn atom(name: &str) -> Atom {
    Atom::from_parts(name, vec![Term::var("x")])
}

fn rule(body: &[&str], head: &[&str]) -> Tgd {
    Tgd::from_atoms(body.iter().map(|n| atom(n)), head.iter().map(|n| atom(n)))
}

fn strategies() -> Vec<(&'static str, Box<dyn Subsumer>)> {
    let mut strategies: Vec<(&'static str, Box<dyn Subsumer>)> = Vec::new();
    strategies.push(("exhaustive", Box::new(FilterSubsumer::new(ExhaustiveFilter::new()))));
    strategies.push((
        "predicate",
        Box::new(FilterSubsumer::new(PredicateFilter::new(Granularity::Predicate))),
    ));
    strategies.push((
        "atom",
        Box::new(FilterSubsumer::new(PredicateFilter::new(Granularity::Atom))),
    ));
    strategies.push(("trie", Box::new(FilterSubsumer::new(TrieFilter::new(150)))));
    strategies.push(("small trie", Box::new(FilterSubsumer::new(TrieFilter::new(2)))));
    strategies.push(("exact", Box::new(ExactAtomSubsumer::new())));
    strategies
}

/// Admits rules the way the saturation loop does and returns the survivors.
fn admit_all(subsumer: &mut dyn Subsumer, rules: &[Tgd]) -> Vec<RuleId> {
    let mut arena = RuleArena::new();
    for tgd in rules {
        let interned = arena.intern(tgd.clone(), Rule::guarded).unwrap();
        if !interned.is_new() || subsumer.is_subsumed(&arena, tgd) {
            continue;
        }
        subsumer.remove_subsumed(&arena, tgd);
        subsumer.insert(interned.id(), tgd);
    }
    subsumer.all()
}

#[test]
fn subsumption_direction() {
    let general = rule(&["A"], &["B", "C"]);
    let specific = rule(&["A", "D"], &["B"]);
    assert!(subsumes(&general, &specific));
    assert!(!subsumes(&specific, &general));
    assert!(subsumes(&general, &general));
}

#[test]
fn general_rule_blocks_specific_rule() {
    for (name, mut subsumer) in strategies() {
        let survivors = admit_all(
            subsumer.as_mut(),
            &[rule(&["A"], &["B", "C"]), rule(&["A", "D"], &["B"])],
        );
        assert_eq!(survivors, vec![RuleId::new(0)], "{name}");
    }
}

#[test]
fn general_rule_evicts_specific_rules() {
    for (name, mut subsumer) in strategies() {
        let survivors = admit_all(
            subsumer.as_mut(),
            &[
                rule(&["A", "D"], &["B"]),
                rule(&["A", "E"], &["C"]),
                rule(&["F"], &["B"]),
                rule(&["A"], &["B", "C"]),
            ],
        );
        assert_eq!(survivors, vec![RuleId::new(2), RuleId::new(3)], "{name}");
    }
}

#[test]
fn incomparable_rules_coexist() {
    for (name, mut subsumer) in strategies() {
        let survivors = admit_all(
            subsumer.as_mut(),
            &[
                rule(&["A"], &["B"]),
                rule(&["B"], &["A"]),
                rule(&["A", "B"], &["C"]),
            ],
        );
        assert_eq!(survivors.len(), 3, "{name}");
        assert_eq!(subsumer.len(), 3, "{name}");
    }
}

#[test]
fn removal_makes_room() {
    for (name, mut subsumer) in strategies() {
        let mut arena = RuleArena::new();
        let general = rule(&["A"], &["B"]);
        let specific = rule(&["A", "C"], &["B"]);
        let id = arena.intern(general.clone(), Rule::guarded).unwrap().id();
        arena.intern(specific.clone(), Rule::guarded).unwrap();

        subsumer.insert(id, &general);
        assert!(subsumer.is_subsumed(&arena, &specific), "{name}");
        subsumer.remove(id, &general);
        assert!(!subsumer.contains(id), "{name}");
        assert!(!subsumer.is_subsumed(&arena, &specific), "{name}");
        assert!(subsumer.is_empty(), "{name}");
    }
}
