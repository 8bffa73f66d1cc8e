//! Binary resolution between skolemized rules.

use gsat_rules::{Rule, Tgd};
use gsat_unify::most_general_unifier;

use crate::evolve::RENAME_PREFIX;

/// Resolves a head-selected rule `producer` against the selected body atoms
/// of `consumer`.
///
/// For `producer = β → H` and each selected atom `A'` of `consumer` (renamed
/// apart) unifying with `H` under `θ`, yields
/// `θ(β ∪ body(consumer) \ {A'}) → θ(head(consumer))`. Resolvents containing
/// nested function terms are dropped. Returns nothing if `consumer` carries
/// no selection.
#[must_use]
pub fn resolve(producer: &Rule, consumer: &Rule) -> Vec<Tgd> {
    let Some(selection) = consumer.selection() else {
        return Vec::new();
    };
    let renaming = consumer.tgd().renaming_apart(RENAME_PREFIX, producer.tgd());
    let renamed = consumer.tgd().apply(&renaming);

    let mut resolvents = Vec::new();
    for selected in selection.atoms() {
        let selected = renaming.apply_atom(selected);
        for head in producer.head().iter() {
            let Some(theta) = most_general_unifier(head, &selected, None) else {
                continue;
            };
            let body = producer.body().union(&renamed.body().remove(&selected));
            let resolvent = Tgd::new(theta.apply_set(&body), theta.apply_set(renamed.head()));
            if !resolvent.has_nested_terms() {
                resolvents.push(resolvent);
            }
        }
    }
    resolvents.sort();
    resolvents.dedup();
    resolvents
}
