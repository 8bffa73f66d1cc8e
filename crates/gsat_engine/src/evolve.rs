//! The evolve step: resolving a non-full rule against a full rule.
//!
//! Body atoms of the full rule are matched against head atoms of the
//! non-full rule. A unifier is admissible only if it passes the
//! existential-variable check: existential variables stay distinct and
//! unbound, no universal variable of the non-full rule is identified with
//! one, and no unmatched body atom ends up mentioning one.

use gsat_foundation::{Atom, AtomSet, Substitution, Term, Variable};
use gsat_rules::Tgd;
use gsat_unify::most_general_unifier;

/// Prefix for the variables of the full rule after renaming apart.
pub(crate) const RENAME_PREFIX: &str = "z";

/// Computes every admissible resolvent of `non_full` with `full`.
///
/// Each resolvent joins a non-empty subset of `full`'s body atoms with head
/// atoms of `non_full`; its body is the non-full body plus the unjoined full
/// body atoms and its head is the union of both heads, all under the unifier.
/// Resolvents are returned as computed, without normalization.
#[must_use]
pub fn evolve(non_full: &Tgd, full: &Tgd) -> Vec<Tgd> {
    let full = full.rename_apart(RENAME_PREFIX, non_full);
    let search = Search {
        body: full.body().iter().cloned().collect(),
        heads: non_full.head().iter().cloned().collect(),
        existentials: non_full.existential_variables(),
        universals: non_full.universal_variables(),
    };

    let mut joined = vec![false; search.body.len()];
    let mut unifiers = Vec::new();
    search.extend(0, &Substitution::new(), &mut joined, &mut unifiers);

    let mut resolvents: Vec<Tgd> = unifiers
        .into_iter()
        .map(|(theta, joined)| {
            let rest: AtomSet = search
                .body
                .iter()
                .zip(&joined)
                .filter(|(_, j)| !**j)
                .map(|(atom, _)| atom.clone())
                .collect();
            let body = non_full.body().union(&rest);
            let head = non_full.head().union(full.head());
            Tgd::new(theta.apply_set(&body), theta.apply_set(&head))
        })
        .collect();
    resolvents.sort();
    resolvents.dedup();
    resolvents
}

struct Search {
    body: Vec<Atom>,
    heads: Vec<Atom>,
    existentials: Vec<Variable>,
    universals: Vec<Variable>,
}

impl Search {
    /// Decides, for body atom `i` onwards, whether to skip it or join it
    /// with a head atom, collecting every admissible complete choice.
    fn extend(
        &self,
        i: usize,
        theta: &Substitution,
        joined: &mut [bool],
        out: &mut Vec<(Substitution, Vec<bool>)>,
    ) {
        if i == self.body.len() {
            if joined.iter().any(|j| *j) && self.admissible(theta, joined) {
                out.push((theta.clone(), joined.to_vec()));
            }
            return;
        }

        self.extend(i + 1, theta, joined, out);

        let atom = &self.body[i];
        for head in self.heads.iter().filter(|h| h.predicate() == atom.predicate()) {
            // Body first, so body variables are the ones bound to head terms.
            let Some(extended) = most_general_unifier(atom, head, Some(theta)) else {
                continue;
            };
            if !self.existentials_intact(&extended) {
                continue;
            }
            joined[i] = true;
            self.extend(i + 1, &extended, joined, out);
            joined[i] = false;
        }
    }

    fn existentials_intact(&self, theta: &Substitution) -> bool {
        self.existentials.iter().all(|e| !theta.binds(e))
    }

    fn mentions_existential(&self, term: &Term) -> bool {
        self.existentials.iter().any(|e| term.mentions(e))
    }

    fn admissible(&self, theta: &Substitution, joined: &[bool]) -> bool {
        if !self.existentials_intact(theta) {
            return false;
        }
        let universal_leak = self.universals.iter().any(|u| {
            theta
                .get(u)
                .is_some_and(|term| self.mentions_existential(term))
        });
        if universal_leak {
            return false;
        }
        self.body.iter().zip(joined).filter(|(_, j)| !**j).all(|(atom, _)| {
            !theta
                .apply_atom(atom)
                .terms()
                .iter()
                .any(|t| self.mentions_existential(t))
        })
    }
}
