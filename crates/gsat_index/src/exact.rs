//! Subsumption by exact atom identity.
//!
//! Every distinct atom gets its own id and there is no bagging, so a trie walk
//! yields exactly the subsumption partners and no verification is needed.
//! Atom ids are assigned on insertion and never reclaimed; queries never
//! number new atoms.

use std::collections::BTreeSet;

use gsat_foundation::{Atom, AtomSet, Numbering};
use gsat_rules::{RuleArena, RuleId, Tgd};

use crate::subsumer::Subsumer;
use crate::trie::SignatureTrie;

/// Subsumer storing one rule per exact (body, head) atom-id signature.
#[derive(Clone, Debug, Default)]
pub struct ExactAtomSubsumer {
    atoms: Numbering<Atom>,
    trie: SignatureTrie<Option<RuleId>>,
    members: BTreeSet<RuleId>,
}

impl ExactAtomSubsumer {
    /// Creates an empty subsumer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns how many distinct atoms have been numbered.
    #[must_use]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    fn encode(&mut self, atoms: &AtomSet) -> Vec<u32> {
        let mut ids: Vec<u32> = atoms.iter().map(|a| self.atoms.number(a)).collect();
        ids.sort_unstable();
        ids
    }

    fn lookup(&self, atoms: &AtomSet) -> Option<Vec<u32>> {
        let mut ids = atoms
            .iter()
            .map(|a| self.atoms.get(a))
            .collect::<Option<Vec<u32>>>()?;
        ids.sort_unstable();
        Some(ids)
    }

    fn lookup_known(&self, atoms: &AtomSet) -> Vec<u32> {
        let mut ids: Vec<u32> = atoms.iter().filter_map(|a| self.atoms.get(a)).collect();
        ids.sort_unstable();
        ids
    }

    fn subsuming(&self, tgd: &Tgd) -> Vec<RuleId> {
        let Some(head) = self.lookup(tgd.head()) else {
            return Vec::new();
        };
        let body = self.lookup_known(tgd.body());
        let mut found = BTreeSet::new();
        self.trie
            .visit_subsuming(&body, &head, &mut |leaf| found.extend(*leaf));
        found.into_iter().collect()
    }

    fn subsumed(&self, tgd: &Tgd) -> Vec<RuleId> {
        let Some(body) = self.lookup(tgd.body()) else {
            return Vec::new();
        };
        let head = self.lookup_known(tgd.head());
        let mut found = BTreeSet::new();
        self.trie
            .visit_subsumed(&body, &head, &mut |leaf| found.extend(*leaf));
        found.into_iter().collect()
    }
}

impl Subsumer for ExactAtomSubsumer {
    fn is_subsumed(&self, _arena: &RuleArena, tgd: &Tgd) -> bool {
        !self.subsuming(tgd).is_empty()
    }

    fn remove_subsumed(&mut self, arena: &RuleArena, tgd: &Tgd) -> Vec<RuleId> {
        let mut removed = Vec::new();
        for id in self.subsumed(tgd) {
            let Some(stored) = arena.get(id) else {
                continue;
            };
            self.remove(id, stored.tgd());
            removed.push(id);
        }
        removed
    }

    fn insert(&mut self, id: RuleId, tgd: &Tgd) {
        let body = self.encode(tgd.body());
        let head = self.encode(tgd.head());
        *self.trie.leaf_mut(&body, &head) = Some(id);
        self.members.insert(id);
    }

    fn remove(&mut self, id: RuleId, tgd: &Tgd) {
        if !self.members.remove(&id) {
            return;
        }
        let (Some(body), Some(head)) = (self.lookup(tgd.body()), self.lookup(tgd.head())) else {
            return;
        };
        self.trie.update(&body, &head, |leaf| {
            if *leaf == Some(id) {
                *leaf = None;
            }
        });
    }

    fn contains(&self, id: RuleId) -> bool {
        self.members.contains(&id)
    }

    fn all(&self) -> Vec<RuleId> {
        self.members.iter().copied().collect()
    }

    fn len(&self) -> usize {
        self.members.len()
    }
}
