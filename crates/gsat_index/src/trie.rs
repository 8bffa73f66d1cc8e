//! Signature tries for subsumption candidates.
//!
//! A rule is encoded as two sorted id sequences, one for its body and one for
//! its head. The trie stores the body sequence along [`BodyNode`]s, then the
//! head sequence along [`HeadNode`]s hanging off the body node where the
//! body sequence ends. Subset and superset queries walk the trie, skipping
//! ids on whichever side is allowed to hold extras.

use std::collections::{BTreeMap, BTreeSet};

use gsat_foundation::{AtomSet, Numbering, Predicate};
use gsat_rules::{RuleId, Tgd};

use crate::filter::SubsumptionFilter;

/// Payload stored where a head sequence ends.
pub(crate) trait Leaf: Default {
    fn is_vacant(&self) -> bool;
}

impl Leaf for BTreeSet<RuleId> {
    fn is_vacant(&self) -> bool {
        self.is_empty()
    }
}

impl Leaf for Option<RuleId> {
    fn is_vacant(&self) -> bool {
        self.is_none()
    }
}

#[derive(Clone, Debug)]
pub(crate) struct HeadNode<L> {
    children: BTreeMap<u32, HeadNode<L>>,
    leaf: L,
}

impl<L: Leaf> Default for HeadNode<L> {
    fn default() -> Self {
        Self {
            children: BTreeMap::new(),
            leaf: L::default(),
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct BodyNode<L> {
    children: BTreeMap<u32, BodyNode<L>>,
    head: Option<Box<HeadNode<L>>>,
}

impl<L: Leaf> Default for BodyNode<L> {
    fn default() -> Self {
        Self {
            children: BTreeMap::new(),
            head: None,
        }
    }
}

/// Two-level trie keyed by sorted body ids, then sorted head ids.
#[derive(Clone, Debug)]
pub(crate) struct SignatureTrie<L> {
    root: BodyNode<L>,
}

impl<L: Leaf> Default for SignatureTrie<L> {
    fn default() -> Self {
        Self {
            root: BodyNode::default(),
        }
    }
}

impl<L: Leaf> SignatureTrie<L> {
    /// Returns the leaf for the exact signature, creating the path.
    pub(crate) fn leaf_mut(&mut self, body: &[u32], head: &[u32]) -> &mut L {
        let mut node = &mut self.root;
        for id in body {
            node = node.children.entry(*id).or_default();
        }
        let mut head_node: &mut HeadNode<L> = node.head.get_or_insert_with(Box::default);
        for id in head {
            head_node = head_node.children.entry(*id).or_default();
        }
        &mut head_node.leaf
    }

    /// Applies `update` to the leaf of the exact signature, if present, then
    /// prunes branches left without leaves.
    pub(crate) fn update(&mut self, body: &[u32], head: &[u32], update: impl FnOnce(&mut L)) {
        prune_body(&mut self.root, body, head, update);
    }

    /// Visits leaves whose body is a subset of `body` and whose head is a
    /// superset of `head`.
    pub(crate) fn visit_subsuming(&self, body: &[u32], head: &[u32], visit: &mut impl FnMut(&L)) {
        subset_body(&self.root, body, &mut |node| {
            if let Some(head_node) = &node.head {
                superset_head(head_node, head, visit);
            }
        });
    }

    /// Visits leaves whose body is a superset of `body` and whose head is a
    /// subset of `head`.
    pub(crate) fn visit_subsumed(&self, body: &[u32], head: &[u32], visit: &mut impl FnMut(&L)) {
        superset_body(&self.root, body, &mut |node| {
            if let Some(head_node) = &node.head {
                subset_head(head_node, head, visit);
            }
        });
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.root.children.is_empty() && self.root.head.is_none()
    }
}

/// Visits body nodes whose path is a subset of `query`.
fn subset_body<L>(node: &BodyNode<L>, query: &[u32], visit: &mut impl FnMut(&BodyNode<L>)) {
    visit(node);
    for (i, id) in query.iter().enumerate() {
        if let Some(child) = node.children.get(id) {
            subset_body(child, &query[i + 1..], visit);
        }
    }
}

/// Visits body nodes whose path is a superset of `required`.
fn superset_body<L>(node: &BodyNode<L>, required: &[u32], visit: &mut impl FnMut(&BodyNode<L>)) {
    let Some((&next, rest)) = required.split_first() else {
        visit(node);
        for child in node.children.values() {
            superset_body(child, required, visit);
        }
        return;
    };
    for (&id, child) in node.children.range(..=next) {
        if id == next {
            superset_body(child, rest, visit);
        } else {
            superset_body(child, required, visit);
        }
    }
}

fn subset_head<L>(node: &HeadNode<L>, query: &[u32], visit: &mut impl FnMut(&L)) {
    visit(&node.leaf);
    for (i, id) in query.iter().enumerate() {
        if let Some(child) = node.children.get(id) {
            subset_head(child, &query[i + 1..], visit);
        }
    }
}

fn superset_head<L>(node: &HeadNode<L>, required: &[u32], visit: &mut impl FnMut(&L)) {
    let Some((&next, rest)) = required.split_first() else {
        visit(&node.leaf);
        for child in node.children.values() {
            superset_head(child, required, visit);
        }
        return;
    };
    for (&id, child) in node.children.range(..=next) {
        if id == next {
            superset_head(child, rest, visit);
        } else {
            superset_head(child, required, visit);
        }
    }
}

/// Returns true if `node` holds nothing afterwards.
fn prune_body<L: Leaf>(
    node: &mut BodyNode<L>,
    body: &[u32],
    head: &[u32],
    update: impl FnOnce(&mut L),
) -> bool {
    match body.split_first() {
        Some((id, rest)) => {
            if let Some(child) = node.children.get_mut(id) {
                if prune_body(child, rest, head, update) {
                    node.children.remove(id);
                }
            }
        }
        None => {
            if let Some(head_node) = node.head.as_deref_mut() {
                if prune_head(head_node, head, update) {
                    node.head = None;
                }
            }
        }
    }
    node.children.is_empty() && node.head.is_none()
}

fn prune_head<L: Leaf>(node: &mut HeadNode<L>, head: &[u32], update: impl FnOnce(&mut L)) -> bool {
    match head.split_first() {
        Some((id, rest)) => {
            if let Some(child) = node.children.get_mut(id) {
                if prune_head(child, rest, update) {
                    node.children.remove(id);
                }
            }
        }
        None => update(&mut node.leaf),
    }
    node.children.is_empty() && node.leaf.is_vacant()
}

// =============================================================================
// Trie Filter
// =============================================================================

/// Default bound on the number of distinct predicate ids.
pub const DEFAULT_MAX_PREDICATES: usize = 150;

/// Trie-backed filter keyed on predicate ids.
///
/// Predicates are numbered on first sight and folded into at most
/// `max_predicates` bags (`number % max_predicates`), which caps the trie
/// fan-out on large vocabularies at the price of extra candidates.
#[derive(Clone, Debug)]
pub struct TrieFilter {
    max_predicates: u32,
    predicates: Numbering<Predicate>,
    trie: SignatureTrie<BTreeSet<RuleId>>,
    members: BTreeSet<RuleId>,
}

impl Default for TrieFilter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PREDICATES)
    }
}

impl TrieFilter {
    /// Creates an empty filter with the given bag bound; zero is treated as one.
    #[must_use]
    pub fn new(max_predicates: usize) -> Self {
        Self {
            max_predicates: u32::try_from(max_predicates.max(1)).unwrap_or(u32::MAX),
            predicates: Numbering::new(),
            trie: SignatureTrie::default(),
            members: BTreeSet::new(),
        }
    }

    /// Returns the bag bound.
    #[must_use]
    pub fn max_predicates(&self) -> usize {
        self.max_predicates as usize
    }

    fn encode(&mut self, atoms: &AtomSet) -> Vec<u32> {
        let ids: BTreeSet<u32> = atoms
            .iter()
            .map(|atom| self.predicates.number(atom.predicate()) % self.max_predicates)
            .collect();
        ids.into_iter().collect()
    }

    /// Encodes without numbering new predicates; `None` if one is unknown.
    fn lookup(&self, atoms: &AtomSet) -> Option<Vec<u32>> {
        let ids = atoms
            .iter()
            .map(|atom| {
                self.predicates
                    .get(atom.predicate())
                    .map(|n| n % self.max_predicates)
            })
            .collect::<Option<BTreeSet<u32>>>()?;
        Some(ids.into_iter().collect())
    }

    /// Encodes known predicates only, dropping unknown ones.
    fn lookup_known(&self, atoms: &AtomSet) -> Vec<u32> {
        let ids: BTreeSet<u32> = atoms
            .iter()
            .filter_map(|atom| self.predicates.get(atom.predicate()))
            .map(|n| n % self.max_predicates)
            .collect();
        ids.into_iter().collect()
    }
}

impl SubsumptionFilter for TrieFilter {
    fn add(&mut self, id: RuleId, tgd: &Tgd) {
        let body = self.encode(tgd.body());
        let head = self.encode(tgd.head());
        self.trie.leaf_mut(&body, &head).insert(id);
        self.members.insert(id);
    }

    fn remove(&mut self, id: RuleId, tgd: &Tgd) {
        if !self.members.remove(&id) {
            return;
        }
        let (Some(body), Some(head)) = (self.lookup(tgd.body()), self.lookup(tgd.head())) else {
            return;
        };
        self.trie.update(&body, &head, |bucket| {
            bucket.remove(&id);
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

    fn subsumed_candidates(&self, tgd: &Tgd) -> Vec<RuleId> {
        // Stored bodies must hold every query body predicate.
        let Some(body) = self.lookup(tgd.body()) else {
            return Vec::new();
        };
        let head = self.lookup_known(tgd.head());
        let mut found = BTreeSet::new();
        self.trie.visit_subsumed(&body, &head, &mut |bucket| found.extend(bucket));
        found.into_iter().collect()
    }

    fn subsuming_candidates(&self, tgd: &Tgd) -> Vec<RuleId> {
        // Stored heads must hold every query head predicate.
        let Some(head) = self.lookup(tgd.head()) else {
            return Vec::new();
        };
        let body = self.lookup_known(tgd.body());
        let mut found = BTreeSet::new();
        self.trie.visit_subsuming(&body, &head, &mut |bucket| found.extend(bucket));
        found.into_iter().collect()
    }
}
