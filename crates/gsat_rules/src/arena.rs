//! Interning arena for rules.
//!
//! Every rule produced during a run is stored once and addressed by a
//! [`RuleId`]. Indexes and work queues hold ids rather than rules, and
//! structural deduplication falls out of the lookup map.

use std::collections::HashMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use gsat_foundation::Result;

use crate::rule::Rule;
use crate::tgd::Tgd;

/// Stable identifier of a rule within one [`RuleArena`].
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RuleId(pub(crate) u32);

impl RuleId {
    /// Creates an id from its raw index.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw index of this rule.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RuleId({})", self.0)
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Outcome of [`RuleArena::intern`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Interned {
    /// The rule was not present and has been added.
    New(RuleId),
    /// A structurally equal rule was already present.
    Existing(RuleId),
}

impl Interned {
    /// Returns the id regardless of whether the rule was new.
    #[must_use]
    pub const fn id(self) -> RuleId {
        match self {
            Self::New(id) | Self::Existing(id) => id,
        }
    }

    /// Returns true if the rule was newly added.
    #[must_use]
    pub const fn is_new(self) -> bool {
        matches!(self, Self::New(_))
    }
}

/// Arena holding every rule of a saturation run.
///
/// Ids are assigned densely in insertion order and never reused until
/// [`RuleArena::reset`].
#[derive(Clone, Debug, Default)]
pub struct RuleArena {
    rules: Vec<Rule>,
    lookup: HashMap<Tgd, RuleId>,
}

impl RuleArena {
    /// Creates an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id of `tgd`, building and storing its [`Rule`] if absent.
    ///
    /// `build` runs only for rules not yet present; if it fails nothing is
    /// stored.
    ///
    /// # Errors
    /// Propagates the error returned by `build`.
    ///
    /// # Panics
    /// Panics if more than `u32::MAX` rules are interned.
    pub fn intern(&mut self, tgd: Tgd, build: impl FnOnce(Tgd) -> Result<Rule>) -> Result<Interned> {
        if let Some(&id) = self.lookup.get(&tgd) {
            return Ok(Interned::Existing(id));
        }
        let rule = build(tgd.clone())?;
        let id = RuleId(u32::try_from(self.rules.len()).expect("too many rules"));
        self.rules.push(rule);
        self.lookup.insert(tgd, id);
        Ok(Interned::New(id))
    }

    /// Returns the rule with the given id.
    #[must_use]
    pub fn get(&self, id: RuleId) -> Option<&Rule> {
        self.rules.get(id.0 as usize)
    }

    /// Returns the id of a structurally equal rule, if interned.
    #[must_use]
    pub fn find(&self, tgd: &Tgd) -> Option<RuleId> {
        self.lookup.get(tgd).copied()
    }

    /// Returns the number of interned rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if nothing has been interned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterates all rules with their ids.
    #[allow(clippy::cast_possible_truncation)]
    pub fn iter(&self) -> impl Iterator<Item = (RuleId, &Rule)> {
        self.rules
            .iter()
            .enumerate()
            .map(|(i, rule)| (RuleId(i as u32), rule))
    }

    /// Discards every rule. Previously issued ids become dangling.
    pub fn reset(&mut self) {
        self.rules.clear();
        self.lookup.clear();
    }
}
