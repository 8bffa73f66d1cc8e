//! Rules with their derived properties.
//!
//! A [`Rule`] wraps a [`Tgd`] with everything derived from it once, at
//! construction: the guard atom and a capability [`Tier`]. Tiers narrow
//! progressively: every rule is guarded; skolemized rules add functional
//! flags and the atoms selected for resolution; ordered rules restrict that
//! selection to the maximal atoms under an [`AtomOrder`].

use gsat_foundation::{Atom, AtomSet, Error, Result};

use crate::order::AtomOrder;
use crate::tgd::Tgd;

// =============================================================================
// Guard
// =============================================================================

/// Computes the guard: the body atom covering every universal variable with
/// minimal arity, ties broken by the lexicographically smallest predicate name.
///
/// # Errors
/// Returns an unguarded rule error if no body atom covers every universal variable.
pub fn compute_guard(tgd: &Tgd) -> Result<Atom> {
    guard_candidates(tgd.body())
        .min_by(|a, b| {
            a.predicate()
                .arity()
                .cmp(&b.predicate().arity())
                .then_with(|| a.predicate().name().cmp(b.predicate().name()))
                .then_with(|| a.cmp(b))
        })
        .cloned()
        .ok_or_else(|| Error::unguarded_rule(tgd.to_string()))
}

/// Body atoms that contain every body variable.
fn guard_candidates(body: &AtomSet) -> impl Iterator<Item = &Atom> {
    let universal = body.variables();
    body.iter()
        .filter(move |atom| universal.iter().all(|v| atom.mentions(v)))
}

// =============================================================================
// Selection
// =============================================================================

/// Which side of a rule holds its selected atoms.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Selected atoms are body atoms; the rule resolves as the consumer.
    Body,
    /// Selected atoms are head atoms; the rule resolves as the producer.
    Head,
}

/// The atoms eligible as resolution targets, and which side they are on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    atoms: Vec<Atom>,
    side: Side,
}

impl Selection {
    /// Returns the selected atoms.
    #[must_use]
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// Returns the side the selected atoms are on.
    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    fn of(tgd: &Tgd) -> Self {
        if tgd.body().is_functional() {
            Self {
                atoms: tgd.body().iter().filter(|a| a.is_functional()).cloned().collect(),
                side: Side::Body,
            }
        } else if tgd.head().is_functional() {
            Self {
                atoms: tgd.head().iter().cloned().collect(),
                side: Side::Head,
            }
        } else {
            Self {
                atoms: guard_candidates(tgd.body()).cloned().collect(),
                side: Side::Body,
            }
        }
    }

    fn narrowed(self, order: &mut AtomOrder) -> Self {
        Self {
            atoms: order.maximal(&self.atoms),
            side: self.side,
        }
    }
}

// =============================================================================
// Tier
// =============================================================================

/// Derived properties of a skolemized rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkolemFeatures {
    functional: bool,
    non_full: bool,
    selection: Selection,
}

impl SkolemFeatures {
    fn of(tgd: &Tgd, selection: Selection) -> Self {
        Self {
            functional: !tgd.is_function_free(),
            non_full: tgd.head().is_functional() && !tgd.body().is_functional(),
            selection,
        }
    }

    /// Returns true if some body or head atom contains a function term.
    #[must_use]
    pub fn is_functional(&self) -> bool {
        self.functional
    }

    /// Returns true if the head is functional while the body is not.
    #[must_use]
    pub fn is_non_full(&self) -> bool {
        self.non_full
    }

    /// Returns the atoms selected for resolution.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }
}

/// Capability tier of a rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tier {
    /// Guard only.
    Guarded,
    /// Skolemized, selecting every eligible atom.
    Skolemized(SkolemFeatures),
    /// Skolemized, selecting only the maximal eligible atoms.
    Ordered(SkolemFeatures),
}

// =============================================================================
// Rule
// =============================================================================

/// An immutable rule with its guard and capability tier.
#[derive(Clone, Debug)]
pub struct Rule {
    tgd: Tgd,
    guard: Atom,
    tier: Tier,
}

impl Rule {
    /// Creates a guarded rule.
    ///
    /// # Errors
    /// Returns an unguarded rule error if the rule has no guard.
    pub fn guarded(tgd: Tgd) -> Result<Self> {
        let guard = compute_guard(&tgd)?;
        Ok(Self {
            tgd,
            guard,
            tier: Tier::Guarded,
        })
    }

    /// Creates a skolemized guarded rule.
    ///
    /// # Errors
    /// Returns an unguarded rule error if the rule has no guard.
    pub fn skolemized(tgd: Tgd) -> Result<Self> {
        let guard = compute_guard(&tgd)?;
        let features = SkolemFeatures::of(&tgd, Selection::of(&tgd));
        Ok(Self {
            tgd,
            guard,
            tier: Tier::Skolemized(features),
        })
    }

    /// Creates an ordered skolemized guarded rule, numbering any symbol the
    /// order has not seen yet.
    ///
    /// # Errors
    /// Returns an unguarded rule error if the rule has no guard.
    pub fn ordered(tgd: Tgd, order: &mut AtomOrder) -> Result<Self> {
        let guard = compute_guard(&tgd)?;
        let selection = Selection::of(&tgd).narrowed(order);
        let features = SkolemFeatures::of(&tgd, selection);
        Ok(Self {
            tgd,
            guard,
            tier: Tier::Ordered(features),
        })
    }

    /// Returns the underlying rule value.
    #[must_use]
    pub fn tgd(&self) -> &Tgd {
        &self.tgd
    }

    /// Returns the body atoms.
    #[must_use]
    pub fn body(&self) -> &AtomSet {
        self.tgd.body()
    }

    /// Returns the head atoms.
    #[must_use]
    pub fn head(&self) -> &AtomSet {
        self.tgd.head()
    }

    /// Returns the guard atom.
    #[must_use]
    pub fn guard(&self) -> &Atom {
        &self.guard
    }

    /// Returns the capability tier.
    #[must_use]
    pub fn tier(&self) -> &Tier {
        &self.tier
    }

    /// Returns the skolem features, if the rule is skolemized.
    #[must_use]
    pub fn features(&self) -> Option<&SkolemFeatures> {
        match &self.tier {
            Tier::Guarded => None,
            Tier::Skolemized(f) | Tier::Ordered(f) => Some(f),
        }
    }

    /// Returns the resolution selection, if the rule is skolemized.
    #[must_use]
    pub fn selection(&self) -> Option<&Selection> {
        self.features().map(SkolemFeatures::selection)
    }
}
