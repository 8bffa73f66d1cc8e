//! Saturation results and statistics.

use std::fmt;
use std::time::Duration;

use gsat_rules::Tgd;

/// How a saturation run ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SaturationOutcome {
    /// The work queue drained; the rule set is a fixpoint.
    Completed,
    /// The timeout fired; the rule set is partial.
    TimedOut,
    /// The pop limit was reached; the rule set is partial.
    PopLimitReached,
}

/// Counters collected during a run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SaturationStats {
    /// Dependencies supplied.
    pub inputs: usize,
    /// Inputs discarded for lacking a guard.
    pub discarded_unguarded: usize,
    /// Inputs discarded for having an empty head.
    pub discarded_non_tgd: usize,
    /// Normalized rules the inputs expanded to.
    pub seeds: usize,
    /// Rules taken off the work queue.
    pub pops: usize,
    /// Pairs of rules passed to the inference step.
    pub inferences: usize,
    /// Normalized rules produced by inference.
    pub generated: usize,
    /// Candidate rules already interned.
    pub duplicates: usize,
    /// Candidate rules whose head was contained in their body.
    pub tautologies: usize,
    /// Inferred rules without a guard.
    pub unguarded_resolvents: usize,
    /// Candidate rules rejected as subsumed.
    pub subsumed: usize,
    /// Stored rules removed by a newer, more general rule.
    pub removed: usize,
    /// Wall-clock duration of the run.
    pub elapsed: Duration,
}

impl fmt::Display for SaturationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} inputs ({} unguarded, {} non-TGD), {} seeds, {} pops, {} inferences, \
             {} generated, {} subsumed, {} removed in {:?}",
            self.inputs,
            self.discarded_unguarded,
            self.discarded_non_tgd,
            self.seeds,
            self.pops,
            self.inferences,
            self.generated,
            self.subsumed,
            self.removed,
            self.elapsed
        )
    }
}

/// Output of a saturation run.
#[derive(Clone, Debug)]
pub struct Saturation {
    /// The full (Datalog) rules, sorted.
    pub full_rules: Vec<Tgd>,
    /// Whether the fixpoint was reached.
    pub outcome: SaturationOutcome,
    /// Run statistics.
    pub stats: SaturationStats,
}

impl Saturation {
    /// Returns true if the run reached its fixpoint.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.outcome == SaturationOutcome::Completed
    }
}

impl fmt::Display for Saturation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rule in &self.full_rules {
            writeln!(f, "{rule}")?;
        }
        Ok(())
    }
}
