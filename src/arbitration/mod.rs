//! Arbitration - from ranked per-layer candidates to the active set
//!
//! Candidates from every layer compete in one pool; layer order carries no
//! precedence. Walking the pool from the highest utility down, a decision is
//! selected unless:
//! 1. The active set is already full
//! 2. Its mutually exclusive partner was already selected
//! 3. Its cost plus everything already reserved would exceed the stock on
//!    some axis
//!
//! Equal utilities fall back to ascending decision id so the outcome is
//! deterministic. When nothing survives, the set degrades to the single best
//! decision of each layer (capped) and is flagged as a fallback.

use crate::core::types::{DecisionId, ResourceAxis, ResourceVector};
use crate::decision::{Decision, DecisionLayer};
use crate::state::resources::ResourceState;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BTreeMap;
use tracing::{trace, warn};

/// Default cap on concurrently active decisions
pub const DEFAULT_MAX_ACTIVE: usize = 3;

/// Candidates keyed by layer
pub type LayeredCandidates = BTreeMap<DecisionLayer, Vec<Decision>>;

/// Why a candidate was left out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    CapacityReached,
    /// Conflicts with this already selected decision
    ExclusiveConflict(DecisionId),
    /// Would push cumulative spend on this axis past the stock
    Overcommit(ResourceAxis),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Arbitration {
    /// Highest utility first
    pub selected: Vec<Decision>,
    pub rejected: Vec<(DecisionId, Rejection)>,
    pub used_fallback: bool,
}

impl Arbitration {
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Sum of the selected costs
    pub fn reserved(&self) -> ResourceVector {
        self.selected
            .iter()
            .fold(ResourceVector::ZERO, |acc, d| acc + d.cost)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arbiter {
    pub max_active: usize,
}

impl Default for Arbiter {
    fn default() -> Self {
        Self {
            max_active: DEFAULT_MAX_ACTIVE,
        }
    }
}

/// Group a flat candidate list by layer, keeping relative order
pub fn group_by_layer(decisions: Vec<Decision>) -> LayeredCandidates {
    let mut grouped = LayeredCandidates::new();
    for decision in decisions {
        grouped.entry(decision.layer()).or_default().push(decision);
    }
    grouped
}

/// Sort highest utility first, ascending id on ties
pub fn rank(decisions: &mut [Decision]) {
    decisions.sort_by_key(|d| (Reverse(OrderedFloat(d.utility_score)), d.id));
}

impl Arbiter {
    pub fn new(max_active: usize) -> Self {
        Self { max_active }
    }

    pub fn arbitrate(&self, candidates: &LayeredCandidates, state: &ResourceState) -> Arbitration {
        let mut pool: Vec<Decision> = candidates.values().flatten().cloned().collect();
        rank(&mut pool);

        let available = state.resources();
        let mut reserved = ResourceVector::ZERO;
        let mut outcome = Arbitration::default();

        for decision in pool {
            let verdict = if outcome.selected.len() >= self.max_active {
                Some(Rejection::CapacityReached)
            } else if let Some(rival) = outcome.selected.iter().find(|s| s.kind.excludes(decision.kind)) {
                Some(Rejection::ExclusiveConflict(rival.id))
            } else {
                (reserved + decision.cost)
                    .first_shortfall(&available)
                    .map(Rejection::Overcommit)
            };

            match verdict {
                Some(rejection) => {
                    trace!("Arbitration rejected {} ({}): {:?}", decision.id, decision.kind, rejection);
                    outcome.rejected.push((decision.id, rejection));
                }
                None => {
                    reserved += decision.cost;
                    outcome.selected.push(decision);
                }
            }
        }

        if outcome.selected.is_empty() && candidates.values().any(|c| !c.is_empty()) {
            outcome.selected = self.fallback(candidates);
            outcome.used_fallback = true;
            warn!(
                "No conflict-free decision set; falling back to {} best-per-layer decisions",
                outcome.selected.len()
            );
        }

        outcome
    }

    /// Best decision of each layer, ranked and capped
    fn fallback(&self, candidates: &LayeredCandidates) -> Vec<Decision> {
        let mut best: Vec<Decision> = candidates
            .values()
            .filter_map(|layer| {
                layer
                    .iter()
                    .min_by_key(|d| (Reverse(OrderedFloat(d.utility_score)), d.id))
                    .cloned()
            })
            .collect();
        rank(&mut best);
        best.truncate(self.max_active);
        best
    }
}
