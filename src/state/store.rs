//! State store - sole owner of the resource state and its history

use crate::core::bounded::BoundedLog;
use crate::core::types::ResourceVector;
use crate::state::resources::{clamp_entropy, clamp_stability, Imbalance, ResourceState, StatePatch};

/// Default number of retained states
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// Owns the current resource state, the state before the last mutation,
/// and a bounded history of every state reached.
///
/// All mutation goes through [`apply_resource_changes`](Self::apply_resource_changes)
/// and [`update_state`](Self::update_state).
#[derive(Debug, Clone)]
pub struct StateStore {
    current: ResourceState,
    previous: ResourceState,
    history: BoundedLog<ResourceState>,
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StateStore {
    /// Store starting from the default 100/100/100/100 state
    pub fn new() -> Self {
        Self::with_state(ResourceState::default(), DEFAULT_HISTORY_CAPACITY)
    }

    pub fn with_state(initial: ResourceState, history_capacity: usize) -> Self {
        Self {
            previous: initial.clone(),
            current: initial,
            history: BoundedLog::new(history_capacity),
        }
    }

    /// Copy of the current state
    pub fn get_state(&self) -> ResourceState {
        self.current.clone()
    }

    /// Copy of the state before the most recent mutation
    pub fn get_previous_state(&self) -> ResourceState {
        self.previous.clone()
    }

    /// Borrow the current state without copying
    pub fn current(&self) -> &ResourceState {
        &self.current
    }

    pub fn history(&self) -> &BoundedLog<ResourceState> {
        &self.history
    }

    /// Add signed deltas to the four quantities
    ///
    /// Each quantity is clamped to `[0, cap]`; stability, entropy and
    /// progress are then recomputed.
    pub fn apply_resource_changes(&mut self, delta: ResourceVector) -> &ResourceState {
        let mut next = self.current.clone();
        next.set_resources((next.resources() + delta).clamped());
        next.recompute_derived();
        self.commit(next)
    }

    /// Merge a partial update
    ///
    /// Explicit stability/entropy values are kept (clamped). When only
    /// resource fields are supplied the derived metrics are recomputed.
    pub fn update_state(&mut self, patch: &StatePatch) -> &ResourceState {
        let mut next = self.current.clone();
        let mut resources = next.resources();
        if let Some(ore) = patch.ore {
            resources.ore = ore;
        }
        if let Some(energy) = patch.energy {
            resources.energy = energy;
        }
        if let Some(biomass) = patch.biomass {
            resources.biomass = biomass;
        }
        if let Some(data) = patch.data {
            resources.data = data;
        }
        next.set_resources(resources.clamped());

        if let Some(victory) = patch.victory {
            next.victory = victory;
        }

        if patch.touches_resources() {
            next.recompute_derived();
        }

        if let Some(stability) = patch.stability {
            next.stability = clamp_stability(stability);
        }
        if let Some(entropy) = patch.entropy {
            next.entropy = clamp_entropy(entropy);
        }

        next.clamp_to_bounds();
        self.commit(next)
    }

    /// Most imbalanced resource axis of the current state
    pub fn get_imbalance(&self) -> Option<Imbalance> {
        self.current.imbalance()
    }

    /// Resource change produced by the most recent mutation
    pub fn resource_delta(&self) -> ResourceVector {
        self.current.resources() - self.previous.resources()
    }

    fn commit(&mut self, next: ResourceState) -> &ResourceState {
        self.previous = std::mem::replace(&mut self.current, next);
        self.history.push(self.current.clone());
        &self.current
    }
}
