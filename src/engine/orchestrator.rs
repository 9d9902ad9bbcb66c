//! Decision engine - drives the generate, rank, arbitrate, execute, learn cycle
//!
//! The engine exclusively owns the state store, the personality, the learned
//! preferences and both history logs. It is polled by the caller's tick loop
//! and regenerates its active set once per decision interval.

use crate::arbitration::{group_by_layer, rank, Arbiter};
use crate::core::bounded::BoundedLog;
use crate::core::config::EngineConfig;
use crate::core::error::Result;
use crate::core::types::{DecisionId, ResourceVector, Tick};
use crate::decision::{Decision, DecisionEffect, DecisionIdGenerator, DecisionImpact, DecisionType, ExecutionPath};
use crate::engine::preview::{preview_decision, project_effect, SimulationPreview};
use crate::evaluation::{preference_factor, situational_urgency, DecisionEvaluator, PreferenceTable, ScoreBreakdown};
use crate::layers::{self, GameContext};
use crate::personality::{PersonalityProfile, PersonalityType};
use crate::quaternion::{apply_quaternion_decision, decision_to_quaternion};
use crate::state::resources::{ResourceState, StatePatch};
use crate::state::store::StateStore;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Whether a cycle is in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnginePhase {
    Idle,
    Cycling,
}

/// Summary of one decision cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleReport {
    pub cycle: Tick,
    /// Candidates produced by the layer processors
    pub generated: usize,
    /// Candidates left after affordability, requirement and cooldown filtering
    pub viable: usize,
    pub selected: Vec<DecisionId>,
    pub used_fallback: bool,
}

pub struct DecisionEngine {
    config: EngineConfig,
    store: StateStore,
    evaluator: DecisionEvaluator,
    arbiter: Arbiter,
    personality: PersonalityProfile,
    /// `None` once a custom profile is installed
    personality_kind: Option<PersonalityType>,
    preferences: PreferenceTable,
    ids: DecisionIdGenerator,

    active: Vec<Decision>,
    decision_history: BoundedLog<Decision>,
    impact_history: BoundedLog<DecisionImpact>,
    /// Engine clock at which each cooling-down type becomes available again
    cooldowns: AHashMap<DecisionType, f64>,

    phase: EnginePhase,
    clock: f64,
    last_cycle: f64,
    cycles: Tick,
}

impl Default for DecisionEngine {
    fn default() -> Self {
        Self::build(EngineConfig::default(), ResourceState::default())
    }
}

impl DecisionEngine {
    /// Engine starting from the default 100/100/100/100 state
    pub fn new(config: EngineConfig) -> Result<Self> {
        Self::with_initial_state(config, ResourceState::default())
    }

    pub fn with_initial_state(config: EngineConfig, initial: ResourceState) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, initial))
    }

    fn build(config: EngineConfig, initial: ResourceState) -> Self {
        Self {
            store: StateStore::with_state(initial, config.state_history_capacity),
            evaluator: DecisionEvaluator::new(config.entropy_reference),
            arbiter: Arbiter::new(config.max_active_decisions),
            personality: PersonalityType::Balanced.profile(),
            personality_kind: Some(PersonalityType::Balanced),
            preferences: PreferenceTable::new(config.default_preference, config.preference_learning_rate),
            ids: DecisionIdGenerator::new(),
            active: Vec::new(),
            decision_history: BoundedLog::new(config.decision_history_capacity),
            impact_history: BoundedLog::new(config.impact_history_capacity),
            cooldowns: AHashMap::new(),
            phase: EnginePhase::Idle,
            clock: 0.0,
            last_cycle: 0.0,
            cycles: 0,
            config,
        }
    }

    // === CYCLE ===

    /// Advance the engine clock by `dt` seconds
    ///
    /// Runs a cycle when at least one decision interval has passed since the
    /// last one. Returns the report of that cycle, if any.
    pub fn tick(&mut self, dt: f64, context: &GameContext) -> Option<CycleReport> {
        if dt.is_finite() && dt > 0.0 {
            self.clock += dt;
        }
        if self.clock - self.last_cycle >= self.config.decision_interval_secs {
            Some(self.run_cycle(context))
        } else {
            None
        }
    }

    /// Run one full decision cycle now, replacing the active set
    pub fn run_cycle(&mut self, context: &GameContext) -> CycleReport {
        self.phase = EnginePhase::Cycling;
        let state = self.store.get_state();

        let candidates = layers::generate_all(&state, context, &mut self.ids);
        let generated = candidates.len();

        let mut viable: Vec<Decision> = candidates
            .into_iter()
            .filter(|d| d.is_executable(&state, context))
            .filter(|d| !self.is_on_cooldown(d.kind))
            .collect();

        for decision in viable.iter_mut() {
            decision.player_preference = self.preferences.weight(decision.kind);
            decision.utility_score = self.score(decision, &state);
        }
        rank(&mut viable);
        let viable_count = viable.len();

        let arbitration = self.arbiter.arbitrate(&group_by_layer(viable), &state);
        self.active = arbitration.selected;

        self.cycles += 1;
        self.last_cycle = self.clock;
        self.phase = EnginePhase::Idle;

        let selected: Vec<DecisionId> = self.active.iter().map(|d| d.id).collect();
        debug!(
            "Cycle {}: {} generated, {} viable, selected {:?}",
            self.cycles, generated, viable_count, selected
        );

        CycleReport {
            cycle: self.cycles,
            generated,
            viable: viable_count,
            selected,
            used_fallback: arbitration.used_fallback,
        }
    }

    /// Final utility: evaluator score times preference and situational urgency
    fn score(&self, decision: &Decision, state: &ResourceState) -> f64 {
        let base = self.evaluator.evaluate(decision, state, &self.personality);
        base * preference_factor(decision.player_preference) * situational_urgency(decision, state, &self.config)
    }

    /// Evaluator factors for a decision against the current state
    pub fn score_breakdown(&self, decision: &Decision) -> ScoreBreakdown {
        self.evaluator
            .breakdown(decision, self.store.current(), &self.personality)
    }

    /// Up to `n` decisions of the active set, best first
    pub fn get_recommended_decisions(&self, n: usize) -> Vec<Decision> {
        self.active.iter().take(n).cloned().collect()
    }

    pub fn active_decisions(&self) -> &[Decision] {
        &self.active
    }

    // === EXECUTION ===

    /// Apply a decision's immediate effect additively
    ///
    /// Resources move first and the derived metrics are recomputed, then the
    /// explicit stability, entropy and victory deltas land on top. The whole
    /// change is committed to the store as a single mutation.
    ///
    /// A decision whose cost exceeds the current stock is not applied; the
    /// returned impact then has `success == false`.
    pub fn execute_decision(&mut self, decision: &Decision) -> DecisionImpact {
        if let Some(impact) = self.reject_unaffordable(decision, ExecutionPath::Additive) {
            return impact;
        }

        let before = self.store.get_state();
        // one commit, so the previous state and resource delta span the whole execution
        let next = project_effect(&before, &decision.immediate);
        self.store.update_state(&StatePatch::from_state(&next));

        self.record_execution(decision, &before, ExecutionPath::Additive)
    }

    /// Apply a decision as a quaternion rotation of the state
    pub fn execute_decision_as_rotation(&mut self, decision: &Decision) -> DecisionImpact {
        if let Some(impact) = self.reject_unaffordable(decision, ExecutionPath::Rotation) {
            return impact;
        }

        let before = self.store.get_state();
        let rotation = decision_to_quaternion(decision, self.config.effect_scale);
        let next = apply_quaternion_decision(&rotation, &before);
        self.store.update_state(&StatePatch::from_state(&next));

        self.record_execution(decision, &before, ExecutionPath::Rotation)
    }

    /// Execute the `index`-th active decision additively
    pub fn execute_recommended(&mut self, index: usize) -> Option<DecisionImpact> {
        let decision = self.active.get(index).cloned()?;
        Some(self.execute_decision(&decision))
    }

    fn reject_unaffordable(&mut self, decision: &Decision, path: ExecutionPath) -> Option<DecisionImpact> {
        if decision.is_affordable(self.store.current()) {
            return None;
        }

        let shortfall = decision.cost.first_shortfall(&self.store.current().resources());
        warn!(
            "Cannot afford {} ({}), short on {:?}",
            decision.id, decision.kind, shortfall
        );

        let impact = DecisionImpact {
            decision_id: decision.id,
            kind: decision.kind,
            executed_at: self.clock,
            immediate: DecisionEffect::new(),
            long_term: None,
            actual_cost: ResourceVector::ZERO,
            path,
            success: false,
        };
        self.impact_history.push(impact.clone());
        Some(impact)
    }

    fn record_execution(&mut self, decision: &Decision, before: &ResourceState, path: ExecutionPath) -> DecisionImpact {
        let after = self.store.current();
        let realized = DecisionEffect {
            resources: after.resources() - before.resources(),
            stability_change: after.stability - before.stability,
            entropy_change: after.entropy - before.entropy,
            ..decision.immediate.clone()
        };

        let impact = DecisionImpact {
            decision_id: decision.id,
            kind: decision.kind,
            executed_at: self.clock,
            immediate: realized,
            long_term: decision.long_term.clone(),
            actual_cost: decision.cost,
            path,
            success: true,
        };

        self.impact_history.push(impact.clone());
        self.decision_history.push(decision.clone());
        let preference = self.preferences.reinforce(decision.kind);

        if let Some(cooldown) = decision.cooldown.filter(|c| *c > 0.0) {
            self.cooldowns.insert(decision.kind, self.clock + cooldown);
        }
        self.active.retain(|d| d.id != decision.id);

        info!(
            "Executed {} ({}) via {:?}; preference now {:.3}",
            decision.id, decision.kind, path, preference
        );
        impact
    }

    /// Preview the short- and long-term states without mutating the store
    pub fn simulate_decision(&self, decision: &Decision) -> SimulationPreview {
        preview_decision(self.store.current(), decision, self.config.effect_scale)
    }

    // === STATE ===

    /// Replace the four quantities with values pushed from the economy
    pub fn update_state_from_game_resources(&mut self, resources: ResourceVector) -> &ResourceState {
        self.store.update_state(&StatePatch::resources(resources))
    }

    pub fn get_state(&self) -> ResourceState {
        self.store.get_state()
    }

    pub fn get_previous_state(&self) -> ResourceState {
        self.store.get_previous_state()
    }

    pub fn store(&self) -> &StateStore {
        &self.store
    }

    /// Executed decisions, oldest first
    pub fn get_decision_history(&self) -> Vec<Decision> {
        self.decision_history.to_vec()
    }

    /// Impact records, oldest first
    pub fn get_impact_history(&self) -> Vec<DecisionImpact> {
        self.impact_history.to_vec()
    }

    // === PERSONALITY & LEARNING ===

    pub fn set_personality(&mut self, kind: PersonalityType) {
        info!("Personality changed: {} -> {}", self.personality.name, kind);
        self.personality = kind.profile();
        self.personality_kind = Some(kind);
    }

    /// Install a custom profile after validating it
    pub fn set_custom_personality(&mut self, profile: PersonalityProfile) -> Result<()> {
        profile.validate()?;
        info!("Personality changed: {} -> {} (custom)", self.personality.name, profile.name);
        self.personality = profile;
        self.personality_kind = None;
        Ok(())
    }

    pub fn personality(&self) -> &PersonalityProfile {
        &self.personality
    }

    pub fn personality_type(&self) -> Option<PersonalityType> {
        self.personality_kind
    }

    pub fn preference_for(&self, kind: DecisionType) -> f64 {
        self.preferences.weight(kind)
    }

    pub fn is_on_cooldown(&self, kind: DecisionType) -> bool {
        self.cooldowns
            .get(&kind)
            .is_some_and(|ready_at| *ready_at > self.clock)
    }

    // === ACCESSORS ===

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn phase(&self) -> EnginePhase {
        self.phase
    }

    /// Seconds of engine time elapsed
    pub fn clock(&self) -> f64 {
        self.clock
    }

    pub fn cycles(&self) -> Tick {
        self.cycles
    }
}
