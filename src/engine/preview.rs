//! Side-effect free projections of a decision

use crate::decision::{Decision, DecisionEffect};
use crate::quaternion::{apply_quaternion_decision, decision_to_quaternion};
use crate::state::resources::ResourceState;
use serde::{Deserialize, Serialize};

/// States a decision would lead to, without touching the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationPreview {
    /// Immediate effect only
    pub short_term: ResourceState,
    /// Immediate plus long-term effect
    pub long_term: ResourceState,
    /// Immediate effect executed as a rotation
    pub rotation: ResourceState,
}

/// Apply an effect additively to a copy of `state`
///
/// Same order as the engine's additive execution: resources first (clamped,
/// derived metrics recomputed), then explicit stability/entropy/victory deltas.
pub fn project_effect(state: &ResourceState, effect: &DecisionEffect) -> ResourceState {
    let mut next = state.clone();
    next.set_resources((state.resources() + effect.resources).clamped());
    next.recompute_derived();

    next.stability += effect.stability_change;
    next.entropy += effect.entropy_change;
    next.victory = next.victory.advanced_by(&effect.victory);
    next.clamp_to_bounds();
    next
}

pub fn preview_decision(state: &ResourceState, decision: &Decision, effect_scale: f64) -> SimulationPreview {
    let rotation = decision_to_quaternion(decision, effect_scale);
    SimulationPreview {
        short_term: project_effect(state, &decision.immediate),
        long_term: project_effect(state, &decision.total_effect()),
        rotation: apply_quaternion_decision(&rotation, state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{DecisionId, ResourceVector};
    use crate::decision::DecisionType;

    #[test]
    fn test_projection_does_not_touch_input() {
        let state = ResourceState::default();
        let effect = DecisionEffect::new().with_resources(50.0, 0.0, 0.0, 0.0);
        let projected = project_effect(&state, &effect);
        assert_eq!(state, ResourceState::default());
        assert_eq!(projected.ore, 150.0);
    }

    #[test]
    fn test_long_term_includes_both_effects() {
        let decision = Decision::new(
            DecisionId(0),
            DecisionType::OperationalEconomyInvestment,
            ResourceVector::new(200.0, 0.0, 0.0, 0.0),
            DecisionEffect::new().with_resources(-50.0, 10.0, 0.0, 0.0),
        )
        .with_long_term(DecisionEffect::new().with_resources(300.0, 100.0, 0.0, 0.0));
        let preview = preview_decision(&ResourceState::default(), &decision, 1000.0);

        assert_eq!(preview.short_term.ore, 50.0);
        assert_eq!(preview.long_term.ore, 350.0);
        assert_eq!(preview.long_term.energy, 210.0);
    }

    #[test]
    fn test_metric_deltas_apply_after_recompute() {
        let state = ResourceState::default();
        let effect = DecisionEffect::new().with_stability(-0.5).with_entropy(40.0);
        let projected = project_effect(&state, &effect);
        // equal resources recompute to stability 2.0, entropy 0
        assert!((projected.stability - 1.5).abs() < 1e-12);
        assert!((projected.entropy - 40.0).abs() < 1e-12);
    }
}
