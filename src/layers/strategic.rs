//! Strategic layer - victory paths and long-horizon infrastructure

use crate::core::types::ResourceVector;
use crate::decision::{BonusKind, Decision, DecisionEffect, DecisionIdGenerator, DecisionType, Requirement};
use crate::layers::context::GameContext;
use crate::state::resources::{ResourceState, VictoryProgress};

/// Progress a focused victory path needs before it is pursued
pub const VICTORY_PATH_THRESHOLD: f64 = 0.3;
/// The balanced path opens earlier
pub const BALANCED_PATH_THRESHOLD: f64 = 0.2;
pub const REFINERY_ORE_THRESHOLD: f64 = 150.0;
pub const REFINERY_ENERGY_THRESHOLD: f64 = 100.0;

pub fn generate(
    state: &ResourceState,
    _context: &GameContext,
    ids: &mut DecisionIdGenerator,
) -> Vec<Decision> {
    let mut decisions = Vec::new();
    let victory = &state.victory;

    if victory.industrial > VICTORY_PATH_THRESHOLD {
        decisions.push(
            Decision::new(
                ids.next_id(),
                DecisionType::StrategicIndustrialVictory,
                ResourceVector::new(300.0, 150.0, 0.0, 0.0),
                DecisionEffect::new()
                    .with_resources(-300.0, -150.0, 0.0, 0.0)
                    .with_entropy(10.0)
                    .with_victory(VictoryProgress::new(0.1, 0.0, 0.0, 0.0)),
            )
            .with_long_term(DecisionEffect::new().with_resources(200.0, 0.0, 0.0, 0.0))
            .with_requirement(Requirement::building("refinery", 1))
            .with_risk(0.5)
            .with_priority(0.6)
            .with_execution_time(120),
        );
    }

    if victory.ecological > VICTORY_PATH_THRESHOLD {
        decisions.push(
            Decision::new(
                ids.next_id(),
                DecisionType::StrategicEcologicalVictory,
                ResourceVector::new(0.0, 50.0, 200.0, 0.0),
                DecisionEffect::new()
                    .with_resources(0.0, -50.0, -200.0, 0.0)
                    .with_stability(0.1)
                    .with_victory(VictoryProgress::new(0.0, 0.1, 0.0, 0.0)),
            )
            .with_long_term(DecisionEffect::new().with_resources(0.0, 0.0, 150.0, 0.0))
            .with_risk(0.3)
            .with_priority(0.6)
            .with_execution_time(120),
        );
    }

    if victory.technological > VICTORY_PATH_THRESHOLD {
        decisions.push(
            Decision::new(
                ids.next_id(),
                DecisionType::StrategicTechnologicalVictory,
                ResourceVector::new(0.0, 100.0, 0.0, 150.0),
                DecisionEffect::new()
                    .with_resources(0.0, -100.0, 0.0, -150.0)
                    .with_tech_unlocks(2)
                    .with_victory(VictoryProgress::new(0.0, 0.0, 0.1, 0.0)),
            )
            .with_long_term(DecisionEffect::new().with_resources(0.0, 0.0, 0.0, 100.0))
            .with_risk(0.35)
            .with_priority(0.6)
            .with_execution_time(120),
        );
    }

    if victory.balanced > BALANCED_PATH_THRESHOLD {
        decisions.push(
            Decision::new(
                ids.next_id(),
                DecisionType::StrategicBalancedVictory,
                ResourceVector::new(100.0, 100.0, 100.0, 50.0),
                DecisionEffect::new()
                    .with_resources(-100.0, -100.0, -100.0, -50.0)
                    .with_stability(0.2)
                    .with_entropy(-10.0)
                    .with_victory(VictoryProgress::new(0.0, 0.0, 0.0, 0.1)),
            )
            .with_long_term(DecisionEffect::new().with_stability(0.1))
            .with_risk(0.25)
            .with_priority(0.55)
            .with_execution_time(100),
        );
    }

    if state.ore > REFINERY_ORE_THRESHOLD && state.energy > REFINERY_ENERGY_THRESHOLD {
        decisions.push(
            Decision::new(
                ids.next_id(),
                DecisionType::StrategicBuildRefinery,
                ResourceVector::new(150.0, 100.0, 0.0, 0.0),
                DecisionEffect::new()
                    .with_resources(-150.0, -100.0, 0.0, 0.0)
                    .with_bonus(BonusKind::Production, 0.2)
                    .with_victory(VictoryProgress::new(0.05, 0.0, 0.0, 0.0)),
            )
            .with_long_term(
                DecisionEffect::new()
                    .with_resources(250.0, 50.0, 0.0, 0.0)
                    .with_entropy(5.0),
            )
            .with_risk(0.2)
            .with_priority(0.6)
            .with_execution_time(90),
        );
    }

    decisions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(decisions: &[Decision]) -> Vec<DecisionType> {
        decisions.iter().map(|d| d.kind).collect()
    }

    #[test]
    fn test_no_progress_no_victory_paths() {
        let decisions = generate(
            &ResourceState::default(),
            &GameContext::default(),
            &mut DecisionIdGenerator::new(),
        );
        assert!(decisions.is_empty());
    }

    #[test]
    fn test_victory_thresholds() {
        let mut state = ResourceState::default();
        state.victory = VictoryProgress::new(0.31, 0.3, 0.5, 0.21);
        let decisions = generate(&state, &GameContext::default(), &mut DecisionIdGenerator::new());
        assert_eq!(
            kinds(&decisions),
            vec![
                DecisionType::StrategicIndustrialVictory,
                DecisionType::StrategicTechnologicalVictory,
                DecisionType::StrategicBalancedVictory,
            ]
        );
    }

    #[test]
    fn test_refinery_needs_ore_and_energy() {
        let state = ResourceState::from_resources(ResourceVector::new(151.0, 101.0, 0.0, 0.0));
        let decisions = generate(&state, &GameContext::default(), &mut DecisionIdGenerator::new());
        assert_eq!(kinds(&decisions), vec![DecisionType::StrategicBuildRefinery]);

        let low_energy = ResourceState::from_resources(ResourceVector::new(151.0, 100.0, 0.0, 0.0));
        assert!(generate(&low_energy, &GameContext::default(), &mut DecisionIdGenerator::new()).is_empty());
    }

    #[test]
    fn test_industrial_victory_requires_refinery() {
        let mut state = ResourceState::default();
        state.victory.industrial = 0.5;
        let decisions = generate(&state, &GameContext::default(), &mut DecisionIdGenerator::new());
        assert_eq!(
            decisions[0].requirements,
            vec![Requirement::building("refinery", 1)]
        );
    }
}
