//! Operational layer - economy, military and research allocation

use crate::core::types::ResourceVector;
use crate::decision::{BonusKind, Decision, DecisionEffect, DecisionIdGenerator, DecisionType};
use crate::layers::context::GameContext;
use crate::state::resources::{ResourceState, VictoryProgress};

pub const INVESTMENT_ORE_THRESHOLD: f64 = 300.0;
pub const BUILDUP_INSTABILITY_THRESHOLD: f64 = 100.0;
pub const EXPANSION_STABILITY_THRESHOLD: f64 = 1.0;
pub const EXPANSION_ORE_THRESHOLD: f64 = 200.0;
pub const RESEARCH_DATA_THRESHOLD: f64 = 80.0;

pub fn generate(
    state: &ResourceState,
    context: &GameContext,
    ids: &mut DecisionIdGenerator,
) -> Vec<Decision> {
    let mut decisions = Vec::new();

    if state.ore > INVESTMENT_ORE_THRESHOLD {
        decisions.push(
            Decision::new(
                ids.next_id(),
                DecisionType::OperationalEconomyInvestment,
                ResourceVector::new(200.0, 0.0, 0.0, 0.0),
                DecisionEffect::new()
                    .with_resources(-200.0, 50.0, 0.0, 10.0)
                    .with_bonus(BonusKind::Production, 0.3),
            )
            .with_long_term(DecisionEffect::new().with_resources(300.0, 100.0, 0.0, 0.0))
            .with_risk(0.2)
            .with_priority(0.6)
            .with_execution_time(60),
        );
    }

    if context.instability > BUILDUP_INSTABILITY_THRESHOLD {
        decisions.push(
            Decision::new(
                ids.next_id(),
                DecisionType::OperationalMilitaryBuildup,
                ResourceVector::new(150.0, 50.0, 0.0, 0.0),
                DecisionEffect::new()
                    .with_resources(-150.0, -50.0, 0.0, 0.0)
                    .with_stability(0.2)
                    .with_bonus(BonusKind::Defense, 1.0),
            )
            .with_risk(0.3)
            .with_priority(0.7)
            .with_execution_time(45),
        );
    }

    if state.stability > EXPANSION_STABILITY_THRESHOLD && state.ore > EXPANSION_ORE_THRESHOLD {
        decisions.push(
            Decision::new(
                ids.next_id(),
                DecisionType::OperationalExpansion,
                ResourceVector::new(150.0, 50.0, 0.0, 0.0),
                DecisionEffect::new()
                    .with_resources(-150.0, -50.0, 50.0, 0.0)
                    .with_entropy(8.0)
                    .with_victory(VictoryProgress::new(0.05, 0.0, 0.0, 0.02)),
            )
            .with_long_term(DecisionEffect::new().with_resources(150.0, 0.0, 100.0, 0.0))
            .with_risk(0.4)
            .with_priority(0.5)
            .with_execution_time(80),
        );
    }

    if state.data > RESEARCH_DATA_THRESHOLD {
        decisions.push(
            Decision::new(
                ids.next_id(),
                DecisionType::OperationalTechPrioritization,
                ResourceVector::new(0.0, 30.0, 0.0, 50.0),
                DecisionEffect::new()
                    .with_resources(0.0, -30.0, 0.0, -50.0)
                    .with_tech_unlocks(1)
                    .with_bonus(BonusKind::Research, 0.5)
                    .with_victory(VictoryProgress::new(0.0, 0.0, 0.08, 0.0)),
            )
            .with_long_term(DecisionEffect::new().with_resources(0.0, 0.0, 0.0, 80.0))
            .with_risk(0.15)
            .with_priority(0.55)
            .with_execution_time(50),
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
    fn test_default_state_only_researches() {
        // stability 1.0 (not > 1.0), ore 100, data 100 > 80
        let decisions = generate(
            &ResourceState::default(),
            &GameContext::default(),
            &mut DecisionIdGenerator::new(),
        );
        assert_eq!(kinds(&decisions), vec![DecisionType::OperationalTechPrioritization]);
    }

    #[test]
    fn test_rich_balanced_state_invests_and_expands() {
        let state = ResourceState::from_resources(ResourceVector::new(400.0, 350.0, 350.0, 350.0));
        assert!(state.stability > 1.0);
        let decisions = generate(&state, &GameContext::default(), &mut DecisionIdGenerator::new());
        assert_eq!(
            kinds(&decisions),
            vec![
                DecisionType::OperationalEconomyInvestment,
                DecisionType::OperationalExpansion,
                DecisionType::OperationalTechPrioritization,
            ]
        );
    }

    #[test]
    fn test_instability_triggers_buildup() {
        let state = ResourceState::from_resources(ResourceVector::new(100.0, 100.0, 100.0, 10.0));
        let calm = generate(&state, &GameContext::default().with_instability(100.0), &mut DecisionIdGenerator::new());
        assert!(calm.is_empty());
        let unrest = generate(&state, &GameContext::default().with_instability(101.0), &mut DecisionIdGenerator::new());
        assert_eq!(kinds(&unrest), vec![DecisionType::OperationalMilitaryBuildup]);
    }
}
