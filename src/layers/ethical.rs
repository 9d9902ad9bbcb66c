//! Ethical layer - paired choices with lasting consequences

use crate::core::types::ResourceVector;
use crate::decision::{BonusKind, Decision, DecisionEffect, DecisionIdGenerator, DecisionType};
use crate::layers::context::GameContext;
use crate::state::resources::{ResourceState, VictoryProgress};

pub const EXPLOIT_BIOMASS_THRESHOLD: f64 = 100.0;
pub const EXPLOIT_ORE_CEILING: f64 = 200.0;

/// Biomass consumed by one exploitation pass
pub const EXPLOIT_BIOMASS_SPENT: f64 = 100.0;
/// Ore produced per exploitation pass (lossy 3:1 conversion)
pub const EXPLOIT_ORE_YIELD: f64 = 33.0;
/// Seconds before another trade offer may be accepted
pub const ACCEPT_TRADE_COOLDOWN_SECS: f64 = 6.0;

pub fn generate(
    state: &ResourceState,
    context: &GameContext,
    ids: &mut DecisionIdGenerator,
) -> Vec<Decision> {
    let mut decisions = Vec::new();

    if context.ai_trade_offer {
        decisions.push(
            Decision::new(
                ids.next_id(),
                DecisionType::EthicalAcceptTrade,
                ResourceVector::new(0.0, 0.0, 0.0, 20.0),
                DecisionEffect::new()
                    .with_resources(100.0, 50.0, 0.0, -20.0)
                    .with_bonus(BonusKind::Diplomacy, 0.3),
            )
            .with_long_term(DecisionEffect::new().with_stability(-0.15).with_entropy(20.0))
            .with_risk(0.45)
            .with_priority(0.5)
            .with_execution_time(10)
            .with_cooldown(ACCEPT_TRADE_COOLDOWN_SECS),
        );
        decisions.push(
            Decision::new(
                ids.next_id(),
                DecisionType::EthicalRefuseTrade,
                ResourceVector::ZERO,
                DecisionEffect::new().with_stability(0.05),
            )
            .with_risk(0.05)
            .with_priority(0.3)
            .with_execution_time(5),
        );
    }

    if state.biomass > EXPLOIT_BIOMASS_THRESHOLD && state.ore < EXPLOIT_ORE_CEILING {
        decisions.push(
            Decision::new(
                ids.next_id(),
                DecisionType::EthicalExploit,
                ResourceVector::new(0.0, 0.0, EXPLOIT_BIOMASS_SPENT, 0.0),
                DecisionEffect::new()
                    .with_resources(EXPLOIT_ORE_YIELD, 0.0, -EXPLOIT_BIOMASS_SPENT, 0.0)
                    .with_stability(-0.1)
                    .with_entropy(15.0),
            )
            .with_risk(0.4)
            .with_priority(0.45)
            .with_execution_time(20),
        );
        decisions.push(
            Decision::new(
                ids.next_id(),
                DecisionType::EthicalPreserve,
                ResourceVector::ZERO,
                DecisionEffect::new()
                    .with_stability(0.05)
                    .with_victory(VictoryProgress::new(0.0, 0.05, 0.0, 0.0)),
            )
            .with_risk(0.05)
            .with_priority(0.3)
            .with_execution_time(5),
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
    fn test_biomass_boundary_is_strict() {
        let at_threshold = ResourceState::from_resources(ResourceVector::new(50.0, 30.0, 100.0, 20.0));
        let decisions = generate(&at_threshold, &GameContext::default(), &mut DecisionIdGenerator::new());
        assert!(decisions.is_empty());

        let above = ResourceState::from_resources(ResourceVector::new(50.0, 30.0, 101.0, 20.0));
        let decisions = generate(&above, &GameContext::default(), &mut DecisionIdGenerator::new());
        assert_eq!(
            kinds(&decisions),
            vec![DecisionType::EthicalExploit, DecisionType::EthicalPreserve]
        );

        let exploit = &decisions[0];
        assert_eq!(exploit.cost, ResourceVector::new(0.0, 0.0, 100.0, 0.0));
        assert_eq!(exploit.immediate.resources.ore, 33.0);
        assert_eq!(exploit.immediate.resources.biomass, -100.0);
        assert!(exploit.immediate.stability_change < 0.0);
        assert!(exploit.immediate.entropy_change > 0.0);

        let preserve = &decisions[1];
        assert!(preserve.cost.is_zero());
        assert!(preserve.immediate.stability_change > 0.0);
    }

    #[test]
    fn test_ore_rich_state_does_not_exploit() {
        let state = ResourceState::from_resources(ResourceVector::new(200.0, 30.0, 500.0, 20.0));
        assert!(generate(&state, &GameContext::default(), &mut DecisionIdGenerator::new()).is_empty());
    }

    #[test]
    fn test_trade_offer_emits_accept_and_refuse() {
        let decisions = generate(
            &ResourceState::default(),
            &GameContext::default().with_trade_offer(),
            &mut DecisionIdGenerator::new(),
        );
        assert_eq!(
            kinds(&decisions),
            vec![DecisionType::EthicalAcceptTrade, DecisionType::EthicalRefuseTrade]
        );
        let accept = &decisions[0];
        assert!(accept.immediate.resources.ore > 0.0);
        let later = accept.long_term.as_ref().unwrap();
        assert!(later.stability_change < 0.0);
        assert!(later.entropy_change > 0.0);
        assert!(decisions[1].immediate.stability_change > 0.0);
        assert_eq!(accept.cooldown, Some(ACCEPT_TRADE_COOLDOWN_SECS));
        assert_eq!(decisions[1].cooldown, None);
    }
}
