//! Tactical layer - immediate reactions to combat and energy swings

use crate::core::types::ResourceVector;
use crate::decision::{BonusKind, Decision, DecisionEffect, DecisionIdGenerator, DecisionType};
use crate::layers::context::GameContext;
use crate::state::resources::ResourceState;

/// Energy below this (and above zero) triggers conservation
pub const ENERGY_CONSERVATION_THRESHOLD: f64 = 50.0;
/// Energy above this allows overclocking
pub const OVERCLOCK_THRESHOLD: f64 = 200.0;
/// Seconds the grid needs before it can be overclocked again
pub const OVERCLOCK_COOLDOWN_SECS: f64 = 10.0;

pub fn generate(
    state: &ResourceState,
    context: &GameContext,
    ids: &mut DecisionIdGenerator,
) -> Vec<Decision> {
    let mut decisions = Vec::new();

    if context.is_under_attack {
        decisions.push(defend(ids));
        decisions.push(counter_attack(ids));
        decisions.push(retreat(ids));
    }

    if context.has_enemy_weakness {
        decisions.push(flank(ids));
        decisions.push(resource_denial(ids));
    }

    if state.energy > 0.0 && state.energy < ENERGY_CONSERVATION_THRESHOLD {
        decisions.push(energy_conservation(ids));
    }

    if state.energy > OVERCLOCK_THRESHOLD {
        decisions.push(overclock(ids));
    }

    decisions
}

fn defend(ids: &mut DecisionIdGenerator) -> Decision {
    Decision::new(
        ids.next_id(),
        DecisionType::TacticalDefend,
        ResourceVector::new(50.0, 30.0, 0.0, 0.0),
        DecisionEffect::new()
            .with_resources(-50.0, -30.0, 0.0, 0.0)
            .with_stability(0.1)
            .with_bonus(BonusKind::Defense, 0.5),
    )
    .with_risk(0.2)
    .with_priority(0.9)
    .with_execution_time(10)
}

fn counter_attack(ids: &mut DecisionIdGenerator) -> Decision {
    Decision::new(
        ids.next_id(),
        DecisionType::TacticalCounterAttack,
        ResourceVector::new(80.0, 60.0, 0.0, 0.0),
        DecisionEffect::new()
            .with_resources(-40.0, -60.0, 0.0, 0.0)
            .with_entropy(5.0)
            .with_bonus(BonusKind::Offense, 0.6),
    )
    .with_long_term(DecisionEffect::new().with_stability(-0.05))
    .with_risk(0.6)
    .with_priority(0.7)
    .with_execution_time(20)
}

fn retreat(ids: &mut DecisionIdGenerator) -> Decision {
    Decision::new(
        ids.next_id(),
        DecisionType::TacticalRetreat,
        ResourceVector::new(0.0, 20.0, 0.0, 0.0),
        DecisionEffect::new()
            .with_resources(0.0, -20.0, 0.0, 0.0)
            .with_stability(-0.1)
            .with_entropy(3.0),
    )
    .with_long_term(DecisionEffect::new().with_resources(20.0, 0.0, 0.0, 0.0))
    .with_risk(0.1)
    .with_priority(0.6)
    .with_execution_time(5)
}

fn flank(ids: &mut DecisionIdGenerator) -> Decision {
    Decision::new(
        ids.next_id(),
        DecisionType::TacticalFlank,
        ResourceVector::new(60.0, 40.0, 0.0, 0.0),
        DecisionEffect::new()
            .with_resources(-30.0, -40.0, 0.0, 0.0)
            .with_bonus(BonusKind::Offense, 0.8),
    )
    .with_risk(0.5)
    .with_priority(0.6)
    .with_execution_time(25)
}

fn resource_denial(ids: &mut DecisionIdGenerator) -> Decision {
    Decision::new(
        ids.next_id(),
        DecisionType::TacticalResourceDenial,
        ResourceVector::new(0.0, 40.0, 0.0, 10.0),
        DecisionEffect::new()
            .with_resources(0.0, -40.0, 0.0, 5.0)
            .with_entropy(2.0),
    )
    .with_risk(0.4)
    .with_priority(0.5)
    .with_execution_time(30)
}

fn energy_conservation(ids: &mut DecisionIdGenerator) -> Decision {
    Decision::new(
        ids.next_id(),
        DecisionType::TacticalEnergyConservation,
        ResourceVector::ZERO,
        DecisionEffect::new()
            .with_resources(-10.0, 20.0, 0.0, 0.0)
            .with_stability(0.05),
    )
    .with_risk(0.05)
    .with_priority(0.8)
    .with_execution_time(15)
}

fn overclock(ids: &mut DecisionIdGenerator) -> Decision {
    Decision::new(
        ids.next_id(),
        DecisionType::TacticalOverclock,
        ResourceVector::new(0.0, 50.0, 0.0, 0.0),
        DecisionEffect::new()
            .with_resources(80.0, -100.0, 0.0, 0.0)
            .with_entropy(10.0),
    )
    .with_long_term(DecisionEffect::new().with_entropy(15.0).with_stability(-0.1))
    .with_risk(0.5)
    .with_priority(0.5)
    .with_execution_time(5)
    .with_duration(5)
    .with_cooldown(OVERCLOCK_COOLDOWN_SECS)
}
