//! Property tests for state bounds and generator determinism

use arc_quaternion::core::types::{ResourceAxis, ResourceVector};
use arc_quaternion::decision::{DecisionEffect, DecisionIdGenerator};
use arc_quaternion::layers::{generate_all, GameContext};
use arc_quaternion::state::resources::{ResourceState, StatePatch};
use arc_quaternion::state::StateStore;
use arc_quaternion::DecisionEngine;
use proptest::prelude::*;

fn in_bounds(state: &ResourceState) -> bool {
    let resources_ok = ResourceAxis::ALL.iter().all(|axis| {
        let value = state.get(*axis);
        value >= 0.0 && value <= axis.cap()
    });
    resources_ok
        && (0.0..=2.0).contains(&state.stability)
        && state.entropy >= 0.0
        && (0.0..=1.0).contains(&state.progress)
}

fn adversarial_delta() -> impl Strategy<Value = ResourceVector> {
    (-1e6..1e6f64, -1e6..1e6f64, -1e6..1e6f64, -1e6..1e6f64)
        .prop_map(|(o, e, b, d)| ResourceVector::new(o, e, b, d))
}

fn stock() -> impl Strategy<Value = ResourceVector> {
    (0.0..1_000.0f64, 0.0..1_000.0f64, 0.0..1_000.0f64, 0.0..500.0f64)
        .prop_map(|(o, e, b, d)| ResourceVector::new(o, e, b, d))
}

fn context() -> impl Strategy<Value = GameContext> {
    (any::<bool>(), any::<bool>(), any::<bool>(), 0.0..200.0f64).prop_map(
        |(attack, weakness, trade, instability)| GameContext {
            is_under_attack: attack,
            has_enemy_weakness: weakness,
            ai_trade_offer: trade,
            instability,
            ..GameContext::default()
        },
    )
}

proptest! {
    #[test]
    fn prop_resource_changes_stay_in_bounds(deltas in prop::collection::vec(adversarial_delta(), 1..20)) {
        let mut store = StateStore::new();
        for delta in deltas {
            let state = store.apply_resource_changes(delta);
            prop_assert!(in_bounds(state), "out of bounds: {:?}", state);
        }
    }

    #[test]
    fn prop_partial_updates_stay_in_bounds(
        ore in prop::option::of(-1e6..1e6f64),
        data in prop::option::of(-1e6..1e6f64),
        stability in prop::option::of(-50.0..50.0f64),
        entropy in prop::option::of(-1e7..1e7f64),
    ) {
        let mut store = StateStore::new();
        let patch = StatePatch { ore, data, stability, entropy, ..StatePatch::default() };
        let state = store.update_state(&patch);
        prop_assert!(in_bounds(state), "out of bounds: {:?}", state);
    }

    #[test]
    fn prop_history_is_bounded(deltas in prop::collection::vec(adversarial_delta(), 0..150)) {
        let mut store = StateStore::new();
        let n = deltas.len();
        for delta in deltas {
            store.apply_resource_changes(delta);
        }
        prop_assert_eq!(store.history().len(), n.min(100));
    }

    #[test]
    fn prop_layers_are_deterministic(resources in stock(), ctx in context()) {
        let state = ResourceState::from_resources(resources);
        let first = generate_all(&state, &ctx, &mut DecisionIdGenerator::new());
        let second = generate_all(&state, &ctx, &mut DecisionIdGenerator::new());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_engine_execution_stays_in_bounds(
        resources in stock(),
        ctx in context(),
        rotation in any::<bool>(),
    ) {
        let mut engine = DecisionEngine::default();
        engine.update_state_from_game_resources(resources);
        for _ in 0..5 {
            engine.run_cycle(&ctx);
            if let Some(decision) = engine.get_recommended_decisions(1).into_iter().next() {
                if rotation {
                    engine.execute_decision_as_rotation(&decision);
                } else {
                    engine.execute_decision(&decision);
                }
            }
            prop_assert!(in_bounds(&engine.get_state()));
        }
    }

    #[test]
    fn prop_extreme_effects_stay_in_bounds(
        delta in adversarial_delta(),
        stability in -100.0..100.0f64,
        entropy in -1e7..1e7f64,
    ) {
        use arc_quaternion::core::types::DecisionId;
        use arc_quaternion::decision::{Decision, DecisionType};

        let mut engine = DecisionEngine::default();
        let effect = DecisionEffect::new()
            .with_resources(delta.ore, delta.energy, delta.biomass, delta.data)
            .with_stability(stability)
            .with_entropy(entropy);
        let decision = Decision::new(DecisionId(0), DecisionType::TacticalOverclock, ResourceVector::ZERO, effect);

        engine.execute_decision(&decision);
        prop_assert!(in_bounds(&engine.get_state()));
        engine.execute_decision_as_rotation(&decision);
        prop_assert!(in_bounds(&engine.get_state()));
    }
}
