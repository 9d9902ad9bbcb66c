//! Integration tests for the decision engine
//!
//! These drive the public API end to end:
//! - Initial state and layer trigger boundaries
//! - Full tick-driven cycles with execution and preference learning
//! - Bounded histories
//! - Personality and configuration loading

use arc_quaternion::core::config::EngineConfig;
use arc_quaternion::core::types::{DecisionId, ResourceVector};
use arc_quaternion::decision::{
    Decision, DecisionEffect, DecisionIdGenerator, DecisionLayer, DecisionType, ExecutionPath,
};
use arc_quaternion::layers::{ethical, generate, tactical, GameContext};
use arc_quaternion::personality::{load_personality, parse_personality, PersonalityType};
use arc_quaternion::state::resources::ResourceState;
use arc_quaternion::state::StateStore;
use arc_quaternion::DecisionEngine;
use std::path::Path;

// ============================================================================
// Initial State and Layer Boundaries
// ============================================================================

#[test]
fn test_fresh_store_returns_initial_state() {
    let store = StateStore::new();
    let state = store.get_state();
    assert_eq!(state.ore, 100.0);
    assert_eq!(state.energy, 100.0);
    assert_eq!(state.biomass, 100.0);
    assert_eq!(state.data, 100.0);
    assert_eq!(state.stability, 1.0);
    assert_eq!(state.entropy, 0.0);
    assert_eq!(state.progress, 0.0);
}

/// Biomass exactly 100 is below the strict threshold; 101 crosses it
#[test]
fn test_exploit_boundary_is_strict() {
    let context = GameContext::default();

    let at_threshold = ResourceState::from_resources(ResourceVector::new(50.0, 30.0, 100.0, 20.0));
    let decisions = ethical::generate(&at_threshold, &context, &mut DecisionIdGenerator::new());
    assert!(decisions.is_empty());

    let above = ResourceState::from_resources(ResourceVector::new(50.0, 30.0, 101.0, 20.0));
    let decisions = ethical::generate(&above, &context, &mut DecisionIdGenerator::new());
    let kinds: Vec<DecisionType> = decisions.iter().map(|d| d.kind).collect();
    assert_eq!(kinds, vec![DecisionType::EthicalExploit, DecisionType::EthicalPreserve]);

    let exploit = &decisions[0];
    assert_eq!(exploit.cost, ResourceVector::new(0.0, 0.0, 100.0, 0.0));
    assert_eq!(exploit.immediate.resources.ore, 33.0);
    assert_eq!(exploit.immediate.resources.biomass, -100.0);
}

#[test]
fn test_high_energy_emits_single_overclock() {
    let state = ResourceState::from_resources(ResourceVector::new(100.0, 250.0, 100.0, 100.0));
    let decisions = tactical::generate(&state, &GameContext::default(), &mut DecisionIdGenerator::new());
    assert_eq!(decisions.len(), 1);
    assert_eq!(decisions[0].kind, DecisionType::TacticalOverclock);
    assert_eq!(decisions[0].cost.energy, 50.0);
}

#[test]
fn test_decision_types_serialize_as_screaming_snake() {
    let json = serde_json::to_string(&DecisionType::EthicalExploit).unwrap();
    assert_eq!(json, "\"ETHICAL_EXPLOIT\"");
}

#[test]
fn test_empty_context_on_quiet_economy_yields_no_tactical_moves() {
    let state = ResourceState::default();
    let decisions = generate(DecisionLayer::Tactical, &state, &GameContext::default(), &mut DecisionIdGenerator::new());
    assert!(decisions.is_empty());
}

// ============================================================================
// Decision Cycle Workflow
// ============================================================================

/// Tick the engine under attack, execute its top pick, and check the state
/// moved and the preference was learned
#[test]
fn test_full_cycle_workflow() {
    let mut engine = DecisionEngine::default();
    engine.update_state_from_game_resources(ResourceVector::new(400.0, 300.0, 150.0, 120.0));
    let context = GameContext::default().under_attack().with_trade_offer();

    let mut report = None;
    for _ in 0..4 {
        if let Some(r) = engine.tick(0.5, &context) {
            report = Some(r);
        }
    }
    let report = report.expect("a cycle after 2 seconds");
    assert_eq!(report.cycle, 1);
    assert!(!report.selected.is_empty());

    let recommended = engine.get_recommended_decisions(1);
    assert_eq!(recommended.len(), 1);
    let top = recommended[0].clone();

    let before = engine.get_state();
    let impact = engine.execute_decision(&top);
    assert!(impact.success);
    assert_eq!(impact.path, ExecutionPath::Additive);
    assert_eq!(impact.decision_id, top.id);
    assert_ne!(engine.get_state(), before);

    assert!((engine.preference_for(top.kind) - 0.55).abs() < 1e-12);
    assert_eq!(engine.get_decision_history().last().map(|d| d.id), Some(top.id));
}

#[test]
fn test_preview_matches_additive_execution() {
    let mut engine = DecisionEngine::default();
    engine.update_state_from_game_resources(ResourceVector::new(100.0, 300.0, 100.0, 100.0));
    engine.run_cycle(&GameContext::default());

    let decision = engine.get_recommended_decisions(1).remove(0);
    let preview = engine.simulate_decision(&decision);
    engine.execute_decision(&decision);
    let state = engine.get_state();

    assert!((preview.short_term.ore - state.ore).abs() < 1e-9);
    assert!((preview.short_term.energy - state.energy).abs() < 1e-9);
    assert!((preview.short_term.stability - state.stability).abs() < 1e-9);
    assert!((preview.short_term.entropy - state.entropy).abs() < 1e-9);
}

#[test]
fn test_two_execution_paths_differ() {
    let mut additive = DecisionEngine::default();
    let mut rotation = DecisionEngine::default();
    for engine in [&mut additive, &mut rotation] {
        engine.update_state_from_game_resources(ResourceVector::new(100.0, 300.0, 100.0, 100.0));
        engine.run_cycle(&GameContext::default());
    }

    let overclock = additive
        .active_decisions()
        .iter()
        .find(|d| d.kind == DecisionType::TacticalOverclock)
        .cloned()
        .expect("overclock offered at energy 300");

    additive.execute_decision(&overclock);
    rotation.execute_decision_as_rotation(&overclock);

    // additive: +80 ore outright; rotation: a fraction of a percent
    assert_eq!(additive.get_state().ore, 180.0);
    let rotated_ore = rotation.get_state().ore;
    assert!(rotated_ore > 100.0 && rotated_ore < 101.0);
    assert_eq!(rotation.get_impact_history()[0].path, ExecutionPath::Rotation);
}

#[test]
fn test_histories_are_bounded() {
    let config = EngineConfig {
        state_history_capacity: 5,
        impact_history_capacity: 4,
        decision_history_capacity: 3,
        ..EngineConfig::default()
    };
    let mut engine = DecisionEngine::new(config).unwrap();
    let preserve = Decision::new(
        DecisionId(7),
        DecisionType::EthicalPreserve,
        ResourceVector::ZERO,
        DecisionEffect::new().with_stability(-0.05),
    );

    for _ in 0..10 {
        assert!(engine.execute_decision(&preserve).success);
    }

    assert_eq!(engine.store().history().len(), 5);
    assert_eq!(engine.get_impact_history().len(), 4);
    assert_eq!(engine.get_decision_history().len(), 3);
}

/// Each execution is one store mutation on either path, so the previous
/// state is the pre-execution state and history grows by exactly one
#[test]
fn test_execution_tracks_previous_state_and_delta() {
    let start = ResourceState::from_resources(ResourceVector::new(50.0, 30.0, 150.0, 20.0));
    let exploit = ethical::generate(&start, &GameContext::default(), &mut DecisionIdGenerator::new())
        .into_iter()
        .find(|d| d.kind == DecisionType::EthicalExploit)
        .expect("exploit offered at biomass 150");

    let mut additive = DecisionEngine::with_initial_state(EngineConfig::default(), start.clone()).unwrap();
    additive.execute_decision(&exploit);
    assert_eq!(additive.get_previous_state(), start);
    assert_eq!(additive.store().resource_delta(), exploit.immediate.resources);
    assert_eq!(additive.store().history().len(), 1);

    let mut rotation = DecisionEngine::with_initial_state(EngineConfig::default(), start.clone()).unwrap();
    rotation.execute_decision_as_rotation(&exploit);
    let after = rotation.get_state();
    assert_eq!(rotation.get_previous_state(), start);
    assert_eq!(rotation.store().resource_delta(), after.resources() - start.resources());
    assert_eq!(rotation.store().history().len(), 1);
}

#[test]
fn test_history_holds_one_entry_per_execution() {
    let mut engine = DecisionEngine::default();
    let preserve = Decision::new(
        DecisionId(3),
        DecisionType::EthicalPreserve,
        ResourceVector::ZERO,
        DecisionEffect::new().with_stability(-0.05),
    );
    for n in 1..=10 {
        engine.execute_decision(&preserve);
        assert_eq!(engine.store().history().len(), n);
    }
}

#[test]
fn test_empty_recommendations_are_tolerated() {
    let mut engine = DecisionEngine::default();
    let report = engine.run_cycle(&GameContext::default());
    assert_eq!(report.selected.len(), engine.get_recommended_decisions(10).len());
    assert!(engine.execute_recommended(99).is_none());
}

// ============================================================================
// Personality and Configuration
// ============================================================================

/// Refusing a trade is a balance move with almost no risk, so the
/// balance-minded ecologist weighs it above the neutral preset
#[test]
fn test_personality_changes_weighting() {
    let mut engine = DecisionEngine::default();
    let offers = ethical::generate(
        &engine.get_state(),
        &GameContext::default().with_trade_offer(),
        &mut DecisionIdGenerator::new(),
    );
    let refuse = offers
        .iter()
        .find(|d| d.kind == DecisionType::EthicalRefuseTrade)
        .expect("refuse offered alongside accept");

    let balanced = engine.score_breakdown(refuse);
    assert!((balanced.personality_weight - 1.0).abs() < 1e-12);

    engine.set_personality(PersonalityType::Ecologist);
    let ecologist = engine.score_breakdown(refuse);
    assert!((ecologist.personality_weight - 1.47).abs() < 1e-12);
    assert!(ecologist.total > balanced.total);
}

#[test]
fn test_custom_personality_from_toml() {
    let profile = parse_personality(
        r#"
name = "hoarder"
resource_weights = { ore = 2.0, energy = 0.5, biomass = 0.5, data = 0.5 }
risk_tolerance = 0.1
long_term_planning = 0.9
"#,
    )
    .unwrap();

    let mut engine = DecisionEngine::default();
    engine.set_custom_personality(profile).unwrap();
    assert_eq!(engine.personality().name, "hoarder");
    assert_eq!(engine.personality_type(), None);
}

#[test]
fn test_config_from_toml_overrides_defaults() {
    let config = EngineConfig::from_toml_str("decision_interval_secs = 0.5\nmax_active_decisions = 1\n").unwrap();
    assert_eq!(config.max_active_decisions, 1);
    assert_eq!(config.state_history_capacity, 100);

    let mut engine = DecisionEngine::new(config).unwrap();
    engine.update_state_from_game_resources(ResourceVector::new(400.0, 300.0, 150.0, 120.0));
    let report = engine.tick(0.5, &GameContext::default().under_attack());
    assert!(report.is_some_and(|r| r.selected.len() <= 1));
}

#[test]
fn test_shipped_engine_config_matches_defaults() {
    let config = EngineConfig::load(Path::new("data/engine.toml")).unwrap();
    assert_eq!(config, EngineConfig::default());
}

#[test]
fn test_shipped_personalities_load() {
    for name in ["miner", "steward"] {
        let path = format!("data/personalities/{}.toml", name);
        let profile = load_personality(Path::new(&path)).unwrap();
        assert_eq!(profile.name, name);
    }

    let steward = load_personality(Path::new("data/personalities/steward.toml")).unwrap();
    assert!(steward.risk_tolerance < 0.4);
}
