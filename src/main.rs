//! Arc Quaternion - interactive driver
//!
//! Steps the decision engine by hand, toggles game-context flags, and lets
//! the operator execute recommendations additively or as rotations.

use arc_quaternion::core::error::Result;
use arc_quaternion::decision::Decision;
use arc_quaternion::layers::GameContext;
use arc_quaternion::personality::{load_personality, PersonalityType};
use arc_quaternion::DecisionEngine;

use std::io::{self, Write};
use std::path::Path;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("arc_quaternion=info")
        .init();

    tracing::info!("Arc Quaternion starting...");

    let mut engine = DecisionEngine::default();
    let mut context = GameContext::default();

    println!("\n=== ARC QUATERNION ===");
    println!("Economic decision core for a four-resource RTS economy");
    println!();
    println!("Commands:");
    println!("  tick / t             - Advance one decision interval");
    println!("  run <n>              - Run n decision intervals");
    println!("  status / s           - Show resources and metrics");
    println!("  recommend / r        - List the active decisions");
    println!("  execute <i>          - Execute recommendation i additively");
    println!("  rotate <i>           - Execute recommendation i as a rotation");
    println!("  simulate <i>         - Preview recommendation i");
    println!("  personality <name>   - Switch preset, or load a .toml profile");
    println!("  attack / weakness / trade - Toggle context flags");
    println!("  instability <x>      - Set context instability");
    println!("  quit / q             - Exit");
    println!();

    loop {
        display_status(&engine, &context);

        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        if input == "quit" || input == "q" {
            break;
        }

        if input == "tick" || input == "t" {
            advance(&mut engine, &context, 1);
            continue;
        }

        if let Some(rest) = input.strip_prefix("run ") {
            match rest.trim().parse::<u32>() {
                Ok(n) => advance(&mut engine, &context, n),
                Err(_) => println!("Usage: run <number>"),
            }
            continue;
        }

        if input == "status" || input == "s" {
            display_detailed_status(&engine);
            continue;
        }

        if input == "recommend" || input == "r" {
            display_recommendations(&engine);
            continue;
        }

        if let Some(rest) = input.strip_prefix("execute ") {
            if let Some(decision) = pick(&engine, rest) {
                let impact = engine.execute_decision(&decision);
                println!("{} -> success: {}", decision.kind, impact.success);
            }
            continue;
        }

        if let Some(rest) = input.strip_prefix("rotate ") {
            if let Some(decision) = pick(&engine, rest) {
                let impact = engine.execute_decision_as_rotation(&decision);
                println!("{} (rotation) -> success: {}", decision.kind, impact.success);
            }
            continue;
        }

        if let Some(rest) = input.strip_prefix("simulate ") {
            if let Some(decision) = pick(&engine, rest) {
                let preview = engine.simulate_decision(&decision);
                println!("Preview of {}:", decision.kind);
                for (label, state) in [
                    ("short term", &preview.short_term),
                    ("long term", &preview.long_term),
                    ("rotation", &preview.rotation),
                ] {
                    println!(
                        "  {:<10} ore {:>7.1} energy {:>7.1} biomass {:>7.1} data {:>7.1} stability {:.2}",
                        label, state.ore, state.energy, state.biomass, state.data, state.stability
                    );
                }
            }
            continue;
        }

        if let Some(rest) = input.strip_prefix("personality ") {
            let name = rest.trim();
            if name.ends_with(".toml") {
                match load_personality(Path::new(name)).and_then(|p| engine.set_custom_personality(p)) {
                    Ok(()) => println!("Loaded personality {}", engine.personality().name),
                    Err(e) => println!("Could not load personality: {}", e),
                }
            } else {
                match name.parse::<PersonalityType>() {
                    Ok(kind) => {
                        engine.set_personality(kind);
                        println!("Personality is now {}", kind);
                    }
                    Err(e) => println!("{}", e),
                }
            }
            continue;
        }

        if input == "attack" {
            context.is_under_attack = !context.is_under_attack;
            continue;
        }

        if input == "weakness" {
            context.has_enemy_weakness = !context.has_enemy_weakness;
            continue;
        }

        if input == "trade" {
            context.ai_trade_offer = !context.ai_trade_offer;
            continue;
        }

        if let Some(rest) = input.strip_prefix("instability ") {
            match rest.trim().parse::<f64>() {
                Ok(value) => context.instability = value,
                Err(_) => println!("Usage: instability <number>"),
            }
            continue;
        }

        println!("Unknown command. Available: tick, run <n>, status, recommend, execute <i>, rotate <i>, simulate <i>, personality <name>, attack, weakness, trade, instability <x>, quit");
    }

    println!(
        "\nGoodbye! {} cycles run, {} decisions executed.",
        engine.cycles(),
        engine.get_decision_history().len()
    );
    Ok(())
}

/// Advance the engine by `n` decision intervals
fn advance(engine: &mut DecisionEngine, context: &GameContext, n: u32) {
    let interval = engine.config().decision_interval_secs;
    for _ in 0..n {
        if let Some(report) = engine.tick(interval, context) {
            println!(
                "Cycle {}: {} generated, {} viable, {} active{}",
                report.cycle,
                report.generated,
                report.viable,
                report.selected.len(),
                if report.used_fallback { " (fallback)" } else { "" }
            );
        }
    }
}

/// Look up a recommendation by index, printing usage on failure
fn pick(engine: &DecisionEngine, arg: &str) -> Option<Decision> {
    let index = match arg.trim().parse::<usize>() {
        Ok(i) => i,
        Err(_) => {
            println!("Expected a recommendation index");
            return None;
        }
    };
    let decision = engine.active_decisions().get(index).cloned();
    if decision.is_none() {
        println!("No recommendation #{} (run 'recommend')", index);
    }
    decision
}

fn display_status(engine: &DecisionEngine, context: &GameContext) {
    let state = engine.get_state();
    println!(
        "\n[t={:.1}s] ore {:.0} | energy {:.0} | biomass {:.0} | data {:.0} | stability {:.2} | {} | attack:{} weakness:{} trade:{}",
        engine.clock(),
        state.ore,
        state.energy,
        state.biomass,
        state.data,
        state.stability,
        engine.personality().name,
        context.is_under_attack,
        context.has_enemy_weakness,
        context.ai_trade_offer
    );
}

fn display_detailed_status(engine: &DecisionEngine) {
    let state = engine.get_state();
    println!("\n=== ECONOMY ===");
    println!("Ore:       {:>8.1}", state.ore);
    println!("Energy:    {:>8.1}", state.energy);
    println!("Biomass:   {:>8.1}", state.biomass);
    println!("Data:      {:>8.1}", state.data);
    println!("Stability: {:>8.3}", state.stability);
    println!("Entropy:   {:>8.1}", state.entropy);
    println!("Progress:  {:>8.3}", state.progress);
    println!(
        "Victory:   industrial {:.2} ecological {:.2} technological {:.2} balanced {:.2}",
        state.victory.industrial, state.victory.ecological, state.victory.technological, state.victory.balanced
    );
    if let Some(imbalance) = engine.store().get_imbalance() {
        println!(
            "Imbalance: {} {:?} (severity {:.2})",
            imbalance.axis, imbalance.direction, imbalance.severity
        );
    }

    let impacts = engine.get_impact_history();
    if !impacts.is_empty() {
        println!("\n=== RECENT IMPACTS ===");
        for impact in impacts.iter().rev().take(5) {
            println!(
                "  {} {} via {:?} at {:.1}s success={}",
                impact.decision_id, impact.kind, impact.path, impact.executed_at, impact.success
            );
        }
    }
}

fn display_recommendations(engine: &DecisionEngine) {
    let active = engine.active_decisions();
    if active.is_empty() {
        println!("No active decisions (run 'tick' first)");
        return;
    }
    for (i, decision) in active.iter().enumerate() {
        let breakdown = engine.score_breakdown(decision);
        println!(
            "  [{}] {:<32} utility {:>6.3} (base {:.2} x personality {:.2} x risk {:.2} x temporal {:.2}) pref {:.2}",
            i,
            decision.kind.to_string(),
            decision.utility_score,
            breakdown.base_utility,
            breakdown.personality_weight,
            breakdown.risk_adjustment,
            breakdown.temporal_adjustment,
            decision.player_preference
        );
    }
}
