//! Headless Decision Runner
//!
//! Runs the decision engine against seeded random game contexts and prints a
//! JSON or text summary of how the economy evolved.

use arc_quaternion::core::config::EngineConfig;
use arc_quaternion::core::error::Result;
use arc_quaternion::decision::DecisionType;
use arc_quaternion::layers::GameContext;
use arc_quaternion::personality::{load_personality, PersonalityType};
use arc_quaternion::state::resources::ResourceState;
use arc_quaternion::DecisionEngine;
use ahash::AHashMap;
use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::path::PathBuf;

/// Headless Decision Runner - drive the economic AI without a game
#[derive(Parser, Debug)]
#[command(name = "decision_runner")]
#[command(about = "Run seeded decision cycles and report the resulting economy")]
struct Args {
    /// Personality preset (balanced, industrialist, ecologist, technocrat, warlord, guardian)
    #[arg(long, default_value = "balanced")]
    personality: String,

    /// Custom personality TOML file (overrides --personality)
    #[arg(long)]
    personality_file: Option<PathBuf>,

    /// Engine configuration TOML file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of decision cycles to run
    #[arg(long, default_value_t = 50)]
    cycles: u32,

    /// Execute the top recommendation after each cycle
    #[arg(long)]
    auto_execute: bool,

    /// Execute via quaternion rotation instead of additive effects
    #[arg(long)]
    rotation: bool,

    /// Chance per cycle of each context event (attack, weakness, trade offer)
    #[arg(long, default_value_t = 0.2)]
    event_chance: f64,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Output format: json or text
    #[arg(long, default_value = "json")]
    format: String,
}

/// JSON output structure
#[derive(Serialize)]
struct RunSummary {
    personality: String,
    seed: u64,
    cycles: u64,
    executed: usize,
    failed: usize,
    fallbacks: u32,
    executions_by_type: Vec<(DecisionType, u32)>,
    final_state: ResourceState,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("arc_quaternion=warn")
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    let mut engine = DecisionEngine::new(config)?;

    match &args.personality_file {
        Some(path) => engine.set_custom_personality(load_personality(path)?)?,
        None => engine.set_personality(args.personality.parse::<PersonalityType>()?),
    }

    let interval = engine.config().decision_interval_secs;
    let chance = args.event_chance.clamp(0.0, 1.0);
    let mut fallbacks = 0;
    let mut failed = 0;
    let mut by_type: AHashMap<DecisionType, u32> = AHashMap::new();

    for _ in 0..args.cycles {
        let context = random_context(&mut rng, chance);
        let Some(report) = engine.tick(interval, &context) else {
            continue;
        };
        if report.used_fallback {
            fallbacks += 1;
        }

        if args.auto_execute {
            if let Some(decision) = engine.get_recommended_decisions(1).into_iter().next() {
                let impact = if args.rotation {
                    engine.execute_decision_as_rotation(&decision)
                } else {
                    engine.execute_decision(&decision)
                };
                if impact.success {
                    *by_type.entry(decision.kind).or_insert(0) += 1;
                } else {
                    failed += 1;
                }
            }
        }
    }

    let mut executions_by_type: Vec<(DecisionType, u32)> = by_type.into_iter().collect();
    executions_by_type.sort();

    let summary = RunSummary {
        personality: engine.personality().name.clone(),
        seed,
        cycles: engine.cycles(),
        executed: engine.get_decision_history().len(),
        failed,
        fallbacks,
        executions_by_type,
        final_state: engine.get_state(),
    };

    match args.format.as_str() {
        "text" => print_text(&summary),
        "json" => println!("{}", serde_json::to_string_pretty(&summary)?),
        other => {
            eprintln!("Unknown format '{}', defaulting to json", other);
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}

/// Context with each event flag drawn independently
fn random_context(rng: &mut ChaCha8Rng, chance: f64) -> GameContext {
    GameContext {
        is_under_attack: rng.gen_bool(chance),
        has_enemy_weakness: rng.gen_bool(chance),
        ai_trade_offer: rng.gen_bool(chance),
        instability: rng.gen_range(0.0..150.0),
        ..GameContext::default()
    }
}

fn print_text(summary: &RunSummary) {
    let state = &summary.final_state;
    println!("Decision Run");
    println!("============");
    println!("Personality: {}", summary.personality);
    println!("Cycles: {}", summary.cycles);
    println!("Executed: {} (failed {})", summary.executed, summary.failed);
    println!("Arbitration fallbacks: {}", summary.fallbacks);
    println!();
    println!("Final economy:");
    println!("  ore {:.1}  energy {:.1}  biomass {:.1}  data {:.1}", state.ore, state.energy, state.biomass, state.data);
    println!("  stability {:.3}  entropy {:.1}  progress {:.3}", state.stability, state.entropy, state.progress);
    println!();
    for (kind, count) in &summary.executions_by_type {
        println!("  {:<40} {}", kind.to_string(), count);
    }
    println!();
    println!("Seed: {}", summary.seed);
}
