//! Personality model
//!
//! A fixed set of named weighting presets over resource axes, strategic
//! categories, risk and planning horizon, plus TOML-loaded custom profiles.

pub mod loader;
pub mod profile;

pub use loader::{load_personality, parse_personality};
pub use profile::{
    BehaviorTraits, PersonalityProfile, PersonalityType, StrategicPriorities,
    MAX_PERSONALITY_WEIGHT, MIN_PERSONALITY_WEIGHT,
};
