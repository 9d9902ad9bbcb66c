//! Engine configuration with documented constants
//!
//! All tuning numbers for the decision cycle live here so they can be
//! overridden from TOML without touching the scoring code.

use crate::core::error::{EngineError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for the decision engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    // === CYCLE ===
    /// Seconds of game time between decision cycles
    ///
    /// The engine polls on every external tick and only regenerates its
    /// active set once this much time has accumulated.
    pub decision_interval_secs: f64,

    /// Maximum number of concurrently active decisions after arbitration
    pub max_active_decisions: usize,

    // === HISTORY ===
    /// Number of past resource states retained by the state store
    pub state_history_capacity: usize,

    /// Number of impact records retained
    pub impact_history_capacity: usize,

    /// Number of executed decisions retained
    pub decision_history_capacity: usize,

    // === LEARNING ===
    /// Rate at which an executed decision type's preference moves toward 1.0
    ///
    /// At 0.1 the update is `new = 0.9 * old + 0.1`.
    pub preference_learning_rate: f64,

    /// Preference weight for decision types the player has never executed
    pub default_preference: f64,

    // === SCORING ===
    /// Resource delta that maps to a full unit on a quaternion axis
    pub effect_scale: f64,

    /// Entropy value treated as "fully chaotic" (ratio 1.0) by risk scoring
    pub entropy_reference: f64,

    /// Stock level below which a resource is considered scarce
    pub low_resource_threshold: f64,

    /// Stability below which stabilising decisions become urgent
    pub critical_stability: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            decision_interval_secs: 2.0,
            max_active_decisions: 3,

            state_history_capacity: 100,
            impact_history_capacity: 100,
            decision_history_capacity: 100,

            preference_learning_rate: 0.1,
            default_preference: 0.5,

            effect_scale: 1000.0,
            entropy_reference: 10_000.0,
            low_resource_threshold: 50.0,
            critical_stability: 0.5,
        }
    }
}

impl EngineConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML; missing keys fall back to defaults
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if !(self.decision_interval_secs > 0.0) {
            return Err(EngineError::InvalidConfig(format!(
                "decision_interval_secs ({}) must be positive",
                self.decision_interval_secs
            )));
        }

        if self.max_active_decisions == 0 {
            return Err(EngineError::InvalidConfig(
                "max_active_decisions must be at least 1".into(),
            ));
        }

        if self.state_history_capacity == 0
            || self.impact_history_capacity == 0
            || self.decision_history_capacity == 0
        {
            return Err(EngineError::InvalidConfig(
                "history capacities must be at least 1".into(),
            ));
        }

        if !(self.preference_learning_rate > 0.0 && self.preference_learning_rate <= 1.0) {
            return Err(EngineError::InvalidConfig(format!(
                "preference_learning_rate ({}) must be in (0, 1]",
                self.preference_learning_rate
            )));
        }

        if !(0.0..=1.0).contains(&self.default_preference) {
            return Err(EngineError::InvalidConfig(format!(
                "default_preference ({}) must be in [0, 1]",
                self.default_preference
            )));
        }

        if !(self.effect_scale > 0.0 && self.entropy_reference > 0.0) {
            return Err(EngineError::InvalidConfig(
                "effect_scale and entropy_reference must be positive".into(),
            ));
        }

        Ok(())
    }
}
