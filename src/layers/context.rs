//! Situational flags pushed in by the surrounding game each cycle

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-cycle view of the world outside the economy
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameContext {
    pub is_under_attack: bool,
    pub has_enemy_weakness: bool,
    /// Unrest level reported by the simulation layer
    pub instability: f64,
    pub ai_trade_offer: bool,

    pub unlocked_techs: Vec<String>,
    pub buildings: BTreeMap<String, u32>,
    pub units: BTreeMap<String, u32>,
    pub territories: u32,
}

impl GameContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn under_attack(mut self) -> Self {
        self.is_under_attack = true;
        self
    }

    pub fn with_enemy_weakness(mut self) -> Self {
        self.has_enemy_weakness = true;
        self
    }

    pub fn with_instability(mut self, instability: f64) -> Self {
        self.instability = instability;
        self
    }

    pub fn with_trade_offer(mut self) -> Self {
        self.ai_trade_offer = true;
        self
    }

    pub fn with_building(mut self, name: impl Into<String>, count: u32) -> Self {
        self.buildings.insert(name.into(), count);
        self
    }

    pub fn building_count(&self, name: &str) -> u32 {
        self.buildings.get(name).copied().unwrap_or(0)
    }

    pub fn unit_count(&self, name: &str) -> u32 {
        self.units.get(name).copied().unwrap_or(0)
    }
}
