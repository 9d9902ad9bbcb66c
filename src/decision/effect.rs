//! What a decision does to the economy

use crate::core::types::ResourceVector;
use crate::state::resources::VictoryProgress;
use serde::{Deserialize, Serialize};

/// Non-resource bonus granted by a decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BonusKind {
    Defense,
    Offense,
    Production,
    Research,
    Diplomacy,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectBonus {
    pub kind: BonusKind,
    pub amount: f64,
}

/// Deltas applied by a decision, either immediately or over the long term
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionEffect {
    pub resources: ResourceVector,
    pub stability_change: f64,
    pub entropy_change: f64,
    pub tech_unlocks: u32,
    pub bonuses: Vec<EffectBonus>,
    pub victory: VictoryProgress,
}

impl DecisionEffect {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resources(mut self, ore: f64, energy: f64, biomass: f64, data: f64) -> Self {
        self.resources = ResourceVector::new(ore, energy, biomass, data);
        self
    }

    pub fn with_stability(mut self, change: f64) -> Self {
        self.stability_change = change;
        self
    }

    pub fn with_entropy(mut self, change: f64) -> Self {
        self.entropy_change = change;
        self
    }

    pub fn with_tech_unlocks(mut self, count: u32) -> Self {
        self.tech_unlocks = count;
        self
    }

    pub fn with_bonus(mut self, kind: BonusKind, amount: f64) -> Self {
        self.bonuses.push(EffectBonus { kind, amount });
        self
    }

    pub fn with_victory(mut self, victory: VictoryProgress) -> Self {
        self.victory = victory;
        self
    }

    /// Combine two effects (immediate + long-term projection)
    pub fn combined(&self, other: &DecisionEffect) -> DecisionEffect {
        let mut bonuses = self.bonuses.clone();
        bonuses.extend(other.bonuses.iter().copied());
        DecisionEffect {
            resources: self.resources + other.resources,
            stability_change: self.stability_change + other.stability_change,
            entropy_change: self.entropy_change + other.entropy_change,
            tech_unlocks: self.tech_unlocks + other.tech_unlocks,
            bonuses,
            victory: VictoryProgress {
                industrial: self.victory.industrial + other.victory.industrial,
                ecological: self.victory.ecological + other.victory.ecological,
                technological: self.victory.technological + other.victory.technological,
                balanced: self.victory.balanced + other.victory.balanced,
            },
        }
    }

    /// True when the effect changes stability, entropy or victory progress
    pub fn touches_metrics(&self) -> bool {
        self.stability_change != 0.0 || self.entropy_change != 0.0 || !self.victory.is_zero()
    }
}
