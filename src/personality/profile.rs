//! Personality profiles - how an AI economy weighs its options

use crate::core::error::{EngineError, Result};
use crate::core::types::{ResourceAxis, ResourceVector};
use crate::decision::{Decision, StrategicPriority};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Weight per strategic category (1.0 = neutral)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrategicPriorities {
    pub expansion: f64,
    pub defense: f64,
    pub research: f64,
    pub balance: f64,
}

impl Default for StrategicPriorities {
    fn default() -> Self {
        Self {
            expansion: 1.0,
            defense: 1.0,
            research: 1.0,
            balance: 1.0,
        }
    }
}

impl StrategicPriorities {
    pub fn get(&self, priority: StrategicPriority) -> f64 {
        match priority {
            StrategicPriority::Expansion => self.expansion,
            StrategicPriority::Defense => self.defense,
            StrategicPriority::Research => self.research,
            StrategicPriority::Balance => self.balance,
        }
    }
}

/// Behavioral tendencies (0.0 to 1.0)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BehaviorTraits {
    pub aggression: f64,
    pub adaptability: f64,
    pub predictability: f64,
}

impl Default for BehaviorTraits {
    fn default() -> Self {
        Self {
            aggression: 0.5,
            adaptability: 0.5,
            predictability: 0.5,
        }
    }
}

/// Complete weighting profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalityProfile {
    #[serde(default)]
    pub name: String,
    /// Per-axis weights in `[0, 2]`, 1.0 neutral
    pub resource_weights: ResourceVector,
    #[serde(default)]
    pub priorities: StrategicPriorities,
    /// Appetite for risky decisions, `[0, 1]`
    pub risk_tolerance: f64,
    /// Preference for decisions with long-term payoff, `[0, 1]`
    pub long_term_planning: f64,
    #[serde(default)]
    pub traits: BehaviorTraits,
}

impl Default for PersonalityProfile {
    fn default() -> Self {
        PersonalityType::Balanced.profile()
    }
}

/// Lower and upper bound of the personality multiplier
pub const MIN_PERSONALITY_WEIGHT: f64 = 0.1;
pub const MAX_PERSONALITY_WEIGHT: f64 = 3.0;

impl PersonalityProfile {
    /// Multiplier this personality applies to a decision's base utility
    ///
    /// Clamped to `[0.1, 3.0]`.
    pub fn decision_weight(&self, decision: &Decision) -> f64 {
        let mut weight = 1.0;

        let deltas = decision.immediate.resources;
        for axis in ResourceAxis::ALL {
            let axis_weight = self.resource_weights.get(axis);
            weight *= (deltas.get(axis).abs() + 1.0).powf(axis_weight / 2.0);
        }

        weight *= self.priorities.get(decision.kind.priority());

        weight *= 1.0 + (self.risk_tolerance - 0.5) * decision.risk_level * 2.0;

        if decision.long_term.is_some() && self.long_term_planning > 0.5 {
            weight *= 1.0 + (self.long_term_planning - 0.5) * 0.5;
        }

        if weight.is_nan() {
            return MIN_PERSONALITY_WEIGHT;
        }
        weight.clamp(MIN_PERSONALITY_WEIGHT, MAX_PERSONALITY_WEIGHT)
    }

    /// Check every weight and scalar is within its declared range
    pub fn validate(&self) -> Result<()> {
        for axis in ResourceAxis::ALL {
            let w = self.resource_weights.get(axis);
            if !(0.0..=2.0).contains(&w) {
                return Err(EngineError::InvalidPersonality(format!(
                    "{} weight {} outside [0, 2]",
                    axis, w
                )));
            }
        }

        let unit_fields = [
            ("risk_tolerance", self.risk_tolerance),
            ("long_term_planning", self.long_term_planning),
            ("aggression", self.traits.aggression),
            ("adaptability", self.traits.adaptability),
            ("predictability", self.traits.predictability),
        ];
        for (field, value) in unit_fields {
            if !(0.0..=1.0).contains(&value) {
                return Err(EngineError::InvalidPersonality(format!(
                    "{} {} outside [0, 1]",
                    field, value
                )));
            }
        }

        let p = self.priorities;
        if [p.expansion, p.defense, p.research, p.balance]
            .iter()
            .any(|v| *v < 0.0 || v.is_nan())
        {
            return Err(EngineError::InvalidPersonality(
                "strategic priorities must be non-negative".into(),
            ));
        }

        Ok(())
    }
}

/// Built-in personality presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonalityType {
    Balanced,
    Industrialist,
    Ecologist,
    Technocrat,
    Warlord,
    Guardian,
}

impl PersonalityType {
    pub const ALL: [PersonalityType; 6] = [
        PersonalityType::Balanced,
        PersonalityType::Industrialist,
        PersonalityType::Ecologist,
        PersonalityType::Technocrat,
        PersonalityType::Warlord,
        PersonalityType::Guardian,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PersonalityType::Balanced => "balanced",
            PersonalityType::Industrialist => "industrialist",
            PersonalityType::Ecologist => "ecologist",
            PersonalityType::Technocrat => "technocrat",
            PersonalityType::Warlord => "warlord",
            PersonalityType::Guardian => "guardian",
        }
    }

    /// The preset weighting profile
    pub fn profile(self) -> PersonalityProfile {
        let (weights, priorities, risk_tolerance, long_term_planning, traits) = match self {
            PersonalityType::Balanced => (
                ResourceVector::new(1.0, 1.0, 1.0, 1.0),
                StrategicPriorities::default(),
                0.5,
                0.5,
                BehaviorTraits::default(),
            ),
            PersonalityType::Industrialist => (
                ResourceVector::new(1.6, 1.2, 0.6, 0.8),
                StrategicPriorities {
                    expansion: 1.4,
                    defense: 0.9,
                    research: 0.9,
                    balance: 0.7,
                },
                0.6,
                0.7,
                BehaviorTraits {
                    aggression: 0.6,
                    adaptability: 0.4,
                    predictability: 0.7,
                },
            ),
            PersonalityType::Ecologist => (
                ResourceVector::new(0.6, 0.9, 1.7, 0.9),
                StrategicPriorities {
                    expansion: 0.7,
                    defense: 1.0,
                    research: 0.9,
                    balance: 1.5,
                },
                0.3,
                0.8,
                BehaviorTraits {
                    aggression: 0.2,
                    adaptability: 0.6,
                    predictability: 0.6,
                },
            ),
            PersonalityType::Technocrat => (
                ResourceVector::new(0.8, 1.2, 0.7, 1.8),
                StrategicPriorities {
                    expansion: 0.8,
                    defense: 0.9,
                    research: 1.6,
                    balance: 1.0,
                },
                0.4,
                0.9,
                BehaviorTraits {
                    aggression: 0.3,
                    adaptability: 0.7,
                    predictability: 0.5,
                },
            ),
            PersonalityType::Warlord => (
                ResourceVector::new(1.3, 1.3, 0.8, 0.6),
                StrategicPriorities {
                    expansion: 1.3,
                    defense: 1.5,
                    research: 0.6,
                    balance: 0.6,
                },
                0.8,
                0.3,
                BehaviorTraits {
                    aggression: 0.9,
                    adaptability: 0.5,
                    predictability: 0.3,
                },
            ),
            PersonalityType::Guardian => (
                ResourceVector::new(1.0, 1.1, 1.0, 0.9),
                StrategicPriorities {
                    expansion: 0.7,
                    defense: 1.4,
                    research: 1.0,
                    balance: 1.3,
                },
                0.2,
                0.6,
                BehaviorTraits {
                    aggression: 0.2,
                    adaptability: 0.4,
                    predictability: 0.8,
                },
            ),
        };

        PersonalityProfile {
            name: self.name().to_string(),
            resource_weights: weights,
            priorities,
            risk_tolerance,
            long_term_planning,
            traits,
        }
    }
}

impl fmt::Display for PersonalityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PersonalityType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        PersonalityType::ALL
            .into_iter()
            .find(|p| p.name() == wanted)
            .ok_or_else(|| EngineError::UnknownPersonality(s.to_string()))
    }
}
