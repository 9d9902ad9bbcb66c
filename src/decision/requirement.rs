//! Preconditions a decision needs before it can be executed

use crate::core::types::ResourceAxis;
use crate::layers::context::GameContext;
use crate::state::resources::ResourceState;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Requirement {
    /// At least `amount` of a resource in stock
    Resource { axis: ResourceAxis, amount: f64 },
    /// A named technology has been unlocked
    Tech { name: String },
    /// At least `count` buildings of a kind
    Building { name: String, count: u32 },
    /// At least `count` units of a kind
    Unit { name: String, count: u32 },
    /// At least `count` controlled territories
    Territory { count: u32 },
}

impl Requirement {
    pub fn building(name: impl Into<String>, count: u32) -> Self {
        Requirement::Building {
            name: name.into(),
            count,
        }
    }

    pub fn tech(name: impl Into<String>) -> Self {
        Requirement::Tech { name: name.into() }
    }

    pub fn is_met(&self, state: &ResourceState, context: &GameContext) -> bool {
        match self {
            Requirement::Resource { axis, amount } => state.get(*axis) >= *amount,
            Requirement::Tech { name } => context.unlocked_techs.iter().any(|t| t == name),
            Requirement::Building { name, count } => context.building_count(name) >= *count,
            Requirement::Unit { name, count } => context.unit_count(name) >= *count,
            Requirement::Territory { count } => context.territories >= *count,
        }
    }
}
