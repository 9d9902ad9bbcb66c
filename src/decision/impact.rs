//! Record of an executed decision

use crate::core::types::{DecisionId, ResourceVector};
use crate::decision::effect::DecisionEffect;
use crate::decision::kind::DecisionType;
use serde::{Deserialize, Serialize};

/// How a decision was committed to the state store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionPath {
    /// Immediate effect added to the resource quantities
    Additive,
    /// Effect applied as a quaternion rotation of the state
    Rotation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionImpact {
    pub decision_id: DecisionId,
    pub kind: DecisionType,
    /// Engine clock (seconds) at execution
    pub executed_at: f64,
    pub immediate: DecisionEffect,
    pub long_term: Option<DecisionEffect>,
    pub actual_cost: ResourceVector,
    pub path: ExecutionPath,
    pub success: bool,
}
