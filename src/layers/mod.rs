//! Layer processors - candidate generation across four horizons
//!
//! Each layer is a stateless generator `(state, context) -> decisions`,
//! dispatched here by [`DecisionLayer`]. Ids come from the caller's
//! generator so output is fully determined by the inputs.

pub mod context;
pub mod ethical;
pub mod operational;
pub mod strategic;
pub mod tactical;

pub use context::GameContext;

use crate::decision::{Decision, DecisionIdGenerator, DecisionLayer};
use crate::state::resources::ResourceState;

/// Run a single layer processor
pub fn generate(
    layer: DecisionLayer,
    state: &ResourceState,
    context: &GameContext,
    ids: &mut DecisionIdGenerator,
) -> Vec<Decision> {
    match layer {
        DecisionLayer::Tactical => tactical::generate(state, context, ids),
        DecisionLayer::Operational => operational::generate(state, context, ids),
        DecisionLayer::Strategic => strategic::generate(state, context, ids),
        DecisionLayer::Ethical => ethical::generate(state, context, ids),
    }
}

/// Run every layer processor in layer order
pub fn generate_all(
    state: &ResourceState,
    context: &GameContext,
    ids: &mut DecisionIdGenerator,
) -> Vec<Decision> {
    DecisionLayer::ALL
        .iter()
        .flat_map(|layer| generate(*layer, state, context, ids))
        .collect()
}
