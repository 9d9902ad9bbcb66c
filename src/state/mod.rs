//! Resource state and the store that owns it

pub mod resources;
pub mod store;

pub use resources::{
    Imbalance, ImbalanceDirection, ResourceState, StatePatch, VictoryProgress, MAX_STABILITY,
};
pub use store::StateStore;
