pub mod bounded;
pub mod config;
pub mod error;
pub mod types;

pub use bounded::BoundedLog;
pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use types::{DecisionId, ResourceAxis, ResourceVector, Tick};
