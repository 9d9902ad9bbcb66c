//! Engine orchestration: the periodic decision cycle and its public surface

pub mod orchestrator;
pub mod preview;

pub use orchestrator::{CycleReport, DecisionEngine, EnginePhase};
pub use preview::{preview_decision, project_effect, SimulationPreview};
