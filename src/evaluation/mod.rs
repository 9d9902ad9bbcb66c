//! Decision evaluation
//!
//! The evaluator proper scores a decision from its own declared fields and
//! the personality. Preference and urgency are separate multipliers the
//! engine layers on top.

pub mod evaluator;
pub mod preference;
pub mod urgency;

pub use evaluator::{DecisionEvaluator, ScoreBreakdown};
pub use preference::PreferenceTable;
pub use urgency::{preference_factor, situational_urgency};
