//! Four-axis resource state and its derived metrics

use crate::core::types::{ResourceAxis, ResourceVector};
use serde::{Deserialize, Serialize};

/// Upper bound for stability
pub const MAX_STABILITY: f64 = 2.0;

/// Weights used to fold the victory trackers into overall progress
pub const PROGRESS_WEIGHTS: VictoryProgress = VictoryProgress {
    industrial: 0.3,
    ecological: 0.2,
    technological: 0.3,
    balanced: 0.2,
};

/// Per-path victory progress, each tracker in `[0, 1]`
///
/// Also used as a signed delta inside decision effects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VictoryProgress {
    pub industrial: f64,
    pub ecological: f64,
    pub technological: f64,
    pub balanced: f64,
}

impl VictoryProgress {
    pub fn new(industrial: f64, ecological: f64, technological: f64, balanced: f64) -> Self {
        Self {
            industrial,
            ecological,
            technological,
            balanced,
        }
    }

    pub fn sum(&self) -> f64 {
        self.industrial + self.ecological + self.technological + self.balanced
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Weighted average using [`PROGRESS_WEIGHTS`]
    pub fn weighted_average(&self) -> f64 {
        let w = PROGRESS_WEIGHTS;
        let total = w.sum();
        (self.industrial * w.industrial
            + self.ecological * w.ecological
            + self.technological * w.technological
            + self.balanced * w.balanced)
            / total
    }

    /// Add a delta, keeping every tracker in `[0, 1]`
    pub fn advanced_by(&self, delta: &VictoryProgress) -> Self {
        Self {
            industrial: clamp_unit(self.industrial + delta.industrial),
            ecological: clamp_unit(self.ecological + delta.ecological),
            technological: clamp_unit(self.technological + delta.technological),
            balanced: clamp_unit(self.balanced + delta.balanced),
        }
    }

    pub fn clamped(&self) -> Self {
        self.advanced_by(&VictoryProgress::default())
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Snapshot of the economy: four resource quantities plus derived metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceState {
    pub ore: f64,
    pub energy: f64,
    pub biomass: f64,
    pub data: f64,
    /// Balance measure in `[0, 2]`; 2 means all axes equal
    pub stability: f64,
    /// Population variance of the four quantities
    pub entropy: f64,
    /// Weighted average of the victory trackers
    pub progress: f64,
    pub victory: VictoryProgress,
}

impl Default for ResourceState {
    fn default() -> Self {
        Self {
            ore: 100.0,
            energy: 100.0,
            biomass: 100.0,
            data: 100.0,
            stability: 1.0,
            entropy: 0.0,
            progress: 0.0,
            victory: VictoryProgress::default(),
        }
    }
}

impl ResourceState {
    /// Build a state from raw quantities with all derived metrics computed
    pub fn from_resources(resources: ResourceVector) -> Self {
        let mut state = Self {
            victory: VictoryProgress::default(),
            ..Self::default()
        };
        state.set_resources(resources.clamped());
        state.recompute_derived();
        state
    }

    pub fn resources(&self) -> ResourceVector {
        ResourceVector::new(self.ore, self.energy, self.biomass, self.data)
    }

    pub fn set_resources(&mut self, resources: ResourceVector) {
        self.ore = resources.ore;
        self.energy = resources.energy;
        self.biomass = resources.biomass;
        self.data = resources.data;
    }

    pub fn get(&self, axis: ResourceAxis) -> f64 {
        self.resources().get(axis)
    }

    /// Recompute stability, entropy and progress from the raw quantities
    pub fn recompute_derived(&mut self) {
        let resources = self.resources();
        self.stability = stability_of(&resources);
        self.entropy = entropy_of(&resources);
        self.recompute_progress();
    }

    pub fn recompute_progress(&mut self) {
        self.victory = self.victory.clamped();
        self.progress = self.victory.weighted_average();
    }

    /// Force every field into its declared bounds
    pub fn clamp_to_bounds(&mut self) {
        let resources = self.resources().clamped();
        self.set_resources(resources);
        self.stability = clamp_stability(self.stability);
        self.entropy = clamp_entropy(self.entropy);
        self.recompute_progress();
    }

    /// Axis deviating most from the four-way mean
    ///
    /// Returns `None` when every resource is zero.
    pub fn imbalance(&self) -> Option<Imbalance> {
        let resources = self.resources();
        let max_value = ResourceAxis::ALL
            .iter()
            .map(|a| resources.get(*a))
            .fold(0.0_f64, f64::max);
        if max_value <= 0.0 {
            return None;
        }

        let mean = resources.total() / 4.0;
        let mut worst = ResourceAxis::Ore;
        let mut worst_deviation = -1.0;
        for axis in ResourceAxis::ALL {
            let deviation = (resources.get(axis) - mean).abs();
            if deviation > worst_deviation {
                worst = axis;
                worst_deviation = deviation;
            }
        }

        let direction = if resources.get(worst) >= mean {
            ImbalanceDirection::Surplus
        } else {
            ImbalanceDirection::Deficit
        };

        Some(Imbalance {
            axis: worst,
            severity: (worst_deviation / max_value).clamp(0.0, 1.0),
            direction,
        })
    }
}

/// Whether the imbalanced axis sits above or below the mean
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImbalanceDirection {
    Surplus,
    Deficit,
}

/// The most imbalanced resource axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Imbalance {
    pub axis: ResourceAxis,
    /// Max deviation over max resource value, in `[0, 1]`
    pub severity: f64,
    pub direction: ImbalanceDirection,
}

impl Imbalance {
    /// Whether a change of `delta` on the imbalanced axis moves it toward the mean
    ///
    /// Only the sign is considered.
    pub fn is_improved_by(&self, delta: f64) -> bool {
        match self.direction {
            ImbalanceDirection::Surplus => delta < 0.0,
            ImbalanceDirection::Deficit => delta > 0.0,
        }
    }
}

/// Partial state update applied by [`crate::state::StateStore::update_state`]
///
/// Stability and entropy given here are taken as-is (then clamped). When they
/// are absent but a resource field is present, they are recomputed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatePatch {
    pub ore: Option<f64>,
    pub energy: Option<f64>,
    pub biomass: Option<f64>,
    pub data: Option<f64>,
    pub stability: Option<f64>,
    pub entropy: Option<f64>,
    pub victory: Option<VictoryProgress>,
}

impl StatePatch {
    /// Patch setting all four resource quantities
    pub fn resources(resources: ResourceVector) -> Self {
        Self {
            ore: Some(resources.ore),
            energy: Some(resources.energy),
            biomass: Some(resources.biomass),
            data: Some(resources.data),
            ..Self::default()
        }
    }

    /// Patch replacing every field with the values of `state`
    pub fn from_state(state: &ResourceState) -> Self {
        Self {
            stability: Some(state.stability),
            entropy: Some(state.entropy),
            victory: Some(state.victory),
            ..Self::resources(state.resources())
        }
    }

    pub fn touches_resources(&self) -> bool {
        self.ore.is_some() || self.energy.is_some() || self.biomass.is_some() || self.data.is_some()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// `2 * (1 - stddev / mean)` clamped to `[0, 2]`; zero when the mean is zero
pub fn stability_of(resources: &ResourceVector) -> f64 {
    let mean = resources.total() / 4.0;
    if mean <= 0.0 {
        return 0.0;
    }
    let normalized = entropy_of(resources).sqrt() / mean;
    clamp_stability(MAX_STABILITY * (1.0 - normalized))
}

/// Population variance of the four quantities
pub fn entropy_of(resources: &ResourceVector) -> f64 {
    let mean = resources.total() / 4.0;
    let variance = ResourceAxis::ALL
        .iter()
        .map(|a| {
            let d = resources.get(*a) - mean;
            d * d
        })
        .sum::<f64>()
        / 4.0;
    clamp_entropy(variance)
}

pub fn clamp_stability(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, MAX_STABILITY)
    }
}

pub fn clamp_entropy(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.max(0.0)
    }
}
