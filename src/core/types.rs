//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;

/// Engine time counter (decision cycles elapsed)
pub type Tick = u64;

/// Unique identifier for decisions
///
/// Issued by [`crate::decision::DecisionIdGenerator`] so identities are
/// reproducible across runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DecisionId(pub u64);

impl fmt::Display for DecisionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "decision-{}", self.0)
    }
}

/// One of the four tracked economic quantities
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceAxis {
    Ore,
    Energy,
    Biomass,
    Data,
}

impl ResourceAxis {
    pub const ALL: [ResourceAxis; 4] = [
        ResourceAxis::Ore,
        ResourceAxis::Energy,
        ResourceAxis::Biomass,
        ResourceAxis::Data,
    ];

    /// Storage cap for this axis
    pub fn cap(self) -> f64 {
        match self {
            ResourceAxis::Ore => 10_000.0,
            ResourceAxis::Energy => 5_000.0,
            ResourceAxis::Biomass => 3_000.0,
            ResourceAxis::Data => 2_000.0,
        }
    }

    /// Clamp a quantity into `[0, cap]`
    pub fn clamp(self, value: f64) -> f64 {
        if value.is_nan() {
            return 0.0;
        }
        value.clamp(0.0, self.cap())
    }

    pub fn name(self) -> &'static str {
        match self {
            ResourceAxis::Ore => "ore",
            ResourceAxis::Energy => "energy",
            ResourceAxis::Biomass => "biomass",
            ResourceAxis::Data => "data",
        }
    }
}

impl fmt::Display for ResourceAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Amounts along the four resource axes
///
/// Used for stock levels, costs, and signed deltas alike.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceVector {
    pub ore: f64,
    pub energy: f64,
    pub biomass: f64,
    pub data: f64,
}

impl ResourceVector {
    pub const ZERO: ResourceVector = ResourceVector {
        ore: 0.0,
        energy: 0.0,
        biomass: 0.0,
        data: 0.0,
    };

    pub fn new(ore: f64, energy: f64, biomass: f64, data: f64) -> Self {
        Self { ore, energy, biomass, data }
    }

    pub fn get(&self, axis: ResourceAxis) -> f64 {
        match axis {
            ResourceAxis::Ore => self.ore,
            ResourceAxis::Energy => self.energy,
            ResourceAxis::Biomass => self.biomass,
            ResourceAxis::Data => self.data,
        }
    }

    pub fn set(&mut self, axis: ResourceAxis, value: f64) {
        match axis {
            ResourceAxis::Ore => self.ore = value,
            ResourceAxis::Energy => self.energy = value,
            ResourceAxis::Biomass => self.biomass = value,
            ResourceAxis::Data => self.data = value,
        }
    }

    /// Builder-style single-axis setter
    pub fn with(mut self, axis: ResourceAxis, value: f64) -> Self {
        self.set(axis, value);
        self
    }

    pub fn total(&self) -> f64 {
        self.ore + self.energy + self.biomass + self.data
    }

    pub fn is_zero(&self) -> bool {
        ResourceAxis::ALL.iter().all(|a| self.get(*a) == 0.0)
    }

    /// True when every axis of `self` is covered by `available`
    pub fn fits_within(&self, available: &ResourceVector) -> bool {
        ResourceAxis::ALL
            .iter()
            .all(|a| self.get(*a) <= available.get(*a))
    }

    /// First axis on which `self` exceeds `available`
    pub fn first_shortfall(&self, available: &ResourceVector) -> Option<ResourceAxis> {
        ResourceAxis::ALL
            .into_iter()
            .find(|a| self.get(*a) > available.get(*a))
    }

    /// Euclidean length across all four axes
    pub fn magnitude(&self) -> f64 {
        (self.ore * self.ore
            + self.energy * self.energy
            + self.biomass * self.biomass
            + self.data * self.data)
            .sqrt()
    }

    /// Clamp every axis into `[0, cap]`
    pub fn clamped(&self) -> Self {
        Self {
            ore: ResourceAxis::Ore.clamp(self.ore),
            energy: ResourceAxis::Energy.clamp(self.energy),
            biomass: ResourceAxis::Biomass.clamp(self.biomass),
            data: ResourceAxis::Data.clamp(self.data),
        }
    }
}

impl std::ops::Add for ResourceVector {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            ore: self.ore + rhs.ore,
            energy: self.energy + rhs.energy,
            biomass: self.biomass + rhs.biomass,
            data: self.data + rhs.data,
        }
    }
}

impl std::ops::AddAssign for ResourceVector {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl std::ops::Sub for ResourceVector {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self {
            ore: self.ore - rhs.ore,
            energy: self.energy - rhs.energy,
            biomass: self.biomass - rhs.biomass,
            data: self.data - rhs.data,
        }
    }
}

impl std::ops::Mul<f64> for ResourceVector {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self {
            ore: self.ore * rhs,
            energy: self.energy * rhs,
            biomass: self.biomass * rhs,
            data: self.data * rhs,
        }
    }
}
