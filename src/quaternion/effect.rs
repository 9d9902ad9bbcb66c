//! Decisions as rotations of the resource state
//!
//! Ore, energy and biomass map onto the three spatial components. Data has no
//! axis of its own: it emerges from how far the rotation strays from unit
//! magnitude.

use crate::decision::Decision;
use crate::quaternion::math::Quaternion;
use crate::state::resources::{clamp_entropy, clamp_stability, ResourceState};
use std::f64::consts::FRAC_PI_4;

/// Resource delta treated as a full unit on a spatial axis
pub const DEFAULT_EFFECT_SCALE: f64 = 1000.0;
/// Fraction of a rotation component applied multiplicatively to a field
pub const ROTATION_INFLUENCE: f64 = 0.1;
/// Data gained per unit of distance from unit magnitude
pub const DATA_GAIN_FACTOR: f64 = 10.0;
/// Entropy added per unit of spatial rotation
pub const ENTROPY_PER_ROTATION: f64 = 100.0;

/// Map a decision's immediate effect to a rotation
///
/// The angle grows with the Euclidean size of all four resource deltas and
/// saturates at pi/4 once that size reaches `scale`.
pub fn decision_to_quaternion(decision: &Decision, scale: f64) -> Quaternion {
    let effect = &decision.immediate;
    let scale = if scale > 0.0 { scale } else { DEFAULT_EFFECT_SCALE };

    let normalized = |delta: f64| (delta / scale).clamp(-1.0, 1.0);

    let magnitude = effect.resources.magnitude();
    let angle = (magnitude / scale).min(1.0) * FRAC_PI_4;
    let (sin_half, cos_half) = (angle / 2.0).sin_cos();

    Quaternion::new(
        cos_half * (1.0 + effect.stability_change),
        sin_half * normalized(effect.resources.ore),
        sin_half * normalized(effect.resources.energy),
        sin_half * normalized(effect.resources.biomass),
    )
}

/// Resource-state change produced by applying a rotation
///
/// Pure: returns the new state, all fields clamped to their bounds.
pub fn apply_quaternion_decision(q: &Quaternion, state: &ResourceState) -> ResourceState {
    let mut next = state.clone();

    next.stability = state.stability * (1.0 + q.w * ROTATION_INFLUENCE);
    next.ore = state.ore * (1.0 + q.x * ROTATION_INFLUENCE);
    next.energy = state.energy * (1.0 + q.y * ROTATION_INFLUENCE);
    next.biomass = state.biomass * (1.0 + q.z * ROTATION_INFLUENCE);
    next.data = state.data + data_gain(q);
    next.entropy = state.entropy + rotation_entropy(q);

    next.set_resources(next.resources().clamped());
    next.stability = clamp_stability(next.stability);
    next.entropy = clamp_entropy(next.entropy);
    next
}

/// Data emerging from rotation complexity: `10 * |magnitude - 1|`
pub fn data_gain(q: &Quaternion) -> f64 {
    DATA_GAIN_FACTOR * (q.magnitude() - 1.0).abs()
}

/// Entropy added by a rotation: `100 * |(x, y, z)|`
pub fn rotation_entropy(q: &Quaternion) -> f64 {
    ENTROPY_PER_ROTATION * q.vector().length()
}
