//! Quaternion algebra
//!
//! Quaternions here are not assumed to be unit length: the decision mapping
//! scales `w` by the stability delta, and the "data gain" of a rotation is
//! its distance from unit magnitude. Only [`Quaternion::slerp`] normalizes.

use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

/// Above this dot product two quaternions are treated as parallel
pub const SLERP_LINEAR_THRESHOLD: f64 = 0.9995;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quaternion {
    pub const IDENTITY: Quaternion = Quaternion {
        w: 1.0,
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    /// Unit rotation of `angle` radians about `axis`; identity for a zero axis
    pub fn from_axis_angle(axis: DVec3, angle: f64) -> Self {
        let axis = axis.normalize_or_zero();
        if axis == DVec3::ZERO {
            return Self::IDENTITY;
        }
        let (s, c) = (angle / 2.0).sin_cos();
        Self::new(c, axis.x * s, axis.y * s, axis.z * s)
    }

    /// Spatial (x, y, z) part
    pub fn vector(&self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    pub fn magnitude(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Unit quaternion in the same direction; identity for a zero quaternion
    pub fn normalize(&self) -> Self {
        let m = self.magnitude();
        if m <= f64::EPSILON || !m.is_finite() {
            return Self::IDENTITY;
        }
        self.scale(1.0 / m)
    }

    pub fn conjugate(&self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    pub fn dot(&self, other: &Quaternion) -> f64 {
        self.w * other.w + self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn scale(&self, s: f64) -> Self {
        Self::new(self.w * s, self.x * s, self.y * s, self.z * s)
    }

    /// Hamilton product `self * other` (apply `self`, then `other`)
    pub fn compose(&self, other: &Quaternion) -> Self {
        let (a, b) = (self, other);
        Self::new(
            a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
            a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
        )
    }

    /// Spherical interpolation along the shortest arc
    ///
    /// `other` is negated when the dot product is negative, so at `t = 1` the
    /// result may be `-other` (the same rotation).
    pub fn slerp(&self, other: &Quaternion, t: f64) -> Self {
        let mut end = *other;
        let mut dot = self.dot(&end);

        if dot < 0.0 {
            end = end.scale(-1.0);
            dot = -dot;
        }

        if dot > SLERP_LINEAR_THRESHOLD {
            let lerped = *self + (end - *self).scale(t);
            return lerped.normalize();
        }

        let theta_0 = dot.clamp(-1.0, 1.0).acos();
        let theta = theta_0 * t;
        let sin_theta_0 = theta_0.sin();
        let s0 = theta.cos() - dot * theta.sin() / sin_theta_0;
        let s1 = theta.sin() / sin_theta_0;

        self.scale(s0) + end.scale(s1)
    }

    /// Angle (radians) of the rotation this quaternion represents
    pub fn angle(&self) -> f64 {
        let unit = self.normalize();
        2.0 * unit.w.clamp(-1.0, 1.0).acos()
    }

    /// Same rotation, allowing for the `q` / `-q` double cover
    pub fn approx_same_rotation(&self, other: &Quaternion, epsilon: f64) -> bool {
        self.approx_eq(other, epsilon) || self.approx_eq(&other.scale(-1.0), epsilon)
    }

    pub fn approx_eq(&self, other: &Quaternion, epsilon: f64) -> bool {
        (self.w - other.w).abs() <= epsilon
            && (self.x - other.x).abs() <= epsilon
            && (self.y - other.y).abs() <= epsilon
            && (self.z - other.z).abs() <= epsilon
    }
}

impl std::ops::Add for Quaternion {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.w + rhs.w, self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::Sub for Quaternion {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.w - rhs.w, self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl std::ops::Mul for Quaternion {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.compose(&rhs)
    }
}

impl From<Quaternion> for DQuat {
    fn from(q: Quaternion) -> Self {
        DQuat::from_xyzw(q.x, q.y, q.z, q.w)
    }
}

impl From<DQuat> for Quaternion {
    fn from(q: DQuat) -> Self {
        Quaternion::new(q.w, q.x, q.y, q.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPS: f64 = 1e-9;

    #[test]
    fn test_identity_compose() {
        let q = Quaternion::new(0.5, 0.5, 0.5, 0.5);
        assert!(q.compose(&Quaternion::IDENTITY).approx_eq(&q, EPS));
        assert!(Quaternion::IDENTITY.compose(&q).approx_eq(&q, EPS));
    }

    #[test]
    fn test_compose_with_conjugate_is_squared_magnitude() {
        let q = Quaternion::new(1.2, -0.3, 0.7, 2.0);
        let product = q.compose(&q.conjugate());
        assert!((product.w - q.magnitude().powi(2)).abs() < EPS);
        assert!(product.vector().length() < EPS);
    }

    #[test]
    fn test_compose_matches_glam() {
        let a = Quaternion::from_axis_angle(DVec3::X, 0.4);
        let b = Quaternion::from_axis_angle(DVec3::new(0.0, 1.0, 1.0), 1.1);
        let ours = a.compose(&b);
        let theirs: Quaternion = (DQuat::from(a) * DQuat::from(b)).into();
        assert!(ours.approx_eq(&theirs, 1e-12));
    }

    #[test]
    fn test_two_quarter_turns_make_half_turn() {
        let quarter = Quaternion::from_axis_angle(DVec3::Z, FRAC_PI_2);
        let half = quarter.compose(&quarter);
        assert!((half.angle() - PI).abs() < 1e-9);
    }

    #[test]
    fn test_normalize_zero_is_identity() {
        let zero = Quaternion::new(0.0, 0.0, 0.0, 0.0);
        assert_eq!(zero.normalize(), Quaternion::IDENTITY);
    }

    #[test]
    fn test_slerp_endpoints() {
        let a = Quaternion::from_axis_angle(DVec3::X, 0.3);
        let b = Quaternion::from_axis_angle(DVec3::Y, 1.2);
        assert!(a.slerp(&b, 0.0).approx_eq(&a, EPS));
        assert!(a.slerp(&b, 1.0).approx_eq(&b, EPS));
    }

    #[test]
    fn test_slerp_midpoint_halves_angle() {
        let a = Quaternion::IDENTITY;
        let b = Quaternion::from_axis_angle(DVec3::Z, 1.0);
        let mid = a.slerp(&b, 0.5);
        assert!((mid.angle() - 0.5).abs() < 1e-9);
        assert!((mid.magnitude() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_slerp_takes_short_path() {
        let a = Quaternion::IDENTITY;
        let b = Quaternion::from_axis_angle(DVec3::Z, 0.5).scale(-1.0);
        let end = a.slerp(&b, 1.0);
        assert!(end.approx_same_rotation(&b, EPS));
        assert!(end.w > 0.0);
    }

    #[test]
    fn test_slerp_nearly_parallel_uses_lerp() {
        let a = Quaternion::from_axis_angle(DVec3::X, 0.001);
        let b = Quaternion::from_axis_angle(DVec3::X, 0.002);
        let mid = a.slerp(&b, 0.5);
        assert!((mid.magnitude() - 1.0).abs() < EPS);
        assert!((mid.angle() - 0.0015).abs() < 1e-6);
    }
}
