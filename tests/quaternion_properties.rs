//! Property tests for the quaternion algebra and the rotation execution path

use arc_quaternion::quaternion::{apply_quaternion_decision, Quaternion};
use arc_quaternion::state::resources::ResourceState;
use arc_quaternion::core::types::{ResourceAxis, ResourceVector};
use proptest::prelude::*;

const EPS: f64 = 1e-9;

fn any_quaternion() -> impl Strategy<Value = Quaternion> {
    (-10.0..10.0f64, -10.0..10.0f64, -10.0..10.0f64, -10.0..10.0f64)
        .prop_map(|(w, x, y, z)| Quaternion::new(w, x, y, z))
}

fn unit_quaternion() -> impl Strategy<Value = Quaternion> {
    any_quaternion()
        .prop_filter("needs a direction", |q| q.magnitude() > 0.1)
        .prop_map(|q| q.normalize())
}

proptest! {
    #[test]
    fn prop_slerp_of_identical_endpoints_is_constant(q in unit_quaternion(), t in 0.0..=1.0f64) {
        prop_assert!(q.slerp(&q, t).approx_eq(&q, EPS));
    }

    #[test]
    fn prop_slerp_starts_at_first_endpoint(a in unit_quaternion(), b in unit_quaternion()) {
        prop_assert!(a.slerp(&b, 0.0).approx_eq(&a, EPS));
    }

    #[test]
    fn prop_slerp_ends_at_second_rotation(a in unit_quaternion(), b in unit_quaternion()) {
        let end = a.slerp(&b, 1.0);
        prop_assert!(end.approx_same_rotation(&b, EPS));
        if a.dot(&b) >= 0.0 {
            prop_assert!(end.approx_eq(&b, EPS));
        }
    }

    #[test]
    fn prop_slerp_stays_on_unit_sphere(a in unit_quaternion(), b in unit_quaternion(), t in 0.0..=1.0f64) {
        prop_assert!((a.slerp(&b, t).magnitude() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn prop_compose_with_conjugate_is_scalar(q in any_quaternion()) {
        let product = q.compose(&q.conjugate());
        let squared = q.magnitude().powi(2);
        let tolerance = 1e-12 * squared.max(1.0);
        prop_assert!((product.w - squared).abs() < tolerance);
        prop_assert!(product.x.abs() < tolerance);
        prop_assert!(product.y.abs() < tolerance);
        prop_assert!(product.z.abs() < tolerance);
    }

    #[test]
    fn prop_compose_is_associative(a in unit_quaternion(), b in unit_quaternion(), c in unit_quaternion()) {
        let left = a.compose(&b).compose(&c);
        let right = a.compose(&b.compose(&c));
        prop_assert!(left.approx_eq(&right, 1e-12));
    }

    #[test]
    fn prop_rotation_keeps_state_in_bounds(
        q in any_quaternion(),
        ore in 0.0..10_000.0f64,
        energy in 0.0..5_000.0f64,
        biomass in 0.0..3_000.0f64,
        data in 0.0..2_000.0f64,
    ) {
        let state = ResourceState::from_resources(ResourceVector::new(ore, energy, biomass, data));
        let next = apply_quaternion_decision(&q, &state);
        prop_assert!((0.0..=2.0).contains(&next.stability));
        prop_assert!(next.entropy >= 0.0);
        for axis in ResourceAxis::ALL {
            let value = next.get(axis);
            prop_assert!(value >= 0.0 && value <= axis.cap());
        }
        prop_assert!(next.entropy >= state.entropy);
    }
}
