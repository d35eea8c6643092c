//! Property-based tests for ephemeris computations using proptest.
//!
//! These tests verify that the analytic pieces keep their invariants across
//! a wide range of inputs.

use proptest::prelude::*;

use super::angle::normalize_nonnegative;
use super::elements::{ElementSet, OrbitalElements};
use super::kepler::KeplerSolver;
use super::projection::{project, radius, true_anomaly};
use crate::test_utils::assertions::kepler_residual;

/// Residual contribution of rounding E to 6 decimal degrees.
const ROUNDING_SLACK: f64 = 2e-8;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The solver meets the residual tolerance for every in-scope eccentricity.
    #[test]
    fn prop_kepler_solver_convergence(
        mean_anomaly in 0.0f64..360.0,
        eccentricity in 0.0f64..=0.9,
    ) {
        let solution = KeplerSolver::default().solve(eccentricity, mean_anomaly).unwrap();
        prop_assert!(solution.converged, "e={}, M={} did not converge", eccentricity, mean_anomaly);
        prop_assert!(solution.residual <= 1e-6);

        let error = kepler_residual(eccentricity, solution.eccentric_anomaly, mean_anomaly);
        prop_assert!(
            error < 1e-6 + ROUNDING_SLACK,
            "Kepler residual {} too large: M={}, e={}, E={}",
            error, mean_anomaly, eccentricity, solution.eccentric_anomaly
        );
    }

    /// Circular orbits give E = M.
    #[test]
    fn prop_circular_orbit_identity(mean_anomaly in 0.0f64..360.0) {
        let solution = KeplerSolver::default().solve(0.0, mean_anomaly).unwrap();
        prop_assert!((solution.eccentric_anomaly - mean_anomaly).abs() < 1e-6);
    }

    /// Wrapping is periodic in whole turns and lands in [0, 360).
    #[test]
    fn prop_normalize_periodic(x in -1.0e4f64..1.0e4, k in -1000i32..1000) {
        let a = normalize_nonnegative(x);
        let b = normalize_nonnegative(x + 360.0 * k as f64);
        prop_assert!((0.0..360.0).contains(&a));
        prop_assert!((0.0..360.0).contains(&b));
        let diff = (a - b).abs();
        // Equal up to float error, allowing for the 0/360 seam
        prop_assert!(diff < 1e-8 || (360.0 - diff) < 1e-8, "{} vs {}", a, b);
    }

    /// True anomaly always lies in [0, 360) and runs ahead of E on the first half orbit.
    #[test]
    fn prop_true_anomaly_leads_eccentric_anomaly(
        eccentricity in 0.0f64..0.9,
        e_deg in 0.0f64..180.0,
    ) {
        let nu = true_anomaly(eccentricity, e_deg);
        prop_assert!((0.0..360.0).contains(&nu));
        prop_assert!(nu + 1e-9 >= e_deg, "ν={} behind E={}", nu, e_deg);
    }

    /// Projected distance equals the radius formula whatever the orientation.
    #[test]
    fn prop_projection_preserves_radius(
        semi_major_axis in 0.3f64..40.0,
        eccentricity in 0.0f64..0.9,
        inclination in -180.0f64..180.0,
        node in -360.0f64..360.0,
        perihelion in 0.0f64..360.0,
        e_deg in 0.0f64..360.0,
    ) {
        let body = OrbitalElements::new(
            "Probe",
            0,
            ElementSet::new(semi_major_axis, eccentricity, inclination, 0.0, perihelion, node),
            ElementSet::default(),
        );
        let derived = body.evolve(0.0);
        let pos = project(&derived, e_deg, 2.0);
        let expected = radius(semi_major_axis, eccentricity, e_deg, 2.0);
        prop_assert!((pos.length() - expected).abs() < 1e-9 * expected.max(1.0));
    }

    /// Derived angles obey the wrapping rules at any time.
    #[test]
    fn prop_evolved_angles_wrapped(centuries in -30.0f64..30.0) {
        for body in super::data::standard_planets() {
            let derived = body.evolve(centuries);
            prop_assert!((0.0..360.0).contains(&derived.perihelion_longitude));
            prop_assert!((0.0..360.0).contains(&derived.mean_longitude));
            prop_assert!((0.0..360.0).contains(&derived.mean_anomaly));
            prop_assert!(derived.inclination.abs() < 360.0);
            prop_assert!(derived.ascending_node.abs() < 360.0);
        }
    }
}

#[cfg(test)]
mod deterministic_tests {
    use super::*;

    #[test]
    fn test_kepler_solver_at_boundary_mean_anomaly() {
        let solver = KeplerSolver::default();
        for m in [0.0, 180.0, 359.999, 360.0] {
            let solution = solver.solve(0.5, m).unwrap();
            assert!(solution.eccentric_anomaly.is_finite(), "Solver failed at M = {}", m);
            assert!(solution.converged);
        }
    }
}
