//! Property-based tests for the integrator
//!
//! Uses proptest to generate random (valid) three-body configurations and
//! checks invariants that must hold for every one of them.

use proptest::prelude::*;
use threebody::{Body, NVec3, Parameters, Simulation};

fn vec3(range: f64) -> impl Strategy<Value = NVec3> {
    (-range..range, -range..range, -range..range).prop_map(|(x, y, z)| NVec3::new(x, y, z))
}

fn body_strategy() -> impl Strategy<Value = Body> {
    (0.5f64..5.0, vec3(10.0), vec3(1.0))
        .prop_map(|(m, x, v)| Body::new(m, x, v).expect("generated body is valid"))
}

fn build(bodies: Vec<Body>) -> Simulation {
    let parameters = Parameters {
        dt: 1.0e-3,
        G: 1.0,
        softening: 0.1,
        total_steps: 200,
    };
    Simulation::new(bodies, parameters).expect("generated configuration is valid")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: pairwise forces cancel, so total momentum never moves
    #[test]
    fn momentum_is_conserved(bodies in prop::collection::vec(body_strategy(), 3)) {
        let mut sim = build(bodies);
        let p0 = sim.system().momentum();

        sim.run_to_completion();

        let drift = (sim.system().momentum() - p0).norm();
        prop_assert!(drift < 1e-6, "momentum drift {}", drift);
    }

    /// Property: with softening every step stays finite
    #[test]
    fn softened_runs_stay_finite(bodies in prop::collection::vec(body_strategy(), 3)) {
        let mut sim = build(bodies);
        sim.run_to_completion();

        prop_assert!(sim.degeneracy().is_none());
        prop_assert_eq!(sim.trajectory().len(), 200);
    }

    /// Property: rerunning the same configuration gives the same trajectory
    #[test]
    fn runs_are_reproducible(bodies in prop::collection::vec(body_strategy(), 3)) {
        let mut a = build(bodies.clone());
        let mut b = build(bodies);

        a.run(50);
        b.run(50);

        prop_assert_eq!(a.trajectory(), b.trajectory());
    }
}
