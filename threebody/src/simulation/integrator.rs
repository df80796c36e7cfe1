//! Fixed-step time integrator for the three-body system
//!
//! Plain explicit (forward) Euler. Positions advance with the velocity from
//! *before* the kick, unlike semi-implicit Euler, so energy drifts over long
//! runs. That drift is part of the simulation's character and is kept.

use super::states::{NVec3, System};

/// Advance every body by one step of forward Euler
///
/// `accels[i]` must hold the acceleration of body `i` computed from the
/// current (pre-step) positions of all bodies:
/// - `x_n+1 = x_n + dt * v_n`
/// - `v_n+1 = v_n + dt * a_n`
///
/// Each body reads only its own state and its own acceleration, so the
/// update order over bodies does not matter. Also advances `sys.t` by `dt`.
pub fn euler_step(sys: &mut System, accels: &[NVec3], dt: f64) {
    debug_assert_eq!(sys.bodies.len(), accels.len());

    for (b, a) in sys.bodies.iter_mut().zip(accels.iter()) {
        let v_old = b.v;
        b.v += dt * *a;
        b.x += dt * v_old;
    }

    sys.t += dt;
}
