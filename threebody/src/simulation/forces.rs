//! Force model for the three-body engine
//!
//! Defines the [`ForceModel`] trait and direct softened Newtonian gravity.
//! Accelerations for a step are always computed from one snapshot of the
//! system, before any body is advanced.

use crate::simulation::states::{NVec3, System};

/// Source of per-body accelerations for a [`System`]
pub trait ForceModel {
    /// Write the net acceleration of every body into `out[i]`
    /// - `out` is zeroed first, so stale values never leak between steps
    fn accelerations(&self, sys: &System, out: &mut [NVec3]);
}

/// 3D Newtonian gravity with softening (direct pairwise sum)
#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq)]
pub struct NewtonianGravity {
    pub G: f64,         // gravitational constant
    pub softening: f64, // softening length, squared before use
}

impl NewtonianGravity {
    /// Softened potential energy, `-sum G m_i m_j / sqrt(|r|^2 + softening^2)`
    pub fn potential_energy(&self, sys: &System) -> f64 {
        let eps2 = self.softening * self.softening;
        let n = sys.bodies.len();
        let mut u = 0.0;

        for i in 0..n {
            let bi = &sys.bodies[i];
            for bj in &sys.bodies[(i + 1)..] {
                let r = bj.x - bi.x;
                u -= self.G * bi.m * bj.m / (r.norm_squared() + eps2).sqrt();
            }
        }
        u
    }
}

impl ForceModel for NewtonianGravity {
    fn accelerations(&self, sys: &System, out: &mut [NVec3]) {
        // Zero buffer, reused as a force accumulator
        for a in out.iter_mut() {
            *a = NVec3::zeros();
        }

        let n = sys.bodies.len();
        if n == 0 { // No bodies, return
            return;
        }

        let eps2 = self.softening * self.softening;

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            // bi: body i (left side of the pair)
            let bi = &sys.bodies[i];

            for j in (i + 1)..n {
                let bj = &sys.bodies[j];

                // r is the separation vector from i to j.
                // i is pulled along +r, j along -r.
                let r = bj.x - bi.x;

                // Softened squared distance: d2 = |r|^2 + softening^2
                let d2 = r.norm_squared() + eps2;
                let d = d2.sqrt();

                // |F| = G m_i m_j / d2, directed along the unit vector r / d.
                // With softening = 0 and coincident bodies this is inf * (0/0),
                // i.e. NaN, which is left for the caller to detect.
                let f = (self.G * bi.m * bj.m / d2) * (r / d);

                // Newton's third law: one evaluation per pair, opposite signs
                out[i] += f;
                out[j] -= f;
            }
        }

        // Forces -> accelerations
        for (a, b) in out.iter_mut().zip(sys.bodies.iter()) {
            *a /= b.m;
        }
    }
}
