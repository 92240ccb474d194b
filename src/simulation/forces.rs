//! Force / acceleration contributors for the n-body engine
//!
//! Defines the acceleration trait and the direct Newtonian gravity
//! term. Contributors read the live `Parameters` on every call, so
//! runtime changes to `G` or `softening` take effect on the next pass
//! without rebuilding the force set.

use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, System};

/// Collection of acceleration terms (gravity, drag, etc.)
/// Each term implements [`Acceleration`] and their contributions are
/// summed into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations at time `t` for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, t: f64, sys: &System, p: &Parameters, out: &mut [NVec2]) {
        // Zero buffer before accumulation; values from the previous
        // pass must never leak into this one
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        for term in &self.terms {
            term.acceleration(t, sys, p, out);
        }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for acceleration sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, t: f64, sys: &System, p: &Parameters, out: &mut [NVec2]);
}

/// Direct Newtonian gravity with softening
/// `p.softening` squared is added to every squared separation, capping
/// the force as distance goes to zero. O(n^2) over unordered pairs;
/// the engine targets tens of bodies, so no spatial structure
pub struct NewtonianGravity;

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, _t: f64, sys: &System, p: &Parameters, out: &mut [NVec2]) {
        let n = sys.bodies.len();
        if n == 0 {
            return;
        }

        let soft2 = p.softening * p.softening;

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            let bi = &sys.bodies[i];
            let xi = bi.x;
            let mi = bi.m;

            for j in (i + 1)..n {
                let bj = &sys.bodies[j];

                // Displacement from i to j: i is pulled along +r,
                // j along -r
                let r = bj.x - xi;

                // Softened squared separation: d2 = |r|^2 + softening^2
                let d2 = r.norm_squared() + soft2;

                // a = G * m * r / |r_soft|^3
                let inv_r = d2.sqrt().recip();
                let inv_r3 = inv_r * inv_r * inv_r;
                let coef = p.G * inv_r3;

                // Equal and opposite (Newton's third law)
                out[i] += coef * bj.m * r;
                out[j] -= coef * mi * r;
            }
        }
    }
}
