//! Fixed-step time integrator for the N-body system
//!
//! Provides the velocity-Verlet substep used by the engine, driven by
//! `AccelSet` and `Parameters`. The scheme is symplectic: orbits stay
//! visually stable over thousands of steps instead of decaying or
//! escaping the way an explicit-Euler update would.

use super::forces::AccelSet;
use super::params::Parameters;
use super::states::{NVec2, System};

/// Advance every body by one sub-interval `h` using velocity-Verlet.
///
/// Kick-drift-kick, in exactly this order:
/// 1. v += (1/2 * h) * a     (stored acceleration; zero on a fresh body)
/// 2. x += h * v
/// 3. recompute accelerations from the new positions, store into `b.a`
/// 4. v += (1/2 * h) * a_new
///
/// Reordering any of these breaks the energy-conservation property.
/// The substep does not touch `sys.t`; the engine advances the clock
/// once per frame.
pub fn verlet_substep(sys: &mut System, forces: &AccelSet, p: &Parameters, h: f64) {
    let n = sys.bodies.len();
    if n == 0 {
        return;
    }

    let half_h = 0.5 * h;

    // Half-kick from the acceleration computed at the end of the
    // previous substep: v_n+1/2 = v_n + (1/2 * h) * a_n
    for b in sys.bodies.iter_mut() {
        b.v += half_h * b.a;
    }

    // Drift: x_n+1 = x_n + h * v_n+1/2
    for b in sys.bodies.iter_mut() {
        b.x += h * b.v;
    }

    // a_n+1 from the new positions x_n+1
    let mut a_new = vec![NVec2::zeros(); n];
    forces.accumulate_accels(sys.t, &*sys, p, &mut a_new);

    // Second half-kick with the new acceleration, which is also kept
    // on the body so it is never read stale:
    // v_n+1 = v_n+1/2 + (1/2 * h) * a_n+1
    for (b, a) in sys.bodies.iter_mut().zip(a_new.iter()) {
        b.a = *a;
        b.v += half_h * *a;
    }
}
