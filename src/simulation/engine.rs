//! The simulation engine
//!
//! `Simulation` owns the body set, the clock, and the force set, and
//! exposes the command surface external layers drive: add bodies,
//! clear, advance one frame, query circular-orbit speed. Renderers and
//! UI hold `&Simulation` and read its public state; nothing here draws
//! or schedules anything.

use super::collisions::resolve_collisions;
use super::forces::{AccelSet, NewtonianGravity};
use super::integrator::verlet_substep;
use super::params::Parameters;
use super::states::{Body, BodyKind, NVec2, System};

/// Largest frame delta one step will integrate. A collapsed frame rate
/// (backgrounded tab, debugger pause) otherwise hands the engine a huge
/// `dt`, letting bodies tunnel through each other or gain unbounded
/// energy in a single step
pub const MAX_FRAME_DT: f64 = 1.0 / 30.0;

/// A running simulation: bodies, clock, parameters, and forces
pub struct Simulation {
    pub system: System, // bodies and elapsed time
    pub parameters: Parameters, // runtime tunables
    pub forces: AccelSet, // active acceleration terms
    pub paused: bool, // when set, step() is a full no-op
}

impl Simulation {
    /// Empty, unpaused simulation under Newtonian gravity
    pub fn new(parameters: Parameters) -> Self {
        Self {
            system: System::default(),
            parameters,
            forces: AccelSet::new().with(NewtonianGravity),
            paused: false,
        }
    }

    /// Create and append a live body of `kind` at `x` with velocity `v`.
    /// Mass, radius, and color come from the kind preset; acceleration
    /// starts at zero. Returns the created body
    pub fn add_body(&mut self, kind: BodyKind, x: NVec2, v: NVec2) -> &Body {
        self.system.bodies.push(Body::new(kind, x, v));
        &self.system.bodies[self.system.bodies.len() - 1]
    }

    /// Remove all bodies and reset the clock to zero. Tunables and the
    /// paused flag keep their values
    pub fn clear(&mut self) {
        self.system.bodies.clear();
        self.system.t = 0.0;
    }

    /// Scalar speed of a circular orbit at `distance` from a point mass
    /// `central_mass` under the current gravitational constant.
    /// The caller guarantees `distance > 0`
    pub fn orbital_speed(&self, central_mass: f64, distance: f64) -> f64 {
        (self.parameters.G * central_mass / distance).sqrt()
    }

    /// Advance the simulation by one visual frame.
    ///
    /// The frame delta is clamped to [`MAX_FRAME_DT`], scaled, and split
    /// into `substeps` velocity-Verlet sub-intervals. After integration
    /// each body records its position in the trail and ages by one
    /// frame, then a single collision pass merges overlapping bodies,
    /// then the clock advances by the clamped, scaled delta
    pub fn step(&mut self, frame_delta: f64, time_scale: f64) {
        if self.paused {
            return;
        }

        let dt = frame_delta.min(MAX_FRAME_DT) * time_scale;
        let substeps = self.parameters.substeps.max(1);
        let h = dt / f64::from(substeps);

        for _ in 0..substeps {
            verlet_substep(&mut self.system, &self.forces, &self.parameters, h);
        }

        // Trails and ages advance once per visual frame, not per substep
        let max_trail = self.parameters.max_trail;
        for b in self.system.bodies.iter_mut() {
            b.push_trail(max_trail);
            b.age += 1;
        }

        resolve_collisions(&mut self.system, &self.parameters);

        self.system.t += dt;
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(Parameters::default())
    }
}
