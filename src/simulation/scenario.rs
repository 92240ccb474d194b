//! Build fully-initialized simulations from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runnable
//! [`Simulation`] with bodies at t = 0, plus the built-in demo scene
//! used as a deterministic, visually stable starting configuration.

use log::info;

use crate::configuration::config::ScenarioConfig;
use crate::simulation::engine::Simulation;
use crate::simulation::params::Parameters;
use crate::simulation::states::{BodyKind, NVec2};

/// Demo scene satellites: (kind, orbit radius, angle around the star)
const DEMO_ORBITS: [(BodyKind, f64, f64); 4] = [
    (BodyKind::Planet, 140.0, 0.0),
    (BodyKind::Planet, 220.0, 2.1),
    (BodyKind::Planet, 300.0, 4.2),
    (BodyKind::Moon, 380.0, 5.5),
];

impl Simulation {
    /// Map a `ScenarioConfig` into a runnable simulation.
    /// Bodies take preset mass/radius/color from their configured kind;
    /// omitted velocities default to zero
    pub fn from_config(cfg: &ScenarioConfig) -> Self {
        let p_cfg = &cfg.parameters;
        let parameters = Parameters {
            G: p_cfg.G,
            softening: p_cfg.softening,
            substeps: p_cfg.substeps,
            merge_ratio: p_cfg.merge_ratio,
            star_mass_threshold: p_cfg.star_mass_threshold,
            max_trail: p_cfg.max_trail,
        };

        let mut sim = Simulation::new(parameters);
        for bc in &cfg.bodies {
            sim.add_body(
                bc.kind,
                NVec2::new(bc.x[0], bc.x[1]),
                NVec2::new(bc.v[0], bc.v[1]),
            );
        }

        info!(
            "scenario: {} bodies, G = {}, softening = {}",
            sim.system.bodies.len(),
            sim.parameters.G,
            sim.parameters.softening,
        );

        sim
    }

    /// Clear and load the built-in demo scene: one star at the origin
    /// and four satellites on analytically circular orbits, each given
    /// tangential velocity from [`Simulation::orbital_speed`]
    pub fn load_demo_scene(&mut self) {
        self.clear();
        self.add_body(BodyKind::Star, NVec2::zeros(), NVec2::zeros());

        let central = BodyKind::Star.preset().mass;
        for (kind, r, angle) in DEMO_ORBITS {
            let speed = self.orbital_speed(central, r);
            let radial = NVec2::new(angle.cos(), angle.sin());
            let tangent = NVec2::new(-angle.sin(), angle.cos());
            self.add_body(kind, r * radial, speed * tangent);
        }
    }
}
