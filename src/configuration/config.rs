//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – physical constants and engine tunables
//! - [`DriverConfig`]     – headless run-loop settings (CLI driver only)
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Every section and field is optional; omitted values take the
//! documented defaults below.
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   G: 800.0                  # gravitational constant
//!   softening: 8.0            # softening length
//!   substeps: 4               # integration subdivisions per frame
//!   merge_ratio: 0.6          # merge when distance < ratio * (ra + rb)
//!   star_mass_threshold: 60.0 # promote to star above this mass
//!   max_trail: 120            # trail length cap per body
//!
//! driver:
//!   t_end: 30.0               # stop once simulated time reaches this
//!   frame_dt: 0.0166667       # seconds represented by one frame
//!   time_scale: 1.0           # multiplier applied to each frame delta
//!
//! bodies:
//!   - kind: star              # star | planet | moon; anything else is
//!     x: [ 0.0, 0.0 ]         # rejected at parse time
//!   - kind: planet
//!     x: [ 200.0, 0.0 ]
//!     v: [ 0.0, 109.54 ]      # omitted velocity defaults to zero
//! ```
//!
//! The engine maps this configuration into its runtime structs in
//! `simulation::scenario`; body mass and radius always come from the
//! kind preset.

use serde::Deserialize;

use crate::simulation::params::Parameters;
use crate::simulation::states::BodyKind;

/// Engine tunables for a scenario; mirrors [`Parameters`] field by
/// field and defaults to its values
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub G: f64,      // gravitational constant
    pub softening: f64, // softening length
    pub substeps: u32,  // integration subdivisions per frame
    pub merge_ratio: f64, // merge distance as a fraction of summed radii
    pub star_mass_threshold: f64, // star promotion mass
    pub max_trail: usize, // trail length cap per body
}

impl Default for ParametersConfig {
    fn default() -> Self {
        let p = Parameters::default();
        Self {
            G: p.G,
            softening: p.softening,
            substeps: p.substeps,
            merge_ratio: p.merge_ratio,
            star_mass_threshold: p.star_mass_threshold,
            max_trail: p.max_trail,
        }
    }
}

/// Headless run-loop settings, consumed only by the CLI driver.
/// Not engine state: the engine has no end time or frame source
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct DriverConfig {
    pub t_end: f64,      // stop once simulated time reaches this
    pub frame_dt: f64,   // seconds represented by one frame
    pub time_scale: f64, // multiplier applied to each frame delta
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            t_end: 30.0,
            frame_dt: 1.0 / 60.0,
            time_scale: 1.0,
        }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub kind: BodyKind, // preset determining mass/radius/color
    pub x: [f64; 2],    // initial position in simulation units
    #[serde(default)]
    pub v: [f64; 2], // initial velocity; zero when omitted
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // engine tunables
    pub driver: DriverConfig,         // run-loop settings for the CLI
    pub bodies: Vec<BodyConfig>,      // initial state of the system
}
