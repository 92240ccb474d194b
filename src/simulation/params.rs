//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds the runtime tunables:
//! - gravitational constant and softening length (`G`, `softening`),
//! - integration substeps per frame,
//! - merge threshold ratio and star promotion mass,
//! - trail length cap
//!
//! Every field is plain `pub` so external callers (UI sliders) can
//! reassign them between steps; the engine reads the current values on
//! each pass and needs no restart.

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub G: f64, // gravitational constant
    pub softening: f64, // softening length, added squared to the force denominator
    pub substeps: u32, // integration subdivisions per frame
    pub merge_ratio: f64, // merge when distance < ratio * (ra + rb)
    pub star_mass_threshold: f64, // non-star bodies above this mass promote to star
    pub max_trail: usize, // trail length cap per body
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            G: 800.0,
            softening: 8.0,
            substeps: 4,
            merge_ratio: 0.6,
            star_mass_threshold: 60.0,
            max_trail: 120,
        }
    }
}
