//! Core state types for the N-body simulation.
//!
//! Defines the vector alias and the body/system structs:
//! - `NVec2` plus distance/normalization helpers
//! - `BodyKind` with its mass/radius/color presets
//! - `Body` (kinematic state, trail history, liveness flag)
//! - `System` (the list of bodies and the current simulation time `t`)

use std::collections::VecDeque;

use nalgebra::Vector2;
use serde::Deserialize;

use super::params::Parameters;

pub type NVec2 = Vector2<f64>;

/// Squared distance between two points, no intermediate allocation
pub fn dist_sq(a: &NVec2, b: &NVec2) -> f64 {
    (b - a).norm_squared()
}

/// Distance between two points; symmetric in its arguments
pub fn dist(a: &NVec2, b: &NVec2) -> f64 {
    dist_sq(a, b).sqrt()
}

/// Unit vector along `v`, or the zero vector when `|v| == 0`
pub fn normalized(v: &NVec2) -> NVec2 {
    v.try_normalize(0.0).unwrap_or_else(NVec2::zeros)
}

/// Category of a celestial body
/// Scenario files name these in lowercase; an unknown kind is a
/// deserialization error, not a silent default
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BodyKind {
    Star,
    Planet,
    Moon,
}

/// Initial mass/radius/color assigned to each body kind at creation
#[derive(Debug, Clone, Copy)]
pub struct KindPreset {
    pub mass: f64,
    pub radius: f64,
    pub color: [u8; 3],
}

impl BodyKind {
    /// Preset for this kind. Mass and radius change afterwards only by
    /// merging; color changes only on star promotion
    pub const fn preset(self) -> KindPreset {
        match self {
            BodyKind::Star => KindPreset {
                mass: 3000.0,
                radius: 16.0,
                color: [255, 210, 125],
            },
            BodyKind::Planet => KindPreset {
                mass: 12.0,
                radius: 5.0,
                color: [110, 170, 255],
            },
            BodyKind::Moon => KindPreset {
                mass: 2.0,
                radius: 3.0,
                color: [190, 190, 200],
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    pub kind: BodyKind, // star/planet/moon, may change via promotion
    pub m: f64, // mass
    pub radius: f64, // radius, grows on merge
    pub color: [u8; 3], // preset color, read by renderers only
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub a: NVec2, // acceleration, rewritten every substep
    pub trail: VecDeque<NVec2>, // past positions, oldest first
    pub age: u64, // frames since creation
    pub alive: bool, // false once absorbed by a merge
}

impl Body {
    /// New live body of `kind` at `x` with velocity `v`, taking mass,
    /// radius, and color from the kind preset
    pub fn new(kind: BodyKind, x: NVec2, v: NVec2) -> Self {
        let preset = kind.preset();
        Self {
            kind,
            m: preset.mass,
            radius: preset.radius,
            color: preset.color,
            x,
            v,
            a: NVec2::zeros(),
            trail: VecDeque::new(),
            age: 0,
            alive: true,
        }
    }

    /// Append the current position to the trail, evicting from the
    /// front while over `max_trail` (the cap may shrink between frames)
    pub fn push_trail(&mut self, max_trail: usize) {
        self.trail.push_back(self.x);
        while self.trail.len() > max_trail {
            self.trail.pop_front();
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies
    pub t: f64, // elapsed simulation time
}

impl System {
    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.m).sum()
    }

    pub fn total_momentum(&self) -> NVec2 {
        self.bodies
            .iter()
            .fold(NVec2::zeros(), |p, b| p + b.m * b.v)
    }

    /// Kinetic plus softened pairwise potential energy
    /// The driver and tests watch this sum; the integrator keeps its
    /// drift bounded over long runs
    pub fn total_energy(&self, p: &Parameters) -> f64 {
        let soft2 = p.softening * p.softening;
        let mut e = 0.0;
        for (i, bi) in self.bodies.iter().enumerate() {
            e += 0.5 * bi.m * bi.v.norm_squared();
            for bj in &self.bodies[(i + 1)..] {
                let d = (dist_sq(&bi.x, &bj.x) + soft2).sqrt();
                e -= p.G * bi.m * bj.m / d;
            }
        }
        e
    }
}
