use std::time::Instant;

use crate::simulation::engine::Simulation;
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, BodyKind, NVec2, System};

/// Deterministic body lattice, no rand needed
fn lattice(n: usize) -> Vec<Body> {
    let mut bodies = Vec::with_capacity(n);
    for i in 0..n {
        let i_f = i as f64;
        let x = NVec2::new((i_f * 0.37).sin() * 900.0, (i_f * 0.13).cos() * 900.0);
        bodies.push(Body::new(BodyKind::Planet, x, NVec2::zeros()));
    }
    bodies
}

pub fn bench_gravity() {
    // Different system sizes to test
    let ns = [200, 400, 800, 1600, 3200, 6400];

    for n in ns {
        let sys = System {
            bodies: lattice(n),
            t: 0.0,
        };
        let params = Parameters::default();
        let gravity = AccelSet::new().with(NewtonianGravity);

        let mut out = vec![NVec2::zeros(); n];

        // Warm up
        gravity.accumulate_accels(0.0, &sys, &params, &mut out);

        let t0 = Instant::now();
        gravity.accumulate_accels(0.0, &sys, &params, &mut out);
        let dt = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, gravity pass = {dt:8.6} s");
    }
}

pub fn bench_step() {
    let ns = [100, 200, 400, 800, 1600];
    let frames = 4; // frames timed per size

    for n in ns {
        let mut sim = Simulation::default();
        sim.system.bodies = lattice(n);

        // Warm up one frame, then time full frames: substeps, trails,
        // and the collision pass together
        sim.step(1.0 / 60.0, 1.0);

        let t0 = Instant::now();
        for _ in 0..frames {
            sim.step(1.0 / 60.0, 1.0);
        }
        let per_frame = t0.elapsed().as_secs_f64() / frames as f64;

        println!(
            "N = {n:5}, step = {per_frame:8.6} s/frame, bodies after = {:5}",
            sim.system.bodies.len()
        );
    }
}
