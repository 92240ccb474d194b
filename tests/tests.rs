use gravbox::simulation::engine::{Simulation, MAX_FRAME_DT};
use gravbox::simulation::forces::{AccelSet, NewtonianGravity};
use gravbox::simulation::params::Parameters;
use gravbox::simulation::states::{dist, normalized, Body, BodyKind, NVec2, System};

/// Frame delta used throughout; well under the engine clamp
const FRAME: f64 = 1.0 / 60.0;

/// Build a simple 2-body System separated along the x-axis, at rest
pub fn two_body_system(d: f64, m1: f64, m2: f64) -> System {
    let mut b1 = Body::new(BodyKind::Planet, NVec2::new(-d / 2.0, 0.0), NVec2::zeros());
    b1.m = m1;
    let mut b2 = Body::new(BodyKind::Planet, NVec2::new(d / 2.0, 0.0), NVec2::zeros());
    b2.m = m2;
    System {
        bodies: vec![b1, b2],
        t: 0.0,
    }
}

/// Default physics parameters for force-level tests
pub fn test_params() -> Parameters {
    Parameters::default()
}

/// Build a gravity-only AccelSet
pub fn gravity_set() -> AccelSet {
    AccelSet::new().with(NewtonianGravity)
}

/// Simulation with two resting planets `d` apart on the x-axis
pub fn resting_pair(d: f64) -> Simulation {
    let mut sim = Simulation::default();
    sim.add_body(BodyKind::Planet, NVec2::new(-d / 2.0, 0.0), NVec2::zeros());
    sim.add_body(BodyKind::Planet, NVec2::new(d / 2.0, 0.0), NVec2::zeros());
    sim
}

fn separation(sim: &Simulation) -> f64 {
    dist(&sim.system.bodies[0].x, &sim.system.bodies[1].x)
}

// ==================================================================================
// Vector helper tests
// ==================================================================================

#[test]
fn normalized_zero_vector_is_zero() {
    let z = normalized(&NVec2::zeros());
    assert_eq!(z, NVec2::zeros());
}

#[test]
fn normalized_has_unit_length() {
    let n = normalized(&NVec2::new(3.0, -4.0));
    assert!((n.norm() - 1.0).abs() < 1e-12);
}

#[test]
fn distance_is_symmetric() {
    let a = NVec2::new(1.5, -2.0);
    let b = NVec2::new(-0.5, 7.0);
    assert_eq!(dist(&a, &b), dist(&b, &a));
}

// ==================================================================================
// Gravity tests
// ==================================================================================

#[test]
fn gravity_newton_third_law() {
    let sys = two_body_system(1.0, 2.0, 3.0);
    let p = test_params();
    let forces = gravity_set();

    let mut acc = vec![NVec2::zeros(); 2];
    forces.accumulate_accels(sys.t, &sys, &p, &mut acc);

    let net = acc[0] * sys.bodies[0].m + acc[1] * sys.bodies[1].m;

    assert!(net.norm() < 1e-12, "Net momentum change not zero: {:?}", net);
}

#[test]
fn gravity_points_toward_other_body() {
    let sys = two_body_system(2.0, 1.0, 1.0);
    let p = test_params();
    let forces = gravity_set();

    let mut acc = vec![NVec2::zeros(); 2];
    forces.accumulate_accels(sys.t, &sys, &p, &mut acc);

    let dx = sys.bodies[1].x - sys.bodies[0].x;
    assert!(acc[0].dot(&dx) > 0.0, "Acceleration is not toward second body");
    assert!(acc[1].dot(&dx) < 0.0, "Reaction is not toward first body");
}

#[test]
fn gravity_inverse_square_law() {
    let sys_r = two_body_system(1.0, 1.0, 1.0);
    let sys_2r = two_body_system(2.0, 1.0, 1.0);
    let mut p = test_params();
    p.softening = 0.0; // exact inverse-square without the floor
    let forces = gravity_set();

    let mut acc_r = vec![NVec2::zeros(); 2];
    let mut acc_2r = vec![NVec2::zeros(); 2];

    forces.accumulate_accels(sys_r.t, &sys_r, &p, &mut acc_r);
    forces.accumulate_accels(sys_2r.t, &sys_2r, &p, &mut acc_2r);

    let ratio = acc_r[0].norm() / acc_2r[0].norm();

    assert!((ratio - 4.0).abs() < 1e-9, "Expected ~4x, got {}", ratio);
}

#[test]
fn gravity_softening_prevents_blowup() {
    let sys = two_body_system(1e-9, 1.0, 1.0);
    let p = test_params(); // softening 8
    let forces = gravity_set();

    let mut acc = vec![NVec2::zeros(); 2];
    forces.accumulate_accels(sys.t, &sys, &p, &mut acc);

    assert!(acc[0].norm() < 1e3, "Softening failed; acceleration too large");
}

// ==================================================================================
// Engine step tests
// ==================================================================================

#[test]
fn paused_step_changes_nothing() {
    let mut sim = Simulation::default();
    sim.load_demo_scene();
    sim.paused = true;

    let before = sim.system.clone();
    sim.step(0.5, 3.0);

    assert_eq!(sim.system.t, before.t);
    assert_eq!(sim.system.bodies.len(), before.bodies.len());
    for (a, b) in sim.system.bodies.iter().zip(before.bodies.iter()) {
        assert_eq!(a.x, b.x);
        assert_eq!(a.v, b.v);
        assert_eq!(a.age, b.age);
    }
}

#[test]
fn clock_advances_by_clamped_scaled_delta() {
    let mut sim = Simulation::default();

    // Oversized frame delta is clamped before scaling
    sim.step(5.0, 2.0);
    let expected = 5.0f64.min(MAX_FRAME_DT) * 2.0;
    assert!((sim.system.t - expected).abs() < 1e-15);

    // Small delta passes through unclamped; the clock keeps time even
    // with an empty body set
    sim.step(0.001, 1.0);
    assert!((sim.system.t - (expected + 0.001)).abs() < 1e-15);
    assert!(sim.system.t >= 0.0);
}

#[test]
fn resting_bodies_attract() {
    let mut sim = resting_pair(100.0);

    let before = separation(&sim);
    sim.step(FRAME, 1.0);
    let after = separation(&sim);

    assert_eq!(sim.system.bodies.len(), 2, "no merge expected at this range");
    assert!(after < before, "bodies did not approach: {} -> {}", before, after);
}

#[test]
fn orbital_speed_matches_formula() {
    let sim = Simulation::default(); // G = 800

    let v = sim.orbital_speed(3000.0, 200.0);
    assert!((v - (800.0f64 * 3000.0 / 200.0).sqrt()).abs() < 1e-12);
    assert!((v - 109.5445).abs() < 1e-3);
}

#[test]
fn circular_orbit_stays_bounded() {
    let mut sim = Simulation::default();
    let central = BodyKind::Star.preset().mass;
    let r = 200.0;

    sim.add_body(BodyKind::Star, NVec2::zeros(), NVec2::zeros());
    let speed = sim.orbital_speed(central, r);
    sim.add_body(BodyKind::Planet, NVec2::new(r, 0.0), NVec2::new(0.0, speed));

    for _ in 0..500 {
        sim.step(FRAME, 1.0);
        let d = separation(&sim);
        assert!(d > 0.2 * r, "orbit collapsed: separation {}", d);
        assert!(d < 2.0 * r, "orbit escaped: separation {}", d);
    }
}

#[test]
fn binary_orbit_energy_is_bounded() {
    // Equal stars on a circular mutual orbit; the symplectic update
    // must not let the energy drift over a few thousand frames
    let mut sim = Simulation::default();
    let m = BodyKind::Star.preset().mass;
    let d = 400.0;
    let v = (sim.parameters.G * m / (2.0 * d)).sqrt();

    sim.add_body(BodyKind::Star, NVec2::new(-d / 2.0, 0.0), NVec2::new(0.0, -v));
    sim.add_body(BodyKind::Star, NVec2::new(d / 2.0, 0.0), NVec2::new(0.0, v));

    let e0 = sim.system.total_energy(&sim.parameters);
    for _ in 0..2000 {
        sim.step(FRAME, 1.0);
    }
    let e1 = sim.system.total_energy(&sim.parameters);

    let drift = ((e1 - e0) / e0).abs();
    assert!(drift < 0.05, "energy drifted by {:.3}%", drift * 100.0);
}

// ==================================================================================
// Collision / merge tests
// ==================================================================================

#[test]
fn overlapping_pair_merges_to_one() {
    let mut sim = Simulation::default();
    sim.add_body(BodyKind::Planet, NVec2::zeros(), NVec2::zeros());
    sim.add_body(BodyKind::Planet, NVec2::new(3.0, 0.0), NVec2::zeros());

    sim.step(FRAME, 1.0);

    assert_eq!(sim.system.bodies.len(), 1);
}

#[test]
fn merge_conserves_mass_exactly() {
    let mut sim = Simulation::default();
    sim.add_body(BodyKind::Star, NVec2::zeros(), NVec2::zeros());
    sim.add_body(BodyKind::Moon, NVec2::new(5.0, 0.0), NVec2::zeros());

    let expected = BodyKind::Star.preset().mass + BodyKind::Moon.preset().mass;
    sim.step(FRAME, 1.0);

    assert_eq!(sim.system.bodies.len(), 1);
    assert_eq!(sim.system.bodies[0].m, expected);
}

#[test]
fn merge_conserves_momentum() {
    let mut sim = Simulation::default();
    sim.add_body(BodyKind::Planet, NVec2::new(-10.0, 0.0), NVec2::new(8.0, 0.0));
    sim.add_body(BodyKind::Planet, NVec2::new(12.0, 0.0), NVec2::new(-3.0, 1.0));

    let p0 = sim.system.total_momentum();
    for _ in 0..600 {
        sim.step(FRAME, 1.0);
        if sim.system.bodies.len() == 1 {
            break;
        }
    }
    let p1 = sim.system.total_momentum();

    assert_eq!(sim.system.bodies.len(), 1, "pair never merged");
    assert!((p1 - p0).norm() < 1e-9, "momentum changed: {:?} -> {:?}", p0, p1);
}

#[test]
fn heavier_body_wins_and_tie_keeps_first_index() {
    // Heavier wins regardless of order
    let mut sim = Simulation::default();
    sim.add_body(BodyKind::Moon, NVec2::zeros(), NVec2::zeros());
    sim.add_body(BodyKind::Star, NVec2::new(4.0, 0.0), NVec2::zeros());
    sim.step(FRAME, 1.0);
    assert_eq!(sim.system.bodies.len(), 1);
    assert_eq!(sim.system.bodies[0].kind, BodyKind::Star);

    // Equal masses: the first-inserted body survives
    let mut sim = Simulation::default();
    sim.add_body(BodyKind::Planet, NVec2::zeros(), NVec2::zeros());
    sim.add_body(BodyKind::Moon, NVec2::new(2.0, 0.0), NVec2::zeros());
    sim.system.bodies[0].m = 10.0;
    sim.system.bodies[1].m = 10.0;
    sim.step(FRAME, 1.0);
    assert_eq!(sim.system.bodies.len(), 1);
    assert_eq!(sim.system.bodies[0].kind, BodyKind::Planet);
}

#[test]
fn merge_chain_collapses_in_one_step() {
    // Three overlapping planets in a row: the survivor of the first
    // merge grows and absorbs the third within the same pass
    let mut sim = Simulation::default();
    sim.add_body(BodyKind::Planet, NVec2::zeros(), NVec2::zeros());
    sim.add_body(BodyKind::Planet, NVec2::new(3.0, 0.0), NVec2::zeros());
    sim.add_body(BodyKind::Planet, NVec2::new(6.0, 0.0), NVec2::zeros());

    sim.step(FRAME, 1.0);

    assert_eq!(sim.system.bodies.len(), 1);
    assert_eq!(sim.system.bodies[0].m, 36.0);
}

#[test]
fn accreted_planets_promote_to_star() {
    let mut sim = Simulation::default();
    for i in 0..6 {
        sim.add_body(
            BodyKind::Planet,
            NVec2::new(f64::from(i) * 2.0, 0.0),
            NVec2::zeros(),
        );
    }

    sim.step(FRAME, 1.0);

    assert_eq!(sim.system.bodies.len(), 1);
    let b = &sim.system.bodies[0];
    assert_eq!(b.m, 72.0);
    assert_eq!(b.kind, BodyKind::Star);
    assert_eq!(b.color, BodyKind::Star.preset().color);

    // Promotion adopts the star color only; the radius keeps its
    // constant-density merged value
    let planet_radius = BodyKind::Planet.preset().radius;
    assert!((b.radius - planet_radius * 6.0f64.cbrt()).abs() < 1e-9);
}

// ==================================================================================
// Trail / lifecycle tests
// ==================================================================================

#[test]
fn trail_is_capped_fifo() {
    let mut sim = Simulation::default();
    sim.parameters.max_trail = 16;
    sim.add_body(BodyKind::Planet, NVec2::zeros(), NVec2::new(30.0, 0.0));

    for _ in 0..40 {
        sim.step(FRAME, 1.0);
    }

    let b = &sim.system.bodies[0];
    assert_eq!(b.trail.len(), 16);
    assert_eq!(b.age, 40);

    // Newest entry is the current position, oldest entries evicted:
    // x grows monotonically along the trail
    assert_eq!(*b.trail.back().expect("trail populated"), b.x);
    for w in b.trail.iter().collect::<Vec<_>>().windows(2) {
        assert!(w[0].x < w[1].x, "trail not oldest-first");
    }
}

#[test]
fn demo_scene_shape() {
    let mut sim = Simulation::default();
    sim.load_demo_scene();

    assert_eq!(sim.system.bodies.len(), 5);
    assert_eq!(sim.system.bodies[0].kind, BodyKind::Star);
    assert_eq!(sim.system.bodies[0].x, NVec2::zeros());
}

#[test]
fn clear_resets_bodies_and_clock_only() {
    let mut sim = Simulation::default();
    sim.load_demo_scene();
    for _ in 0..10 {
        sim.step(FRAME, 1.0);
    }
    sim.parameters.G = 500.0;

    sim.clear();

    assert!(sim.system.bodies.is_empty());
    assert_eq!(sim.system.t, 0.0);
    assert_eq!(sim.parameters.G, 500.0, "tunables must survive clear");
    assert!(!sim.paused);
}
