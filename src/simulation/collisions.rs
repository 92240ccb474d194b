//! Collision detection and perfectly-inelastic merging
//!
//! Overlapping bodies merge: the heavier body absorbs the lighter one,
//! conserving mass exactly and momentum through a weighted velocity.
//! Absorbed bodies are soft-deleted mid-pass and compacted out at the
//! end, so survivor order stays stable.

use log::debug;

use crate::simulation::params::Parameters;
use crate::simulation::states::{dist_sq, BodyKind, System};

/// Run one merge pass over all unordered pairs of live bodies.
///
/// Pairs are visited in index order over the current body list, and
/// every check reads the live, current radius/mass -- a body that grew
/// from a merge earlier in the pass can absorb further bodies in the
/// same pass. A body marked dead is skipped by all remaining checks.
pub fn resolve_collisions(sys: &mut System, p: &Parameters) {
    let n = sys.bodies.len();

    for i in 0..n {
        for j in (i + 1)..n {
            if !sys.bodies[i].alive {
                break; // i lost an earlier pair in this pass
            }
            if !sys.bodies[j].alive {
                continue;
            }

            let bi = &sys.bodies[i];
            let bj = &sys.bodies[j];

            // Bodies must visibly overlap before merging, hence the
            // tolerance below full touching distance
            let threshold = p.merge_ratio * (bi.radius + bj.radius);
            if dist_sq(&bi.x, &bj.x) >= threshold * threshold {
                continue;
            }

            // Heavier body absorbs; a tie keeps the first-indexed one
            let (win, lose) = if bi.m >= bj.m { (i, j) } else { (j, i) };
            merge(sys, win, lose, p);
        }
    }

    // One stable compaction pass removes everything absorbed above
    sys.bodies.retain(|b| b.alive);
}

/// Fold body `lose` into body `win` and mark the loser dead.
fn merge(sys: &mut System, win: usize, lose: usize, p: &Parameters) {
    // Copy the loser's state first; two index borrows can't overlap
    let (m_l, x_l, v_l) = {
        let l = &sys.bodies[lose];
        (l.m, l.x, l.v)
    };

    let w = &mut sys.bodies[win];
    let m_w = w.m;
    let total = m_w + m_l;

    // Momentum-weighted velocity, mass-weighted position
    w.v = (w.v * m_w + v_l * m_l) / total;
    w.x = (w.x * m_w + x_l * m_l) / total;

    // Constant-density heuristic: volume tracks mass, radius the cube root
    w.radius *= (total / m_w).cbrt();
    w.m = total;

    // Enough accreted mass turns a body into a star; the merged radius
    // is kept, only the visual preset is adopted
    if w.kind != BodyKind::Star && w.m > p.star_mass_threshold {
        w.kind = BodyKind::Star;
        w.color = BodyKind::Star.preset().color;
        debug!("merge: body {win} promoted to star at mass {total:.1}");
    }

    sys.bodies[lose].alive = false;
    debug!("merge: body {win} absorbed body {lose}, mass {total:.1}");
}
