//! Collision resolvers for the arena simulation.
//!
//! Three resolvers, run in a fixed order by [`resolve_collisions`]:
//! 1. boundary — clamp circles to the arena, reflect the violated velocity
//!    component, friction on the floor rebound
//! 2. circle-circle — positional de-penetration plus a 1-D mass-weighted
//!    elastic exchange of the normal velocity components
//! 3. circle-capsule — push the circle out of the (kinematic) capsule and
//!    damp its normal velocity with friction
//!
//! Later phases assume earlier corrections are already in place, so the
//! order is fixed here rather than left to callers.

use crate::simulation::params::Parameters;
use crate::simulation::states::{Capsule, Circle, World, DIST_EPS};

/// Run every collision phase for one sub-step of duration `dt`.
pub fn resolve_collisions(world: &mut World, params: &Parameters, dt: f64) {
    for circle in world.circles.iter_mut() {
        resolve_boundary(circle, params, dt);
    }

    // Every unordered pair (i, j) with i < j. split_at_mut gives two
    // disjoint borrows into the same body list.
    let n = world.circles.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let (head, tail) = world.circles.split_at_mut(j);
            resolve_circle_pair(&mut head[i], &mut tail[0]);
        }
    }

    for circle in world.circles.iter_mut() {
        for capsule in world.capsules.iter() {
            resolve_circle_capsule(circle, capsule, params.friction, dt);
        }
    }
}

/// Clamp `circle` to the arena box.
///
/// Each of the four edges is checked every call: a circle driven into a
/// corner is corrected on both axes. The positional correction is exact
/// (the surface ends up tangent to the edge) and the perpendicular velocity
/// component is negated. Only the bottom edge applies ground friction to
/// the horizontal component.
pub fn resolve_boundary(circle: &mut Circle, params: &Parameters, dt: f64) {
    let (hw, hh) = (params.half_width, params.half_height);
    let r = circle.radius;

    if circle.x.x - r < -hw {
        circle.x.x += -hw - (circle.x.x - r);
        circle.v.x = -circle.v.x;
    }
    if circle.x.x + r > hw {
        circle.x.x -= circle.x.x + r - hw;
        circle.v.x = -circle.v.x;
    }
    if circle.x.y - r < -hh {
        circle.x.y += -hh - (circle.x.y - r);
        circle.v.y = -circle.v.y;
        circle.v.x *= 1.0 - params.friction * dt;
    }
    if circle.x.y + r > hh {
        circle.x.y -= circle.x.y + r - hh;
        circle.v.y = -circle.v.y;
    }
}

/// Resolve one circle-circle contact.
///
/// Overlap is tested on squared distances so the common non-colliding case
/// never takes a square root. On overlap the bodies are pushed half the
/// penetration depth apart each, then the velocity components along the
/// contact normal are exchanged by the 1-D elastic collision formula:
///
/// `v_a' = ((m_a - m_b) v_a + 2 m_b v_b) / (m_a + m_b)` (symmetric for b)
///
/// Tangential components are untouched. Coincident centers leave the normal
/// undefined, so that pair is skipped for this sub-step; the next sub-step
/// picks it up once the bodies have drifted apart.
pub fn resolve_circle_pair(a: &mut Circle, b: &mut Circle) {
    let delta = a.x - b.x;
    let radii = a.radius + b.radius;
    if delta.norm_squared() >= radii * radii {
        return;
    }

    let dist = delta.norm();
    if dist < DIST_EPS {
        return;
    }
    let normal = delta / dist;

    // Symmetric positional correction: half the overlap each
    let overlap = radii - dist;
    a.x += normal * (overlap / 2.0);
    b.x -= normal * (overlap / 2.0);

    // 1-D elastic collision along the normal
    let ua = a.v.dot(&normal);
    let ub = b.v.dot(&normal);

    let m_sum = a.mass + b.mass;
    let va = ((a.mass - b.mass) * ua + 2.0 * b.mass * ub) / m_sum;
    let vb = (2.0 * a.mass * ua + (b.mass - a.mass) * ub) / m_sum;

    a.v += normal * (va - ua);
    b.v += normal * (vb - ub);
}

/// Resolve one circle-capsule contact.
///
/// The capsule is kinematic: it pushes the circle out by the full
/// penetration depth and never moves itself. The circle's normal velocity
/// component is cancelled and then damped once more by the friction factor,
/// leaving a small friction-scaled rebound instead of an elastic reflection.
pub fn resolve_circle_capsule(circle: &mut Circle, capsule: &Capsule, friction: f64, dt: f64) {
    let near = capsule.nearest_point(&circle.x);
    let delta = near - circle.x;

    let radii = circle.radius + capsule.radius;
    if delta.norm_squared() >= radii * radii {
        return;
    }

    let dist = delta.norm();
    if dist < DIST_EPS {
        // Circle center sits on the capsule axis: no usable normal
        return;
    }
    let normal = delta / dist;

    let overlap = radii - dist;
    circle.x -= normal * overlap;

    let along = circle.v.dot(&normal);
    circle.v -= normal * along;
    circle.v -= normal * ((1.0 - friction * dt) * along);
}
