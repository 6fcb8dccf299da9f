//! Fixed sub-step time integration for the arena simulation.
//!
//! One call to [`advance`] corresponds to one rendered frame: the frame
//! duration is split into a fixed number of equal sub-steps, and each
//! sub-step runs the full pipeline
//!
//! commands -> boundary -> circle pairs -> circle-capsule -> integrate
//!
//! Many small sub-steps keep the collision response stable and the
//! friction/gravity arithmetic consistent regardless of how much the
//! rendered frame rate varies, and reduce tunneling through thin contacts.

use crate::simulation::collisions::resolve_collisions;
use crate::simulation::commands::InputCommands;
use crate::simulation::gravity::GravityField;
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, World};

/// Advance the world by one rendered frame of duration `frame_dt`.
pub fn advance(
    world: &mut World,
    gravity: &mut GravityField,
    commands: &mut InputCommands,
    params: &Parameters,
    frame_dt: f64,
) {
    let dt = frame_dt / params.substeps as f64;
    for _ in 0..params.substeps {
        sub_step(world, gravity, commands, params, dt);
    }
}

/// One sub-step of duration `dt`. The phase order is fixed: collision
/// corrections must be in place before positions and velocities advance.
fn sub_step(
    world: &mut World,
    gravity: &mut GravityField,
    commands: &mut InputCommands,
    params: &Parameters,
    dt: f64,
) {
    commands.apply(world, gravity, params, dt);

    resolve_collisions(world, params, dt);

    integrate(world, gravity, params, dt);
}

/// Advance every circle under gravity and global damping.
///
/// Gravity accelerations are evaluated into a buffer first, since the
/// point-source field reads other circles' positions while each circle is
/// being mutated. In point-source mode the velocity kick lands before the
/// position drift, so a freshly captured circle curves toward the source
/// within the same sub-step; the uniform field drifts first and kicks
/// after. Both orders converge with sub-step size and match the field's
/// per-mode contract.
fn integrate(world: &mut World, gravity: &GravityField, params: &Parameters, dt: f64) {
    let n = world.circles.len();
    if n == 0 {
        return;
    }

    let mut accels = vec![NVec2::zeros(); n];
    gravity.accumulate_accels(&world.circles, &mut accels);

    let damping = 1.0 - params.friction * dt;
    let kick_first = gravity.is_point_source();

    for (circle, a) in world.circles.iter_mut().zip(accels.iter()) {
        if kick_first {
            circle.v += a * dt;
            circle.x += circle.v * dt;
        } else {
            circle.x += circle.v * dt;
            circle.v += a * dt;
        }
        circle.v *= damping;
    }

    world.t += dt;
}
