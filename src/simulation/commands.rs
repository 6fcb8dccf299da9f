//! External commands applied to the world once per sub-step.
//!
//! The input collaborator (the viewer, or a test) fills an [`InputCommands`]
//! once per rendered frame from the current key state; the stepper applies
//! it at every sub-step so held keys accumulate exactly
//! `magnitude * frame_duration` over the frame, independent of frame rate.
//!
//! The gravity toggle is the one edge-triggered command: it must fire once
//! per key press, so it is consumed by the first sub-step that applies it.

use crate::simulation::gravity::GravityField;
use crate::simulation::params::Parameters;
use crate::simulation::states::{World, DIST_EPS};

/// Pending commands for the current frame. Held-key commands stay set for
/// every sub-step of the frame; `toggle_gravity` is cleared after one use.
#[derive(Debug, Clone, Default)]
pub struct InputCommands {
    // Directional impulses on the player circle
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,

    /// Radial explosion impulse pushing every other circle away from the
    /// player circle.
    pub explode: bool,

    /// Edge-triggered: switch Uniform <-> PointSource gravity, designating
    /// the player circle as the source on activation.
    pub toggle_gravity: bool,

    // Player capsule translation
    pub cap_up: bool,
    pub cap_down: bool,
    pub cap_left: bool,
    pub cap_right: bool,

    // Player capsule rotation about its midpoint
    pub rotate_ccw: bool,
    pub rotate_cw: bool,
}

impl InputCommands {
    /// Apply every pending command, scaled by the sub-step duration `dt`.
    pub fn apply(&mut self, world: &mut World, gravity: &mut GravityField, params: &Parameters, dt: f64) {
        if let Some(i) = world.player_circle() {
            let kick = params.impulse * dt;
            let player = &mut world.circles[i];
            if self.up {
                player.v.y += kick;
            }
            if self.down {
                player.v.y -= kick;
            }
            if self.left {
                player.v.x -= kick;
            }
            if self.right {
                player.v.x += kick;
            }

            if self.explode {
                self.explode_from(world, i, params, dt);
            }

            if self.toggle_gravity {
                // Consume: one transition per press, not per sub-step
                self.toggle_gravity = false;
                gravity.toggle(i);
            }
        }

        let shift = params.translation_speed * dt;
        let turn = params.angular_speed * dt;
        for capsule in world.capsules.iter_mut().filter(|c| c.player_controlled) {
            if self.cap_up {
                capsule.translate([0.0, shift].into());
            }
            if self.cap_down {
                capsule.translate([0.0, -shift].into());
            }
            if self.cap_left {
                capsule.translate([-shift, 0.0].into());
            }
            if self.cap_right {
                capsule.translate([shift, 0.0].into());
            }
            if self.rotate_ccw {
                capsule.rotate(turn);
            }
            if self.rotate_cw {
                capsule.rotate(-turn);
            }
        }
    }

    /// Push every circle except `center` away from it, with impulse falling
    /// off with center distance. Coincident centers are skipped: there is
    /// no direction to push along.
    fn explode_from(&self, world: &mut World, center: usize, params: &Parameters, dt: f64) {
        let origin = world.circles[center].x;
        for (j, other) in world.circles.iter_mut().enumerate() {
            if j == center {
                continue;
            }
            let delta = other.x - origin;
            let d2 = delta.norm_squared();
            if d2 < DIST_EPS * DIST_EPS {
                continue;
            }
            other.v += delta * (params.explosion_impulse / d2) * dt;
        }
    }
}
