//! Core state types for the arena simulation.
//!
//! Defines the dynamic and kinematic bodies:
//! - `Circle` — dynamic body, moved by gravity, commands, and collisions
//! - `Capsule` — kinematic obstacle, moved only by external commands
//!
//! `World` holds both body lists and the current simulation time `t`.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// Separations below this are treated as coincident: normalizing them
/// would divide by (nearly) zero and poison the state with NaN.
pub const DIST_EPS: f64 = 1.0e-9;

#[derive(Debug, Clone)]
pub struct Circle {
    pub x: NVec2, // position (center)
    pub v: NVec2, // velocity
    pub radius: f64,
    pub mass: f64,
    pub color: [f32; 3], // read by the viewer only
    pub player_controlled: bool,
}

#[derive(Debug, Clone)]
pub struct Capsule {
    pub ends: [NVec2; 2], // end-cap centers
    pub radius: f64, // applied to both caps and the band between them
    pub color: [f32; 3],
    pub player_controlled: bool,
}

impl Capsule {
    /// Nearest point on the capsule's axis segment to `p`.
    ///
    /// The projection parameter is clamped to the segment, so the result is
    /// never on the segment's infinite extension. A zero-length axis (both
    /// endpoints coincident) degenerates to the shared endpoint without
    /// normalizing the axis.
    pub fn nearest_point(&self, p: &NVec2) -> NVec2 {
        let axis = self.ends[0] - self.ends[1];
        let len = axis.norm();
        if len < DIST_EPS {
            return self.ends[0];
        }
        let dir = axis / len;

        // Clamped projection of (p - end1) onto the axis direction
        let t = (p - self.ends[1]).dot(&dir).clamp(0.0, len);
        self.ends[1] + dir * t
    }

    /// Translate both endpoints by `delta`.
    pub fn translate(&mut self, delta: NVec2) {
        self.ends[0] += delta;
        self.ends[1] += delta;
    }

    /// Rotate the capsule about its own midpoint by `angle` radians.
    pub fn rotate(&mut self, angle: f64) {
        let mid = (self.ends[0] + self.ends[1]) / 2.0;
        let (sin, cos) = angle.sin_cos();
        for end in self.ends.iter_mut() {
            let r = *end - mid;
            *end = mid + NVec2::new(r.x * cos - r.y * sin, r.x * sin + r.y * cos);
        }
    }

    /// Midpoint of the axis segment.
    pub fn midpoint(&self) -> NVec2 {
        (self.ends[0] + self.ends[1]) / 2.0
    }

    /// Axis segment length.
    pub fn length(&self) -> f64 {
        (self.ends[0] - self.ends[1]).norm()
    }
}

/// The full simulation state. Owns every body; resolvers borrow it instead
/// of reaching for globals, so independent worlds can run side by side.
#[derive(Debug, Clone)]
pub struct World {
    pub circles: Vec<Circle>,
    pub capsules: Vec<Capsule>,
    pub t: f64, // time
}

impl World {
    pub fn new(circles: Vec<Circle>, capsules: Vec<Capsule>) -> Self {
        Self {
            circles,
            capsules,
            t: 0.0,
        }
    }

    /// Index of the player-controlled circle, if any.
    pub fn player_circle(&self) -> Option<usize> {
        self.circles.iter().position(|c| c.player_controlled)
    }
}
