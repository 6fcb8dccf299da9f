//! Gravity field for the arena.
//!
//! Two modes, toggled by an external command:
//! - `Uniform` — constant downward pull `(0, -g)` on every circle
//! - `PointSource` — every circle is pulled toward one designated source
//!   circle at constant magnitude `g`; distance sets the direction only,
//!   there is no inverse-square falloff. The source itself feels nothing.
//!
//! The mode is an explicit state transition rather than a pair of mutable
//! globals, so the source index survives for as long as the mode is active.

use crate::simulation::states::{Circle, NVec2, DIST_EPS};

#[derive(Debug, Clone, PartialEq)]
pub enum GravityField {
    Uniform { g: f64 },
    PointSource { g: f64, source: usize },
}

impl GravityField {
    /// A clean uniform downward field of magnitude `g`.
    pub fn uniform(g: f64) -> Self {
        Self::Uniform { g }
    }

    /// Flip Uniform -> PointSource (with `source` as the designated circle)
    /// or PointSource -> Uniform. Leaving point-source mode always restores
    /// the clean `(0, -g)` field; toggling twice is the identity.
    pub fn toggle(&mut self, source: usize) {
        *self = match *self {
            Self::Uniform { g } => Self::PointSource { g, source },
            Self::PointSource { g, .. } => Self::Uniform { g },
        };
    }

    pub fn is_point_source(&self) -> bool {
        matches!(self, Self::PointSource { .. })
    }

    /// Acceleration acting on circle `i`.
    ///
    /// In point-source mode the source circle gets zero, and a circle whose
    /// center coincides with the source gets zero as well (the direction is
    /// undefined there, and normalizing it would produce NaN).
    pub fn acceleration(&self, circles: &[Circle], i: usize) -> NVec2 {
        match *self {
            Self::Uniform { g } => NVec2::new(0.0, -g),
            Self::PointSource { g, source } => {
                if i == source {
                    return NVec2::zeros();
                }
                let r = circles[source].x - circles[i].x;
                let dist = r.norm();
                if dist < DIST_EPS {
                    return NVec2::zeros();
                }
                r / dist * g
            }
        }
    }

    /// Fill `out[i]` with the acceleration on circle `i` for every circle.
    pub fn accumulate_accels(&self, circles: &[Circle], out: &mut [NVec2]) {
        for (i, a) in out.iter_mut().enumerate() {
            *a = self.acceleration(circles, i);
        }
    }
}
