//! Numerical and physical parameters for the simulation.
//!
//! `Parameters` holds runtime settings:
//! - arena half extents,
//! - gravity scalar and friction coefficient,
//! - sub-step count per rendered frame,
//! - command magnitudes (impulse, explosion, capsule translation/rotation),
//! - random seed for the initial layout

#[derive(Debug, Clone)]
pub struct Parameters {
    pub half_width: f64, // arena half width (circles kept within ±half_width)
    pub half_height: f64, // arena half height
    pub gravity: f64, // gravity scalar G
    pub friction: f64, // friction coefficient
    pub substeps: u32, // fixed sub-steps per rendered frame
    pub impulse: f64, // per-axis player impulse magnitude
    pub explosion_impulse: f64, // radial explosion magnitude
    pub translation_speed: f64, // capsule translation magnitude
    pub angular_speed: f64, // capsule rotation rate (rad/s)
    pub seed: u64, // deterministic seed for the initial layout
}
