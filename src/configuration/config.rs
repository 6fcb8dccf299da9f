//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – arena extents, physical constants, command magnitudes
//! - [`SpawnConfig`]      – how many circles to scatter and in what size range
//! - [`CapsuleConfig`]    – explicitly placed kinematic capsules
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! The reference scenario, matching these types:
//!
//! ```yaml
//! parameters:
//!   half_width: 384.0        # arena is 2*half_width wide
//!   half_height: 384.0
//!   gravity: 500.0           # uniform/point-source gravity scalar
//!   friction: 0.7
//!   substeps: 256            # physics sub-steps per rendered frame
//!   impulse: 1000.0          # player per-axis impulse
//!   explosion_impulse: 300000.0
//!   translation_speed: 300.0 # player capsule translation
//!   angular_speed: 5.0       # player capsule rotation (rad/s)
//!   seed: 0                  # deterministic seed for the initial layout
//!
//! spawn:
//!   circle_count: 50
//!   radius_min: 10.0
//!   radius_max: 20.0
//!
//! capsules:
//!   - a: [10.0, 10.0]
//!     b: [470.0, 425.0]
//!     radius: 10.0
//! ```
//!
//! The scenario builder maps this configuration into the runtime types.

use serde::Deserialize;

/// Global numerical and physical parameters for a scenario.
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub half_width: f64,
    pub half_height: f64,
    pub gravity: f64,           // gravity scalar G
    pub friction: f64,          // friction coefficient
    pub substeps: u32,          // sub-steps per rendered frame
    pub impulse: f64,           // player per-axis impulse magnitude
    pub explosion_impulse: f64, // radial explosion magnitude
    pub translation_speed: f64, // capsule translation magnitude
    pub angular_speed: f64,     // capsule rotation rate (rad/s)
    pub seed: u64,              // seed for reproducible initial layout
}

/// Randomized circle population. Positions and colors are drawn from the
/// seeded generator; the first spawned circle is player-controlled.
#[derive(Deserialize, Debug, Clone)]
pub struct SpawnConfig {
    pub circle_count: usize,
    pub radius_min: f64,
    pub radius_max: f64,
}

/// One explicitly placed capsule. The first listed capsule is
/// player-controlled.
#[derive(Deserialize, Debug)]
pub struct CapsuleConfig {
    pub a: [f64; 2],    // first end-cap center
    pub b: [f64; 2],    // second end-cap center
    pub radius: f64,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig,
    pub spawn: SpawnConfig,
    pub capsules: Vec<CapsuleConfig>,
}
