//! Build fully-initialized simulation scenarios from configuration.
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - numerical parameters (`Parameters`)
//! - world state (`World` with circles and capsules at t = 0)
//! - the active gravity field (`GravityField`, uniform at start)
//! - the pending command set (`InputCommands`, empty at start)
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! input, stepping, and drawing systems.
//!
//! Circle placement is drawn from a `ChaCha8Rng` seeded from the config, so
//! the same seed reproduces the same initial layout on every run.

use bevy::prelude::Resource;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::configuration::config::ScenarioConfig;
use crate::simulation::commands::InputCommands;
use crate::simulation::gravity::GravityField;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Capsule, Circle, NVec2, World};

/// Bevy resource representing a fully-initialized scenario.
#[derive(Resource)]
pub struct Scenario {
    pub parameters: Parameters,
    pub world: World,
    pub gravity: GravityField,
    pub commands: InputCommands,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Parameters (runtime) from ParametersConfig
        let p = cfg.parameters;
        let parameters = Parameters {
            half_width: p.half_width,
            half_height: p.half_height,
            gravity: p.gravity,
            friction: p.friction,
            substeps: p.substeps,
            impulse: p.impulse,
            explosion_impulse: p.explosion_impulse,
            translation_speed: p.translation_speed,
            angular_speed: p.angular_speed,
            seed: p.seed,
        };

        let mut rng = ChaCha8Rng::seed_from_u64(parameters.seed);

        // Circles: randomized position/radius/color within the arena,
        // zero initial velocity, unit mass. The first one is the player.
        let spawn = cfg.spawn;
        let circles: Vec<Circle> = (0..spawn.circle_count)
            .map(|i| Circle {
                x: NVec2::new(
                    rng.gen_range(-parameters.half_width..parameters.half_width),
                    rng.gen_range(-parameters.half_height..parameters.half_height),
                ),
                v: NVec2::zeros(),
                radius: rng.gen_range(spawn.radius_min..=spawn.radius_max),
                mass: 1.0,
                color: [rng.gen(), rng.gen(), rng.gen()],
                player_controlled: i == 0,
            })
            .collect();

        // Capsules: placed exactly as configured, first one is the player's
        let capsules: Vec<Capsule> = cfg
            .capsules
            .iter()
            .enumerate()
            .map(|(i, cc)| Capsule {
                ends: [NVec2::new(cc.a[0], cc.a[1]), NVec2::new(cc.b[0], cc.b[1])],
                radius: cc.radius,
                color: [rng.gen(), rng.gen(), rng.gen()],
                player_controlled: i == 0,
            })
            .collect();

        Self {
            parameters,
            world: World::new(circles, capsules),
            gravity: GravityField::uniform(p.gravity),
            commands: InputCommands::default(),
        }
    }
}
