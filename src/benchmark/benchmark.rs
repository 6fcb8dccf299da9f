//! Timing harness for the simulation stepper.
//!
//! Measures one full rendered frame (256 sub-steps of the complete
//! pipeline) across a range of body counts. The pairwise resolvers are
//! O(n^2), so this is the curve to watch when pushing the population up.

use std::time::Instant;

use crate::simulation::commands::InputCommands;
use crate::simulation::gravity::GravityField;
use crate::simulation::integrator::advance;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Capsule, Circle, NVec2, World};

fn make_params() -> Parameters {
    Parameters {
        half_width: 384.0,
        half_height: 384.0,
        gravity: 500.0,
        friction: 0.7,
        substeps: 256,
        impulse: 1000.0,
        explosion_impulse: 300000.0,
        translation_speed: 300.0,
        angular_speed: 5.0,
        seed: 0,
    }
}

/// Deterministic world of size `n`, no rand needed.
fn make_world(n: usize) -> World {
    let mut circles = Vec::with_capacity(n);
    for i in 0..n {
        let i_f = i as f64;
        circles.push(Circle {
            x: NVec2::new((i_f * 0.37).sin() * 350.0, (i_f * 0.13).cos() * 350.0),
            v: NVec2::zeros(),
            radius: 10.0,
            mass: 1.0,
            color: [1.0, 1.0, 1.0],
            player_controlled: i == 0,
        });
    }

    let capsules = vec![Capsule {
        ends: [NVec2::new(10.0, 10.0), NVec2::new(470.0, 425.0)],
        radius: 10.0,
        color: [1.0, 1.0, 1.0],
        player_controlled: true,
    }];

    World::new(circles, capsules)
}

/// Time one frame's worth of stepping for a range of body counts.
/// Paste output directly into a spreadsheet to graph.
pub fn bench_advance() {
    let ns = [10, 25, 50, 100, 200, 400];
    let frame = 1.0 / 60.0;

    println!("n,frame_ms");

    for n in ns {
        let params = make_params();
        let mut world = make_world(n);
        let mut gravity = GravityField::uniform(params.gravity);
        let mut commands = InputCommands::default();

        // Warm up
        advance(&mut world, &mut gravity, &mut commands, &params, frame);

        let frames = 10;
        let t0 = Instant::now();
        for _ in 0..frames {
            advance(&mut world, &mut gravity, &mut commands, &params, frame);
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / frames as f64;

        println!("{n},{ms:.6}");
    }
}
