//! Bevy 2D viewer for the arena simulation.
//!
//! The viewer is a thin collaborator around the physics core: once per
//! rendered frame it snapshots the keyboard into the scenario's pending
//! command set, advances the world by the real frame delta, and copies body
//! geometry into mesh transforms. The core never learns how drawing happens.
//!
//! Controls:
//! - arrows: impulse on the player circle
//! - B: radial explosion from the player circle
//! - G: toggle uniform <-> point-source gravity (player circle as source)
//! - WASD: translate the player capsule, Q/E: rotate it
//! - Esc: quit

use bevy::math::primitives::{Capsule2d, Circle};
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use std::f32::consts::FRAC_PI_2;

use crate::simulation::integrator::advance;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::Capsule;

/// Component tagging each circle mesh with its index into world.circles.
#[derive(Component)]
struct CircleIndex(pub usize);

/// Component tagging each capsule mesh with its index into world.capsules.
#[derive(Component)]
struct CapsuleIndex(pub usize);

pub fn run_2d(scenario: Scenario) {
    println!(
        "run_2d: starting Bevy 2D viewer with {} circles, {} capsules",
        scenario.world.circles.len(),
        scenario.world.capsules.len()
    );

    let width = (2.0 * scenario.parameters.half_width) as f32;
    let height = (2.0 * scenario.parameters.half_height) as f32;

    App::new()
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "arenasim".into(),
                resolution: (width, height).into(),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_systems(Startup, setup_bodies_system)
        .add_systems(
            Update,
            (read_input_system, physics_step_system, sync_transforms_system).chain(),
        )
        .run();
}

fn setup_bodies_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    // 2D camera; world units are already pixels, so no scaling
    commands.spawn(Camera2dBundle::default());

    for (i, body) in scenario.world.circles.iter().enumerate() {
        let [r, g, b] = body.color;
        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(body.radius as f32))),
                material: materials.add(ColorMaterial::from(Color::srgb(r, g, b))),
                transform: Transform::from_xyz(body.x.x as f32, body.x.y as f32, 0.0),
                ..Default::default()
            },
            CircleIndex(i),
        ));
    }

    for (i, capsule) in scenario.world.capsules.iter().enumerate() {
        let [r, g, b] = capsule.color;
        // Segment length is rigid, so the mesh is built once; only the
        // transform moves afterwards
        let mesh = Capsule2d::new(capsule.radius as f32, capsule.length() as f32);
        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(mesh)),
                material: materials.add(ColorMaterial::from(Color::srgb(r, g, b))),
                transform: capsule_transform(capsule),
                ..Default::default()
            },
            CapsuleIndex(i),
        ));
    }
}

/// Snapshot the keyboard into the scenario's pending commands. Held keys
/// re-arm every frame; the gravity toggle arms only on the press edge and
/// is consumed by the stepper.
fn read_input_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut scenario: ResMut<Scenario>,
    mut exit: EventWriter<AppExit>,
) {
    if keys.just_pressed(KeyCode::Escape) {
        exit.send(AppExit::Success);
    }

    let cmd = &mut scenario.commands;
    cmd.up = keys.pressed(KeyCode::ArrowUp);
    cmd.down = keys.pressed(KeyCode::ArrowDown);
    cmd.left = keys.pressed(KeyCode::ArrowLeft);
    cmd.right = keys.pressed(KeyCode::ArrowRight);
    cmd.explode = keys.pressed(KeyCode::KeyB);

    if keys.just_pressed(KeyCode::KeyG) {
        cmd.toggle_gravity = true;
    }

    cmd.cap_up = keys.pressed(KeyCode::KeyW);
    cmd.cap_down = keys.pressed(KeyCode::KeyS);
    cmd.cap_left = keys.pressed(KeyCode::KeyA);
    cmd.cap_right = keys.pressed(KeyCode::KeyD);
    cmd.rotate_ccw = keys.pressed(KeyCode::KeyQ);
    cmd.rotate_cw = keys.pressed(KeyCode::KeyE);
}

/// Per-frame physics: one `advance` call with the real frame delta.
fn physics_step_system(time: Res<Time>, mut scenario: ResMut<Scenario>) {
    // Split &mut Scenario into &mut fields in one destructuring step
    let Scenario {
        world,
        parameters,
        gravity,
        commands,
    } = &mut *scenario;

    advance(world, gravity, commands, parameters, time.delta_seconds_f64());
}

fn sync_transforms_system(
    scenario: Res<Scenario>,
    mut circles: Query<(&CircleIndex, &mut Transform), Without<CapsuleIndex>>,
    mut capsules: Query<(&CapsuleIndex, &mut Transform), Without<CircleIndex>>,
) {
    for (CircleIndex(i), mut transform) in &mut circles {
        if let Some(c) = scenario.world.circles.get(*i) {
            transform.translation.x = c.x.x as f32;
            transform.translation.y = c.x.y as f32;
        }
    }

    for (CapsuleIndex(i), mut transform) in &mut capsules {
        if let Some(c) = scenario.world.capsules.get(*i) {
            *transform = capsule_transform(c);
        }
    }
}

/// Bevy's Capsule2d is modeled along +Y; place it at the segment midpoint
/// and rotate it onto the actual axis direction.
fn capsule_transform(capsule: &Capsule) -> Transform {
    let mid = capsule.midpoint();
    let axis = capsule.ends[0] - capsule.ends[1];
    let angle = (axis.y as f32).atan2(axis.x as f32) - FRAC_PI_2;
    Transform::from_xyz(mid.x as f32, mid.y as f32, 0.0)
        .with_rotation(Quat::from_rotation_z(angle))
}
