use arenasim::{
    advance, resolve_circle_pair, Capsule, Circle, GravityField, InputCommands, NVec2, Parameters,
    World,
};

use approx::{assert_abs_diff_eq, assert_relative_eq};

/// Reference parameters: the 768x768 arena from the default scenario.
pub fn test_params() -> Parameters {
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

/// Build a circle with the given state and unit mass unless overridden.
pub fn circle(x: f64, y: f64, radius: f64, mass: f64, vx: f64, vy: f64) -> Circle {
    Circle {
        x: NVec2::new(x, y),
        v: NVec2::new(vx, vy),
        radius,
        mass,
        color: [1.0, 1.0, 1.0],
        player_controlled: false,
    }
}

pub fn capsule(a: (f64, f64), b: (f64, f64), radius: f64) -> Capsule {
    Capsule {
        ends: [NVec2::new(a.0, a.1), NVec2::new(b.0, b.1)],
        radius,
        color: [1.0, 1.0, 1.0],
        player_controlled: false,
    }
}

fn advance_frames(world: &mut World, gravity: &mut GravityField, params: &Parameters, frames: u32) {
    let mut commands = InputCommands::default();
    for _ in 0..frames {
        advance(world, gravity, &mut commands, params, 1.0 / 60.0);
    }
}

// ==================================================================================
// Boundary containment
// ==================================================================================

#[test]
fn circles_stay_inside_the_arena() {
    let params = test_params();
    // A spread of circles, some already out of bounds, some moving fast
    let mut world = World::new(
        vec![
            circle(0.0, 0.0, 10.0, 1.0, 800.0, -600.0),
            circle(-380.0, 380.0, 15.0, 1.0, -200.0, 500.0),
            circle(383.0, -383.0, 12.0, 1.0, 900.0, -900.0),
            circle(100.0, -350.0, 20.0, 1.0, 0.0, -400.0),
        ],
        vec![],
    );
    let mut gravity = GravityField::uniform(params.gravity);

    advance_frames(&mut world, &mut gravity, &params, 120);

    // Between the last boundary pass and the end of the frame a circle can
    // drift back into a wall by at most one sub-step of travel
    let dt = (1.0 / 60.0) / params.substeps as f64;
    for c in &world.circles {
        let tol = c.v.norm() * dt + 1e-9;
        assert!(c.x.x - c.radius >= -params.half_width - tol);
        assert!(c.x.x + c.radius <= params.half_width + tol);
        assert!(c.x.y - c.radius >= -params.half_height - tol);
        assert!(c.x.y + c.radius <= params.half_height + tol);
    }
}

// ==================================================================================
// Circle-circle collisions
// ==================================================================================

#[test]
fn head_on_pair_conserves_momentum_and_normal_energy() {
    // m1 = 1 and m2 = 2, equal radii, approaching head-on
    let mut a = circle(-5.0, 0.0, 10.0, 1.0, 30.0, 0.0);
    let mut b = circle(5.0, 0.0, 10.0, 2.0, -30.0, 0.0);

    let p_before = a.mass * a.v.x + b.mass * b.v.x;
    let ke_before = 0.5 * a.mass * a.v.x.powi(2) + 0.5 * b.mass * b.v.x.powi(2);

    resolve_circle_pair(&mut a, &mut b);

    let p_after = a.mass * a.v.x + b.mass * b.v.x;
    let ke_after = 0.5 * a.mass * a.v.x.powi(2) + 0.5 * b.mass * b.v.x.powi(2);

    assert_relative_eq!(p_before, p_after, epsilon = 1e-9);
    assert_relative_eq!(ke_before, ke_after, epsilon = 1e-9);

    // And they are no longer interpenetrating
    assert!((a.x - b.x).norm() >= a.radius + b.radius - 1e-9);
}

#[test]
fn equal_mass_pair_swaps_normal_velocities() {
    let mut a = circle(-9.5, 0.0, 10.0, 1.0, 25.0, 0.0);
    let mut b = circle(9.5, 0.0, 10.0, 1.0, -25.0, 0.0);

    resolve_circle_pair(&mut a, &mut b);

    assert_abs_diff_eq!(a.v.x, -25.0, epsilon = 1e-9);
    assert_abs_diff_eq!(b.v.x, 25.0, epsilon = 1e-9);
}

#[test]
fn resting_overlap_converges_to_zero_penetration() {
    // No gravity, no initial velocity: only the positional correction acts
    let mut params = test_params();
    params.gravity = 0.0;

    let mut world = World::new(
        vec![
            circle(-4.0, 0.0, 10.0, 1.0, 0.0, 0.0),
            circle(4.0, 0.0, 10.0, 1.0, 0.0, 0.0),
        ],
        vec![],
    );
    let mut gravity = GravityField::uniform(params.gravity);

    advance_frames(&mut world, &mut gravity, &params, 5);

    let dist = (world.circles[0].x - world.circles[1].x).norm();
    assert!(dist >= 20.0 - 1e-9, "still interpenetrating: dist = {dist}");
}

// ==================================================================================
// Circle-capsule collisions
// ==================================================================================

#[test]
fn capsule_is_kinematic() {
    let params = test_params();
    let cap = capsule((-100.0, -300.0), (100.0, -300.0), 10.0);
    let ends_before = cap.ends;

    // A heavy, fast circle dropped straight onto the capsule
    let mut world = World::new(vec![circle(0.0, -250.0, 15.0, 40.0, 0.0, -900.0)], vec![cap]);
    let mut gravity = GravityField::uniform(params.gravity);

    advance_frames(&mut world, &mut gravity, &params, 60);

    assert_eq!(world.capsules[0].ends, ends_before);
    // The circle came to rest on top rather than tunneling through
    assert!(world.circles[0].x.y > -300.0);
}

#[test]
fn circle_cannot_sink_into_capsule() {
    let params = test_params();
    let cap = capsule((-100.0, -300.0), (100.0, -300.0), 10.0);
    let mut world = World::new(vec![circle(0.0, -280.0, 10.0, 1.0, 0.0, 0.0)], vec![cap]);
    let mut gravity = GravityField::uniform(params.gravity);

    advance_frames(&mut world, &mut gravity, &params, 120);

    let near = world.capsules[0].nearest_point(&world.circles[0].x);
    let dist = (world.circles[0].x - near).norm();
    assert!(dist >= 20.0 - 1e-6, "sunk into capsule: dist = {dist}");
}

// ==================================================================================
// Gravity field
// ==================================================================================

#[test]
fn gravity_double_toggle_restores_uniform_field() {
    let params = test_params();
    let circles = vec![circle(0.0, 0.0, 10.0, 1.0, 0.0, 0.0), circle(50.0, 0.0, 10.0, 1.0, 0.0, 0.0)];
    let mut field = GravityField::uniform(params.gravity);

    field.toggle(0);
    field.toggle(0);

    assert_eq!(field, GravityField::uniform(params.gravity));
    assert_eq!(field.acceleration(&circles, 1), NVec2::new(0.0, -500.0));
}

#[test]
fn point_source_gathers_bodies_and_spares_the_source() {
    let mut params = test_params();
    params.friction = 0.0; // isolate the gravity behavior

    let mut world = World::new(
        vec![
            circle(0.0, 0.0, 10.0, 1.0, 0.0, 0.0),
            circle(300.0, 0.0, 10.0, 1.0, 0.0, 0.0),
        ],
        vec![],
    );
    let mut gravity = GravityField::uniform(params.gravity);
    gravity.toggle(0);

    let gap_before = (world.circles[1].x - world.circles[0].x).norm();
    advance_frames(&mut world, &mut gravity, &params, 10);
    let gap_after = (world.circles[1].x - world.circles[0].x).norm();

    assert!(gap_after < gap_before);
    // The source feels no gravitational acceleration at all
    assert_eq!(world.circles[0].x, NVec2::new(0.0, 0.0));
}

// ==================================================================================
// Degeneracy guards
// ==================================================================================

#[test]
fn coincident_centers_never_produce_nan() {
    let params = test_params();
    let mut world = World::new(
        vec![
            circle(0.0, 0.0, 10.0, 1.0, 0.0, 0.0),
            circle(0.0, 0.0, 10.0, 1.0, 0.0, 0.0),
        ],
        vec![capsule((0.0, 0.0), (0.0, 0.0), 10.0)],
    );
    let mut gravity = GravityField::uniform(params.gravity);
    // Point-source from a coincident body is the worst case
    gravity.toggle(0);

    advance_frames(&mut world, &mut gravity, &params, 1);

    for c in &world.circles {
        assert!(c.x.x.is_finite() && c.x.y.is_finite(), "position corrupted: {:?}", c.x);
        assert!(c.v.x.is_finite() && c.v.y.is_finite(), "velocity corrupted: {:?}", c.v);
    }
}

// ==================================================================================
// Reference drop scenario
// ==================================================================================

#[test]
fn dropped_circle_rebounds_off_the_floor() {
    // 768x768 arena, r = 10 circle already past the floor at (0, -380),
    // falling at 50: the first sub-step must resolve the center to exactly
    // -374 and flip the vertical velocity, the rest of the frame carries
    // the rebound upward under gravity and damping.
    let params = test_params();
    let mut world = World::new(vec![circle(0.0, -380.0, 10.0, 1.0, 0.0, -50.0)], vec![]);
    let mut gravity = GravityField::uniform(params.gravity);
    let mut commands = InputCommands::default();

    advance(&mut world, &mut gravity, &mut commands, &params, 1.0 / 60.0);

    let c = &world.circles[0];

    // Re-run the same sub-step arithmetic independently
    let dt = (1.0 / 60.0) / params.substeps as f64;
    let (mut y, mut vy) = (-380.0_f64, -50.0_f64);
    for _ in 0..params.substeps {
        if y - 10.0 < -params.half_height {
            y += -params.half_height - (y - 10.0);
            vy = -vy;
        }
        y += vy * dt;
        vy -= params.gravity * dt;
        vy *= 1.0 - params.friction * dt;
    }

    assert_relative_eq!(c.x.y, y, epsilon = 1e-9);
    assert_relative_eq!(c.v.y, vy, epsilon = 1e-9);

    // Qualitatively: clear of the floor and still moving upward
    assert!(c.x.y > -374.0);
    assert!(c.v.y > 0.0 && c.v.y < 50.0);
}

// ==================================================================================
// Commands through the full stepper
// ==================================================================================

#[test]
fn held_impulse_accumulates_over_the_frame() {
    let mut params = test_params();
    params.gravity = 0.0;
    params.friction = 0.0;

    let mut player = circle(0.0, 0.0, 10.0, 1.0, 0.0, 0.0);
    player.player_controlled = true;
    let mut world = World::new(vec![player], vec![]);
    let mut gravity = GravityField::uniform(params.gravity);
    let mut commands = InputCommands {
        right: true,
        ..Default::default()
    };

    let frame = 1.0 / 60.0;
    advance(&mut world, &mut gravity, &mut commands, &params, frame);

    // impulse * dt per sub-step, over all sub-steps: impulse * frame
    assert_relative_eq!(world.circles[0].v.x, params.impulse * frame, epsilon = 1e-9);
}

#[test]
fn capsule_commands_move_only_the_player_capsule() {
    let params = test_params();
    let mut player_cap = capsule((-50.0, 100.0), (50.0, 100.0), 10.0);
    player_cap.player_controlled = true;
    let fixed_cap = capsule((-50.0, -100.0), (50.0, -100.0), 10.0);
    let fixed_ends = fixed_cap.ends;

    let mut world = World::new(vec![], vec![player_cap, fixed_cap]);
    let mut gravity = GravityField::uniform(params.gravity);
    let mut commands = InputCommands {
        cap_up: true,
        rotate_ccw: true,
        ..Default::default()
    };

    let frame = 1.0 / 60.0;
    advance(&mut world, &mut gravity, &mut commands, &params, frame);

    let moved = &world.capsules[0];
    let expected_mid_y = 100.0 + params.translation_speed * frame;
    assert_relative_eq!(moved.midpoint().y, expected_mid_y, epsilon = 1e-9);
    assert_relative_eq!(moved.length(), 100.0, epsilon = 1e-9);

    assert_eq!(world.capsules[1].ends, fixed_ends);
}
