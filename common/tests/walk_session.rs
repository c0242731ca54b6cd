//! End-to-end simulation of a short sandbox session: spawn on a generated
//! world, walk, jump, and edit blocks through the camera ray.

use nalgebra::Vector3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sandvox_common::physics::player::{PhysicsPlayer, MIN_CAMERA_Y};
use sandvox_common::physics::simulation::WalkSimulation;
use sandvox_common::player::PlayerInput;
use sandvox_common::world::edit::{apply_click, ClickAction, EditOutcome};
use sandvox_common::world::raycast::Ray;
use sandvox_common::worldgen::generate_flat_world;

const DELTA: f64 = 1.0 / 60.0;
const WORLD_SIZE: u32 = 10;

fn spawn() -> WalkSimulation {
    let center = WORLD_SIZE as f64 / 2.0;
    WalkSimulation::new(PhysicsPlayer::standing_at(center, center))
}

#[test]
fn walking_forward_then_releasing_comes_to_rest() {
    let mut simulation = spawn();
    let forward = PlayerInput {
        key_move_forward: true,
        ..Default::default()
    };

    for _ in 0..60 {
        simulation.step_with_delta(&forward, DELTA);
    }
    let speed = simulation.player().velocity.z.abs();
    assert!(speed > 4.5, "did not get near terminal speed: {}", speed);
    assert!(speed < 5.0, "exceeded terminal speed: {}", speed);

    for _ in 0..200 {
        simulation.step_with_delta(&PlayerInput::default(), DELTA);
    }
    assert!(simulation.player().velocity.z.abs() < 1e-6);
    // Walking never left the ground plane.
    assert_eq!(simulation.player().position.y, MIN_CAMERA_Y);
    assert!(simulation.player().on_ground);
}

#[test]
fn a_jump_returns_to_the_ground_plane() {
    let mut simulation = spawn();
    let press = PlayerInput {
        key_jump: true,
        ..Default::default()
    };

    // The jump overwrites the gravity applied earlier in the same frame.
    simulation.step_with_delta(&press, DELTA);
    assert_eq!(simulation.player().velocity.y, 8.0);
    assert!(!simulation.player().on_ground);

    let mut peak: f64 = 0.0;
    for _ in 0..120 {
        simulation.step_with_delta(&PlayerInput::default(), DELTA);
        peak = peak.max(simulation.player().position.y);
    }
    assert!(peak > MIN_CAMERA_Y + 0.3);
    assert_eq!(simulation.player().position.y, MIN_CAMERA_Y);
    assert!(simulation.player().on_ground);
}

#[test]
fn editing_through_the_camera_ray_round_trips() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut world = generate_flat_world(WORLD_SIZE, &mut rng);
    let initial_len = world.len();

    // Look straight down at the center column from above it. The column is
    // dirt with or without a sprinkled grass block on top; either way the
    // placement lands on the pointed top face and the next break removes it.
    let center = WORLD_SIZE as f64 / 2.0;
    let down = Ray {
        origin: Vector3::new(center, 4.0, center),
        dir: Vector3::new(0.0, -1.0, 0.0),
    };

    // Shift-click: a block appears against the pointed face.
    let placed = match apply_click(&mut world, &down, ClickAction::Place) {
        EditOutcome::Placed(pos) => pos,
        other => panic!("expected a placement, got {:?}", other),
    };
    assert_eq!(world.len(), initial_len + 1);

    // Plain click: the nearest block is now the one just placed.
    match apply_click(&mut world, &down, ClickAction::Break) {
        EditOutcome::Broken(block) => assert_eq!(block.pos, placed),
        other => panic!("expected a break, got {:?}", other),
    }
    assert_eq!(world.len(), initial_len);

    // Looking at the sky does nothing.
    let up = Ray {
        origin: down.origin,
        dir: Vector3::new(0.0, 1.0, 0.0),
    };
    assert_eq!(apply_click(&mut world, &up, ClickAction::Break), EditOutcome::NoTarget);
    assert_eq!(world.len(), initial_len);
}
