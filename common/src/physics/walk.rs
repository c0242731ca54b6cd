//! The walking integrator: explicit Euler with exponential horizontal
//! damping, amplified gravity and a single flat ground plane.

use super::player::{PhysicsPlayer, MIN_CAMERA_Y};
use crate::player::PlayerInput;
use nalgebra::Vector3;

/// Horizontal damping coefficient, per second.
const DAMPING: f64 = 10.0;
/// Amplified gravity (9.8 x 5) for snappier jumps than real-world gravity.
const GRAVITY: f64 = 9.8 * 5.0;
/// Horizontal acceleration while a movement key is held.
const ACCELERATION: f64 = 50.0;
/// Vertical take-off speed of a jump.
const JUMP_SPEED: f64 = 8.0;

/// Unit vector in the `angle` direction relative to `yaw` (both in degrees).
fn movement_direction(yaw: f64, angle: f64) -> Vector3<f64> {
    let yaw = yaw + angle;
    Vector3::new(-yaw.to_radians().sin(), 0.0, -yaw.to_radians().cos()).normalize()
}

/// Normalize the vector if it can be normalized or return 0 otherwise.
fn normalize_or_zero(v: Vector3<f64>) -> Vector3<f64> {
    if v.norm() > 1e-9f64 {
        v.normalize()
    } else {
        Vector3::zeros()
    }
}

/// Advance the player by one frame of `seconds_delta` elapsed time.
///
/// `jump_pending` is the edge-triggered jump request. It is consumed only
/// when the jump actually fires, so a press that arrives while airborne
/// stays pending until the next grounded frame and one press never produces
/// two jumps.
pub fn walk_player(
    player: &mut PhysicsPlayer,
    input: &PlayerInput,
    jump_pending: &mut bool,
    seconds_delta: f64,
) {
    let delta = seconds_delta;

    // Exponential decay toward rest. Under steady input the horizontal
    // speed converges to ACCELERATION / DAMPING instead of a hard cap.
    player.velocity.x -= player.velocity.x * DAMPING * delta;
    player.velocity.z -= player.velocity.z * DAMPING * delta;

    player.velocity.y -= GRAVITY * delta;

    let direction = normalize_or_zero(Vector3::new(
        (input.key_move_right as i64 - input.key_move_left as i64) as f64,
        0.0,
        (input.key_move_forward as i64 - input.key_move_backward as i64) as f64,
    ));

    // Acceleration applies only while a relevant key is held; the damping
    // above runs regardless, so releasing the keys decays the speed to rest.
    if input.key_move_forward || input.key_move_backward {
        player.velocity.z -= direction.z * ACCELERATION * delta;
    }
    if input.key_move_left || input.key_move_right {
        player.velocity.x -= direction.x * ACCELERATION * delta;
    }

    if *jump_pending && player.on_ground {
        player.velocity.y = JUMP_SPEED;
        player.on_ground = false;
        *jump_pending = false;
    }

    // Horizontal translation is relative to the camera basis. The stored
    // velocity is opposite in sign to the movement direction, so the
    // translation negates it again.
    let forward = movement_direction(input.yaw, 0.0);
    let right = movement_direction(input.yaw, 270.0);
    player.position += right * (-player.velocity.x * delta);
    player.position += forward * (-player.velocity.z * delta);

    player.position.y += player.velocity.y * delta;

    // The ground plane is the only collision surface.
    if player.position.y < MIN_CAMERA_Y {
        player.velocity.y = 0.0;
        player.position.y = MIN_CAMERA_Y;
        player.on_ground = true;
    }
}
