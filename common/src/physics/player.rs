use crate::world::BLOCK_SIZE;
use nalgebra::Vector3;

pub const PLAYER_HEIGHT: f64 = 1.8;

/// Camera height while standing on the ground plane: the plane is the top of
/// the y = 0 block layer and the camera sits half the player height above it.
pub const MIN_CAMERA_Y: f64 = BLOCK_SIZE / 2.0 + PLAYER_HEIGHT / 2.0;

/// The kinematic state of the player.
#[derive(Debug, Clone)]
pub struct PhysicsPlayer {
    /// Camera-holder position.
    pub position: Vector3<f64>,
    /// Current velocity. The horizontal components carry the inverted sign
    /// convention of the walk integrator (see `physics::walk`).
    pub velocity: Vector3<f64>,
    /// Whether the player is standing on the ground plane.
    pub on_ground: bool,
}

impl PhysicsPlayer {
    /// A player at rest on the ground plane at `x`, `z`.
    pub fn standing_at(x: f64, z: f64) -> Self {
        Self {
            position: Vector3::new(x, MIN_CAMERA_Y, z),
            velocity: Vector3::zeros(),
            on_ground: true,
        }
    }
}

impl Default for PhysicsPlayer {
    fn default() -> Self {
        Self::standing_at(0.0, 0.0)
    }
}
