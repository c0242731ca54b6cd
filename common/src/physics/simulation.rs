//! Per-frame driver of the walking physics.

use super::player::PhysicsPlayer;
use super::walk::walk_player;
use crate::debug::send_debug_info;
use crate::player::PlayerInput;
use crate::time::FrameClock;

/// The local physics simulation: the kinematic state of the player, the
/// pending jump trigger and the frame clock.
///
/// The clock only advances through `step`, so pausing it while the look
/// control is disengaged keeps physics time from accumulating in the
/// background: the first frame after re-engaging gets a delta of 0.
pub struct WalkSimulation {
    player: PhysicsPlayer,
    jump_pending: bool,
    clock: FrameClock,
}

impl WalkSimulation {
    pub fn new(player: PhysicsPlayer) -> Self {
        Self {
            player,
            jump_pending: false,
            clock: FrameClock::new(),
        }
    }

    /// Arm the jump trigger. It stays armed until a grounded frame consumes
    /// it: one jump per press.
    pub fn queue_jump(&mut self) {
        self.jump_pending = true;
    }

    /// Step one frame using the elapsed wall-clock time.
    pub fn step(&mut self, input: &PlayerInput) {
        let seconds_delta = self.clock.tick();
        self.step_with_delta(input, seconds_delta);
    }

    /// Step one frame with an explicit time delta, for deterministic
    /// callers.
    pub fn step_with_delta(&mut self, input: &PlayerInput, seconds_delta: f64) {
        if input.key_jump {
            self.jump_pending = true;
        }
        walk_player(&mut self.player, input, &mut self.jump_pending, seconds_delta);

        let [vx, vy, vz]: [f64; 3] = self.player.velocity.into();
        send_debug_info(
            "Physics",
            "velocity",
            format!("velocity: {:.2} {:.2} {:.2}", vx, vy, vz),
        );
        send_debug_info(
            "Physics",
            "ontheground",
            format!("on the ground? {}", self.player.on_ground),
        );
    }

    /// Stop the clock while the look control is disengaged. Input may keep
    /// accumulating upstream, but physics time does not.
    pub fn pause(&mut self) {
        self.clock.pause();
    }

    pub fn player(&self) -> &PhysicsPlayer {
        &self.player
    }
}
