/// The input of the player for one frame of physics.
///
/// Key callbacks write the flags, the walk integrator reads a snapshot once
/// per frame. `key_jump` is an edge: it must be `true` only on the frame the
/// jump key was freshly pressed, never just because the key is held.
#[derive(Debug, Clone, Copy)]
pub struct PlayerInput {
    pub key_move_forward: bool,
    pub key_move_left: bool,
    pub key_move_backward: bool,
    pub key_move_right: bool,
    pub key_jump: bool,
    /// Camera yaw in degrees. Walking is camera-relative, so the integrator
    /// needs the yaw to build its forward/right basis; pitch never affects it.
    pub yaw: f64,
}

impl Default for PlayerInput {
    fn default() -> Self {
        Self {
            key_move_forward: false,
            key_move_left: false,
            key_move_backward: false,
            key_move_right: false,
            key_jump: false,
            yaw: 0.0,
        }
    }
}
