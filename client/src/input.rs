use nalgebra::Vector3;
use sandvox_common::player::PlayerInput;
use std::collections::HashMap;
use winit::event::{ElementState, KeyboardInput, ModifiersState, MouseButton};

/// The yaw and pitch of the player's look direction, in degrees.
#[derive(Debug, Clone, Copy)]
pub struct YawPitch {
    pub yaw: f64,
    pub pitch: f64,
}

impl YawPitch {
    /// Apply a raw mouse motion delta.
    pub fn update_cursor(&mut self, dx: f64, dy: f64, sensitivity: f64, invert: bool) {
        let dy = if invert { -dy } else { dy };
        self.yaw -= sensitivity * dx;
        self.pitch -= sensitivity * dy;

        // Keep the yaw within [-180; 180]
        if self.yaw < -180.0 {
            self.yaw += 360.0;
        }
        if self.yaw > 180.0 {
            self.yaw -= 360.0;
        }

        // Keep the pitch within [-90; 90]
        if self.pitch < -90.0 {
            self.pitch = -90.0;
        }
        if self.pitch > 90.0 {
            self.pitch = 90.0;
        }
    }

    /// Unit view direction through the viewport center.
    pub fn view_dir(&self) -> Vector3<f64> {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();
        Vector3::new(
            -yaw.sin() * pitch.cos(),
            pitch.sin(),
            -yaw.cos() * pitch.cos(),
        )
    }
}

impl Default for YawPitch {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
        }
    }
}

/// The state of the keyboard and mouse buttons.
pub struct InputState {
    keys: HashMap<u32, ElementState>,
    mouse_buttons: HashMap<MouseButton, ElementState>,
    modifiers_state: ModifiersState,
}

impl InputState {
    pub fn new() -> InputState {
        Self {
            keys: HashMap::new(),
            mouse_buttons: HashMap::new(),
            modifiers_state: ModifiersState::default(),
        }
    }

    /// Process a keyboard input, returning whether the state of the key changed or not
    pub fn process_keyboard_input(&mut self, input: KeyboardInput) -> bool {
        let previous_state = self.keys.get(&input.scancode).cloned();
        self.keys.insert(input.scancode, input.state);
        previous_state != Some(input.state)
    }

    /// Process a mouse input, returning whether the state of the button changed or not
    pub fn process_mouse_input(&mut self, state: ElementState, button: MouseButton) -> bool {
        let previous_state = self.mouse_buttons.get(&button).cloned();
        self.mouse_buttons.insert(button, state);
        previous_state != Some(state)
    }

    /// Update the modifiers
    pub fn set_modifiers_state(&mut self, modifiers_state: ModifiersState) {
        self.modifiers_state = modifiers_state;
    }

    pub fn get_modifiers_state(&self) -> ModifiersState {
        self.modifiers_state
    }

    pub fn get_key_state(&self, scancode: u32) -> ElementState {
        self.keys
            .get(&scancode)
            .cloned()
            .unwrap_or(ElementState::Released)
    }

    pub fn clear(&mut self) {
        self.keys.clear();
        self.mouse_buttons.clear();
        self.modifiers_state = ModifiersState::default();
    }

    fn is_key_pressed(&self, scancode: u32) -> bool {
        match self.get_key_state(scancode) {
            ElementState::Pressed => true,
            ElementState::Released => false,
        }
    }

    /// Snapshot of the held movement keys for one physics frame.
    ///
    /// The jump edge is not part of the snapshot: fresh jump presses arrive
    /// through the per-tick key state changes and arm the simulation trigger
    /// directly, so holding the key never re-arms it.
    pub fn get_walk_input(&self, yaw: f64, allow_movement: bool) -> PlayerInput {
        PlayerInput {
            key_move_forward: allow_movement
                && (self.is_key_pressed(MOVE_FORWARD) || self.is_key_pressed(ARROW_UP)),
            key_move_left: allow_movement
                && (self.is_key_pressed(MOVE_LEFT) || self.is_key_pressed(ARROW_LEFT)),
            key_move_backward: allow_movement
                && (self.is_key_pressed(MOVE_BACKWARD) || self.is_key_pressed(ARROW_DOWN)),
            key_move_right: allow_movement
                && (self.is_key_pressed(MOVE_RIGHT) || self.is_key_pressed(ARROW_RIGHT)),
            key_jump: false,
            yaw,
        }
    }
}

pub const MOVE_FORWARD: u32 = 17;
pub const MOVE_LEFT: u32 = 30;
pub const MOVE_BACKWARD: u32 = 31;
pub const MOVE_RIGHT: u32 = 32;
pub const JUMP: u32 = 57;
pub const RELEASE_LOOK: u32 = 1;
pub const ARROW_UP: u32 = 103;
pub const ARROW_LEFT: u32 = 105;
pub const ARROW_RIGHT: u32 = 106;
pub const ARROW_DOWN: u32 = 108;

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(deprecated)]
    fn key(scancode: u32, state: ElementState) -> KeyboardInput {
        KeyboardInput {
            scancode,
            state,
            virtual_keycode: None,
            modifiers: ModifiersState::default(),
        }
    }

    #[test]
    fn repeated_key_events_are_not_state_changes() {
        let mut input_state = InputState::new();
        assert!(input_state.process_keyboard_input(key(JUMP, ElementState::Pressed)));
        // OS key repeat delivers more pressed events; they change nothing.
        assert!(!input_state.process_keyboard_input(key(JUMP, ElementState::Pressed)));
        assert!(input_state.process_keyboard_input(key(JUMP, ElementState::Released)));
        assert!(input_state.process_keyboard_input(key(JUMP, ElementState::Pressed)));
    }

    #[test]
    fn arrows_and_wasd_both_walk() {
        let mut input_state = InputState::new();
        input_state.process_keyboard_input(key(ARROW_UP, ElementState::Pressed));
        assert!(input_state.get_walk_input(0.0, true).key_move_forward);

        let mut input_state = InputState::new();
        input_state.process_keyboard_input(key(MOVE_FORWARD, ElementState::Pressed));
        assert!(input_state.get_walk_input(0.0, true).key_move_forward);
    }

    #[test]
    fn movement_is_masked_while_the_look_control_is_disengaged() {
        let mut input_state = InputState::new();
        input_state.process_keyboard_input(key(MOVE_FORWARD, ElementState::Pressed));
        let snapshot = input_state.get_walk_input(0.0, false);
        assert!(!snapshot.key_move_forward);
    }

    #[test]
    fn the_pitch_clamps_and_the_yaw_wraps() {
        let mut yaw_pitch = YawPitch::default();
        yaw_pitch.update_cursor(0.0, -10_000.0, 0.2, false);
        assert_eq!(yaw_pitch.pitch, 90.0);
        yaw_pitch.update_cursor(0.0, 10_000.0, 0.2, false);
        assert_eq!(yaw_pitch.pitch, -90.0);

        let mut yaw_pitch = YawPitch::default();
        yaw_pitch.update_cursor(-950.0, 0.0, 0.2, false);
        assert!(yaw_pitch.yaw >= -180.0 && yaw_pitch.yaw <= 180.0);
    }

    #[test]
    fn the_view_direction_follows_the_yaw() {
        let ahead = YawPitch { yaw: 0.0, pitch: 0.0 };
        let dir = ahead.view_dir();
        assert!((dir.z - -1.0).abs() < 1e-12);
        assert!(dir.x.abs() < 1e-12);

        let up = YawPitch { yaw: 0.0, pitch: 90.0 };
        assert!((up.view_dir().y - 1.0).abs() < 1e-12);
    }
}
