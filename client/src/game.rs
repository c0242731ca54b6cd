use crate::{
    fps::FpsCounter,
    input::{InputState, YawPitch, JUMP, RELEASE_LOOK},
    settings::Settings,
    window::{State, StateFactory, StateTransition, WindowData, WindowFlags},
};
use anyhow::Result;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sandvox_common::{
    debug::{send_debug_info, DebugOverlay},
    physics::player::PhysicsPlayer,
    physics::simulation::WalkSimulation,
    world::edit::{apply_click, ClickAction, EditOutcome},
    world::raycast::Ray,
    world::World,
    worldgen::generate_flat_world,
};
use winit::event::{ElementState, MouseButton};

/// State of a running sandbox session.
pub struct GameState {
    world: World,
    simulation: WalkSimulation,
    yaw_pitch: YawPitch,
    /// Whether the look control is engaged (the pointer-lock equivalent).
    /// While disengaged, physics time is paused and clicks only re-engage.
    locked: bool,
    debug_overlay: DebugOverlay,
    fps_counter: FpsCounter,
}

impl GameState {
    pub fn new_factory() -> StateFactory {
        Box::new(move |settings| Self::new(settings))
    }

    pub fn new(settings: &Settings) -> Result<Box<dyn State>> {
        info!("Launching a sandbox session");
        let mut rng = match settings.world_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let world = generate_flat_world(settings.world_size, &mut rng);

        // Spawn at the center of the floor, standing on the ground plane.
        let center = settings.world_size as f64 / 2.0;
        let simulation = WalkSimulation::new(PhysicsPlayer::standing_at(center, center));

        Ok(Box::new(Self {
            world,
            simulation,
            yaw_pitch: YawPitch::default(),
            locked: false,
            debug_overlay: DebugOverlay::new_current(),
            fps_counter: FpsCounter::new(2),
        }))
    }

    /// The ray from the camera through the viewport center.
    fn view_ray(&self) -> Ray {
        Ray {
            origin: self.simulation.player().position,
            dir: self.yaw_pitch.view_dir(),
        }
    }

    fn apply_edit(&mut self, action: ClickAction) {
        let ray = self.view_ray();
        match apply_click(&mut self.world, &ray, action) {
            EditOutcome::NoTarget => debug!("Click at nothing"),
            EditOutcome::Broken(block) => {
                info!("Broke the block at {:?}", block.pos);
            }
            EditOutcome::Placed(pos) => {
                info!("Placed a block at {:?}", pos);
            }
            EditOutcome::Occupied(pos) => {
                debug!("Placement at {:?} rejected: already occupied", pos);
            }
        }
        send_debug_info("World", "blocks", format!("placed blocks = {}", self.world.len()));
    }
}

impl State for GameState {
    fn update(
        &mut self,
        _settings: &mut Settings,
        input_state: &InputState,
        _data: &WindowData,
        flags: &mut WindowFlags,
    ) -> Result<StateTransition> {
        self.fps_counter.add_frame();

        if self.locked {
            let frame_input = input_state.get_walk_input(self.yaw_pitch.yaw, true);
            self.simulation.step(&frame_input);

            let player = self.simulation.player();
            send_debug_info(
                "Player",
                "position",
                format!(
                    "x = {:.2}\ny = {:.2}\nz = {:.2}",
                    player.position.x, player.position.y, player.position.z
                ),
            );
            send_debug_info(
                "Player",
                "yawpitch",
                format!("yaw = {:.0} pitch = {:.0}", self.yaw_pitch.yaw, self.yaw_pitch.pitch),
            );
            match self.world.pointed_block(&self.view_ray()) {
                Some(hit) => send_debug_info(
                    "Player",
                    "pointedat",
                    format!(
                        "Pointed block: ({}, {}, {}), face: ({}, {}, {})",
                        hit.pos.px, hit.pos.py, hit.pos.pz, hit.face.x, hit.face.y, hit.face.z
                    ),
                ),
                None => send_debug_info("Player", "pointedat", "Pointed block: None"),
            }
        } else {
            // Input keeps accumulating, but physics time must not.
            self.simulation.pause();
        }
        send_debug_info("Player", "fps", format!("fps = {}", self.fps_counter.fps()));

        for (line, message) in self.debug_overlay.poll_changes() {
            debug!("[{}] {}", line, message.replace('\n', " "));
        }

        flags.grab_cursor = self.locked;
        Ok(StateTransition::KeepCurrent)
    }

    fn handle_mouse_motion(&mut self, settings: &Settings, delta: (f64, f64)) {
        if self.locked {
            self.yaw_pitch.update_cursor(
                delta.0,
                delta.1,
                settings.mouse_sensitivity,
                settings.invert_mouse,
            );
        }
    }

    fn handle_mouse_state_changes(
        &mut self,
        input_state: &InputState,
        changes: Vec<(MouseButton, ElementState)>,
    ) {
        for (button, state) in changes {
            match (button, state) {
                (MouseButton::Left, ElementState::Pressed) => {
                    if !self.locked {
                        info!("Look control engaged");
                        self.locked = true;
                    } else if input_state.get_modifiers_state().shift() {
                        self.apply_edit(ClickAction::Place);
                    } else {
                        self.apply_edit(ClickAction::Break);
                    }
                }
                _ => {}
            }
        }
    }

    fn handle_key_state_changes(&mut self, changes: Vec<(u32, ElementState)>) {
        for (scancode, state) in changes {
            if state != ElementState::Pressed {
                continue;
            }
            match scancode {
                RELEASE_LOOK => {
                    if self.locked {
                        info!("Look control released");
                        self.locked = false;
                    }
                }
                // A fresh press arms exactly one jump; key repeat is already
                // filtered out of the change list.
                JUMP => {
                    if self.locked {
                        self.simulation.queue_jump();
                    }
                }
                _ => {}
            }
        }
    }
}
