use crate::{input::InputState, settings::Settings};
use anyhow::Result;
use log::{info, warn};
use winit::dpi::{LogicalSize, PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, MouseButton};
use winit::event_loop::ControlFlow;
use winit::window::Window;

/// A closure that creates a new instance of `State`.
pub type StateFactory = Box<dyn FnOnce(&mut Settings) -> Result<Box<dyn State>>>;

/// A transition from one state to another.
pub enum StateTransition {
    /// Don't transition, keep the current state.
    KeepCurrent,
    /// Don't transition, close the current window.
    #[allow(dead_code)]
    CloseWindow,
}

/// Read-only data that is provided to the states.
#[derive(Debug, Clone)]
pub struct WindowData {
    /// Logical size of the window. See [the winit documentation](winit::dpi).
    pub logical_window_size: LogicalSize<f64>,
    /// Physical size of the window.
    pub physical_window_size: PhysicalSize<u32>,
    /// HiDpi factor of the window.
    pub hidpi_factor: f64,
    /// `true` if the window is currently focused
    pub focused: bool,
}

/// Read-write data of the window that the states can modify.
#[derive(Debug, Clone)]
pub struct WindowFlags {
    /// `true` if the cursor should be grabbed, hidden and centered.
    pub grab_cursor: bool,
    /// Window title
    pub window_title: String,
}

/// A window state. It has full control over the simulation driven by the
/// window's event loop. Timing is not passed in: states that integrate over
/// time own their clock, so time never silently advances while a state
/// considers itself paused.
pub trait State {
    /// Update once per event-loop tick.
    fn update(
        &mut self,
        settings: &mut Settings,
        input_state: &InputState,
        data: &WindowData,
        flags: &mut WindowFlags,
    ) -> Result<StateTransition>;
    /// Raw mouse motion
    fn handle_mouse_motion(&mut self, settings: &Settings, delta: (f64, f64));
    /// Mouse clicked
    fn handle_mouse_state_changes(
        &mut self,
        input_state: &InputState,
        changes: Vec<(MouseButton, ElementState)>,
    );
    /// Key pressed
    fn handle_key_state_changes(&mut self, changes: Vec<(u32, ElementState)>);
}

/// Open a new window with the given settings and the given initial state
pub fn open_window(mut settings: Settings, initial_state: StateFactory) -> ! {
    info!("Opening new window...");
    let window_title = "sandvox".to_owned();
    let event_loop = winit::event_loop::EventLoop::new();
    let window = Window::new(&event_loop).expect("Failed to create window");
    window.set_title(&window_title);
    let (width, height) = settings.window_size;
    window.set_inner_size(PhysicalSize::new(width, height));

    let mut window_data = {
        let physical_window_size = window.inner_size();
        let hidpi_factor = window.scale_factor();
        let logical_window_size = physical_window_size.to_logical(hidpi_factor);
        WindowData {
            logical_window_size,
            physical_window_size,
            hidpi_factor,
            focused: false,
        }
    };

    let mut input_state = InputState::new();

    let mut window_flags = WindowFlags {
        grab_cursor: false,
        window_title,
    };

    let mut state = initial_state(&mut settings).expect("Failed to create initial window state");

    info!("Done initializing the window. Starting the main loop...");

    let mut window_resized = false;
    let mut mouse_state_changes = Vec::new();
    let mut key_state_changes = Vec::new();

    event_loop.run(move |event, _, control_flow| {
        use winit::event::Event::*;
        match event {
            /* NORMAL EVENT HANDLING */
            WindowEvent { event, .. } => {
                use winit::event::WindowEvent::*;
                match event {
                    Resized(_) | ScaleFactorChanged { .. } => window_resized = true,
                    CloseRequested | Destroyed => *control_flow = ControlFlow::Exit,
                    Focused(focused) => {
                        window_data.focused = focused;
                        input_state.clear();
                    }
                    KeyboardInput { input, .. } => {
                        if input_state.process_keyboard_input(input) {
                            key_state_changes.push((input.scancode, input.state));
                        }
                    }
                    MouseInput {
                        button,
                        state: element_state,
                        ..
                    } => {
                        if input_state.process_mouse_input(element_state, button) {
                            mouse_state_changes.push((button, element_state));
                        }
                    }
                    ModifiersChanged(modifiers_state) => {
                        input_state.set_modifiers_state(modifiers_state)
                    }
                    _ => (),
                }
            }
            DeviceEvent { event, .. } => {
                if !window_data.focused {
                    return;
                }
                use winit::event::DeviceEvent::*;
                match event {
                    MouseMotion { delta } => state.handle_mouse_motion(&settings, delta),
                    _ => (),
                }
            }
            /* MAIN LOOP TICK */
            MainEventsCleared => {
                if window_resized {
                    window_data.physical_window_size = window.inner_size();
                    window_data.hidpi_factor = window.scale_factor();
                    window_data.logical_window_size = window_data
                        .physical_window_size
                        .to_logical(window_data.hidpi_factor);
                }
                window_resized = false;

                // Hand the batched input changes to the state, then update.
                let changes = std::mem::replace(&mut mouse_state_changes, Vec::new());
                state.handle_mouse_state_changes(&input_state, changes);
                let changes = std::mem::replace(&mut key_state_changes, Vec::new());
                state.handle_key_state_changes(changes);
                let state_transition = state
                    .update(&mut settings, &input_state, &window_data, &mut window_flags)
                    .expect("Failed to `update` the current window state");

                // Update window flags
                window.set_title(&window_flags.window_title);
                if window_flags.grab_cursor && window_data.focused {
                    window.set_cursor_visible(false);
                    let PhysicalSize { width, height } = window_data.physical_window_size;
                    let center_pos = PhysicalPosition {
                        x: width / 2,
                        y: height / 2,
                    };
                    match window.set_cursor_grab(true) {
                        Err(err) => warn!("Failed to grab cursor ({:?})", err),
                        _ => (),
                    }
                    match window.set_cursor_position(center_pos) {
                        Err(err) => warn!("Failed to center cursor ({:?})", err),
                        _ => (),
                    }
                } else {
                    window.set_cursor_visible(true);
                    match window.set_cursor_grab(false) {
                        Err(err) => warn!("Failed to ungrab cursor ({:?})", err),
                        _ => (),
                    }
                }

                match state_transition {
                    StateTransition::KeepCurrent => (),
                    StateTransition::CloseWindow => {
                        *control_flow = ControlFlow::Exit;
                    }
                }
            }
            _ => (),
        }
    });
}
