use anyhow::Result;
use log::info;
use std::path::Path;

mod fps;
mod game;
mod input;
mod settings;
mod window;

fn main() -> Result<()> {
    env_logger::init();

    info!("Starting up...");
    let config_folder = Path::new("config");
    let config_file = Path::new("config/settings.toml");
    let settings = settings::load_settings(&config_folder, &config_file)?;
    info!("Current settings: {:?}", settings);

    window::open_window(settings, Box::new(game::GameState::new_factory()))
}
