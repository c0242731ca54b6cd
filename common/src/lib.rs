pub mod debug;
pub mod physics;
pub mod player;
pub mod time;
pub mod world;
pub mod worldgen;
