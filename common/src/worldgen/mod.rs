//! Initial world population.

use crate::world::{Material, World};
use log::info;
use rand::Rng;

/// Probability that a ground column gets a grass block on top.
const SPRINKLE_CHANCE: f64 = 0.3;

/// Generate the starting world: a flat `size` x `size` dirt floor at y = 0
/// with a random sprinkling of grass blocks at y = 1.
///
/// The caller provides the RNG so that worlds can be reproduced from a seed.
pub fn generate_flat_world<R: Rng>(size: u32, rng: &mut R) -> World {
    let mut world = World::new();
    for x in 0..size as i64 {
        for z in 0..size as i64 {
            world.try_place((x, 0, z).into(), Material::Dirt);
            if rng.gen::<f64>() < SPRINKLE_CHANCE {
                world.try_place((x, 1, z).into(), Material::Grass);
            }
        }
    }
    info!("Generated a flat {0}x{0} world with {1} blocks", size, world.len());
    world
}
