//! Click-driven edits: break the pointed block or place a new one against
//! the pointed face.

use super::raycast::Ray;
use super::{Block, BlockPos, World, PLACED_MATERIAL};

/// What a click should do to the pointed block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    /// Remove the pointed block.
    Break,
    /// Place a new block against the pointed face.
    Place,
}

/// The result of applying one click to the world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditOutcome {
    /// The ray hit nothing; the world is unchanged.
    NoTarget,
    /// This block was removed.
    Broken(Block),
    /// A block was placed at this position.
    Placed(BlockPos),
    /// The candidate position was already occupied; the world is unchanged.
    Occupied(BlockPos),
}

/// Apply a single click to the world.
///
/// The ray is cast through the viewport center, so it starts at the camera
/// position and follows the camera's forward direction. Every failure is a
/// plain no-op: no hit, or placing into an occupied position.
pub fn apply_click(world: &mut World, ray: &Ray, action: ClickAction) -> EditOutcome {
    let hit = match world.pointed_block(ray) {
        Some(hit) => hit,
        None => return EditOutcome::NoTarget,
    };
    match action {
        ClickAction::Break => match world.break_block(hit.pos) {
            Some(block) => EditOutcome::Broken(block),
            // The hit position came from the world itself, so this only
            // happens if the set was mutated between the cast and the edit.
            None => EditOutcome::NoTarget,
        },
        ClickAction::Place => {
            let pos = hit.pos.neighbor(hit.face);
            if world.try_place(pos, PLACED_MATERIAL) {
                EditOutcome::Placed(pos)
            } else {
                EditOutcome::Occupied(pos)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Material;
    use nalgebra::Vector3;

    fn down_ray(x: f64, z: f64) -> Ray {
        Ray {
            origin: Vector3::new(x, 5.0, z),
            dir: Vector3::new(0.0, -1.0, 0.0),
        }
    }

    #[test]
    fn breaking_removes_the_pointed_block() {
        let mut world = World::new();
        world.try_place((0, 0, 0).into(), Material::Dirt);
        world.try_place((1, 0, 0).into(), Material::Dirt);

        let outcome = apply_click(&mut world, &down_ray(1.0, 0.0), ClickAction::Break);
        match outcome {
            EditOutcome::Broken(block) => assert_eq!(block.pos, (1, 0, 0).into()),
            other => panic!("expected a break, got {:?}", other),
        }
        assert_eq!(world.len(), 1);
        assert!(world.block_at((0, 0, 0).into()).is_some());
    }

    #[test]
    fn placing_stacks_a_block_on_the_pointed_face() {
        let mut world = World::new();
        world.try_place((0, 0, 0).into(), Material::Dirt);

        let outcome = apply_click(&mut world, &down_ray(0.0, 0.0), ClickAction::Place);
        assert_eq!(outcome, EditOutcome::Placed((0, 1, 0).into()));
        assert_eq!(world.len(), 2);
        assert_eq!(world.block_at((0, 1, 0).into()).unwrap().material, PLACED_MATERIAL);
    }

    #[test]
    fn placing_into_an_occupied_position_changes_nothing() {
        let mut world = World::new();
        world.try_place((2, 0, 0).into(), Material::Dirt);
        world.try_place((3, 0, 0).into(), Material::Dirt);

        // With the camera buried inside the block at (2, 0, 0), that block
        // is not a hit and the pointed face of (3, 0, 0) is their shared
        // face, so the candidate position is the occupied (2, 0, 0).
        let buried_ray = Ray {
            origin: Vector3::new(2.0, 0.0, 0.0),
            dir: Vector3::new(1.0, 0.0, 0.0),
        };

        let before = world.len();
        let outcome = apply_click(&mut world, &buried_ray, ClickAction::Place);
        assert_eq!(outcome, EditOutcome::Occupied((2, 0, 0).into()));
        assert_eq!(world.len(), before);
    }

    #[test]
    fn clicking_at_nothing_is_a_no_op() {
        let mut world = World::new();
        world.try_place((0, 0, 0).into(), Material::Dirt);

        let up_ray = Ray {
            origin: Vector3::new(0.0, 5.0, 0.0),
            dir: Vector3::new(0.0, 1.0, 0.0),
        };
        assert_eq!(apply_click(&mut world, &up_ray, ClickAction::Break), EditOutcome::NoTarget);
        assert_eq!(apply_click(&mut world, &up_ray, ClickAction::Place), EditOutcome::NoTarget);
        assert_eq!(world.len(), 1);
    }

    #[test]
    fn place_then_break_round_trips() {
        let mut world = World::new();
        world.try_place((0, 0, 0).into(), Material::Dirt);

        let outcome = apply_click(&mut world, &down_ray(0.0, 0.0), ClickAction::Place);
        let placed = match outcome {
            EditOutcome::Placed(pos) => pos,
            other => panic!("expected a placement, got {:?}", other),
        };
        // The new block is now the nearest hit of the same ray.
        let outcome = apply_click(&mut world, &down_ray(0.0, 0.0), ClickAction::Break);
        match outcome {
            EditOutcome::Broken(block) => assert_eq!(block.pos, placed),
            other => panic!("expected a break, got {:?}", other),
        }
        assert_eq!(world.len(), 1);
        assert!(world.block_at((0, 0, 0).into()).is_some());
    }
}
