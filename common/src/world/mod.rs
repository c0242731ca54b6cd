use nalgebra::Vector3;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

pub mod edit;
pub mod raycast;

/// Edge length of a block cube.
pub const BLOCK_SIZE: f64 = 1.0;

/// The position of a block in the world.
///
/// A block occupies the unit cube centered on its position, so two blocks
/// whose positions differ by one unit along an axis share a face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockPos {
    pub px: i64,
    pub py: i64,
    pub pz: i64,
}

impl BlockPos {
    /// Center of the block in continuous space.
    pub fn center(self) -> Vector3<f64> {
        Vector3::new(self.px as f64, self.py as f64, self.pz as f64)
    }

    /// The position one step along an axis-aligned face normal.
    pub fn neighbor(self, normal: Vector3<i64>) -> BlockPos {
        BlockPos {
            px: self.px + normal.x,
            py: self.py + normal.y,
            pz: self.pz + normal.z,
        }
    }
}

impl From<(i64, i64, i64)> for BlockPos {
    fn from((px, py, pz): (i64, i64, i64)) -> Self {
        Self { px, py, pz }
    }
}

/// The material tag of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Material {
    Dirt,
    Grass,
}

/// The material of every block placed by the player.
pub const PLACED_MATERIAL: Material = Material::Grass;

/// A block that has been placed in the world. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub pos: BlockPos,
    pub material: Material,
}

/// The set of placed blocks, unique by position.
///
/// The position index makes membership, insertion and removal O(1); the
/// uniqueness invariant is checked on every insertion.
pub struct World {
    blocks: HashMap<BlockPos, Block>,
}

impl World {
    pub fn new() -> Self {
        Self {
            blocks: HashMap::new(),
        }
    }

    /// Number of blocks currently placed.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Return the block at `pos` if there is one.
    pub fn block_at(&self, pos: BlockPos) -> Option<&Block> {
        self.blocks.get(&pos)
    }

    /// Iterate over all placed blocks.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.values()
    }

    /// Insert a block unless its position is already occupied.
    /// Return whether the block was actually inserted.
    pub fn try_place(&mut self, pos: BlockPos, material: Material) -> bool {
        match self.blocks.entry(pos) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(Block { pos, material });
                true
            }
        }
    }

    /// Remove and return the block at `pos`.
    ///
    /// Positions are unique, so the position reported by a ray hit identifies
    /// exactly the intersected block.
    pub fn break_block(&mut self, pos: BlockPos) -> Option<Block> {
        self.blocks.remove(&pos)
    }
}
