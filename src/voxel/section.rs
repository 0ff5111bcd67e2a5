//! 16x16x16 block storage

use super::block::BlockId;
use super::chunk::{CHUNK_WIDTH, SECTION_HEIGHT};

/// Number of voxels in one section
pub const SECTION_VOLUME: usize = (CHUNK_WIDTH * CHUNK_WIDTH * SECTION_HEIGHT) as usize;

/// Index of a local voxel within a section, laid out `(y, z, x)`.
#[inline]
pub fn section_index(x: usize, y: usize, z: usize) -> usize {
    debug_assert!(x < 16 && y < 16 && z < 16);
    (y << 8) | (z << 4) | x
}

/// One vertical slab of a chunk's block data
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    blocks: Box<[BlockId; SECTION_VOLUME]>,
}

impl Section {
    /// Section full of air
    pub fn new() -> Self {
        Self::filled(BlockId::AIR)
    }

    pub fn filled(block: BlockId) -> Self {
        Self {
            blocks: Box::new([block; SECTION_VOLUME]),
        }
    }

    pub fn get(&self, x: usize, y: usize, z: usize) -> BlockId {
        self.blocks[section_index(x, y, z)]
    }

    pub fn set(&mut self, x: usize, y: usize, z: usize, block: BlockId) {
        self.blocks[section_index(x, y, z)] = block;
    }

    /// Raw block array in `(y, z, x)` order
    pub fn blocks(&self) -> &[BlockId; SECTION_VOLUME] {
        &self.blocks
    }

    pub fn blocks_mut(&mut self) -> &mut [BlockId; SECTION_VOLUME] {
        &mut self.blocks
    }

    /// Count voxels that are not air
    pub fn solid_count(&self) -> usize {
        self.blocks.iter().filter(|b| **b != BlockId::AIR).count()
    }
}

impl Default for Section {
    fn default() -> Self {
        Self::new()
    }
}
