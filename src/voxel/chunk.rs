//! Chunk columns: vertical sections plus a per-column biome array

use std::ops::Range;

use super::biome::BiomeId;
use super::block::BlockId;
use super::section::Section;

/// Width of a chunk in voxels along X and Z
pub const CHUNK_WIDTH: i32 = 16;

/// Height of a section in voxels
pub const SECTION_HEIGHT: i32 = 16;

/// Number of horizontal columns in a chunk
pub const COLUMN_COUNT: usize = (CHUNK_WIDTH * CHUNK_WIDTH) as usize;

/// Horizontal coordinate identifying a chunk in the world grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkPos {
    pub x: i32,
    pub z: i32,
}

impl ChunkPos {
    pub fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Chunk containing the given block column
    pub fn from_block(x: i32, z: i32) -> Self {
        Self {
            x: x.div_euclid(CHUNK_WIDTH),
            z: z.div_euclid(CHUNK_WIDTH),
        }
    }

    /// Block coordinates of this chunk's minimum corner
    pub fn block_origin(&self) -> (i32, i32) {
        (self.x * CHUNK_WIDTH, self.z * CHUNK_WIDTH)
    }
}

impl From<(i32, i32)> for ChunkPos {
    fn from((x, z): (i32, i32)) -> Self {
        Self::new(x, z)
    }
}

/// Index of a column in the biome array, laid out `(z, x)`.
#[inline]
pub fn column_index(x: usize, z: usize) -> usize {
    debug_assert!(x < 16 && z < 16);
    (z << 4) | x
}

/// A chunk column spanning a fixed range of sections
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chunk {
    pub pos: ChunkPos,
    /// Index of the lowest section slot
    min_section: i32,
    /// One slot per section; `None` for sections that were never generated
    sections: Vec<Option<Section>>,
    biomes: [BiomeId; COLUMN_COUNT],
    /// Set whenever block or biome data changes; the persistence layer clears it
    pub dirty: bool,
}

impl Chunk {
    /// Create a chunk with every section absent
    pub fn new(pos: ChunkPos, min_section: i32, section_count: usize) -> Self {
        Self {
            pos,
            min_section,
            sections: vec![None; section_count],
            biomes: [BiomeId::default(); COLUMN_COUNT],
            dirty: false,
        }
    }

    /// Section indices this chunk can hold
    pub fn section_range(&self) -> Range<i32> {
        self.min_section..self.min_section + self.sections.len() as i32
    }

    fn slot(&self, cy: i32) -> Option<usize> {
        if self.section_range().contains(&cy) {
            Some((cy - self.min_section) as usize)
        } else {
            None
        }
    }

    /// Section at `cy`, or `None` if absent or out of range
    pub fn section(&self, cy: i32) -> Option<&Section> {
        let i = self.slot(cy)?;
        self.sections[i].as_ref()
    }

    pub fn section_mut(&mut self, cy: i32) -> Option<&mut Section> {
        let i = self.slot(cy)?;
        self.sections[i].as_mut()
    }

    /// Section at `cy`, creating an air section if absent.
    /// Returns `None` only when `cy` is outside the chunk's range.
    pub fn create_section(&mut self, cy: i32) -> Option<&mut Section> {
        let i = self.slot(cy)?;
        Some(self.sections[i].get_or_insert_with(Section::new))
    }

    /// Indices of sections that are present
    pub fn present_sections(&self) -> impl Iterator<Item = i32> + '_ {
        self.sections
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_some())
            .map(move |(i, _)| self.min_section + i as i32)
    }

    /// Block at local `x`, `z` and world `y`; air when the section is absent
    pub fn block(&self, x: usize, y: i32, z: usize) -> BlockId {
        let cy = y.div_euclid(SECTION_HEIGHT);
        let ly = y.rem_euclid(SECTION_HEIGHT) as usize;
        self.section(cy).map(|s| s.get(x, ly, z)).unwrap_or(BlockId::AIR)
    }

    pub fn biome(&self, x: usize, z: usize) -> BiomeId {
        self.biomes[column_index(x, z)]
    }

    /// Biome array in `(z, x)` order
    pub fn biomes(&self) -> &[BiomeId; COLUMN_COUNT] {
        &self.biomes
    }

    /// Mutable biome array. Callers are responsible for setting `dirty`.
    pub fn biomes_mut(&mut self) -> &mut [BiomeId; COLUMN_COUNT] {
        &mut self.biomes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_pos_from_block() {
        assert_eq!(ChunkPos::from_block(0, 0), ChunkPos::new(0, 0));
        assert_eq!(ChunkPos::from_block(15, 16), ChunkPos::new(0, 1));
        assert_eq!(ChunkPos::from_block(-1, -16), ChunkPos::new(-1, -1));
        assert_eq!(ChunkPos::from_block(-17, 31), ChunkPos::new(-2, 1));
    }

    #[test]
    fn test_block_origin() {
        assert_eq!(ChunkPos::new(2, -1).block_origin(), (32, -16));
    }

    #[test]
    fn test_new_chunk_has_no_sections() {
        let chunk = Chunk::new(ChunkPos::new(0, 0), 0, 16);
        assert_eq!(chunk.section_range(), 0..16);
        assert!(chunk.section(0).is_none());
        assert_eq!(chunk.present_sections().count(), 0);
        assert!(!chunk.dirty);
    }

    #[test]
    fn test_create_section() {
        let mut chunk = Chunk::new(ChunkPos::new(0, 0), -1, 4);
        assert!(chunk.create_section(-1).is_some());
        assert!(chunk.create_section(3).is_none());
        assert!(chunk.create_section(4).is_none());
        assert_eq!(chunk.present_sections().collect::<Vec<_>>(), vec![-1]);
    }

    #[test]
    fn test_block_reads_through_sections() {
        let mut chunk = Chunk::new(ChunkPos::new(0, 0), 0, 16);
        chunk.create_section(4).unwrap().set(1, 0, 2, BlockId(3));
        assert_eq!(chunk.block(1, 64, 2), BlockId(3));
        assert_eq!(chunk.block(1, 65, 2), BlockId::AIR);
        assert_eq!(chunk.block(1, 0, 2), BlockId::AIR);
    }

    #[test]
    fn test_biome_layout() {
        let mut chunk = Chunk::new(ChunkPos::new(0, 0), 0, 16);
        chunk.biomes_mut()[column_index(3, 5)] = BiomeId::FOREST;
        assert_eq!(chunk.biome(3, 5), BiomeId::FOREST);
        assert_eq!(chunk.biome(5, 3), BiomeId::OCEAN);
    }
}
