//! World store: chunk lookup used by the brushes, plus an in-memory implementation

use std::collections::HashMap;
use std::ops::Range;

use glam::IVec3;

use super::biome::BiomeId;
use super::block::{BlockId, BlockTypes};
use super::chunk::{Chunk, ChunkPos, CHUNK_WIDTH, SECTION_HEIGHT};

/// Sections per chunk in a default world (256 blocks tall)
pub const DEFAULT_SECTION_COUNT: usize = 16;

/// Chunked voxel storage as seen by the brush engine.
///
/// Brushes only ever mutate chunks that already exist; they never create
/// chunks as a side effect.
pub trait Dimension {
    fn contains_chunk(&self, pos: ChunkPos) -> bool;

    fn chunk(&self, pos: ChunkPos) -> Option<&Chunk>;

    fn chunk_mut(&mut self, pos: ChunkPos) -> Option<&mut Chunk>;

    /// Section indices a chunk in this dimension can hold
    fn section_range(&self) -> Range<i32>;

    fn block_types(&self) -> &BlockTypes;
}

/// One layer of a flat world, bottom to top
#[derive(Clone, Debug)]
pub struct FlatLayer {
    pub block: BlockId,
    pub height: i32,
}

impl FlatLayer {
    pub fn new(block: BlockId, height: i32) -> Self {
        Self { block, height }
    }
}

/// Container for a world composed of chunks held in memory
#[derive(Clone, Debug)]
pub struct ChunkedWorld {
    /// Map from chunk coordinates to loaded chunks
    chunks: HashMap<ChunkPos, Chunk>,
    block_types: BlockTypes,
    min_section: i32,
    section_count: usize,
}

impl ChunkedWorld {
    /// Create an empty world spanning sections `0..16`
    pub fn new(block_types: BlockTypes) -> Self {
        Self::with_section_range(block_types, 0..DEFAULT_SECTION_COUNT as i32)
    }

    /// Create an empty world whose chunks span the given section indices
    pub fn with_section_range(block_types: BlockTypes, sections: Range<i32>) -> Self {
        Self {
            chunks: HashMap::new(),
            block_types,
            min_section: sections.start,
            section_count: sections.len(),
        }
    }

    /// Get the chunk at `pos`, creating an empty one (all sections absent) if needed
    pub fn create_chunk(&mut self, pos: ChunkPos) -> &mut Chunk {
        let (min_section, count) = (self.min_section, self.section_count);
        self.chunks
            .entry(pos)
            .or_insert_with(|| Chunk::new(pos, min_section, count))
    }

    /// Insert a chunk into the world, replacing any chunk at the same position
    pub fn insert_chunk(&mut self, chunk: Chunk) {
        self.chunks.insert(chunk.pos, chunk);
    }

    pub fn remove_chunk(&mut self, pos: ChunkPos) -> Option<Chunk> {
        self.chunks.remove(&pos)
    }

    /// Get the number of loaded chunks
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Loaded chunk positions, sorted
    pub fn chunk_positions(&self) -> Vec<ChunkPos> {
        let mut positions: Vec<ChunkPos> = self.chunks.keys().copied().collect();
        positions.sort();
        positions
    }

    /// Generate a flat chunk at `pos`, stacking `layers` upward from the
    /// bottom of the section range. Sections above the top layer stay absent.
    pub fn generate_flat(&mut self, pos: ChunkPos, layers: &[FlatLayer]) -> &mut Chunk {
        let mut y = self.min_section * SECTION_HEIGHT;
        let chunk = self.create_chunk(pos);
        for layer in layers {
            for _ in 0..layer.height {
                let cy = y.div_euclid(SECTION_HEIGHT);
                let ly = y.rem_euclid(SECTION_HEIGHT) as usize;
                let Some(section) = chunk.create_section(cy) else {
                    break;
                };
                for z in 0..CHUNK_WIDTH as usize {
                    for x in 0..CHUNK_WIDTH as usize {
                        section.set(x, ly, z, layer.block);
                    }
                }
                y += 1;
            }
        }
        chunk
    }

    /// Block at a world position, `None` if its chunk is not loaded
    pub fn block_at(&self, p: IVec3) -> Option<BlockId> {
        let chunk = self.chunks.get(&ChunkPos::from_block(p.x, p.z))?;
        Some(chunk.block(
            p.x.rem_euclid(CHUNK_WIDTH) as usize,
            p.y,
            p.z.rem_euclid(CHUNK_WIDTH) as usize,
        ))
    }

    /// Biome of a world column, `None` if its chunk is not loaded
    pub fn biome_at(&self, x: i32, z: i32) -> Option<BiomeId> {
        let chunk = self.chunks.get(&ChunkPos::from_block(x, z))?;
        Some(chunk.biome(
            x.rem_euclid(CHUNK_WIDTH) as usize,
            z.rem_euclid(CHUNK_WIDTH) as usize,
        ))
    }

    /// Positions of chunks whose dirty flag is set, sorted
    pub fn dirty_chunks(&self) -> Vec<ChunkPos> {
        let mut dirty: Vec<ChunkPos> = self
            .chunks
            .values()
            .filter(|c| c.dirty)
            .map(|c| c.pos)
            .collect();
        dirty.sort();
        dirty
    }

    /// Clear every dirty flag, as the persistence layer would after saving
    pub fn clear_dirty(&mut self) {
        for chunk in self.chunks.values_mut() {
            chunk.dirty = false;
        }
    }
}

impl Dimension for ChunkedWorld {
    fn contains_chunk(&self, pos: ChunkPos) -> bool {
        self.chunks.contains_key(&pos)
    }

    fn chunk(&self, pos: ChunkPos) -> Option<&Chunk> {
        self.chunks.get(&pos)
    }

    fn chunk_mut(&mut self, pos: ChunkPos) -> Option<&mut Chunk> {
        self.chunks.get_mut(&pos)
    }

    fn section_range(&self) -> Range<i32> {
        self.min_section..self.min_section + self.section_count as i32
    }

    fn block_types(&self) -> &BlockTypes {
        &self.block_types
    }
}

/// Layers of a superflat-style test world: bedrock, stone, dirt, grass (top at y = 64)
pub fn default_flat_layers(blocks: &BlockTypes) -> Vec<FlatLayer> {
    let id = |name: &str| blocks.get(name).map(|b| b.id).unwrap_or(BlockId::AIR);
    vec![
        FlatLayer::new(id("minecraft:bedrock"), 1),
        FlatLayer::new(id("minecraft:stone"), 60),
        FlatLayer::new(id("minecraft:dirt"), 3),
        FlatLayer::new(id("minecraft:grass"), 1),
    ]
}
