//! Voxel data structures: registries, chunks, sections and the world store

pub mod block;
pub mod biome;
pub mod section;
pub mod chunk;
pub mod world;
pub mod fill;

pub use block::{BlockId, BlockInfo, BlockTypes};
pub use biome::{BiomeId, BiomeType, BiomeTypes};
pub use section::Section;
pub use chunk::{Chunk, ChunkPos, CHUNK_WIDTH, SECTION_HEIGHT};
pub use world::{ChunkedWorld, Dimension, FlatLayer};
pub use fill::fill_blocks_iter;
