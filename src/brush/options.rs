//! Brush option records

use glam::Vec3;

use crate::core::{Error, Result};
use crate::voxel::biome::BiomeId;
use crate::voxel::block::{BlockId, BlockInfo};

/// Mode-specific options, as produced by [`super::BrushMode::options`]
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ModeOptions {
    #[default]
    None,
    Fill {
        block: BlockInfo,
    },
    Replace {
        find: BlockInfo,
        replace_with: BlockInfo,
    },
    Biome {
        biome: BiomeId,
    },
}

/// Everything a brush application reads: the brush size plus the active
/// mode's options snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct BrushOptions {
    /// Box extent per axis; fractional sizes are allowed, negatives are not
    pub brush_size: Vec3,
    pub mode: ModeOptions,
}

impl BrushOptions {
    pub fn new(brush_size: Vec3) -> Self {
        Self {
            brush_size,
            mode: ModeOptions::None,
        }
    }

    pub fn with_mode(mut self, mode: ModeOptions) -> Self {
        self.mode = mode;
        self
    }

    /// Block written by a fill
    pub fn fill_block(&self) -> Result<BlockId> {
        match &self.mode {
            ModeOptions::Fill { block } => Ok(block.id),
            _ => Err(Error::MissingOption("blockInfo")),
        }
    }

    /// `(find, replace_with)` for a replace
    pub fn replace_blocks(&self) -> Result<(BlockId, BlockId)> {
        match &self.mode {
            ModeOptions::Replace { find, replace_with } => Ok((find.id, replace_with.id)),
            _ => Err(Error::MissingOption("replaceBlocks")),
        }
    }

    /// Biome stamped by a biome brush
    pub fn biome(&self) -> Result<BiomeId> {
        match &self.mode {
            ModeOptions::Biome { biome } => Ok(*biome),
            _ => Err(Error::MissingOption("biomeID")),
        }
    }
}

impl Default for BrushOptions {
    fn default() -> Self {
        Self::new(Vec3::splat(5.0))
    }
}
