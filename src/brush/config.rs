//! Brush configuration file (JSON)

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};
use crate::selection::BrushShape;
use crate::voxel::biome::{BiomeId, BiomeTypes};
use crate::voxel::block::{BlockInfo, BlockTypes};
use super::biome::BiomeMode;
use super::driver::BrushDriver;
use super::fill::{FillMode, DEFAULT_FILL_BLOCK};
use super::mode::mode_by_name;
use super::options::ModeOptions;
use super::replace::ReplaceMode;

/// Serializable brush settings. Every field has a default, so a partial file
/// only overrides what it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushConfig {
    /// Mode name: `fill`, `replace` or `biome`
    pub mode: String,
    pub shape: BrushShape,
    pub brush_size: [f32; 3],
    pub fill_block: String,
    pub replace_find: String,
    pub replace_with: String,
    pub biome: BiomeId,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            mode: FillMode::NAME.to_string(),
            shape: BrushShape::Square,
            brush_size: [5.0; 3],
            fill_block: DEFAULT_FILL_BLOCK.to_string(),
            replace_find: "minecraft:stone".to_string(),
            replace_with: "minecraft:dirt".to_string(),
            biome: BiomeTypes::new().first(),
        }
    }
}

impl BrushConfig {
    /// Parse from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded brush config from {}", path.display());
        Ok(config)
    }

    /// Save as pretty-printed JSON, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn brush_size(&self) -> Vec3 {
        Vec3::from_array(self.brush_size)
    }

    /// Build a driver, resolving names against the registries
    pub fn into_driver(self, blocks: &BlockTypes) -> Result<BrushDriver> {
        let mut mode = mode_by_name(&self.mode, blocks)?;
        let options = match mode.name() {
            FillMode::NAME => ModeOptions::Fill {
                block: lookup_block(blocks, &self.fill_block)?,
            },
            ReplaceMode::NAME => ModeOptions::Replace {
                find: lookup_block(blocks, &self.replace_find)?,
                replace_with: lookup_block(blocks, &self.replace_with)?,
            },
            BiomeMode::NAME => {
                let catalog = BiomeTypes::new();
                let biome = catalog
                    .get(self.biome)
                    .ok_or(Error::UnknownBiome(self.biome.0))?;
                ModeOptions::Biome { biome: biome.id }
            }
            _ => mode.options(),
        };
        mode.set_options(options)?;

        BrushDriver::new(mode)
            .with_shape(self.shape)
            .with_brush_size(self.brush_size())
    }
}

fn lookup_block(blocks: &BlockTypes, name: &str) -> Result<BlockInfo> {
    blocks
        .get(name)
        .ok_or_else(|| Error::UnknownBlock(name.to_string()))
}
