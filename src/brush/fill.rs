//! Fill mode: set every selected voxel to one block type

use glam::Vec3;

use crate::core::{Error, Result};
use crate::selection::{BrushShape, Selection};
use crate::voxel::block::{BlockInfo, BlockTypes};
use crate::voxel::fill::fill_blocks_iter;
use crate::voxel::world::Dimension;
use super::cursor::MaskLevel;
use super::mode::{BrushMode, ModeCapabilities};
use super::options::{BrushOptions, ModeOptions};
use super::progress::ProgressIter;

pub const DEFAULT_FILL_BLOCK: &str = "minecraft:stone";

#[derive(Clone, Debug, PartialEq)]
pub struct FillMode {
    block: BlockInfo,
}

impl FillMode {
    pub const NAME: &'static str = "fill";

    /// Fill mode painting stone
    pub fn new(blocks: &BlockTypes) -> Result<Self> {
        let block = blocks
            .get(DEFAULT_FILL_BLOCK)
            .ok_or_else(|| Error::UnknownBlock(DEFAULT_FILL_BLOCK.to_string()))?;
        Ok(Self { block })
    }

    pub fn with_block(block: BlockInfo) -> Self {
        Self { block }
    }

    pub fn block(&self) -> &BlockInfo {
        &self.block
    }

    pub fn set_block(&mut self, block: BlockInfo) {
        self.block = block;
    }
}

impl BrushMode for FillMode {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn display_name(&self) -> &str {
        "Fill"
    }

    fn capabilities(&self) -> ModeCapabilities {
        ModeCapabilities {
            point_apply: false,
            selection_apply: true,
            preview: true,
        }
    }

    fn options(&self) -> ModeOptions {
        ModeOptions::Fill {
            block: self.block.clone(),
        }
    }

    fn set_options(&mut self, options: ModeOptions) -> Result<()> {
        match options {
            ModeOptions::Fill { block } => {
                self.block = block;
                Ok(())
            }
            _ => Err(Error::MissingOption("blockInfo")),
        }
    }

    fn apply_to_selection<'w>(
        &self,
        world: &'w mut dyn Dimension,
        selection: Box<dyn Selection + 'w>,
        options: &BrushOptions,
    ) -> Result<ProgressIter<'w>> {
        let block = options.fill_block()?;
        Ok(fill_blocks_iter(world, selection, block))
    }

    fn create_cursor_level(
        &self,
        shape: BrushShape,
        options: &BrushOptions,
        blocks: &BlockTypes,
    ) -> Result<Option<MaskLevel>> {
        let (bounds, _) = self.brush_box_for_point(Vec3::ZERO, options)?;
        let selection = shape.create_shaped_selection(&bounds);
        Ok(Some(MaskLevel::new(&selection, &self.block, blocks, None)))
    }
}
