//! Replace mode: swap one block type for another inside the selection

use crate::core::{Error, Result};
use crate::selection::Selection;
use crate::voxel::block::{BlockId, BlockInfo, BlockTypes};
use crate::voxel::chunk::{Chunk, ChunkPos};
use crate::voxel::world::Dimension;
use super::mode::{BrushMode, ModeCapabilities};
use super::options::{BrushOptions, ModeOptions};
use super::progress::{ChunkSteps, ProgressIter};

pub const REPLACE_MESSAGE: &str = "Applying replace brush";

#[derive(Clone, Debug, PartialEq)]
pub struct ReplaceMode {
    find: BlockInfo,
    replace_with: BlockInfo,
}

impl ReplaceMode {
    pub const NAME: &'static str = "replace";

    /// Replace stone with dirt
    pub fn new(blocks: &BlockTypes) -> Result<Self> {
        let lookup = |name: &str| {
            blocks
                .get(name)
                .ok_or_else(|| Error::UnknownBlock(name.to_string()))
        };
        Ok(Self {
            find: lookup("minecraft:stone")?,
            replace_with: lookup("minecraft:dirt")?,
        })
    }

    pub fn with_blocks(find: BlockInfo, replace_with: BlockInfo) -> Self {
        Self { find, replace_with }
    }

    pub fn find(&self) -> &BlockInfo {
        &self.find
    }

    pub fn replace_with(&self) -> &BlockInfo {
        &self.replace_with
    }

    pub fn set_blocks(&mut self, find: BlockInfo, replace_with: BlockInfo) {
        self.find = find;
        self.replace_with = replace_with;
    }
}

/// Rewrite selected voxels equal to `find`. Absent sections are skipped, never
/// created. Returns how many voxels changed.
pub fn replace_in_chunk(
    chunk: &mut Chunk,
    selection: &dyn Selection,
    pos: ChunkPos,
    find: BlockId,
    replace_with: BlockId,
) -> usize {
    if find == replace_with {
        return 0;
    }
    let mut changed = 0;
    for cy in selection.section_positions(pos) {
        let Some(section) = chunk.section_mut(cy) else {
            continue;
        };
        let mask = selection.section_mask(pos, cy);
        for (slot, selected) in section.blocks_mut().iter_mut().zip(mask.bits().iter()) {
            if *selected && *slot == find {
                *slot = replace_with;
                changed += 1;
            }
        }
    }
    changed
}

impl BrushMode for ReplaceMode {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn display_name(&self) -> &str {
        "Replace"
    }

    fn capabilities(&self) -> ModeCapabilities {
        ModeCapabilities {
            point_apply: false,
            selection_apply: true,
            preview: false,
        }
    }

    fn options(&self) -> ModeOptions {
        ModeOptions::Replace {
            find: self.find.clone(),
            replace_with: self.replace_with.clone(),
        }
    }

    fn set_options(&mut self, options: ModeOptions) -> Result<()> {
        match options {
            ModeOptions::Replace { find, replace_with } => {
                self.find = find;
                self.replace_with = replace_with;
                Ok(())
            }
            _ => Err(Error::MissingOption("replaceBlocks")),
        }
    }

    fn apply_to_selection<'w>(
        &self,
        world: &'w mut dyn Dimension,
        selection: Box<dyn Selection + 'w>,
        options: &BrushOptions,
    ) -> Result<ProgressIter<'w>> {
        let (find, replace_with) = options.replace_blocks()?;
        Ok(Box::new(ChunkSteps::new(world, selection, REPLACE_MESSAGE, move |world, selection, pos| {
            if !world.contains_chunk(pos) {
                return;
            }
            let Some(chunk) = world.chunk_mut(pos) else {
                return;
            };
            let changed = replace_in_chunk(chunk, selection, pos, find, replace_with);
            if changed > 0 {
                chunk.dirty = true;
                log::debug!("replace: {} blocks in chunk ({}, {})", changed, pos.x, pos.z);
            }
        })))
    }
}
