//! Masked bulk fill over a selection

use crate::brush::progress::{ChunkSteps, ProgressIter};
use crate::selection::Selection;
use super::block::BlockId;
use super::chunk::{Chunk, ChunkPos};
use super::world::Dimension;

pub const FILL_MESSAGE: &str = "Filling blocks";

/// Fill every selected voxel with `block`, one chunk per progress step.
///
/// Chunks missing from the store are skipped. Absent sections inside an
/// existing chunk are created, since filling empty air is the point of a fill.
pub fn fill_blocks_iter<'w>(
    world: &'w mut dyn Dimension,
    selection: Box<dyn Selection + 'w>,
    block: BlockId,
) -> ProgressIter<'w> {
    Box::new(ChunkSteps::new(world, selection, FILL_MESSAGE, move |world, selection, pos| {
        if !world.contains_chunk(pos) {
            log::trace!("fill: chunk ({}, {}) not loaded", pos.x, pos.z);
            return;
        }
        if let Some(chunk) = world.chunk_mut(pos) {
            let changed = fill_chunk(chunk, selection, pos, block);
            if changed > 0 {
                chunk.dirty = true;
                log::debug!("fill: {} blocks in chunk ({}, {})", changed, pos.x, pos.z);
            }
        }
    }))
}

/// Write `block` into the selected voxels of one chunk, returning how many changed.
fn fill_chunk(chunk: &mut Chunk, selection: &dyn Selection, pos: ChunkPos, block: BlockId) -> usize {
    let mut changed = 0;
    for cy in selection.section_positions(pos) {
        let mask = selection.section_mask(pos, cy);
        if mask.is_empty() {
            continue;
        }
        // An absent section already reads as air
        if block == BlockId::AIR && chunk.section(cy).is_none() {
            continue;
        }
        let Some(section) = chunk.create_section(cy) else {
            continue;
        };
        for (slot, selected) in section.blocks_mut().iter_mut().zip(mask.bits().iter()) {
            if *selected && *slot != block {
                *slot = block;
                changed += 1;
            }
        }
    }
    changed
}
