//! Biome mode: stamp a biome id onto the columns a selection covers

use glam::Vec3;

use crate::core::{Error, Result};
use crate::math::Aabb;
use crate::selection::{BrushShape, ColumnMask, Selection};
use crate::voxel::biome::{BiomeId, BiomeTypes};
use crate::voxel::block::BlockTypes;
use crate::voxel::chunk::{Chunk, ChunkPos};
use crate::voxel::world::Dimension;
use super::cursor::MaskLevel;
use super::geometry::compute_brush_box;
use super::mode::{BrushMode, ModeCapabilities};
use super::options::{BrushOptions, ModeOptions};
use super::progress::{ChunkSteps, ProgressIter};

pub const BIOME_MESSAGE: &str = "Applying biome brush";

/// Block used to render the biome brush cursor
pub const BIOME_CURSOR_BLOCK: &str = "minecraft:grass";

/// Write `biome` into every column of `chunk` that a present selected section
/// projects onto.
///
/// Absent sections contribute nothing. Returns whether any section was
/// present; only then is the biome array written and the chunk marked dirty.
pub fn paint_biome_columns(
    chunk: &mut Chunk,
    selection: &dyn Selection,
    pos: ChunkPos,
    biome: BiomeId,
) -> bool {
    let mut columns: Option<ColumnMask> = None;
    for cy in selection.section_positions(pos) {
        if chunk.section(cy).is_none() {
            log::trace!("biome: section {} of chunk ({}, {}) absent", cy, pos.x, pos.z);
            continue;
        }
        let projected = selection.section_mask(pos, cy).collapse_columns();
        *columns.get_or_insert_with(ColumnMask::empty) |= projected;
    }

    let Some(columns) = columns else {
        return false;
    };
    let biomes = chunk.biomes_mut();
    for (slot, selected) in biomes.iter_mut().zip(columns.bits().iter()) {
        if *selected {
            *slot = biome;
        }
    }
    chunk.dirty = true;
    log::debug!(
        "biome: {} columns in chunk ({}, {}) set to {}",
        columns.count(),
        pos.x,
        pos.z,
        biome.0
    );
    true
}

/// Paint `biome` over a selection, one chunk per progress step. Chunks the
/// store does not contain are never borrowed mutably.
pub fn biome_columns_iter<'w>(
    world: &'w mut dyn Dimension,
    selection: Box<dyn Selection + 'w>,
    biome: BiomeId,
) -> ProgressIter<'w> {
    Box::new(ChunkSteps::new(world, selection, BIOME_MESSAGE, move |world, selection, pos| {
        if !world.contains_chunk(pos) {
            log::trace!("biome: chunk ({}, {}) not loaded", pos.x, pos.z);
            return;
        }
        if let Some(chunk) = world.chunk_mut(pos) {
            paint_biome_columns(chunk, selection, pos, biome);
        }
    }))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BiomeMode {
    biome: BiomeId,
}

impl BiomeMode {
    pub const NAME: &'static str = "biome";

    /// Biome mode with the first catalog biome selected
    pub fn new() -> Self {
        Self::with_biome(BiomeTypes::new().first())
    }

    pub fn with_biome(biome: BiomeId) -> Self {
        Self { biome }
    }

    pub fn biome(&self) -> BiomeId {
        self.biome
    }

    pub fn set_biome(&mut self, biome: BiomeId) {
        self.biome = biome;
    }
}

impl Default for BiomeMode {
    fn default() -> Self {
        Self::new()
    }
}

impl BrushMode for BiomeMode {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn display_name(&self) -> &str {
        "Biome"
    }

    fn capabilities(&self) -> ModeCapabilities {
        ModeCapabilities {
            point_apply: false,
            selection_apply: true,
            preview: true,
        }
    }

    fn options(&self) -> ModeOptions {
        ModeOptions::Biome { biome: self.biome }
    }

    fn set_options(&mut self, options: ModeOptions) -> Result<()> {
        match options {
            ModeOptions::Biome { biome } => {
                self.biome = biome;
                Ok(())
            }
            _ => Err(Error::MissingOption("biomeID")),
        }
    }

    /// Biomes are per column, so the brush is always one voxel tall
    fn brush_box_for_point(&self, point: Vec3, options: &BrushOptions) -> Result<(Aabb, BrushOptions)> {
        let mut effective = options.clone();
        effective.brush_size.y = 1.0;
        let bounds = compute_brush_box(point, &effective)?;
        Ok((bounds, effective))
    }

    fn apply_to_selection<'w>(
        &self,
        world: &'w mut dyn Dimension,
        selection: Box<dyn Selection + 'w>,
        options: &BrushOptions,
    ) -> Result<ProgressIter<'w>> {
        let biome = options.biome()?;
        Ok(biome_columns_iter(world, selection, biome))
    }

    fn create_cursor_level(
        &self,
        shape: BrushShape,
        options: &BrushOptions,
        blocks: &BlockTypes,
    ) -> Result<Option<MaskLevel>> {
        let grass = blocks
            .get(BIOME_CURSOR_BLOCK)
            .ok_or_else(|| Error::UnknownBlock(BIOME_CURSOR_BLOCK.to_string()))?;
        let (bounds, _) = self.brush_box_for_point(Vec3::ZERO, options)?;
        let selection = shape.create_shaped_selection(&bounds);
        Ok(Some(MaskLevel::new(&selection, &grass, blocks, Some(self.biome))))
    }
}
