//! Cursor preview: a small standalone world holding what a brush would paint

use glam::IVec3;

use crate::math::BlockBox;
use crate::selection::Selection;
use crate::voxel::biome::BiomeId;
use crate::voxel::block::{BlockId, BlockInfo, BlockTypes};
use crate::voxel::fill::fill_blocks_iter;
use crate::voxel::world::{ChunkedWorld, Dimension};
use super::biome::biome_columns_iter;
use super::progress::run_to_completion;

/// In-memory world covering exactly the chunks and sections of a selection,
/// filled through the same routines a real application uses.
#[derive(Clone, Debug)]
pub struct MaskLevel {
    bounds: BlockBox,
    world: ChunkedWorld,
}

impl MaskLevel {
    pub fn new(
        selection: &dyn Selection,
        block: &BlockInfo,
        blocks: &BlockTypes,
        biome: Option<BiomeId>,
    ) -> Self {
        let bounds = selection.bounds();
        let mut world = ChunkedWorld::with_section_range(blocks.clone(), bounds.section_range());
        for pos in selection.chunk_positions() {
            world.create_chunk(pos);
        }

        run_to_completion(fill_blocks_iter(&mut world, Box::new(selection), block.id));
        if let Some(biome) = biome {
            run_to_completion(biome_columns_iter(&mut world, Box::new(selection), biome));
        }
        // A preview is never persisted
        world.clear_dirty();

        log::debug!(
            "cursor level: {} chunks, footprint {:?} at {:?}",
            world.chunk_count(),
            bounds.size,
            bounds.origin
        );
        Self { bounds, world }
    }

    /// Voxel footprint of the previewed selection
    pub fn bounds(&self) -> BlockBox {
        self.bounds
    }

    /// Read access through the same interface as the real store
    pub fn world(&self) -> &ChunkedWorld {
        &self.world
    }

    /// Block at `p`; air outside the preview
    pub fn block_at(&self, p: IVec3) -> BlockId {
        self.world.block_at(p).unwrap_or(BlockId::AIR)
    }

    pub fn biome_at(&self, x: i32, z: i32) -> Option<BiomeId> {
        self.world.biome_at(x, z)
    }

    /// Number of non-air voxels in the preview
    pub fn solid_count(&self) -> usize {
        self.world
            .chunk_positions()
            .into_iter()
            .filter_map(|pos| self.world.chunk(pos))
            .flat_map(|chunk| chunk.present_sections().filter_map(move |cy| chunk.section(cy)))
            .map(|section| section.solid_count())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use crate::math::Aabb;
    use crate::selection::BrushShape;

    #[test]
    fn test_covers_only_selection_chunks() {
        let blocks = BlockTypes::default();
        let stone = blocks.get("minecraft:stone").unwrap();
        let bounds = Aabb::from_origin_size(Vec3::new(-2.0, 30.0, 14.0), Vec3::new(4.0, 4.0, 4.0));
        let selection = BrushShape::Square.create_shaped_selection(&bounds);

        let level = MaskLevel::new(&selection, &stone, &blocks, None);
        assert_eq!(level.world().chunk_count(), 4);
        assert_eq!(level.world().section_range(), 1..3);
        assert_eq!(level.solid_count(), 64);
        assert_eq!(level.block_at(IVec3::new(-2, 30, 14)), stone.id);
        assert_eq!(level.block_at(IVec3::new(2, 30, 14)), BlockId::AIR);
        assert!(level.world().dirty_chunks().is_empty());
    }

    #[test]
    fn test_round_preview_is_smaller_than_box() {
        let blocks = BlockTypes::default();
        let stone = blocks.get("minecraft:stone").unwrap();
        let bounds = Aabb::from_origin_size(Vec3::splat(-2.0), Vec3::splat(5.0));
        let round = BrushShape::Round.create_shaped_selection(&bounds);

        let level = MaskLevel::new(&round, &stone, &blocks, None);
        assert!(level.solid_count() < 125);
        assert_eq!(level.block_at(IVec3::ZERO), stone.id);
        assert_eq!(level.block_at(IVec3::splat(-2)), BlockId::AIR);
    }

    #[test]
    fn test_biome_stamped_over_columns() {
        let blocks = BlockTypes::default();
        let grass = blocks.get("minecraft:grass").unwrap();
        let bounds = Aabb::from_origin_size(Vec3::new(4.0, 0.0, 4.0), Vec3::new(2.0, 1.0, 2.0));
        let selection = BrushShape::Square.create_shaped_selection(&bounds);

        let level = MaskLevel::new(&selection, &grass, &blocks, Some(BiomeId::DESERT));
        assert_eq!(level.biome_at(4, 4), Some(BiomeId::DESERT));
        assert_eq!(level.biome_at(5, 5), Some(BiomeId::DESERT));
        assert_eq!(level.biome_at(6, 5), Some(BiomeId::OCEAN));
        assert_eq!(level.biome_at(40, 5), None);
    }
}
