use glam::IVec3;

use crate::math::BlockBox;
use crate::voxel::chunk::ChunkPos;
use super::shape::BrushShape;
use super::Selection;

/// A brush shape evaluated lazily over a voxel footprint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapedSelection {
    shape: BrushShape,
    footprint: BlockBox,
}

impl ShapedSelection {
    pub fn new(shape: BrushShape, footprint: BlockBox) -> Self {
        Self { shape, footprint }
    }

    pub fn shape(&self) -> BrushShape {
        self.shape
    }
}

impl Selection for ShapedSelection {
    fn bounds(&self) -> BlockBox {
        self.footprint
    }

    fn contains_block(&self, p: IVec3) -> bool {
        self.shape.contains_block(&self.footprint, p)
    }

    /// Chunks overlapping the footprint, X-major then Z
    fn chunk_positions(&self) -> Vec<ChunkPos> {
        let zs = self.footprint.chunk_z_range();
        self.footprint
            .chunk_x_range()
            .flat_map(|cx| zs.clone().map(move |cz| ChunkPos::new(cx, cz)))
            .collect()
    }

    fn chunk_count(&self) -> usize {
        self.footprint.chunk_x_range().len() * self.footprint.chunk_z_range().len()
    }

    fn section_positions(&self, pos: ChunkPos) -> Vec<i32> {
        if !self.footprint.chunk_x_range().contains(&pos.x)
            || !self.footprint.chunk_z_range().contains(&pos.z)
        {
            return Vec::new();
        }
        self.footprint.section_range().collect()
    }
}
