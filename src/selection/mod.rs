//! Selections: lazily queried 3D voxel masks a brush paints through.
//!
//! A selection is never materialized for the whole world. Consumers walk it
//! chunk by chunk and section by section, asking for one 16³ mask at a time,
//! so memory stays proportional to a single section.

pub mod mask;
pub mod shape;
pub mod shaped;

pub use mask::{ColumnMask, SectionMask};
pub use shape::BrushShape;
pub use shaped::ShapedSelection;

use glam::IVec3;

use crate::math::BlockBox;
use crate::voxel::chunk::{ChunkPos, CHUNK_WIDTH, SECTION_HEIGHT};

/// Read-only voxel region. Implementations must be deterministic and free of
/// side effects.
pub trait Selection {
    /// Voxel box every selected voxel lies within
    fn bounds(&self) -> BlockBox;

    /// Whether the voxel at world position `p` is selected
    fn contains_block(&self, p: IVec3) -> bool;

    /// Chunks that intersect the selection. Order carries no meaning.
    fn chunk_positions(&self) -> Vec<ChunkPos>;

    fn chunk_count(&self) -> usize {
        self.chunk_positions().len()
    }

    /// Section indices the selection touches within chunk `pos`
    fn section_positions(&self, pos: ChunkPos) -> Vec<i32>;

    /// Mask of selected voxels in section `cy` of chunk `pos`
    fn section_mask(&self, pos: ChunkPos, cy: i32) -> SectionMask {
        let mut mask = SectionMask::empty();
        let (bx, bz) = pos.block_origin();
        let by = cy * SECTION_HEIGHT;

        // Only visit the part of the section inside the bounds
        let bounds = self.bounds();
        let lo = (bounds.origin - IVec3::new(bx, by, bz)).clamp(IVec3::ZERO, IVec3::splat(CHUNK_WIDTH));
        let hi = (bounds.max() - IVec3::new(bx, by, bz)).clamp(IVec3::ZERO, IVec3::splat(CHUNK_WIDTH));

        for y in lo.y..hi.y {
            for z in lo.z..hi.z {
                for x in lo.x..hi.x {
                    if self.contains_block(IVec3::new(bx + x, by + y, bz + z)) {
                        mask.set(x as usize, y as usize, z as usize, true);
                    }
                }
            }
        }
        mask
    }
}

impl<S: Selection + ?Sized> Selection for &S {
    fn bounds(&self) -> BlockBox {
        (**self).bounds()
    }

    fn contains_block(&self, p: IVec3) -> bool {
        (**self).contains_block(p)
    }

    fn chunk_positions(&self) -> Vec<ChunkPos> {
        (**self).chunk_positions()
    }

    fn chunk_count(&self) -> usize {
        (**self).chunk_count()
    }

    fn section_positions(&self, pos: ChunkPos) -> Vec<i32> {
        (**self).section_positions(pos)
    }

    fn section_mask(&self, pos: ChunkPos, cy: i32) -> SectionMask {
        (**self).section_mask(pos, cy)
    }
}

impl<S: Selection + ?Sized> Selection for Box<S> {
    fn bounds(&self) -> BlockBox {
        (**self).bounds()
    }

    fn contains_block(&self, p: IVec3) -> bool {
        (**self).contains_block(p)
    }

    fn chunk_positions(&self) -> Vec<ChunkPos> {
        (**self).chunk_positions()
    }

    fn chunk_count(&self) -> usize {
        (**self).chunk_count()
    }

    fn section_positions(&self, pos: ChunkPos) -> Vec<i32> {
        (**self).section_positions(pos)
    }

    fn section_mask(&self, pos: ChunkPos, cy: i32) -> SectionMask {
        (**self).section_mask(pos, cy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Selects a single voxel
    struct OneVoxel(IVec3);

    impl Selection for OneVoxel {
        fn bounds(&self) -> BlockBox {
            BlockBox::new(self.0, IVec3::ONE)
        }

        fn contains_block(&self, p: IVec3) -> bool {
            p == self.0
        }

        fn chunk_positions(&self) -> Vec<ChunkPos> {
            vec![ChunkPos::from_block(self.0.x, self.0.z)]
        }

        fn section_positions(&self, _pos: ChunkPos) -> Vec<i32> {
            vec![self.0.y.div_euclid(SECTION_HEIGHT)]
        }
    }

    #[test]
    fn test_default_section_mask_negative_coords() {
        let sel = OneVoxel(IVec3::new(-1, -1, -17));
        let pos = ChunkPos::new(-1, -2);
        assert_eq!(sel.chunk_positions(), vec![pos]);
        assert_eq!(sel.chunk_count(), 1);
        let mask = sel.section_mask(pos, -1);
        assert_eq!(mask.count(), 1);
        assert!(mask.get(15, 15, 15));
    }

    #[test]
    fn test_section_mask_outside_bounds_is_empty() {
        let sel = OneVoxel(IVec3::new(3, 3, 3));
        assert!(sel.section_mask(ChunkPos::new(0, 0), 1).is_empty());
        assert!(sel.section_mask(ChunkPos::new(1, 0), 0).is_empty());
    }

    #[test]
    fn test_blanket_impls_delegate() {
        fn footprint<S: Selection>(sel: S) -> BlockBox {
            sel.bounds()
        }

        let sel = OneVoxel(IVec3::new(1, 2, 3));
        let boxed: Box<dyn Selection> = Box::new(OneVoxel(IVec3::new(1, 2, 3)));
        assert_eq!(footprint(&sel), footprint(boxed));
    }
}
