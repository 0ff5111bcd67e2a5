//! Brush driver: the active mode, shape and size, and how an application is dispatched

use glam::Vec3;

use crate::core::{Error, Result};
use crate::math::Aabb;
use crate::selection::{BrushShape, Selection};
use crate::voxel::block::BlockTypes;
use crate::voxel::world::Dimension;
use super::cursor::MaskLevel;
use super::geometry::validate_brush_size;
use super::mode::BrushMode;
use super::options::BrushOptions;
use super::progress::{no_progress, ProgressIter};

/// Drives brush applications for one tool instance
pub struct BrushDriver {
    mode: Box<dyn BrushMode>,
    shape: BrushShape,
    brush_size: Vec3,
}

impl BrushDriver {
    /// Create a driver with a square brush of size 5
    pub fn new(mode: Box<dyn BrushMode>) -> Self {
        Self {
            mode,
            shape: BrushShape::default(),
            brush_size: Vec3::splat(5.0),
        }
    }

    /// Builder: set the brush shape
    pub fn with_shape(mut self, shape: BrushShape) -> Self {
        self.shape = shape;
        self
    }

    /// Builder: set the brush size
    pub fn with_brush_size(mut self, size: Vec3) -> Result<Self> {
        self.set_brush_size(size)?;
        Ok(self)
    }

    /// Get the active mode
    pub fn mode(&self) -> &dyn BrushMode {
        self.mode.as_ref()
    }

    /// Get mutable access to the active mode, e.g. to change its options
    pub fn mode_mut(&mut self) -> &mut dyn BrushMode {
        self.mode.as_mut()
    }

    /// Switch modes, returning the previous one
    pub fn set_mode(&mut self, mode: Box<dyn BrushMode>) -> Box<dyn BrushMode> {
        log::debug!("brush mode {} -> {}", self.mode.name(), mode.name());
        std::mem::replace(&mut self.mode, mode)
    }

    pub fn shape(&self) -> BrushShape {
        self.shape
    }

    pub fn set_shape(&mut self, shape: BrushShape) {
        self.shape = shape;
    }

    pub fn brush_size(&self) -> Vec3 {
        self.brush_size
    }

    /// Set the brush size. Negative or non-finite components are rejected.
    pub fn set_brush_size(&mut self, size: Vec3) -> Result<()> {
        validate_brush_size(size)?;
        self.brush_size = size;
        Ok(())
    }

    /// Current options: brush size plus the mode's options snapshot
    pub fn options(&self) -> BrushOptions {
        BrushOptions::new(self.brush_size).with_mode(self.mode.options())
    }

    /// Box the active mode would paint for a brush anchored at `point`
    pub fn brush_box_for_point(&self, point: Vec3) -> Result<(Aabb, BrushOptions)> {
        self.mode.brush_box_for_point(point, &self.options())
    }

    /// Apply the brush at `point`.
    ///
    /// Geometry errors are returned before any selection is built. Selection
    /// modes return their lazy sequence; point modes do their work now and
    /// return an empty one.
    pub fn apply<'w>(&self, world: &'w mut dyn Dimension, point: Vec3) -> Result<ProgressIter<'w>> {
        let (bounds, options) = self.brush_box_for_point(point)?;
        let caps = self.mode.capabilities();

        if caps.selection_apply {
            let selection = self.shape.create_shaped_selection(&bounds);
            log::debug!(
                "{} brush at {}: {} chunks, shape {}",
                self.mode.name(),
                point,
                selection.chunk_count(),
                self.shape.name()
            );
            return self.mode.apply_to_selection(world, Box::new(selection), &options);
        }

        if caps.point_apply {
            log::debug!("{} brush at {}: point application", self.mode.name(), point);
            self.mode.apply_to_point(world, point, &options)?;
            return Ok(no_progress());
        }

        Err(Error::NotImplemented {
            mode: self.mode.name(),
            operation: "brush application",
        })
    }

    /// Apply the active mode over an arbitrary selection
    pub fn apply_selection<'w>(
        &self,
        world: &'w mut dyn Dimension,
        selection: Box<dyn Selection + 'w>,
    ) -> Result<ProgressIter<'w>> {
        self.mode.apply_to_selection(world, selection, &self.options())
    }

    /// Cursor preview, or `None` if the mode doesn't draw one
    pub fn cursor_level(&self, blocks: &BlockTypes) -> Result<Option<MaskLevel>> {
        if !self.mode.capabilities().preview {
            return Ok(None);
        }
        self.mode.create_cursor_level(self.shape, &self.options(), blocks)
    }
}

impl std::fmt::Debug for BrushDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrushDriver")
            .field("mode", &self.mode.name())
            .field("shape", &self.shape)
            .field("brush_size", &self.brush_size)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec3;
    use crate::brush::biome::BiomeMode;
    use crate::brush::fill::FillMode;
    use crate::brush::mode::ModeCapabilities;
    use crate::brush::options::ModeOptions;
    use crate::brush::progress::run_to_completion;
    use crate::brush::replace::ReplaceMode;
    use crate::voxel::biome::BiomeId;
    use crate::voxel::block::BlockId;
    use crate::voxel::chunk::{Chunk, ChunkPos};
    use crate::voxel::world::{default_flat_layers, ChunkedWorld};

    /// Point-only mode that marks the chunk under the point dirty
    struct Stamp;

    impl BrushMode for Stamp {
        fn name(&self) -> &'static str {
            "stamp"
        }

        fn display_name(&self) -> &str {
            "Stamp"
        }

        fn capabilities(&self) -> ModeCapabilities {
            ModeCapabilities {
                point_apply: true,
                ..Default::default()
            }
        }

        fn apply_to_point(&self, world: &mut dyn Dimension, point: Vec3, _options: &BrushOptions) -> Result<()> {
            let pos = ChunkPos::from_block(point.x.floor() as i32, point.z.floor() as i32);
            if let Some(chunk) = world.chunk_mut(pos) {
                chunk.dirty = true;
            }
            Ok(())
        }
    }

    /// Mode with no capabilities at all
    struct Idle;

    impl BrushMode for Idle {
        fn name(&self) -> &'static str {
            "idle"
        }

        fn display_name(&self) -> &str {
            "Idle"
        }

        fn capabilities(&self) -> ModeCapabilities {
            ModeCapabilities::default()
        }
    }

    fn flat_world(blocks: &BlockTypes) -> ChunkedWorld {
        let mut world = ChunkedWorld::new(blocks.clone());
        world.generate_flat(ChunkPos::new(0, 0), &default_flat_layers(blocks));
        world
    }

    #[test]
    fn test_biome_brush_end_to_end() {
        crate::core::logging::init_test();
        let blocks = BlockTypes::default();
        let mut world = flat_world(&blocks);
        let driver = BrushDriver::new(Box::new(BiomeMode::with_biome(BiomeId::FOREST)))
            .with_brush_size(Vec3::new(3.0, 1.0, 3.0))
            .unwrap();

        let steps = driver.apply(&mut world, Vec3::new(8.0, 64.0, 8.0)).unwrap();
        assert_eq!(run_to_completion(steps), 1);

        let chunk: &Chunk = world.chunk(ChunkPos::new(0, 0)).unwrap();
        for z in 0..16 {
            for x in 0..16 {
                let inside = (7..=9).contains(&x) && (7..=9).contains(&z);
                let expected = if inside { BiomeId::FOREST } else { BiomeId::OCEAN };
                assert_eq!(chunk.biome(x, z), expected, "column ({x}, {z})");
            }
        }
        assert!(chunk.dirty);
        assert_eq!(world.dirty_chunks(), vec![ChunkPos::new(0, 0)]);
    }

    #[test]
    fn test_biome_brush_above_surface_paints_nothing() {
        crate::core::logging::init_test();
        let blocks = BlockTypes::default();
        let mut world = flat_world(&blocks);
        let driver = BrushDriver::new(Box::new(BiomeMode::with_biome(BiomeId::FOREST)))
            .with_brush_size(Vec3::new(3.0, 1.0, 3.0))
            .unwrap();

        // Section 5 was never generated
        run_to_completion(driver.apply(&mut world, Vec3::new(8.0, 80.0, 8.0)).unwrap());
        assert_eq!(world.biome_at(8, 8), Some(BiomeId::OCEAN));
        assert!(world.dirty_chunks().is_empty());
    }

    #[test]
    fn test_fill_brush_round() {
        let blocks = BlockTypes::default();
        let mut world = flat_world(&blocks);
        let mut driver = BrushDriver::new(Box::new(FillMode::new(&blocks).unwrap()))
            .with_shape(BrushShape::Round);
        driver.set_brush_size(Vec3::splat(3.0)).unwrap();

        run_to_completion(driver.apply(&mut world, Vec3::new(8.0, 70.0, 8.0)).unwrap());

        let stone = blocks.get("minecraft:stone").unwrap().id;
        assert_eq!(world.block_at(IVec3::new(8, 70, 8)), Some(stone));
        assert_eq!(world.block_at(IVec3::new(7, 70, 8)), Some(stone));
        assert_eq!(world.block_at(IVec3::new(7, 69, 7)), Some(BlockId::AIR));
    }

    #[test]
    fn test_replace_brush_through_driver() {
        let blocks = BlockTypes::default();
        let mut world = flat_world(&blocks);
        let driver = BrushDriver::new(Box::new(ReplaceMode::new(&blocks).unwrap()))
            .with_brush_size(Vec3::splat(3.0))
            .unwrap();

        run_to_completion(driver.apply(&mut world, Vec3::new(8.0, 30.0, 8.0)).unwrap());

        let dirt = blocks.get("minecraft:dirt").unwrap().id;
        assert_eq!(world.block_at(IVec3::new(7, 29, 9)), Some(dirt));
        assert!(driver.cursor_level(&blocks).unwrap().is_none());
    }

    #[test]
    fn test_mode_options_flow_into_application() {
        let blocks = BlockTypes::default();
        let mut world = flat_world(&blocks);
        let mut driver = BrushDriver::new(Box::new(FillMode::new(&blocks).unwrap()))
            .with_brush_size(Vec3::ONE)
            .unwrap();
        let sand = blocks.get("minecraft:sand").unwrap();
        driver.mode_mut().set_options(ModeOptions::Fill { block: sand.clone() }).unwrap();

        run_to_completion(driver.apply(&mut world, Vec3::new(2.0, 80.0, 2.0)).unwrap());
        assert_eq!(world.block_at(IVec3::new(2, 80, 2)), Some(sand.id));
    }

    #[test]
    fn test_invalid_size_fails_before_selection() {
        let blocks = BlockTypes::default();
        let mut world = flat_world(&blocks);
        let mut driver = BrushDriver::new(Box::new(FillMode::new(&blocks).unwrap()));
        assert!(driver.set_brush_size(Vec3::new(1.0, -2.0, 1.0)).is_err());
        assert_eq!(driver.brush_size(), Vec3::splat(5.0));

        // A size that slipped past the setter is still rejected on apply
        driver.set_mode(Box::new(BiomeMode::new()));
        driver.brush_size = Vec3::new(f32::NAN, 1.0, 1.0);
        let result = driver.apply(&mut world, Vec3::ZERO);
        assert!(matches!(result, Err(Error::InvalidBrushSize(_))));
    }

    #[test]
    fn test_point_mode_dispatch() {
        let blocks = BlockTypes::default();
        let mut world = flat_world(&blocks);
        let driver = BrushDriver::new(Box::new(Stamp));

        let steps = driver.apply(&mut world, Vec3::new(3.0, 64.0, 3.0)).unwrap();
        assert_eq!(run_to_completion(steps), 0);
        assert!(world.chunk(ChunkPos::new(0, 0)).unwrap().dirty);
    }

    #[test]
    fn test_no_capabilities_is_error() {
        let blocks = BlockTypes::default();
        let mut world = flat_world(&blocks);
        let driver = BrushDriver::new(Box::new(Idle));
        let result = driver.apply(&mut world, Vec3::ZERO);
        assert!(matches!(result, Err(Error::NotImplemented { mode: "idle", .. })));
        assert!(driver.cursor_level(&blocks).unwrap().is_none());
    }

    #[test]
    fn test_box_uses_mode_geometry() {
        let driver = BrushDriver::new(Box::new(BiomeMode::new()))
            .with_brush_size(Vec3::new(4.0, 7.0, 4.0))
            .unwrap();
        let (bounds, options) = driver.brush_box_for_point(Vec3::new(0.0, 10.0, 0.0)).unwrap();
        assert_eq!(options.brush_size.y, 1.0);
        assert_eq!(bounds.size(), Vec3::new(4.0, 1.0, 4.0));
        assert_eq!(driver.brush_size().y, 7.0);
    }

    #[test]
    fn test_set_mode_returns_previous() {
        let blocks = BlockTypes::default();
        let mut driver = BrushDriver::new(Box::new(FillMode::new(&blocks).unwrap()));
        let previous = driver.set_mode(Box::new(BiomeMode::new()));
        assert_eq!(previous.name(), "fill");
        assert_eq!(driver.mode().name(), "biome");
        assert!(driver.cursor_level(&blocks).unwrap().is_some());
    }
}
