//! Brush mode contract and registry

use glam::Vec3;

use crate::core::{Error, Result};
use crate::math::Aabb;
use crate::selection::{BrushShape, Selection};
use crate::voxel::block::BlockTypes;
use crate::voxel::world::Dimension;
use super::biome::BiomeMode;
use super::cursor::MaskLevel;
use super::fill::FillMode;
use super::geometry::compute_brush_box;
use super::options::{BrushOptions, ModeOptions};
use super::progress::ProgressIter;
use super::replace::ReplaceMode;

/// Which operations a mode actually implements
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModeCapabilities {
    /// `apply_to_point` does work
    pub point_apply: bool,
    /// `apply_to_selection` does work
    pub selection_apply: bool,
    /// `create_cursor_level` can return a preview
    pub preview: bool,
}

/// What painting means: fill blocks, replace blocks, stamp biomes.
///
/// A mode owns its options and can reshape the geometry it is given. The
/// default method bodies describe an unsupported operation; `capabilities`
/// must agree with which ones a mode overrides.
pub trait BrushMode {
    /// Stable identifier used in configuration
    fn name(&self) -> &'static str;

    fn display_name(&self) -> &str;

    fn capabilities(&self) -> ModeCapabilities;

    /// Snapshot of this mode's options for one application
    fn options(&self) -> ModeOptions {
        ModeOptions::None
    }

    /// Replace this mode's options. Modes without options only accept
    /// `ModeOptions::None`.
    fn set_options(&mut self, options: ModeOptions) -> Result<()> {
        match options {
            ModeOptions::None => Ok(()),
            _ => Err(Error::NotImplemented {
                mode: self.name(),
                operation: "options",
            }),
        }
    }

    /// Box for a brush anchored at `point`, plus the options actually used
    /// to compute it (a mode may clamp the size).
    fn brush_box_for_point(&self, point: Vec3, options: &BrushOptions) -> Result<(Aabb, BrushOptions)> {
        let bounds = compute_brush_box(point, options)?;
        Ok((bounds, options.clone()))
    }

    /// Apply immediately at a point, for effects that can't be expressed over a selection
    fn apply_to_point(&self, _world: &mut dyn Dimension, _point: Vec3, _options: &BrushOptions) -> Result<()> {
        Err(Error::NotImplemented {
            mode: self.name(),
            operation: "point application",
        })
    }

    /// Lazily apply over a selection, one chunk per progress step
    fn apply_to_selection<'w>(
        &self,
        _world: &'w mut dyn Dimension,
        _selection: Box<dyn Selection + 'w>,
        _options: &BrushOptions,
    ) -> Result<ProgressIter<'w>> {
        Err(Error::NotImplemented {
            mode: self.name(),
            operation: "selection application",
        })
    }

    /// Preview world for the cursor: the mode's own box at the origin, filled
    /// through the same path as real application.
    fn create_cursor_level(
        &self,
        _shape: BrushShape,
        _options: &BrushOptions,
        _blocks: &BlockTypes,
    ) -> Result<Option<MaskLevel>> {
        Ok(None)
    }
}

pub const MODE_NAMES: [&str; 3] = [FillMode::NAME, ReplaceMode::NAME, BiomeMode::NAME];

/// Every available mode, in menu order
pub fn brush_modes(blocks: &BlockTypes) -> Result<Vec<Box<dyn BrushMode>>> {
    MODE_NAMES.iter().map(|name| mode_by_name(name, blocks)).collect()
}

/// Construct a mode with default options
pub fn mode_by_name(name: &str, blocks: &BlockTypes) -> Result<Box<dyn BrushMode>> {
    match name {
        FillMode::NAME => Ok(Box::new(FillMode::new(blocks)?)),
        ReplaceMode::NAME => Ok(Box::new(ReplaceMode::new(blocks)?)),
        BiomeMode::NAME => Ok(Box::new(BiomeMode::new())),
        other => Err(Error::UnknownMode(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxel::biome::BiomeId;
    use crate::voxel::block::BlockTypes;
    use crate::voxel::world::ChunkedWorld;

    /// Mode that overrides nothing
    struct Inert;

    impl BrushMode for Inert {
        fn name(&self) -> &'static str {
            "inert"
        }

        fn display_name(&self) -> &str {
            "Inert"
        }

        fn capabilities(&self) -> ModeCapabilities {
            ModeCapabilities::default()
        }
    }

    #[test]
    fn test_defaults_are_unsupported() {
        let mut world = ChunkedWorld::new(BlockTypes::default());
        let options = BrushOptions::default();

        let err = Inert.apply_to_point(&mut world, Vec3::ZERO, &options).unwrap_err();
        assert!(matches!(err, Error::NotImplemented { mode: "inert", .. }));

        let selection = BrushShape::Square.create_shaped_selection(&Aabb::new(Vec3::ZERO, Vec3::ONE));
        let result = Inert.apply_to_selection(&mut world, Box::new(selection), &options);
        assert!(matches!(result, Err(Error::NotImplemented { operation: "selection application", .. })));

        let cursor = Inert.create_cursor_level(BrushShape::Square, &options, &BlockTypes::default()).unwrap();
        assert!(cursor.is_none());
    }

    #[test]
    fn test_default_set_options_rejects_foreign_options() {
        let mut mode = Inert;
        assert!(mode.set_options(ModeOptions::None).is_ok());

        let err = mode.set_options(ModeOptions::Biome { biome: BiomeId::FOREST }).unwrap_err();
        assert!(matches!(err, Error::NotImplemented { mode: "inert", operation: "options" }));
        assert_eq!(err.to_string(), "Brush mode `inert` does not support options");
    }

    #[test]
    fn test_default_box_is_unchanged() {
        let options = BrushOptions::new(Vec3::new(3.0, 3.0, 3.0));
        let (bounds, effective) = Inert.brush_box_for_point(Vec3::ZERO, &options).unwrap();
        assert_eq!(effective, options);
        assert_eq!(bounds.size(), Vec3::splat(3.0));
    }

    #[test]
    fn test_registry_order() {
        let modes = brush_modes(&BlockTypes::default()).unwrap();
        let names: Vec<_> = modes.iter().map(|m| m.name()).collect();
        assert_eq!(names, vec!["fill", "replace", "biome"]);
    }

    #[test]
    fn test_unknown_mode() {
        let result = mode_by_name("smooth", &BlockTypes::default());
        assert!(matches!(result, Err(Error::UnknownMode(name)) if name == "smooth"));
    }

    #[test]
    fn test_registry_needs_blocks() {
        // Fill defaults to stone, which an empty registry lacks
        let result = brush_modes(&BlockTypes::new());
        assert!(matches!(result, Err(Error::UnknownBlock(_))));
    }
}
