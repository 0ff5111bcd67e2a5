//! Brush box placement

use glam::Vec3;

use crate::core::{Error, Result};
use crate::math::Aabb;
use super::options::BrushOptions;

/// Reject negative or non-finite size components.
pub fn validate_brush_size(size: Vec3) -> Result<()> {
    if !size.is_finite() || size.cmplt(Vec3::ZERO).any() {
        return Err(Error::InvalidBrushSize(size));
    }
    Ok(())
}

/// Box of `options.brush_size` centered on `center`.
///
/// Each axis is shifted by `(size mod 2) / 2` so that odd integer sizes land
/// on whole voxels around the anchor voxel, while fractional sizes move by the
/// matching fraction. Zero-sized axes are allowed and give an empty footprint.
pub fn compute_brush_box(center: Vec3, options: &BrushOptions) -> Result<Aabb> {
    let size = options.brush_size;
    validate_brush_size(size)?;

    let parity = Vec3::new(
        size.x.rem_euclid(2.0),
        size.y.rem_euclid(2.0),
        size.z.rem_euclid(2.0),
    ) * 0.5;
    let origin = center - size * 0.5 + parity;
    Ok(Aabb::from_origin_size(origin, size))
}
