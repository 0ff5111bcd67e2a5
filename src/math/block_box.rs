//! Integer voxel footprint of a real-valued box

use std::ops::Range;

use crate::core::types::{IVec3, Vec3};
use crate::voxel::chunk::{CHUNK_WIDTH, SECTION_HEIGHT};
use super::Aabb;

/// Half-open box of whole voxels: `origin <= p < origin + size`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BlockBox {
    pub origin: IVec3,
    pub size: IVec3,
}

impl BlockBox {
    pub fn new(origin: IVec3, size: IVec3) -> Self {
        Self {
            origin,
            size: size.max(IVec3::ZERO),
        }
    }

    /// Voxel footprint of a real box: origin rounded down, size rounded up.
    pub fn from_aabb(aabb: &Aabb) -> Self {
        let origin = aabb.min.floor().as_ivec3();
        let size = aabb.size().max(Vec3::ZERO).ceil().as_ivec3();
        Self::new(origin, size)
    }

    /// Exclusive maximum corner
    pub fn max(&self) -> IVec3 {
        self.origin + self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size.x == 0 || self.size.y == 0 || self.size.z == 0
    }

    pub fn volume(&self) -> i64 {
        self.size.x as i64 * self.size.y as i64 * self.size.z as i64
    }

    pub fn contains(&self, p: IVec3) -> bool {
        p.cmpge(self.origin).all() && p.cmplt(self.max()).all()
    }

    /// Center of the voxel footprint in world space
    pub fn center(&self) -> Vec3 {
        self.origin.as_vec3() + self.size.as_vec3() * 0.5
    }

    /// Chunk X coordinates overlapped by this box
    pub fn chunk_x_range(&self) -> Range<i32> {
        if self.is_empty() {
            return 0..0;
        }
        span(self.origin.x, self.size.x, CHUNK_WIDTH)
    }

    /// Chunk Z coordinates overlapped by this box
    pub fn chunk_z_range(&self) -> Range<i32> {
        if self.is_empty() {
            return 0..0;
        }
        span(self.origin.z, self.size.z, CHUNK_WIDTH)
    }

    /// Section indices overlapped by this box
    pub fn section_range(&self) -> Range<i32> {
        if self.is_empty() {
            return 0..0;
        }
        span(self.origin.y, self.size.y, SECTION_HEIGHT)
    }
}

/// Range of `unit`-sized cells overlapped by `[start, start + len)`.
fn span(start: i32, len: i32, unit: i32) -> Range<i32> {
    if len <= 0 {
        return 0..0;
    }
    let first = start.div_euclid(unit);
    let last = (start + len - 1).div_euclid(unit);
    first..last + 1
}
