use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::math::{Aabb, BlockBox};
use super::shaped::ShapedSelection;

/// Brush shapes, each inscribed in the brush box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrushShape {
    /// Every voxel of the box
    #[default]
    Square,
    /// Ellipsoid touching each face of the box
    Round,
    /// Vertical cylinder: ellipse in XZ, full box height
    Cylinder,
}

impl BrushShape {
    pub const ALL: [BrushShape; 3] = [BrushShape::Square, BrushShape::Round, BrushShape::Cylinder];

    pub fn name(&self) -> &'static str {
        match self {
            BrushShape::Square => "square",
            BrushShape::Round => "round",
            BrushShape::Cylinder => "cylinder",
        }
    }

    /// Signed distance-like value for a point in normalized box space,
    /// where the box spans `[-1, 1]` on every axis (negative = inside).
    pub fn sdf(&self, local: Vec3) -> f32 {
        match self {
            BrushShape::Square => {
                let q = local.abs() - Vec3::ONE;
                q.max_element()
            }
            BrushShape::Round => local.length_squared() - 1.0,
            BrushShape::Cylinder => {
                let radial = local.x * local.x + local.z * local.z - 1.0;
                radial.max(local.y.abs() - 1.0)
            }
        }
    }

    /// Check if a normalized point is inside the shape (SDF <= 0)
    pub fn contains_local(&self, local: Vec3) -> bool {
        self.sdf(local) <= 0.0
    }

    /// Whether the voxel at `p` is selected for a brush occupying `footprint`.
    /// Tests the voxel center against the shape scaled to the footprint.
    pub fn contains_block(&self, footprint: &BlockBox, p: glam::IVec3) -> bool {
        if !footprint.contains(p) {
            return false;
        }
        if *self == BrushShape::Square {
            return true;
        }
        let half = footprint.size.as_vec3() * 0.5;
        let local = (p.as_vec3() + Vec3::splat(0.5) - footprint.center()) / half;
        self.contains_local(local)
    }

    /// Build the selection for a brush box. Deterministic: the same box and
    /// shape always select the same voxels.
    pub fn create_shaped_selection(&self, bounds: &Aabb) -> ShapedSelection {
        ShapedSelection::new(*self, BlockBox::from_aabb(bounds))
    }
}
