//! Brushwork - brush application engine for chunked voxel worlds

pub mod core;
pub mod math;
pub mod voxel;
pub mod selection;
pub mod brush;
