//! Mathematical utilities and data structures

pub mod aabb;
pub mod block_box;

pub use aabb::Aabb;
pub use block_box::BlockBox;
