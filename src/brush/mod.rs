//! Brush application: modes, the driver that dispatches them, and cursor previews
//!
//! A brush application computes a box around a point, shapes it into a
//! selection, and hands it to the active mode. Modes return a lazy progress
//! sequence that mutates one chunk per step.

pub mod geometry;
pub mod options;
pub mod progress;
pub mod mode;
pub mod fill;
pub mod replace;
pub mod biome;
pub mod cursor;
pub mod driver;
pub mod config;

// Re-exports
pub use geometry::{compute_brush_box, validate_brush_size};
pub use options::{BrushOptions, ModeOptions};
pub use progress::{run_to_completion, Progress, ProgressIter};
pub use mode::{brush_modes, mode_by_name, BrushMode, ModeCapabilities};
pub use fill::FillMode;
pub use replace::ReplaceMode;
pub use biome::{biome_columns_iter, BiomeMode};
pub use cursor::MaskLevel;
pub use driver::BrushDriver;
pub use config::BrushConfig;
