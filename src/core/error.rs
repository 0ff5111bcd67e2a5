//! Error types for the brush engine

use glam::Vec3;
use thiserror::Error;

/// Main error type for the brush engine
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid brush size {0}: every component must be a non-negative number")]
    InvalidBrushSize(Vec3),

    #[error("Brush mode `{mode}` does not support {operation}")]
    NotImplemented {
        mode: &'static str,
        operation: &'static str,
    },

    #[error("Brush options are missing `{0}`")]
    MissingOption(&'static str),

    #[error("Unknown block type: {0}")]
    UnknownBlock(String),

    #[error("Unknown biome id: {0}")]
    UnknownBiome(u8),

    #[error("Unknown brush mode: {0}")]
    UnknownMode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}
