//! error types for configuration and presentation failures

use crate::coords::ChunkCoord;

/// Rejected engine configuration; always fatal at startup.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("chunk size must be positive")]
    ZeroChunkSize,

    #[error("view distance must be positive")]
    ZeroViewDistance,

    #[error("noise scale must be positive and finite, got {0}")]
    InvalidNoiseScale(f64),

    #[error("{name} must lie in [0, 1], got {value}")]
    DensityOutOfRange { name: &'static str, value: f32 },

    #[error("minimum tree spacing must be non-negative and finite, got {0}")]
    InvalidTreeSpacing(f32),
}

/// Failure reported by a presentation collaborator while exporting a surface.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExportError {
    #[error("surface export for chunk {coord} failed: {reason}")]
    Rejected { coord: ChunkCoord, reason: String },
}
