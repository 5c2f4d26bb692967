//! Procedural forest – an endless terrain that streams chunks around a
//! roaming observer.
//!
//! The engine half (`terrain`, `vegetation`, `chunk`, `surface`,
//! `chunk_stream`) is plain Rust over `bevy::math`; the Bevy half
//! (`plugin`, `render`, `observer`, `camera`) drives it once per frame.

pub mod camera;
pub mod chunk;
pub mod chunk_stream;
pub mod components;
pub mod config;
pub mod constants;
pub mod coords;
pub mod error;
pub mod observer;
pub mod plugin;
pub mod render;
pub mod shelter;
pub mod surface;
pub mod terrain;
pub mod vegetation;

pub use chunk::{Chunk, ChunkFactory, SurfaceHandle};
pub use chunk_stream::{ShadowAnchor, StreamingWindow, WindowDelta};
pub use config::{ValidConfig, WorldConfig};
pub use coords::ChunkCoord;
pub use error::{ConfigError, ExportError};
pub use plugin::ForestWorldPlugin;
pub use surface::{build_surface, ChunkPresenter, TerrainSurface};
pub use terrain::{HeightField, HeightSynth};
pub use vegetation::{VegetationInstance, VegetationKind};
