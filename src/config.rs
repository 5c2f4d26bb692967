//! engine configuration – defaults come from `constants.rs`

use std::ops::Deref;

use crate::constants::*;
use crate::error::ConfigError;

/// Tunables for one world instance.
///
/// Build one with [`WorldConfig::default`] (the compile-time constants) and
/// turn it into a [`ValidConfig`] before handing it to the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldConfig {
    /// side length of a chunk in world units (and samples per side)
    pub chunk_size: u32,
    /// half-width of the square window, in chunks
    pub view_distance: u32,
    pub noise_scale: f64,
    pub tree_density: f32,
    pub bush_density: f32,
    pub min_tree_spacing: f32,
    pub seed: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            chunk_size: CHUNK_SIZE,
            view_distance: VIEW_DISTANCE,
            noise_scale: NOISE_SCALE,
            tree_density: TREE_DENSITY,
            bush_density: BUSH_DENSITY,
            min_tree_spacing: MIN_TREE_SPACING,
            seed: WORLD_SEED,
        }
    }
}

impl WorldConfig {
    /// Checks every field, consuming the config.
    pub fn validated(self) -> Result<ValidConfig, ConfigError> {
        if self.chunk_size == 0 {
            return Err(ConfigError::ZeroChunkSize);
        }
        if self.view_distance == 0 {
            return Err(ConfigError::ZeroViewDistance);
        }
        if !self.noise_scale.is_finite() || self.noise_scale <= 0.0 {
            return Err(ConfigError::InvalidNoiseScale(self.noise_scale));
        }
        for (name, value) in [
            ("tree density", self.tree_density),
            ("bush density", self.bush_density),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::DensityOutOfRange { name, value });
            }
        }
        if !self.min_tree_spacing.is_finite() || self.min_tree_spacing < 0.0 {
            return Err(ConfigError::InvalidTreeSpacing(self.min_tree_spacing));
        }
        Ok(ValidConfig(self))
    }
}

/// A [`WorldConfig`] that passed [`WorldConfig::validated`].
#[derive(Debug, Clone, PartialEq)]
pub struct ValidConfig(WorldConfig);

impl ValidConfig {
    /// number of chunks along one side of the window
    pub fn window_side(&self) -> u32 {
        self.0.view_distance * 2 + 1
    }

    /// number of chunks resident once the window is filled
    pub fn window_len(&self) -> usize {
        let side = self.window_side() as usize;
        side * side
    }
}

impl Deref for ValidConfig {
    type Target = WorldConfig;

    fn deref(&self) -> &WorldConfig {
        &self.0
    }
}
