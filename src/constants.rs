use bevy::prelude::*;
use std::ops::Range;

/// -------- chunk grid & streaming --------
pub const CHUNK_SIZE: u32    = 32;
pub const VIEW_DISTANCE: u32 =  3;

/// -------- height field --------
pub const NOISE_SCALE: f64 = 120.0;
pub const WORLD_SEED: u32  = 0x5EED_F0E5;

/// (amplitude, wavelength divisor) – base, medium, fine
pub const HEIGHT_OCTAVES: [(f64, f64); 3] = [(0.5, 1.0), (0.2, 2.0), (0.05, 4.0)];

/// -------- vegetation --------
pub const TREE_DENSITY: f32     = 0.012;
pub const BUSH_DENSITY: f32     = 0.015;
pub const MIN_TREE_SPACING: f32 = 6.0;

pub const TREE_SCALE: Range<f32>            = 1.5..2.0;
pub const BUSH_CLUSTER_CHANCE: f64          = 0.4;
pub const BUSH_CLUSTER_SIZE: Range<u32>     = 1..3;   // 1–2 bushes
pub const BUSH_CLUSTER_DISTANCE: Range<f32> = 1.5..2.5;
pub const CLUSTER_BUSH_SCALE: Range<f32>    = 0.5..0.8;
pub const STANDALONE_BUSH_SCALE: Range<f32> = 0.6..0.9;

/// -------- shelter / shadows --------
pub const TREE_SHADOW_RADIUS: f32 = 3.0;
pub const BUSH_SHADOW_RADIUS: f32 = 1.5;
pub const SHADOW_EDGE_FACTOR: f32 = 0.9;

/// -------- observer --------
pub const WALK_SPEED: f32      = 12.0;
pub const RUN_MULTIPLIER: f32  =  2.5;
pub const OBSERVER_EYE: f32    =  1.0;

/// -------- camera --------
pub const CAMERA_OFFSET: Vec3 = Vec3::new(0.0, 9.0, 16.0);

/// -------- colours --------
pub const SKY_COLOR: Color    = Color::srgb(0.53, 0.75, 0.95);
pub const GRASS_COLOR: Color  = Color::srgb(0.176, 0.353, 0.153);
pub const TRUNK_COLOR: Color  = Color::srgb(0.231, 0.169, 0.082);
pub const LEAVES_COLOR: Color = Color::srgb(0.102, 0.302, 0.102);
pub const BUSH_COLOR: Color   = Color::srgb(0.18, 0.42, 0.16);
