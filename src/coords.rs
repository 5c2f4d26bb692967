//! chunk grid coordinates
//!
//! World space is Y-up; the ground plane is XZ.  A chunk covers
//! `[cx * size, (cx + 1) * size) × [cz * size, (cz + 1) * size)`.

use std::fmt;

use bevy::prelude::*;

/// Position of a chunk in the world grid.  Used as the cache key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkCoord {
    pub x: i32,
    pub z: i32,
}

impl ChunkCoord {
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Chunk containing the world point `(x, z)`.
    ///
    /// Floors, so `-0.5` lands in chunk `-1` rather than `0`.
    pub fn from_world(x: f32, z: f32, chunk_size: u32) -> Self {
        let size = chunk_size as f32;
        Self {
            x: (x / size).floor() as i32,
            z: (z / size).floor() as i32,
        }
    }

    /// World position of local cell (0, 0), at zero height.
    pub fn origin(self, chunk_size: u32) -> Vec3 {
        let size = chunk_size as f32;
        Vec3::new(self.x as f32 * size, 0.0, self.z as f32 * size)
    }

    /// Chebyshev distance in chunks; the window is a square in this metric.
    pub fn chebyshev(self, other: ChunkCoord) -> u32 {
        self.x.abs_diff(other.x).max(self.z.abs_diff(other.z))
    }

    /// All coordinates within `radius` (Chebyshev) of `self`, row-major.
    pub fn window(self, radius: u32) -> impl Iterator<Item = ChunkCoord> {
        let r = radius as i32;
        let (cx, cz) = (self.x, self.z);
        (cz - r..=cz + r).flat_map(move |z| (cx - r..=cx + r).map(move |x| ChunkCoord::new(x, z)))
    }
}

impl fmt::Display for ChunkCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_world_floors_negative_positions() {
        assert_eq!(ChunkCoord::from_world(0.0, 0.0, 32), ChunkCoord::new(0, 0));
        assert_eq!(ChunkCoord::from_world(31.9, 31.9, 32), ChunkCoord::new(0, 0));
        assert_eq!(ChunkCoord::from_world(33.0, 0.0, 32), ChunkCoord::new(1, 0));
        assert_eq!(ChunkCoord::from_world(-0.5, -32.0, 32), ChunkCoord::new(-1, -1));
        assert_eq!(ChunkCoord::from_world(-32.5, 64.0, 32), ChunkCoord::new(-2, 2));
    }

    #[test]
    fn origin_is_chunk_corner() {
        assert_eq!(ChunkCoord::new(-2, 3).origin(32), Vec3::new(-64.0, 0.0, 96.0));
    }

    #[test]
    fn window_is_square() {
        let center = ChunkCoord::new(5, -1);
        let cells: Vec<_> = center.window(2).collect();
        assert_eq!(cells.len(), 25);
        assert!(cells.iter().all(|c| c.chebyshev(center) <= 2));
        assert!(cells.contains(&ChunkCoord::new(7, 1)));
        assert!(cells.contains(&ChunkCoord::new(3, -3)));
    }

    #[test]
    fn display_is_tuple_like() {
        assert_eq!(ChunkCoord::new(-1, 4).to_string(), "(-1, 4)");
    }
}
