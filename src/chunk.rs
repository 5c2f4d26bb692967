//! chunk record & the factory that fills it

use bevy::prelude::*;

use crate::config::ValidConfig;
use crate::coords::ChunkCoord;
use crate::terrain::{HeightField, HeightSynth};
use crate::vegetation::{chunk_rng, place_vegetation, PlacementRules, VegetationInstance};

/// Opaque token a presenter hands back for an exported terrain surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SurfaceHandle(pub Entity);

/// One generated grid cell of the world.
///
/// Terrain & vegetation are fixed at construction.  The surface handle is
/// attached at most once, right after export.
#[derive(Debug)]
pub struct Chunk {
    coord: ChunkCoord,
    heights: HeightField,
    vegetation: Vec<VegetationInstance>,
    surface: Option<SurfaceHandle>,
}

impl Chunk {
    pub fn coord(&self) -> ChunkCoord {
        self.coord
    }

    pub fn heights(&self) -> &HeightField {
        &self.heights
    }

    pub fn size(&self) -> u32 {
        self.heights.size()
    }

    /// world position of local (0, 0)
    pub fn origin(&self) -> Vec3 {
        self.coord.origin(self.size())
    }

    pub fn vegetation(&self) -> &[VegetationInstance] {
        &self.vegetation
    }

    pub fn surface(&self) -> Option<SurfaceHandle> {
        self.surface
    }

    pub(crate) fn attach_surface(&mut self, handle: SurfaceHandle) {
        debug_assert!(self.surface.is_none(), "chunk {} exported twice", self.coord);
        self.surface = Some(handle);
    }

    pub(crate) fn take_surface(&mut self) -> Option<SurfaceHandle> {
        self.surface.take()
    }
}

/// Height synthesis + vegetation placement for one world.
#[derive(Clone)]
pub struct ChunkFactory {
    synth: HeightSynth,
    rules: PlacementRules,
    chunk_size: u32,
    seed: u32,
}

impl ChunkFactory {
    pub fn new(config: &ValidConfig) -> Self {
        Self {
            synth: HeightSynth::new(config.seed, config.noise_scale),
            rules: PlacementRules {
                tree_density: config.tree_density,
                bush_density: config.bush_density,
                min_tree_spacing: config.min_tree_spacing,
            },
            chunk_size: config.chunk_size,
            seed: config.seed,
        }
    }

    pub fn synth(&self) -> &HeightSynth {
        &self.synth
    }

    pub fn chunk_size(&self) -> u32 {
        self.chunk_size
    }

    /// Total: every coordinate yields a complete chunk.
    pub fn generate(&self, coord: ChunkCoord) -> Chunk {
        let heights = self.synth.sample_chunk(coord, self.chunk_size);
        let mut rng = chunk_rng(self.seed, coord);
        let vegetation = place_vegetation(&heights, &self.rules, &mut rng);

        Chunk {
            coord,
            heights,
            vegetation,
            surface: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorldConfig;

    fn factory() -> ChunkFactory {
        ChunkFactory::new(&WorldConfig::default().validated().unwrap())
    }

    #[test]
    fn regeneration_is_identical() {
        let f = factory();
        let coord = ChunkCoord::new(12, -40);
        let a = f.generate(coord);
        let b = factory().generate(coord);
        assert_eq!(a.heights(), b.heights());
        assert_eq!(a.vegetation(), b.vegetation());
        assert_eq!(a.surface(), None);
    }

    #[test]
    fn chunk_geometry_follows_config() {
        let chunk = factory().generate(ChunkCoord::new(-1, 2));
        assert_eq!(chunk.size(), 32);
        assert_eq!(chunk.heights().samples().len(), 32 * 32);
        assert_eq!(chunk.origin(), Vec3::new(-32.0, 0.0, 64.0));
    }

    #[test]
    fn surface_is_attached_then_taken_once() {
        let mut chunk = factory().generate(ChunkCoord::new(0, 0));
        let handle = SurfaceHandle(Entity::from_raw(5));
        chunk.attach_surface(handle);
        assert_eq!(chunk.surface(), Some(handle));
        assert_eq!(chunk.take_surface(), Some(handle));
        assert_eq!(chunk.take_surface(), None);
    }
}
