//! height‑field synthesis – layered Perlin noise over world coordinates
use noise::{NoiseFn, Perlin};

use crate::constants::HEIGHT_OCTAVES;
use crate::coords::ChunkCoord;

/* ===========================================================
   dense per‑chunk height grid
   =========================================================== */

/// `size × size` elevations, row‑major, indexed by local `(x, z)`.
#[derive(Clone, Debug, PartialEq)]
pub struct HeightField {
    size: u32,
    samples: Vec<f32>,
}

impl HeightField {
    #[inline]
    pub fn idx(&self, x: u32, z: u32) -> usize {
        (z * self.size + x) as usize
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// elevation at local cell `(x, z)`; panics outside `[0, size)`
    #[inline]
    pub fn get(&self, x: u32, z: u32) -> f32 {
        assert!(x < self.size && z < self.size, "cell ({x}, {z}) outside chunk");
        self.samples[self.idx(x, z)]
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }
}

/* ===========================================================
   synthesizer
   =========================================================== */

/// Pure `height(x, z)` over world space.
///
/// Owns the only noise generator of a world, seeded once at construction.
/// Two synthesizers with the same seed and scale agree bit for bit.
#[derive(Clone)]
pub struct HeightSynth {
    noise: Perlin,
    noise_scale: f64,
}

impl HeightSynth {
    pub fn new(seed: u32, noise_scale: f64) -> Self {
        Self {
            noise: Perlin::new(seed),
            noise_scale,
        }
    }

    /// elevation at a world position; small negative values are normal
    pub fn height(&self, world_x: f64, world_z: f64) -> f32 {
        HEIGHT_OCTAVES
            .iter()
            .map(|&(amplitude, divisor)| {
                let wavelength = self.noise_scale / divisor;
                self.noise.get([world_x / wavelength, world_z / wavelength]) * amplitude
            })
            .sum::<f64>() as f32
    }

    /// fill a chunk's grid – always sampled in world space so borders agree
    pub fn sample_chunk(&self, coord: ChunkCoord, chunk_size: u32) -> HeightField {
        let base_x = coord.x as f64 * chunk_size as f64;
        let base_z = coord.z as f64 * chunk_size as f64;

        let mut samples = Vec::with_capacity((chunk_size * chunk_size) as usize);
        for z in 0..chunk_size {
            for x in 0..chunk_size {
                samples.push(self.height(base_x + x as f64, base_z + z as f64));
            }
        }

        HeightField {
            size: chunk_size,
            samples,
        }
    }
}
