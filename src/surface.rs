//! terrain surface export – vertex grid, normals & triangle indices
//!
//! The surface is rebuilt from the height field every time a chunk is
//! exported; nothing here is cached on the chunk.

use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;

use crate::chunk::{Chunk, SurfaceHandle};
use crate::coords::ChunkCoord;
use crate::error::ExportError;
use crate::terrain::HeightField;

/* ===========================================================
   presentation seam
   =========================================================== */

/// The presentation collaborator.
///
/// `export` runs once per chunk right after generation; `release` runs once
/// per successfully exported chunk, after it left the resident set.
pub trait ChunkPresenter {
    fn export(&mut self, chunk: &Chunk) -> Result<SurfaceHandle, ExportError>;
    fn release(&mut self, coord: ChunkCoord, handle: SurfaceHandle);
}

/* ===========================================================
   surface data
   =========================================================== */

/// `size × size` vertices in chunk‑local space, unit spacing.
#[derive(Clone, Debug, PartialEq)]
pub struct TerrainSurface {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl TerrainSurface {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn into_mesh(self) -> Mesh {
        Mesh::new(
            PrimitiveTopology::TriangleList,
            RenderAssetUsages::MAIN_WORLD | RenderAssetUsages::RENDER_WORLD,
        )
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, self.positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, self.normals)
        .with_inserted_indices(Indices::U32(self.indices))
    }
}

/// Slope along one axis: central difference inside, one‑sided on borders.
#[inline]
fn slope(heights: &HeightField, x: u32, z: u32, along_x: bool) -> f32 {
    let last = heights.size() - 1;
    let at = |i: u32| {
        if along_x {
            heights.get(i, z)
        } else {
            heights.get(x, i)
        }
    };
    let i = if along_x { x } else { z };
    let lo = i.saturating_sub(1);
    let hi = (i + 1).min(last);
    if hi == lo {
        return 0.0;
    }
    (at(hi) - at(lo)) / (hi - lo) as f32
}

/// Build the renderable surface for a chunk.
pub fn build_surface(chunk: &Chunk) -> TerrainSurface {
    let heights = chunk.heights();
    let size = heights.size();
    let count = (size * size) as usize;

    let mut positions = Vec::with_capacity(count);
    let mut normals = Vec::with_capacity(count);

    for z in 0..size {
        for x in 0..size {
            positions.push([x as f32, heights.get(x, z), z as f32]);

            let dx = slope(heights, x, z, true);
            let dz = slope(heights, x, z, false);
            normals.push(Vec3::new(-dx, 1.0, -dz).normalize().to_array());
        }
    }

    /* two up‑facing, counter‑clockwise triangles per quad */
    let quads = size.saturating_sub(1);
    let mut indices = Vec::with_capacity((quads * quads * 6) as usize);
    for z in 0..quads {
        for x in 0..quads {
            let a = z * size + x;
            let b = a + size;
            let c = a + 1;
            let d = b + 1;
            indices.extend_from_slice(&[a, b, c, c, b, d]);
        }
    }

    TerrainSurface {
        positions,
        normals,
        indices,
    }
}
