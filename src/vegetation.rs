//! vegetation placement – trees with spacing exclusion, bush clusters and
//! standalone bushes, all driven by a per‑chunk seeded stream

use std::f32::consts::TAU;

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::constants::*;
use crate::coords::ChunkCoord;
use crate::terrain::HeightField;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VegetationKind {
    Tree,
    Bush,
}

/// One prop, positioned relative to its chunk's origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VegetationInstance {
    pub local_position: Vec3,
    pub scale: f32,
    /// radians in `[0, 2π)`
    pub rotation_y: f32,
    pub kind: VegetationKind,
}

impl VegetationInstance {
    pub fn world_position(&self, chunk_origin: Vec3) -> Vec3 {
        chunk_origin + self.local_position
    }

    /// transform relative to the chunk origin
    pub fn local_transform(&self) -> Transform {
        Transform {
            translation: self.local_position,
            rotation: Quat::from_rotation_y(self.rotation_y),
            scale: Vec3::splat(self.scale),
        }
    }

    /// full world transform for a renderer
    pub fn world_transform(&self, chunk_origin: Vec3) -> Transform {
        Transform {
            translation: self.world_position(chunk_origin),
            ..self.local_transform()
        }
    }
}

/// Densities & spacing for one placement pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementRules {
    pub tree_density: f32,
    pub bush_density: f32,
    pub min_tree_spacing: f32,
}

/// Deterministic stream for one chunk of one world.
///
/// splitmix64‑style mixing of the world seed and both coordinates, so
/// neighbouring chunks get unrelated streams.
pub fn chunk_rng(world_seed: u32, coord: ChunkCoord) -> ChaCha8Rng {
    let mut h = (world_seed as u64) ^ 0x9E37_79B9_7F4A_7C15;
    for part in [coord.x as u32 as u64, coord.z as u32 as u64] {
        h = h.wrapping_add(part).wrapping_add(0x9E37_79B9_7F4A_7C15);
        h = (h ^ (h >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        h = (h ^ (h >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        h ^= h >> 31;
    }
    ChaCha8Rng::seed_from_u64(h)
}

#[inline]
fn too_close_to_trees(x: f32, z: f32, trees: &[Vec2], spacing: f32) -> bool {
    let p = Vec2::new(x, z);
    let min_sq = spacing * spacing;
    trees.iter().any(|t| t.distance_squared(p) < min_sq)
}

/// Scan the chunk row‑major and place vegetation.
///
/// Draw order per cell is fixed (tree roll, then tree attributes and its
/// cluster, otherwise the bush roll), which is what makes the output a pure
/// function of the stream.
pub fn place_vegetation<R: Rng>(
    heights: &HeightField,
    rules: &PlacementRules,
    rng: &mut R,
) -> Vec<VegetationInstance> {
    let size = heights.size();
    let mut out = Vec::new();
    let mut trees: Vec<Vec2> = Vec::new();

    for z in 0..size {
        for x in 0..size {
            let height = heights.get(x, z);
            let (fx, fz) = (x as f32, z as f32);

            let tree_roll: f32 = rng.gen();
            if tree_roll < rules.tree_density
                && !too_close_to_trees(fx, fz, &trees, rules.min_tree_spacing)
            {
                trees.push(Vec2::new(fx, fz));
                out.push(VegetationInstance {
                    local_position: Vec3::new(fx, height, fz),
                    scale: rng.gen_range(TREE_SCALE),
                    rotation_y: rng.gen_range(0.0..TAU),
                    kind: VegetationKind::Tree,
                });

                /* a few bushes huddled around the trunk */
                if rng.gen_bool(BUSH_CLUSTER_CHANCE) {
                    for _ in 0..rng.gen_range(BUSH_CLUSTER_SIZE) {
                        let angle = rng.gen_range(0.0..TAU);
                        let dist = rng.gen_range(BUSH_CLUSTER_DISTANCE);
                        out.push(VegetationInstance {
                            local_position: Vec3::new(
                                fx + angle.cos() * dist,
                                height,
                                fz + angle.sin() * dist,
                            ),
                            scale: rng.gen_range(CLUSTER_BUSH_SCALE),
                            rotation_y: rng.gen_range(0.0..TAU),
                            kind: VegetationKind::Bush,
                        });
                    }
                }
            } else if rng.gen::<f32>() < rules.bush_density {
                out.push(VegetationInstance {
                    local_position: Vec3::new(fx, height, fz),
                    scale: rng.gen_range(STANDALONE_BUSH_SCALE),
                    rotation_y: rng.gen_range(0.0..TAU),
                    kind: VegetationKind::Bush,
                });
            }
        }
    }

    out
}
