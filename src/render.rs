//! mesh‑based presenter – turns exported chunks into Bevy entities
//!
//! One terrain entity per chunk (positioned at the chunk origin) with one
//! child per vegetation instance.  Releasing a chunk despawns the whole
//! hierarchy, which also drops the last strong handle to its terrain mesh.

use bevy::prelude::*;

use crate::chunk::{Chunk, SurfaceHandle};
use crate::components::{ChunkTerrain, VegetationProp};
use crate::constants::*;
use crate::coords::ChunkCoord;
use crate::error::ExportError;
use crate::surface::{build_surface, ChunkPresenter};
use crate::vegetation::{VegetationInstance, VegetationKind};

/* ===========================================================
   shared prop meshes & materials
   =========================================================== */
#[derive(Resource, Clone)]
pub struct ForestAssets {
    pub ground: Handle<StandardMaterial>,
    pub trunk_mesh: Handle<Mesh>,
    pub trunk: Handle<StandardMaterial>,
    pub crown_mesh: Handle<Mesh>,
    pub leaves: Handle<StandardMaterial>,
    pub bush_mesh: Handle<Mesh>,
    pub bush: Handle<StandardMaterial>,
}

/// startup: build the handles every chunk shares
pub fn setup_forest_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let matte = |color: Color| StandardMaterial {
        base_color: color,
        perceptual_roughness: 0.9,
        ..default()
    };

    commands.insert_resource(ForestAssets {
        ground: materials.add(matte(GRASS_COLOR)),
        trunk_mesh: meshes.add(Cylinder::new(0.25, 2.0)),
        trunk: materials.add(matte(TRUNK_COLOR)),
        crown_mesh: meshes.add(Sphere::new(1.0)),
        leaves: materials.add(matte(LEAVES_COLOR)),
        bush_mesh: meshes.add(Sphere::new(0.6)),
        bush: materials.add(matte(BUSH_COLOR)),
    });
}

/* ===========================================================
   presenter
   =========================================================== */
pub struct MeshPresenter<'a, 'w, 's> {
    pub commands: &'a mut Commands<'w, 's>,
    pub meshes: &'a mut Assets<Mesh>,
    pub assets: &'a ForestAssets,
}

fn spawn_prop(parent: &mut ChildBuilder, assets: &ForestAssets, v: &VegetationInstance) {
    let transform = v.local_transform(); // child of the chunk root
    let prop = VegetationProp { kind: v.kind };

    match v.kind {
        VegetationKind::Tree => {
            parent
                .spawn((transform, Visibility::default(), prop))
                .with_children(|tree| {
                    tree.spawn((
                        Mesh3d(assets.trunk_mesh.clone()),
                        MeshMaterial3d(assets.trunk.clone()),
                        Transform::from_xyz(0.0, 1.0, 0.0),
                    ));
                    tree.spawn((
                        Mesh3d(assets.crown_mesh.clone()),
                        MeshMaterial3d(assets.leaves.clone()),
                        Transform::from_xyz(0.0, 2.5, 0.0),
                    ));
                });
        }
        VegetationKind::Bush => {
            parent.spawn((
                Mesh3d(assets.bush_mesh.clone()),
                MeshMaterial3d(assets.bush.clone()),
                transform,
                prop,
            ));
        }
    }
}

impl ChunkPresenter for MeshPresenter<'_, '_, '_> {
    fn export(&mut self, chunk: &Chunk) -> Result<SurfaceHandle, ExportError> {
        let surface = build_surface(chunk);
        if surface.indices.is_empty() {
            return Err(ExportError::Rejected {
                coord: chunk.coord(),
                reason: format!("{} vertices form no triangles", surface.vertex_count()),
            });
        }
        let mesh = self.meshes.add(surface.into_mesh());

        let mut root = self.commands.spawn((
            Mesh3d(mesh),
            MeshMaterial3d(self.assets.ground.clone()),
            Transform::from_translation(chunk.origin()),
            ChunkTerrain { coord: chunk.coord() },
        ));
        let assets = self.assets;
        root.with_children(|parent| {
            for v in chunk.vegetation() {
                spawn_prop(parent, assets, v);
            }
        });

        Ok(SurfaceHandle(root.id()))
    }

    fn release(&mut self, coord: ChunkCoord, handle: SurfaceHandle) {
        trace!("despawning surface of chunk {coord}");
        self.commands.entity(handle.0).despawn_recursive();
    }
}
