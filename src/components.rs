use bevy::prelude::*;

use crate::coords::ChunkCoord;
use crate::vegetation::VegetationKind;

/* ===========================================================
   observer
   =========================================================== */
/// The roaming point the streaming window is centred on.
#[derive(Component, Default)]
pub struct Observer;

#[derive(Component, Default, Deref, DerefMut)]
pub struct Velocity(pub Vec3);

/* ===========================================================
   streamed scene entities
   =========================================================== */
/// root of one exported chunk – terrain mesh, parent of its props
#[derive(Component)]
pub struct ChunkTerrain {
    pub coord: ChunkCoord,
}

#[derive(Component)]
pub struct VegetationProp {
    pub kind: VegetationKind,
}
