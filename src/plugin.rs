//! Bevy wiring: the window resource, shared assets & the per‑frame tick

use bevy::prelude::*;

use crate::chunk_stream::StreamingWindow;
use crate::components::Observer;
use crate::config::ValidConfig;
use crate::render::{setup_forest_assets, ForestAssets, MeshPresenter};

/// Streams forest chunks around the single [`Observer`] entity.
pub struct ForestWorldPlugin {
    config: ValidConfig,
}

impl ForestWorldPlugin {
    pub fn new(config: ValidConfig) -> Self {
        Self { config }
    }
}

impl Plugin for ForestWorldPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(StreamingWindow::new(self.config.clone()))
            .add_systems(Startup, setup_forest_assets)
            .add_systems(Update, stream_chunks_system);
    }
}

/* ===========================================================
   stream_chunks_system – one window tick per frame
   =========================================================== */
pub fn stream_chunks_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    assets: Res<ForestAssets>,
    mut window: ResMut<StreamingWindow>,
    observer_q: Query<&Transform, With<Observer>>,
) {
    let Ok(observer) = observer_q.get_single() else { return };

    let mut presenter = MeshPresenter {
        commands: &mut commands,
        meshes: &mut *meshes,
        assets: &*assets,
    };
    window.update(observer.translation, &mut presenter);
}
