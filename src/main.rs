//! bootstrap for the procedural forest demo
//!
//! WASD walks the observer (Shift runs); chunks stream in and out around it.
//! Works with **Bevy 0.15**.

use bevy::diagnostic::{
    EntityCountDiagnosticsPlugin, FrameTimeDiagnosticsPlugin,
    LogDiagnosticsPlugin,
};
use bevy::input::ButtonInput;
use bevy::prelude::*;
use bevy::window::{MonitorSelection, PrimaryWindow, WindowMode};

use procedural_forest::camera::{camera_follow_system, setup_camera};
use procedural_forest::constants::SKY_COLOR;
use procedural_forest::observer::{
    observer_input_system, observer_movement_system, spawn_observer,
};
use procedural_forest::plugin::stream_chunks_system;
use procedural_forest::{ConfigError, ForestWorldPlugin, WorldConfig};

/* ------------------------------------------------------------------------ */
/* F11 borderless‑fullscreen toggle                                         */
/* ------------------------------------------------------------------------ */
fn toggle_fullscreen(
    keys: Res<ButtonInput<KeyCode>>,
    mut window_q: Query<&mut Window, With<PrimaryWindow>>,
) {
    if keys.just_pressed(KeyCode::F11) {
        let Ok(mut window) = window_q.get_single_mut() else { return };
        window.mode = match window.mode {
            WindowMode::Windowed => {
                WindowMode::BorderlessFullscreen(MonitorSelection::Primary)
            }
            _ => WindowMode::Windowed,
        };
    }
}

/* ------------------------------------------------------------------------ */
/* main                                                                     */
/* ------------------------------------------------------------------------ */
fn main() -> Result<(), ConfigError> {
    // bad tunables stop us before a window ever opens
    let config = WorldConfig::default().validated()?;

    App::new()
        /* diagnostics ----------------------------------------------------- */
        .add_plugins((
            LogDiagnosticsPlugin::default(),
            FrameTimeDiagnosticsPlugin::default(),
            EntityCountDiagnosticsPlugin::default(),
        ))

        /* bevy core ------------------------------------------------------- */
        .insert_resource(ClearColor(SKY_COLOR))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "procedural forest".into(),
                resolution: (1280., 720.).into(),
                mode: WindowMode::Windowed,
                ..default()
            }),
            ..default()
        }))

        /* world ----------------------------------------------------------- */
        .add_plugins(ForestWorldPlugin::new(config))

        /* startup systems ------------------------------------------------- */
        .add_systems(Startup, (setup_camera, spawn_observer))

        /* frame‑update systems ------------------------------------------- */
        .add_systems(
            Update,
            (
                observer_input_system,     // WASD + shift
                observer_movement_system,  // integrate & hug the ground
                toggle_fullscreen,
            )
                .chain()
                .before(stream_chunks_system),
        )

        /* post‑update (camera) -------------------------------------------- */
        .add_systems(PostUpdate, camera_follow_system)
        .run();

    Ok(())
}
