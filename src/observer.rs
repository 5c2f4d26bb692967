//! stand‑in movement controller: WASD on the ground plane, hugging terrain

use bevy::input::ButtonInput;
use bevy::prelude::*;

use crate::chunk_stream::StreamingWindow;
use crate::components::*;
use crate::constants::*;

/// startup: drop the observer onto the terrain at the world origin
pub fn spawn_observer(mut commands: Commands, window: Res<StreamingWindow>) {
    let y = window.height_at(0.0, 0.0) + OBSERVER_EYE;
    commands.spawn((
        Observer,
        Velocity::default(),
        Transform::from_xyz(0.0, y, 0.0),
        Visibility::default(),
    ));
}

/* ===========================================================
   input (WASD / Shift)
   =========================================================== */
pub fn observer_input_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut q: Query<&mut Velocity, With<Observer>>,
) {
    let Ok(mut vel) = q.get_single_mut() else { return };

    let mut dir = Vec3::ZERO;
    if keys.pressed(KeyCode::KeyW) {
        dir.z -= 1.0;
    }
    if keys.pressed(KeyCode::KeyS) {
        dir.z += 1.0;
    }
    if keys.pressed(KeyCode::KeyA) {
        dir.x -= 1.0;
    }
    if keys.pressed(KeyCode::KeyD) {
        dir.x += 1.0;
    }

    let speed = if keys.pressed(KeyCode::ShiftLeft) {
        WALK_SPEED * RUN_MULTIPLIER
    } else {
        WALK_SPEED
    };
    vel.0 = dir.normalize_or_zero() * speed;
}

/* ===========================================================
   movement – integrate, then snap to the ground
   =========================================================== */
pub fn observer_movement_system(
    time: Res<Time>,
    window: Res<StreamingWindow>,
    mut q: Query<(&mut Transform, &Velocity), With<Observer>>,
) {
    let dt = time.delta_secs();
    for (mut tf, vel) in &mut q {
        tf.translation += vel.0 * dt;
        tf.translation.y = window.height_at(tf.translation.x, tf.translation.z) + OBSERVER_EYE;
    }
}
