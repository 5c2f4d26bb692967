use bevy::prelude::*;

use crate::components::Observer;
use crate::constants::CAMERA_OFFSET;

/// startup: perspective camera & a sun
pub fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(CAMERA_OFFSET).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.spawn((
        DirectionalLight {
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(40.0, 80.0, 20.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// simple chase camera – fixed offset behind the observer, looking at it
///
/// NOTE: runs in **PostUpdate**, after the observer has moved this frame.
pub fn camera_follow_system(
    mut cam_q: Query<&mut Transform, (With<Camera>, Without<Observer>)>,
    observer_q: Query<&Transform, With<Observer>>,
) {
    let Ok(mut cam_tf) = cam_q.get_single_mut() else { return };
    let Ok(target)     = observer_q.get_single()  else { return };

    let focus = target.translation;
    *cam_tf = Transform::from_translation(focus + CAMERA_OFFSET).looking_at(focus, Vec3::Y);
}
