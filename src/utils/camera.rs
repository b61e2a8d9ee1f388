use bevy::prelude::*;

use crate::utils::constants::camera_3d_constants::{
    CAMERA_3D_INITIAL_Y, CAMERA_3D_MAX_RADIUS, CAMERA_3D_MIN_RADIUS, CAMERA_3D_SPEED_ORBIT,
    CAMERA_3D_SPEED_ZOOM,
};

/// Orbiting 3D Camera System
/// Rotates around the origin with Left/Right arrows and zooms in/out with
/// Up/Down arrows. Letter keys are reserved for face turns.
pub fn camera_3d_orbit_inputs(
    keyboard: Res<ButtonInput<KeyCode>>,
    timer: Res<Time>,
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
) {
    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };

    // Orbit parameters
    let speed = CAMERA_3D_SPEED_ORBIT * timer.delta_secs();
    let zoom_speed = CAMERA_3D_SPEED_ZOOM * timer.delta_secs();

    let mut yaw = transform.translation.x.atan2(transform.translation.z);
    let mut radius = transform.translation.xz().length();

    // Handle Inputs
    let left = keyboard.pressed(KeyCode::ArrowLeft);
    let right = keyboard.pressed(KeyCode::ArrowRight);
    let up = keyboard.pressed(KeyCode::ArrowUp);
    let down = keyboard.pressed(KeyCode::ArrowDown);

    // Check if *any* key is pressed
    let changed = left || right || up || down;

    // Update angles and radius
    if left {
        yaw += speed;
    }
    if right {
        yaw -= speed;
    }

    if up {
        radius -= zoom_speed;
    }
    if down {
        radius += zoom_speed;
    }

    // Clamp zoom range
    radius = radius.clamp(CAMERA_3D_MIN_RADIUS, CAMERA_3D_MAX_RADIUS);

    // Compute new position relative to the origin
    if changed {
        transform.translation = Vec3::new(
            radius * yaw.sin(),
            CAMERA_3D_INITIAL_Y, // keep same height
            radius * yaw.cos(),
        );
    }

    // Make the camera look at the origin
    transform.look_at(Vec3::ZERO, Vec3::Y);
}
