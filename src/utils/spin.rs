use bevy::prelude::*;

use crate::utils::objects::CubeRoot;
use crate::utils::settings::Settings;

/// Continuous idle spin of the whole cube on all three axes.
///
/// This is the static display variant's tick hook. It is off by default
/// (see [`Settings`]) so that discrete face turns stay visible.
pub fn idle_spin(
    settings: Res<Settings>,
    timer: Res<Time>,
    mut root_query: Query<&mut Transform, With<CubeRoot>>,
) {
    if !settings.idle_spin {
        return;
    }
    let Ok(mut transform) = root_query.single_mut() else {
        return;
    };
    let radians = settings.idle_spin_degrees_per_sec.to_radians() * timer.delta_secs();
    transform.rotate_z(radians);
    transform.rotate_x(radians);
    transform.rotate_y(radians);
}
