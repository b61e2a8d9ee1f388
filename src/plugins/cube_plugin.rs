use bevy::prelude::*;

/// Plugins
pub struct CubePlugin;

impl Plugin for CubePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, crate::utils::setup::setup).add_systems(
            Update,
            (
                // Input feeds the model, the animator drains it, in order
                // within one frame.
                (
                    crate::utils::inputs::handle_rotation_keys,
                    crate::utils::rotation::animate_rotation,
                )
                    .chain(),
                crate::utils::camera::camera_3d_orbit_inputs,
                crate::utils::spin::idle_spin,
            ),
        );
    }
}
