use bevy::prelude::*;

use pocket_cube::plugins::cube_plugin::CubePlugin;
use pocket_cube::utils::settings::Settings;

/// Main application function
fn main() {
    let settings = Settings::load();
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: settings.window_title.clone(),
                fit_canvas_to_parent: true,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(settings)
        .add_plugins(CubePlugin)
        .run();
}
