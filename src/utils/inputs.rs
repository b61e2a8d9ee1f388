use bevy::prelude::*;

use crate::cube::model::{CommandError, RotationCommand};
use crate::cube::permutation::Axis;
use crate::utils::objects::CubeModel;

/// Maps one key press to a face-rotation command, two keys per face
/// (clockwise / counter-clockwise). Returns `None` for unmapped keys.
pub fn command_for_key(key: KeyCode) -> Option<RotationCommand> {
    let (axis, positive, clockwise) = match key {
        // Front face
        KeyCode::KeyQ => (Axis::Z, true, true),
        KeyCode::KeyW => (Axis::Z, true, false),
        // Back face
        KeyCode::KeyA => (Axis::Z, false, true),
        KeyCode::KeyS => (Axis::Z, false, false),
        // Right face
        KeyCode::KeyE => (Axis::X, true, true),
        KeyCode::KeyR => (Axis::X, true, false),
        // Left face
        KeyCode::KeyD => (Axis::X, false, true),
        KeyCode::KeyF => (Axis::X, false, false),
        // Up face
        KeyCode::KeyT => (Axis::Y, true, true),
        KeyCode::KeyY => (Axis::Y, true, false),
        // Down face
        KeyCode::KeyG => (Axis::Y, false, true),
        KeyCode::KeyH => (Axis::Y, false, false),
        _ => return None,
    };
    Some(RotationCommand {
        axis,
        positive,
        clockwise,
    })
}

/// Handle keyboard inputs: submit mapped face turns to the model. Commands
/// arriving while a rotation is in flight are dropped silently.
pub fn handle_rotation_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut model: ResMut<CubeModel>,
) {
    for key in keyboard.get_just_pressed() {
        let Some(command) = command_for_key(*key) else {
            continue;
        };
        match model.0.submit(command) {
            Ok(()) => info!("face turn: {:?}", command),
            Err(CommandError::Busy) => debug!("rotation in progress, dropping {:?}", key),
        }
    }
}
