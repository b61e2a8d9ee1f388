//! Per-frame face-rotation animator.
//!
//! The model decides what each frame does ([`crate::cube::model::PocketCube::tick`]); this
//! system mirrors it onto the scene graph. While a rotation is in flight the
//! four affected cubelet entities are reparented into a transient pivot
//! group under the cube root; the pivot turns by the fixed increment each
//! frame, and once the model reports completion every cubelet is snapped to
//! its exact rest transform, recolored, and handed back to the root.

use bevy::prelude::*;

use crate::cube::model::TickOutcome;
use crate::utils::objects::{CubeModel, CubeRoot, CubeletIndex, RotationPivot, StickerSlot};

pub fn animate_rotation(
    mut commands: Commands,
    mut model: ResMut<CubeModel>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    root_query: Query<Entity, With<CubeRoot>>,
    mut pivot_query: Query<(Entity, &mut Transform), With<RotationPivot>>,
    cubelet_query: Query<(Entity, &CubeletIndex, &Children)>,
    sticker_query: Query<(&StickerSlot, &MeshMaterial3d<StandardMaterial>)>,
) {
    let Ok(root) = root_query.single() else {
        return;
    };

    match model.0.tick() {
        TickOutcome::Idle => {}

        TickOutcome::Step {
            axis,
            angle,
            cubelets,
        } => {
            if let Ok((_, mut transform)) = pivot_query.single_mut() {
                transform.rotate_axis(axis.direction(), angle);
            } else {
                // First step: gather the face into a fresh pivot group,
                // spawned already carrying the first increment.
                let pivot = commands
                    .spawn((
                        Transform::from_rotation(Quat::from_axis_angle(axis.unit(), angle)),
                        Visibility::default(),
                        RotationPivot,
                    ))
                    .id();
                commands.entity(root).add_children(&[pivot]);

                let members: Vec<Entity> = cubelet_query
                    .iter()
                    .filter(|(_, index, _)| cubelets.contains(&index.0))
                    .map(|(entity, _, _)| entity)
                    .collect();
                commands.entity(pivot).add_children(&members);
            }
        }

        TickOutcome::Finished { command, cubelets } => {
            debug!("face turn complete: {:?}", command);
            let mut returned = Vec::new();
            for (entity, index, children) in &cubelet_query {
                if !cubelets.contains(&index.0) {
                    continue;
                }
                let state = &model.0.cubelets()[index.0];

                // Exact rest transform, discarding the accumulated
                // incremental rotation.
                commands
                    .entity(entity)
                    .insert(Transform::from_translation(state.position));

                // Rewrite sticker colors in slot order.
                for child in children {
                    let Ok((slot, material_handle)) = sticker_query.get(*child) else {
                        continue;
                    };
                    if let Some(material) = materials.get_mut(&material_handle.0) {
                        material.base_color = state.colors.0[slot.0];
                    }
                }
                returned.push(entity);
            }
            commands.entity(root).add_children(&returned);

            if let Ok((pivot, _)) = pivot_query.single_mut() {
                commands.entity(pivot).despawn();
            }
        }
    }
}
