use bevy::prelude::*;

use crate::cube::colors::FaceSlot;
use crate::cube::model::PocketCube;
use crate::log;
use crate::utils::constants::camera_3d_constants::{
    CAMERA_3D_INITIAL_X, CAMERA_3D_INITIAL_Y, CAMERA_3D_INITIAL_Z,
};
use crate::utils::constants::cube_constants::{
    CUBELET_SIZE, INITIAL_ORIENTATION, PALETTE, STICKER_METALNESS, STICKER_ROUGHNESS,
};
use crate::utils::objects::{CubeModel, CubeRoot, CubeletIndex, StickerSlot};

/// Systems
pub fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Camera
    commands.spawn((
        Camera3d::default(),
        // Start at fixed position looking at the origin
        Transform::from_xyz(CAMERA_3D_INITIAL_X, CAMERA_3D_INITIAL_Y, CAMERA_3D_INITIAL_Z)
            .looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Light
    commands.spawn((
        PointLight {
            intensity: 2_000_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(2.0, 2.0, -2.0),
    ));

    // Ambient light
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 100.0, // Bevy 0.17.0 uses a 0-100 scale here
        affects_lightmapped_meshes: true,
    });

    // Parent transform for the whole cube with the fixed display orientation.
    let [rx, ry, rz] = INITIAL_ORIENTATION;
    let root = commands
        .spawn((
            Transform::from_rotation(Quat::from_euler(EulerRot::XYZ, rx, ry, rz)),
            Visibility::default(),
            CubeRoot,
        ))
        .id();

    // One mesh per slot orientation, shared by all cubelets.
    let sticker_meshes: Vec<Handle<Mesh>> = FaceSlot::ALL
        .iter()
        .map(|slot| meshes.add(sticker_mesh(*slot)))
        .collect();

    // Assemble the model, then spawn one entity per cubelet with six sticker
    // children, each with its own material so it can be recolored alone.
    let model = PocketCube::new(&PALETTE);
    for (index, cubelet) in model.cubelets().iter().enumerate() {
        let entity = commands
            .spawn((
                Transform::from_translation(cubelet.position),
                Visibility::default(),
                CubeletIndex(index),
            ))
            .id();
        for slot in FaceSlot::ALL {
            let sticker = commands
                .spawn((
                    Mesh3d(sticker_meshes[slot.index()].clone()),
                    MeshMaterial3d(materials.add(StandardMaterial {
                        base_color: cubelet.colors.get(slot),
                        perceptual_roughness: STICKER_ROUGHNESS,
                        metallic: STICKER_METALNESS,
                        cull_mode: None, // Disable backface culling - render both sides
                        double_sided: true,
                        ..default()
                    })),
                    Transform::default(),
                    StickerSlot(slot.index()),
                ))
                .id();
            commands.entity(entity).add_children(&[sticker]);
        }
        commands.entity(root).add_children(&[entity]);
    }

    commands.insert_resource(CubeModel(model));

    log!("Pocket cube ready.");
    log!("Face turns: Q/W front, A/S back, E/R right, D/F left, T/Y up, G/H down");
    log!("View: Left/Right arrows orbit, Up/Down arrows zoom");
}

/// Builds the quad for one sticker: a square of side `CUBELET_SIZE` offset
/// half that distance along the slot's outward normal.
fn sticker_mesh(slot: FaceSlot) -> Mesh {
    let normal = slot.normal();
    let half = CUBELET_SIZE / 2.0;
    // Two in-plane directions spanning the quad.
    let u = match slot {
        FaceSlot::Right | FaceSlot::Left => Vec3::Z,
        FaceSlot::Top | FaceSlot::Bottom => Vec3::X,
        FaceSlot::Front | FaceSlot::Back => Vec3::X,
    };
    let v = normal.cross(u).normalize();

    let center = normal * half;
    let corners = [
        center - u * half - v * half,
        center + u * half - v * half,
        center + u * half + v * half,
        center - u * half + v * half,
    ];

    // Two triangles, no index buffer.
    let positions: Vec<[f32; 3]> = [
        corners[0], corners[1], corners[2], corners[0], corners[2], corners[3],
    ]
    .iter()
    .map(|corner| corner.to_array())
    .collect();
    let normals = vec![normal.to_array(); 6];
    let uvs = vec![
        [0.0, 0.0],
        [1.0, 0.0],
        [1.0, 1.0],
        [0.0, 0.0],
        [1.0, 1.0],
        [0.0, 1.0],
    ];

    let mut mesh = Mesh::new(
        bevy::mesh::PrimitiveTopology::TriangleList,
        Default::default(),
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh
}
