// This file defines the components and resources used by the cube scene.
use bevy::prelude::*;

use crate::cube::model::PocketCube;

/// The puzzle model driving the scene.
#[derive(Resource, Default, Debug)]
pub struct CubeModel(pub PocketCube);

/// A component that marks the parent entity holding the whole cube.
#[derive(Component)]
pub struct CubeRoot;

/// A component tying a cubelet entity to its index in the model.
#[derive(Component)]
pub struct CubeletIndex(pub usize);

/// A component tying a sticker entity to its color slot on the cubelet.
#[derive(Component)]
pub struct StickerSlot(pub usize);

/// A component that marks the transient group carrying an in-flight face
/// rotation. Exists only while a rotation is in progress.
#[derive(Component)]
pub struct RotationPivot;
