//! Cubelet face colors: the six-slot assignment and the boundary-rule factory.

use bevy::prelude::*;

use crate::utils::constants::cube_constants::INTERIOR_COLOR;

/// Number of color slots on a cubelet.
pub const SLOT_COUNT: usize = 6;

/// One of the six fixed face-color positions on a cubelet.
///
/// The discriminant is the slot index, so the order here defines the slot
/// order everywhere: `[right, left, top, bottom, front, back]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FaceSlot {
    Right = 0,
    Left = 1,
    Top = 2,
    Bottom = 3,
    Front = 4,
    Back = 5,
}

impl FaceSlot {
    pub const ALL: [FaceSlot; SLOT_COUNT] = [
        FaceSlot::Right,
        FaceSlot::Left,
        FaceSlot::Top,
        FaceSlot::Bottom,
        FaceSlot::Front,
        FaceSlot::Back,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Outward normal of this slot in the cubelet's local frame.
    pub fn normal(self) -> Vec3 {
        match self {
            FaceSlot::Right => Vec3::X,
            FaceSlot::Left => Vec3::NEG_X,
            FaceSlot::Top => Vec3::Y,
            FaceSlot::Bottom => Vec3::NEG_Y,
            FaceSlot::Front => Vec3::Z,
            FaceSlot::Back => Vec3::NEG_Z,
        }
    }
}

/// An ordered six-slot color assignment for one cubelet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceColors(pub [Color; SLOT_COUNT]);

impl FaceColors {
    /// Builds the color assignment for a cubelet at grid coordinate
    /// `(x, y, z)`, each component +-GRID_OFFSET.
    ///
    /// A slot is colored only when the cubelet lies on the cube's outer
    /// boundary in that axis direction; inward-pointing slots get the
    /// neutral interior color. The palette is `[right, left, up/down,
    /// front/back]`: top and bottom share one color, as do front and back.
    pub fn for_grid_position(position: Vec3, palette: &[Color; 4]) -> Self {
        let interior = INTERIOR_COLOR;
        FaceColors([
            if position.x > 0.0 { palette[0] } else { interior }, // right
            if position.x < 0.0 { palette[1] } else { interior }, // left
            if position.y > 0.0 { palette[2] } else { interior }, // top
            if position.y < 0.0 { palette[2] } else { interior }, // bottom
            if position.z > 0.0 { palette[3] } else { interior }, // front
            if position.z < 0.0 { palette[3] } else { interior }, // back
        ])
    }

    pub fn get(&self, slot: FaceSlot) -> Color {
        self.0[slot.index()]
    }
}
