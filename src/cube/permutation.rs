//! Color permutation applied to a cubelet after a completed quarter turn.
//!
//! A 90 degree turn about a principal axis cycles the four slots that are
//! perpendicular to that axis and leaves the two axis-aligned slots alone.
//! The cycles are hard-coded lookup tables rather than recomputed geometry:
//! `new[i] = old[SRC[i]]` over the slot order
//! `[right, left, top, bottom, front, back]`.

use bevy::prelude::*;

use crate::cube::colors::{FaceColors, SLOT_COUNT};

/// One of the three principal rotation axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Unit vector of the axis.
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }

    /// Normalized direction for `Transform::rotate_axis`.
    pub fn direction(self) -> Dir3 {
        match self {
            Axis::X => Dir3::X,
            Axis::Y => Dir3::Y,
            Axis::Z => Dir3::Z,
        }
    }

    /// Component of `v` along this axis.
    pub fn component(self, v: Vec3) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }
}

// Front/back face turn: right <- bottom, left <- top, top <- right, bottom <- left.
const Z_CLOCKWISE: [usize; SLOT_COUNT] = [3, 2, 0, 1, 4, 5];
// Inverse: right <- top, left <- bottom, top <- left, bottom <- right.
const Z_COUNTER: [usize; SLOT_COUNT] = [2, 3, 1, 0, 4, 5];

// Right/left face turn: top <- back, bottom <- front, front <- top, back <- bottom.
const X_CLOCKWISE: [usize; SLOT_COUNT] = [0, 1, 5, 4, 2, 3];
// Inverse: top <- front, bottom <- back, front <- bottom, back <- top.
const X_COUNTER: [usize; SLOT_COUNT] = [0, 1, 4, 5, 3, 2];

// Up/down face turn: right <- front, left <- back, front <- left, back <- right.
const Y_CLOCKWISE: [usize; SLOT_COUNT] = [4, 5, 2, 3, 1, 0];
// Inverse: right <- back, left <- front, front <- right, back <- left.
const Y_COUNTER: [usize; SLOT_COUNT] = [5, 4, 2, 3, 0, 1];

fn source_slots(axis: Axis, clockwise: bool) -> &'static [usize; SLOT_COUNT] {
    match (axis, clockwise) {
        (Axis::Z, true) => &Z_CLOCKWISE,
        (Axis::Z, false) => &Z_COUNTER,
        (Axis::X, true) => &X_CLOCKWISE,
        (Axis::X, false) => &X_COUNTER,
        (Axis::Y, true) => &Y_CLOCKWISE,
        (Axis::Y, false) => &Y_COUNTER,
    }
}

/// Returns the color assignment after a quarter turn about `axis`.
pub fn permute(colors: &FaceColors, axis: Axis, clockwise: bool) -> FaceColors {
    let src = source_slots(axis, clockwise);
    let mut out = colors.0;
    for (slot, source) in src.iter().enumerate() {
        out[slot] = colors.0[*source];
    }
    FaceColors(out)
}
