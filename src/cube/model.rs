//! The pocket cube model: eight cubelets with stable indices and the
//! face-rotation state machine.
//!
//! The model is pure data advanced by [`PocketCube::tick`]; the rendering
//! layer applies whatever each tick reports (an incremental step or the
//! terminal snap) to the scene graph. This keeps the rotation logic
//! independent of the frame scheduler.

use bevy::prelude::*;
use thiserror::Error;

use crate::cube::colors::FaceColors;
use crate::cube::permutation::{Axis, permute};
use crate::utils::constants::cube_constants::{
    FACE_SELECT_TOLERANCE, GRID_OFFSET, PALETTE, QUARTER_TURN, STEP_ANGLE,
};

/// Number of cubelets in the puzzle.
pub const CUBELET_COUNT: usize = 8;

/// Number of cubelets on any face.
pub const FACE_CUBELET_COUNT: usize = 4;

/// A face-rotation request: which axis, which of the two layers along it,
/// and the turn direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RotationCommand {
    pub axis: Axis,
    /// `true` selects the layer at `+GRID_OFFSET`, `false` the one at
    /// `-GRID_OFFSET`.
    pub positive: bool,
    pub clockwise: bool,
}

impl RotationCommand {
    /// Sign applied to every rotation angle: clockwise turns are positive
    /// rotations about the axis unit vector.
    pub fn sign(&self) -> f32 {
        if self.clockwise { 1.0 } else { -1.0 }
    }
}

/// Why a command was not accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("a face rotation is already in progress")]
    Busy,
}

/// One corner piece: its current rest position and color assignment.
#[derive(Clone, Copy, Debug)]
pub struct CubeletState {
    pub position: Vec3,
    pub colors: FaceColors,
}

/// What a single tick did, for the rendering layer to mirror.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickOutcome {
    /// No rotation in flight.
    Idle,
    /// One animation increment: rotate the in-flight group by `angle`
    /// (signed) about `axis`.
    Step {
        axis: Axis,
        angle: f32,
        cubelets: [usize; FACE_CUBELET_COUNT],
    },
    /// The rotation just completed; cubelet positions and colors have been
    /// snapped to their exact final values.
    Finished {
        command: RotationCommand,
        cubelets: [usize; FACE_CUBELET_COUNT],
    },
}

#[derive(Clone, Copy, Debug)]
struct ActiveRotation {
    command: RotationCommand,
    accumulated: f32,
    selected: [usize; FACE_CUBELET_COUNT],
}

/// The eight-cubelet puzzle and its single-flight rotation state.
///
/// Cubelets live in a fixed array; a rotation operates on a set of indices
/// into it, so no cubelet is ever created or destroyed after assembly.
#[derive(Debug)]
pub struct PocketCube {
    cubelets: [CubeletState; CUBELET_COUNT],
    active: Option<ActiveRotation>,
}

impl Default for PocketCube {
    fn default() -> Self {
        Self::new(&PALETTE)
    }
}

impl PocketCube {
    /// Assembles the solved cube: cubelets at the eight sign combinations of
    /// `(+-GRID_OFFSET, +-GRID_OFFSET, +-GRID_OFFSET)`, colored by the
    /// boundary rule.
    pub fn new(palette: &[Color; 4]) -> Self {
        let mut index = 0;
        let mut cubelets = [CubeletState {
            position: Vec3::ZERO,
            colors: FaceColors::for_grid_position(Vec3::ZERO, palette),
        }; CUBELET_COUNT];
        for x in [-GRID_OFFSET, GRID_OFFSET] {
            for y in [-GRID_OFFSET, GRID_OFFSET] {
                for z in [-GRID_OFFSET, GRID_OFFSET] {
                    let position = Vec3::new(x, y, z);
                    cubelets[index] = CubeletState {
                        position,
                        colors: FaceColors::for_grid_position(position, palette),
                    };
                    index += 1;
                }
            }
        }
        Self {
            cubelets,
            active: None,
        }
    }

    pub fn cubelets(&self) -> &[CubeletState; CUBELET_COUNT] {
        &self.cubelets
    }

    pub fn is_rotating(&self) -> bool {
        self.active.is_some()
    }

    /// Indices of the cubelets whose coordinate along `axis` lies within
    /// tolerance of the selected layer.
    pub fn select_face(&self, axis: Axis, positive: bool) -> Vec<usize> {
        let target = if positive { GRID_OFFSET } else { -GRID_OFFSET };
        self.cubelets
            .iter()
            .enumerate()
            .filter(|(_, cubelet)| {
                (axis.component(cubelet.position) - target).abs() < FACE_SELECT_TOLERANCE
            })
            .map(|(index, _)| index)
            .collect()
    }

    /// Starts a face rotation, or reports `Busy` while one is in flight.
    pub fn submit(&mut self, command: RotationCommand) -> Result<(), CommandError> {
        if self.active.is_some() {
            return Err(CommandError::Busy);
        }
        let selected = self.select_face(command.axis, command.positive);
        assert_eq!(
            selected.len(),
            FACE_CUBELET_COUNT,
            "face selection for {command:?} returned {} cubelets",
            selected.len()
        );
        let mut indices = [0; FACE_CUBELET_COUNT];
        indices.copy_from_slice(&selected);
        self.active = Some(ActiveRotation {
            command,
            accumulated: 0.0,
            selected: indices,
        });
        Ok(())
    }

    /// Advances an in-flight rotation by one animation frame.
    ///
    /// Steps accumulate the fixed increment while the total is below a
    /// quarter turn; since the increment does not divide a quarter turn
    /// evenly, the animation overshoots slightly before the terminal tick
    /// snaps every affected cubelet to its exact analytic position and
    /// permutes its colors.
    pub fn tick(&mut self) -> TickOutcome {
        let Some(mut active) = self.active else {
            return TickOutcome::Idle;
        };

        if active.accumulated < QUARTER_TURN {
            active.accumulated += STEP_ANGLE;
            self.active = Some(active);
            return TickOutcome::Step {
                axis: active.command.axis,
                angle: STEP_ANGLE * active.command.sign(),
                cubelets: active.selected,
            };
        }

        let command = active.command;
        let snap = Quat::from_axis_angle(command.axis.unit(), command.sign() * QUARTER_TURN);
        for index in active.selected {
            let cubelet = &mut self.cubelets[index];
            cubelet.position = snap * cubelet.position;
            cubelet.colors = permute(&cubelet.colors, command.axis, command.clockwise);
        }
        self.active = None;
        TickOutcome::Finished {
            command,
            cubelets: active.selected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(axis: Axis, positive: bool, clockwise: bool) -> RotationCommand {
        RotationCommand {
            axis,
            positive,
            clockwise,
        }
    }

    #[test]
    fn every_face_selects_four_cubelets() {
        let cube = PocketCube::default();
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            for positive in [true, false] {
                let selected = cube.select_face(axis, positive);
                assert_eq!(selected.len(), 4, "{axis:?} positive={positive}");
                let target = if positive { 0.5 } else { -0.5 };
                for index in selected {
                    let coord = axis.component(cube.cubelets[index].position);
                    assert!((coord - target).abs() < 1e-6);
                }
            }
        }
    }

    #[test]
    fn submit_while_rotating_is_rejected() {
        let mut cube = PocketCube::default();
        cube.submit(command(Axis::Z, true, true)).unwrap();
        cube.tick();
        assert_eq!(
            cube.submit(command(Axis::X, true, true)),
            Err(CommandError::Busy)
        );
        assert!(cube.is_rotating());
    }

    #[test]
    fn rotation_overshoots_then_snaps() {
        let mut cube = PocketCube::default();
        cube.submit(command(Axis::Z, true, true)).unwrap();

        let mut steps = 0;
        let mut total = 0.0;
        loop {
            match cube.tick() {
                TickOutcome::Step { angle, .. } => {
                    steps += 1;
                    total += angle;
                }
                TickOutcome::Finished { .. } => break,
                TickOutcome::Idle => panic!("went idle mid-rotation"),
            }
        }
        // 0.1 rad steps pass pi/2 after 16 increments (1.6 rad).
        assert_eq!(steps, 16);
        assert!(total > QUARTER_TURN);
        assert!(!cube.is_rotating());
        assert_eq!(cube.tick(), TickOutcome::Idle);
    }

    #[test]
    fn finished_positions_are_analytic_not_accumulated() {
        let mut cube = PocketCube::default();
        let start: Vec<Vec3> = cube.cubelets.iter().map(|c| c.position).collect();
        cube.submit(command(Axis::Z, true, true)).unwrap();
        let selected = loop {
            if let TickOutcome::Finished { cubelets, .. } = cube.tick() {
                break cubelets;
            }
        };
        let exact = Quat::from_axis_angle(Vec3::Z, QUARTER_TURN);
        for index in selected {
            let expected = exact * start[index];
            assert!(
                cube.cubelets[index].position.distance(expected) < 1e-5,
                "cubelet {index}: {:?} != {expected:?}",
                cube.cubelets[index].position
            );
        }
    }

    #[test]
    fn counter_clockwise_turn_uses_negative_angle() {
        let mut cube = PocketCube::default();
        cube.submit(command(Axis::Y, true, false)).unwrap();
        match cube.tick() {
            TickOutcome::Step { axis, angle, .. } => {
                assert_eq!(axis, Axis::Y);
                assert!((angle + STEP_ANGLE).abs() < 1e-6);
            }
            other => panic!("expected a step, got {other:?}"),
        }
    }
}
