/// Integration tests driving whole face rotations through the model API.
use bevy::prelude::*;

use pocket_cube::cube::colors::FaceColors;
use pocket_cube::cube::model::{PocketCube, RotationCommand, TickOutcome};
use pocket_cube::cube::permutation::{Axis, permute};

fn command(axis: Axis, positive: bool, clockwise: bool) -> RotationCommand {
    RotationCommand {
        axis,
        positive,
        clockwise,
    }
}

/// Ticks the cube until the in-flight rotation finishes.
fn run_rotation(cube: &mut PocketCube, cmd: RotationCommand) {
    cube.submit(cmd).expect("cube should be idle");
    for _ in 0..100 {
        if let TickOutcome::Finished { .. } = cube.tick() {
            return;
        }
    }
    panic!("rotation never finished");
}

fn positions(cube: &PocketCube) -> Vec<Vec3> {
    cube.cubelets().iter().map(|c| c.position).collect()
}

fn colors(cube: &PocketCube) -> Vec<FaceColors> {
    cube.cubelets().iter().map(|c| c.colors).collect()
}

fn assert_positions_close(actual: &[Vec3], expected: &[Vec3]) {
    for (index, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(a.distance(*e) < 1e-4, "cubelet {index}: {a:?} != {e:?}");
    }
}

// Scenario A: one clockwise front-face turn recolors exactly the four
// selected cubelets, per the z-clockwise table, and leaves the rest alone.
#[test]
fn front_face_turn_recolors_only_the_selected_cubelets() {
    let mut cube = PocketCube::default();
    let selected = cube.select_face(Axis::Z, true);
    let before = colors(&cube);

    run_rotation(&mut cube, command(Axis::Z, true, true));

    assert!(!cube.is_rotating());
    for index in 0..8 {
        let expected = if selected.contains(&index) {
            permute(&before[index], Axis::Z, true)
        } else {
            before[index]
        };
        assert_eq!(cube.cubelets()[index].colors, expected, "cubelet {index}");
    }
}

// Scenario B: a turn followed by its opposite restores positions and colors.
#[test]
fn opposite_turns_cancel() {
    let mut cube = PocketCube::default();
    let start_positions = positions(&cube);
    let start_colors = colors(&cube);

    run_rotation(&mut cube, command(Axis::Z, true, true));
    run_rotation(&mut cube, command(Axis::Z, true, false));

    assert_positions_close(&positions(&cube), &start_positions);
    assert_eq!(colors(&cube), start_colors);
}

// Scenario C: four identical quarter turns close the loop.
#[test]
fn four_identical_turns_restore_the_cube() {
    let mut cube = PocketCube::default();
    let start_positions = positions(&cube);
    let start_colors = colors(&cube);

    for _ in 0..4 {
        run_rotation(&mut cube, command(Axis::X, false, true));
    }

    assert_positions_close(&positions(&cube), &start_positions);
    assert_eq!(colors(&cube), start_colors);
}

#[test]
fn rejected_command_leaves_the_cube_unaffected() {
    let mut cube = PocketCube::default();
    cube.submit(command(Axis::Z, true, true)).unwrap();
    cube.tick();

    // A second command mid-rotation must have no observable effect.
    assert!(cube.submit(command(Axis::Y, false, false)).is_err());

    while !matches!(cube.tick(), TickOutcome::Finished { .. }) {}

    // Outcome equals a single front turn on a fresh cube.
    let mut reference = PocketCube::default();
    run_rotation(&mut reference, command(Axis::Z, true, true));
    assert_positions_close(&positions(&cube), &positions(&reference));
    assert_eq!(colors(&cube), colors(&reference));
}

#[test]
fn turned_face_still_selects_four_cubelets() {
    let mut cube = PocketCube::default();
    run_rotation(&mut cube, command(Axis::Z, true, true));
    // Positions snapped exactly, so the selector keeps finding the face.
    assert_eq!(cube.select_face(Axis::Z, true).len(), 4);
    assert_eq!(cube.select_face(Axis::X, true).len(), 4);
}

#[test]
fn boundary_coloring_survives_a_scramble_of_turns() {
    use pocket_cube::utils::constants::cube_constants::INTERIOR_COLOR;

    let mut cube = PocketCube::default();
    let sequence = [
        command(Axis::Z, true, true),
        command(Axis::X, false, false),
        command(Axis::Y, true, true),
        command(Axis::Z, false, false),
        command(Axis::X, true, true),
    ];
    for cmd in sequence {
        run_rotation(&mut cube, cmd);
    }

    // Interior slots face the cube center, colored slots face outward.
    for cubelet in cube.cubelets() {
        for slot in pocket_cube::cube::colors::FaceSlot::ALL {
            let outward = slot.normal().dot(cubelet.position) > 0.0;
            let colored = cubelet.colors.get(slot) != INTERIOR_COLOR;
            assert_eq!(
                colored, outward,
                "slot {slot:?} of cubelet at {:?}",
                cubelet.position
            );
        }
    }
}
