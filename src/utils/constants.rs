// Constants used by the cube, structured into modules.

/// 3D camera
pub mod camera_3d_constants {
    pub const CAMERA_3D_INITIAL_X: f32 = 0.0;
    pub const CAMERA_3D_INITIAL_Y: f32 = 2.0;
    pub const CAMERA_3D_INITIAL_Z: f32 = 6.0;

    pub const CAMERA_3D_SPEED_ORBIT: f32 = 2.0;
    pub const CAMERA_3D_SPEED_ZOOM: f32 = 4.0;

    // Radius range for the camera's orbit.
    pub const CAMERA_3D_MIN_RADIUS: f32 = 3.0;
    pub const CAMERA_3D_MAX_RADIUS: f32 = 12.0;
}

/// Pocket cube geometry and animation
pub mod cube_constants {
    use bevy::prelude::Color;

    // Half the grid spacing: cubelet centers sit at the sign combinations of this.
    pub const GRID_OFFSET: f32 = 0.5;

    // Cubelets are slightly smaller than the grid spacing to leave visible gaps.
    pub const CUBELET_SIZE: f32 = 0.95;

    // A cubelet belongs to a face when its coordinate along the face axis is
    // within this tolerance of +-GRID_OFFSET.
    pub const FACE_SELECT_TOLERANCE: f32 = 0.1;

    // Per-frame rotation increment in radians. Does not evenly divide a
    // quarter turn; the terminal tick snaps to the exact angle.
    pub const STEP_ANGLE: f32 = 0.1;

    pub const QUARTER_TURN: f32 = std::f32::consts::FRAC_PI_2;

    // Fixed display orientation of the whole cube (Euler XYZ, radians).
    pub const INITIAL_ORIENTATION: [f32; 3] = [-0.5, -0.1, 0.8];

    // Face palette: right, left, up/down, front/back.
    pub const PALETTE: [Color; 4] = [
        Color::srgb(1.0, 0.0, 0.0), // red (right)
        Color::srgb(0.0, 1.0, 0.0), // green (left)
        Color::srgb(1.0, 1.0, 0.0), // yellow (up/down)
        Color::srgb(0.0, 0.0, 1.0), // blue (front/back)
    ];

    // Color of faces that point into the cube interior.
    pub const INTERIOR_COLOR: Color = Color::srgb(0.2, 0.2, 0.2);

    // Sticker material finish.
    pub const STICKER_ROUGHNESS: f32 = 0.7;
    pub const STICKER_METALNESS: f32 = 0.1;
}

/// Generic game constants
pub mod game_constants {
    // Idle spin speed of the whole cube when enabled (degrees per second).
    pub const IDLE_SPIN_DEGREES_PER_SEC: f32 = 30.0;
}
