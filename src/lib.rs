pub mod cube {
    pub mod colors;
    pub mod model;
    pub mod permutation;
}

pub mod utils {
    pub mod camera;
    pub mod constants;
    pub mod inputs;
    pub mod macros;
    pub mod objects;
    pub mod rotation;
    pub mod settings;
    pub mod setup;
    pub mod spin;
}

pub mod plugins {
    pub mod cube_plugin;
}
