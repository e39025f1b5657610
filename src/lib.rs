//! Blockworld - an editable voxel world with DDA block picking

pub mod core;
pub mod math;
pub mod voxel;
pub mod render;
pub mod scene;
