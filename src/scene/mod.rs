//! Block world session: configuration and the scene that owns the grid

pub mod config;
pub mod manager;

pub use config::{AtlasConfig, SceneConfig};
pub use manager::{CameraPose, SceneManager, SceneStatus};
