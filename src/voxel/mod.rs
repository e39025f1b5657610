//! Voxel data structures and operations

pub mod block;
pub mod grid;
pub mod raycast;
pub mod edit;

pub use block::{BlockFace, BlockType};
pub use grid::{WorldGrid, REFERENCE_EXTENTS};
pub use raycast::{RaycastHit, Raycaster};
pub use edit::{EditOutcome, InteractionController, InteractionEvent};
