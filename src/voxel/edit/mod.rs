//! Block editing driven by pointer events.
//!
//! Each event raycasts from the camera and applies at most one grid
//! mutation before returning. Nothing is queued between frames.

pub mod event;
pub mod controller;

pub use event::{EditOutcome, InteractionEvent, DEFAULT_REACH};
pub use controller::{EditStats, InteractionController};
