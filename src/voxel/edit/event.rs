//! Interaction events and their outcomes

use crate::core::types::{IVec3, Vec3};
use crate::voxel::block::BlockType;

/// Reach distance of the reference configuration, in blocks
pub const DEFAULT_REACH: f32 = 8.0;

/// A discrete pointer action, carrying the camera pose at the time of the press
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InteractionEvent {
    /// Remove the block under the crosshair
    Break {
        origin: Vec3,
        direction: Vec3,
        reach: f32,
    },
    /// Put `block` against the face under the crosshair
    Place {
        origin: Vec3,
        direction: Vec3,
        reach: f32,
        block: BlockType,
    },
}

/// What an event did to the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditOutcome {
    /// The raycast found nothing within reach; the grid is unchanged
    Missed,
    /// `previous` at `position` was replaced by air
    Broken {
        position: IVec3,
        previous: BlockType,
    },
    /// `block` was written at `position`, overwriting `replaced`
    Placed {
        position: IVec3,
        block: BlockType,
        replaced: BlockType,
    },
    /// The placement target lay outside the world and was dropped
    Dropped {
        target: IVec3,
    },
}

impl EditOutcome {
    /// Whether the grid was mutated
    pub fn changed_grid(&self) -> bool {
        matches!(self, EditOutcome::Broken { .. } | EditOutcome::Placed { .. })
    }
}
