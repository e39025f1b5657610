//! Break/place semantics over a world grid

use crate::core::types::Vec3;
use crate::voxel::block::BlockType;
use crate::voxel::grid::WorldGrid;
use crate::voxel::raycast::Raycaster;

use super::event::{EditOutcome, InteractionEvent};

/// Running totals of applied events
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EditStats {
    pub breaks: u64,
    pub places: u64,
    pub dropped: u64,
    pub misses: u64,
}

/// Applies break and place events to a [`WorldGrid`]
#[derive(Debug, Default)]
pub struct InteractionController {
    stats: EditStats,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> EditStats {
        self.stats
    }

    /// Apply one event synchronously
    pub fn apply(&mut self, grid: &mut WorldGrid, event: InteractionEvent) -> EditOutcome {
        match event {
            InteractionEvent::Break { origin, direction, reach } => {
                self.on_break(grid, origin, direction, reach)
            }
            InteractionEvent::Place { origin, direction, reach, block } => {
                self.on_place(grid, origin, direction, reach, block)
            }
        }
    }

    /// Replace the first solid block along the ray with air
    pub fn on_break(
        &mut self,
        grid: &mut WorldGrid,
        origin: Vec3,
        direction: Vec3,
        reach: f32,
    ) -> EditOutcome {
        let hit = Raycaster::new(grid).cast(origin, direction, reach);
        if !hit.hit {
            self.stats.misses += 1;
            return EditOutcome::Missed;
        }

        grid.set_pos(hit.block_position, BlockType::Air);
        self.stats.breaks += 1;
        log::debug!("Broke {} at {:?}", hit.block, hit.block_position);
        EditOutcome::Broken {
            position: hit.block_position,
            previous: hit.block,
        }
    }

    /// Write `block` into the cell adjacent to the struck face. The target is
    /// not required to be air: an occupied cell is overwritten.
    pub fn on_place(
        &mut self,
        grid: &mut WorldGrid,
        origin: Vec3,
        direction: Vec3,
        reach: f32,
        block: BlockType,
    ) -> EditOutcome {
        let hit = Raycaster::new(grid).cast(origin, direction, reach);
        let Some(target) = hit.placement_target() else {
            self.stats.misses += 1;
            return EditOutcome::Missed;
        };

        let replaced = match grid.get_pos(target) {
            Ok(replaced) => replaced,
            Err(_) => {
                self.stats.dropped += 1;
                log::debug!("Dropped {} placement outside world at {:?}", block, target);
                return EditOutcome::Dropped { target };
            }
        };

        grid.set_pos(target, block);
        self.stats.places += 1;
        log::debug!("Placed {} at {:?} (was {})", block, target, replaced);
        EditOutcome::Placed {
            position: target,
            block,
            replaced,
        }
    }
}
