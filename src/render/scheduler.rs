//! Per-frame draw list: opaque blocks first, then glass.
//!
//! Every solid cell yields one full cube. There is no face culling between
//! neighbours and no batching, so frame cost grows with the number of solid
//! blocks rather than with visible surface area.

use crate::core::types::IVec3;
use crate::voxel::block::BlockType;
use crate::voxel::grid::WorldGrid;

/// Blend state a draw instruction needs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderPass {
    /// Depth-tested, no blending
    Opaque,
    /// Alpha-blended over the opaque pass
    Transparent,
}

/// One cube to draw this frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawInstruction {
    pub position: IVec3,
    pub block: BlockType,
}

impl DrawInstruction {
    pub fn pass(&self) -> RenderPass {
        if self.block.is_transparent() {
            RenderPass::Transparent
        } else {
            RenderPass::Opaque
        }
    }
}

/// Builds the ordered draw list, reusing its allocation between frames
#[derive(Debug, Default)]
pub struct RenderScheduler {
    instructions: Vec<DrawInstruction>,
    opaque_count: usize,
}

impl RenderScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Walk the grid twice in `x, y, z` ascending order: the first pass
    /// emits every non-air, non-glass cell, the second every glass cell.
    pub fn build_frame(&mut self, grid: &WorldGrid) -> &[DrawInstruction] {
        self.instructions.clear();

        self.instructions.extend(
            grid.iter()
                .filter(|(_, block)| block.is_opaque())
                .map(|(position, block)| DrawInstruction { position, block }),
        );
        self.opaque_count = self.instructions.len();

        self.instructions.extend(
            grid.iter()
                .filter(|(_, block)| block.is_transparent())
                .map(|(position, block)| DrawInstruction { position, block }),
        );

        log::trace!(
            "Frame: {} opaque, {} transparent",
            self.opaque_count,
            self.instructions.len() - self.opaque_count
        );

        &self.instructions
    }

    /// Draw list from the last [`build_frame`](Self::build_frame)
    pub fn instructions(&self) -> &[DrawInstruction] {
        &self.instructions
    }

    pub fn opaque(&self) -> &[DrawInstruction] {
        &self.instructions[..self.opaque_count]
    }

    pub fn transparent(&self) -> &[DrawInstruction] {
        &self.instructions[self.opaque_count..]
    }
}

/// Build a fresh draw list for `grid`
pub fn build_frame(grid: &WorldGrid) -> Vec<DrawInstruction> {
    let mut scheduler = RenderScheduler::new();
    scheduler.build_frame(grid);
    scheduler.instructions
}
