//! Dense block grid owning all block state

use crate::core::error::Error;
use crate::core::types::{IVec3, Result, UVec3};

use super::block::BlockType;

/// Extents of the reference world (16 x 8 x 16)
pub const REFERENCE_EXTENTS: UVec3 = UVec3::new(16, 8, 16);

/// Fixed-size 3D array of blocks, indexed `x` outer, `y` middle, `z` inner
#[derive(Clone, Debug)]
pub struct WorldGrid {
    extents: UVec3,
    blocks: Vec<BlockType>,
}

impl WorldGrid {
    /// Create a grid of the given extents with every cell set to air
    pub fn new(extents: UVec3) -> Self {
        let len = extents.x as usize * extents.y as usize * extents.z as usize;
        Self {
            extents,
            blocks: vec![BlockType::Air; len],
        }
    }

    /// Create an empty grid with the reference extents
    pub fn reference() -> Self {
        Self::new(REFERENCE_EXTENTS)
    }

    pub fn extents(&self) -> UVec3 {
        self.extents
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Whether `(x, y, z)` lies in `[0,X) x [0,Y) x [0,Z)`
    pub fn contains(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0
            && y >= 0
            && z >= 0
            && (x as u32) < self.extents.x
            && (y as u32) < self.extents.y
            && (z as u32) < self.extents.z
    }

    pub fn contains_pos(&self, pos: IVec3) -> bool {
        self.contains(pos.x, pos.y, pos.z)
    }

    fn index(&self, x: i32, y: i32, z: i32) -> Option<usize> {
        if !self.contains(x, y, z) {
            return None;
        }
        let (x, y, z) = (x as usize, y as usize, z as usize);
        let (ey, ez) = (self.extents.y as usize, self.extents.z as usize);
        Some((x * ey + y) * ez + z)
    }

    /// Block at `(x, y, z)`; fails with [`Error::OutOfBounds`] outside the grid
    pub fn get(&self, x: i32, y: i32, z: i32) -> Result<BlockType> {
        self.index(x, y, z)
            .map(|i| self.blocks[i])
            .ok_or(Error::OutOfBounds { x, y, z })
    }

    pub fn get_pos(&self, pos: IVec3) -> Result<BlockType> {
        self.get(pos.x, pos.y, pos.z)
    }

    /// Write a block. Out-of-bounds writes are dropped; returns whether the
    /// cell was written.
    pub fn set(&mut self, x: i32, y: i32, z: i32, block: BlockType) -> bool {
        match self.index(x, y, z) {
            Some(i) => {
                self.blocks[i] = block;
                true
            }
            None => false,
        }
    }

    pub fn set_pos(&mut self, pos: IVec3, block: BlockType) -> bool {
        self.set(pos.x, pos.y, pos.z, block)
    }

    /// Fill the layer `y = height` with dirt. A height outside the grid
    /// writes nothing.
    pub fn initialize_flat_platform(&mut self, height: i32) {
        if height < 0 || height as u32 >= self.extents.y {
            log::warn!(
                "Platform height {} outside world height {}, world left empty",
                height,
                self.extents.y
            );
            return;
        }
        for x in 0..self.extents.x as i32 {
            for z in 0..self.extents.z as i32 {
                self.set(x, height, z, BlockType::Dirt);
            }
        }
    }

    /// Every cell with its coordinate, `x` outer, `y` middle, `z` inner,
    /// ascending
    pub fn iter(&self) -> impl Iterator<Item = (IVec3, BlockType)> + '_ {
        let (ey, ez) = (self.extents.y as usize, self.extents.z as usize);
        self.blocks.iter().enumerate().map(move |(i, &block)| {
            let z = i % ez;
            let y = (i / ez) % ey;
            let x = i / (ez * ey);
            (IVec3::new(x as i32, y as i32, z as i32), block)
        })
    }

    /// Number of non-air cells
    pub fn solid_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_solid()).count()
    }
}

impl Default for WorldGrid {
    fn default() -> Self {
        Self::reference()
    }
}
