//! Texture atlas lookup for block faces.
//!
//! The atlas is a square texture divided into equal cells. Dirt has distinct
//! top, bottom and side cells; every other block uses one cell for all six
//! faces. V runs opposite to the row index, so `v0 > v1` for every textured
//! face.

use crate::voxel::block::{BlockFace, BlockType};

/// Cell size of the reference atlas: 16 px cells in a 128 px texture
pub const REFERENCE_CELL_SIZE: f32 = 16.0 / 128.0;

/// Texture rectangle in atlas space `[0,1]^2`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceUv {
    pub u0: f32,
    pub u1: f32,
    pub v0: f32,
    pub v1: f32,
}

impl FaceUv {
    pub const fn new(u0: f32, u1: f32, v0: f32, v1: f32) -> Self {
        Self { u0, u1, v0, v1 }
    }
}

/// Column and row of an atlas cell, counted from the top-left
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AtlasCell {
    pub col: u32,
    pub row: u32,
}

impl AtlasCell {
    pub const fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }

    /// `u` spans the column; `v` goes from `row` down to `row - 1`
    pub fn uv(self, cell_size: f32) -> FaceUv {
        let col = self.col as f32;
        let row = self.row as f32;
        FaceUv::new(
            col * cell_size,
            (col + 1.0) * cell_size,
            row * cell_size,
            (row - 1.0) * cell_size,
        )
    }
}

/// Cells used by one block type
#[derive(Clone, Copy, Debug)]
struct FaceCells {
    top: AtlasCell,
    bottom: AtlasCell,
    side: AtlasCell,
}

impl FaceCells {
    const fn uniform(cell: AtlasCell) -> Self {
        Self { top: cell, bottom: cell, side: cell }
    }
}

/// Atlas cells per block type, indexed by [`BlockType::index`]
const FACE_CELLS: [FaceCells; BlockType::COUNT] = [
    // Air: never drawn
    FaceCells::uniform(AtlasCell::new(0, 1)),
    // Dirt
    FaceCells {
        top: AtlasCell::new(2, 1),
        bottom: AtlasCell::new(1, 1),
        side: AtlasCell::new(0, 1),
    },
    // Cobblestone
    FaceCells::uniform(AtlasCell::new(0, 2)),
    // Sand
    FaceCells::uniform(AtlasCell::new(0, 3)),
    // Wood
    FaceCells::uniform(AtlasCell::new(0, 4)),
    // Glass
    FaceCells::uniform(AtlasCell::new(0, 5)),
];

/// Precomputed `(block, face) -> FaceUv` table
#[derive(Clone, Debug)]
pub struct FaceAtlasMapper {
    cell_size: f32,
    /// `[top, bottom, side]` per block type
    table: [[FaceUv; 3]; BlockType::COUNT],
}

impl FaceAtlasMapper {
    /// Mapper for the reference 128 px atlas with 16 px cells
    pub fn new() -> Self {
        Self::with_cell_size(REFERENCE_CELL_SIZE)
    }

    /// Mapper for an atlas whose cells are `cell_size` wide in UV space
    pub fn with_cell_size(cell_size: f32) -> Self {
        let mut table = [[FaceUv::new(0.0, 0.0, 0.0, 0.0); 3]; BlockType::COUNT];
        for block in BlockType::ALL {
            let cells = FACE_CELLS[block.index()];
            table[block.index()] = if block == BlockType::Air {
                // Untextured fallback rectangle; not V-inverted
                [FaceUv::new(0.0, cell_size, 0.0, cell_size); 3]
            } else {
                [
                    cells.top.uv(cell_size),
                    cells.bottom.uv(cell_size),
                    cells.side.uv(cell_size),
                ]
            };
        }
        Self { cell_size, table }
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// UV rectangle for one face of a block
    pub fn uv_for(&self, block: BlockType, face: BlockFace) -> FaceUv {
        let slot = match face {
            BlockFace::Top => 0,
            BlockFace::Bottom => 1,
            _ => 2,
        };
        self.table[block.index()][slot]
    }
}

impl Default for FaceAtlasMapper {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const C: f32 = REFERENCE_CELL_SIZE;

    #[test]
    fn test_dirt_faces() {
        let atlas = FaceAtlasMapper::new();
        assert_eq!(atlas.uv_for(BlockType::Dirt, BlockFace::Top), FaceUv::new(2.0 * C, 3.0 * C, C, 0.0));
        assert_eq!(atlas.uv_for(BlockType::Dirt, BlockFace::Bottom), FaceUv::new(C, 2.0 * C, C, 0.0));
        for face in [BlockFace::Front, BlockFace::Back, BlockFace::Left, BlockFace::Right] {
            assert_eq!(atlas.uv_for(BlockType::Dirt, face), FaceUv::new(0.0, C, C, 0.0));
        }
    }

    #[test]
    fn test_uniform_blocks() {
        let atlas = FaceAtlasMapper::new();
        let rows = [
            (BlockType::Cobblestone, 2.0),
            (BlockType::Sand, 3.0),
            (BlockType::Wood, 4.0),
            (BlockType::Glass, 5.0),
        ];
        for (block, row) in rows {
            for face in BlockFace::ALL {
                let uv = atlas.uv_for(block, face);
                assert_eq!(uv, FaceUv::new(0.0, C, row * C, (row - 1.0) * C), "{} {:?}", block, face);
            }
        }
    }

    #[test]
    fn test_v_inverted_except_air() {
        let atlas = FaceAtlasMapper::new();
        for block in BlockType::ALL {
            for face in BlockFace::ALL {
                let uv = atlas.uv_for(block, face);
                assert!(uv.u1 > uv.u0);
                if block == BlockType::Air {
                    assert!(uv.v0 < uv.v1);
                } else {
                    assert!(uv.v0 > uv.v1);
                }
                for value in [uv.u0, uv.u1, uv.v0, uv.v1] {
                    assert!((0.0..=1.0).contains(&value));
                }
            }
        }
    }

    #[test]
    fn test_custom_cell_size() {
        let atlas = FaceAtlasMapper::with_cell_size(0.25);
        assert_eq!(atlas.cell_size(), 0.25);
        assert_eq!(atlas.uv_for(BlockType::Sand, BlockFace::Left), FaceUv::new(0.0, 0.25, 0.75, 0.5));
    }
}
