//! Block types and cube faces

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::types::IVec3;

/// Kind of matter held by a grid cell
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockType {
    /// Absence of solid matter
    #[default]
    Air = 0,
    Dirt = 1,
    Cobblestone = 2,
    Sand = 3,
    Wood = 4,
    /// The only transparent block; drawn in the second pass
    Glass = 5,
}

impl BlockType {
    /// Number of block variants, including air
    pub const COUNT: usize = 6;

    /// All variants in discriminant order
    pub const ALL: [BlockType; Self::COUNT] = [
        BlockType::Air,
        BlockType::Dirt,
        BlockType::Cobblestone,
        BlockType::Sand,
        BlockType::Wood,
        BlockType::Glass,
    ];

    /// Index into per-type lookup tables
    pub fn index(self) -> usize {
        self as usize
    }

    /// Anything other than air
    pub fn is_solid(self) -> bool {
        self != BlockType::Air
    }

    pub fn is_transparent(self) -> bool {
        self == BlockType::Glass
    }

    /// Solid and not transparent: drawn in the opaque pass
    pub fn is_opaque(self) -> bool {
        self.is_solid() && !self.is_transparent()
    }

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            BlockType::Air => "Air",
            BlockType::Dirt => "Dirt",
            BlockType::Cobblestone => "Cobblestone",
            BlockType::Sand => "Sand",
            BlockType::Wood => "Wood",
            BlockType::Glass => "Glass",
        }
    }

    /// Block chosen by pressing a digit key (1-5); other keys select nothing
    pub fn from_hotbar_key(digit: u8) -> Option<BlockType> {
        match digit {
            1 => Some(BlockType::Dirt),
            2 => Some(BlockType::Cobblestone),
            3 => Some(BlockType::Sand),
            4 => Some(BlockType::Wood),
            5 => Some(BlockType::Glass),
            _ => None,
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the six faces of a unit cube
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlockFace {
    /// +Y
    Top,
    /// -Y
    Bottom,
    /// +Z
    Front,
    /// -Z
    Back,
    /// -X
    Left,
    /// +X
    Right,
}

impl BlockFace {
    pub const ALL: [BlockFace; 6] = [
        BlockFace::Top,
        BlockFace::Bottom,
        BlockFace::Front,
        BlockFace::Back,
        BlockFace::Left,
        BlockFace::Right,
    ];

    /// Outward unit normal
    pub fn normal(self) -> IVec3 {
        match self {
            BlockFace::Top => IVec3::Y,
            BlockFace::Bottom => IVec3::NEG_Y,
            BlockFace::Front => IVec3::Z,
            BlockFace::Back => IVec3::NEG_Z,
            BlockFace::Left => IVec3::NEG_X,
            BlockFace::Right => IVec3::X,
        }
    }

    /// Face whose outward normal is `normal`, if it is an axis unit vector
    pub fn from_normal(normal: IVec3) -> Option<BlockFace> {
        BlockFace::ALL.into_iter().find(|face| face.normal() == normal)
    }

    /// Front, back, left and right share the side texture
    pub fn is_side(self) -> bool {
        !matches!(self, BlockFace::Top | BlockFace::Bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transparency() {
        for block in BlockType::ALL {
            assert_eq!(block.is_transparent(), block == BlockType::Glass);
        }
        assert!(!BlockType::Air.is_solid());
        assert!(!BlockType::Air.is_opaque());
        assert!(!BlockType::Glass.is_opaque());
        assert!(BlockType::Wood.is_opaque());
    }

    #[test]
    fn test_index_matches_all() {
        for (i, block) in BlockType::ALL.iter().enumerate() {
            assert_eq!(block.index(), i);
        }
    }

    #[test]
    fn test_hotbar_keys() {
        assert_eq!(BlockType::from_hotbar_key(1), Some(BlockType::Dirt));
        assert_eq!(BlockType::from_hotbar_key(5), Some(BlockType::Glass));
        assert_eq!(BlockType::from_hotbar_key(0), None);
        assert_eq!(BlockType::from_hotbar_key(6), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(BlockType::Cobblestone.to_string(), "Cobblestone");
        assert_eq!(format!("{}", BlockType::Air), "Air");
    }

    #[test]
    fn test_face_normals() {
        for face in BlockFace::ALL {
            assert_eq!(BlockFace::from_normal(face.normal()), Some(face));
        }
        assert_eq!(BlockFace::from_normal(IVec3::ZERO), None);
        assert_eq!(BlockFace::from_normal(IVec3::new(1, 1, 0)), None);
        assert!(BlockFace::Left.is_side());
        assert!(!BlockFace::Top.is_side());
    }
}
