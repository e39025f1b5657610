//! Scene configuration

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::core::error::Error;
use crate::core::types::{Result, UVec3};
use crate::voxel::block::BlockType;
use crate::voxel::edit::DEFAULT_REACH;

/// Highest atlas row the block table uses
const ATLAS_ROWS_USED: u32 = 5;

/// Atlas texture layout
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtlasConfig {
    /// Width of one square cell in pixels
    pub cell_pixels: u32,
    /// Width of the square atlas texture in pixels
    pub atlas_pixels: u32,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            cell_pixels: 16,
            atlas_pixels: 128,
        }
    }
}

impl AtlasConfig {
    /// Cell width in UV space
    pub fn cell_size(&self) -> f32 {
        self.cell_pixels as f32 / self.atlas_pixels as f32
    }
}

/// Configuration for a block world session
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Grid size in blocks along x, y, z
    pub world_extents: [u32; 3],
    /// Layer filled with dirt at creation; `None` leaves the world empty
    pub platform_height: Option<i32>,
    /// Maximum ray length for break/place
    pub reach_distance: f32,
    pub initial_camera_pos: Vec3,
    /// Look direction; normalized on use
    pub initial_camera_dir: Vec3,
    pub selected_block: BlockType,
    pub atlas: AtlasConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            world_extents: [16, 8, 16],
            platform_height: Some(0),
            reach_distance: DEFAULT_REACH,
            initial_camera_pos: Vec3::new(4.0, 5.0, 4.0),
            initial_camera_dir: Vec3::new(-0.5, -0.5, -0.5),
            selected_block: BlockType::Dirt,
            atlas: AtlasConfig::default(),
        }
    }
}

impl SceneConfig {
    pub fn extents(&self) -> UVec3 {
        UVec3::from_array(self.world_extents)
    }

    /// Check that the configuration describes a usable world
    pub fn validate(&self) -> Result<()> {
        let extents = self.extents();
        if extents.min_element() == 0 {
            return Err(Error::Config(format!(
                "world extents must be non-zero, got {:?}",
                self.world_extents
            )));
        }
        if let Some(height) = self.platform_height {
            if height < 0 || height as u32 >= extents.y {
                return Err(Error::Config(format!(
                    "platform height {} outside world height {}",
                    height, extents.y
                )));
            }
        }
        if !(self.reach_distance.is_finite() && self.reach_distance > 0.0) {
            return Err(Error::Config(format!(
                "reach distance must be positive and finite, got {}",
                self.reach_distance
            )));
        }
        if !self.initial_camera_pos.is_finite() {
            return Err(Error::Config("initial camera position is not finite".to_string()));
        }
        if self.initial_camera_dir.normalize_or_zero() == Vec3::ZERO {
            return Err(Error::Config("initial camera direction has no length".to_string()));
        }
        let atlas = self.atlas;
        if atlas.cell_pixels == 0 || atlas.atlas_pixels / atlas.cell_pixels < ATLAS_ROWS_USED {
            return Err(Error::Config(format!(
                "atlas of {} px with {} px cells holds fewer than {} rows",
                atlas.atlas_pixels, atlas.cell_pixels, ATLAS_ROWS_USED
            )));
        }
        Ok(())
    }

    /// Load and validate a JSON config; missing fields take their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config: SceneConfig = serde_json::from_str(&json)?;
        config.validate()?;
        log::info!("Loaded scene config from {}", path.display());
        Ok(config)
    }

    /// Write as pretty-printed JSON, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_reference() {
        let config = SceneConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.extents(), UVec3::new(16, 8, 16));
        assert_eq!(config.reach_distance, 8.0);
        assert_eq!(config.atlas.cell_size(), 0.125);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let bad = [
            SceneConfig { world_extents: [16, 0, 16], ..Default::default() },
            SceneConfig { platform_height: Some(8), ..Default::default() },
            SceneConfig { platform_height: Some(-1), ..Default::default() },
            SceneConfig { reach_distance: 0.0, ..Default::default() },
            SceneConfig { reach_distance: f32::NAN, ..Default::default() },
            SceneConfig { initial_camera_dir: Vec3::ZERO, ..Default::default() },
            SceneConfig { initial_camera_pos: Vec3::new(f32::INFINITY, 0.0, 0.0), ..Default::default() },
            SceneConfig { atlas: AtlasConfig { cell_pixels: 0, atlas_pixels: 128 }, ..Default::default() },
            SceneConfig { atlas: AtlasConfig { cell_pixels: 32, atlas_pixels: 128 }, ..Default::default() },
        ];
        for config in bad {
            assert!(matches!(config.validate(), Err(Error::Config(_))), "{:?}", config);
        }
        let empty_world = SceneConfig { platform_height: None, ..Default::default() };
        assert!(empty_world.validate().is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("scene.json");
        let config = SceneConfig {
            world_extents: [8, 4, 8],
            reach_distance: 5.5,
            selected_block: BlockType::Glass,
            ..Default::default()
        };
        config.save(&path).unwrap();
        let loaded = SceneConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.json");
        std::fs::write(&path, r#"{ "reach_distance": 4.0, "selected_block": "Wood" }"#).unwrap();
        let loaded = SceneConfig::load(&path).unwrap();
        assert_eq!(loaded.reach_distance, 4.0);
        assert_eq!(loaded.selected_block, BlockType::Wood);
        assert_eq!(loaded.world_extents, [16, 8, 16]);
        assert_eq!(loaded.platform_height, Some(0));
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(SceneConfig::load(&dir.path().join("missing.json")), Err(Error::Io(_))));

        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(SceneConfig::load(&path), Err(Error::Json(_))));

        let path = dir.path().join("invalid.json");
        std::fs::write(&path, r#"{ "world_extents": [0, 0, 0] }"#).unwrap();
        assert!(matches!(SceneConfig::load(&path), Err(Error::Config(_))));
    }
}
