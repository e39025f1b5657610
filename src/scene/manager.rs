//! Scene manager: one block world and the camera editing it

use std::fmt;

use glam::Vec3;

use crate::core::types::Result;
use crate::render::atlas::FaceAtlasMapper;
use crate::render::cube::{build_frame_vertices, CubeVertex};
use crate::render::scheduler::{DrawInstruction, RenderScheduler};
use crate::voxel::block::BlockType;
use crate::voxel::edit::{EditOutcome, EditStats, InteractionController, InteractionEvent};
use crate::voxel::grid::WorldGrid;
use crate::voxel::raycast::{RaycastHit, Raycaster};

use super::config::SceneConfig;

/// Camera position and unit look direction, supplied by the input layer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub direction: Vec3,
}

/// Read-only snapshot for a HUD or status line
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneStatus {
    pub camera_position: Vec3,
    pub selected_block: BlockType,
    pub solid_blocks: usize,
    pub wireframe: bool,
    pub edits: EditStats,
}

impl fmt::Display for SceneStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.camera_position;
        write!(
            f,
            "x: {:.2}, y: {:.2}, z: {:.2} | Block: {} | Solid: {} | Wireframe: {}",
            p.x,
            p.y,
            p.z,
            self.selected_block,
            self.solid_blocks,
            if self.wireframe { "ON" } else { "OFF" }
        )
    }
}

/// Owns the world grid and routes camera-driven edits into it
pub struct SceneManager {
    config: SceneConfig,
    grid: WorldGrid,
    camera: CameraPose,
    selected_block: BlockType,
    wireframe: bool,
    controller: InteractionController,
    scheduler: RenderScheduler,
    atlas: FaceAtlasMapper,
}

impl SceneManager {
    /// Validate the configuration and create the world
    pub fn new(config: SceneConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Scene with the reference configuration
    pub fn reference() -> Self {
        Self::build(SceneConfig::default())
    }

    fn build(config: SceneConfig) -> Self {
        let mut grid = WorldGrid::new(config.extents());
        if let Some(height) = config.platform_height {
            grid.initialize_flat_platform(height);
        }
        log::info!(
            "Created {}x{}x{} world with {} solid blocks",
            config.world_extents[0],
            config.world_extents[1],
            config.world_extents[2],
            grid.solid_count()
        );

        Self {
            camera: CameraPose {
                position: config.initial_camera_pos,
                direction: config.initial_camera_dir.normalize_or_zero(),
            },
            selected_block: config.selected_block,
            wireframe: false,
            atlas: FaceAtlasMapper::with_cell_size(config.atlas.cell_size()),
            controller: InteractionController::new(),
            scheduler: RenderScheduler::new(),
            grid,
            config,
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn grid(&self) -> &WorldGrid {
        &self.grid
    }

    pub fn atlas(&self) -> &FaceAtlasMapper {
        &self.atlas
    }

    pub fn camera(&self) -> CameraPose {
        self.camera
    }

    /// Update the camera; the direction is normalized here
    pub fn set_camera(&mut self, position: Vec3, direction: Vec3) {
        self.camera = CameraPose {
            position,
            direction: direction.normalize_or_zero(),
        };
    }

    pub fn selected_block(&self) -> BlockType {
        self.selected_block
    }

    pub fn select_block(&mut self, block: BlockType) {
        self.selected_block = block;
    }

    /// Select by digit key; returns false for keys without a block
    pub fn select_hotbar(&mut self, digit: u8) -> bool {
        match BlockType::from_hotbar_key(digit) {
            Some(block) => {
                self.selected_block = block;
                true
            }
            None => false,
        }
    }

    /// Whether the renderer should draw cube edges only
    pub fn wireframe(&self) -> bool {
        self.wireframe
    }

    /// Flip wireframe drawing; returns the new state
    pub fn toggle_wireframe(&mut self) -> bool {
        self.wireframe = !self.wireframe;
        log::debug!("Wireframe {}", if self.wireframe { "on" } else { "off" });
        self.wireframe
    }

    /// Block under the crosshair within reach
    pub fn target(&self) -> RaycastHit {
        Raycaster::new(&self.grid).cast(
            self.camera.position,
            self.camera.direction,
            self.config.reach_distance,
        )
    }

    /// Break the targeted block
    pub fn break_block(&mut self) -> EditOutcome {
        self.handle(InteractionEvent::Break {
            origin: self.camera.position,
            direction: self.camera.direction,
            reach: self.config.reach_distance,
        })
    }

    /// Place the selected block against the targeted face
    pub fn place_block(&mut self) -> EditOutcome {
        self.handle(InteractionEvent::Place {
            origin: self.camera.position,
            direction: self.camera.direction,
            reach: self.config.reach_distance,
            block: self.selected_block,
        })
    }

    pub fn handle(&mut self, event: InteractionEvent) -> EditOutcome {
        self.controller.apply(&mut self.grid, event)
    }

    /// Ordered draw list for the current grid
    pub fn build_frame(&mut self) -> &[DrawInstruction] {
        self.scheduler.build_frame(&self.grid)
    }

    /// Cube geometry for the current grid, in draw order
    pub fn frame_vertices(&mut self) -> Vec<CubeVertex> {
        let instructions = self.scheduler.build_frame(&self.grid);
        build_frame_vertices(instructions, &self.atlas)
    }

    pub fn status(&self) -> SceneStatus {
        SceneStatus {
            camera_position: self.camera.position,
            selected_block: self.selected_block,
            solid_blocks: self.grid.solid_count(),
            wireframe: self.wireframe,
            edits: self.controller.stats(),
        }
    }
}
