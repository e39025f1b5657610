//! Headless block world driver.
//!
//! Usage: cargo run --release -- [OPTIONS]
//!
//! Options:
//!   --config <PATH>   Scene config JSON (default: built-in reference scene)
//!   --frames <N>      Frames to build after the scripted edits (default: 3)

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use glam::Vec3;

use blockworld::core::logging;
use blockworld::scene::{SceneConfig, SceneManager};
use blockworld::voxel::BlockType;

fn main() -> ExitCode {
    logging::init();

    let args: Vec<String> = std::env::args().collect();
    let frames = parse_usize_arg(&args, "--frames").unwrap_or(3);

    let config = match parse_str_arg(&args, "--config") {
        Some(path) => match SceneConfig::load(&PathBuf::from(&path)) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Failed to load {}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => SceneConfig::default(),
    };

    let mut scene = match SceneManager::new(config) {
        Ok(scene) => scene,
        Err(e) => {
            log::error!("Invalid scene: {}", e);
            return ExitCode::FAILURE;
        }
    };

    run_script(&mut scene);

    for frame in 0..frames {
        let start = Instant::now();
        let vertices = scene.frame_vertices();
        log::info!(
            "Frame {}: {} cubes, {} vertices in {:.2?}",
            frame,
            vertices.len() / blockworld::render::cube::CUBE_VERTEX_COUNT,
            vertices.len(),
            start.elapsed()
        );
    }

    log::info!("{}", scene.status());
    ExitCode::SUCCESS
}

/// Build a small glass-capped wood pillar next to the camera, then knock a
/// hole in the floor
fn run_script(scene: &mut SceneManager) {
    let center = scene.config().initial_camera_pos + Vec3::new(0.5, 0.0, 0.5);
    scene.set_camera(center, Vec3::NEG_Y);

    scene.select_block(BlockType::Wood);
    for _ in 0..2 {
        let outcome = scene.place_block();
        log::info!("Place: {:?}", outcome);
    }
    if scene.select_hotbar(5) {
        let outcome = scene.place_block();
        log::info!("Place: {:?}", outcome);
    }

    scene.set_camera(center + Vec3::new(2.0, 0.0, 0.0), Vec3::NEG_Y);
    let outcome = scene.break_block();
    log::info!("Break: {:?}", outcome);

    let target = scene.target();
    if target.hit {
        log::info!("Looking at {} face {:?} of {:?}", target.block, target.face(), target.block_position);
    } else {
        log::info!("Nothing in reach");
    }
}

fn parse_usize_arg(args: &[String], flag: &str) -> Option<usize> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_str_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}
