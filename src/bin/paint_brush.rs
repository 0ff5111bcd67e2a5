//! Brush demo binary: paints one brush stroke into a flat in-memory world.
//!
//! Usage: cargo run --release --bin paint_brush -- [OPTIONS]
//!
//! Options:
//!   --config <PATH>   Brush config JSON (default: fill, square, size 5)
//!   --mode <NAME>     Override the configured mode (fill, replace, biome)
//!   --at <X,Y,Z>      Brush anchor point (default: 8,64,8)
//!   --chunks <N>      Flat world radius in chunks around the origin (default: 2)
//!   --save <PATH>     Write the effective config back out as JSON

use std::path::PathBuf;
use std::time::Instant;

use glam::Vec3;

use brushwork::brush::{BrushConfig, Progress};
use brushwork::core::{logging, Result};
use brushwork::voxel::chunk::ChunkPos;
use brushwork::voxel::world::{default_flat_layers, ChunkedWorld};
use brushwork::voxel::BlockTypes;

fn main() {
    logging::init();

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let config_path = parse_str_arg(&args, "--config").map(PathBuf::from);
    let mode = parse_str_arg(&args, "--mode");
    let at = parse_vec3_arg(&args, "--at").unwrap_or(Vec3::new(8.0, 64.0, 8.0));
    let radius = parse_i32_arg(&args, "--chunks").unwrap_or(2).max(0);
    let save_path = parse_str_arg(&args, "--save").map(PathBuf::from);

    let mut config = match &config_path {
        Some(path) => BrushConfig::load(path)?,
        None => BrushConfig::default(),
    };
    if let Some(mode) = mode {
        config.mode = mode;
    }
    if let Some(path) = &save_path {
        config.save(path)?;
        log::info!("Saved brush config to {}", path.display());
    }

    let blocks = BlockTypes::default();
    let layers = default_flat_layers(&blocks);
    let mut world = ChunkedWorld::new(blocks.clone());
    for cx in -radius..=radius {
        for cz in -radius..=radius {
            world.generate_flat(ChunkPos::new(cx, cz), &layers);
        }
    }
    log::info!("Flat world: {} chunks", world.chunk_count());

    let driver = config.into_driver(&blocks)?;
    log::info!(
        "Brush: {} ({}), shape {}, size {}",
        driver.mode().display_name(),
        driver.mode().name(),
        driver.shape().name(),
        driver.brush_size()
    );

    if let Some(cursor) = driver.cursor_level(&blocks)? {
        log::info!(
            "Cursor preview: {} solid voxels in {:?}",
            cursor.solid_count(),
            cursor.bounds().size
        );
    }

    let start = Instant::now();
    let mut last: Option<Progress> = None;
    for step in driver.apply(&mut world, at)? {
        log::info!(
            "{} ({}/{}, {:.0}%)",
            step.message,
            step.index + 1,
            step.total,
            step.fraction() * 100.0
        );
        last = Some(step);
    }

    let dirty = world.dirty_chunks();
    log::info!(
        "Applied at {} in {:.2?}: {} steps, {} dirty chunks",
        at,
        start.elapsed(),
        last.map(|p| p.total).unwrap_or(0),
        dirty.len()
    );
    for pos in dirty {
        log::debug!("dirty chunk ({}, {})", pos.x, pos.z);
    }
    Ok(())
}

fn parse_i32_arg(args: &[String], flag: &str) -> Option<i32> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_str_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn parse_vec3_arg(args: &[String], flag: &str) -> Option<Vec3> {
    let value = parse_str_arg(args, flag)?;
    let parts: Vec<f32> = value
        .split(',')
        .map(|s| s.trim().parse().ok())
        .collect::<Option<_>>()?;
    match parts.as_slice() {
        [x, y, z] => Some(Vec3::new(*x, *y, *z)),
        _ => None,
    }
}
