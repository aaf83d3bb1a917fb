//! Tile-map loading for the host.

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use gapscan_engine::grid::{Grid, TileGrid};

use crate::config::MapSource;

/// Sample level: a ledge, a pit and a raised platform.
pub const DEMO_MAP: &str = "\
..........
..........
......###.
.##.......
.##.......
###...#..#
##########
";

pub fn load_map(source: &MapSource) -> Result<TileGrid> {
    let grid = match source {
        MapSource::Demo => parse("demo map", DEMO_MAP)?,
        MapSource::Stdin => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read tile map from stdin")?;
            parse("stdin", &text)?
        }
        MapSource::File(path) => load_file(path)?,
    };
    tracing::info!("Loaded {}x{} tile map", grid.width(), grid.height());
    Ok(grid)
}

pub fn load_file(path: &Path) -> Result<TileGrid> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read tile map {}", path.display()))?;
    parse(&path.display().to_string(), &text)
}

fn parse(origin: &str, text: &str) -> Result<TileGrid> {
    TileGrid::from_ascii(text).with_context(|| format!("Invalid tile map in {origin}"))
}
