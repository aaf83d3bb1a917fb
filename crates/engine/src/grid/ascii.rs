//! Plain-text tile maps.
//!
//! Rows are written top-down, so the last non-blank line is row `y = 0`:
//!
//! ```text
//! .....
//! #....
//! #.#..
//! #####
//! ```
//!
//! `#`, `X` and `=` are obstacles; `.`, `_` and space are empty. Zero-length
//! lines at the start or end are ignored, as is trailing `\r`. A line of
//! spaces is a row of empty tiles.

use super::Grid;
use super::position::CellPos;
use super::tile::TileGrid;
use crate::error::{GapError, Result};

pub const OBSTACLE_TILES: [char; 3] = ['#', 'X', '='];
pub const EMPTY_TILES: [char; 3] = ['.', '_', ' '];

fn parse_tile(tile: char) -> Option<bool> {
    if OBSTACLE_TILES.contains(&tile) {
        Some(true)
    } else if EMPTY_TILES.contains(&tile) {
        Some(false)
    } else {
        None
    }
}

impl TileGrid {
    /// Parse a text tile map. All rows must have the same width.
    pub fn from_ascii(text: &str) -> Result<Self> {
        let lines: Vec<&str> = text.lines().map(|l| l.trim_end_matches('\r')).collect();
        let first = lines.iter().position(|l| !l.is_empty());
        let last = lines.iter().rposition(|l| !l.is_empty());
        let rows = match (first, last) {
            (Some(first), Some(last)) => &lines[first..=last],
            _ => return Err(GapError::EmptyMap),
        };

        let expected = rows[0].chars().count();
        let height = rows.len();
        let mut grid = TileGrid::new(expected as i32, height as i32);

        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != expected {
                return Err(GapError::RaggedRow {
                    row,
                    expected,
                    found,
                });
            }
            let y = (height - 1 - row) as i32;
            for (column, tile) in line.chars().enumerate() {
                let obstacle =
                    parse_tile(tile).ok_or(GapError::UnknownTile { row, column, tile })?;
                grid.set(CellPos::new(column as i32, y), obstacle);
            }
        }

        tracing::debug!(
            "Parsed tile map: {}x{} ({} obstacles)",
            grid.width(),
            grid.height(),
            grid.obstacle_count()
        );
        Ok(grid)
    }

    /// Render back to text, top row first. Output ends with a newline.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(((self.width() + 1) * self.height()).max(0) as usize);
        for y in (0..self.height()).rev() {
            for x in 0..self.width() {
                out.push(if self.is_obstacle(x, y) { '#' } else { '.' });
            }
            out.push('\n');
        }
        out
    }
}
