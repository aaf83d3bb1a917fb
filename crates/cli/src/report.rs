//! Analysis reports in text and JSON form.

use std::fmt::Write as _;

use anyhow::Result;
use gapscan_engine::blocks::{AtomicBlock, MergedBlock};
use gapscan_engine::grid::Grid;
use gapscan_engine::{Analysis, AnalysisStats};
use serde::Serialize;

use crate::config::OutputFormat;

#[derive(Debug, Clone, Serialize)]
pub struct GridSize {
    pub width: i32,
    pub height: i32,
}

/// Everything the host prints about one analysed map.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub grid: GridSize,
    pub stats: AnalysisStats,
    pub blocks: Vec<AtomicBlock>,
    pub active_ranges: Vec<MergedBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_width: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_blocks: Option<Vec<MergedBlock>>,
}

impl Report {
    pub fn new<G: Grid + ?Sized>(grid: &G, analysis: &Analysis) -> Self {
        Self {
            grid: GridSize {
                width: grid.width(),
                height: grid.height(),
            },
            stats: analysis.stats(),
            blocks: analysis.blocks().to_vec(),
            active_ranges: analysis.active_ranges().to_vec(),
            fixed_width: analysis.fixed_width(),
            fixed_blocks: analysis
                .fixed_width()
                .map(|_| analysis.fixed_blocks().to_vec()),
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(self.to_json()?),
            OutputFormat::Text => Ok(self.to_text()),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = writeln!(out, "grid {}x{}", self.grid.width, self.grid.height);
        let _ = writeln!(
            out,
            "{} atomic blocks in {} rows",
            self.stats.atomic_blocks, self.stats.rows
        );
        for b in &self.blocks {
            let _ = writeln!(out, "  #{:<3} x={:<3} y={:<3} h={}", b.id.0, b.x, b.y, b.height);
        }

        let _ = writeln!(out, "{} active ranges", self.active_ranges.len());
        for m in &self.active_ranges {
            let _ = writeln!(out, "  {}", describe(m));
        }

        if let (Some(width), Some(fixed)) = (self.fixed_width, &self.fixed_blocks) {
            let _ = writeln!(out, "{} fixed-width blocks (width {})", fixed.len(), width);
            for m in fixed {
                let _ = writeln!(out, "  {}", describe(m));
            }
        }
        out
    }
}

fn describe(m: &MergedBlock) -> String {
    let ids: Vec<String> = m.ids.iter().map(|id| id.0.to_string()).collect();
    format!(
        "x={:<3} y={:<3} w={:<3} h={:<3} ids=[{}]",
        m.x,
        m.y,
        m.width,
        m.height,
        ids.join(", ")
    )
}
