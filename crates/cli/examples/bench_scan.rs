//! Benchmark: dense vs sparse vs procedural grids through the full pipeline.
//!
//! Builds a large terraced landscape three ways and times scan + merges on each.
//! Run with: `cargo run --release -p gapscan-cli --example bench_scan`

use std::time::Instant;

use gapscan_engine::blocks::AtomicBlock;
use gapscan_engine::grid::{CellPos, FnGrid, Grid, SparseGrid, TileGrid};
use gapscan_engine::Analysis;

const WIDTH: i32 = 4096;
const HEIGHT: i32 = 256;
const MERGE_WIDTH: usize = 3;

/// Terrain: a stepped floor plus floating ledges every 7 rows.
fn is_obstacle(x: i32, y: i32) -> bool {
    let floor = 8 + (x / 32) % 16;
    y <= floor || (y % 7 == 0 && (x / 5) % 3 == 0)
}

fn main() {
    println!("=== Gap scanner pipeline benchmark ===\n");
    println!("  {}x{} grid, fixed-width merge of {}\n", WIDTH, HEIGHT, MERGE_WIDTH);

    let mut dense = TileGrid::new(WIDTH, HEIGHT);
    let mut sparse = SparseGrid::new(WIDTH, HEIGHT);
    for x in 0..WIDTH {
        for y in 0..HEIGHT {
            if is_obstacle(x, y) {
                dense.set(CellPos::new(x, y), true);
                sparse.set(CellPos::new(x, y), true);
            }
        }
    }
    let procedural = FnGrid::new(WIDTH, HEIGHT, is_obstacle);

    let dense_blocks = time("Dense", &dense);
    let sparse_blocks = time("Sparse", &sparse);
    let procedural_blocks = time("Procedural", &procedural);

    let same = |a: &[AtomicBlock], b: &[AtomicBlock]| {
        a.len() == b.len()
            && a
                .iter()
                .zip(b)
                .all(|(p, q)| (p.id, p.x, p.y, p.height) == (q.id, q.x, q.y, q.height))
    };
    if same(&dense_blocks, &sparse_blocks) && same(&dense_blocks, &procedural_blocks) {
        println!("\n  Verification: PASS (all backends agree)");
    } else {
        println!("\n  Verification: FAIL (backends disagree!)");
    }
}

fn time<G: Grid>(label: &str, grid: &G) -> Vec<AtomicBlock> {
    let t0 = Instant::now();
    let analysis = match Analysis::run(grid, Some(MERGE_WIDTH)) {
        Ok(analysis) => analysis,
        Err(e) => {
            println!("  {label}: failed: {e}");
            return Vec::new();
        }
    };
    let dt = t0.elapsed();

    let stats = analysis.stats();
    println!(
        "  {:<10} {:>7} blocks, {:>6} ranges, {:>6} windows in {:>8.2?}",
        label, stats.atomic_blocks, stats.active_ranges, stats.fixed_blocks, dt
    );
    analysis.blocks().to_vec()
}
