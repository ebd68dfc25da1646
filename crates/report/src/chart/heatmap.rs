//! Chunk column heatmap: one cell per chunk inside the bounds of the world, z grows downwards

use super::colormap::{hot, FRAME};
use image::{Rgb, RgbImage};
use world_stats::WorldStats;

const COLORBAR_WIDTH: u32 = 16;
const COLORBAR_GAP: u32 = 8;

/// Per pixel block counts of the grid, a pixel holds the busiest chunk drawn on it
struct Grid {
    width: u32,
    height: u32,
    cells: Vec<u64>,
}

impl Grid {
    fn rasterize(stats: &WorldStats, max_width: u32, max_height: u32) -> Option<Self> {
        let bounds = stats.chunk_bounds()?;
        let scale = (max_width as f64 / bounds.width() as f64).min(max_height as f64 / bounds.height() as f64);
        let width = ((bounds.width() as f64 * scale).floor() as u32).clamp(1, max_width);
        let height = ((bounds.height() as f64 * scale).floor() as u32).clamp(1, max_height);
        let mut cells = vec![0u64; (width * height) as usize];

        let to_pixel = |offset: u32, limit: u32| ((offset as f64 * scale).floor() as u32).min(limit - 1);
        for (key, count) in stats.block_distribution() {
            let Some((lx, lz)) = bounds.local(*key) else {
                continue;
            };
            let (x0, z0) = (to_pixel(lx, width), to_pixel(lz, height));
            let x1 = to_pixel(lx + 1, width + 1).max(x0 + 1);
            let z1 = to_pixel(lz + 1, height + 1).max(z0 + 1);
            for z in z0..z1 {
                for x in x0..x1 {
                    let cell = &mut cells[(z * width + x) as usize];
                    *cell = (*cell).max(*count);
                }
            }
        }

        Some(Self { width, height, cells })
    }
}

fn draw_frame(canvas: &mut RgbImage, x: u32, y: u32, width: u32, height: u32) {
    let (right, bottom) = (x + width, y + height);
    for px in x.saturating_sub(1)..=right {
        for py in [y.saturating_sub(1), bottom] {
            put(canvas, px, py, FRAME);
        }
    }
    for py in y.saturating_sub(1)..=bottom {
        for px in [x.saturating_sub(1), right] {
            put(canvas, px, py, FRAME);
        }
    }
}

fn put(canvas: &mut RgbImage, x: u32, y: u32, color: Rgb<u8>) {
    if x < canvas.width() && y < canvas.height() {
        canvas.put_pixel(x, y, color);
    }
}

/// Draw the heatmap and its colorbar inside the `width` x `height` box at (`left`, `top`).
/// An empty world leaves the box untouched.
pub fn draw(canvas: &mut RgbImage, stats: &WorldStats, left: u32, top: u32, width: u32, height: u32) {
    let grid_width = width.saturating_sub(COLORBAR_WIDTH + COLORBAR_GAP);
    if grid_width == 0 || height == 0 {
        return;
    }
    let Some(grid) = Grid::rasterize(stats, grid_width, height) else {
        log::debug!("no chunk to draw in the heatmap");
        return;
    };

    let max = stats.max_chunk_blocks().max(1) as f64;
    for z in 0..grid.height {
        for x in 0..grid.width {
            let count = grid.cells[(z * grid.width + x) as usize];
            put(canvas, left + x, top + z, hot(count as f64 / max));
        }
    }
    draw_frame(canvas, left, top, grid.width, grid.height);

    let bar_left = left + grid.width + COLORBAR_GAP;
    for y in 0..grid.height {
        let t = 1.0 - y as f64 / (grid.height.max(2) - 1) as f64;
        for x in 0..COLORBAR_WIDTH {
            put(canvas, bar_left + x, top + y, hot(t));
        }
    }
    draw_frame(canvas, bar_left, top, COLORBAR_WIDTH, grid.height);
}
