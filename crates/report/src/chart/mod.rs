//! PNG rendering: the chunk heatmap on the left, the underground/surface pie on the right

pub mod colormap;
pub mod heatmap;
pub mod pie;

use crate::error::ReportError;
use crate::Reporter;
use colormap::BACKGROUND;
use image::RgbImage;
use std::path::{Path, PathBuf};
use world_stats::WorldStats;

pub const DEFAULT_PANEL_SIZE: u32 = 480;
/// Biggest panel side, keeps the canvas size far from overflowing u32
pub const MAX_PANEL_SIZE: u32 = 4096;
const MARGIN: u32 = 20;

/// Both charts side by side on one canvas, each panel is `panel_size` pixels square
pub fn render(stats: &WorldStats, panel_size: u32) -> RgbImage {
    let panel_size = panel_size.clamp(1, MAX_PANEL_SIZE);
    let width = panel_size * 2 + MARGIN * 3;
    let height = panel_size + MARGIN * 2;
    let mut canvas = RgbImage::from_pixel(width, height, BACKGROUND);

    heatmap::draw(&mut canvas, stats, MARGIN, MARGIN, panel_size, panel_size);

    let pie_center_x = MARGIN * 2 + panel_size + panel_size / 2;
    let pie_center_y = MARGIN + panel_size / 2;
    pie::draw(&mut canvas, stats, pie_center_x, pie_center_y, panel_size / 2 - MARGIN.min(panel_size / 4));

    canvas
}

/// Writes the charts to an image file, the format follows the file extension
pub struct ImageReport {
    path: PathBuf,
    panel_size: u32,
}

impl ImageReport {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            panel_size: DEFAULT_PANEL_SIZE,
        }
    }

    pub fn with_panel_size(mut self, panel_size: u32) -> Self {
        self.panel_size = panel_size.clamp(1, MAX_PANEL_SIZE);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Reporter for ImageReport {
    fn report(&mut self, stats: &WorldStats) -> Result<(), ReportError> {
        let canvas = render(stats, self.panel_size);
        canvas.save(&self.path).map_err(|source| ReportError::Image {
            path: self.path.clone(),
            source,
        })?;
        log::info!("saved world charts to {}", self.path.display());
        Ok(())
    }
}
