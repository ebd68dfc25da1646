//! Underground against surface blocks as a pie, starting at twelve o'clock and going counterclockwise

use super::colormap::{NO_DATA, SURFACE, UNDERGROUND};
use image::{Rgb, RgbImage};
use std::f64::consts::PI;
use world_stats::WorldStats;

/// Color of the pie at an angle measured counterclockwise from the top, in radians
fn slice_color(angle: f64, underground_share: f64) -> Rgb<u8> {
    if angle < underground_share * 2.0 * PI {
        UNDERGROUND
    } else {
        SURFACE
    }
}

pub fn draw(canvas: &mut RgbImage, stats: &WorldStats, center_x: u32, center_y: u32, radius: u32) {
    let total = stats.total_blocks();
    let underground_share = if total == 0 {
        None
    } else {
        Some(stats.underground_blocks() as f64 / total as f64)
    };

    let r = radius as i64;
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy > r * r {
                continue;
            }
            let (x, y) = (center_x as i64 + dx, center_y as i64 + dy);
            if x < 0 || y < 0 || x >= canvas.width() as i64 || y >= canvas.height() as i64 {
                continue;
            }
            let color = match underground_share {
                // image y grows downwards, the pie turns counterclockwise on screen
                Some(share) => slice_color((-dx as f64).atan2(-dy as f64).rem_euclid(2.0 * PI), share),
                None => NO_DATA,
            };
            canvas.put_pixel(x as u32, y as u32, color);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::chart::colormap::BACKGROUND;
    use math::positions::MapBlockPos;

    fn canvas() -> RgbImage {
        RgbImage::from_pixel(101, 101, BACKGROUND)
    }

    #[test]
    pub fn quarter_underground() {
        let stats = WorldStats::from_positions(
            [
                MapBlockPos::new(0, -1, 0),
                MapBlockPos::new(0, 1, 0),
                MapBlockPos::new(0, 2, 0),
                MapBlockPos::new(0, 3, 0),
            ],
            0,
        );
        let mut canvas = canvas();
        draw(&mut canvas, &stats, 50, 50, 40);

        // the first quarter counterclockwise from the top is the upper left one
        assert_eq!(*canvas.get_pixel(30, 30), UNDERGROUND);
        assert_eq!(*canvas.get_pixel(70, 30), SURFACE);
        assert_eq!(*canvas.get_pixel(30, 70), SURFACE);
        assert_eq!(*canvas.get_pixel(70, 70), SURFACE);
        assert_eq!(*canvas.get_pixel(2, 2), BACKGROUND);
    }

    #[test]
    pub fn all_underground() {
        let stats = WorldStats::from_positions([MapBlockPos::new(5, -5, 5)], 0);
        let mut canvas = canvas();
        draw(&mut canvas, &stats, 50, 50, 40);
        assert_eq!(*canvas.get_pixel(50, 50), UNDERGROUND);
        assert_eq!(*canvas.get_pixel(80, 60), UNDERGROUND);
        assert_eq!(*canvas.get_pixel(20, 40), UNDERGROUND);
    }

    #[test]
    pub fn empty_world_is_grey() {
        let stats = WorldStats::from_positions(Vec::new(), 0);
        let mut canvas = canvas();
        draw(&mut canvas, &stats, 50, 50, 40);
        assert_eq!(*canvas.get_pixel(50, 50), NO_DATA);
        assert_eq!(*canvas.get_pixel(50, 5), BACKGROUND);
    }

    #[test]
    pub fn clipped_at_canvas_edge() {
        let stats = WorldStats::from_positions([MapBlockPos::new(0, 0, 0)], 0);
        let mut canvas = canvas();
        draw(&mut canvas, &stats, 0, 0, 40);
        assert_eq!(*canvas.get_pixel(0, 0), SURFACE);
    }
}
