//! Drawing homogeneous lines and points on top of an image.

use crate::bounds::{boundary_intersections, Region};
use crate::homogeneous::{HomogeneousLine, HomogeneousPoint, EPS};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_cross_mut, draw_line_segment_mut};
use log::debug;

pub const LINE_COLOR: Rgb<u8> = Rgb([255, 255, 0]);
pub const POINT_COLOR: Rgb<u8> = Rgb([255, 0, 0]);

/// Draws every line clipped to the image rectangle.
///
/// Returns how many lines were drawn; lines that do not cross the image
/// cleanly are skipped.
pub fn draw_lines(canvas: &mut RgbImage, lines: &[HomogeneousLine], color: Rgb<u8>) -> usize {
    let region = Region::from_image_size(canvas.width(), canvas.height());
    let mut drawn = 0usize;
    for (i, line) in lines.iter().enumerate() {
        match boundary_intersections(line, &region) {
            Ok([p, q]) => {
                draw_line_segment_mut(
                    canvas,
                    (p[0] as f32, p[1] as f32),
                    (q[0] as f32, q[1] as f32),
                    color,
                );
                drawn += 1;
            }
            Err(e) => debug!("overlay: skipping line {i}: {e}"),
        }
    }
    drawn
}

/// Marks every finite point with a cross; points at infinity are skipped.
pub fn draw_points(canvas: &mut RgbImage, points: &[HomogeneousPoint], color: Rgb<u8>) -> usize {
    let mut drawn = 0usize;
    for p in points {
        if let Some([x, y]) = p.dehomogenize(EPS) {
            draw_cross_mut(canvas, color, x.round() as i32, y.round() as i32);
            drawn += 1;
        }
    }
    drawn
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_only_crossing_lines() {
        let mut canvas = RgbImage::new(20, 20);
        let lines = [
            HomogeneousLine::new(1.0, -1.0, 2.0),
            HomogeneousLine::new(1.0, -1.0, 100.0),
        ];
        assert_eq!(draw_lines(&mut canvas, &lines, LINE_COLOR), 1);
        // y = x + 2 passes through (5, 7).
        assert_eq!(*canvas.get_pixel(5, 7), LINE_COLOR);
    }

    #[test]
    fn skips_points_at_infinity() {
        let mut canvas = RgbImage::new(10, 10);
        let pts = [
            HomogeneousPoint::new(8.0, 6.0, 2.0),
            HomogeneousPoint::new(1.0, 1.0, 0.0),
        ];
        assert_eq!(draw_points(&mut canvas, &pts, POINT_COLOR), 1);
        assert_eq!(*canvas.get_pixel(4, 3), POINT_COLOR);
    }
}
