//! Warping an image into the rectified crop window.

use crate::homography::translate_homography;
use crate::rectify::OutputBounds;
use image::{Rgb, RgbImage};
use imageproc::geometric_transformations::{warp_into, Interpolation, Projection};
use log::debug;
use nalgebra::Matrix3;

/// Warps `image` through `h` and crops to `bounds` in one pass.
///
/// The crop origin is folded into the homography, so output pixel `(0, 0)`
/// corresponds to rectified coordinate `(x_min, y_min)` and the canvas spans
/// `bounds.width() x bounds.height()`. Pixels whose source falls outside the
/// input are black.
pub fn warp_to_bounds(
    image: &RgbImage,
    h: &Matrix3<f64>,
    bounds: &OutputBounds,
    max_dim: u32,
) -> Result<RgbImage, String> {
    let (w, h_px) = (bounds.width(), bounds.height());
    if w == 0 || h_px == 0 {
        return Err(format!("Empty output window {bounds:?}"));
    }
    if w > max_dim as u64 || h_px > max_dim as u64 {
        return Err(format!(
            "Output window {w}x{h_px} exceeds the {max_dim} px limit"
        ));
    }

    let shifted = translate_homography(h, -(bounds.x_min as f64), -(bounds.y_min as f64));
    let projection = projection_from_matrix(&shifted)
        .ok_or_else(|| "Rectifying homography is not invertible".to_string())?;
    debug!("warp_to_bounds: {w}x{h_px} canvas, origin ({}, {})", bounds.x_min, bounds.y_min);

    let mut out = RgbImage::new(w as u32, h_px as u32);
    warp_into(
        image,
        &projection,
        Interpolation::Bilinear,
        Rgb([0, 0, 0]),
        &mut out,
    );
    Ok(out)
}

fn projection_from_matrix(m: &Matrix3<f64>) -> Option<Projection> {
    let mut coeffs = [0.0f32; 9];
    for i in 0..3 {
        for j in 0..3 {
            coeffs[i * 3 + j] = m[(i, j)] as f32;
        }
    }
    Projection::from_matrix(coeffs)
}
