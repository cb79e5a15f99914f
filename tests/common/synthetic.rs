use image::{Rgb, RgbImage};
use nalgebra::{Matrix3, Vector3};

/// Maps an affine point through `h`.
pub fn project(h: &Matrix3<f64>, p: [f64; 2]) -> [f64; 2] {
    let v = h * Vector3::new(p[0], p[1], 1.0);
    [v[0] / v[2], v[1] / v[2]]
}

/// A few camera-like homographies with genuine perspective (non-zero
/// `h31`/`h32`), all keeping a 200x100 board in front of the camera.
pub fn perspective_views() -> Vec<Matrix3<f64>> {
    vec![
        Matrix3::new(
            1.0, 0.15, 40.0, //
            0.05, 0.9, 30.0, //
            0.0008, 0.0004, 1.0,
        ),
        Matrix3::new(
            0.8, -0.1, 120.0, //
            0.2, 1.1, 20.0, //
            -0.0006, 0.0011, 1.0,
        ),
        Matrix3::new(
            1.2, 0.05, 10.0, //
            0.0, 1.0, 60.0, //
            0.0003, -0.0015, 1.0,
        ),
    ]
}

/// A view whose top and bottom board edges stay parallel in the image.
pub fn keystone_view() -> Matrix3<f64> {
    Matrix3::new(
        1.2, 0.0, 10.0, //
        0.0, 1.0, 60.0, //
        0.0, -0.0015, 1.0,
    )
}

/// Clockwise corners (image coordinates, y down) of a `w x h` board seen
/// through `view`.
pub fn board_corners(view: &Matrix3<f64>, w: f64, h: f64) -> [[f64; 2]; 4] {
    [
        project(view, [0.0, 0.0]),
        project(view, [w, 0.0]),
        project(view, [w, h]),
        project(view, [0.0, h]),
    ]
}

/// Generates a simple high-contrast checkerboard image.
pub fn checkerboard_rgb(width: u32, height: u32, cell: u32) -> RgbImage {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    RgbImage::from_fn(width, height, |x, y| {
        let sum = x / cell + y / cell;
        let val = if sum & 1 == 0 { 32u8 } else { 220u8 };
        Rgb([val, val, val])
    })
}
