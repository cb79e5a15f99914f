use image::RgbImage;
use projective_geometry::config::rectify as rectify_config;
use projective_geometry::image::io::{load_rgb_image, save_rgb_image, write_json_file};
use projective_geometry::image::overlay::{draw_lines, draw_points, LINE_COLOR, POINT_COLOR};
use projective_geometry::image::warp_to_bounds;
use projective_geometry::{
    lines_from_points, rectify_with_params, HomogeneousPoint, OutputBounds, Quadrilateral,
    RectificationResult,
};
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = rectify_config::load_config(Path::new(&config_path))?;

    let image = load_rgb_image(&config.input, config.bgr)?;
    let quad = Quadrilateral::try_from(config.corners.as_slice())
        .map_err(|e| format!("Invalid corner selection: {e}"))?;

    let result = rectify_with_params(&quad, &config.rectify).map_err(|e| {
        format!("Cannot rectify this selection ({e}), please pick the corners again")
    })?;
    print_summary(&result);

    if let Some(path) = &config.output.overlay_image {
        let mut overlay = image.clone();
        draw_lines(&mut overlay, &result.lines, LINE_COLOR);
        let corners = quad.0.map(HomogeneousPoint::from_affine);
        draw_points(&mut overlay, &corners, POINT_COLOR);
        save_rgb_image(&overlay, path)?;
        println!("Saved boundary-line overlay to {}", path.display());
    }

    let rectified = warp_to_bounds(
        &image,
        &result.homography,
        &result.output_bounds,
        config.warp.max_output_px,
    )?;
    save_rgb_image(&rectified, &config.output.rectified_image)?;
    if let Some(path) = &config.output.rectified_overlay_image {
        save_rectified_overlay(&rectified, &result, path)?;
    }
    println!(
        "Saved {}x{} rectified image to {}",
        rectified.width(),
        rectified.height(),
        config.output.rectified_image.display()
    );

    let report = RectifyReport {
        input_width: image.width(),
        input_height: image.height(),
        corners: quad.0,
        result: &result,
    };
    write_json_file(&config.output.result_json, &report)?;
    println!(
        "Saved rectification report to {}",
        config.output.result_json.display()
    );

    Ok(())
}

/// Draws the rectified quadrilateral in crop coordinates.
fn save_rectified_overlay(
    rectified: &RgbImage,
    result: &RectificationResult,
    path: &Path,
) -> Result<(), String> {
    let origin = [
        result.output_bounds.x_min as f64,
        result.output_bounds.y_min as f64,
    ];
    let corners = result
        .rectified_corners
        .map(|p| [p[0] - origin[0], p[1] - origin[1]]);
    let lines = lines_from_points(&Quadrilateral::new(corners))
        .map_err(|e| format!("Rectified corners are degenerate: {e}"))?;
    let mut overlay = rectified.clone();
    draw_lines(&mut overlay, &lines, LINE_COLOR);
    draw_points(
        &mut overlay,
        &corners.map(HomogeneousPoint::from_affine),
        POINT_COLOR,
    );
    save_rgb_image(&overlay, path)?;
    println!("Saved rectified overlay to {}", path.display());
    Ok(())
}

fn print_summary(result: &RectificationResult) {
    println!("Imaged vanishing point 1 (VP1): {:?}", result.vp1.0.as_slice());
    println!("Imaged vanishing point 2 (VP2): {:?}", result.vp2.0.as_slice());
    println!(
        "Imaged line at infinity: {:?}",
        result.line_at_infinity.as_array()
    );
    println!();
    println!("Rectified VP1: {:?}", result.rectified_vp1.0.as_slice());
    println!("Rectified VP2: {:?}", result.rectified_vp2.0.as_slice());
    println!(
        "Rectified line at infinity: {:?}",
        result.rectified_line_at_infinity.as_slice()
    );
    let OutputBounds {
        x_min,
        x_max,
        y_min,
        y_max,
    } = result.output_bounds;
    println!("Output window: x {x_min}..={x_max}, y {y_min}..={y_max}");
}

fn usage() -> String {
    "Usage: affine_rectify <config.json>".to_string()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RectifyReport<'a> {
    input_width: u32,
    input_height: u32,
    corners: [[f64; 2]; 4],
    result: &'a RectificationResult,
}
