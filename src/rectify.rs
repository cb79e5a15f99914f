//! Affine rectification from four clicked corners.
//!
//! # Algorithm Outline
//! 1. Build the four boundary lines of the quadrilateral.
//! 2. Intersect opposite sides: `vp1 = L0 x L2`, `vp2 = L1 x L3`. Both must be
//!    finite in the image, otherwise the pair is already parallel and the
//!    selection cannot be rectified.
//! 3. Join the vanishing points into the imaged line at infinity, normalize it
//!    and force its third component to be non-negative.
//! 4. Build `H` = identity with the last row replaced by `l_inf`.
//! 5. Map the corners through `H` and take their integer bounding box as the
//!    crop window of the rectified image.
//!
//! Everything here is a pure function of the corners.

use crate::error::GeometryError;
use crate::homogeneous::{HomogeneousLine, HomogeneousPoint, EPS};
use crate::homography::{affine_rectifying_homography, apply_homography_points, transform_point};
use crate::lines::{lines_from_points_with_eps, Quadrilateral};
use log::debug;
use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

/// Numerical knobs of the rectifier.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RectifyParams {
    /// Denominators with absolute value at or below this are treated as zero.
    pub eps: f64,
}

impl Default for RectifyParams {
    fn default() -> Self {
        Self { eps: EPS }
    }
}

/// Integer crop window of the rectified image, inclusive on both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputBounds {
    pub x_min: i64,
    pub x_max: i64,
    pub y_min: i64,
    pub y_max: i64,
}

impl OutputBounds {
    /// Bounding box `floor(min)..=ceil(max)` of `pts`.
    pub fn from_points(pts: &[[f64; 2]]) -> Option<Self> {
        let (first, rest) = pts.split_first()?;
        Some(Self::from_extent(*first, rest))
    }

    pub(crate) fn from_extent(first: [f64; 2], rest: &[[f64; 2]]) -> Self {
        let (mut x_min, mut x_max, mut y_min, mut y_max) = (first[0], first[0], first[1], first[1]);
        for p in rest {
            x_min = x_min.min(p[0]);
            x_max = x_max.max(p[0]);
            y_min = y_min.min(p[1]);
            y_max = y_max.max(p[1]);
        }
        Self {
            x_min: x_min.floor() as i64,
            x_max: x_max.ceil() as i64,
            y_min: y_min.floor() as i64,
            y_max: y_max.ceil() as i64,
        }
    }

    /// Number of pixel columns covered, both ends included.
    pub fn width(&self) -> u64 {
        (self.x_max - self.x_min + 1).max(0) as u64
    }

    /// Number of pixel rows covered, both ends included.
    pub fn height(&self) -> u64 {
        (self.y_max - self.y_min + 1).max(0) as u64
    }
}

/// Everything derived from one rectification.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RectificationResult {
    /// Boundary lines of the input quadrilateral.
    pub lines: [HomogeneousLine; 4],
    /// Meet of lines 0 and 2, scaled so `w = 1`.
    pub vp1: HomogeneousPoint,
    /// Meet of lines 1 and 3, scaled so `w = 1`.
    pub vp2: HomogeneousPoint,
    pub line_at_infinity: HomogeneousLine,
    pub homography: Matrix3<f64>,
    /// Input corners mapped through `homography`.
    pub rectified_corners: [[f64; 2]; 4],
    /// `H · vp1`; its third component is ~0.
    pub rectified_vp1: HomogeneousPoint,
    /// `H · vp2`; its third component is ~0.
    pub rectified_vp2: HomogeneousPoint,
    /// `H · l_inf`, reported as-is for diagnostics.
    pub rectified_line_at_infinity: Vector3<f64>,
    pub output_bounds: OutputBounds,
}

/// Rectifies `quad` with default parameters.
pub fn rectify(quad: &Quadrilateral) -> Result<RectificationResult, GeometryError> {
    rectify_with_params(quad, &RectifyParams::default())
}

pub fn rectify_with_params(
    quad: &Quadrilateral,
    params: &RectifyParams,
) -> Result<RectificationResult, GeometryError> {
    let eps = params.eps;
    let lines = lines_from_points_with_eps(quad, eps)?;

    let vp1 = vanishing_point(&lines, 0, 2, eps)?;
    let vp2 = vanishing_point(&lines, 1, 3, eps)?;

    let line_at_infinity = match vp1.join(&vp2).normalize(eps) {
        Some(l) => l.with_nonnegative_offset(),
        None => {
            debug!(
                "rectify: vanishing points {:?} and {:?} coincide",
                vp1.0, vp2.0
            );
            return Err(GeometryError::DegenerateLineAtInfinity);
        }
    };

    let homography = affine_rectifying_homography(&line_at_infinity);
    let mapped = apply_homography_points(&homography, quad.corners(), eps)
        .inspect_err(|e| debug!("rectify: {e}"))?;
    let rectified_corners = [mapped[0], mapped[1], mapped[2], mapped[3]];
    let output_bounds = OutputBounds::from_extent(rectified_corners[0], &rectified_corners[1..]);

    Ok(RectificationResult {
        lines,
        vp1,
        vp2,
        line_at_infinity,
        homography,
        rectified_corners,
        rectified_vp1: transform_point(&homography, &vp1),
        rectified_vp2: transform_point(&homography, &vp2),
        rectified_line_at_infinity: homography * line_at_infinity.0,
        output_bounds,
    })
}

fn vanishing_point(
    lines: &[HomogeneousLine; 4],
    first: usize,
    second: usize,
    eps: f64,
) -> Result<HomogeneousPoint, GeometryError> {
    let vp = lines[first].meet(&lines[second]);
    vp.normalized_affine(eps).ok_or_else(|| {
        debug!(
            "rectify: vanishing point of lines {first}/{second} at infinity ({:?})",
            vp.0
        );
        GeometryError::VanishingPointAtInfinity { first, second }
    })
}
