//! Boundary lines of a clicked quadrilateral.

use crate::error::GeometryError;
use crate::homogeneous::{normalized_join, HomogeneousLine, EPS};
use serde::{Deserialize, Serialize};

/// Four image corners in clockwise order.
///
/// Sides `0` and `2` (and likewise `1` and `3`) are treated as images of
/// parallel world lines. Points are never reordered.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quadrilateral(pub [[f64; 2]; 4]);

impl Quadrilateral {
    pub fn new(corners: [[f64; 2]; 4]) -> Self {
        Self(corners)
    }

    pub fn corners(&self) -> &[[f64; 2]; 4] {
        &self.0
    }
}

impl TryFrom<&[[f64; 2]]> for Quadrilateral {
    type Error = GeometryError;

    fn try_from(points: &[[f64; 2]]) -> Result<Self, Self::Error> {
        if points.len() != 4 {
            return Err(GeometryError::InvalidPointCount {
                expected: 4,
                got: points.len(),
            });
        }
        Ok(Self([points[0], points[1], points[2], points[3]]))
    }
}

/// Unit-norm line through two affine points.
pub fn line_through(p: [f64; 2], q: [f64; 2]) -> Result<HomogeneousLine, GeometryError> {
    normalized_join(p, q, (0, 1), EPS)
}

/// Builds the four boundary lines of `quad`.
///
/// Line `i` joins corner `i` with corner `(i + 1) % 4`, so the last line closes
/// the boundary back to the first corner.
pub fn lines_from_points(quad: &Quadrilateral) -> Result<[HomogeneousLine; 4], GeometryError> {
    lines_from_points_with_eps(quad, EPS)
}

pub(crate) fn lines_from_points_with_eps(
    quad: &Quadrilateral,
    eps: f64,
) -> Result<[HomogeneousLine; 4], GeometryError> {
    let pts = quad.corners();
    let mut lines = [HomogeneousLine::new(0.0, 0.0, 0.0); 4];
    for (i, line) in lines.iter_mut().enumerate() {
        let j = (i + 1) % 4;
        *line = normalized_join(pts[i], pts[j], (i, j), eps)?;
    }
    Ok(lines)
}
