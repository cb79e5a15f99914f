//! Clipping infinite homogeneous lines to a rectangular display region.
//!
//! The line is intersected with the four edge lines of the region (left,
//! right, top, bottom). A candidate survives when it is finite and its free
//! coordinate lies inside the region's range on that axis, endpoints included.
//! A proper crossing leaves exactly two survivors.

use crate::error::GeometryError;
use crate::homogeneous::{HomogeneousLine, EPS};
use log::debug;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Region {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Region of an image, `[0, width] x [0, height]`.
    pub fn from_image_size(width: u32, height: u32) -> Self {
        Self::new(0.0, width as f64, 0.0, height as f64)
    }

    /// Smallest region containing `points`, grown by `margin` on every side.
    pub fn enclosing(points: &[[f64; 2]], margin: f64) -> Option<Self> {
        let first = points.first()?;
        let mut region = Self::new(first[0], first[0], first[1], first[1]);
        for p in &points[1..] {
            region.x_min = region.x_min.min(p[0]);
            region.x_max = region.x_max.max(p[0]);
            region.y_min = region.y_min.min(p[1]);
            region.y_max = region.y_max.max(p[1]);
        }
        region.x_min -= margin;
        region.x_max += margin;
        region.y_min -= margin;
        region.y_max += margin;
        Some(region)
    }

    pub fn contains(&self, p: [f64; 2]) -> bool {
        p[0] >= self.x_min && p[0] <= self.x_max && p[1] >= self.y_min && p[1] <= self.y_max
    }

    /// Edge lines in test order: left, right, top, bottom.
    fn edges(&self) -> [(Edge, HomogeneousLine); 4] {
        [
            (Edge::Left, HomogeneousLine::new(1.0, 0.0, -self.x_min)),
            (Edge::Right, HomogeneousLine::new(1.0, 0.0, -self.x_max)),
            (Edge::Top, HomogeneousLine::new(0.0, 1.0, -self.y_max)),
            (Edge::Bottom, HomogeneousLine::new(0.0, 1.0, -self.y_min)),
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    fn accepts(self, region: &Region, p: [f64; 2]) -> bool {
        match self {
            Edge::Left | Edge::Right => p[1] >= region.y_min && p[1] <= region.y_max,
            Edge::Top | Edge::Bottom => p[0] >= region.x_min && p[0] <= region.x_max,
        }
    }
}

/// Two points where `line` crosses the boundary of `region`.
///
/// Points come back in edge-test order (left, right, top, bottom). Lines that
/// miss the region or pass through a corner do not give exactly two crossings
/// and are reported as [`GeometryError::BoundaryIntersection`].
pub fn boundary_intersections(
    line: &HomogeneousLine,
    region: &Region,
) -> Result<[[f64; 2]; 2], GeometryError> {
    let mut found: Vec<[f64; 2]> = Vec::with_capacity(4);
    for (edge, edge_line) in region.edges() {
        let Some(p) = line.meet(&edge_line).dehomogenize(EPS) else {
            // Parallel to this edge: the meet is at infinity.
            continue;
        };
        if edge.accepts(region, p) {
            found.push(p);
        }
    }
    match found.as_slice() {
        [p, q] => Ok([*p, *q]),
        _ => {
            debug!(
                "boundary_intersections: line {:?} gives {} crossings with {:?}",
                line.as_array(),
                found.len(),
                region
            );
            Err(GeometryError::BoundaryIntersection { found: found.len() })
        }
    }
}
