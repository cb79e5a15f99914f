//! Plot-ready descriptions of joins and meets.
//!
//! Turns point pairs into clipped line segments and line pairs into
//! intersection points, keeping points at infinity as directions instead of
//! dividing by zero.

use crate::bounds::{boundary_intersections, Region};
use crate::homogeneous::{HomogeneousLine, HomogeneousPoint, EPS};
use crate::lines::line_through;
use serde::Serialize;

/// A line and the finite piece of it that is visible in the plot region.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlottedLine {
    pub line: HomogeneousLine,
    pub segment: Option<[[f64; 2]; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Intersection of two lines.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlottedMeet {
    pub point: HomogeneousPoint,
    /// Euclidean position; `None` for a point at infinity.
    pub position: Option<[f64; 2]>,
    pub at_infinity: bool,
    pub lines: [PlottedLine; 2],
}

pub fn plot_line(line: HomogeneousLine, region: &Region) -> PlottedLine {
    match boundary_intersections(&line, region) {
        Ok(segment) => PlottedLine {
            line,
            segment: Some(segment),
            error: None,
        },
        Err(e) => PlottedLine {
            line,
            segment: None,
            error: Some(e.to_string()),
        },
    }
}

/// Joins two points and clips the resulting line.
pub fn plot_join(p: [f64; 2], q: [f64; 2], region: &Region) -> PlottedLine {
    match line_through(p, q) {
        Ok(line) => plot_line(line, region),
        Err(e) => PlottedLine {
            line: HomogeneousLine::new(0.0, 0.0, 0.0),
            segment: None,
            error: Some(e.to_string()),
        },
    }
}

/// Intersects two lines and clips both.
pub fn plot_meet(l1: HomogeneousLine, l2: HomogeneousLine, region: &Region) -> PlottedMeet {
    let point = l1.meet(&l2);
    let position = point.dehomogenize(EPS);
    PlottedMeet {
        point,
        position,
        at_infinity: position.is_none(),
        lines: [plot_line(l1, region), plot_line(l2, region)],
    }
}
