#![doc = include_str!("../README.md")]

// Core geometry
pub mod bounds;
pub mod error;
pub mod homogeneous;
pub mod homography;
pub mod lines;
pub mod rectify;

// Collaborators used by the command-line tools.
pub mod config;
pub mod image;
pub mod plot;

// --- High-level re-exports -------------------------------------------------

pub use crate::bounds::{boundary_intersections, Region};
pub use crate::error::GeometryError;
pub use crate::homogeneous::{HomogeneousLine, HomogeneousPoint};
pub use crate::lines::{line_through, lines_from_points, Quadrilateral};
pub use crate::rectify::{
    rectify, rectify_with_params, OutputBounds, RectificationResult, RectifyParams,
};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use projective_geometry::prelude::*;
///
/// let quad = Quadrilateral::new([[0.0, 0.0], [4.0, 0.0], [5.0, 3.0], [-1.0, 4.0]]);
/// let res = rectify(&quad).expect("non-degenerate corners");
/// assert!(res.line_at_infinity.c() >= 0.0);
///
/// let region = Region::new(0.0, 10.0, 0.0, 10.0);
/// let [p, q] = boundary_intersections(&HomogeneousLine::new(1.0, -1.0, 2.0), &region).unwrap();
/// assert_eq!((p, q), ([0.0, 2.0], [8.0, 10.0]));
/// ```
pub mod prelude {
    pub use crate::{
        boundary_intersections, lines_from_points, rectify, GeometryError, HomogeneousLine,
        HomogeneousPoint, Quadrilateral, Region,
    };
}
