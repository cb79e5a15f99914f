use thiserror::Error;

/// Failures of the projective-geometry core.
///
/// Every variant aborts the current operation; no partial result is returned.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GeometryError {
    /// Two points used to build a line coincide.
    #[error("points {first} and {second} coincide, cannot build a line through them")]
    DegenerateInput { first: usize, second: usize },
    /// A line/region pair does not cross the region boundary exactly twice.
    #[error("expected 2 boundary intersections, found {found}")]
    BoundaryIntersection { found: usize },
    /// A pair of opposite quadrilateral sides is already parallel in the image.
    #[error("lines {first} and {second} are parallel, their vanishing point is at infinity")]
    VanishingPointAtInfinity { first: usize, second: usize },
    /// Wrong number of points supplied for a quadrilateral.
    #[error("invalid number of points: expected {expected}, got {got}")]
    InvalidPointCount { expected: usize, got: usize },
    /// The vanishing points coincide, so the line joining them is undefined.
    #[error("vanishing points coincide, line at infinity is undefined")]
    DegenerateLineAtInfinity,
    /// A point maps onto the line at infinity and cannot be dehomogenized.
    #[error("point {index} maps to infinity under the homography")]
    PointAtInfinity { index: usize },
}
