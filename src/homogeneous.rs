//! Homogeneous 2D points and lines.
//!
//! Both are thin wrappers over `Vector3<f64>`. A point `(x, y, w)` stands for
//! the affine point `(x/w, y/w)`, or a point at infinity when `w = 0`. A line
//! `(a, b, c)` is the set `a·x + b·y + c·w = 0`.
//!
//! Incidence and intersection are both cross products: the join of two points
//! is a line, the meet of two lines is a point.

use crate::error::GeometryError;
use nalgebra::Vector3;
use serde::Serialize;

/// Default tolerance for near-zero denominators.
pub const EPS: f64 = 1e-12;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct HomogeneousPoint(pub Vector3<f64>);

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct HomogeneousLine(pub Vector3<f64>);

impl HomogeneousPoint {
    pub fn new(x: f64, y: f64, w: f64) -> Self {
        Self(Vector3::new(x, y, w))
    }

    /// Lifts an affine point to `(x, y, 1)`.
    pub fn from_affine(p: [f64; 2]) -> Self {
        Self(Vector3::new(p[0], p[1], 1.0))
    }

    pub fn x(&self) -> f64 {
        self.0[0]
    }

    pub fn y(&self) -> f64 {
        self.0[1]
    }

    pub fn w(&self) -> f64 {
        self.0[2]
    }

    pub fn is_at_infinity(&self, eps: f64) -> bool {
        self.0[2].abs() <= eps
    }

    /// Line through `self` and `other`. The result is not normalized and is
    /// the zero vector when the points coincide.
    pub fn join(&self, other: &HomogeneousPoint) -> HomogeneousLine {
        HomogeneousLine(self.0.cross(&other.0))
    }

    /// Euclidean coordinates `(x/w, y/w)`, or `None` for points at infinity.
    pub fn dehomogenize(&self, eps: f64) -> Option<[f64; 2]> {
        let w = self.0[2];
        if !w.is_finite() || w.abs() <= eps {
            return None;
        }
        Some([self.0[0] / w, self.0[1] / w])
    }

    /// Rescales the point so its third component is exactly 1.
    pub fn normalized_affine(&self, eps: f64) -> Option<HomogeneousPoint> {
        self.dehomogenize(eps).map(HomogeneousPoint::from_affine)
    }
}

impl HomogeneousLine {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self(Vector3::new(a, b, c))
    }

    pub fn a(&self) -> f64 {
        self.0[0]
    }

    pub fn b(&self) -> f64 {
        self.0[1]
    }

    pub fn c(&self) -> f64 {
        self.0[2]
    }

    /// Intersection point of two lines. Parallel lines meet at infinity.
    pub fn meet(&self, other: &HomogeneousLine) -> HomogeneousPoint {
        HomogeneousPoint(self.0.cross(&other.0))
    }

    /// Signed incidence residual `l · p`.
    pub fn incidence(&self, point: &HomogeneousPoint) -> f64 {
        self.0.dot(&point.0)
    }

    /// Scales the line to unit Euclidean norm over all three components.
    pub fn normalize(&self, eps: f64) -> Option<HomogeneousLine> {
        let norm = self.0.norm();
        if !norm.is_finite() || norm <= eps {
            return None;
        }
        Some(HomogeneousLine(self.0 / norm))
    }

    /// Flips the sign so the third component is non-negative.
    pub fn with_nonnegative_offset(&self) -> HomogeneousLine {
        if self.0[2] < 0.0 {
            HomogeneousLine(-self.0)
        } else {
            *self
        }
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.0[0], self.0[1], self.0[2]]
    }
}

impl From<[f64; 3]> for HomogeneousLine {
    fn from(v: [f64; 3]) -> Self {
        Self(Vector3::new(v[0], v[1], v[2]))
    }
}

impl From<[f64; 3]> for HomogeneousPoint {
    fn from(v: [f64; 3]) -> Self {
        Self(Vector3::new(v[0], v[1], v[2]))
    }
}

/// Unit-norm line through two affine points.
///
/// `indices` only labels the error; it names which input points coincided.
pub(crate) fn normalized_join(
    p: [f64; 2],
    q: [f64; 2],
    indices: (usize, usize),
    eps: f64,
) -> Result<HomogeneousLine, GeometryError> {
    HomogeneousPoint::from_affine(p)
        .join(&HomogeneousPoint::from_affine(q))
        .normalize(eps)
        .ok_or(GeometryError::DegenerateInput {
            first: indices.0,
            second: indices.1,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn join_is_incident_with_both_points() {
        let p = HomogeneousPoint::new(1.0, 3.0, 1.0);
        let q = HomogeneousPoint::new(4.0, 1.0, 1.0);
        let l = p.join(&q);
        assert_eq!(l.as_array(), [2.0, 3.0, -11.0]);
        assert!(approx_eq(l.incidence(&p), 0.0));
        assert!(approx_eq(l.incidence(&q), 0.0));
    }

    #[test]
    fn parallel_lines_meet_at_infinity() {
        let l1 = HomogeneousLine::new(1.0, -1.0, 2.0);
        let l2 = HomogeneousLine::new(1.0, -1.0, 3.0);
        let x = l1.meet(&l2);
        assert!(x.is_at_infinity(EPS));
        assert!(x.dehomogenize(EPS).is_none());
        // Direction of the common point at infinity is along (1, 1).
        assert!(approx_eq(x.x(), x.y()));
    }

    #[test]
    fn crossing_lines_meet_at_finite_point() {
        let l1 = HomogeneousLine::new(1.0, 0.0, -10.0);
        let l2 = HomogeneousLine::new(0.0, 1.0, -20.0);
        let p = l1.meet(&l2).dehomogenize(EPS).expect("finite");
        assert!(approx_eq(p[0], 10.0));
        assert!(approx_eq(p[1], 20.0));
    }

    #[test]
    fn normalize_rejects_zero_line() {
        assert!(HomogeneousLine::new(0.0, 0.0, 0.0).normalize(EPS).is_none());
        let n = HomogeneousLine::new(0.0, 4.0, 0.0).normalize(EPS).unwrap();
        assert_eq!(n.as_array(), [0.0, 1.0, 0.0]);
    }

    #[test]
    fn sign_canonicalization_keeps_direction() {
        let l = HomogeneousLine::new(0.6, -0.0, -0.8);
        let c = l.with_nonnegative_offset();
        assert!(c.c() >= 0.0);
        assert!(approx_eq(c.a(), -0.6));
        let already = HomogeneousLine::new(0.6, 0.0, 0.8);
        assert_eq!(already.with_nonnegative_offset(), already);
    }

    #[test]
    fn normalized_join_reports_coincident_points() {
        let err = normalized_join([2.0, 5.0], [2.0, 5.0], (0, 1), EPS).unwrap_err();
        assert_eq!(err, GeometryError::DegenerateInput { first: 0, second: 1 });
    }
}
