use crate::error::GeometryError;
use crate::homogeneous::{HomogeneousLine, HomogeneousPoint};
use nalgebra::{Matrix3, RowVector3};

/// Identity with its last row replaced by `l_inf`.
///
/// Maps the imaged line at infinity back to `(0, 0, 1)` and leaves the first
/// two rows untouched, which is exactly an affine rectification.
pub fn affine_rectifying_homography(l_inf: &HomogeneousLine) -> Matrix3<f64> {
    let mut h = Matrix3::identity();
    h.set_row(2, &RowVector3::new(l_inf.a(), l_inf.b(), l_inf.c()));
    h
}

/// Prepends a translation by `(dx, dy)`, e.g. to move a crop origin to zero.
pub fn translate_homography(h: &Matrix3<f64>, dx: f64, dy: f64) -> Matrix3<f64> {
    let shift = Matrix3::new(1.0, 0.0, dx, 0.0, 1.0, dy, 0.0, 0.0, 1.0);
    shift * h
}

pub fn transform_point(h: &Matrix3<f64>, p: &HomogeneousPoint) -> HomogeneousPoint {
    HomogeneousPoint(h * p.0)
}

/// Maps a line through `h` as `h^{-T} l`. `None` when `h` is singular.
pub fn transform_line(h: &Matrix3<f64>, l: &HomogeneousLine) -> Option<HomogeneousLine> {
    let inv = h.try_inverse()?;
    Some(HomogeneousLine(inv.transpose() * l.0))
}

/// Applies `h` to affine points and dehomogenizes the results.
///
/// Fails on the first point that lands on (or numerically near) the line at
/// infinity.
pub fn apply_homography_points(
    h: &Matrix3<f64>,
    pts: &[[f64; 2]],
    eps: f64,
) -> Result<Vec<[f64; 2]>, GeometryError> {
    let mut out = Vec::with_capacity(pts.len());
    for (index, &p) in pts.iter().enumerate() {
        let v = transform_point(h, &HomogeneousPoint::from_affine(p));
        let q = v
            .dehomogenize(eps)
            .filter(|q| q[0].is_finite() && q[1].is_finite())
            .ok_or(GeometryError::PointAtInfinity { index })?;
        out.push(q);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::homogeneous::EPS;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn rectifying_homography_keeps_affine_rows() {
        let l = HomogeneousLine::new(0.001, 0.002, 0.999);
        let h = affine_rectifying_homography(&l);
        assert_eq!(h.row(0), RowVector3::new(1.0, 0.0, 0.0));
        assert_eq!(h.row(1), RowVector3::new(0.0, 1.0, 0.0));
        assert_eq!(h.row(2), RowVector3::new(0.001, 0.002, 0.999));
    }

    #[test]
    fn line_at_infinity_maps_to_canonical_position() {
        let l = HomogeneousLine::new(0.1, -0.2, 0.9);
        let h = affine_rectifying_homography(&l);
        let mapped = transform_line(&h, &l).expect("invertible");
        assert!(approx_eq(mapped.a(), 0.0));
        assert!(approx_eq(mapped.b(), 0.0));
        assert!(mapped.c().abs() > 1e-3);
    }

    #[test]
    fn translation_moves_points() {
        let h = translate_homography(&Matrix3::identity(), -2.0, 5.0);
        let out = apply_homography_points(&h, &[[3.0, 1.0]], EPS).expect("finite");
        assert_eq!(out, vec![[1.0, 6.0]]);
    }

    #[test]
    fn points_on_line_at_infinity_fail() {
        // Third row (1, 0, 0): every point with x = 0 goes to infinity.
        let h = affine_rectifying_homography(&HomogeneousLine::new(1.0, 0.0, 0.0));
        let err = apply_homography_points(&h, &[[1.0, 1.0], [0.0, 4.0]], EPS).unwrap_err();
        assert_eq!(err, GeometryError::PointAtInfinity { index: 1 });
    }
}
