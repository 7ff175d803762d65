//! Homogeneous 3x3 transformation matrices
//!
//! A 2D point `(x, y)` is represented as the column vector `(x, y, 1)`, so
//! translations compose with rotations by plain matrix multiplication:
//!
//! ```text
//! | a  b  tx |   | x |   | a*x + b*y + tx |
//! | c  d  ty | * | y | = | c*x + d*y + ty |
//! | 0  0  1  |   | 1 |   |       1        |
//! ```
//!
//! `a.multiply(&b)` is the product `a · b`: applied to a point it runs `b`
//! first, then `a`.

use crate::{TransformError, TransformResult};

/// Determinants smaller than this are treated as singular.
const SINGULAR_EPSILON: f64 = 1e-12;

/// 3x3 matrix of `f64`, row-major.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform3x3 {
    m: [[f64; 3]; 3],
}

impl Default for Transform3x3 {
    fn default() -> Self {
        Self::identity()
    }
}

/// `(sin, cos)` of an angle in degrees, exact at multiples of 90.
///
/// `f64::sin(PI)` is about `1.2e-16`, not 0; at quarter turns that error
/// would decide which side of an integer a sample coordinate floors to.
fn sin_cos_degrees(degrees: f64) -> (f64, f64) {
    let reduced = degrees.rem_euclid(360.0);
    if reduced == 0.0 {
        (0.0, 1.0)
    } else if reduced == 90.0 {
        (1.0, 0.0)
    } else if reduced == 180.0 {
        (0.0, -1.0)
    } else if reduced == 270.0 {
        (-1.0, 0.0)
    } else {
        degrees.to_radians().sin_cos()
    }
}

impl Transform3x3 {
    /// The identity transformation.
    pub const fn identity() -> Self {
        Self {
            m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Create from rows.
    pub const fn from_rows(m: [[f64; 3]; 3]) -> Self {
        Self { m }
    }

    /// Get the rows.
    pub fn rows(&self) -> &[[f64; 3]; 3] {
        &self.m
    }

    /// Translation by `(tx, ty)`.
    pub fn translation(tx: f64, ty: f64) -> Self {
        Self {
            m: [[1.0, 0.0, tx], [0.0, 1.0, ty], [0.0, 0.0, 1.0]],
        }
    }

    /// Rotation about the origin by `degrees`.
    ///
    /// In a y-down image coordinate system a positive angle turns the +x
    /// axis toward +y.
    pub fn rotation(degrees: f64) -> Self {
        let (s, c) = sin_cos_degrees(degrees);
        Self {
            m: [[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Matrix product `self · other`.
    pub fn multiply(&self, other: &Self) -> Self {
        let mut out = [[0.0; 3]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| self.m[i][k] * other.m[k][j]).sum();
            }
        }
        Self { m: out }
    }

    /// Determinant.
    pub fn determinant(&self) -> f64 {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.m;
        a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
    }

    /// Compute the inverse transformation.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::SingularMatrix`] if the determinant is
    /// zero (or not finite).
    pub fn inverse(&self) -> TransformResult<Self> {
        let det = self.determinant();
        if !det.is_finite() || det.abs() < SINGULAR_EPSILON {
            return Err(TransformError::SingularMatrix);
        }
        let [[a, b, c], [d, e, f], [g, h, i]] = self.m;
        let adj = [
            [e * i - f * h, c * h - b * i, b * f - c * e],
            [f * g - d * i, a * i - c * g, c * d - a * f],
            [d * h - e * g, b * g - a * h, a * e - b * d],
        ];
        Ok(Self {
            m: adj.map(|row| row.map(|v| v / det)),
        })
    }

    /// Transform the point `(x, y)` (implicit `w = 1`).
    #[inline]
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        let [r0, r1, _] = self.m;
        (
            r0[0] * x + r0[1] * y + r0[2],
            r1[0] * x + r1[1] * y + r1[2],
        )
    }

    /// Check element-wise equality within `epsilon`.
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_identity_apply() {
        let t = Transform3x3::identity();
        assert_eq!(t.apply(3.5, -2.0), (3.5, -2.0));
        assert_eq!(Transform3x3::default(), t);
    }

    #[test]
    fn test_translation() {
        let t = Transform3x3::translation(2.0, -3.0);
        assert_eq!(t.apply(1.0, 1.0), (3.0, -2.0));
    }

    #[test]
    fn test_rotation_quarter_turns_exact() {
        let r = Transform3x3::rotation(90.0);
        assert_eq!(r.apply(1.0, 0.0), (0.0, 1.0));

        let r = Transform3x3::rotation(-90.0);
        assert_eq!(r.apply(1.0, 0.0), (0.0, -1.0));

        let r = Transform3x3::rotation(540.0);
        assert_eq!(r.apply(1.0, 2.0), (-1.0, -2.0));
    }

    #[test]
    fn test_rotation_general_angle() {
        let r = Transform3x3::rotation(30.0);
        let (x, y) = r.apply(1.0, 0.0);
        assert!((x - 3f64.sqrt() / 2.0).abs() < EPS);
        assert!((y - 0.5).abs() < EPS);
    }

    #[test]
    fn test_multiply_order() {
        // Translate first, then rotate.
        let t = Transform3x3::translation(1.0, 0.0);
        let r = Transform3x3::rotation(90.0);
        assert_eq!(r.multiply(&t).apply(0.0, 0.0), (0.0, 1.0));
        // Rotate first, then translate.
        assert_eq!(t.multiply(&r).apply(0.0, 0.0), (1.0, 0.0));
    }

    #[test]
    fn test_inverse() {
        let t = Transform3x3::translation(4.0, 5.0)
            .multiply(&Transform3x3::rotation(37.0))
            .multiply(&Transform3x3::translation(-4.0, -5.0));
        let inv = t.inverse().unwrap();
        assert!(t.multiply(&inv).approx_eq(&Transform3x3::identity(), EPS));

        let r = Transform3x3::rotation(25.0);
        assert!(r.inverse().unwrap().approx_eq(&Transform3x3::rotation(-25.0), EPS));

        let inv_t = Transform3x3::translation(3.0, 7.0).inverse().unwrap();
        assert_eq!(inv_t, Transform3x3::translation(-3.0, -7.0));
    }

    #[test]
    fn test_singular_inverse() {
        let flat = Transform3x3::from_rows([[1.0, 2.0, 0.0], [2.0, 4.0, 0.0], [0.0, 0.0, 1.0]]);
        assert!(matches!(flat.inverse(), Err(TransformError::SingularMatrix)));

        let nan = Transform3x3::from_rows([[f64::NAN, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        assert!(nan.inverse().is_err());
    }
}
