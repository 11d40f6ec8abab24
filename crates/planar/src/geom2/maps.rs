//! The four planar transforms, applied to points.
//!
//! Every kind has a direct point formula (`translate_point`, `rotate_point`,
//! `reflect_point`, `dilate_point`) and an equivalent affine form
//! (`TransformSpec::to_affine`) used where coefficients are needed, e.g. for
//! parametric descriptions.

use nalgebra::{Matrix2, Vector2};

use super::types::{Affine2, Line, Point};

/// A transform with its parameters. All fields are finite reals.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransformSpec {
    Translate {
        dx: f64,
        dy: f64,
    },
    Rotate {
        degrees: f64,
        center: Point,
    },
    /// Mirror across `line`. `display` keeps `(m, b)` when the mirror was entered
    /// as `y = m x + b`, so descriptions can echo the user's form.
    Reflect {
        line: Line,
        display: Option<(f64, f64)>,
    },
    /// Scale by `k` about `center`. `k = 0` collapses everything to the center.
    Dilate {
        k: f64,
        center: Point,
    },
}

impl TransformSpec {
    /// Apply to a single point. Never fails; degenerate mirrors act as identity.
    pub fn apply_point(&self, p: Point) -> Point {
        match *self {
            TransformSpec::Translate { dx, dy } => translate_point(p, dx, dy),
            TransformSpec::Rotate { degrees, center } => rotate_point(p, degrees, center),
            TransformSpec::Reflect { line, .. } => reflect_point(p, &line),
            TransformSpec::Dilate { k, center } => dilate_point(p, k, center),
        }
    }

    pub fn apply_points(&self, points: &[Point]) -> Vec<Point> {
        points.iter().map(|&p| self.apply_point(p)).collect()
    }

    /// Equivalent affine map `p ↦ M p + t`.
    pub fn to_affine(&self) -> Affine2 {
        match *self {
            TransformSpec::Translate { dx, dy } => Affine2 {
                m: Matrix2::identity(),
                t: Vector2::new(dx, dy),
            },
            TransformSpec::Rotate { degrees, center } => {
                let (s, c) = degrees.to_radians().sin_cos();
                let m = Matrix2::new(c, -s, s, c);
                Affine2 {
                    m,
                    t: center - m * center,
                }
            }
            TransformSpec::Reflect { line, .. } => {
                let denom = line.n.norm_squared();
                if !(denom > 0.0) || !denom.is_finite() {
                    return Affine2::identity();
                }
                let m = Matrix2::identity() - line.n * line.n.transpose() * (2.0 / denom);
                Affine2 {
                    m,
                    t: -line.n * (2.0 * line.c / denom),
                }
            }
            TransformSpec::Dilate { k, center } => {
                let m = Matrix2::identity() * k;
                Affine2 {
                    m,
                    t: center * (1.0 - k),
                }
            }
        }
    }

    /// Short kind name, lowercase.
    pub fn kind_name(&self) -> &'static str {
        match self {
            TransformSpec::Translate { .. } => "translate",
            TransformSpec::Rotate { .. } => "rotate",
            TransformSpec::Reflect { .. } => "reflect",
            TransformSpec::Dilate { .. } => "dilate",
        }
    }
}

#[inline]
pub fn translate_point(p: Point, dx: f64, dy: f64) -> Point {
    Point::new(p.x + dx, p.y + dy)
}

/// Counter-clockwise rotation by `degrees` about `center`.
pub fn rotate_point(p: Point, degrees: f64, center: Point) -> Point {
    let (s, c) = degrees.to_radians().sin_cos();
    let rel = p - center;
    Point::new(
        center.x + c * rel.x - s * rel.y,
        center.y + s * rel.x + c * rel.y,
    )
}

/// Mirror image across `line` via the foot of the perpendicular:
/// `d = (A x + B y + C) / (A² + B²)`, `p' = (x − 2 A d, y − 2 B d)`.
///
/// Returns `p` unchanged for a degenerate line.
pub fn reflect_point(p: Point, line: &Line) -> Point {
    let denom = line.n.norm_squared();
    if !(denom > 0.0) || !denom.is_finite() {
        return p;
    }
    let d = line.eval(p) / denom;
    Point::new(p.x - 2.0 * line.n.x * d, p.y - 2.0 * line.n.y * d)
}

/// `center + k (p − center)`, evaluated as `k p + (1 − k) center` so that
/// `k = 1` returns `p` and `k = 0` returns `center` exactly.
pub fn dilate_point(p: Point, k: f64, center: Point) -> Point {
    Point::new(
        k * p.x + (1.0 - k) * center.x,
        k * p.y + (1.0 - k) * center.y,
    )
}
