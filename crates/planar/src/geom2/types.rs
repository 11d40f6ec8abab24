//! Basic 2D types and tolerances used by the transform kernel.
//!
//! - `GeomCfg`: centralizes the "negligible coefficient" epsilon.
//! - `Line`: implicit line `n · p + c = 0` with normalization helpers.
//! - `Affine2`: 2D affine map used to express every transform kind.
//!
//! References
//! - Code cross-refs: `maps::{TransformSpec}`, `lines::transform_line`

use nalgebra::{Matrix2, Vector2};

use super::util::canonicalize_unit;

/// A point in the plane. Values are immutable copies; transforms return new points.
pub type Point = Vector2<f64>;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// Coefficients with magnitude at or below this are treated as zero when
    /// picking reconstruction points or slope form.
    pub eps_coef: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { eps_coef: 1e-12 }
    }
}

/// Implicit line `n · p + c = 0`, i.e. `A x + B y + C = 0` with `n = (A, B)`.
///
/// Invariants:
/// - Lines produced by the kernel are normalized (`||n|| = 1`) unless degenerate
///   (`n = 0`), which is passed through unchanged.
/// - Sign is unconstrained; use `same_line` to compare.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub n: Vector2<f64>,
    pub c: f64,
}

impl Line {
    #[inline]
    pub fn new(n: Vector2<f64>, c: f64) -> Self {
        Self { n, c }
    }

    /// Raw coefficients, not normalized.
    #[inline]
    pub fn from_coefficients(a: f64, b: f64, c: f64) -> Self {
        Self::new(Vector2::new(a, b), c)
    }

    /// Line through `p` and `q` (`A = y1 − y2, B = x2 − x1, C = x1 y2 − x2 y1`), normalized.
    ///
    /// Coincident points yield the degenerate line `(0, 0, 0)`.
    pub fn from_two_points(p: Point, q: Point) -> Self {
        Self::from_coefficients(p.y - q.y, q.x - p.x, p.x * q.y - q.x * p.y).normalized()
    }

    #[inline]
    pub fn a(&self) -> f64 {
        self.n.x
    }
    #[inline]
    pub fn b(&self) -> f64 {
        self.n.y
    }
    #[inline]
    pub fn coefficients(&self) -> (f64, f64, f64) {
        (self.n.x, self.n.y, self.c)
    }

    /// Scale so that `||n|| = 1`. Degenerate lines are returned unchanged.
    pub fn normalized(&self) -> Self {
        match canonicalize_unit(self.n, self.c) {
            Some((n, c)) => Self { n, c },
            None => *self,
        }
    }

    #[inline]
    pub fn is_degenerate(&self, eps: f64) -> bool {
        self.n.x.abs() <= eps && self.n.y.abs() <= eps
    }

    /// Evaluate `A x + B y + C` at `p`.
    #[inline]
    pub fn eval(&self, p: Point) -> f64 {
        self.n.dot(&p) + self.c
    }

    /// `(m, b)` of `y = m x + b` when `B` is non-negligible.
    pub fn slope_intercept(&self, eps: f64) -> Option<(f64, f64)> {
        if self.n.y.abs() > eps {
            Some((-self.n.x / self.n.y, -self.c / self.n.y))
        } else {
            None
        }
    }

    /// Two distinct points on the line.
    ///
    /// Uses `x = 0` and `x = 1` when `B` is non-negligible, `y = 0` and `y = 1`
    /// when only `A` is, and the fixed pair `(0,0), (1,0)` for a degenerate line.
    pub fn canonical_points(&self, eps: f64) -> (Point, Point) {
        let (a, b, c) = self.coefficients();
        if b.abs() > eps {
            (Point::new(0.0, -c / b), Point::new(1.0, -(a + c) / b))
        } else if a.abs() > eps {
            (Point::new(-c / a, 0.0), Point::new(-(b + c) / a, 1.0))
        } else {
            (Point::new(0.0, 0.0), Point::new(1.0, 0.0))
        }
    }

    /// True if both describe the same point set (up to scale and sign), within `eps`
    /// after normalization.
    pub fn same_line(&self, other: &Line, eps: f64) -> bool {
        let l = self.normalized();
        let r = other.normalized();
        let same = (l.n - r.n).amax() <= eps && (l.c - r.c).abs() <= eps;
        let flipped = (l.n + r.n).amax() <= eps && (l.c + r.c).abs() <= eps;
        same || flipped
    }
}

/// 2D affine map: `x ↦ M x + t`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine2 {
    pub m: Matrix2<f64>,
    pub t: Vector2<f64>,
}

impl Affine2 {
    #[inline]
    pub fn identity() -> Self {
        Self {
            m: Matrix2::identity(),
            t: Vector2::zeros(),
        }
    }
    #[inline]
    pub fn apply(&self, p: Point) -> Point {
        self.m * p + self.t
    }
}
