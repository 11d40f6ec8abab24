//! Transforming implicit lines.
//!
//! Translation has an exact coefficient update. Rotation, reflection and
//! dilation go through one generic path: pick two points on the line, map
//! them, and refit (`refit_through`). This holds for any affine point map, so
//! no per-kind coefficient formula is needed.

use super::maps::TransformSpec;
use super::types::{GeomCfg, Line, Point};

/// Image of `line` under `spec`, normalized (degenerate results pass through).
pub fn transform_line(line: &Line, spec: &TransformSpec, cfg: GeomCfg) -> Line {
    match *spec {
        TransformSpec::Translate { dx, dy } => translate_line(line, dx, dy),
        TransformSpec::Rotate { .. } | TransformSpec::Reflect { .. } | TransformSpec::Dilate { .. } => {
            refit_through(line, |p| spec.apply_point(p), cfg)
        }
    }
}

/// `C' = C − A dx − B dy`, then renormalize.
pub fn translate_line(line: &Line, dx: f64, dy: f64) -> Line {
    Line::from_coefficients(line.a(), line.b(), line.c - line.a() * dx - line.b() * dy).normalized()
}

/// Map two canonical points of `line` through `f` and fit the line through the images.
///
/// If `f` collapses both points (e.g. dilation with `k = 0`) the result is the
/// degenerate line `(0, 0, 0)`.
pub fn refit_through<F>(line: &Line, f: F, cfg: GeomCfg) -> Line
where
    F: Fn(Point) -> Point,
{
    let (p, q) = line.canonical_points(cfg.eps_coef);
    Line::from_two_points(f(p), f(q))
}
