//! Uniform sampling of a scalar function into a point sequence.
//!
//! The step is a fixed fraction of the domain; there is no curvature
//! adaptivity. Samples that are NaN, infinite or larger than `max_abs` in
//! magnitude are dropped, so the output may contain gaps.

use crate::expr::Function;
use crate::geom2::Point;
use crate::spec::FunctionSpec;

/// Sampling configuration.
#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    /// The domain is divided into this many equal steps (`steps + 1` abscissae).
    pub steps: usize,
    /// Hard cap on emitted points.
    pub max_points: usize,
    /// Samples with `|y|` above this are dropped.
    pub max_abs: f64,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            steps: 600,
            max_points: 1500,
            max_abs: 1e6,
        }
    }
}

/// Sample `f` on `[min_x, max_x]` inclusive.
///
/// Callers validate the domain (`FunctionSpec::new`); an empty or non-finite
/// interval yields no points.
pub fn sample_function(f: &Function, min_x: f64, max_x: f64, cfg: SampleCfg) -> Vec<Point> {
    if !(min_x.is_finite() && max_x.is_finite()) || min_x > max_x || cfg.steps == 0 {
        return Vec::new();
    }
    let n = cfg.steps as f64;
    let mut out = Vec::with_capacity((cfg.steps + 1).min(cfg.max_points));
    for i in 0..=cfg.steps {
        if out.len() >= cfg.max_points {
            break;
        }
        // Interpolate instead of `min_x + i * step`: the span of a finite
        // domain can itself overflow, and the endpoints come out exact.
        let t = i as f64 / n;
        let x = min_x * (1.0 - t) + max_x * t;
        if !x.is_finite() {
            continue;
        }
        let y = f.eval(x);
        if y.is_finite() && y.abs() <= cfg.max_abs {
            out.push(Point::new(x, y));
        }
    }
    out
}

/// Sample a validated spec over its own domain.
pub fn sample_spec(spec: &FunctionSpec, cfg: SampleCfg) -> Vec<Point> {
    sample_function(&spec.function, spec.min_x, spec.max_x, cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::compile_function;

    #[test]
    fn samples_inclusive_endpoints() {
        let f = compile_function("x^2", "x").unwrap();
        let pts = sample_function(&f, -10.0, 10.0, SampleCfg::default());
        assert_eq!(pts.len(), 601);
        assert_eq!(pts[0].x, -10.0);
        assert_eq!(pts[600].x, 10.0);
        assert!(pts.iter().all(|p| p.y == p.x * p.x));
    }

    #[test]
    fn drops_poles_and_runaway_values() {
        let f = compile_function("1/x", "x").unwrap();
        let pts = sample_function(&f, -1.0, 1.0, SampleCfg::default());
        // x = 0 is exactly one abscissa; it is dropped.
        assert_eq!(pts.len(), 600);
        assert!(pts.iter().all(|p| p.y.is_finite()));

        let g = compile_function("exp(x)", "x").unwrap();
        let pts = sample_function(&g, 0.0, 30.0, SampleCfg::default());
        assert!(pts.iter().all(|p| p.y <= 1e6));
        assert!(pts.len() < 601);

        let h = compile_function("sqrt(x)", "x").unwrap();
        let pts = sample_function(&h, -1.0, 1.0, SampleCfg::default());
        assert!(pts.iter().all(|p| p.x >= 0.0));
    }

    #[test]
    fn respects_point_cap() {
        let f = compile_function("x", "x").unwrap();
        let cfg = SampleCfg {
            steps: 5000,
            ..SampleCfg::default()
        };
        assert_eq!(sample_function(&f, 0.0, 1.0, cfg).len(), 1500);
    }

    #[test]
    fn widest_finite_domain_yields_finite_abscissae() {
        let f = compile_function("1", "x").unwrap();
        let pts = sample_function(&f, -1e308, 1e308, SampleCfg::default());
        assert_eq!(pts.len(), 601);
        assert_eq!(pts[0], Point::new(-1e308, 1.0));
        assert_eq!(pts[600], Point::new(1e308, 1.0));
        assert!(pts.iter().all(|p| p.x.is_finite()));
        assert!(pts.windows(2).all(|w| w[0].x < w[1].x));

        let spec = FunctionSpec::new(f, -f64::MAX, f64::MAX).unwrap();
        let pts = sample_spec(&spec, SampleCfg::default());
        assert!(!pts.is_empty());
        assert!(pts.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }

    #[test]
    fn degenerate_domain_is_empty() {
        let f = compile_function("x", "x").unwrap();
        assert!(sample_function(&f, 1.0, 0.0, SampleCfg::default()).is_empty());
        assert!(sample_function(&f, f64::NAN, 0.0, SampleCfg::default()).is_empty());
    }
}
