//! Display strings: numbers, points, lines and symbolic descriptions.
//!
//! All numbers are rounded to two decimals with trailing zeros trimmed
//! (`3`, `0.5`, `-1.25`). Symbolic results bake rounded numeric coefficients in;
//! no algebraic simplification is attempted beyond dropping zero terms and
//! unit coefficients.

use crate::expr::replace_identifier;
use crate::geom2::{round_to, GeomCfg, Line, Point, TransformSpec};

/// Shown in place of a slope form for a degenerate line.
pub const NO_FORM: &str = "—";

/// Rounded to two decimals, trailing zeros trimmed, `-0` printed as `0`.
pub fn format_number(v: f64) -> String {
    if !v.is_finite() {
        return format!("{v}");
    }
    let s = format!("{:.2}", round_to(v, 2));
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

pub fn format_point(p: Point) -> String {
    format!("({}, {})", format_number(p.x), format_number(p.y))
}

/// One `(x, y)` per line, at most `limit` lines plus a trailing `…N more`.
pub fn format_point_list(points: &[Point], limit: usize) -> String {
    if points.is_empty() {
        return "(no points)".to_string();
    }
    let mut lines: Vec<String> = points.iter().take(limit).map(|&p| format_point(p)).collect();
    if points.len() > limit {
        lines.push(format!("…{} more", points.len() - limit));
    }
    lines.join("\n")
}

/// Both renderings of an implicit line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineText {
    /// `Ax + By + C = 0`
    pub general: String,
    /// `y = mx + b`, `x = c`, or `—`
    pub slope_form: String,
}

/// `(sign, magnitude)` tokens for a term that follows another one.
fn signed(v: f64) -> (&'static str, String) {
    let r = round_to(v, 2);
    if r < 0.0 {
        ("-", format_number(-r))
    } else {
        ("+", format_number(r))
    }
}

/// General and slope forms of `line`. `cfg.eps_coef` decides when `B` (then
/// `A`) counts as zero.
pub fn format_line(line: &Line, cfg: GeomCfg) -> LineText {
    let (a, b, c) = line.coefficients();
    let (sb, mb) = signed(b);
    let (sc, mc) = signed(c);
    let general = format!("{}x {sb} {mb}y {sc} {mc} = 0", format_number(a));
    let slope_form = match line.slope_intercept(cfg.eps_coef) {
        Some((m, b)) => format_slope_intercept(m, b),
        None if a.abs() > cfg.eps_coef => format!("x = {}", format_number(-c / a)),
        None => NO_FORM.to_string(),
    };
    LineText {
        general,
        slope_form,
    }
}

/// `y = mx + b` with the sign of `b` folded into the operator. Unit and zero
/// terms are shortened (`y = x`, `y = -x + 2`, `y = 3`).
pub fn format_slope_intercept(m: f64, b: f64) -> String {
    let mr = round_to(m, 2);
    let slope_term = if mr == 0.0 {
        None
    } else if mr == 1.0 {
        Some("x".to_string())
    } else if mr == -1.0 {
        Some("-x".to_string())
    } else {
        Some(format!("{}x", format_number(mr)))
    };
    match slope_term {
        None => format!("y = {}", format_number(b)),
        Some(t) if round_to(b, 2) == 0.0 => format!("y = {t}"),
        Some(t) => {
            let (sb, mb) = signed(b);
            format!("y = {t} {sb} {mb}")
        }
    }
}

/// Human label for a mirror line: the entered slope form if any, else the
/// line's slope form, else its general form.
pub fn mirror_label(line: &Line, display: Option<(f64, f64)>, cfg: GeomCfg) -> String {
    if let Some((m, b)) = display {
        return format_slope_intercept(m, b);
    }
    let text = format_line(line, cfg);
    if text.slope_form == NO_FORM {
        text.general
    } else {
        text.slope_form
    }
}

pub fn describe_transform(spec: &TransformSpec, cfg: GeomCfg) -> String {
    match *spec {
        TransformSpec::Translate { dx, dy } => format!(
            "Translate by ({}, {})",
            format_number(dx),
            format_number(dy)
        ),
        TransformSpec::Rotate { degrees, center } => format!(
            "Rotate {}° about {}",
            format_number(degrees),
            format_point(center)
        ),
        TransformSpec::Reflect { line, display } => {
            format!("Reflect across {}", mirror_label(&line, display, cfg))
        }
        TransformSpec::Dilate { k, center } => format!(
            "Dilate by factor {} about {}",
            format_number(k),
            format_point(center)
        ),
    }
}

/// `var − dx` as text: `(x - 2)`, `(x + 3)`.
fn shifted_var(var: &str, dx: f64) -> String {
    let r = round_to(dx, 2);
    if r < 0.0 {
        format!("({var} + {})", format_number(-r))
    } else {
        format!("({var} - {})", format_number(r))
    }
}

/// Exact image of `y = f(x)` under translation: `y = f(x − dx) + dy`, written by
/// substituting the variable in the source text.
pub fn format_translated_function(source: &str, var: &str, dx: f64, dy: f64) -> String {
    let body = replace_identifier(source, var, &shifted_var(var, dx));
    let (sy, my) = signed(dy);
    format!("y = {body} {sy} {my}")
}

/// `c1·u1 + c2·u2 + k` with rounded coefficients, zero terms dropped.
fn linear_combination(terms: &[(f64, &str)], constant: f64) -> String {
    let mut out = String::new();
    let mut push = |coef: f64, unit: Option<&str>| {
        let r = round_to(coef, 2);
        if r == 0.0 {
            return;
        }
        let mag = r.abs();
        let body = match unit {
            Some(u) if mag == 1.0 => u.to_string(),
            Some(u) => format!("{}·{u}", format_number(mag)),
            None => format_number(mag),
        };
        if out.is_empty() {
            if r < 0.0 {
                out.push('-');
            }
        } else {
            out.push_str(if r < 0.0 { " - " } else { " + " });
        }
        out.push_str(&body);
    };
    for &(coef, unit) in terms {
        push(coef, Some(unit));
    }
    push(constant, None);
    if out.is_empty() {
        "0".to_string()
    } else {
        out
    }
}

/// Parametric image `(x'(t), y'(t))` of the graph `(t, f(t))`.
///
/// Rotation, dilation and translation bake their affine coefficients in as
/// rounded numbers. Reflection is described in words only.
pub fn format_parametric_transform(
    source: &str,
    var: &str,
    spec: &TransformSpec,
    cfg: GeomCfg,
) -> String {
    if let TransformSpec::Reflect { line, display } = *spec {
        return format!(
            "Reflection across {}: no explicit parametric form; the image is available only as sampled points.",
            mirror_label(&line, display, cfg)
        );
    }
    let aff = spec.to_affine();
    let x = linear_combination(&[(aff.m[(0, 0)], "t"), (aff.m[(0, 1)], "f(t)")], aff.t.x);
    let y = linear_combination(&[(aff.m[(1, 0)], "t"), (aff.m[(1, 1)], "f(t)")], aff.t.y);
    let f_t = replace_identifier(source, var, "t");
    format!("x'(t) = {x}\ny'(t) = {y}\nwhere f(t) = {f_t}")
}

/// Symbolic description of a transformed function graph: explicit for
/// translation, parametric for rotation and dilation, worded for reflection.
pub fn describe_function_transform(
    source: &str,
    var: &str,
    spec: &TransformSpec,
    cfg: GeomCfg,
) -> String {
    match *spec {
        TransformSpec::Translate { dx, dy } => format_translated_function(source, var, dx, dy),
        _ => format_parametric_transform(source, var, spec, cfg),
    }
}

/// Expression text for `c3 x³ + c2 x² + c1 x + c0` (coefficients highest first).
pub fn polynomial_expression(coeffs: [f64; 4], var: &str) -> String {
    let mut out = String::new();
    for (i, &c) in coeffs.iter().enumerate() {
        if c == 0.0 || !c.is_finite() {
            continue;
        }
        let power = 3 - i;
        let mag = c.abs();
        let unit = match power {
            0 => String::new(),
            1 => var.to_string(),
            p => format!("{var}^{p}"),
        };
        let body = if power == 0 {
            format!("{mag}")
        } else if mag == 1.0 {
            unit
        } else {
            format!("{mag}*{unit}")
        };
        if out.is_empty() {
            if c < 0.0 {
                out.push('-');
            }
        } else {
            out.push_str(if c < 0.0 { " - " } else { " + " });
        }
        out.push_str(&body);
    }
    if out.is_empty() {
        "0".to_string()
    } else {
        out
    }
}
