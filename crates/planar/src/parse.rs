//! Text → geometry: point lists, lines, numeric fields.
//!
//! Two policies live side by side:
//! - strict (`parse_finite`, line parsers): failures are `ParseError`s that the
//!   session displays;
//! - lenient (`parse_number_or`, `parse_point_set`): bad input degrades to a
//!   default or is dropped silently.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::ParseError;
use crate::geom2::{Line, Point};

/// Maximum number of points kept from a point list.
pub const POINT_LIMIT: usize = 200;

fn number_regex() -> &'static Regex {
    static NUMBER_REGEX: OnceLock<Regex> = OnceLock::new();
    NUMBER_REGEX.get_or_init(|| {
        Regex::new(r"[-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?").expect("invalid number regex")
    })
}

fn equation_regex() -> &'static Regex {
    static EQUATION_REGEX: OnceLock<Regex> = OnceLock::new();
    EQUATION_REGEX.get_or_init(|| {
        let num = r"(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?";
        Regex::new(&format!(
            r"^\s*([-+]?{num})\s*x\s*([-+])\s*({num})\s*y\s*([-+])\s*({num})\s*=\s*0\s*$"
        ))
        .expect("invalid equation regex")
    })
}

/// Points from free-form text such as `(1,2); (3,-1)` or one pair per line.
///
/// Each `;`/newline-separated segment contributes its first two numeric tokens,
/// whatever punctuation surrounds them. Segments with fewer than two numbers (or
/// non-finite ones) are skipped. Collection stops at `limit` points.
pub fn parse_point_set(text: &str, limit: usize) -> Vec<Point> {
    let re = number_regex();
    let mut points = Vec::new();
    for segment in text.split([';', '\n']) {
        if points.len() >= limit {
            break;
        }
        let mut nums = re
            .find_iter(segment)
            .map(|m| m.as_str().parse::<f64>().unwrap_or(f64::NAN));
        let (Some(x), Some(y)) = (nums.next(), nums.next()) else {
            continue;
        };
        if x.is_finite() && y.is_finite() {
            points.push(Point::new(x, y));
        }
    }
    points
}

/// Strict numeric field: the whole trimmed text must be a finite number.
pub fn parse_finite(field: &'static str, text: &str) -> Result<f64, ParseError> {
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ParseError::NotANumber {
            field,
            text: text.to_string(),
        }),
    }
}

/// Lenient numeric field: the leading numeric token if finite, else `default`.
pub fn parse_number_or(text: &str, default: f64) -> f64 {
    let trimmed = text.trim_start();
    number_regex()
        .find(trimmed)
        .filter(|m| m.start() == 0)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(default)
}

/// `y = m x + b` ⟺ `m x − y + b = 0`, normalized.
pub fn parse_line_from_slope(m: &str, b: &str) -> Result<Line, ParseError> {
    let m = parse_finite("slope", m)?;
    let b = parse_finite("intercept", b)?;
    Ok(Line::from_coefficients(m, -1.0, b).normalized())
}

/// `A x + B y + C = 0`, normalized. `A = B = 0` is rejected.
pub fn parse_line_from_standard(a: &str, b: &str, c: &str) -> Result<Line, ParseError> {
    let a = parse_finite("A", a)?;
    let b = parse_finite("B", b)?;
    let c = parse_finite("C", c)?;
    let line = Line::from_coefficients(a, b, c);
    if line.is_degenerate(0.0) {
        return Err(ParseError::DegenerateLine);
    }
    Ok(line.normalized())
}

/// Read back the general form written by `format::format_line`
/// (`"Ax + By + C = 0"` with explicit signs on the B and C terms).
pub fn parse_line_equation(text: &str) -> Result<Line, ParseError> {
    let caps = equation_regex()
        .captures(text)
        .ok_or_else(|| ParseError::LineEquation(text.to_string()))?;
    let value = |idx: usize| -> Result<f64, ParseError> {
        caps[idx]
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ParseError::LineEquation(text.to_string()))
    };
    let sign = |idx: usize| if &caps[idx] == "-" { -1.0 } else { 1.0 };
    let a = value(1)?;
    let b = sign(2) * value(3)?;
    let c = sign(4) * value(5)?;
    let line = Line::from_coefficients(a, b, c);
    if line.is_degenerate(0.0) {
        return Err(ParseError::DegenerateLine);
    }
    Ok(line.normalized())
}
