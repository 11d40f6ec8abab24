//! What to transform: the object variants derived from the current inputs.

use crate::error::ParseError;
use crate::expr::Function;
use crate::geom2::{Line, Point};

/// A compiled function together with a finite sampling domain `min_x < max_x`.
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionSpec {
    pub function: Function,
    pub min_x: f64,
    pub max_x: f64,
}

impl FunctionSpec {
    pub fn new(function: Function, min_x: f64, max_x: f64) -> Result<Self, ParseError> {
        if !(min_x.is_finite() && max_x.is_finite()) || min_x >= max_x {
            return Err(ParseError::InvalidDomain {
                min: min_x,
                max: max_x,
            });
        }
        Ok(Self {
            function,
            min_x,
            max_x,
        })
    }
}

/// Exactly one object is active per render pass.
#[derive(Clone, Debug, PartialEq)]
pub enum ObjectSpec {
    /// At most `POINT_LIMIT` points.
    PointSet(Vec<Point>),
    Line(Line),
    Function(FunctionSpec),
}
