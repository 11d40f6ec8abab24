//! Planar transform kernel (points and implicit lines).
//!
//! Purpose
//! - Provide the four transforms (translate, rotate, reflect, dilate) on points,
//!   and their action on implicit lines `A x + B y + C = 0`.
//! - Keep everything pure: inputs are copied values, outputs are new values.
//!
//! Why this design
//! - Lines are transformed by "two points, map, refit" so that every point map
//!   automatically has a line action; only translation gets an exact shortcut.
//! - Degenerate inputs (zero-normal lines) never raise; they act as identity or
//!   pass through unnormalized.
//!
//! References
//! - Code cross-refs: `Line`, `Affine2`, `TransformSpec`, `transform_line`, `GeomCfg`

mod lines;
mod maps;
mod types;
mod util;

pub use lines::{refit_through, transform_line, translate_line};
pub use maps::{dilate_point, reflect_point, rotate_point, translate_point, TransformSpec};
pub use types::{Affine2, GeomCfg, Line, Point};
pub(crate) use util::round_to;
