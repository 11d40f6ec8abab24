//! Planar transform engine: parse geometric objects, apply one of four planar
//! transforms, and describe the result numerically and symbolically.
//!
//! Layout
//! - Kernel (pure, stateless): `geom2`, `parse`, `expr`, `sample`, `format`, `spec`.
//! - Controller: `session` owns the input fields and the one-step undo snapshot.
//!
//! Data flow: fields → (`ObjectSpec`, `TransformSpec`) → transform → `format`.

pub mod api;
pub mod error;
pub mod expr;
pub mod format;
pub mod geom2;
pub mod parse;
pub mod sample;
pub mod session;
pub mod spec;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{ExprError, ParseError, SessionError};
pub use geom2::{Affine2, GeomCfg, Line, Point, TransformSpec};
pub use session::{Fields, Rendered, TransformSession};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::expr::{compile_function, Function};
    pub use crate::format::{format_line, format_point_list, LineText};
    pub use crate::geom2::{transform_line, Affine2, GeomCfg, Line, Point, TransformSpec};
    pub use crate::parse::{parse_line_from_slope, parse_line_from_standard, parse_point_set};
    pub use crate::sample::{sample_function, SampleCfg};
    pub use crate::session::{Fields, Rendered, SessionCfg, TransformSession};
    pub use crate::spec::{FunctionSpec, ObjectSpec};
}
