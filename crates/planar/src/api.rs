//! Flat surface for hosting layers (CLI, bindings).
//!
//! Re-exports the kernel entry points under their operation names and adds a
//! one-shot `render_fields` for callers that do not keep a session.

pub use crate::expr::{compile_function, Function, DEFAULT_VAR};
pub use crate::format::{
    describe_function_transform, describe_transform, format_line, format_number,
    format_parametric_transform, format_point, format_point_list, format_translated_function,
    polynomial_expression, LineText,
};
pub use crate::geom2::{
    dilate_point, reflect_point, rotate_point, transform_line, translate_point, Line, Point,
    TransformSpec,
};
pub use crate::parse::{
    parse_line_equation, parse_line_from_slope, parse_line_from_standard, parse_number_or,
    parse_point_set, POINT_LIMIT,
};
pub use crate::sample::{sample_function, SampleCfg};
pub use crate::session::{render, Fields, Rendered, SessionCfg};
pub use crate::spec::{FunctionSpec, ObjectSpec};

/// Render `fields` with the default configuration.
pub fn render_fields(fields: &Fields) -> Rendered {
    render(fields, &SessionCfg::default())
}
