//! One render pass: fields → (ObjectSpec, TransformSpec) → three output strings.
//!
//! A pass either fully succeeds or takes the error path (numeric outputs
//! blanked, message in the symbolic slot); there is no partial output.

use serde::Serialize;
use tracing::debug;

use super::fields::{
    visible_groups, Fields, FunctionMode, InputGroup, LineMode, ObjectKind, ReflectMode,
    TransformKind,
};
use super::SessionCfg;
use crate::error::ParseError;
use crate::expr::{compile_function, DEFAULT_VAR};
use crate::format::{
    describe_function_transform, describe_transform, format_line, format_point_list,
    polynomial_expression, LineText,
};
use crate::geom2::{transform_line, Line, Point, TransformSpec};
use crate::parse::{
    parse_finite, parse_line_from_slope, parse_line_from_standard, parse_number_or,
    parse_point_set,
};
use crate::sample::sample_spec;
use crate::spec::{FunctionSpec, ObjectSpec};

/// The three output regions plus the input groups to show.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Rendered {
    pub original: String,
    pub transformed: String,
    pub symbolic: String,
    pub visible: Vec<InputGroup>,
    pub is_error: bool,
}

/// Expression text for the active function mode.
pub fn function_source(fields: &Fields) -> String {
    match fields.function_mode {
        FunctionMode::Expression => fields.expression.trim().to_string(),
        FunctionMode::Polynomial => {
            let c = |i: usize| parse_number_or(&fields.poly[i], 0.0);
            polynomial_expression([c(0), c(1), c(2), c(3)], DEFAULT_VAR)
        }
    }
}

/// Strict derivation of the active object.
pub fn derive_object(fields: &Fields, cfg: &SessionCfg) -> Result<ObjectSpec, ParseError> {
    match fields.object_kind {
        ObjectKind::Points => Ok(ObjectSpec::PointSet(parse_point_set(
            &fields.points,
            cfg.point_limit,
        ))),
        ObjectKind::Line => {
            let line = match fields.line_mode {
                LineMode::Slope => parse_line_from_slope(&fields.line_slope, &fields.line_intercept)?,
                LineMode::Standard => {
                    parse_line_from_standard(&fields.line_a, &fields.line_b, &fields.line_c)?
                }
            };
            Ok(ObjectSpec::Line(line))
        }
        ObjectKind::Function => {
            let function = compile_function(&function_source(fields), DEFAULT_VAR)?;
            let min_x = parse_finite("domain min", &fields.domain_min)
                .map_err(|_| invalid_domain(fields))?;
            let max_x = parse_finite("domain max", &fields.domain_max)
                .map_err(|_| invalid_domain(fields))?;
            Ok(ObjectSpec::Function(FunctionSpec::new(function, min_x, max_x)?))
        }
    }
}

fn invalid_domain(fields: &Fields) -> ParseError {
    ParseError::InvalidDomain {
        min: parse_number_or(&fields.domain_min, f64::NAN),
        max: parse_number_or(&fields.domain_max, f64::NAN),
    }
}

/// Lenient derivation of the active transform: unparsable numbers fall back to
/// 0 (or 1 for the dilation factor). Mirror lines are not rejected when
/// degenerate; reflecting across one is the identity.
pub fn derive_transform(fields: &Fields) -> TransformSpec {
    let num = |text: &str| parse_number_or(text, 0.0);
    match fields.transform_kind {
        TransformKind::Translate => TransformSpec::Translate {
            dx: num(&fields.dx),
            dy: num(&fields.dy),
        },
        TransformKind::Rotate => TransformSpec::Rotate {
            degrees: num(&fields.degrees),
            center: Point::new(num(&fields.rotate_cx), num(&fields.rotate_cy)),
        },
        TransformKind::Dilate => TransformSpec::Dilate {
            k: parse_number_or(&fields.factor, 1.0),
            center: Point::new(num(&fields.dilate_cx), num(&fields.dilate_cy)),
        },
        TransformKind::Reflect => {
            let (line, display) = match fields.reflect_mode {
                ReflectMode::XAxis => (Line::from_coefficients(0.0, 1.0, 0.0), None),
                ReflectMode::YAxis => (Line::from_coefficients(1.0, 0.0, 0.0), None),
                ReflectMode::Diagonal => (Line::from_coefficients(1.0, -1.0, 0.0), Some((1.0, 0.0))),
                ReflectMode::AntiDiagonal => {
                    (Line::from_coefficients(1.0, 1.0, 0.0), Some((-1.0, 0.0)))
                }
                ReflectMode::Slope => {
                    let m = num(&fields.mirror_slope);
                    let b = num(&fields.mirror_intercept);
                    (Line::from_coefficients(m, -1.0, b), Some((m, b)))
                }
                ReflectMode::Standard => (
                    Line::from_coefficients(
                        num(&fields.mirror_a),
                        num(&fields.mirror_b),
                        num(&fields.mirror_c),
                    ),
                    None,
                ),
            };
            TransformSpec::Reflect {
                line: line.normalized(),
                display,
            }
        }
    }
}

fn line_block(text: &LineText) -> String {
    format!("{}\n{}", text.general, text.slope_form)
}

/// Render the current fields. Hidden branches are left empty and not computed.
pub fn render(fields: &Fields, cfg: &SessionCfg) -> Rendered {
    let visible = visible_groups(fields);
    let object = match derive_object(fields, cfg) {
        Ok(object) => object,
        Err(err) => {
            debug!(error = %err, object = fields.object_kind.as_str(), "render: input rejected");
            return Rendered {
                symbolic: err.to_string(),
                visible,
                is_error: true,
                ..Rendered::default()
            };
        }
    };
    let spec = derive_transform(fields);
    let limit = cfg.display_limit;
    let mut out = Rendered {
        visible,
        ..Rendered::default()
    };
    match &object {
        ObjectSpec::PointSet(points) => {
            if fields.show_original {
                out.original = format_point_list(points, limit);
            }
            if fields.show_transformed {
                out.transformed = format_point_list(&spec.apply_points(points), limit);
            }
            out.symbolic = describe_transform(&spec, cfg.geom);
        }
        ObjectSpec::Line(line) => {
            let image = transform_line(line, &spec, cfg.geom);
            let image_text = format_line(&image, cfg.geom);
            if fields.show_original {
                out.original = line_block(&format_line(line, cfg.geom));
            }
            if fields.show_transformed {
                out.transformed = line_block(&image_text);
            }
            out.symbolic = format!(
                "{}: {}",
                describe_transform(&spec, cfg.geom),
                image_text.general
            );
        }
        ObjectSpec::Function(fspec) => {
            let samples = sample_spec(fspec, cfg.sample);
            if fields.show_original {
                out.original = format_point_list(&samples, limit);
            }
            if fields.show_transformed {
                out.transformed = format_point_list(&spec.apply_points(&samples), limit);
            }
            out.symbolic = describe_function_transform(
                fspec.function.source(),
                fspec.function.var(),
                &spec,
                cfg.geom,
            );
        }
    }
    debug!(
        object = fields.object_kind.as_str(),
        transform = spec.kind_name(),
        "render: ok"
    );
    out
}
