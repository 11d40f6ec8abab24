//! Raw input state as a hosting UI holds it: selectors, text fields, toggles.
//!
//! Nothing here is validated; `render` interprets the values on every pass.

use serde::{Deserialize, Serialize};

use crate::error::SessionError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    Points,
    Line,
    Function,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformKind {
    Translate,
    Rotate,
    Reflect,
    Dilate,
}

/// How the object line is entered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineMode {
    Slope,
    Standard,
}

/// Mirror line: four presets or one of the two entry forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReflectMode {
    XAxis,
    YAxis,
    /// y = x
    Diagonal,
    /// y = −x
    AntiDiagonal,
    Slope,
    Standard,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionMode {
    Expression,
    Polynomial,
}

/// Input groups a UI shows for the current selectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputGroup {
    PointList,
    LineSlope,
    LineStandard,
    FunctionExpression,
    FunctionPolynomial,
    FunctionDomain,
    Translate,
    Rotate,
    ReflectSlope,
    ReflectStandard,
    Dilate,
}

macro_rules! choices {
    ($ty:ty, $field:literal, [$(($name:literal, $variant:expr)),+ $(,)?]) => {
        impl $ty {
            pub const CHOICES: &'static [(&'static str, $ty)] = &[$(($name, $variant)),+];

            pub fn parse_choice(value: &str) -> Result<Self, SessionError> {
                let v = value.trim();
                Self::CHOICES
                    .iter()
                    .find(|(name, _)| name.eq_ignore_ascii_case(v))
                    .map(|&(_, variant)| variant)
                    .ok_or_else(|| SessionError::InvalidChoice {
                        field: $field,
                        value: value.to_string(),
                    })
            }

            pub fn as_str(&self) -> &'static str {
                Self::CHOICES
                    .iter()
                    .find(|(_, variant)| variant == self)
                    .map(|&(name, _)| name)
                    .unwrap_or("?")
            }
        }
    };
}

choices!(ObjectKind, "object_kind", [
    ("points", ObjectKind::Points),
    ("line", ObjectKind::Line),
    ("function", ObjectKind::Function),
]);
choices!(TransformKind, "transform_kind", [
    ("translate", TransformKind::Translate),
    ("rotate", TransformKind::Rotate),
    ("reflect", TransformKind::Reflect),
    ("dilate", TransformKind::Dilate),
]);
choices!(LineMode, "line_mode", [
    ("slope", LineMode::Slope),
    ("standard", LineMode::Standard),
]);
choices!(ReflectMode, "reflect_mode", [
    ("x_axis", ReflectMode::XAxis),
    ("y_axis", ReflectMode::YAxis),
    ("diagonal", ReflectMode::Diagonal),
    ("anti_diagonal", ReflectMode::AntiDiagonal),
    ("slope", ReflectMode::Slope),
    ("standard", ReflectMode::Standard),
]);
choices!(FunctionMode, "function_mode", [
    ("expression", FunctionMode::Expression),
    ("polynomial", FunctionMode::Polynomial),
]);

/// Full input state. `Default` is the built-in state restored by `reset`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fields {
    pub object_kind: ObjectKind,
    pub transform_kind: TransformKind,
    pub line_mode: LineMode,
    pub reflect_mode: ReflectMode,
    pub function_mode: FunctionMode,

    pub points: String,

    pub line_slope: String,
    pub line_intercept: String,
    pub line_a: String,
    pub line_b: String,
    pub line_c: String,

    pub expression: String,
    /// Polynomial builder coefficients, highest power first (x³, x², x, 1).
    pub poly: [String; 4],
    pub domain_min: String,
    pub domain_max: String,

    pub dx: String,
    pub dy: String,
    pub degrees: String,
    pub rotate_cx: String,
    pub rotate_cy: String,
    pub factor: String,
    pub dilate_cx: String,
    pub dilate_cy: String,
    pub mirror_slope: String,
    pub mirror_intercept: String,
    pub mirror_a: String,
    pub mirror_b: String,
    pub mirror_c: String,

    pub show_original: bool,
    pub show_transformed: bool,
}

impl Default for Fields {
    fn default() -> Self {
        Self {
            object_kind: ObjectKind::Points,
            transform_kind: TransformKind::Translate,
            line_mode: LineMode::Slope,
            reflect_mode: ReflectMode::XAxis,
            function_mode: FunctionMode::Expression,
            points: "(1,2); (3,-1); (0,0)".into(),
            line_slope: "1".into(),
            line_intercept: "0".into(),
            line_a: "1".into(),
            line_b: "-1".into(),
            line_c: "0".into(),
            expression: "x^2".into(),
            poly: ["0".into(), "1".into(), "0".into(), "0".into()],
            domain_min: "-10".into(),
            domain_max: "10".into(),
            dx: "2".into(),
            dy: "-3".into(),
            degrees: "90".into(),
            rotate_cx: "0".into(),
            rotate_cy: "0".into(),
            factor: "2".into(),
            dilate_cx: "0".into(),
            dilate_cy: "0".into(),
            mirror_slope: "1".into(),
            mirror_intercept: "0".into(),
            mirror_a: "1".into(),
            mirror_b: "-1".into(),
            mirror_c: "0".into(),
            show_original: true,
            show_transformed: true,
        }
    }
}

fn parse_toggle(field: &'static str, value: &str) -> Result<bool, SessionError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "on" | "yes" => Ok(true),
        "false" | "0" | "off" | "no" => Ok(false),
        _ => Err(SessionError::InvalidChoice {
            field,
            value: value.to_string(),
        }),
    }
}

impl Fields {
    /// Keys accepted by `set`, in display order.
    pub const KEYS: &'static [&'static str] = &[
        "object_kind",
        "transform_kind",
        "line_mode",
        "reflect_mode",
        "function_mode",
        "points",
        "line_slope",
        "line_intercept",
        "line_a",
        "line_b",
        "line_c",
        "expression",
        "poly_c3",
        "poly_c2",
        "poly_c1",
        "poly_c0",
        "domain_min",
        "domain_max",
        "dx",
        "dy",
        "degrees",
        "rotate_cx",
        "rotate_cy",
        "factor",
        "dilate_cx",
        "dilate_cy",
        "mirror_slope",
        "mirror_intercept",
        "mirror_a",
        "mirror_b",
        "mirror_c",
        "show_original",
        "show_transformed",
    ];

    /// Set one field from its string-keyed UI form.
    ///
    /// Selectors and toggles are checked; text fields accept anything.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), SessionError> {
        let text = |slot: &mut String| *slot = value.to_string();
        match key {
            "object_kind" => self.object_kind = ObjectKind::parse_choice(value)?,
            "transform_kind" => self.transform_kind = TransformKind::parse_choice(value)?,
            "line_mode" => self.line_mode = LineMode::parse_choice(value)?,
            "reflect_mode" => self.reflect_mode = ReflectMode::parse_choice(value)?,
            "function_mode" => self.function_mode = FunctionMode::parse_choice(value)?,
            "points" => text(&mut self.points),
            "line_slope" => text(&mut self.line_slope),
            "line_intercept" => text(&mut self.line_intercept),
            "line_a" => text(&mut self.line_a),
            "line_b" => text(&mut self.line_b),
            "line_c" => text(&mut self.line_c),
            "expression" => text(&mut self.expression),
            "poly_c3" => text(&mut self.poly[0]),
            "poly_c2" => text(&mut self.poly[1]),
            "poly_c1" => text(&mut self.poly[2]),
            "poly_c0" => text(&mut self.poly[3]),
            "domain_min" => text(&mut self.domain_min),
            "domain_max" => text(&mut self.domain_max),
            "dx" => text(&mut self.dx),
            "dy" => text(&mut self.dy),
            "degrees" => text(&mut self.degrees),
            "rotate_cx" => text(&mut self.rotate_cx),
            "rotate_cy" => text(&mut self.rotate_cy),
            "factor" => text(&mut self.factor),
            "dilate_cx" => text(&mut self.dilate_cx),
            "dilate_cy" => text(&mut self.dilate_cy),
            "mirror_slope" => text(&mut self.mirror_slope),
            "mirror_intercept" => text(&mut self.mirror_intercept),
            "mirror_a" => text(&mut self.mirror_a),
            "mirror_b" => text(&mut self.mirror_b),
            "mirror_c" => text(&mut self.mirror_c),
            "show_original" => self.show_original = parse_toggle("show_original", value)?,
            "show_transformed" => {
                self.show_transformed = parse_toggle("show_transformed", value)?
            }
            _ => return Err(SessionError::UnknownField(key.to_string())),
        }
        Ok(())
    }
}

/// Input groups relevant to the current selectors.
pub fn visible_groups(fields: &Fields) -> Vec<InputGroup> {
    let mut groups = Vec::with_capacity(4);
    match fields.object_kind {
        ObjectKind::Points => groups.push(InputGroup::PointList),
        ObjectKind::Line => groups.push(match fields.line_mode {
            LineMode::Slope => InputGroup::LineSlope,
            LineMode::Standard => InputGroup::LineStandard,
        }),
        ObjectKind::Function => {
            groups.push(match fields.function_mode {
                FunctionMode::Expression => InputGroup::FunctionExpression,
                FunctionMode::Polynomial => InputGroup::FunctionPolynomial,
            });
            groups.push(InputGroup::FunctionDomain);
        }
    }
    match fields.transform_kind {
        TransformKind::Translate => groups.push(InputGroup::Translate),
        TransformKind::Rotate => groups.push(InputGroup::Rotate),
        TransformKind::Dilate => groups.push(InputGroup::Dilate),
        TransformKind::Reflect => match fields.reflect_mode {
            ReflectMode::Slope => groups.push(InputGroup::ReflectSlope),
            ReflectMode::Standard => groups.push(InputGroup::ReflectStandard),
            ReflectMode::XAxis
            | ReflectMode::YAxis
            | ReflectMode::Diagonal
            | ReflectMode::AntiDiagonal => {}
        },
    }
    groups
}
