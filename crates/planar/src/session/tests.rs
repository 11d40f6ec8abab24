use super::*;
use crate::geom2::{GeomCfg, Line};
use crate::parse::parse_line_equation;
use crate::sample::sample_spec;
use crate::spec::ObjectSpec;

fn session() -> TransformSession {
    TransformSession::default()
}

#[test]
fn default_points_translate() {
    let s = session();
    let r = s.last_render();
    assert!(!r.is_error);
    assert_eq!(r.original, "(1, 2)\n(3, -1)\n(0, 0)");
    assert_eq!(r.transformed, "(3, -1)\n(5, -4)\n(2, -3)");
    assert_eq!(r.symbolic, "Translate by (2, -3)");
    assert_eq!(r.visible, vec![InputGroup::PointList, InputGroup::Translate]);
}

#[test]
fn dilate_by_zero_collapses_point_set() {
    let mut s = session();
    let r = s.edit(|f| {
        f.transform_kind = TransformKind::Dilate;
        f.factor = "0".into();
    });
    assert_eq!(r.transformed, "(0, 0)\n(0, 0)\n(0, 0)");
}

#[test]
fn line_reflected_across_itself() {
    let mut s = session();
    let r = s
        .edit(|f| {
            f.object_kind = ObjectKind::Line;
            f.transform_kind = TransformKind::Reflect;
            f.reflect_mode = ReflectMode::Slope;
        })
        .clone();
    assert!(!r.is_error);
    let original = r.original.lines().collect::<Vec<_>>();
    let transformed = r.transformed.lines().collect::<Vec<_>>();
    assert_eq!(original[1], "y = x");
    assert_eq!(transformed[1], "y = x");
    let a = parse_line_equation(original[0]).unwrap();
    let b = parse_line_equation(transformed[0]).unwrap();
    assert!(a.same_line(&b, 1e-9));
    assert!(r.symbolic.starts_with("Reflect across y = x: "));
}

#[test]
fn horizontal_line_rotated_becomes_vertical() {
    let mut s = session();
    let r = s.edit(|f| {
        f.object_kind = ObjectKind::Line;
        f.line_slope = "0".into();
        f.line_intercept = "1".into();
        f.transform_kind = TransformKind::Rotate;
    });
    assert_eq!(r.transformed.lines().nth(1), Some("x = -1"));
}

#[test]
fn function_translation_is_exact_and_symbolic() {
    let mut s = session();
    let r = s
        .edit(|f| {
            f.object_kind = ObjectKind::Function;
            f.dx = "0".into();
            f.dy = "5".into();
        })
        .clone();
    assert_eq!(r.symbolic, "y = (x - 0)^2 + 5");

    let cfg = *s.cfg();
    let ObjectSpec::Function(fspec) = derive_object(s.fields(), &cfg).unwrap() else {
        panic!("expected function object");
    };
    let samples = sample_spec(&fspec, cfg.sample);
    let moved = derive_transform(s.fields()).apply_points(&samples);
    assert_eq!(samples.len(), moved.len());
    for (p, q) in samples.iter().zip(&moved) {
        assert_eq!(q.x, p.x);
        assert_eq!(q.y, p.y + 5.0);
    }
}

#[test]
fn function_lists_are_truncated() {
    let mut s = session();
    let r = s.edit(|f| f.object_kind = ObjectKind::Function);
    // 601 samples, 300 shown.
    assert_eq!(r.original.lines().count(), 301);
    assert_eq!(r.original.lines().last(), Some("…301 more"));
}

#[test]
fn function_rotation_and_reflection_descriptions() {
    let mut s = session();
    let r = s
        .edit(|f| {
            f.object_kind = ObjectKind::Function;
            f.transform_kind = TransformKind::Rotate;
        })
        .clone();
    assert_eq!(r.symbolic, "x'(t) = -f(t)\ny'(t) = t\nwhere f(t) = t^2");
    let r = s.edit(|f| f.transform_kind = TransformKind::Reflect);
    assert!(r.symbolic.starts_with("Reflection across y = 0:"));
    assert!(!r.transformed.is_empty());
}

#[test]
fn polynomial_mode_builds_expression() {
    let mut s = session();
    let r = s.edit(|f| {
        f.object_kind = ObjectKind::Function;
        f.function_mode = FunctionMode::Polynomial;
        f.poly = ["0".into(), "1".into(), "-2".into(), "junk".into()];
    });
    assert_eq!(r.symbolic, "y = (x - 2)^2 - 2*(x - 2) - 3");
}

#[test]
fn parse_failures_blank_numeric_outputs() {
    let mut s = session();
    let r = s
        .edit(|f| {
            f.object_kind = ObjectKind::Function;
            f.expression = "x + y".into();
        })
        .clone();
    assert!(r.is_error);
    assert!(r.original.is_empty() && r.transformed.is_empty());
    assert_eq!(r.symbolic, "invalid function: unknown identifier 'y'");

    let r = s.edit(|f| {
        f.expression = "x".into();
        f.domain_min = "3".into();
        f.domain_max = "3".into();
    });
    assert!(r.is_error);
    assert!(r.symbolic.starts_with("invalid domain"));

    let r = s.edit(|f| {
        f.object_kind = ObjectKind::Line;
        f.line_mode = LineMode::Standard;
        f.line_a = "0".into();
        f.line_b = "0".into();
    });
    assert!(r.is_error);
    assert!(r.symbolic.contains("degenerate line"));

    let r = s.edit(|f| {
        f.line_mode = LineMode::Slope;
        f.line_slope = "steep".into();
    });
    assert!(r.is_error);
    assert!(r.symbolic.starts_with("slope:"));
}

#[test]
fn runaway_nesting_renders_as_error() {
    let mut s = session();
    let r = s.edit(|f| {
        f.object_kind = ObjectKind::Function;
        f.expression = format!("{}x{}", "(".repeat(50_000), ")".repeat(50_000));
    });
    assert!(r.is_error);
    assert!(r.original.is_empty() && r.transformed.is_empty());
    assert_eq!(r.symbolic, "invalid function: expression nests deeper than 256 levels");
}

#[test]
fn malformed_numbers_degrade_to_defaults() {
    let mut s = session();
    let r = s.edit(|f| f.dx = "abc".into());
    assert_eq!(r.symbolic, "Translate by (0, -3)");
    let r = s.edit(|f| {
        f.transform_kind = TransformKind::Dilate;
        f.factor = "".into();
    });
    assert_eq!(r.transformed, "(1, 2)\n(3, -1)\n(0, 0)");
}

#[test]
fn degenerate_mirror_reflects_as_identity() {
    let mut s = session();
    let r = s.edit(|f| {
        f.transform_kind = TransformKind::Reflect;
        f.reflect_mode = ReflectMode::Standard;
        f.mirror_a = "0".into();
        f.mirror_b = "0".into();
        f.mirror_c = "4".into();
    });
    assert!(!r.is_error);
    assert_eq!(r.transformed, r.original);
}

#[test]
fn toggles_hide_branches() {
    let mut s = session();
    let r = s.edit(|f| f.show_original = false);
    assert!(r.original.is_empty());
    assert!(!r.transformed.is_empty());
    let r = s.edit(|f| {
        f.show_original = true;
        f.show_transformed = false;
    });
    assert!(!r.original.is_empty());
    assert!(r.transformed.is_empty());
    assert!(!r.symbolic.is_empty());
}

#[test]
fn point_list_respects_configured_limit() {
    let cfg = SessionCfg {
        point_limit: 2,
        ..SessionCfg::default()
    };
    let s = TransformSession::with_cfg(Fields::default(), cfg);
    assert_eq!(s.last_render().original, "(1, 2)\n(3, -1)");
}

#[test]
fn line_slope_form_uses_session_tolerance() {
    let mut fields = Fields::default();
    fields.object_kind = ObjectKind::Line;
    fields.line_mode = LineMode::Standard;
    fields.line_a = "1".into();
    fields.line_b = "1e-9".into();
    fields.line_c = "-4".into();

    let strict = TransformSession::new(fields.clone());
    assert!(!strict.last_render().original.ends_with("x = 4"));

    let cfg = SessionCfg {
        geom: GeomCfg { eps_coef: 1e-6 },
        ..SessionCfg::default()
    };
    let loose = TransformSession::with_cfg(fields, cfg);
    let r = loose.last_render();
    assert!(!r.is_error);
    assert!(r.original.ends_with("\nx = 4"), "{}", r.original);
    assert!(r.transformed.ends_with("\nx = 6"), "{}", r.transformed);
}

#[test]
fn undo_restores_last_applied_state_once() {
    let mut s = session();
    s.set_field("dx", "10").unwrap();
    s.apply();
    assert!(s.has_snapshot());
    s.set_field("dx", "20").unwrap();
    let r = s.undo();
    assert_eq!(r.symbolic, "Translate by (10, -3)");
    assert_eq!(s.fields().dx, "10");
    assert!(!s.has_snapshot());

    // No snapshot: undo changes nothing.
    s.set_field("dx", "30").unwrap();
    let before = s.last_render().clone();
    assert_eq!(s.undo(), &before);
    assert_eq!(s.fields().dx, "30");
}

#[test]
fn apply_overwrites_previous_snapshot() {
    let mut s = session();
    s.set_field("dx", "1").unwrap();
    s.apply();
    s.set_field("dx", "2").unwrap();
    s.apply();
    s.set_field("dx", "3").unwrap();
    s.undo();
    assert_eq!(s.fields().dx, "2");
}

#[test]
fn reset_restores_defaults_and_drops_snapshot() {
    let mut s = session();
    s.set_field("object_kind", "line").unwrap();
    s.set_field("dx", "7").unwrap();
    s.apply();
    let r = s.reset().clone();
    assert_eq!(s.fields(), &Fields::default());
    assert!(!s.has_snapshot());
    assert_eq!(r, TransformSession::default().last_render().clone());
    s.undo();
    assert_eq!(s.fields(), &Fields::default());
}

#[test]
fn rejected_edit_keeps_state() {
    let mut s = session();
    let before = s.last_render().clone();
    assert!(s.set_field("transform_kind", "shear").is_err());
    assert!(s.set_field("bogus", "1").is_err());
    assert_eq!(s.last_render(), &before);
    assert_eq!(s.fields(), &Fields::default());
}

#[test]
fn reflect_presets_map_points() {
    let mut s = session();
    let cases = [
        ("x_axis", "(1, -2)\n(3, 1)\n(0, 0)"),
        ("y_axis", "(-1, 2)\n(-3, -1)\n(0, 0)"),
        ("diagonal", "(2, 1)\n(-1, 3)\n(0, 0)"),
        ("anti_diagonal", "(-2, -1)\n(1, -3)\n(0, 0)"),
    ];
    s.set_field("transform_kind", "reflect").unwrap();
    for (mode, expected) in cases {
        let r = s.set_field("reflect_mode", mode).unwrap();
        assert_eq!(r.transformed, expected, "{mode}");
    }
}

#[test]
fn mirror_line_is_stored_normalized() {
    let mut f = Fields::default();
    f.transform_kind = TransformKind::Reflect;
    f.reflect_mode = ReflectMode::Standard;
    f.mirror_a = "3".into();
    f.mirror_b = "4".into();
    f.mirror_c = "5".into();
    match derive_transform(&f) {
        crate::geom2::TransformSpec::Reflect { line, display } => {
            assert!(line.same_line(&Line::from_coefficients(0.6, 0.8, 1.0), 1e-12));
            assert!(display.is_none());
        }
        other => panic!("unexpected {other:?}"),
    }
}
