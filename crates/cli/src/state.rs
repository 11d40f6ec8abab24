use anyhow::{bail, Context, Result};
use planar::Fields;
use std::fs;
use std::path::Path;

/// Load a field state from JSON; missing keys take their defaults.
pub fn load_fields(path: &Path) -> Result<Fields> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("decoding {}", path.display()))
}

/// Apply `KEY=VALUE` overrides in order.
pub fn apply_overrides(fields: &mut Fields, overrides: &[String]) -> Result<()> {
    for item in overrides {
        let Some((key, value)) = item.split_once('=') else {
            bail!("override '{item}' is not KEY=VALUE");
        };
        fields
            .set(key.trim(), value)
            .with_context(|| format!("applying override '{item}'"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use planar::session::{ObjectKind, TransformKind};
    use tempfile::tempdir;

    #[test]
    fn load_fields_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, r#"{"object_kind": "line", "transform_kind": "rotate"}"#).unwrap();
        let f = load_fields(&path).unwrap();
        assert_eq!(f.object_kind, ObjectKind::Line);
        assert_eq!(f.transform_kind, TransformKind::Rotate);
        assert_eq!(f.expression, Fields::default().expression);
    }

    #[test]
    fn load_fields_reports_bad_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        let err = load_fields(&path).unwrap_err();
        assert!(format!("{err:#}").contains("decoding"));
        assert!(load_fields(&dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn overrides_apply_in_order_and_validate() {
        let mut f = Fields::default();
        apply_overrides(
            &mut f,
            &["dx=5".to_string(), "points=(1,1); (2,2)".to_string(), "dx=6".to_string()],
        )
        .unwrap();
        assert_eq!(f.dx, "6");
        assert_eq!(f.points, "(1,1); (2,2)");
        assert!(apply_overrides(&mut f, &["dx".to_string()]).is_err());
        assert!(apply_overrides(&mut f, &["color=red".to_string()]).is_err());
    }
}
