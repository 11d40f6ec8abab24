//! Line-oriented session host: one command per line, outputs after each change.
//!
//! Commands: `set KEY VALUE`, `apply`, `undo`, `reset`, `show`, `fields`,
//! `keys`, `help`, `quit`.

use anyhow::Result;
use planar::{Fields, Rendered, TransformSession};
use std::io::{BufRead, Write};

const HELP: &str = "commands: set KEY VALUE | apply | undo | reset | show | fields | keys | help | quit";

/// Print the three output regions, as text or one JSON object per render.
pub fn write_rendered<W: Write>(out: &mut W, r: &Rendered, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string(r)?)?;
        return Ok(());
    }
    if r.is_error {
        writeln!(out, "error: {}", r.symbolic)?;
        return Ok(());
    }
    if !r.original.is_empty() {
        writeln!(out, "[original]\n{}", r.original)?;
    }
    if !r.transformed.is_empty() {
        writeln!(out, "[transformed]\n{}", r.transformed)?;
    }
    writeln!(out, "[symbolic]\n{}", r.symbolic)?;
    Ok(())
}

pub fn run<R: BufRead, W: Write>(fields: Fields, input: R, out: &mut W, json: bool) -> Result<()> {
    let mut session = TransformSession::new(fields);
    write_rendered(out, session.last_render(), json)?;
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (cmd, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        match cmd {
            "set" => {
                let rest = rest.trim_start();
                let (key, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                match session.set_field(key, value.trim()) {
                    Ok(r) => write_rendered(out, r, json)?,
                    Err(e) => {
                        tracing::warn!(error = %e, "rejected edit");
                        writeln!(out, "error: {e}")?;
                    }
                }
            }
            "apply" => write_rendered(out, session.apply(), json)?,
            "undo" => write_rendered(out, session.undo(), json)?,
            "reset" => write_rendered(out, session.reset(), json)?,
            "show" => write_rendered(out, session.last_render(), json)?,
            "fields" => writeln!(out, "{}", serde_json::to_string_pretty(session.fields())?)?,
            "keys" => writeln!(out, "{}", Fields::KEYS.join(" "))?,
            "help" => writeln!(out, "{HELP}")?,
            "quit" | "exit" => break,
            other => writeln!(out, "error: unknown command '{other}'; {HELP}")?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(script: &str) -> String {
        let mut out = Vec::new();
        run(Fields::default(), Cursor::new(script), &mut out, false).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn initial_render_and_edits() {
        let text = run_script("set dx 0\nset dy 1\n");
        assert!(text.starts_with("[original]\n(1, 2)\n(3, -1)\n(0, 0)\n"));
        assert!(text.contains("[symbolic]\nTranslate by (0, 1)"));
    }

    #[test]
    fn apply_undo_cycle() {
        let text = run_script("set dx 4\napply\nset dx 9\nundo\nfields\nquit\nset dx 100\n");
        assert!(text.contains("\"dx\": \"4\""));
        assert!(!text.contains("Translate by (100"));
    }

    #[test]
    fn errors_are_reported_inline() {
        let text = run_script("set color red\nfrobnicate\nset object_kind function\nset expression x+\n");
        assert!(text.contains("error: unknown field 'color'"));
        assert!(text.contains("error: unknown command 'frobnicate'"));
        assert!(text.contains("error: invalid function"));
    }

    #[test]
    fn values_may_contain_spaces() {
        let text = run_script("set points (5, 5); (6, 6)\n");
        assert!(text.contains("[original]\n(5, 5)\n(6, 6)\n"));
    }

    #[test]
    fn json_mode_emits_objects() {
        let mut out = Vec::new();
        run(Fields::default(), Cursor::new("reset\n"), &mut out, true).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let v: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(v["symbolic"], "Translate by (2, -3)");
        assert_eq!(v["is_error"], false);
    }
}
