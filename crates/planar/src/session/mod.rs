//! Interactive controller over the kernel.
//!
//! Purpose
//! - Own the current field state and the single undo snapshot.
//! - Re-derive object and transform from scratch on every change and produce
//!   the three output strings (`Rendered`).
//!
//! State machine
//! - `apply`: snapshot current fields (replacing any previous snapshot), render.
//! - `undo`: restore and drop the snapshot if one exists, render; no-op otherwise.
//! - `reset`: restore built-in defaults, drop any snapshot, render.
//!
//! References
//! - Code cross-refs: `render::render`, `fields::Fields`, `format`, `geom2`

mod fields;
mod render;

pub use fields::{
    visible_groups, Fields, FunctionMode, InputGroup, LineMode, ObjectKind, ReflectMode,
    TransformKind,
};
pub use render::{derive_object, derive_transform, function_source, render, Rendered};

use tracing::{debug, info};

use crate::error::SessionError;
use crate::geom2::GeomCfg;
use crate::parse::POINT_LIMIT;
use crate::sample::SampleCfg;

/// Session configuration.
#[derive(Clone, Copy, Debug)]
pub struct SessionCfg {
    /// Points kept from a point list.
    pub point_limit: usize,
    /// Entries shown per point list before `…N more`.
    pub display_limit: usize,
    pub sample: SampleCfg,
    pub geom: GeomCfg,
}

impl Default for SessionCfg {
    fn default() -> Self {
        Self {
            point_limit: POINT_LIMIT,
            display_limit: 300,
            sample: SampleCfg::default(),
            geom: GeomCfg::default(),
        }
    }
}

/// Current inputs, optional undo snapshot, and the latest render.
#[derive(Clone, Debug)]
pub struct TransformSession {
    fields: Fields,
    snapshot: Option<Fields>,
    cfg: SessionCfg,
    last: Rendered,
}

impl Default for TransformSession {
    fn default() -> Self {
        Self::new(Fields::default())
    }
}

impl TransformSession {
    pub fn new(fields: Fields) -> Self {
        Self::with_cfg(fields, SessionCfg::default())
    }

    pub fn with_cfg(fields: Fields, cfg: SessionCfg) -> Self {
        let last = render(&fields, &cfg);
        Self {
            fields,
            snapshot: None,
            cfg,
            last,
        }
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    pub fn cfg(&self) -> &SessionCfg {
        &self.cfg
    }

    pub fn last_render(&self) -> &Rendered {
        &self.last
    }

    pub fn has_snapshot(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Recompute outputs from the current fields.
    pub fn render(&mut self) -> &Rendered {
        self.last = render(&self.fields, &self.cfg);
        &self.last
    }

    /// Mutate fields in place, then re-render.
    pub fn edit<F>(&mut self, f: F) -> &Rendered
    where
        F: FnOnce(&mut Fields),
    {
        f(&mut self.fields);
        self.render()
    }

    /// String-keyed edit as a hosting UI sends it. Rejected edits leave the
    /// state and the last render untouched.
    pub fn set_field(&mut self, key: &str, value: &str) -> Result<&Rendered, SessionError> {
        self.fields.set(key, value)?;
        Ok(self.render())
    }

    pub fn apply(&mut self) -> &Rendered {
        let replaced = self.snapshot.replace(self.fields.clone()).is_some();
        info!(replaced, "session: apply");
        self.render()
    }

    pub fn undo(&mut self) -> &Rendered {
        match self.snapshot.take() {
            Some(saved) => {
                info!("session: undo");
                self.fields = saved;
                self.render()
            }
            None => {
                debug!("session: undo without snapshot");
                &self.last
            }
        }
    }

    pub fn reset(&mut self) -> &Rendered {
        info!(had_snapshot = self.snapshot.is_some(), "session: reset");
        self.fields = Fields::default();
        self.snapshot = None;
        self.render()
    }
}

#[cfg(test)]
mod tests;
