//! Editor configuration.
//!
//! Every field has a default, so a config file only needs the values it wants
//! to change:
//!
//! ```json
//! { "block": { "width": 240, "text": "Step" }, "caret_blink_ms": 400 }
//! ```

use std::time::Duration;

use anyhow::{Context, Result};
use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use crate::color::Rgba;

/// Defaults applied to blocks created by the creation gesture.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockDefaults {
    pub width: f32,
    pub height: f32,
    pub text: String,
    pub color: Rgba,
    pub header_color: Rgba,
}

impl Default for BlockDefaults {
    fn default() -> Self {
        Self {
            width: 200.0,
            height: 120.0,
            text: "Block Text".to_string(),
            color: Rgba::rgb(0xf0, 0xf0, 0xf0),
            header_color: Rgba::rgb(0xdd, 0xdd, 0xdd),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub block: BlockDefaults,
    /// Radius of connection ports.
    pub port_radius: f32,
    /// Extra hit radius used when dropping a connection onto a port.
    pub port_snap_margin: f32,
    /// Caret blink period of text inputs, in milliseconds.
    pub caret_blink_ms: u64,
    /// Canvas clear color.
    pub background: Rgba,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            block: BlockDefaults::default(),
            port_radius: 6.0,
            port_snap_margin: 9.0,
            caret_blink_ms: 500,
            background: Rgba::WHITE,
        }
    }
}

impl EditorConfig {
    /// Load a JSON config file. Missing fields keep their defaults.
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).with_context(|| format!("Open {}", path))?;
        let mut cfg: EditorConfig =
            serde_json::from_str(&text).with_context(|| format!("Failed to parse {}", path))?;
        cfg.sanitize();
        Ok(cfg)
    }

    pub fn caret_blink_interval(&self) -> Duration {
        Duration::from_millis(self.caret_blink_ms)
    }

    // Values that would break hit-testing or the blink timer fall back to defaults.
    fn sanitize(&mut self) {
        let defaults = EditorConfig::default();
        if !(self.port_radius > 0.0) {
            log::warn!("ignoring port_radius {}, using {}", self.port_radius, defaults.port_radius);
            self.port_radius = defaults.port_radius;
        }
        if !(self.port_snap_margin >= 0.0) {
            log::warn!("ignoring port_snap_margin {}", self.port_snap_margin);
            self.port_snap_margin = defaults.port_snap_margin;
        }
        if self.caret_blink_ms == 0 {
            log::warn!("caret_blink_ms must be positive, using {}", defaults.caret_blink_ms);
            self.caret_blink_ms = defaults.caret_blink_ms;
        }
        if !(self.block.width > 0.0 && self.block.height > 0.0) {
            log::warn!("ignoring block size {}x{}", self.block.width, self.block.height);
            self.block.width = defaults.block.width;
            self.block.height = defaults.block.height;
        }
    }
}
