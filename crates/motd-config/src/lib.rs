//! Configuration types and loader for the MOTD generator.
//!
//! This crate owns the on-disk configuration schema so the engine and widget
//! crates can share a single source of truth. Structural problems (missing
//! file, invalid JSON, missing `type` on a widget entry) are fatal and
//! surfaced here, before the layout engine ever runs.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Top-level configuration document loaded from `motd.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct MotdConfig {
    /// Ordered widget list; output order follows this order.
    pub widgets: Vec<WidgetSpec>,
    #[serde(default)]
    pub settings: Settings,
}

/// Global document-level options.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Default count of blank lines appended after a block when its spec
    /// carries no `spaceAfter`.
    #[serde(default = "default_spacing")]
    pub spacing: u32,
    /// Target line width. When absent, the caller falls back to the detected
    /// terminal width, then to 80.
    #[serde(default)]
    pub width: Option<u16>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            spacing: default_spacing(),
            width: None,
        }
    }
}

fn default_spacing() -> u32 {
    1
}

fn default_enabled() -> bool {
    true
}

/// One entry in the configuration's widget list.
///
/// The engine only interprets `type`, `enabled`, `row`, `spaceAfter`, and
/// `rowGap`; everything else lands in the option bag and is read by the
/// widget implementation itself via the `opt_*` accessors.
#[derive(Debug, Clone, Deserialize)]
pub struct WidgetSpec {
    /// Registry key identifying the widget implementation.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Entries sharing a row number and contiguous in the list are
    /// composited side by side.
    #[serde(default)]
    pub row: Option<i64>,
    /// Blank lines appended after this widget or row.
    #[serde(default, rename = "spaceAfter")]
    pub space_after: Option<u32>,
    /// Widget-specific options, opaque to the engine.
    #[serde(flatten)]
    pub options: Map<String, Value>,
}

impl WidgetSpec {
    /// Build a spec with just a type name; used by tests and tools.
    pub fn of_type(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            enabled: true,
            row: None,
            space_after: None,
            options: Map::new(),
        }
    }

    pub fn opt_str(&self, key: &str) -> Option<&str> {
        self.options.get(key).and_then(Value::as_str)
    }

    pub fn opt_bool(&self, key: &str) -> Option<bool> {
        self.options.get(key).and_then(Value::as_bool)
    }

    pub fn opt_u64(&self, key: &str) -> Option<u64> {
        self.options.get(key).and_then(Value::as_u64)
    }

    pub fn opt_f64(&self, key: &str) -> Option<f64> {
        self.options.get(key).and_then(Value::as_f64)
    }

    /// String-list option; non-string elements are skipped.
    pub fn opt_str_list(&self, key: &str) -> Option<Vec<String>> {
        let list = self.options.get(key)?.as_array()?;
        Some(
            list.iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
        )
    }
}

impl MotdConfig {
    /// Parse and validate configuration JSON.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(input).context("failed to parse MOTD config JSON")?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;

        Self::from_json_str(&raw).with_context(|| format!("invalid config at {}", path.display()))
    }

    /// Validate semantic constraints serde cannot express.
    pub fn validate(&self) -> Result<()> {
        for (i, widget) in self.widgets.iter().enumerate() {
            if widget.kind.trim().is_empty() {
                bail!("widget at index {i} has an empty 'type'");
            }
        }

        if let Some(width) = self.settings.width {
            if width == 0 {
                bail!("settings.width must be greater than zero");
            }
        }

        Ok(())
    }
}
