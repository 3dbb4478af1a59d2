use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Result;

/// Top-level configuration structure for the application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub markup: MarkupConfig,
    pub runtime: RuntimeConfig,
}

impl AppConfig {
    /// Reads a JSON configuration file. Missing sections keep their
    /// defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Naming of classes, data attributes and runtime markers.
///
/// With an empty prefix the names are the bare contract names (`animated`,
/// `data-mode`, `triggered`). A prefix such as `mb` namespaces all of them
/// (`mb-animated`, `data-mb-mode`, `mb-triggered`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkupConfig {
    pub prefix: String,
}

impl MarkupConfig {
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Class name in this namespace.
    pub fn class(&self, name: &str) -> String {
        if self.prefix.is_empty() {
            name.to_string()
        } else {
            format!("{}-{name}", self.prefix)
        }
    }

    /// Full `data-*` attribute name for a short key such as `mode`.
    pub fn data_attr(&self, key: &str) -> String {
        format!("data-{}", self.class(key))
    }

    pub fn triggered_class(&self) -> String {
        self.class("triggered")
    }

    pub fn exit_triggered_class(&self) -> String {
        self.class("exit-triggered")
    }
}

/// Observer tuning and platform capabilities for the trigger runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Viewport shrink applied to the top and bottom edges for
    /// scroll-appear, in percent of the viewport height.
    pub appear_margin_percent: f64,
    /// Visible fraction required before a scroll-appear element counts as
    /// intersecting.
    pub appear_threshold: f64,
    /// Visible fraction below which a page-load animation pauses.
    pub pause_threshold: f64,
    /// Whether the host can bind animations to a scroll timeline.
    pub scroll_timeline_supported: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            appear_margin_percent: 15.0,
            appear_threshold: 0.1,
            pause_threshold: 0.0,
            scroll_timeline_supported: true,
        }
    }
}
