//! Configuration shared by language crates.
//!
//! Language-specific options (drill syllable lists, etc.) belong in the
//! language crate's own config, which flattens this one.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::Style;

/// Generic configuration for comparison and rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// When a classification changes, start the new run with the typed
    /// character (true) or the reference character (false).
    pub preserve_typed: bool,

    /// Markers placed around runs when rendering a diff as plain text
    pub markers: Markers,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            preserve_typed: true,
            markers: Markers::default(),
        }
    }
}

/// Opening and closing marker for one style.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct StyleMarkers {
    pub open: String,
    pub close: String,
}

impl StyleMarkers {
    pub fn new(open: &str, close: &str) -> Self {
        Self {
            open: open.to_string(),
            close: close.to_string(),
        }
    }

    /// Wrap `text` in this style's markers.
    pub fn wrap(&self, text: &str) -> String {
        format!("{}{}{}", self.open, text, self.close)
    }
}

/// Plain-text markers per presentation style.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Markers {
    pub correct: StyleMarkers,
    pub pending: StyleMarkers,
    pub error: StyleMarkers,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            correct: StyleMarkers::default(),
            pending: StyleMarkers::new("{", "}"),
            error: StyleMarkers::new("[", "]"),
        }
    }
}

impl Markers {
    pub fn for_style(&self, style: Style) -> &StyleMarkers {
        match style {
            Style::Correct => &self.correct,
            Style::Pending => &self.pending,
            Style::Error => &self.error,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
