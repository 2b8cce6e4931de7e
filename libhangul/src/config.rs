//! Hangul-specific configuration that extends the base `Config` from core.
//!
//! This configuration includes:
//! - All generic options from `libtyping_core::Config` (flattened via serde)
//! - The syllable list used by the drill
//!
//! # Example
//!
//! ```rust
//! use libhangul::HangulConfig;
//!
//! let config = HangulConfig::from_toml_str("preserve_typed = false").unwrap();
//! assert!(!config.base().preserve_typed);
//! assert!(!config.drill_syllables.is_empty());
//! ```

use libtyping_core::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct HangulConfig {
    /// Base configuration fields (preserve_typed, markers)
    #[serde(flatten)]
    pub base: libtyping_core::Config,

    /// Syllables the drill picks from
    pub drill_syllables: String,
}

impl Default for HangulConfig {
    fn default() -> Self {
        Self {
            base: libtyping_core::Config::default(),
            drill_syllables: default_drill_syllables(),
        }
    }
}

impl HangulConfig {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Convert this config into the base config.
    pub fn into_base(self) -> libtyping_core::Config {
        self.base
    }

    /// Get a reference to the base config
    pub fn base(&self) -> &libtyping_core::Config {
        &self.base
    }

    /// Get a mutable reference to the base config
    pub fn base_mut(&mut self) -> &mut libtyping_core::Config {
        &mut self.base
    }
}

/// Open syllables for each basic leading consonant.
fn default_drill_syllables() -> String {
    "가나다라마바사아자차카타파하".to_string()
}
