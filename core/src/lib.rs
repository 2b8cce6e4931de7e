//! libtyping-core
//!
//! Core comparison engine, segment model and configuration shared by
//! language-specific typing-practice crates (libhangul).
//!
//! Public API:
//! - `Decomposer` - Trait mapping a character to the components typed for it
//! - `Differ` - Stateless engine classifying typed text against a reference
//! - `Segment` / `Classification` - Run-length encoded comparison result
//! - `DiffStats` - Per-classification character counts
//! - `Config` - Comparison and rendering options (TOML)

pub mod classification;
pub use classification::{Classification, Style};

pub mod segment;
pub use segment::{first_mismatch_offset, joined_text, Segment};

pub mod decomposer;
pub use decomposer::Decomposer;

pub mod differ;
pub use differ::Differ;

pub mod stats;
pub use stats::DiffStats;

pub mod config;
pub use config::{Config, Markers, StyleMarkers};

pub mod error;
pub use error::ConfigError;
