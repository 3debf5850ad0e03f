//! Centralized viewer options with TOML preset support.
//!
//! All tweakable settings (camera, scroll choreography, customizer hand-off,
//! color palette, button bindings) are consolidated here. Options serialize
//! to/from TOML for presets; the web host also accepts them as JSON.

mod bindings;
mod camera;
mod customizer;
mod palette;
mod timeline;

use std::path::Path;

pub use bindings::{BindingOptions, ButtonBinding};
pub use camera::CameraOptions;
pub use customizer::CustomizerOptions;
pub use palette::PaletteOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use timeline::{SegmentConfig, TimelineOptions};

use crate::error::VantageError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[customizer]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection, orbit and initial pose.
    pub camera: CameraOptions,
    /// Scroll-driven camera segments.
    pub timeline: TimelineOptions,
    /// Interactive customizer pose and hand-off timing.
    pub customizer: CustomizerOptions,
    /// Color swatches for the recolor buttons.
    pub palette: PaletteOptions,
    /// Button selector to action table.
    #[schemars(skip)]
    pub bindings: BindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, VantageError> {
        let content = std::fs::read_to_string(path).map_err(VantageError::Io)?;
        toml::from_str(&content)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))
    }

    /// Parse options from a JSON string. Missing fields use defaults.
    pub fn from_json(json: &str) -> Result<Self, VantageError> {
        serde_json::from_str(json)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), VantageError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(VantageError::Io)?;
        }
        std::fs::write(path, content).map_err(VantageError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
