use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::color;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Palette", inline)]
#[serde(default)]
/// Named sRGB colors the color buttons apply to one material.
pub struct PaletteOptions {
    /// Material whose base color the palette recolors.
    pub material: String,
    /// Palette name to `#rrggbb` sRGB hex.
    pub colors: BTreeMap<String, String>,
}

impl Default for PaletteOptions {
    fn default() -> Self {
        let colors = [
            ("black", "#383830"),
            ("red", "#fe2d2d"),
            ("yellow", "#ffffff"),
        ]
        .into_iter()
        .map(|(name, hex)| (name.to_owned(), hex.to_owned()))
        .collect();
        Self {
            material: "Drill_01".to_owned(),
            colors,
        }
    }
}

impl PaletteOptions {
    /// Linear RGB for a palette entry. `None` if the name is unknown or its
    /// hex string is malformed.
    #[must_use]
    pub fn linear(&self, name: &str) -> Option<[f32; 3]> {
        let hex = self.colors.get(name)?;
        color::parse_hex(hex).map(color::hex_to_linear)
    }
}
