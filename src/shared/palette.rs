//! Palette Types
//!
//! A config is a named terminal color scheme: the sixteen ANSI palette
//! entries plus opacity and three special colors. The JSON representation is
//! flat (`color0` .. `color15`, `opacity`, `foreground`, ...) and every field
//! except `name` falls back to the Tango-like defaults below when omitted.

use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;
use crate::shared::validation::{validate_color, validate_config_name, validate_opacity};

/// Default ANSI palette, `color0` through `color15`
pub const DEFAULT_PALETTE: [&str; 16] = [
    "#000000", "#cc0000", "#4e9a06", "#c4a000", "#3465a4", "#75507b", "#06989a", "#d3d7cf",
    "#555753", "#ff5555", "#55ff55", "#ffff55", "#5555ff", "#ff55ff", "#55ffff", "#ffffff",
];

/// Default terminal opacity
pub const DEFAULT_OPACITY: f64 = 0.9;
/// Default foreground color
pub const DEFAULT_FOREGROUND: &str = "#d3d7cf";
/// Default background color
pub const DEFAULT_BACKGROUND: &str = "#000000";
/// Default selection background color
pub const DEFAULT_SELECTION_BACKGROUND: &str = "#3465a4";

/// The sixteen ANSI palette entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ssr", derive(sqlx::FromRow))]
#[serde(default)]
pub struct Palette {
    pub color0: String,
    pub color1: String,
    pub color2: String,
    pub color3: String,
    pub color4: String,
    pub color5: String,
    pub color6: String,
    pub color7: String,
    pub color8: String,
    pub color9: String,
    pub color10: String,
    pub color11: String,
    pub color12: String,
    pub color13: String,
    pub color14: String,
    pub color15: String,
}

impl Palette {
    /// Palette entries in index order
    pub fn colors(&self) -> [&str; 16] {
        [
            self.color0.as_str(),
            self.color1.as_str(),
            self.color2.as_str(),
            self.color3.as_str(),
            self.color4.as_str(),
            self.color5.as_str(),
            self.color6.as_str(),
            self.color7.as_str(),
            self.color8.as_str(),
            self.color9.as_str(),
            self.color10.as_str(),
            self.color11.as_str(),
            self.color12.as_str(),
            self.color13.as_str(),
            self.color14.as_str(),
            self.color15.as_str(),
        ]
    }

    /// Check that every entry is a `#rrggbb` color
    pub fn validate(&self) -> Result<(), SharedError> {
        for (index, color) in self.colors().iter().enumerate() {
            validate_color(&format!("color{index}"), color)?;
        }
        Ok(())
    }
}

impl Default for Palette {
    fn default() -> Self {
        let [c0, c1, c2, c3, c4, c5, c6, c7, c8, c9, c10, c11, c12, c13, c14, c15] =
            DEFAULT_PALETTE.map(String::from);
        Self {
            color0: c0,
            color1: c1,
            color2: c2,
            color3: c3,
            color4: c4,
            color5: c5,
            color6: c6,
            color7: c7,
            color8: c8,
            color9: c9,
            color10: c10,
            color11: c11,
            color12: c12,
            color13: c13,
            color14: c14,
            color15: c15,
        }
    }
}

/// Opacity and the colors that are not part of the ANSI palette
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ssr", derive(sqlx::FromRow))]
#[serde(default)]
pub struct SpecialColors {
    pub opacity: f64,
    pub foreground: String,
    pub background: String,
    pub selection_background: String,
}

impl SpecialColors {
    pub fn validate(&self) -> Result<(), SharedError> {
        validate_opacity(self.opacity)?;
        validate_color("foreground", &self.foreground)?;
        validate_color("background", &self.background)?;
        validate_color("selection_background", &self.selection_background)
    }
}

impl Default for SpecialColors {
    fn default() -> Self {
        Self {
            opacity: DEFAULT_OPACITY,
            foreground: DEFAULT_FOREGROUND.to_string(),
            background: DEFAULT_BACKGROUND.to_string(),
            selection_background: DEFAULT_SELECTION_BACKGROUND.to_string(),
        }
    }
}

/// Body of config create and update requests
///
/// Updates replace every mutable field of a config with the values in the
/// payload; fields left out are reset to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigPayload {
    pub name: String,
    #[serde(flatten)]
    pub palette: Palette,
    #[serde(flatten)]
    pub special: SpecialColors,
}

impl ConfigPayload {
    /// Payload with the given name and default colors
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            palette: Palette::default(),
            special: SpecialColors::default(),
        }
    }

    pub fn validate(&self) -> Result<(), SharedError> {
        validate_config_name(&self.name)?;
        self.palette.validate()?;
        self.special.validate()
    }
}
