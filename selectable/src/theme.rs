//! Colours used when rendering a dropdown.

use serde::{Deserialize, Serialize};

use crate::types::Rgb;

/// Concrete colours for every visual state of the widget.
///
/// Every field is optional in config files; missing ones keep their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub foreground: Rgb,
    pub muted: Rgb,
    pub background: Rgb,
    /// Background of the open option list.
    pub surface: Rgb,
    pub border: Rgb,
    pub focus_border: Rgb,
    pub chip_fg: Rgb,
    pub chip_bg: Rgb,
    pub selected_fg: Rgb,
    pub selected_bg: Rgb,
    pub highlight_fg: Rgb,
    pub highlight_bg: Rgb,
}

impl Theme {
    pub const fn new() -> Self {
        Self {
            foreground: Rgb::new(229, 231, 235),
            muted: Rgb::new(156, 163, 175),
            background: Rgb::new(17, 24, 39),
            surface: Rgb::new(31, 41, 55),
            border: Rgb::new(156, 163, 175),
            focus_border: Rgb::new(103, 232, 249),
            chip_fg: Rgb::new(229, 231, 235),
            chip_bg: Rgb::new(55, 65, 81),
            selected_fg: Rgb::new(17, 24, 39),
            selected_bg: Rgb::new(102, 201, 255),
            highlight_fg: Rgb::new(255, 255, 255),
            highlight_bg: Rgb::new(0, 170, 255),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}
