use std::collections::HashMap;

use ratatui::style::Color;

use crate::model::{UiConfig, strip_marker};

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub red: Color,
    pub selection_bg: Color,
    /// Background of the selected tag's chip
    pub chip_selected_bg: Color,
    pub border: Color,
    /// Per-tag colors, keyed without the `#`
    pub tag_colors: HashMap<String, Color>,
}

impl Default for Theme {
    fn default() -> Self {
        let mut tag_colors = HashMap::new();
        tag_colors.insert("todo".into(), Color::Rgb(0xFF, 0xD7, 0x00));
        tag_colors.insert("idea".into(), Color::Rgb(0x44, 0xDD, 0xFF));
        tag_colors.insert("project".into(), Color::Rgb(0x44, 0x88, 0xFF));
        tag_colors.insert("important".into(), Color::Rgb(0xFF, 0x44, 0x44));

        Theme {
            background: Color::Rgb(0x0C, 0x00, 0x1B),
            text: Color::Rgb(0xB0, 0xAA, 0xFF),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0xFB, 0x41, 0x96),
            dim: Color::Rgb(0x7D, 0x78, 0xBF),
            red: Color::Rgb(0xFF, 0x44, 0x44),
            selection_bg: Color::Rgb(0x3D, 0x14, 0x38),
            chip_selected_bg: Color::Rgb(0x5A, 0x1E, 0x52),
            border: Color::Rgb(0x3A, 0x33, 0x66),
            tag_colors,
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from the `[ui]` config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                tracing::warn!(key, value, "ignoring invalid color");
                continue;
            };
            match key.as_str() {
                "background" => theme.background = color,
                "text" => theme.text = color,
                "text_bright" => theme.text_bright = color,
                "highlight" => theme.highlight = color,
                "dim" => theme.dim = color,
                "red" => theme.red = color,
                "selection_bg" => theme.selection_bg = color,
                "chip_selected_bg" => theme.chip_selected_bg = color,
                "border" => theme.border = color,
                _ => tracing::warn!(key, "unknown ui color"),
            }
        }

        for (tag, value) in &ui.tag_colors {
            if let Some(color) = parse_hex_color(value) {
                theme
                    .tag_colors
                    .insert(strip_marker(tag).to_string(), color);
            }
        }

        theme
    }

    /// Get the color for a tag (with or without `#`), falling back to text color
    pub fn tag_color(&self, tag: &str) -> Color {
        self.tag_colors
            .get(strip_marker(tag))
            .copied()
            .unwrap_or(self.text)
    }
}
