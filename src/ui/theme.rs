use std::fs;

use ratatui::style::Color;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};

#[derive(Embed)]
#[folder = "assets/themes/"]
struct ThemeAssets;

/// Color scheme, built once at startup and shared by reference.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ThemeColors {
    pub bg: String,
    pub fg: String,
    pub text_dim: String,
    pub accent: String,
    pub border: String,
    pub border_focused: String,
    pub heading: String,
    pub header_fg: String,
    pub footer_bg: String,
    pub footer_fg: String,
    pub key_bg: String,
    pub key_fg: String,
    pub selected_title: String,
    pub selected_desc: String,
    pub filter_prompt: String,
}

impl Theme {
    pub fn load(name: &str) -> Option<Self> {
        if let Some(config_dir) = dirs::config_dir() {
            let user_theme_path = config_dir
                .join("leetfinder")
                .join("themes")
                .join(format!("{name}.toml"));
            if let Ok(content) = fs::read_to_string(&user_theme_path) {
                if let Ok(theme) = toml::from_str::<Theme>(&content) {
                    return Some(theme);
                }
            }
        }

        let filename = format!("{name}.toml");
        if let Some(file) = ThemeAssets::get(&filename) {
            if let Ok(content) = std::str::from_utf8(file.data.as_ref()) {
                if let Ok(theme) = toml::from_str::<Theme>(content) {
                    return Some(theme);
                }
            }
        }

        None
    }

    pub fn available_themes() -> Vec<String> {
        ThemeAssets::iter()
            .filter_map(|f| f.strip_suffix(".toml").map(|n| n.to_string()))
            .collect()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::load("default").unwrap_or_else(|| Self {
            name: "default".to_string(),
            colors: ThemeColors::default(),
        })
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            bg: "reset".to_string(),
            fg: "252".to_string(),
            text_dim: "243".to_string(),
            accent: "#AD58B4".to_string(),
            border: "240".to_string(),
            border_focused: "#AD58B4".to_string(),
            heading: "252".to_string(),
            header_fg: "252".to_string(),
            footer_bg: "236".to_string(),
            footer_fg: "250".to_string(),
            key_bg: "240".to_string(),
            key_fg: "15".to_string(),
            selected_title: "#EE6FF8".to_string(),
            selected_desc: "#AD58B4".to_string(),
            filter_prompt: "#ECFD65".to_string(),
        }
    }
}

impl ThemeColors {
    /// Accepts `#rrggbb`, an ANSI-256 index such as `240`, or `reset`.
    pub fn parse_color(value: &str) -> Color {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("reset") {
            return Color::Reset;
        }
        if let Ok(index) = value.parse::<u8>() {
            return Color::Indexed(index);
        }
        let hex = value.trim_start_matches('#');
        if hex.len() == 6 {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return Color::Rgb(r, g, b);
            }
        }
        Color::White
    }

    pub fn bg(&self) -> Color { Self::parse_color(&self.bg) }
    pub fn fg(&self) -> Color { Self::parse_color(&self.fg) }
    pub fn text_dim(&self) -> Color { Self::parse_color(&self.text_dim) }
    pub fn accent(&self) -> Color { Self::parse_color(&self.accent) }
    pub fn border(&self) -> Color { Self::parse_color(&self.border) }
    pub fn border_focused(&self) -> Color { Self::parse_color(&self.border_focused) }
    pub fn heading(&self) -> Color { Self::parse_color(&self.heading) }
    pub fn header_fg(&self) -> Color { Self::parse_color(&self.header_fg) }
    pub fn footer_bg(&self) -> Color { Self::parse_color(&self.footer_bg) }
    pub fn footer_fg(&self) -> Color { Self::parse_color(&self.footer_fg) }
    pub fn key_bg(&self) -> Color { Self::parse_color(&self.key_bg) }
    pub fn key_fg(&self) -> Color { Self::parse_color(&self.key_fg) }
    pub fn selected_title(&self) -> Color { Self::parse_color(&self.selected_title) }
    pub fn selected_desc(&self) -> Color { Self::parse_color(&self.selected_desc) }
    pub fn filter_prompt(&self) -> Color { Self::parse_color(&self.filter_prompt) }
}
