use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_problems_path")]
    pub problems_path: String,
    #[serde(default = "default_code_language")]
    pub code_language: String,
    #[serde(default = "default_syntax_theme")]
    pub syntax_theme: String,
    #[serde(default = "default_mouse_wheel_lines")]
    pub mouse_wheel_lines: u16,
    #[serde(default)]
    pub log_file: Option<String>,
}

fn default_theme() -> String {
    "default".to_string()
}
fn default_problems_path() -> String {
    "problems.json".to_string()
}
fn default_code_language() -> String {
    "python".to_string()
}
fn default_syntax_theme() -> String {
    "base16-ocean.dark".to_string()
}
fn default_mouse_wheel_lines() -> u16 {
    3
}

const MAX_MOUSE_WHEEL_LINES: u16 = 20;

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            problems_path: default_problems_path(),
            code_language: default_code_language(),
            syntax_theme: default_syntax_theme(),
            mouse_wheel_lines: default_mouse_wheel_lines(),
            log_file: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let mut config: Config = toml::from_str(&content)?;
            config.normalize();
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("leetfinder")
            .join("config.toml")
    }

    /// Repair values a hand-edited config file can get wrong.
    pub fn normalize(&mut self) {
        let language = self.code_language.trim().to_lowercase();
        self.code_language = if language.is_empty() {
            default_code_language()
        } else {
            language
        };
        self.mouse_wheel_lines = self.mouse_wheel_lines.clamp(1, MAX_MOUSE_WHEEL_LINES);
        if self.problems_path.trim().is_empty() {
            self.problems_path = default_problems_path();
        }
    }
}
