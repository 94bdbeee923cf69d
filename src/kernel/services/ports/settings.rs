use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::kernel::state::{WidgetConfig, DEFAULT_BLUR_HIDE_DELAY};

fn default_blur_hide_delay_ms() -> u64 {
    DEFAULT_BLUR_HIDE_DELAY.as_millis() as u64
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Dataset file to load instead of the bundled addresses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset: Option<PathBuf>,
    #[serde(default = "default_blur_hide_delay_ms")]
    pub blur_hide_delay_ms: u64,
    #[serde(default)]
    pub keybindings: Vec<KeybindingRule>,
    #[serde(default)]
    pub theme: ThemeSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dataset: None,
            blur_hide_delay_ms: default_blur_hide_delay_ms(),
            keybindings: Vec::new(),
            theme: ThemeSettings::default(),
        }
    }
}

impl Settings {
    pub fn widget_config(&self) -> WidgetConfig {
        WidgetConfig {
            blur_hide_delay: Duration::from_millis(self.blur_hide_delay_ms),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeybindingRule {
    pub key: String,
    pub command: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inactive_border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muted_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incorrect_fg: Option<String>,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            focus_border: Some("light_blue".to_string()),
            inactive_border: Some("dark_gray".to_string()),
            accent_fg: Some("yellow".to_string()),
            header_fg: Some("white".to_string()),
            button_bg: Some("blue".to_string()),
            button_fg: Some("white".to_string()),
            selected_bg: Some("dark_gray".to_string()),
            selected_fg: Some("white".to_string()),
            muted_fg: Some("dark_gray".to_string()),
            correct_fg: Some("light_green".to_string()),
            incorrect_fg: Some("light_red".to_string()),
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
