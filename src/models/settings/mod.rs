// Settings module
// Viewer configuration persisted as TOML

use serde::{Deserialize, Serialize};

pub const SUPPORTED_THEMES: [&str; 3] = ["light", "dark", "system"];

/// URI under which the viewer registers the placeholder image compiled into the binary
pub const BUNDLED_PLACEHOLDER_URI: &str = "bytes://placeholder-show.png";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Display locale code; content strings are already resolved to it
    pub locale: String,
    /// "light", "dark" or "system"
    pub theme: String,
    /// Allow-list of day identifiers; all days when absent
    pub active_days: Option<Vec<String>>,
    /// Day selected on startup; first active day when absent or unknown
    pub default_day: Option<String>,
    /// JSON content document; bundled schedule when absent
    pub schedule_path: Option<String>,
    /// Image used for overlay-show slides without their own image
    pub placeholder_image: String,
    /// Base URL of the full program page
    pub program_url: String,
    /// Height of one 30-minute slot in points
    pub slot_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            theme: "system".to_string(),
            active_days: None,
            default_day: None,
            schedule_path: None,
            placeholder_image: BUNDLED_PLACEHOLDER_URI.to_string(),
            program_url: "https://example.org/program".to_string(),
            slot_height: 48.0,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        if self.locale.trim().is_empty() {
            return Err("Locale cannot be empty".to_string());
        }

        if !SUPPORTED_THEMES.contains(&self.theme.as_str()) {
            return Err(format!(
                "Theme must be one of {}",
                SUPPORTED_THEMES.join(", ")
            ));
        }

        if !(self.slot_height.is_finite() && self.slot_height > 0.0) {
            return Err("Slot height must be greater than 0".to_string());
        }

        if self.program_url.trim().is_empty() {
            return Err("Program URL cannot be empty".to_string());
        }

        Ok(())
    }
}
