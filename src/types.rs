use napi_derive::napi;
use serde::{Deserialize, Serialize};

/// RGB channels decoded from a hex string, as handed back to the host.
/// Values are always in 0-255.
#[napi(object)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RgbChannels {
    pub r: u32,
    pub g: u32,
    pub b: u32,
}

/// Mirror of the display state the widget host keeps synced across
/// reopenings. The host owns its lifecycle and persistence; the core only
/// reads the two colors and writes the ratio mirror.
#[napi(object)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayState {
    /// Committed foreground hex, always a parseable 6-digit value.
    pub foreground: String,
    /// Committed background hex, always a parseable 6-digit value.
    pub background: String,
    pub foreground_label: Option<String>,
    pub background_label: Option<String>,
    /// Last computed contrast ratio, 2 decimals.
    pub ratio: f64,
    pub dark_mode: bool,
    pub show_labels: bool,
    pub horizontal_layout: bool,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            foreground: "#000000".to_string(),
            background: "#ffffff".to_string(),
            foreground_label: None,
            background_label: None,
            ratio: 21.0,
            dark_mode: false,
            show_labels: false,
            horizontal_layout: false,
        }
    }
}
