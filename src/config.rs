#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A preset color button: a label plus the RGB triple sent to the light.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPreset {
    pub name: String,
    pub rgb: [u8; 3],
}

/// A preset effect button: a label plus the effect identifier the light
/// firmware understands.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectPreset {
    pub name: String,
    pub effect: String,
}

/// Panel configuration, supplied once by the host at setup and immutable
/// for the widget's lifetime.
///
/// Every field except `entity` is optional and falls back to the defaults
/// listed on each field. Unrecognized fields in the host's configuration
/// object are ignored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Entity id of the controlled light. Required, non-empty.
    #[serde(default)]
    pub entity: String,
    /// Color buttons, in display order. Defaults to [`default_colors`].
    #[serde(default = "default_colors")]
    pub colors: Vec<ColorPreset>,
    /// Effect buttons, in display order. Defaults to [`default_effects`].
    #[serde(default = "default_effects")]
    pub effects: Vec<EffectPreset>,
    /// Whether the brightness slider section is rendered at all.
    #[serde(default = "default_true")]
    pub show_brightness: bool,
    /// Whether the effects section is rendered at all.
    #[serde(default = "default_true")]
    pub show_effects: bool,
    /// Column count of the colors grid. Defaults to 4, minimum 1.
    #[serde(default = "default_columns")]
    pub columns: u8,
    /// Optional header shown above the panel.
    #[serde(default)]
    pub title: Option<String>,
}

/// Configuration rejected at setup time. Fatal: the host must surface it
/// and refuse to mount the panel.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("you need to define an entity")]
    MissingEntity,
    #[error("invalid light panel configuration: {0}")]
    Invalid(#[from] serde_json::Error),
}

impl PanelConfig {
    /// Parses and validates a raw configuration object from the host.
    ///
    /// Only a missing or empty `entity` is a hard failure; everything else
    /// is handled permissively (unknown fields ignored, `columns: 0`
    /// clamped to 1).
    pub fn parse(raw: serde_json::Value) -> Result<Self, ConfigError> {
        let mut config: Self = serde_json::from_value(raw)?;
        if config.entity.is_empty() {
            return Err(ConfigError::MissingEntity);
        }
        config.columns = config.columns.max(1);
        Ok(config)
    }
}

fn default_true() -> bool {
    true
}

fn default_columns() -> u8 {
    4
}

/// Default palette matching the buttons on typical cheap LED remote
/// controls.
pub fn default_colors() -> Vec<ColorPreset> {
    [
        ("Red", [255, 0, 0]),
        ("Green", [0, 255, 0]),
        ("Blue", [0, 0, 255]),
        ("White", [255, 255, 255]),
        ("Orange", [255, 165, 0]),
        ("Cyan", [0, 255, 255]),
        ("Purple", [128, 0, 128]),
        ("Yellow", [255, 255, 0]),
        ("Pink", [255, 192, 203]),
        ("Lime", [50, 205, 50]),
        ("Magenta", [255, 0, 255]),
        ("Warm White", [255, 230, 180]),
    ]
    .into_iter()
    .map(|(name, rgb)| ColorPreset {
        name: name.to_owned(),
        rgb,
    })
    .collect()
}

/// Default flash modes exposed by most RGB strip controllers.
pub fn default_effects() -> Vec<EffectPreset> {
    ["Flash", "Strobe", "Fade", "Smooth"]
        .into_iter()
        .map(|name| EffectPreset {
            name: name.to_owned(),
            effect: name.to_lowercase(),
        })
        .collect()
}
