#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use crate::commands::{LightCommand, ServiceCall};
use crate::config::{ColorPreset, EffectPreset, PanelConfig};
use crate::state::EntityStates;

/// What the panel should display for the current configuration and state
/// push. Pure data; recomputed whenever the host pushes new state.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderModel {
    /// The configured entity was absent from the snapshot. The view for
    /// this is a placeholder naming the entity, with no controls.
    Missing { entity_id: String },
    Panel(PanelModel),
}

impl RenderModel {
    /// Derives the render model. This is the only place configuration and
    /// device state meet; no other state survives across renders.
    pub fn compute(config: &PanelConfig, states: &EntityStates) -> Self {
        let Some(snapshot) = states.get(&config.entity) else {
            return Self::Missing {
                entity_id: config.entity.clone(),
            };
        };
        Self::Panel(PanelModel {
            entity_id: config.entity.clone(),
            title: config.title.clone(),
            display_name: snapshot
                .friendly_name
                .clone()
                .unwrap_or_else(|| config.entity.clone()),
            is_on: snapshot.power.is_on(),
            brightness: snapshot.brightness,
            brightness_percent: brightness_percent(snapshot.brightness),
            show_brightness: config.show_brightness,
            columns: config.columns,
            colors: config.colors.clone(),
            // An empty list hides the effects section, so the flag just
            // empties it.
            effects: if config.show_effects {
                config.effects.clone()
            } else {
                Vec::new()
            },
        })
    }
}

/// View data for a present entity.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelModel {
    pub entity_id: String,
    pub title: Option<String>,
    pub display_name: String,
    pub is_on: bool,
    pub brightness: u8,
    pub brightness_percent: u8,
    pub show_brightness: bool,
    pub columns: u8,
    pub colors: Vec<ColorPreset>,
    pub effects: Vec<EffectPreset>,
}

/// A user interaction with one of the panel's controls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Interaction {
    TogglePower,
    SetBrightness(u8),
    SetColor([u8; 3]),
    SetEffect(String),
}

impl PanelModel {
    /// CSS grid declaration for the colors grid.
    pub fn grid_template(&self) -> String {
        format!("repeat({}, 1fr)", self.columns)
    }

    /// Maps an interaction to the service call it should issue, if any.
    ///
    /// This is the single gate between input and commands: while the light
    /// is off, only the power toggle goes through; brightness, color, and
    /// effect interactions are suppressed rather than merely dimmed.
    pub fn interact(&self, interaction: Interaction) -> Option<ServiceCall> {
        let command = match interaction {
            Interaction::TogglePower => LightCommand::toggle(self.is_on),
            Interaction::SetBrightness(level) if self.is_on => LightCommand::SetBrightness(level),
            Interaction::SetColor(rgb) if self.is_on => LightCommand::SetColor(rgb),
            Interaction::SetEffect(effect) if self.is_on => LightCommand::SetEffect(effect),
            _ => return None,
        };
        Some(command.into_call(&self.entity_id))
    }
}

/// Raw 0-255 brightness as a rounded percentage.
pub fn brightness_percent(raw: u8) -> u8 {
    let percent = (u32::from(raw) * 100 + 127) / 255;
    u8::try_from(percent).unwrap_or(100)
}
