use serde_json::json;

use super::*;
use crate::commands::{SERVICE_TURN_OFF, SERVICE_TURN_ON};
use crate::config::{EffectPreset, default_colors};
use crate::state::{LightSnapshot, PowerState};

fn config(entity: &str) -> PanelConfig {
    PanelConfig::parse(json!({ "entity": entity })).unwrap()
}

fn states_with(entity: &str, power: PowerState, brightness: u8) -> EntityStates {
    let mut states = EntityStates::new();
    states.set(
        entity,
        LightSnapshot {
            power,
            brightness,
            friendly_name: None,
        },
    );
    states
}

fn panel(power: PowerState, brightness: u8) -> PanelModel {
    let model = RenderModel::compute(
        &config("light.desk"),
        &states_with("light.desk", power, brightness),
    );
    match model {
        RenderModel::Panel(panel) => panel,
        RenderModel::Missing { .. } => panic!("entity should be present"),
    }
}

// =============================================================
// brightness_percent
// =============================================================

#[test]
fn brightness_percent_bounds() {
    assert_eq!(brightness_percent(0), 0);
    assert_eq!(brightness_percent(255), 100);
}

#[test]
fn brightness_percent_rounds() {
    // 128/255 = 50.2%, 64/255 = 25.1%, 191/255 = 74.9%
    assert_eq!(brightness_percent(128), 50);
    assert_eq!(brightness_percent(64), 25);
    assert_eq!(brightness_percent(191), 75);
}

// =============================================================
// RenderModel::compute
// =============================================================

#[test]
fn missing_entity_carries_the_entity_id() {
    let model = RenderModel::compute(&config("light.gone"), &EntityStates::new());
    assert_eq!(
        model,
        RenderModel::Missing {
            entity_id: "light.gone".to_owned(),
        }
    );
}

#[test]
fn display_name_prefers_the_friendly_name() {
    let mut states = EntityStates::new();
    states.set(
        "light.desk",
        LightSnapshot {
            power: PowerState::On,
            brightness: 0,
            friendly_name: Some("Desk Strip".to_owned()),
        },
    );
    let RenderModel::Panel(panel) = RenderModel::compute(&config("light.desk"), &states) else {
        panic!("entity should be present");
    };
    assert_eq!(panel.display_name, "Desk Strip");
}

#[test]
fn display_name_falls_back_to_the_entity_id() {
    let panel = panel(PowerState::On, 0);
    assert_eq!(panel.display_name, "light.desk");
}

#[test]
fn panel_mirrors_the_snapshot() {
    let panel = panel(PowerState::On, 255);
    assert!(panel.is_on);
    assert_eq!(panel.brightness, 255);
    assert_eq!(panel.brightness_percent, 100);
    assert_eq!(panel.colors.len(), default_colors().len());
    assert_eq!(panel.effects.len(), 4);
}

#[test]
fn show_effects_false_empties_the_effect_list() {
    let config = PanelConfig::parse(json!({
        "entity": "light.desk",
        "show_effects": false,
    }))
    .unwrap();
    let states = states_with("light.desk", PowerState::On, 0);
    let RenderModel::Panel(panel) = RenderModel::compute(&config, &states) else {
        panic!("entity should be present");
    };
    assert!(panel.effects.is_empty());
}

#[test]
fn configured_effect_count_is_preserved() {
    let config = PanelConfig::parse(json!({
        "entity": "light.desk",
        "effects": [
            { "name": "Pulse", "effect": "pulse" },
            { "name": "Rainbow", "effect": "rainbow" },
        ],
    }))
    .unwrap();
    let states = states_with("light.desk", PowerState::On, 0);
    let RenderModel::Panel(panel) = RenderModel::compute(&config, &states) else {
        panic!("entity should be present");
    };
    assert_eq!(
        panel.effects,
        vec![
            EffectPreset {
                name: "Pulse".to_owned(),
                effect: "pulse".to_owned(),
            },
            EffectPreset {
                name: "Rainbow".to_owned(),
                effect: "rainbow".to_owned(),
            },
        ]
    );
}

#[test]
fn grid_template_uses_configured_columns_regardless_of_color_count() {
    let config = PanelConfig::parse(json!({
        "entity": "light.desk",
        "columns": 3,
        "colors": [
            { "name": "A", "rgb": [1, 1, 1] },
            { "name": "B", "rgb": [2, 2, 2] },
            { "name": "C", "rgb": [3, 3, 3] },
            { "name": "D", "rgb": [4, 4, 4] },
            { "name": "E", "rgb": [5, 5, 5] },
            { "name": "F", "rgb": [6, 6, 6] },
        ],
    }))
    .unwrap();
    let states = states_with("light.desk", PowerState::On, 0);
    let RenderModel::Panel(panel) = RenderModel::compute(&config, &states) else {
        panic!("entity should be present");
    };
    assert_eq!(panel.colors.len(), 6);
    assert_eq!(panel.grid_template(), "repeat(3, 1fr)");
}

// =============================================================
// PanelModel::interact
// =============================================================

#[test]
fn toggle_while_on_turns_off() {
    let call = panel(PowerState::On, 0)
        .interact(Interaction::TogglePower)
        .unwrap();
    assert_eq!(call.service, SERVICE_TURN_OFF);
    assert_eq!(call.data, json!({ "entity_id": "light.desk" }));
}

#[test]
fn toggle_while_off_turns_on() {
    let call = panel(PowerState::Off, 0)
        .interact(Interaction::TogglePower)
        .unwrap();
    assert_eq!(call.service, SERVICE_TURN_ON);
    assert_eq!(call.data, json!({ "entity_id": "light.desk" }));
}

#[test]
fn brightness_drag_issues_turn_on_with_level() {
    let call = panel(PowerState::On, 0)
        .interact(Interaction::SetBrightness(128))
        .unwrap();
    assert_eq!(call.service, SERVICE_TURN_ON);
    assert_eq!(
        call.data,
        json!({ "entity_id": "light.desk", "brightness": 128 })
    );
}

#[test]
fn color_click_issues_turn_on_with_rgb() {
    let call = panel(PowerState::On, 0)
        .interact(Interaction::SetColor([0, 255, 0]))
        .unwrap();
    assert_eq!(call.service, SERVICE_TURN_ON);
    assert_eq!(
        call.data,
        json!({ "entity_id": "light.desk", "rgb_color": [0, 255, 0] })
    );
}

#[test]
fn effect_click_issues_turn_on_with_effect() {
    let call = panel(PowerState::On, 0)
        .interact(Interaction::SetEffect("smooth".to_owned()))
        .unwrap();
    assert_eq!(
        call.data,
        json!({ "entity_id": "light.desk", "effect": "smooth" })
    );
}

#[test]
fn controls_are_inert_while_off() {
    let panel = panel(PowerState::Off, 0);
    assert_eq!(panel.interact(Interaction::SetBrightness(128)), None);
    assert_eq!(panel.interact(Interaction::SetColor([255, 0, 0])), None);
    assert_eq!(
        panel.interact(Interaction::SetEffect("flash".to_owned())),
        None
    );
}
