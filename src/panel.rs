//! The light panel component.
//!
//! Renders, top to bottom: an optional title, the power button with the
//! light's display name, the brightness slider, the preset color grid, and
//! the effect grid. All interaction goes through [`PanelModel::interact`],
//! so controls that are visually disabled while the light is off are also
//! functionally inert.

use leptos::prelude::*;

use crate::commands::DispatchHandle;
use crate::config::PanelConfig;
use crate::model::{Interaction, PanelModel, RenderModel};
use crate::state::EntityStates;

/// Relative height reported to the host layout system, in layout rows.
/// Constant; the panel does not measure itself.
pub const fn size_hint() -> u8 {
    5
}

/// RGB light control panel.
///
/// Expects two context values from the host: `RwSignal<EntityStates>` with
/// the pushed entity snapshots, and a [`DispatchHandle`] for issuing
/// commands. Configuration is parsed and validated by the host via
/// [`PanelConfig::parse`] before the panel is mounted, so an unconfigured
/// panel cannot exist.
#[component]
pub fn LightPanel(config: PanelConfig) -> impl IntoView {
    let states = expect_context::<RwSignal<EntityStates>>();
    let dispatcher = expect_context::<DispatchHandle>();

    let config = StoredValue::new(config);
    let model = Memo::new(move |_| {
        config.with_value(|config| RenderModel::compute(config, &states.get()))
    });

    view! {
        <div class="light-panel">
            {move || match model.get() {
                RenderModel::Missing { entity_id } => render_missing(&entity_id).into_any(),
                RenderModel::Panel(panel) => render_panel(panel, dispatcher.clone()).into_any(),
            }}
        </div>
    }
}

/// Placeholder for a snapshot that does not contain the configured entity.
/// Deliberately free of controls: no commands can be issued in this state.
fn render_missing(entity_id: &str) -> impl IntoView {
    view! {
        <div class="light-panel__missing">
            <p>{format!("Entity not found: {entity_id}")}</p>
        </div>
    }
}

fn render_panel(model: PanelModel, dispatcher: DispatchHandle) -> impl IntoView {
    let is_on = model.is_on;

    // Every handler funnels through interact(), which drops brightness,
    // color, and effect interactions while the light is off.
    let send = {
        let model = model.clone();
        move |interaction: Interaction| {
            if let Some(call) = model.interact(interaction) {
                dispatcher.dispatch(call);
            }
        }
    };

    let on_power = {
        let send = send.clone();
        move |_| send(Interaction::TogglePower)
    };

    let on_brightness = {
        let send = send.clone();
        move |ev| {
            if let Ok(level) = event_target_value(&ev).parse::<u8>() {
                send(Interaction::SetBrightness(level));
            } else {
                log::warn!("brightness slider produced a non-numeric value");
            }
        }
    };

    let header = model
        .title
        .clone()
        .map(|title| view! { <div class="light-panel__header">{title}</div> });

    let brightness_section = model.show_brightness.then(|| {
        view! {
            <div class="light-panel__section" class:light-panel__section--disabled=!is_on>
                <div class="light-panel__brightness-label">
                    <span>"Brightness"</span>
                    <span>{format!("{}%", model.brightness_percent)}</span>
                </div>
                <input
                    type="range"
                    class="light-panel__brightness-slider"
                    min="0"
                    max="255"
                    prop:value=model.brightness.to_string()
                    disabled=!is_on
                    on:input=on_brightness
                />
            </div>
        }
    });

    let color_buttons = model
        .colors
        .iter()
        .map(|preset| {
            let rgb = preset.rgb;
            let send = send.clone();
            view! {
                <button
                    class="light-panel__color-button"
                    style:background-color=format!("rgb({}, {}, {})", rgb[0], rgb[1], rgb[2])
                    title=preset.name.clone()
                    disabled=!is_on
                    on:click=move |_| send(Interaction::SetColor(rgb))
                >
                    {preset.name.clone()}
                </button>
            }
        })
        .collect_view();

    let effects_section = (!model.effects.is_empty()).then(|| {
        let buttons = model
            .effects
            .iter()
            .map(|preset| {
                let effect = preset.effect.clone();
                let send = send.clone();
                view! {
                    <button
                        class="light-panel__effect-button"
                        disabled=!is_on
                        on:click=move |_| send(Interaction::SetEffect(effect.clone()))
                    >
                        {preset.name.clone()}
                    </button>
                }
            })
            .collect_view();
        view! {
            <div class="light-panel__section" class:light-panel__section--disabled=!is_on>
                <div class="light-panel__section-title">"Effects"</div>
                <div class="light-panel__effects">{buttons}</div>
            </div>
        }
    });

    view! {
        {header}
        <div class="light-panel__content">
            <div class="light-panel__power">
                <button
                    class="light-panel__power-button"
                    class:light-panel__power-button--on=is_on
                    class:light-panel__power-button--off=!is_on
                    on:click=on_power
                >
                    {if is_on { "ON" } else { "OFF" }}
                </button>
                <span class="light-panel__name">{model.display_name.clone()}</span>
            </div>
            {brightness_section}
            <div class="light-panel__section" class:light-panel__section--disabled=!is_on>
                <div class="light-panel__section-title">"Colors"</div>
                <div
                    class="light-panel__colors"
                    style:grid-template-columns=model.grid_template()
                >
                    {color_buttons}
                </div>
            </div>
            {effects_section}
        </div>
    }
}
