#[cfg(test)]
#[path = "commands_test.rs"]
mod commands_test;

use std::fmt;
use std::sync::Arc;

use serde_json::json;

pub const LIGHT_DOMAIN: &str = "light";
pub const SERVICE_TURN_ON: &str = "turn_on";
pub const SERVICE_TURN_OFF: &str = "turn_off";

/// A single service invocation handed to the host dispatcher.
///
/// This widget only ever builds calls in the `light` domain with the
/// services and payload fields produced by [`LightCommand::into_call`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceCall {
    pub domain: &'static str,
    pub service: &'static str,
    pub data: serde_json::Value,
}

/// The five commands this panel can issue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LightCommand {
    TurnOn,
    TurnOff,
    SetBrightness(u8),
    SetColor([u8; 3]),
    SetEffect(String),
}

impl LightCommand {
    /// Power-toggle command for the given current state.
    pub fn toggle(is_on: bool) -> Self {
        if is_on { Self::TurnOff } else { Self::TurnOn }
    }

    /// Service name this command maps to. Everything except an explicit
    /// turn-off goes through `turn_on`, which is also how brightness,
    /// color, and effect are set.
    pub fn service(&self) -> &'static str {
        match self {
            Self::TurnOff => SERVICE_TURN_OFF,
            _ => SERVICE_TURN_ON,
        }
    }

    /// Builds the service call targeting `entity_id`.
    pub fn into_call(self, entity_id: &str) -> ServiceCall {
        let service = self.service();
        let data = match self {
            Self::TurnOn | Self::TurnOff => json!({ "entity_id": entity_id }),
            Self::SetBrightness(level) => json!({
                "entity_id": entity_id,
                "brightness": level,
            }),
            Self::SetColor(rgb) => json!({
                "entity_id": entity_id,
                "rgb_color": rgb,
            }),
            Self::SetEffect(effect) => json!({
                "entity_id": entity_id,
                "effect": effect,
            }),
        };
        ServiceCall {
            domain: LIGHT_DOMAIN,
            service,
            data,
        }
    }
}

/// Host-side command sink. Calls are fire-and-forget: the widget never
/// inspects a result, it just waits for the next state push.
pub trait Dispatcher {
    fn dispatch(&self, call: ServiceCall);
}

/// Cloneable handle around the host dispatcher, provided to the panel via
/// Leptos context.
#[derive(Clone)]
pub struct DispatchHandle(Arc<dyn Dispatcher + Send + Sync>);

impl DispatchHandle {
    pub fn new(dispatcher: impl Dispatcher + Send + Sync + 'static) -> Self {
        Self(Arc::new(dispatcher))
    }

    pub fn dispatch(&self, call: ServiceCall) {
        self.0.dispatch(call);
    }
}

impl fmt::Debug for DispatchHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DispatchHandle")
    }
}
