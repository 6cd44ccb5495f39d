#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// On/off state of a light entity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerState {
    On,
    #[default]
    Off,
}

impl PowerState {
    pub fn is_on(self) -> bool {
        self == Self::On
    }
}

/// Read-only projection of one light's state, as pushed by the host.
///
/// `brightness` is the raw 0-255 value and is meaningful only while the
/// light is on.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LightSnapshot {
    #[serde(default)]
    pub power: PowerState,
    #[serde(default)]
    pub brightness: u8,
    #[serde(default)]
    pub friendly_name: Option<String>,
}

/// The host's entity state map, replaced wholesale on every push.
///
/// Provided to components as `RwSignal<EntityStates>` context; the panel
/// only ever reads its configured entity.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EntityStates {
    entities: HashMap<String, LightSnapshot>,
}

impl EntityStates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole map with a fresh snapshot. There are no partial
    /// updates; the host owns the data and pushes it in full.
    pub fn replace(&mut self, entities: HashMap<String, LightSnapshot>) {
        self.entities = entities;
    }

    /// Inserts or overwrites a single entity. Convenience for hosts that
    /// track lights individually.
    pub fn set(&mut self, entity_id: impl Into<String>, snapshot: LightSnapshot) {
        self.entities.insert(entity_id.into(), snapshot);
    }

    pub fn get(&self, entity_id: &str) -> Option<&LightSnapshot> {
        self.entities.get(entity_id)
    }
}
