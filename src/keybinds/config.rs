//! Configuration for keybinds.

use super::actions::NavAction;
use super::keys::{key_to_string, normalize_key_name};
use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Keybind definition - can be single key, multiple keys, or disabled.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum KeybindDef {
    /// Single keybind
    Single(String),
    /// Multiple alternative keybinds for the same action
    Multiple(Vec<String>),
}

impl KeybindDef {
    fn keys(&self) -> Vec<String> {
        match self {
            Self::Single(key) => vec![key.clone()],
            Self::Multiple(keys) => keys.clone(),
        }
    }
}

/// Keybind mappings, keyed by action name (`next`, `previous`, `confirm`).
///
/// Actions missing from the map keep their default keys; mapping an action
/// to `"none"` disables it.
///
/// ```toml
/// [keybinds]
/// next = ["down", "ctrl-n"]
/// previous = ["up", "ctrl-p"]
/// confirm = "enter"
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct KeyBindings {
    bindings: HashMap<String, KeybindDef>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            bindings: default_keybinds(),
        }
    }
}

fn default_keybinds() -> HashMap<String, KeybindDef> {
    let mut keybinds = HashMap::new();

    keybinds.insert(
        NavAction::Confirm.name().to_string(),
        KeybindDef::Multiple(vec!["enter".to_string(), "tab".to_string()]),
    );
    keybinds.insert(
        NavAction::Next.name().to_string(),
        KeybindDef::Single("down".to_string()),
    );
    keybinds.insert(
        NavAction::Previous.name().to_string(),
        KeybindDef::Single("up".to_string()),
    );

    keybinds
}

impl KeyBindings {
    /// Bind `action` to `keys`, replacing its previous keys.
    #[must_use]
    pub fn with_binding(mut self, action: NavAction, keys: &[&str]) -> Self {
        let keys = keys.iter().map(|key| (*key).to_string()).collect();
        self.bindings
            .insert(action.name().to_string(), KeybindDef::Multiple(keys));
        self
    }

    /// Get the keybind(s) for an action.
    ///
    /// Falls back to the default keys when the action is not configured.
    #[must_use]
    pub fn get(&self, action: NavAction) -> Vec<String> {
        self.bindings
            .get(action.name())
            .map_or_else(
                || default_keybinds().get(action.name()).map(KeybindDef::keys).unwrap_or_default(),
                KeybindDef::keys,
            )
    }

    /// Check if a keybind is disabled for an action.
    #[must_use]
    pub fn is_disabled(&self, action: NavAction) -> bool {
        let keys = self.get(action);
        !keys.is_empty() && keys.iter().all(|key| key == "none")
    }

    /// Find the action bound to a key name.
    ///
    /// The name is normalized first, so `"ArrowDown"` and `"down"` are the
    /// same key.
    #[must_use]
    pub fn action_for(&self, key_name: &str) -> Option<NavAction> {
        let key_name = normalize_key_name(key_name);
        NavAction::ALL.into_iter().find(|action| {
            !self.is_disabled(*action)
                && self
                    .get(*action)
                    .iter()
                    .any(|bound| normalize_key_name(bound) == key_name)
        })
    }

    /// Find the action bound to a terminal key event.
    #[must_use]
    pub fn action_for_event(&self, key: &KeyEvent) -> Option<NavAction> {
        key_to_string(key).and_then(|name| self.action_for(&name))
    }

    /// Unknown action names present in the map.
    #[must_use]
    pub fn unknown_actions(&self) -> Vec<String> {
        let mut unknown: Vec<String> = self
            .bindings
            .keys()
            .filter(|name| !NavAction::ALL.iter().any(|action| action.name() == name.as_str()))
            .cloned()
            .collect();
        unknown.sort();
        unknown
    }
}
