//! Keyboard bindings for the viewer.
//!
//! A [`Keymap`] resolves key names (as reported by `KeyboardEvent.key`) to
//! [`KeyAction`]s, and each action knows which bridge call it performs.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::bridge::{CommandBridge, Invoke};

pub const DEFAULT_KEYMAP: [(&str, &str); 4] = [
    ("ArrowRight", "NEXT_IMAGE"),
    ("ArrowLeft", "PREV_IMAGE"),
    ("ArrowDown", "NEXT_DIRECTORY"),
    ("ArrowUp", "PREV_DIRECTORY"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KeyAction {
    CurrentImage,
    NextImage,
    PrevImage,
    NextDirectory,
    PrevDirectory,
}

impl KeyAction {
    pub const ALL: [KeyAction; 5] = [
        KeyAction::CurrentImage,
        KeyAction::NextImage,
        KeyAction::PrevImage,
        KeyAction::NextDirectory,
        KeyAction::PrevDirectory,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::CurrentImage => "CURRENT_IMAGE",
            Self::NextImage => "NEXT_IMAGE",
            Self::PrevImage => "PREV_IMAGE",
            Self::NextDirectory => "NEXT_DIRECTORY",
            Self::PrevDirectory => "PREV_DIRECTORY",
        }
    }

    /// Run the action through the bridge. Resolves to the new image source,
    /// or `None` when the host answered with something other than a string.
    pub async fn perform<I: Invoke>(
        self,
        bridge: &CommandBridge<I>,
    ) -> Result<Option<String>, I::Error> {
        let reply = match self {
            Self::CurrentImage => bridge.next_image(0).await?,
            Self::NextImage => bridge.next_image(1).await?,
            Self::PrevImage => bridge.prev_image(1).await?,
            Self::NextDirectory => bridge.next_directory().await?,
            Self::PrevDirectory => bridge.prev_directory().await?,
        };
        Ok(match reply {
            Value::String(src) => Some(src),
            _ => None,
        })
    }
}

impl fmt::Display for KeyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeyAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| format!("unknown key action: {s}"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keymap {
    bindings: HashMap<String, KeyAction>,
}

impl Keymap {
    /// Build from `key -> action name` pairs. Unknown action names are
    /// dropped with a warning.
    pub fn from_bindings<I, K, A>(bindings: I) -> Self
    where
        I: IntoIterator<Item = (K, A)>,
        K: Into<String>,
        A: AsRef<str>,
    {
        let bindings = bindings
            .into_iter()
            .filter_map(|(key, action)| {
                let key = key.into();
                match action.as_ref().parse::<KeyAction>() {
                    Ok(action) => Some((key, action)),
                    Err(err) => {
                        log::warn!(target: "peek.keymap", "ignoring binding for {key:?}: {err}");
                        None
                    }
                }
            })
            .collect();
        Self { bindings }
    }

    pub fn get(&self, key: &str) -> Option<KeyAction> {
        self.bindings.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Perform the action bound to `key`. Unbound keys resolve to `Ok(None)`
    /// without touching the bridge.
    pub async fn handle_key<I: Invoke>(
        &self,
        key: &str,
        bridge: &CommandBridge<I>,
    ) -> Result<Option<String>, I::Error> {
        match self.get(key) {
            Some(action) => action.perform(bridge).await,
            None => Ok(None),
        }
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::from_bindings(DEFAULT_KEYMAP)
    }
}
