//! Host side of the viewer: the command handlers the bridge talks to.
//!
//! - [`paths`] walks the directory tree in a stable, sorted order.
//! - [`state`] tracks the image list and cursor of the current directory.
//! - [`image`] turns image files into `data:` URIs the webview can show.
//! - [`commands`] implements the five host commands over shared state.
//! - [`invoker`] dispatches bridge calls to those commands in-process.

pub mod commands;
pub mod image;
pub mod invoker;
pub mod paths;
pub mod state;

use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use serde::Deserialize;

use crate::bridge::Moves;
use crate::errors::ViewerError;

pub use invoker::LocalInvoker;
pub use state::ViewerState;

/// Shared viewer state handed to every command handler.
pub struct ViewerStateManager(Mutex<ViewerState>);

impl ViewerStateManager {
    pub fn new(state: ViewerState) -> Self {
        Self(Mutex::new(state))
    }

    pub fn lock(&self) -> Result<MutexGuard<'_, ViewerState>, ViewerError> {
        self.0.lock().map_err(|_| ViewerError::StatePoisoned)
    }

    /// Path currently under the cursor.
    pub fn current_path(&self) -> Result<PathBuf, ViewerError> {
        self.lock()?.current()
    }
}

/// `moves` as it arrives over IPC: a number, or the numeric string older
/// frontends sent.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MovesInput {
    Number(i32),
    Text(String),
}

impl TryFrom<MovesInput> for Moves {
    type Error = ViewerError;

    fn try_from(input: MovesInput) -> Result<Self, Self::Error> {
        match input {
            MovesInput::Number(n) => Ok(Moves(n)),
            MovesInput::Text(text) => text
                .trim()
                .parse::<i32>()
                .map(Moves)
                .map_err(|err| ViewerError::InvalidMoves(format!("{text:?}: {err}"))),
        }
    }
}
