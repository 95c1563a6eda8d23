//! IPC surface the webview invokes.
//!
//! Commands are thin wrappers: decode the payload, run the core handler and
//! return its result with errors flattened to strings for the frontend.

use std::collections::BTreeMap;

use peek_core::config::ViewerConfig;
use peek_core::host::{commands, MovesInput, ViewerStateManager};
use peek_core::Moves;
use tauri::State;

fn decode(moves: MovesInput) -> Result<Moves, String> {
    Moves::try_from(moves).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn move_image_offset(
    state: State<ViewerStateManager>,
    moves: MovesInput,
) -> Result<String, String> {
    commands::move_image_offset(&state, decode(moves)?).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn next_image(state: State<ViewerStateManager>, moves: MovesInput) -> Result<String, String> {
    commands::next_image(&state, decode(moves)?).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn prev_image(state: State<ViewerStateManager>, moves: MovesInput) -> Result<String, String> {
    commands::prev_image(&state, decode(moves)?).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn next_directory(state: State<ViewerStateManager>) -> Result<String, String> {
    commands::next_directory(&state).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn prev_directory(state: State<ViewerStateManager>) -> Result<String, String> {
    commands::prev_directory(&state).map_err(|e| e.to_string())
}

/// Key bindings from the user's config, for the webview to install.
#[tauri::command]
pub fn get_keymap(config: State<ViewerConfig>) -> BTreeMap<String, String> {
    config.keymap.clone()
}
