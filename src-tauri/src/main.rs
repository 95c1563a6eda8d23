#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use peek_core::config::ViewerConfig;
use peek_core::host::{LocalInvoker, ViewerState, ViewerStateManager};
use peek_core::keymap::KeyAction;
use peek_core::CommandBridge;

mod api;

#[derive(Parser)]
#[command(name = "peek", about = "Keyboard-driven image viewer")]
struct Cli {
    /// Image to open; its directory becomes the starting point.
    filename: PathBuf,
    /// Replay these keys without opening a window, printing the image path
    /// after each one.
    #[arg(long, value_delimiter = ',')]
    keys: Vec<String>,
}

fn open_viewer(filename: &Path, config: &ViewerConfig) -> Result<ViewerStateManager> {
    let mut state = ViewerState::new(filename, config.extension_set());
    if let Err(err) = state.reload_files() {
        log::error!(target: "peek.app", "[{}] {}: {}", err.code(), err, err.explain());
        return Err(err).with_context(|| format!("failed to open {}", filename.display()));
    }
    log::info!(
        target: "peek.app",
        "opened {} ({} images in directory)",
        filename.display(),
        state.paths().len()
    );
    Ok(ViewerStateManager::new(state))
}

fn replay_keys(manager: ViewerStateManager, config: &ViewerConfig, keys: &[String]) -> Result<()> {
    let keymap = config.keymap();
    let bridge = CommandBridge::new(LocalInvoker::new(Arc::new(manager)));
    tauri::async_runtime::block_on(async {
        KeyAction::CurrentImage
            .perform(&bridge)
            .await
            .map_err(anyhow::Error::msg)?;
        for key in keys {
            keymap
                .handle_key(key, &bridge)
                .await
                .map_err(anyhow::Error::msg)?;
            let path = bridge.invoker().manager().current_path()?;
            println!("{key}\t{}", path.display());
        }
        Ok::<(), anyhow::Error>(())
    })
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = ViewerConfig::load()?;
    let manager = open_viewer(&cli.filename, &config)?;

    if !cli.keys.is_empty() {
        return replay_keys(manager, &config, &cli.keys);
    }

    tauri::Builder::default()
        .manage(manager)
        .manage(config)
        .invoke_handler(tauri::generate_handler![
            api::move_image_offset,
            api::next_image,
            api::prev_image,
            api::next_directory,
            api::prev_directory,
            api::get_keymap,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn open_viewer_lands_on_requested_image() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["a.png", "b.png"] {
            fs::write(dir.path().join(name), name.as_bytes()).unwrap();
        }
        let manager = open_viewer(&dir.path().join("b.png"), &ViewerConfig::default()).unwrap();
        assert!(manager.current_path().unwrap().ends_with("b.png"));
    }

    #[test]
    fn open_viewer_reports_unreadable_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone/a.png");
        let err = open_viewer(&missing, &ViewerConfig::default()).unwrap_err();
        assert!(err.to_string().starts_with("failed to open"));
    }
}
