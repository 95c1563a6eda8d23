//! Host command handlers.
//!
//! Each handler locks the shared [`ViewerStateManager`], moves the cursor and
//! returns the first image that loads from there. Unreadable files are
//! skipped in the direction of travel.

use log::Level;

use super::image::load_source;
use super::state::ViewerState;
use super::ViewerStateManager;
use crate::bridge::{Command, Moves};
use crate::errors::ViewerError;
use crate::logging::{log_event, log_failure};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

impl Direction {
    fn step(self, state: &mut ViewerState) -> Result<(), ViewerError> {
        match self {
            Self::Forward => state.next_cursor(),
            Self::Backward => state.prev_cursor(),
        }
    }
}

fn seek_image(
    state: &mut ViewerState,
    steps: u64,
    direction: Direction,
) -> Result<String, ViewerError> {
    for _ in 0..steps {
        direction.step(state)?;
    }

    loop {
        match state.current().and_then(|path| load_source(&path).map(|src| (path, src))) {
            Ok((path, src)) => {
                log_event(
                    Level::Debug,
                    None,
                    "peek.host",
                    "current image",
                    Some(serde_json::json!({ "path": path.display().to_string() })),
                );
                return Ok(src);
            }
            Err(err) => log_failure(Level::Info, "peek.host", "skipping file", &err),
        }
        direction.step(state)?;
    }
}

fn seek_offset(state: &mut ViewerState, offset: i64) -> Result<String, ViewerError> {
    let direction = if offset < 0 {
        Direction::Backward
    } else {
        Direction::Forward
    };
    seek_image(state, offset.unsigned_abs(), direction)
}

/// Move by a signed offset: forward for `moves >= 0`, backward otherwise.
pub fn move_image_offset(
    manager: &ViewerStateManager,
    moves: Moves,
) -> Result<String, ViewerError> {
    let mut state = manager.lock()?;
    seek_offset(&mut state, i64::from(moves.0))
}

/// Step forward `moves` images. A negative count steps backward.
pub fn next_image(manager: &ViewerStateManager, moves: Moves) -> Result<String, ViewerError> {
    move_image_offset(manager, moves)
}

/// Step backward `moves` images. A negative count steps forward.
pub fn prev_image(manager: &ViewerStateManager, moves: Moves) -> Result<String, ViewerError> {
    let mut state = manager.lock()?;
    seek_offset(&mut state, -i64::from(moves.0))
}

/// Change to the next directory holding images and return its first one.
pub fn next_directory(manager: &ViewerStateManager) -> Result<String, ViewerError> {
    let mut state = manager.lock()?;
    state.next_directory()?;
    seek_image(&mut state, 0, Direction::Forward)
}

/// Change to the previous directory holding images and return its last one.
pub fn prev_directory(manager: &ViewerStateManager) -> Result<String, ViewerError> {
    let mut state = manager.lock()?;
    state.prev_directory()?;
    seek_image(&mut state, 0, Direction::Backward)
}

/// Route a parsed command to its handler.
pub fn dispatch(
    manager: &ViewerStateManager,
    command: Command,
    moves: Option<Moves>,
) -> Result<String, ViewerError> {
    let require = |moves: Option<Moves>| {
        moves.ok_or_else(|| ViewerError::InvalidArguments {
            command: command.name().to_string(),
            reason: "missing `moves`".to_string(),
        })
    };
    match command {
        Command::MoveImageOffset => move_image_offset(manager, require(moves)?),
        Command::NextImage => next_image(manager, require(moves)?),
        Command::PrevImage => prev_image(manager, require(moves)?),
        Command::NextDirectory => next_directory(manager),
        Command::PrevDirectory => prev_directory(manager),
    }
}
