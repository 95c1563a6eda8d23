use std::sync::Arc;

use async_trait::async_trait;
use log::Level;
use serde::Deserialize;
use serde_json::Value;
use tokio::task::spawn_blocking;

use super::{commands, MovesInput, ViewerStateManager};
use crate::bridge::{Command, Invoke, Moves};
use crate::errors::ViewerError;
use crate::logging::log_failure;

#[derive(Deserialize)]
struct MovesArgs {
    moves: MovesInput,
}

/// [`Invoke`] implementation that runs the host commands in-process.
///
/// Errors cross the boundary as strings, the same shape the desktop shell's
/// IPC layer produces, so callers cannot tell the two transports apart.
#[derive(Clone)]
pub struct LocalInvoker {
    manager: Arc<ViewerStateManager>,
}

impl LocalInvoker {
    pub fn new(manager: Arc<ViewerStateManager>) -> Self {
        Self { manager }
    }

    pub fn manager(&self) -> &Arc<ViewerStateManager> {
        &self.manager
    }

    async fn run(&self, command: &str, args: Option<Value>) -> Result<Value, ViewerError> {
        let command: Command = command.parse()?;
        let moves = if command.takes_moves() {
            Some(parse_moves(command, args)?)
        } else {
            None
        };

        let manager = self.manager.clone();
        let source = spawn_blocking(move || commands::dispatch(&manager, command, moves))
            .await
            .map_err(|err| ViewerError::Task(err.to_string()))??;
        Ok(Value::String(source))
    }
}

fn parse_moves(command: Command, args: Option<Value>) -> Result<Moves, ViewerError> {
    let invalid = |reason: String| ViewerError::InvalidArguments {
        command: command.name().to_string(),
        reason,
    };
    let args = args.ok_or_else(|| invalid("missing payload".to_string()))?;
    let parsed: MovesArgs =
        serde_json::from_value(args).map_err(|err| invalid(err.to_string()))?;
    Moves::try_from(parsed.moves)
}

#[async_trait]
impl Invoke for LocalInvoker {
    type Error = String;

    async fn invoke(&self, command: &str, args: Option<Value>) -> Result<Value, String> {
        self.run(command, args).await.map_err(|err| {
            log_failure(Level::Warn, "peek.host", "command failed", &err);
            err.to_string()
        })
    }
}
