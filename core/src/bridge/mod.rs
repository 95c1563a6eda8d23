//! Command bridge between the viewer frontend and the host process.
//!
//! Every operation forwards to an injected [`Invoke`] capability with a fixed
//! command name and, for the moving commands, a `{ "moves": .. }` payload.
//! The bridge keeps no state, never retries and hands the invoker's result or
//! error back untouched.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::errors::ViewerError;

/// Navigation offset carried by the moving commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Moves(pub i32);

impl From<i32> for Moves {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

/// Host commands reachable through the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    MoveImageOffset,
    NextImage,
    PrevImage,
    NextDirectory,
    PrevDirectory,
}

impl Command {
    pub const ALL: [Command; 5] = [
        Command::MoveImageOffset,
        Command::NextImage,
        Command::PrevImage,
        Command::NextDirectory,
        Command::PrevDirectory,
    ];

    /// Wire name registered by the host.
    pub fn name(self) -> &'static str {
        match self {
            Self::MoveImageOffset => "move_image_offset",
            Self::NextImage => "next_image",
            Self::PrevImage => "prev_image",
            Self::NextDirectory => "next_directory",
            Self::PrevDirectory => "prev_directory",
        }
    }

    /// Whether the command expects a `{ "moves": .. }` payload.
    pub fn takes_moves(self) -> bool {
        matches!(
            self,
            Self::MoveImageOffset | Self::NextImage | Self::PrevImage
        )
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Command {
    type Err = ViewerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|command| command.name() == s)
            .ok_or_else(|| ViewerError::UnknownCommand(s.to_string()))
    }
}

/// Host-supplied primitive that sends a named command across the process
/// boundary and resolves to the handler's result.
#[async_trait]
pub trait Invoke: Send + Sync {
    type Error: Send;

    async fn invoke(&self, command: &str, args: Option<Value>) -> Result<Value, Self::Error>;
}

#[async_trait]
impl<T> Invoke for Arc<T>
where
    T: Invoke + ?Sized,
{
    type Error = T::Error;

    async fn invoke(&self, command: &str, args: Option<Value>) -> Result<Value, Self::Error> {
        (**self).invoke(command, args).await
    }
}

/// Thin forwarding layer over an [`Invoke`] implementation.
#[derive(Clone)]
pub struct CommandBridge<I> {
    invoker: I,
}

impl<I: Invoke> CommandBridge<I> {
    pub fn new(invoker: I) -> Self {
        Self { invoker }
    }

    pub fn invoker(&self) -> &I {
        &self.invoker
    }

    pub async fn move_image_offset(&self, moves: impl Into<Moves>) -> Result<Value, I::Error> {
        self.send(Command::MoveImageOffset, Some(moves_payload(moves.into())))
            .await
    }

    pub async fn next_image(&self, moves: impl Into<Moves>) -> Result<Value, I::Error> {
        self.send(Command::NextImage, Some(moves_payload(moves.into())))
            .await
    }

    pub async fn prev_image(&self, moves: impl Into<Moves>) -> Result<Value, I::Error> {
        self.send(Command::PrevImage, Some(moves_payload(moves.into())))
            .await
    }

    pub async fn next_directory(&self) -> Result<Value, I::Error> {
        self.send(Command::NextDirectory, None).await
    }

    pub async fn prev_directory(&self) -> Result<Value, I::Error> {
        self.send(Command::PrevDirectory, None).await
    }

    async fn send(&self, command: Command, args: Option<Value>) -> Result<Value, I::Error> {
        self.invoker.invoke(command.name(), args).await
    }
}

fn moves_payload(moves: Moves) -> Value {
    json!({ "moves": moves })
}
