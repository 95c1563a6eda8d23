//! Core library of the Peek image viewer.
//!
//! The crate is split along the IPC boundary of the desktop shell:
//! - [`bridge`] is the frontend side: five async calls forwarded to an
//!   injected invocation primitive.
//! - [`host`] is the backend side: directory walking, viewer state and the
//!   command handlers the bridge reaches.
//! - [`keymap`] binds keyboard keys to bridge calls.
//! - [`config`] loads the user's extensions and key bindings.
//! - [`errors`] keeps the error catalogue with stable codes.
//! - [`logging`] emits structured diagnostics through the `log` facade.

pub mod bridge;
pub mod config;
pub mod errors;
pub mod host;
pub mod keymap;
pub mod logging;

pub use bridge::{Command, CommandBridge, Invoke, Moves};
pub use errors::ViewerError;
