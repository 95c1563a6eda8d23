use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("Files are not in buffer")] EmptyBuffer,
    #[error("No parent directory for {0}")] NoParent(PathBuf),
    #[error("No further directory from {0}")] NoDirectory(PathBuf),
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Unsupported file: {0}")] UnsupportedFile(String),
    #[error("No extension: {0}")] NoExtension(PathBuf),
    #[error("Invalid moves: {0}")] InvalidMoves(String),
    #[error("Unknown command: {0}")] UnknownCommand(String),
    #[error("Invalid arguments for {command}: {reason}")]
    InvalidArguments { command: String, reason: String },
    #[error("Viewer state is unavailable")] StatePoisoned,
    #[error("Background task failed: {0}")] Task(String),
}

impl ViewerError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyBuffer => "NAV-1001",
            Self::NoParent(_) => "NAV-1002",
            Self::NoDirectory(_) => "NAV-1003",
            Self::Io { .. } => "FS-1001",
            Self::UnsupportedFile(_) => "IMG-1001",
            Self::NoExtension(_) => "IMG-1002",
            Self::InvalidMoves(_) => "CMD-1001",
            Self::UnknownCommand(_) => "CMD-1002",
            Self::InvalidArguments { .. } => "CMD-1003",
            Self::StatePoisoned => "GEN-1001",
            Self::Task(_) => "GEN-1002",
        }
    }
    pub fn explain(&self) -> &'static str {
        match self {
            Self::EmptyBuffer => "The viewer has no files loaded for the current directory.",
            Self::NoParent(_) => "The current file is not inside a directory that can be listed.",
            Self::NoDirectory(_) => "There is no directory with images left in that direction.",
            Self::Io { .. } => "A file or directory could not be read from disk.",
            Self::UnsupportedFile(_) => "The file extension is not a supported image format.",
            Self::NoExtension(_) => "The file has no extension, so its format is unknown.",
            Self::InvalidMoves(_) => "The move count must be a whole number.",
            Self::UnknownCommand(_) => "The host does not implement the requested command.",
            Self::InvalidArguments { .. } => "The command payload did not match the expected shape.",
            Self::StatePoisoned => "A previous command panicked while holding the viewer state.",
            Self::Task(_) => "The blocking worker running the command did not complete.",
        }
    }
}
