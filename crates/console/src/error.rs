use std::path::PathBuf;
use thiserror::Error;

/// Errors raised outside command handling: settings and console I/O.
#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

/// Result type for console operations.
pub type ConsoleResult<T> = Result<T, ConsoleError>;
