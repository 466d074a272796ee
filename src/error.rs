use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to read file '{}': {source}", .path.display())]
    Io { path: PathBuf, source: std::io::Error },

    #[error("Error when parsing '{}': {source}", .path.display())]
    Parse { path: PathBuf, source: serde_json::Error },
}

impl Error {
    /// Process exit status for this error. Usage errors (status 1) are
    /// reported by the argument parser before any of these can occur.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Io { .. } | Error::Parse { .. } => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
