//! Error types for wireframe generation.
//!
//! This module provides the main error type [`WireframeError`] which wraps
//! the error conditions that can occur while building and writing a
//! storyboard.

use std::{io, path::PathBuf};

use thiserror::Error;

/// The main error type for wireframe operations.
#[derive(Debug, Error)]
pub enum WireframeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to write `{}`: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for WireframeError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl WireframeError {
    /// Create a new `Write` error for the file at `path`.
    pub fn new_write_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
