//! Error types for fskv
//!
//! Provides a unified error type for all store operations.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

/// Result type alias using StoreError
pub type Result<T> = std::result::Result<T, StoreError>;

/// Which half of `clear` failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearStep {
    /// Deleting the root directory
    Remove,

    /// Recreating the root directory
    Recreate,
}

impl std::fmt::Display for ClearStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClearStep::Remove => write!(f, "remove"),
            ClearStep::Recreate => write!(f, "recreate"),
        }
    }
}

/// Unified error type for fskv operations
///
/// I/O sources are held behind `Arc` so the error is `Clone`: a failed
/// initialization is handed to every operation issued afterwards.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    // -------------------------------------------------------------------------
    // Initialization Errors
    // -------------------------------------------------------------------------
    #[error("failed to create root directory {path:?}: {source}")]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: Arc<io::Error>,
    },

    // -------------------------------------------------------------------------
    // Entry Errors
    // -------------------------------------------------------------------------
    #[error("failed to read key {key:?}: {source}")]
    Read {
        key: String,
        #[source]
        source: Arc<io::Error>,
    },

    #[error("failed to write key {key:?}: {source}")]
    Write {
        key: String,
        #[source]
        source: Arc<io::Error>,
    },

    #[error("failed to delete key {key:?}: {source}")]
    Delete {
        key: String,
        #[source]
        source: Arc<io::Error>,
    },

    // -------------------------------------------------------------------------
    // Directory Errors
    // -------------------------------------------------------------------------
    #[error("failed to list {path:?}: {message}")]
    List { path: PathBuf, message: String },

    #[error("clear failed during {step} of {path:?}: {source}")]
    Clear {
        path: PathBuf,
        step: ClearStep,
        #[source]
        source: Arc<io::Error>,
    },

    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    #[error("invalid key: {0}")]
    InvalidKey(String),

    #[error("invalid value for key {key:?}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("filename {name:?} is not an encoded key: {message}")]
    KeyDecode { name: String, message: String },
}

impl StoreError {
    /// True when the error means the entry does not exist
    ///
    /// Lets callers treat a missing key as an absent value.
    pub fn is_not_found(&self) -> bool {
        match self {
            StoreError::Read { source, .. } => source.kind() == io::ErrorKind::NotFound,
            _ => false,
        }
    }

    /// The key this error refers to, if any
    pub fn key(&self) -> Option<&str> {
        match self {
            StoreError::Read { key, .. }
            | StoreError::Write { key, .. }
            | StoreError::Delete { key, .. }
            | StoreError::InvalidValue { key, .. } => Some(key),
            _ => None,
        }
    }

    pub(crate) fn directory_creation(path: impl Into<PathBuf>, err: io::Error) -> Self {
        StoreError::DirectoryCreation {
            path: path.into(),
            source: Arc::new(err),
        }
    }

    pub(crate) fn read(key: &str, err: io::Error) -> Self {
        StoreError::Read {
            key: key.to_string(),
            source: Arc::new(err),
        }
    }

    pub(crate) fn write(key: &str, err: io::Error) -> Self {
        StoreError::Write {
            key: key.to_string(),
            source: Arc::new(err),
        }
    }

    pub(crate) fn delete(key: &str, err: io::Error) -> Self {
        StoreError::Delete {
            key: key.to_string(),
            source: Arc::new(err),
        }
    }

    pub(crate) fn clear(path: impl Into<PathBuf>, step: ClearStep, err: io::Error) -> Self {
        StoreError::Clear {
            path: path.into(),
            step,
            source: Arc::new(err),
        }
    }
}
