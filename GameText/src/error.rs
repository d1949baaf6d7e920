//! Error types for `GameText`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `GameText` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A producer input file could not be opened.
    #[error("failed to read {path}: {source}")]
    FileRead {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },

    // ==================== Duplicate Keys ====================
    /// A text bank for this group and language already exists.
    #[error("duplicate text bank for language {language} in group '{group}'")]
    DuplicateTextBank {
        /// The text group name.
        group: String,
        /// The language id of the rejected bank.
        language: i32,
    },

    /// A subtitle bank for this language already exists.
    #[error("duplicate subtitle bank for language {language}")]
    DuplicateSubtitleBank {
        /// The language id of the rejected bank.
        language: i32,
    },

    /// A scene with this name already exists in the bank.
    #[error("duplicate scene '{scene}' in language {language}")]
    DuplicateScene {
        /// The scene name.
        scene: String,
        /// The language id of the bank.
        language: i32,
    },

    // ==================== Missing Keys ====================
    /// The requested line id is not present in the text bank.
    #[error("line {id:#x} not found in language {language}")]
    LineNotFound {
        /// The missing line id.
        id: i32,
        /// The language id of the bank.
        language: i32,
    },

    /// The requested scene is not present in the subtitle bank.
    #[error("scene '{scene}' not found in language {language}")]
    SceneNotFound {
        /// The missing scene name.
        scene: String,
        /// The language id of the bank.
        language: i32,
    },

    // ==================== Parsing Errors ====================
    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A line or hint id is not a valid hexadecimal number.
    #[error("invalid hex id: '{0}'")]
    InvalidHexId(String),

    /// The metadata of a scene references more text lines than the lines file provides.
    #[error("scene '{scene}' ran out of text lines ({available} available)")]
    SubtitleLinesExhausted {
        /// The scene being built.
        scene: String,
        /// Number of text lines the lines file provides for the scene.
        available: usize,
    },

    /// The definition names a source format this crate does not read.
    #[error("unsupported source format: {0}")]
    UnsupportedFormat(String),

    /// Invalid document shape.
    #[error("invalid format: {0}")]
    InvalidFormat(String),
}

impl Error {
    /// Whether this error rejected an insertion because the key was already taken.
    #[must_use]
    pub fn is_duplicate_key(&self) -> bool {
        matches!(
            self,
            Error::DuplicateTextBank { .. }
                | Error::DuplicateSubtitleBank { .. }
                | Error::DuplicateScene { .. }
        )
    }

    /// Whether this error comes from a required lookup on a missing key.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::LineNotFound { .. } | Error::SceneNotFound { .. })
    }
}

/// A specialized Result type for `GameText` operations.
pub type Result<T> = std::result::Result<T, Error>;
