//! Producer input definitions
//!
//! Each definition describes one source file (or lines/metadata pair) feeding a
//! language into the text or subtitle database. How definitions are listed in a
//! project manifest is left to the host tool.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Text version assumed when a definition does not name one
pub const DEFAULT_TEXT_VERSION: &str = "jak1-v2";

/// Source syntax of a definition's files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    /// S-expression script files (read by external tooling)
    Goal,
    /// JSON documents
    #[default]
    Json,
}

impl SourceFormat {
    /// Fail unless the format is one this crate reads directly
    pub fn require_json(self) -> Result<()> {
        match self {
            Self::Json => Ok(()),
            Self::Goal => Err(Error::UnsupportedFormat("goal".to_string())),
        }
    }
}

fn default_language_id() -> i32 {
    -1
}

fn default_text_version() -> String {
    DEFAULT_TEXT_VERSION.to_string()
}

/// One text source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextDefinitionFile {
    #[serde(default)]
    pub format: SourceFormat,
    pub file_path: PathBuf,
    #[serde(default = "default_language_id")]
    pub language_id: i32,
    #[serde(default = "default_text_version")]
    pub text_version: String,
    /// Text group the lines land in; the common group when absent
    #[serde(default)]
    pub group_name: Option<String>,
}

impl TextDefinitionFile {
    /// JSON definition with default version and group
    pub fn json(file_path: impl AsRef<Path>, language_id: i32) -> Self {
        Self {
            format: SourceFormat::Json,
            file_path: file_path.as_ref().to_path_buf(),
            language_id,
            text_version: default_text_version(),
            group_name: None,
        }
    }

    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group_name = Some(group.into());
        self
    }
}

/// One subtitle language: a lines document plus its timing metadata
///
/// The optional base paths name documents of a fallback language whose entries
/// fill in anything the language's own documents leave out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtitleDefinitionFile {
    #[serde(default)]
    pub format: SourceFormat,
    #[serde(default = "default_language_id")]
    pub language_id: i32,
    #[serde(default = "default_text_version")]
    pub text_version: String,
    pub lines_path: PathBuf,
    #[serde(default)]
    pub lines_base_path: Option<PathBuf>,
    pub meta_path: PathBuf,
    #[serde(default)]
    pub meta_base_path: Option<PathBuf>,
}

impl SubtitleDefinitionFile {
    pub fn json(lines_path: impl AsRef<Path>, meta_path: impl AsRef<Path>, language_id: i32) -> Self {
        Self {
            format: SourceFormat::Json,
            language_id,
            text_version: default_text_version(),
            lines_path: lines_path.as_ref().to_path_buf(),
            lines_base_path: None,
            meta_path: meta_path.as_ref().to_path_buf(),
            meta_base_path: None,
        }
    }

    /// Fall back to another language's documents for missing entries
    #[must_use]
    pub fn with_base(mut self, lines_base: impl AsRef<Path>, meta_base: impl AsRef<Path>) -> Self {
        self.lines_base_path = Some(lines_base.as_ref().to_path_buf());
        self.meta_base_path = Some(meta_base.as_ref().to_path_buf());
        self
    }
}
