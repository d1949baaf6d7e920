//! JSON text source loading
//!
//! A text JSON document is a flat object mapping hex line ids to strings:
//!
//! ```json
//! { "0x100": "PRESS START", "101": "LOAD GAME" }
//! ```

use serde_json::Value;

use super::{TextBank, TextDatabase};
use crate::error::{Error, Result};
use crate::project::TextDefinitionFile;
use crate::utils::{parse_hex_id, read_json_file};

/// Group used when a definition does not name one
pub const DEFAULT_TEXT_GROUP: &str = "common";

/// Load the lines of a parsed text document into the database
///
/// The bank for the definition's group and language is created on first use and
/// reused afterwards, so several files may contribute to the same bank. Returns the
/// number of lines set.
///
/// # Errors
/// Returns [`Error::InvalidFormat`] if the document is not an object of strings, or
/// [`Error::InvalidHexId`] if a key is not a hex id. Nothing is written to the
/// database when an error is returned.
pub fn parse_text_json(
    json: &Value,
    db: &mut TextDatabase,
    file_info: &TextDefinitionFile,
) -> Result<usize> {
    let object = json.as_object().ok_or_else(|| {
        Error::InvalidFormat(format!(
            "text document {} is not an object",
            file_info.file_path.display()
        ))
    })?;

    let mut lines = Vec::with_capacity(object.len());
    for (key, value) in object {
        let id = parse_hex_id(key)?;
        let text = value.as_str().ok_or_else(|| {
            Error::InvalidFormat(format!("text line '{key}' is not a string"))
        })?;
        lines.push((id, text));
    }

    let group = file_info
        .group_name
        .as_deref()
        .unwrap_or(DEFAULT_TEXT_GROUP);
    let bank = match db.bank_by_id_mut(group, file_info.language_id) {
        Some(bank) => bank,
        None => db.add_bank(group, TextBank::new(file_info.language_id))?,
    };

    let count = lines.len();
    for (id, text) in lines {
        bank.set_line(id, text);
    }

    tracing::debug!(
        "Loaded {count} lines into group '{group}' language {}",
        file_info.language_id
    );
    Ok(count)
}

/// Read a text document from the definition's path and load it
///
/// # Errors
/// Returns [`Error::UnsupportedFormat`] for non-JSON definitions, or any error of
/// [`read_json_file`] and [`parse_text_json`].
pub fn read_text_json(db: &mut TextDatabase, file_info: &TextDefinitionFile) -> Result<usize> {
    file_info.format.require_json()?;
    let json: Value = read_json_file(&file_info.file_path)?;
    let count = parse_text_json(&json, db, file_info)?;
    tracing::info!(
        "Loaded {count} text lines from {}",
        file_info.file_path.display()
    );
    Ok(count)
}
