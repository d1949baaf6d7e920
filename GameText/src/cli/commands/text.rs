//! CLI commands for game text files

use std::path::Path;

use console::style;

use crate::project::TextDefinitionFile;
use crate::text::{DEFAULT_TEXT_GROUP, TextDatabase, read_text_json};
use crate::utils::{format_hex_id, parse_hex_id};

/// Print the lines of a text file, or a single line by hex id
pub fn show(path: &Path, lang: i32, group: Option<&str>, id: Option<&str>) -> anyhow::Result<()> {
    let mut info = TextDefinitionFile::json(path, lang);
    if let Some(group) = group {
        info = info.with_group(group);
    }

    let mut db = TextDatabase::new();
    read_text_json(&mut db, &info)?;

    let group = group.unwrap_or(DEFAULT_TEXT_GROUP);
    let bank = db
        .bank_by_id(group, lang)
        .ok_or_else(|| anyhow::anyhow!("no text bank for language {lang} in group '{group}'"))?;

    if let Some(id) = id {
        println!("{}", bank.line(parse_hex_id(id)?)?);
        return Ok(());
    }

    println!(
        "{} {} lines (group '{}', language {})",
        style("Text:").bold(),
        bank.len(),
        group,
        lang
    );
    for (id, line) in bank.lines() {
        println!(
            "{:>8}  {}",
            style(format_hex_id(*id)).dim(),
            line.replace('\n', "\\n")
        );
    }
    Ok(())
}
