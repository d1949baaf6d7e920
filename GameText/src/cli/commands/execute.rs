//! Command execution implementations

use super::definitions::{Commands, GroupCommands, SubtitleCommands, TextCommands};
use super::{groups, subs, text};

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the underlying command fails.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Text { command } => command.execute(),
            Commands::Subs { command } => command.execute(),
            Commands::Groups { command } => command.execute(),
        }
    }
}

impl TextCommands {
    /// Execute the selected text command.
    ///
    /// # Errors
    /// Returns an error if the text file cannot be loaded.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            TextCommands::Show {
                path,
                lang,
                group,
                id,
            } => text::show(path, *lang, group.as_deref(), id.as_deref()),
        }
    }
}

impl SubtitleCommands {
    /// Execute the selected subtitle command.
    ///
    /// # Errors
    /// Returns an error if the subtitle documents cannot be loaded.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            SubtitleCommands::List { source } => subs::list(source),
            SubtitleCommands::Show { scene, source } => subs::show(source, scene),
        }
    }
}

impl GroupCommands {
    /// Execute the selected group command.
    ///
    /// # Errors
    /// Returns an error if the groups file cannot be loaded.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            GroupCommands::Show { path } => groups::show(path),
            GroupCommands::Find { path, scene } => groups::find(path, scene),
        }
    }
}
