//! CLI command definitions

use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Game text operations
    Text {
        #[command(subcommand)]
        command: TextCommands,
    },

    /// Subtitle operations
    Subs {
        #[command(subcommand)]
        command: SubtitleCommands,
    },

    /// Scene group operations
    Groups {
        #[command(subcommand)]
        command: GroupCommands,
    },
}

/// Game text commands
#[derive(Subcommand)]
pub enum TextCommands {
    /// Print the lines of a JSON text file
    Show {
        /// JSON text file
        path: PathBuf,

        /// Language id of the file
        #[arg(short, long, default_value = "0")]
        lang: i32,

        /// Text group the file belongs to
        #[arg(short, long)]
        group: Option<String>,

        /// Only print the line with this hex id
        #[arg(long)]
        id: Option<String>,
    },
}

/// Lines and metadata documents of one subtitle language
#[derive(Args, Clone)]
pub struct SubtitleSource {
    /// Subtitle lines file
    #[arg(long)]
    pub lines: PathBuf,

    /// Subtitle metadata file
    #[arg(long)]
    pub meta: PathBuf,

    /// Base lines file filling in missing entries
    #[arg(long, requires = "meta_base")]
    pub lines_base: Option<PathBuf>,

    /// Base metadata file filling in missing entries
    #[arg(long, requires = "lines_base")]
    pub meta_base: Option<PathBuf>,

    /// Language id of the documents
    #[arg(short, long, default_value = "0")]
    pub lang: i32,

    /// Scene groups asset file
    #[arg(long)]
    pub groups: Option<PathBuf>,
}

/// Subtitle commands
#[derive(Subcommand)]
pub enum SubtitleCommands {
    /// List the scenes of a subtitle language
    List {
        #[command(flatten)]
        source: SubtitleSource,
    },

    /// Print the lines of one scene
    Show {
        /// Scene name
        scene: String,

        #[command(flatten)]
        source: SubtitleSource,
    },
}

/// Scene group commands
#[derive(Subcommand)]
pub enum GroupCommands {
    /// Print groups and their scenes in display order
    Show {
        /// Scene groups asset file
        path: PathBuf,
    },

    /// Print the group a scene belongs to
    Find {
        /// Scene groups asset file
        path: PathBuf,

        /// Scene name
        scene: String,
    },
}
