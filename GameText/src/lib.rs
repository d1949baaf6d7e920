//! # GameText
//!
//! In-memory database of localized game text and cutscene subtitles for modding
//! and authoring tools.
//!
//! ## Contents
//!
//! - **Text banks** - Numbered UI/dialogue strings, one bank per language per text group
//! - **Subtitle banks** - Timed cutscene and hint lines, one bank per language
//! - **Scene groups** - Language-independent grouping and ordering of scenes for editors
//! - **JSON sources** - Loading text and subtitle documents into the database
//!
//! ## Quick Start
//!
//! ```
//! use gametext::prelude::*;
//!
//! let mut db = TextDatabase::new();
//! db.add_bank("common", TextBank::new(0))?.set_line(0x100, "PRESS START");
//!
//! assert_eq!(db.bank_by_id("common", 0).unwrap().line(0x100)?, "PRESS START");
//! assert!(db.bank_by_id("common", 1).is_none());
//! # Ok::<(), gametext::Error>(())
//! ```
//!
//! ### Loading Subtitles
//!
//! ```no_run
//! use gametext::prelude::*;
//!
//! let mut groups = SceneGroups::new();
//! groups.hydrate_from_asset_file("subtitle-groups.json")?;
//!
//! let mut db = SubtitleDatabase::with_scene_groups(groups);
//! let def = SubtitleDefinitionFile::json("subs/lines_en.json", "subs/meta_en.json", 0);
//! parse_subtitle_json(&mut db, &def)?;
//! db.assign_sorting_groups();
//! # Ok::<(), gametext::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `gametext` command-line binary

pub mod error;
pub mod project;
pub mod subtitles;
pub mod text;
pub mod utils;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::project::{SourceFormat, SubtitleDefinitionFile, TextDefinitionFile};
    pub use crate::subtitles::{
        SceneGroups, SceneKind, SubtitleBank, SubtitleDatabase, SubtitleFile, SubtitleLine,
        SubtitleMetadataFile, SubtitleScene, load_subtitle_documents, parse_subtitle_json,
    };
    pub use crate::text::{TextBank, TextDatabase, parse_text_json, read_text_json};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
