mod definitions;
mod execute;

pub mod groups;
pub mod subs;
pub mod text;

pub use definitions::{Commands, GroupCommands, SubtitleCommands, SubtitleSource, TextCommands};
