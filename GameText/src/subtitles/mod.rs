//! Cutscene and hint subtitles
//!
//! The subtitle database holds one bank per language. Each bank maps scene names
//! to [`SubtitleScene`]s, whose lines are kept in frame order. Scene groups are
//! shared by all languages and only drive how editors list scenes.
//!
//! # Usage
//!
//! ```
//! use gametext::subtitles::{SceneKind, SubtitleBank, SubtitleDatabase, SubtitleScene};
//!
//! let mut db = SubtitleDatabase::new();
//! let bank = db.add_bank(SubtitleBank::new(0))?;
//!
//! let mut scene = SubtitleScene::new("sage-intro", SceneKind::Movie);
//! scene.add_line(120, "Hurry up!", "Samos", false);
//! scene.add_line(30, "Wake up!", "Samos", false);
//! scene.add_clear_entry(200);
//! bank.add_scene(scene)?;
//!
//! let scene = db.bank_by_id(0).unwrap().scene_by_name("sage-intro")?;
//! assert_eq!(scene.lines()[0].text, "Wake up!");
//! # Ok::<(), gametext::Error>(())
//! ```

mod bank;
mod groups;
mod json;
mod scene;

pub use bank::{SubtitleBank, SubtitleDatabase};
pub use groups::{DEFAULT_GROUP_ORDER_KEY, DEFAULT_UNCATEGORIZED_GROUP, SceneGroups};
pub use json::{
    SubtitleCutsceneLineMetadata, SubtitleFile, SubtitleHintLineMetadata, SubtitleHintMetadata,
    SubtitleMetadataFile, build_scenes, load_subtitle_documents, parse_subtitle_json,
};
pub use scene::{SceneKind, SubtitleLine, SubtitleScene};
