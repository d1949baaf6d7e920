//! JSON subtitle documents
//!
//! A subtitle language is stored as two documents. The lines document holds the
//! translated text:
//!
//! ```json
//! {
//!   "speakers": { "sage": "Samos" },
//!   "cutscenes": { "sage-intro": ["Wake up!", "Hurry."] },
//!   "hints": { "fish-hint": ["Catch the fish!"] }
//! }
//! ```
//!
//! The metadata document holds timing, speaker keys and clear markers. Clear
//! entries carry no text, so the text list of a scene only has one entry per
//! spoken line:
//!
//! ```json
//! {
//!   "cutscenes": {
//!     "sage-intro": [
//!       { "frame": 10, "speaker": "sage" },
//!       { "frame": 80, "clear": true },
//!       { "frame": 95, "speaker": "sage", "offscreen": true }
//!     ]
//!   },
//!   "hints": {
//!     "fish-hint": { "id": "2a1", "lines": [{ "frame": 0, "speaker": "fisher" }] }
//!   }
//! }
//! ```

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::bank::{SubtitleBank, SubtitleDatabase};
use super::scene::{SceneKind, SubtitleScene};
use crate::error::{Error, Result};
use crate::project::SubtitleDefinitionFile;
use crate::utils::{format_hex_id, parse_hex_id, read_json_file};

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(value: &bool) -> bool {
    !*value
}

/// Timing of one cutscene line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtitleCutsceneLineMetadata {
    pub frame: i32,
    #[serde(default, skip_serializing_if = "is_false")]
    pub offscreen: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub speaker: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub clear: bool,
}

/// Timing of one hint line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtitleHintLineMetadata {
    pub frame: i32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub speaker: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub clear: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtitleHintMetadata {
    /// Hex id, `"0"` for hints known only by name
    pub id: String,
    #[serde(default)]
    pub lines: Vec<SubtitleHintLineMetadata>,
}

/// Metadata document of one language
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtitleMetadataFile {
    #[serde(default)]
    pub cutscenes: IndexMap<String, Vec<SubtitleCutsceneLineMetadata>>,
    #[serde(default)]
    pub hints: IndexMap<String, SubtitleHintMetadata>,
}

impl SubtitleMetadataFile {
    /// Take scenes this document lacks from a base document
    pub fn fill_from(&mut self, base: SubtitleMetadataFile) {
        fill_missing(&mut self.cutscenes, base.cutscenes);
        fill_missing(&mut self.hints, base.hints);
    }
}

/// Lines document of one language
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtitleFile {
    /// Speaker key to display name
    #[serde(default)]
    pub speakers: IndexMap<String, String>,
    #[serde(default)]
    pub cutscenes: IndexMap<String, Vec<String>>,
    #[serde(default)]
    pub hints: IndexMap<String, Vec<String>>,
}

impl SubtitleFile {
    /// Take speakers and scenes this document lacks from a base document
    pub fn fill_from(&mut self, base: SubtitleFile) {
        fill_missing(&mut self.speakers, base.speakers);
        fill_missing(&mut self.cutscenes, base.cutscenes);
        fill_missing(&mut self.hints, base.hints);
    }

    fn speaker_name(&self, scene: &str, key: &str) -> String {
        if key.is_empty() {
            return String::new();
        }
        if let Some(name) = self.speakers.get(key) {
            name.clone()
        } else {
            tracing::warn!("Unknown speaker '{key}' in scene '{scene}'");
            key.to_string()
        }
    }
}

fn fill_missing<V>(target: &mut IndexMap<String, V>, base: IndexMap<String, V>) {
    for (key, value) in base {
        target.entry(key).or_insert(value);
    }
}

/// Timing entry common to cutscene and hint metadata
struct LineTiming<'a> {
    frame: i32,
    speaker: &'a str,
    offscreen: bool,
    clear: bool,
}

fn build_scene<'a>(
    name: &str,
    kind: SceneKind,
    id: i32,
    timings: impl IntoIterator<Item = LineTiming<'a>>,
    lines: &SubtitleFile,
) -> Result<SubtitleScene> {
    let texts: &[String] = match kind {
        SceneKind::Movie => lines.cutscenes.get(name),
        SceneKind::Hint | SceneKind::HintNamed => lines.hints.get(name),
    }
    .map(Vec::as_slice)
    .unwrap_or(&[]);

    let mut scene = SubtitleScene::new(name, kind).with_id(id);
    let mut next_text = texts.iter();
    for timing in timings {
        if timing.clear {
            scene.add_clear_entry(timing.frame);
            continue;
        }
        let text = next_text.next().ok_or_else(|| Error::SubtitleLinesExhausted {
            scene: name.to_string(),
            available: texts.len(),
        })?;
        let speaker = lines.speaker_name(name, timing.speaker);
        scene.add_line(timing.frame, text.as_str(), speaker, timing.offscreen);
    }

    let unused = next_text.len();
    if unused > 0 {
        tracing::warn!("Scene '{name}' has {unused} text lines without timing");
    }
    Ok(scene)
}

/// Build every scene described by a lines and metadata document pair
///
/// Cutscenes become [`SceneKind::Movie`] scenes; hints become [`SceneKind::Hint`]
/// scenes, or [`SceneKind::HintNamed`] when their id is zero. Spoken hint lines
/// are always offscreen.
///
/// # Errors
/// Returns [`Error::InvalidHexId`] for a malformed hint id, or
/// [`Error::SubtitleLinesExhausted`] when the metadata asks for more text than the
/// lines document has.
pub fn build_scenes(
    lines: &SubtitleFile,
    meta: &SubtitleMetadataFile,
) -> Result<Vec<SubtitleScene>> {
    let mut scenes = Vec::with_capacity(meta.cutscenes.len() + meta.hints.len());

    for (name, timings) in &meta.cutscenes {
        let timings = timings.iter().map(|t| LineTiming {
            frame: t.frame,
            speaker: &t.speaker,
            offscreen: t.offscreen,
            clear: t.clear,
        });
        scenes.push(build_scene(name, SceneKind::Movie, 0, timings, lines)?);
    }

    for (name, hint) in &meta.hints {
        let id = parse_hex_id(&hint.id)?;
        let kind = if id == 0 { SceneKind::HintNamed } else { SceneKind::Hint };
        let timings = hint.lines.iter().map(|t| LineTiming {
            frame: t.frame,
            speaker: &t.speaker,
            offscreen: true,
            clear: t.clear,
        });
        scenes.push(build_scene(name, kind, id, timings, lines)?);
    }

    Ok(scenes)
}

/// Add a lines and metadata document pair to the bank of `language_id`
///
/// The bank is created when the database has none for the language. Returns the
/// number of scenes added.
///
/// # Errors
/// Returns any error of [`build_scenes`], or [`Error::DuplicateScene`] if a scene
/// is already in the bank or named twice by the documents. Nothing is added to
/// the database when an error is returned.
pub fn load_subtitle_documents(
    db: &mut SubtitleDatabase,
    language_id: i32,
    lines: &SubtitleFile,
    meta: &SubtitleMetadataFile,
) -> Result<usize> {
    let scenes = build_scenes(lines, meta)?;

    let existing = db.bank_by_id(language_id);
    let mut seen = HashSet::with_capacity(scenes.len());
    for scene in &scenes {
        let taken = existing.is_some_and(|bank| bank.scene_exists(scene.name()));
        if taken || !seen.insert(scene.name()) {
            return Err(Error::DuplicateScene {
                scene: scene.name().to_string(),
                language: language_id,
            });
        }
    }

    let bank = match db.bank_by_id_mut(language_id) {
        Some(bank) => bank,
        None => db.add_bank(SubtitleBank::new(language_id))?,
    };
    let count = scenes.len();
    for scene in scenes {
        bank.add_scene(scene)?;
    }
    Ok(count)
}

/// Read the documents named by a definition and add them to the database
///
/// Base documents, when given, are read first and fill in whatever the language's
/// own documents leave out. A bank created here records the definition's text
/// version and lines path.
///
/// # Errors
/// Returns [`Error::UnsupportedFormat`] for non-JSON definitions, an error if a
/// document cannot be read, or any error of [`load_subtitle_documents`].
pub fn parse_subtitle_json(
    db: &mut SubtitleDatabase,
    file_info: &SubtitleDefinitionFile,
) -> Result<usize> {
    file_info.format.require_json()?;

    let mut lines: SubtitleFile = read_json_file(&file_info.lines_path)?;
    if let Some(base) = &file_info.lines_base_path {
        lines.fill_from(read_json_file(base)?);
    }
    let mut meta: SubtitleMetadataFile = read_json_file(&file_info.meta_path)?;
    if let Some(base) = &file_info.meta_base_path {
        meta.fill_from(read_json_file(base)?);
    }

    let language = file_info.language_id;
    let created = !db.bank_exists(language);
    let count = load_subtitle_documents(db, language, &lines, &meta)?;
    if created {
        if let Some(bank) = db.bank_by_id_mut(language) {
            bank.text_version.clone_from(&file_info.text_version);
            bank.source_path.clone_from(&file_info.lines_path);
        }
    }

    tracing::info!(
        "Loaded {count} subtitle scenes for language {language} from {}",
        file_info.lines_path.display()
    );
    Ok(count)
}

/// Check that a hint scene survives being written to and read from the documents
fn check_hint_exportable(scene: &SubtitleScene) -> Result<()> {
    match scene.kind {
        SceneKind::Hint if scene.id == 0 => {
            return Err(Error::InvalidFormat(format!(
                "hint '{}' has id 0, which documents reserve for named hints",
                scene.name()
            )));
        }
        SceneKind::HintNamed if scene.id != 0 => {
            return Err(Error::InvalidFormat(format!(
                "named hint '{}' carries id {:#x}, which documents cannot store",
                scene.name(),
                scene.id
            )));
        }
        _ => {}
    }

    if let Some(line) = scene.lines().iter().find(|l| !l.is_clear() && !l.offscreen) {
        return Err(Error::InvalidFormat(format!(
            "hint '{}' has an onscreen line at frame {}; hint lines are always offscreen",
            scene.name(),
            line.frame
        )));
    }
    Ok(())
}

impl SubtitleBank {
    /// Rebuild the lines and metadata documents of this bank
    ///
    /// Speakers are written under their display names, so loading the documents
    /// again yields the same scenes.
    ///
    /// # Errors
    /// Returns [`Error::InvalidFormat`] for hint scenes the documents cannot
    /// represent: a [`SceneKind::Hint`] with id 0, a [`SceneKind::HintNamed`] with a
    /// non-zero id, or a spoken hint line that is not offscreen.
    pub fn to_documents(&self) -> Result<(SubtitleFile, SubtitleMetadataFile)> {
        let mut lines = SubtitleFile::default();
        let mut meta = SubtitleMetadataFile::default();

        for scene in self.scenes().values() {
            if scene.kind.is_hint() {
                check_hint_exportable(scene)?;
            }

            let mut texts = Vec::new();
            for line in scene.lines() {
                if !line.is_clear() {
                    texts.push(line.text.clone());
                    if !line.speaker.is_empty() {
                        lines
                            .speakers
                            .entry(line.speaker.clone())
                            .or_insert_with(|| line.speaker.clone());
                    }
                }
            }

            let name = scene.name().to_string();
            if scene.kind.is_hint() {
                let hint_lines = scene
                    .lines()
                    .iter()
                    .map(|l| SubtitleHintLineMetadata {
                        frame: l.frame,
                        speaker: l.speaker.clone(),
                        clear: l.is_clear(),
                    })
                    .collect();
                meta.hints.insert(
                    name.clone(),
                    SubtitleHintMetadata {
                        id: format_hex_id(scene.id),
                        lines: hint_lines,
                    },
                );
                lines.hints.insert(name, texts);
            } else {
                let cutscene_lines = scene
                    .lines()
                    .iter()
                    .map(|l| SubtitleCutsceneLineMetadata {
                        frame: l.frame,
                        offscreen: l.offscreen,
                        speaker: l.speaker.clone(),
                        clear: l.is_clear(),
                    })
                    .collect();
                meta.cutscenes.insert(name.clone(), cutscene_lines);
                lines.cutscenes.insert(name, texts);
            }
        }

        Ok((lines, meta))
    }
}
