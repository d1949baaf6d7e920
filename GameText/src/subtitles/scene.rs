//! Subtitle scenes
//!
//! A scene is the timed line list of one cutscene or hint. Lines are kept sorted
//! by frame at all times; lines sharing a frame stay in insertion order.

use serde::{Deserialize, Serialize};

/// What a scene subtitles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SceneKind {
    /// Cutscene
    #[default]
    Movie,
    /// Hint identified by a numeric id
    Hint,
    /// Hint identified only by its name
    HintNamed,
}

impl SceneKind {
    /// Whether the scene comes from the hints section of the documents
    pub fn is_hint(self) -> bool {
        matches!(self, Self::Hint | Self::HintNamed)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Hint => "hint",
            Self::HintNamed => "named hint",
        }
    }
}

/// One timed line. An empty text marks a clear entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtitleLine {
    pub frame: i32,
    pub text: String,
    pub speaker: String,
    pub offscreen: bool,
}

impl SubtitleLine {
    pub fn new(
        frame: i32,
        text: impl Into<String>,
        speaker: impl Into<String>,
        offscreen: bool,
    ) -> Self {
        Self {
            frame,
            text: text.into(),
            speaker: speaker.into(),
            offscreen,
        }
    }

    /// A marker telling consumers to stop showing earlier text from `frame` on
    pub fn clear(frame: i32) -> Self {
        Self::new(frame, "", "", false)
    }

    pub fn is_clear(&self) -> bool {
        self.text.is_empty()
    }
}

/// Timed lines of one cutscene or hint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleScene {
    /// Also the key of the scene in its bank; renamed through the bank
    pub(super) name: String,
    pub id: i32,
    pub kind: SceneKind,
    lines: Vec<SubtitleLine>,
    /// Group assigned by the scene grouping layer
    pub sorting_group: String,
    /// Position of `sorting_group` in the group order
    pub sorting_group_index: Option<usize>,
}

impl SubtitleScene {
    pub fn new(name: impl Into<String>, kind: SceneKind) -> Self {
        Self {
            name: name.into(),
            id: 0,
            kind,
            lines: Vec::new(),
            sorting_group: String::new(),
            sorting_group_index: None,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lines(&self) -> &[SubtitleLine] {
        &self.lines
    }

    /// Add a spoken line at its frame position
    pub fn add_line(
        &mut self,
        frame: i32,
        text: impl Into<String>,
        speaker: impl Into<String>,
        offscreen: bool,
    ) {
        self.insert_sorted(SubtitleLine::new(frame, text, speaker, offscreen));
    }

    /// Add a clear marker at its frame position
    pub fn add_clear_entry(&mut self, frame: i32) {
        self.insert_sorted(SubtitleLine::clear(frame));
    }

    pub fn clear_lines(&mut self) {
        self.lines.clear();
    }

    /// Take over another scene's name, id, kind and lines
    ///
    /// Sorting fields are kept; the grouping layer recomputes them. For a scene
    /// already stored in a bank use [`SubtitleBank::replace_scene`], which also moves
    /// the scene to its new key.
    ///
    /// [`SubtitleBank::replace_scene`]: super::SubtitleBank::replace_scene
    pub fn from_other_scene(&mut self, other: &SubtitleScene) {
        self.name.clone_from(&other.name);
        self.lines.clone_from(&other.lines);
        self.kind = other.kind;
        self.id = other.id;
    }

    // Insert after every line with frame <= the new one; same order as a stable sort.
    fn insert_sorted(&mut self, line: SubtitleLine) {
        let pos = self.lines.partition_point(|l| l.frame <= line.frame);
        self.lines.insert(pos, line);
    }
}
