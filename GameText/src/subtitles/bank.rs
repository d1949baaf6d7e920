//! Subtitle banks and the multi-language subtitle database

use std::collections::BTreeMap;
use std::path::PathBuf;

use super::groups::SceneGroups;
use super::scene::SubtitleScene;
use crate::error::{Error, Result};
use crate::project::DEFAULT_TEXT_VERSION;

/// Subtitles of every scene in one language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleBank {
    language_id: i32,
    pub text_version: String,
    /// Lines document the bank was loaded from
    pub source_path: PathBuf,
    scenes: BTreeMap<String, SubtitleScene>,
}

impl SubtitleBank {
    #[must_use]
    pub fn new(language_id: i32) -> Self {
        Self {
            language_id,
            text_version: DEFAULT_TEXT_VERSION.to_string(),
            source_path: PathBuf::new(),
            scenes: BTreeMap::new(),
        }
    }

    pub fn lang(&self) -> i32 {
        self.language_id
    }

    /// Scenes keyed by name
    pub fn scenes(&self) -> &BTreeMap<String, SubtitleScene> {
        &self.scenes
    }

    pub fn scene_exists(&self, name: &str) -> bool {
        self.scenes.contains_key(name)
    }

    /// Look up a scene by name
    ///
    /// # Errors
    /// Returns [`Error::SceneNotFound`] if the bank has no such scene.
    pub fn scene_by_name(&self, name: &str) -> Result<&SubtitleScene> {
        self.scenes
            .get(name)
            .ok_or_else(|| scene_not_found(name, self.language_id))
    }

    /// Mutable variant of [`scene_by_name`](Self::scene_by_name)
    ///
    /// The scene's name cannot change through this reference; use
    /// [`rename_scene`](Self::rename_scene) or [`replace_scene`](Self::replace_scene).
    ///
    /// # Errors
    /// Returns [`Error::SceneNotFound`] if the bank has no such scene.
    pub fn scene_by_name_mut(&mut self, name: &str) -> Result<&mut SubtitleScene> {
        self.scenes
            .get_mut(name)
            .ok_or_else(|| scene_not_found(name, self.language_id))
    }

    /// Store a scene under a new name
    ///
    /// # Errors
    /// Returns [`Error::SceneNotFound`] if `old_name` is not stored, or
    /// [`Error::DuplicateScene`] if another scene already uses `new_name`. The bank is
    /// left unchanged in both cases.
    pub fn rename_scene(&mut self, old_name: &str, new_name: &str) -> Result<()> {
        if !self.scene_exists(old_name) {
            return Err(scene_not_found(old_name, self.language_id));
        }
        if old_name == new_name {
            return Ok(());
        }
        if self.scene_exists(new_name) {
            return Err(Error::DuplicateScene {
                scene: new_name.to_string(),
                language: self.language_id,
            });
        }

        if let Some(mut scene) = self.scenes.remove(old_name) {
            scene.name = new_name.to_string();
            self.scenes.insert(scene.name.clone(), scene);
        }
        Ok(())
    }

    /// Overwrite the stored scene `name` with the content of `other`
    ///
    /// Applies [`SubtitleScene::from_other_scene`] and re-keys the scene under
    /// `other`'s name, keeping the stored sorting fields.
    ///
    /// # Errors
    /// Returns [`Error::SceneNotFound`] if `name` is not stored, or
    /// [`Error::DuplicateScene`] if `other`'s name belongs to a different stored
    /// scene. The bank is left unchanged in both cases.
    pub fn replace_scene(&mut self, name: &str, other: &SubtitleScene) -> Result<()> {
        self.rename_scene(name, other.name())?;
        self.scene_by_name_mut(other.name())?.from_other_scene(other);
        Ok(())
    }

    /// Store a scene under its name
    ///
    /// # Errors
    /// Returns [`Error::DuplicateScene`] if a scene with that name is already stored.
    /// The bank is left unchanged in that case.
    pub fn add_scene(&mut self, scene: SubtitleScene) -> Result<&mut SubtitleScene> {
        if self.scene_exists(scene.name()) {
            return Err(Error::DuplicateScene {
                scene: scene.name,
                language: self.language_id,
            });
        }

        tracing::debug!(
            "Adding {} '{}' ({} lines) to language {}",
            scene.kind.display_name(),
            scene.name(),
            scene.lines().len(),
            self.language_id
        );
        Ok(self.scenes.entry(scene.name.clone()).or_insert(scene))
    }
}

fn scene_not_found(name: &str, language: i32) -> Error {
    Error::SceneNotFound {
        scene: name.to_string(),
        language,
    }
}

/// Subtitle banks for every language plus the shared scene grouping
#[derive(Debug, Clone, Default)]
pub struct SubtitleDatabase {
    banks: BTreeMap<i32, SubtitleBank>,
    scene_groups: Option<SceneGroups>,
}

impl SubtitleDatabase {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Database that shares the given scene grouping across its languages
    #[must_use]
    pub fn with_scene_groups(scene_groups: SceneGroups) -> Self {
        Self {
            banks: BTreeMap::new(),
            scene_groups: Some(scene_groups),
        }
    }

    /// Banks keyed by language id
    pub fn banks(&self) -> &BTreeMap<i32, SubtitleBank> {
        &self.banks
    }

    pub fn bank_exists(&self, language_id: i32) -> bool {
        self.banks.contains_key(&language_id)
    }

    /// Store a bank under its language
    ///
    /// # Errors
    /// Returns [`Error::DuplicateSubtitleBank`] if a bank for that language is
    /// already stored. The database is left unchanged in that case.
    pub fn add_bank(&mut self, bank: SubtitleBank) -> Result<&mut SubtitleBank> {
        let language = bank.lang();
        if self.bank_exists(language) {
            return Err(Error::DuplicateSubtitleBank { language });
        }

        tracing::debug!("Adding subtitle bank for language {language}");
        Ok(self.banks.entry(language).or_insert(bank))
    }

    pub fn bank_by_id(&self, language_id: i32) -> Option<&SubtitleBank> {
        self.banks.get(&language_id)
    }

    pub fn bank_by_id_mut(&mut self, language_id: i32) -> Option<&mut SubtitleBank> {
        self.banks.get_mut(&language_id)
    }

    pub fn scene_groups(&self) -> Option<&SceneGroups> {
        self.scene_groups.as_ref()
    }

    pub fn scene_groups_mut(&mut self) -> Option<&mut SceneGroups> {
        self.scene_groups.as_mut()
    }

    pub fn set_scene_groups(&mut self, scene_groups: SceneGroups) {
        self.scene_groups = Some(scene_groups);
    }

    /// Copy each scene's group and group position from the scene grouping
    ///
    /// Does nothing when no grouping is attached.
    pub fn assign_sorting_groups(&mut self) {
        let Some(groups) = &self.scene_groups else {
            return;
        };

        for bank in self.banks.values_mut() {
            for scene in bank.scenes.values_mut() {
                let group = groups.find_group(scene.name());
                scene.sorting_group_index = groups.find_group_index(group);
                scene.sorting_group = group.to_string();
            }
        }
    }
}
