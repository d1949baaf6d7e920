//! Scene grouping for authoring tools
//!
//! Assigns scene names to named groups and keeps the display order of those
//! groups. The grouping does not depend on any language's subtitle content.
//!
//! # Asset format
//!
//! ```json
//! {
//!   "_groups": ["village1", "beach"],
//!   "village1": ["sage-intro", "farmer-intro"],
//!   "beach": ["bird-lady-intro"]
//! }
//! ```

use std::path::Path;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::utils::read_json_file;

/// Key of the group order list in asset files
pub const DEFAULT_GROUP_ORDER_KEY: &str = "_groups";
/// Group reported for scenes that belong to no group
pub const DEFAULT_UNCATEGORIZED_GROUP: &str = "uncategorized";

/// Scene-to-group assignment and group display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneGroups {
    /// Display order; the first slot holds the order key
    group_order: Vec<String>,
    groups: IndexMap<String, Vec<String>>,
    pub group_order_key: String,
    pub uncategorized_group: String,
}

impl Default for SceneGroups {
    fn default() -> Self {
        Self::with_keys(DEFAULT_GROUP_ORDER_KEY, DEFAULT_UNCATEGORIZED_GROUP)
    }
}

impl SceneGroups {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty grouping with custom order key and fallback group names
    pub fn with_keys(
        group_order_key: impl Into<String>,
        uncategorized_group: impl Into<String>,
    ) -> Self {
        let group_order_key = group_order_key.into();
        Self {
            group_order: vec![group_order_key.clone()],
            groups: IndexMap::new(),
            group_order_key,
            uncategorized_group: uncategorized_group.into(),
        }
    }

    pub fn group_order(&self) -> &[String] {
        &self.group_order
    }

    pub fn groups(&self) -> &IndexMap<String, Vec<String>> {
        &self.groups
    }

    /// Scenes of a group in display order, empty for unknown groups
    pub fn scenes_in(&self, group_name: &str) -> &[String] {
        self.groups.get(group_name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Group holding the scene, or the uncategorized group
    pub fn find_group(&self, scene_name: &str) -> &str {
        self.groups
            .iter()
            .find(|(_, scenes)| scenes.iter().any(|s| s == scene_name))
            .map_or(self.uncategorized_group.as_str(), |(group, _)| group.as_str())
    }

    /// Position of the group in the display order
    pub fn find_group_index(&self, group_name: &str) -> Option<usize> {
        self.group_order.iter().position(|g| g == group_name)
    }

    /// Append a scene to a group, creating the group at the end of the order
    ///
    /// Adding a scene that is already in the group does nothing. The scene is not
    /// removed from any other group; see [`move_scene`](Self::move_scene). The order
    /// key is not a group and is ignored.
    pub fn add_scene(&mut self, group_name: &str, scene_name: &str) {
        if group_name == self.group_order_key {
            tracing::warn!("Cannot add scene '{scene_name}' to reserved group '{group_name}'");
            return;
        }
        if self.find_group_index(group_name).is_none() {
            self.group_order.push(group_name.to_string());
        }

        let scenes = self.groups.entry(group_name.to_string()).or_default();
        if !scenes.iter().any(|s| s == scene_name) {
            scenes.push(scene_name.to_string());
        }
    }

    /// Drop a scene from a group; unknown groups or scenes are ignored
    pub fn remove_scene(&mut self, group_name: &str, scene_name: &str) {
        if let Some(scenes) = self.groups.get_mut(group_name) {
            scenes.retain(|s| s != scene_name);
        }
    }

    /// Reassign a scene to `new_group`, taking it out of its current group first
    pub fn move_scene(&mut self, scene_name: &str, new_group: &str) {
        let old_group = self.find_group(scene_name).to_string();
        self.remove_scene(&old_group, scene_name);
        self.add_scene(new_group, scene_name);
    }

    /// Replace the grouping with the contents of an asset document
    ///
    /// Groups listed under the order key come first, in that order; groups that only
    /// appear as keys follow. A scene listed in more than one group stays in the first.
    ///
    /// # Errors
    /// Returns [`Error::InvalidFormat`] if the document is not an object of string
    /// lists. The grouping is left unchanged in that case.
    pub fn hydrate_from_json(&mut self, json: &Value) -> Result<()> {
        let object = json
            .as_object()
            .ok_or_else(|| Error::InvalidFormat("scene groups document is not an object".into()))?;

        let listed_order = match object.get(&self.group_order_key) {
            Some(value) => string_list(&self.group_order_key, value)?,
            None => Vec::new(),
        };
        let mut members = Vec::with_capacity(object.len());
        for (group, value) in object {
            if *group != self.group_order_key {
                members.push((group.as_str(), string_list(group, value)?));
            }
        }

        let mut hydrated =
            Self::with_keys(self.group_order_key.clone(), self.uncategorized_group.clone());
        for group in listed_order {
            if hydrated.find_group_index(group).is_none() {
                hydrated.group_order.push(group.to_string());
                hydrated.groups.insert(group.to_string(), Vec::new());
            }
        }
        for (group, scenes) in members {
            if hydrated.find_group_index(group).is_none() {
                hydrated.group_order.push(group.to_string());
            }
            hydrated.groups.entry(group.to_string()).or_default();
            for scene in scenes {
                let assigned = hydrated
                    .groups
                    .values()
                    .any(|listed| listed.iter().any(|s| s == scene));
                if assigned {
                    tracing::warn!(
                        "Scene '{scene}' listed in '{group}' is already in '{}', skipping",
                        hydrated.find_group(scene)
                    );
                    continue;
                }
                hydrated.add_scene(group, scene);
            }
        }

        *self = hydrated;
        tracing::debug!("Hydrated {} scene groups", self.groups.len());
        Ok(())
    }

    /// Load the grouping from an asset file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a groups document.
    pub fn hydrate_from_asset_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let json: Value = read_json_file(&path)?;
        self.hydrate_from_json(&json)?;
        tracing::info!("Loaded scene groups from {}", path.as_ref().display());
        Ok(())
    }

    /// Asset document describing this grouping
    pub fn to_json(&self) -> Value {
        let mut object = Map::new();
        let order: Vec<Value> = self
            .group_order
            .iter()
            .filter(|g| **g != self.group_order_key)
            .map(|g| Value::String(g.clone()))
            .collect();
        object.insert(self.group_order_key.clone(), Value::Array(order));

        for group in self.group_order.iter().filter(|g| **g != self.group_order_key) {
            if let Some(scenes) = self.groups.get(group) {
                let scenes = scenes.iter().map(|s| Value::String(s.clone())).collect();
                object.insert(group.clone(), Value::Array(scenes));
            }
        }
        Value::Object(object)
    }

    /// Write the grouping as a pretty-printed asset file
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn save_asset_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.to_json())?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

fn string_list<'a>(key: &str, value: &'a Value) -> Result<Vec<&'a str>> {
    let invalid = || Error::InvalidFormat(format!("scene group '{key}' is not a list of strings"));
    value
        .as_array()
        .ok_or_else(invalid)?
        .iter()
        .map(|v| v.as_str().ok_or_else(invalid))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_add_scene_creates_group() {
        let mut groups = SceneGroups::new();
        assert_eq!(groups.group_order(), ["_groups"]);

        groups.add_scene("intro_movies", "intro");

        assert_eq!(groups.group_order(), ["_groups", "intro_movies"]);
        assert_eq!(groups.find_group_index("intro_movies"), Some(1));
        assert_eq!(groups.find_group("intro"), "intro_movies");
    }

    #[test]
    fn test_add_scene_idempotent() {
        let mut groups = SceneGroups::new();
        groups.add_scene("movies", "intro");
        groups.add_scene("movies", "intro");

        assert_eq!(groups.scenes_in("movies"), ["intro"]);
        assert_eq!(groups.group_order().len(), 2);
    }

    #[test]
    fn test_remove_scene_falls_back() {
        let mut groups = SceneGroups::new();
        groups.add_scene("movies", "intro");
        groups.remove_scene("movies", "intro");

        assert_eq!(groups.find_group("intro"), "uncategorized");
        // Group stays in the order even when empty
        assert_eq!(groups.find_group_index("movies"), Some(1));
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut groups = SceneGroups::new();
        groups.add_scene("movies", "intro");
        let before = groups.clone();

        groups.remove_scene("hints", "intro");
        groups.remove_scene("movies", "outro");

        assert_eq!(groups, before);
    }

    #[test]
    fn test_order_key_is_not_a_group() {
        let mut groups = SceneGroups::new();
        groups.add_scene("_groups", "intro");
        groups.add_scene("movies", "outro");

        assert_eq!(groups.find_group("intro"), "uncategorized");
        assert!(!groups.groups().contains_key("_groups"));
        assert_eq!(groups.group_order(), ["_groups", "movies"]);

        let doc = groups.to_json();
        assert_eq!(doc["_groups"], json!(["movies"]));

        let mut restored = SceneGroups::new();
        restored.hydrate_from_json(&doc).unwrap();
        assert_eq!(restored.group_order(), ["_groups", "movies"]);
        assert_eq!(restored.find_group("outro"), "movies");
    }

    #[test]
    fn test_find_group_index_missing() {
        let groups = SceneGroups::new();
        assert_eq!(groups.find_group_index("nope"), None);
        assert_eq!(groups.find_group_index("_groups"), Some(0));
    }

    #[test]
    fn test_move_scene() {
        let mut groups = SceneGroups::new();
        groups.add_scene("village1", "sage-intro");
        groups.add_scene("village1", "farmer-intro");

        groups.move_scene("sage-intro", "beach");

        assert_eq!(groups.find_group("sage-intro"), "beach");
        assert_eq!(groups.scenes_in("village1"), ["farmer-intro"]);

        groups.move_scene("loose-scene", "beach");
        assert_eq!(groups.scenes_in("beach"), ["sage-intro", "loose-scene"]);
    }

    #[test]
    fn test_hydrate_from_json() {
        let mut groups = SceneGroups::new();
        groups.add_scene("stale", "old-scene");

        groups
            .hydrate_from_json(&json!({
                "_groups": ["village1", "beach", "empty"],
                "beach": ["bird-lady-intro"],
                "village1": ["sage-intro", "farmer-intro"],
                "extra": ["sage-intro", "fisher-intro"]
            }))
            .unwrap();

        assert_eq!(
            groups.group_order(),
            ["_groups", "village1", "beach", "empty", "extra"]
        );
        assert_eq!(groups.find_group("old-scene"), "uncategorized");
        assert_eq!(groups.find_group("sage-intro"), "village1");
        assert_eq!(groups.scenes_in("extra"), ["fisher-intro"]);
        assert!(groups.scenes_in("empty").is_empty());
        let keys: Vec<&String> = groups.groups().keys().collect();
        assert_eq!(keys, ["village1", "beach", "empty", "extra"]);
    }

    #[test]
    fn test_hydrate_rejects_bad_shape() {
        let mut groups = SceneGroups::new();
        groups.add_scene("movies", "intro");
        let before = groups.clone();

        assert!(groups.hydrate_from_json(&json!({ "movies": "intro" })).is_err());
        assert!(groups.hydrate_from_json(&json!([1, 2])).is_err());
        assert_eq!(groups, before);
    }

    #[test]
    fn test_to_json_round_trip() {
        let mut groups = SceneGroups::new();
        groups.add_scene("village1", "sage-intro");
        groups.add_scene("beach", "bird-lady-intro");

        let doc = groups.to_json();
        assert_eq!(doc["_groups"], json!(["village1", "beach"]));

        let mut restored = SceneGroups::new();
        restored.hydrate_from_json(&doc).unwrap();
        assert_eq!(restored, groups);
    }
}
