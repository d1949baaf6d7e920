//! Game text banks
//!
//! A text bank holds every numbered line of one language. The text database
//! partitions banks into named text groups, with one bank per language per group.

mod json;

pub use json::{DEFAULT_TEXT_GROUP, parse_text_json, read_text_json};

use std::collections::BTreeMap;

use indexmap::IndexMap;

use crate::error::{Error, Result};

/// All lines (accessed by id) for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBank {
    language_id: i32,
    lines: BTreeMap<i32, String>,
}

impl TextBank {
    /// Create an empty bank for a language
    #[must_use]
    pub fn new(language_id: i32) -> Self {
        Self {
            language_id,
            lines: BTreeMap::new(),
        }
    }

    pub fn lang(&self) -> i32 {
        self.language_id
    }

    /// Lines in ascending id order
    pub fn lines(&self) -> &BTreeMap<i32, String> {
        &self.lines
    }

    pub fn line_exists(&self, id: i32) -> bool {
        self.lines.contains_key(&id)
    }

    /// Look up a line by id
    ///
    /// # Errors
    /// Returns [`Error::LineNotFound`] if the bank has no line with this id.
    pub fn line(&self, id: i32) -> Result<&str> {
        self.lines
            .get(&id)
            .map(String::as_str)
            .ok_or(Error::LineNotFound {
                id,
                language: self.language_id,
            })
    }

    /// Insert or overwrite a line
    pub fn set_line(&mut self, id: i32, text: impl Into<String>) {
        self.lines.insert(id, text.into());
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Text banks for every language of every text group.
#[derive(Debug, Clone, Default)]
pub struct TextDatabase {
    groups: IndexMap<String, BTreeMap<i32, TextBank>>,
}

impl TextDatabase {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every group with its banks keyed by language id
    pub fn groups(&self) -> &IndexMap<String, BTreeMap<i32, TextBank>> {
        &self.groups
    }

    /// Banks of a single group, `None` if the group was never created
    pub fn banks(&self, group: &str) -> Option<&BTreeMap<i32, TextBank>> {
        self.groups.get(group)
    }

    pub fn bank_exists(&self, group: &str, language_id: i32) -> bool {
        self.groups
            .get(group)
            .is_some_and(|banks| banks.contains_key(&language_id))
    }

    /// Store a bank under a group
    ///
    /// # Errors
    /// Returns [`Error::DuplicateTextBank`] if the group already has a bank for the
    /// bank's language. The database is left unchanged in that case.
    pub fn add_bank(&mut self, group: &str, bank: TextBank) -> Result<&mut TextBank> {
        let language = bank.lang();
        if self.bank_exists(group, language) {
            return Err(Error::DuplicateTextBank {
                group: group.to_string(),
                language,
            });
        }

        tracing::debug!("Adding text bank for language {language} to group '{group}'");
        let banks = self.groups.entry(group.to_string()).or_default();
        Ok(banks.entry(language).or_insert(bank))
    }

    pub fn bank_by_id(&self, group: &str, language_id: i32) -> Option<&TextBank> {
        self.groups.get(group)?.get(&language_id)
    }

    pub fn bank_by_id_mut(&mut self, group: &str, language_id: i32) -> Option<&mut TextBank> {
        self.groups.get_mut(group)?.get_mut(&language_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_line_upserts() {
        let mut bank = TextBank::new(0);
        bank.set_line(5, "Hello");
        bank.set_line(5, "Goodbye");

        assert_eq!(bank.len(), 1);
        assert_eq!(bank.line(5).unwrap(), "Goodbye");
    }

    #[test]
    fn test_line_missing() {
        let bank = TextBank::new(3);
        assert!(!bank.line_exists(7));

        let err = bank.line(7).unwrap_err();
        assert!(err.is_not_found());
        assert!(matches!(err, Error::LineNotFound { id: 7, language: 3 }));
    }

    #[test]
    fn test_lines_iterate_by_id() {
        let mut bank = TextBank::new(0);
        bank.set_line(0x300, "c");
        bank.set_line(0x10, "a");
        bank.set_line(0x200, "b");

        let ids: Vec<i32> = bank.lines().keys().copied().collect();
        assert_eq!(ids, vec![0x10, 0x200, 0x300]);
    }

    #[test]
    fn test_duplicate_bank_rejected() {
        let mut db = TextDatabase::new();
        db.add_bank("main", TextBank::new(0))
            .unwrap()
            .set_line(5, "Hello");

        let err = db.add_bank("main", TextBank::new(0)).unwrap_err();
        assert!(err.is_duplicate_key());

        // First bank survives untouched
        let bank = db.bank_by_id("main", 0).unwrap();
        assert_eq!(bank.line(5).unwrap(), "Hello");
        assert!(db.bank_by_id("main", 1).is_none());
    }

    #[test]
    fn test_same_language_in_other_group() {
        let mut db = TextDatabase::new();
        db.add_bank("main", TextBank::new(0)).unwrap();
        db.add_bank("credits", TextBank::new(0)).unwrap();

        assert!(db.bank_exists("main", 0));
        assert!(db.bank_exists("credits", 0));
        assert!(!db.bank_exists("missing", 0));
        assert!(db.banks("missing").is_none());
        assert_eq!(db.groups().len(), 2);
    }
}
