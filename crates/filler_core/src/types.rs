use std::collections::HashMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// A single `{word, category}` record, as stored in the word bank.
///
/// Filler entries use the same shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    pub category: String,
}

impl WordEntry {
    pub fn new(word: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            category: category.into(),
        }
    }
}

/// Per-category occurrence counts, iterated in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryCounts {
    entries: Vec<(String, usize)>,
    positions: HashMap<String, usize>,
}

impl CategoryCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn increment(&mut self, category: &str) {
        match self.positions.get(category) {
            Some(&pos) => self.entries[pos].1 += 1,
            None => {
                self.positions
                    .insert(category.to_string(), self.entries.len());
                self.entries.push((category.to_string(), 1));
            }
        }
    }

    pub fn get(&self, category: &str) -> Option<usize> {
        self.positions.get(category).map(|&pos| self.entries[pos].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the number of tallied entries.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.entries
            .iter()
            .map(|(category, count)| (category.as_str(), *count))
    }
}

impl Serialize for CategoryCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (category, count) in &self.entries {
            map.serialize_entry(category, count)?;
        }
        map.end()
    }
}

/// Existing words per category, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryIndex {
    words: HashMap<String, Vec<String>>,
}

impl CategoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, entry: &WordEntry) {
        self.words
            .entry(entry.category.clone())
            .or_default()
            .push(entry.word.clone());
    }

    /// Words already present in `category`; empty for unknown categories.
    pub fn words(&self, category: &str) -> &[String] {
        self.words.get(category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, category: &str, word: &str) -> bool {
        self.words(category).iter().any(|w| w == word)
    }
}
