use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, info};

use crate::csv_io;
use crate::error::Result;
use crate::types::{Row, WORD};

/// Column names searched, in order, for a word in an external word list.
pub const WORD_LIST_COLUMNS: &[&str] = &["ngram", WORD];

/// Lowercase words that count as real. Built once at startup, read-only after.
#[derive(Debug, Clone, Default)]
pub struct ValidWordIndex {
    words: HashSet<String>,
}

impl ValidWordIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index every non-blank `word` of the input dataset.
    pub fn from_rows(rows: &[Row]) -> Self {
        let mut index = Self::new();
        for row in rows {
            index.insert(row.word());
        }
        index
    }

    /// Build from the dataset plus, when given and present, an external word list.
    pub fn build(rows: &[Row], word_list: Option<&Path>) -> Result<Self> {
        let mut index = Self::from_rows(rows);
        if let Some(path) = word_list {
            index.load_word_list(path)?;
        }
        Ok(index)
    }

    /// Add every alphabetic token from a CSV word list (an `ngram` or `word`
    /// column). A missing file is skipped. Returns the number of words added.
    pub fn load_word_list(&mut self, path: &Path) -> Result<usize> {
        if !path.exists() {
            debug!("Word list {} not found, skipping", path.display());
            return Ok(0);
        }
        let before = self.words.len();
        for word in csv_io::read_words(path, WORD_LIST_COLUMNS)? {
            if word.chars().all(char::is_alphabetic) {
                self.words.insert(word);
            }
        }
        info!(
            "Loaded extra dictionary from {}, {} total valid words",
            path.display(),
            self.words.len()
        );
        Ok(self.words.len() - before)
    }

    /// Insert a word (trimmed, lowercased). Blank words are ignored.
    pub fn insert(&mut self, word: &str) {
        let w = word.trim().to_lowercase();
        if !w.is_empty() {
            self.words.insert(w);
        }
    }

    /// Case-insensitive membership.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.trim().to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Lowercase base words of the input dataset. A derived variant may never take
/// one of these, since the base row itself carries the authored entry.
#[derive(Debug, Clone, Default)]
pub struct BaseWords {
    words: HashSet<String>,
}

impl BaseWords {
    pub fn from_rows(rows: &[Row]) -> Self {
        Self {
            words: rows
                .iter()
                .map(|r| r.word().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.trim().to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
