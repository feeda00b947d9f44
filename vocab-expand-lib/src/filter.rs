// Duplicate tracking and candidate acceptance.

use std::collections::HashSet;

use crate::dictionary::{BaseWords, ValidWordIndex};

/// Words already present in the output, this session or an earlier one.
/// Only ever grows.
#[derive(Debug, Clone, Default)]
pub struct WrittenWordSet {
    words: HashSet<String>,
}

impl WrittenWordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a word as written. Returns false if it was already there.
    pub fn insert(&mut self, word: &str) -> bool {
        let w = word.trim().to_lowercase();
        if w.is_empty() {
            return false;
        }
        self.words.insert(w)
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

impl<S: AsRef<str>> Extend<S> for WrittenWordSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for w in iter {
            self.insert(w.as_ref());
        }
    }
}

/// Why a candidate was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Empty,
    AlreadyWritten,
    NotAWord,
    BaseWord,
}

/// Decides whether a derived variant may become an output row.
pub struct CandidateFilter<'a> {
    valid: &'a ValidWordIndex,
    base: &'a BaseWords,
}

impl<'a> CandidateFilter<'a> {
    pub fn new(valid: &'a ValidWordIndex, base: &'a BaseWords) -> Self {
        Self { valid, base }
    }

    /// Check a candidate against the written set, the valid-word index and the
    /// input's base words, in that order.
    pub fn check(&self, word: &str, written: &WrittenWordSet) -> Result<(), Rejection> {
        let w = word.trim().to_lowercase();
        if w.is_empty() {
            return Err(Rejection::Empty);
        }
        if written.contains(&w) {
            return Err(Rejection::AlreadyWritten);
        }
        if !self.valid.contains(&w) {
            return Err(Rejection::NotAWord);
        }
        if self.base.contains(&w) {
            return Err(Rejection::BaseWord);
        }
        Ok(())
    }
}
