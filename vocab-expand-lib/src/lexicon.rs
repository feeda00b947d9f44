// External inflection provider backed by a lexicon file.
//
// The file is a CSV with `lemma,tag,form` columns, one inflected form per line,
// tagged with Penn Treebank tags: VBD (past), VBG (present participle),
// NNS (plural). Other tags are ignored.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::Result;
use crate::inflect::{NounInflector, VerbInflector};

#[derive(Debug, Deserialize)]
struct LexiconRecord {
    lemma: String,
    tag: String,
    form: String,
}

/// Lexicon-backed inflector. Words it has no entry for get `None`, letting a
/// fallback answer.
#[derive(Debug, Clone, Default)]
pub struct LexiconInflector {
    past: HashMap<String, String>,
    present_participle: HashMap<String, String>,
    plural: HashMap<String, String>,
    plural_forms: HashSet<String>,
}

fn clean(s: &str) -> Option<String> {
    let s = s.trim().to_lowercase();
    (!s.is_empty() && s.chars().all(char::is_alphabetic)).then_some(s)
}

impl LexiconInflector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a lexicon CSV. Rows with blank or non-alphabetic lemma/form are skipped.
    pub fn from_path(path: &Path) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(path)?;

        let mut lexicon = Self::new();
        let mut skipped = 0usize;
        for record in reader.deserialize::<LexiconRecord>() {
            let record = record?;
            if !lexicon.insert(&record.lemma, &record.tag, &record.form) {
                skipped += 1;
            }
        }
        info!(
            "Loaded inflection lexicon from {} ({} entries)",
            path.display(),
            lexicon.len()
        );
        if skipped > 0 {
            debug!("Skipped {skipped} unusable lexicon rows");
        }
        Ok(lexicon)
    }

    /// Record one inflected form. Returns false if the entry was not usable.
    pub fn insert(&mut self, lemma: &str, tag: &str, form: &str) -> bool {
        let (Some(lemma), Some(form)) = (clean(lemma), clean(form)) else {
            return false;
        };
        match tag.trim().to_uppercase().as_str() {
            "VBD" => {
                self.past.insert(lemma, form);
            }
            "VBG" => {
                self.present_participle.insert(lemma, form);
            }
            "NNS" => {
                self.plural_forms.insert(form.clone());
                self.plural.insert(lemma, form);
            }
            _ => return false,
        }
        true
    }

    pub fn len(&self) -> usize {
        self.past.len() + self.present_participle.len() + self.plural.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl VerbInflector for LexiconInflector {
    fn past(&self, verb: &str) -> Option<String> {
        self.past.get(&verb.trim().to_lowercase()).cloned()
    }

    fn present_participle(&self, verb: &str) -> Option<String> {
        self.present_participle
            .get(&verb.trim().to_lowercase())
            .cloned()
    }
}

impl NounInflector for LexiconInflector {
    fn plural(&self, noun: &str) -> Option<String> {
        self.plural.get(&noun.trim().to_lowercase()).cloned()
    }

    fn is_plural(&self, noun: &str) -> bool {
        self.plural_forms.contains(&noun.trim().to_lowercase())
    }
}
