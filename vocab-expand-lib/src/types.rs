use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// Column names recognised in the vocabulary CSV. Lookups are case-sensitive,
// matching the headers the dataset tools write.
pub const WORD: &str = "word";
pub const POS: &str = "pos";
pub const RARITY: &str = "rarity";
pub const DEFINITION: &str = "Definition";
pub const SENTENCE: &str = "Sentence";

/// Header used for the output when the input had none.
pub const DEFAULT_COLUMNS: &[&str] = &[WORD, RARITY, POS, DEFINITION, SENTENCE];

/// Coarse part of speech, as far as variant generation cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Other,
}

impl PartOfSpeech {
    /// Classify a `pos` cell. Comparison is trimmed and case-insensitive.
    pub fn parse(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "noun" => PartOfSpeech::Noun,
            "verb" => PartOfSpeech::Verb,
            _ => PartOfSpeech::Other,
        }
    }
}

/// One dataset row. Every column read from the input is kept, so rows copied
/// verbatim carry unrecognised columns through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    fields: HashMap<String, String>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter, handy for assembling variant rows.
    pub fn with(mut self, column: &str, value: impl Into<String>) -> Self {
        self.set(column, value);
        self
    }

    pub fn set(&mut self, column: &str, value: impl Into<String>) {
        self.fields.insert(column.to_string(), value.into());
    }

    /// Raw cell value; empty when the column is absent.
    pub fn get(&self, column: &str) -> &str {
        self.fields.get(column).map(String::as_str).unwrap_or("")
    }

    /// The entry's surface form, trimmed.
    pub fn word(&self) -> &str {
        self.get(WORD).trim()
    }

    /// Trimmed, lowercased part-of-speech tag.
    pub fn pos(&self) -> String {
        self.get(POS).trim().to_lowercase()
    }

    pub fn part_of_speech(&self) -> PartOfSpeech {
        PartOfSpeech::parse(self.get(POS))
    }

    pub fn rarity(&self) -> &str {
        self.get(RARITY)
    }

    pub fn definition(&self) -> &str {
        self.get(DEFINITION)
    }

    pub fn sentence(&self) -> &str {
        self.get(SENTENCE)
    }

    /// Cell values in `columns` order, blank for columns this row lacks.
    pub fn values<'a>(&'a self, columns: &'a [String]) -> impl Iterator<Item = &'a str> + 'a {
        columns.iter().map(move |c| self.get(c))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Which grammatical variant a candidate is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantKind {
    Plural,
    Past,
    Ing,
}

impl VariantKind {
    /// Capitalised label used in the generated definition ("Plural of cat.").
    pub fn label(self) -> &'static str {
        match self {
            VariantKind::Plural => "Plural",
            VariantKind::Past => "Past",
            VariantKind::Ing => "Ing",
        }
    }
}

/// A derived word form waiting to be accepted or rejected by the filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantCandidate {
    /// Lowercase surface form of the variant.
    pub word: String,
    pub kind: VariantKind,
    /// The base word it was derived from, as written in the input.
    pub source_word: String,
    /// Lowercased part of speech of the source row.
    pub pos: String,
}

/// Stored forms of a verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerbForms {
    pub past: &'static str,
    pub past_participle: &'static str,
    pub present_participle: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_of_speech_case_insensitive() {
        assert_eq!(PartOfSpeech::parse("Noun"), PartOfSpeech::Noun);
        assert_eq!(PartOfSpeech::parse(" VERB "), PartOfSpeech::Verb);
        assert_eq!(PartOfSpeech::parse("adjective"), PartOfSpeech::Other);
        assert_eq!(PartOfSpeech::parse(""), PartOfSpeech::Other);
    }

    #[test]
    fn test_row_accessors() {
        let row = Row::new()
            .with(WORD, "  cat ")
            .with(POS, "Noun")
            .with(DEFINITION, "a small domesticated feline");
        assert_eq!(row.word(), "cat");
        assert_eq!(row.pos(), "noun");
        assert_eq!(row.part_of_speech(), PartOfSpeech::Noun);
        assert_eq!(row.rarity(), "");
        assert_eq!(row.definition(), "a small domesticated feline");
    }

    #[test]
    fn test_row_values_follow_column_order() {
        let row: Row = [(WORD, "cat"), ("extra", "x")].into_iter().collect();
        let columns = vec!["extra".to_string(), "missing".to_string(), WORD.to_string()];
        let values: Vec<&str> = row.values(&columns).collect();
        assert_eq!(values, vec!["x", "", "cat"]);
    }

    #[test]
    fn test_variant_labels() {
        assert_eq!(VariantKind::Plural.label(), "Plural");
        assert_eq!(VariantKind::Past.label(), "Past");
        assert_eq!(VariantKind::Ing.label(), "Ing");
    }
}
