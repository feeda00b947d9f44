// Stateless single-pass row filters over the vocabulary CSV.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::csv_io;
use crate::error::{ExpandError, Result};
use crate::types::{Row, POS, SENTENCE, WORD};

pub const EXAMPLES: &str = "examples";
pub const GLOSSES: &str = "glosses";

// ---------------------------------------------------------------------------
// Acronym removal
// ---------------------------------------------------------------------------

/// True for all-caps alphabetic words whose length is in `lengths` ("NASA").
pub fn is_acronym(word: &str, lengths: &HashSet<usize>) -> bool {
    lengths.contains(&word.chars().count())
        && word.chars().all(char::is_alphabetic)
        && word.chars().any(char::is_uppercase)
        && !word.chars().any(char::is_lowercase)
}

/// Parse a comma-separated list of lengths ("3,4"). Blank items are skipped.
pub fn parse_lengths(spec: &str) -> std::result::Result<HashSet<usize>, std::num::ParseIntError> {
    spec.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect()
}

/// Copy `input` to `output` without acronym rows. Returns how many were removed.
pub fn remove_acronyms(input: &Path, output: &Path, lengths: &HashSet<usize>) -> Result<usize> {
    let data = read_with_header(input)?;
    let before = data.rows.len();
    let kept: Vec<Row> = data
        .rows
        .into_iter()
        .filter(|r| !is_acronym(r.get(WORD), lengths))
        .collect();
    let removed = before - kept.len();
    csv_io::write_dataset(output, &data.columns, &kept)?;
    info!("Removed acronyms: {removed}");
    info!("Wrote: {}", output.display());
    Ok(removed)
}

// ---------------------------------------------------------------------------
// Sentence trimming
// ---------------------------------------------------------------------------

/// Keep only the first of several `|`-separated sentences.
pub fn trim_sentence(text: &str) -> &str {
    text.split('|').next().unwrap_or("").trim()
}

/// `words.csv` → `words_single_sentence.csv`.
pub fn single_sentence_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match input.extension() {
        Some(ext) => format!("{stem}_single_sentence.{}", ext.to_string_lossy()),
        None => format!("{stem}_single_sentence"),
    };
    input.with_file_name(name)
}

/// Rewrite every `Sentence` cell to its first sentence. `output` may equal `input`.
pub fn trim_sentences(input: &Path, output: &Path) -> Result<usize> {
    let mut data = read_with_header(input)?;
    if !data.has_column(SENTENCE) {
        return Err(ExpandError::MissingColumn {
            column: SENTENCE.to_string(),
            path: input.to_path_buf(),
        });
    }
    let mut changed = 0;
    for row in &mut data.rows {
        let trimmed = trim_sentence(row.sentence()).to_string();
        if trimmed != row.sentence() {
            changed += 1;
        }
        row.set(SENTENCE, trimmed);
    }
    csv_io::write_dataset(output, &data.columns, &data.rows)?;
    info!("Trimmed {changed} sentences; wrote {}", output.display());
    Ok(changed)
}

// ---------------------------------------------------------------------------
// Example backfill
// ---------------------------------------------------------------------------

fn first_gloss(glosses: &str) -> &str {
    glosses.split(" | ").next().unwrap_or("").trim()
}

/// Collapse whitespace and make sure the text ends in sentence punctuation.
fn normalize_sentence(text: &str) -> String {
    let mut s = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if !s.is_empty() && !s.ends_with(['.', '!', '?']) {
        s.push('.');
    }
    s
}

/// Build an example sentence for `word` from its gloss.
pub fn make_sentence(word: &str, pos: &str, gloss: &str) -> String {
    if gloss.is_empty() {
        return normalize_sentence(&format!("{word} is a word"));
    }
    if pos == "verb" {
        if gloss.to_lowercase().starts_with("to ") {
            return normalize_sentence(&format!("To {word} is {gloss}"));
        }
        return normalize_sentence(&format!("To {word} is to {gloss}"));
    }
    normalize_sentence(&format!("{word} means {gloss}"))
}

/// Fill blank `examples` cells from the first gloss. Returns rows filled.
pub fn fill_examples(input: &Path, output: &Path) -> Result<usize> {
    let mut data = read_with_header(input)?;
    let mut filled = 0;
    for row in &mut data.rows {
        if !row.get(EXAMPLES).trim().is_empty() {
            continue;
        }
        let word = row.word().to_string();
        if word.is_empty() {
            continue;
        }
        let pos = row.get(POS).trim().to_lowercase();
        let gloss = first_gloss(row.get(GLOSSES).trim()).to_string();
        row.set(EXAMPLES, make_sentence(&word, &pos, &gloss));
        filled += 1;
    }
    csv_io::write_dataset(output, &data.columns, &data.rows)?;
    info!("Filled {filled} examples; wrote {}", output.display());
    Ok(filled)
}

fn read_with_header(input: &Path) -> Result<csv_io::Dataset> {
    let data = csv_io::read_dataset(input)?;
    if data.columns.is_empty() {
        return Err(ExpandError::MissingColumn {
            column: WORD.to_string(),
            path: input.to_path_buf(),
        });
    }
    Ok(data)
}
