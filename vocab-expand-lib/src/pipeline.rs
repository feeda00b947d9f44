// Resumable variant expansion over a vocabulary CSV.
//
// One pass, in file order: copy each input row, derive its variants, keep the
// ones the filter accepts, and save a checkpoint every `interval` rows. A rerun
// with the same checkpoint and output picks up after the last checkpointed row;
// rebuilding the written-word set from the existing output keeps replayed rows
// from duplicating anything.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::checkpoint::Checkpoint;
use crate::csv_io::{self, RowWriter};
use crate::dictionary::{BaseWords, ValidWordIndex};
use crate::error::Result;
use crate::filter::{CandidateFilter, WrittenWordSet};
use crate::inflect::{self, NounInflector, VerbInflector};
use crate::lexicon::LexiconInflector;
use crate::output::{output_columns, variant_row};
use crate::plural::is_already_plural;
use crate::types::*;

pub const DEFAULT_INPUT: &str = "words_processed.csv";
pub const DEFAULT_OUTPUT: &str = "words_processed_expanded.csv";
pub const DEFAULT_CHECKPOINT: &str = "word_variants_checkpoint.json";
pub const DEFAULT_INTERVAL: usize = 500;

/// Everything a run needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub checkpoint: PathBuf,
    /// Save a checkpoint every this many input rows. Zero is treated as one.
    pub interval: usize,
    /// Optional extra word list for the valid-word index.
    pub dictionary: Option<PathBuf>,
    /// Optional inflection lexicon consulted before the rules.
    pub lexicon: Option<PathBuf>,
    /// Process only the first N input rows.
    pub limit: Option<usize>,
}

impl Default for ExpandConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            checkpoint: PathBuf::from(DEFAULT_CHECKPOINT),
            interval: DEFAULT_INTERVAL,
            dictionary: None,
            lexicon: None,
            limit: None,
        }
    }
}

/// Counters reported at the end of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub resumed: bool,
    pub start_index: usize,
    pub total_rows: usize,
    pub rows_processed: usize,
    pub originals_written: usize,
    /// Original rows not rewritten because their word was already in the output.
    pub originals_skipped: usize,
    pub variants_written: usize,
    pub checkpoints_saved: usize,
}

/// The pipeline driver, holding the inflectors chosen at startup.
pub struct Expander {
    verbs: Box<dyn VerbInflector>,
    nouns: Box<dyn NounInflector>,
}

impl Expander {
    pub fn new(verbs: Box<dyn VerbInflector>, nouns: Box<dyn NounInflector>) -> Self {
        Self { verbs, nouns }
    }

    /// Rule-based inflection only.
    pub fn with_rules() -> Self {
        Self::new(
            inflect::verb_inflector::<LexiconInflector>(None),
            inflect::noun_inflector::<LexiconInflector>(None),
        )
    }

    /// Pick inflectors from the config: the lexicon in front of the rules when
    /// one is configured and present, the rules alone otherwise.
    pub fn from_config(config: &ExpandConfig) -> Result<Self> {
        let provider = match &config.lexicon {
            Some(path) if path.exists() => Some(LexiconInflector::from_path(path)?),
            Some(path) => {
                warn!(
                    "Lexicon {} not found; using rule-based inflection",
                    path.display()
                );
                None
            }
            None => None,
        };
        Ok(Self::new(
            inflect::verb_inflector(provider.clone()),
            inflect::noun_inflector(provider),
        ))
    }

    /// Variant candidates for one row, before filtering: the plural for nouns
    /// that are not already plural, past and -ing forms for verbs.
    pub fn candidates(&self, row: &Row) -> Vec<VariantCandidate> {
        let word = row.word();
        if word.is_empty() {
            return Vec::new();
        }
        let lower = word.to_lowercase();
        let pos = row.pos();
        let candidate = |form: String, kind: VariantKind| VariantCandidate {
            word: form.to_lowercase(),
            kind,
            source_word: word.to_string(),
            pos: pos.clone(),
        };

        let mut out = Vec::new();
        match row.part_of_speech() {
            PartOfSpeech::Noun => {
                if !is_already_plural(self.nouns.as_ref(), word, row.definition()) {
                    if let Some(plural) = self.nouns.plural(&lower) {
                        if plural.to_lowercase() != lower {
                            out.push(candidate(plural, VariantKind::Plural));
                        }
                    }
                }
            }
            PartOfSpeech::Verb => {
                if let Some(past) = self.verbs.past(&lower) {
                    out.push(candidate(past, VariantKind::Past));
                }
                if let Some(ing) = self.verbs.present_participle(&lower) {
                    out.push(candidate(ing, VariantKind::Ing));
                }
            }
            PartOfSpeech::Other => {}
        }
        out
    }

    /// Run the expansion described by `config`.
    pub fn run(&self, config: &ExpandConfig) -> Result<RunSummary> {
        let dataset = csv_io::read_dataset(&config.input)?;
        if !dataset.columns.is_empty() && !dataset.has_column(WORD) {
            warn!(
                "{} has no '{WORD}' column; rows will be copied without variants",
                config.input.display()
            );
        }

        // Both indexes cover the whole input, even when a limit bounds the run.
        let valid = ValidWordIndex::build(&dataset.rows, config.dictionary.as_deref())?;
        let base = BaseWords::from_rows(&dataset.rows);
        let filter = CandidateFilter::new(&valid, &base);
        debug!("Valid-word index holds {} words", valid.len());

        let rows = match config.limit {
            Some(n) => &dataset.rows[..n.min(dataset.rows.len())],
            None => &dataset.rows[..],
        };
        let total = rows.len();
        let interval = config.interval.max(1);
        let columns = output_columns(&dataset.columns);

        let mut summary = RunSummary {
            total_rows: total,
            ..RunSummary::default()
        };
        let mut written = WrittenWordSet::new();

        let mut writer = match Checkpoint::load(&config.checkpoint) {
            Some(cp) => {
                summary.resumed = true;
                summary.start_index = cp.resume_index();
                // An ungraceful exit may have left a half-written row behind.
                written.extend(csv_io::truncate_torn_tail(&config.output, WORD)?);
                let has_output = has_content(&config.output);
                info!(
                    "Resuming from row {} (checkpoint: last_processed_index={}, {} words already written)",
                    summary.start_index,
                    cp.last_processed_index,
                    written.len()
                );
                RowWriter::append(&config.output, columns, !has_output)?
            }
            None => RowWriter::create(&config.output, columns)?,
        };

        for (i, row) in rows.iter().enumerate().skip(summary.start_index) {
            self.process_row(row, &filter, &mut written, &mut writer, &mut summary)?;
            summary.rows_processed += 1;

            if (i + 1) % interval == 0 {
                // Rows must reach the file before the checkpoint names them.
                writer.flush()?;
                Checkpoint::new(i, total).save(&config.checkpoint)?;
                summary.checkpoints_saved += 1;
                info!("Processed {}/{} rows, checkpoint saved.", i + 1, total);
            }
        }

        writer.flush()?;
        if total > 0 {
            Checkpoint::new(total - 1, total).save(&config.checkpoint)?;
            summary.checkpoints_saved += 1;
        }
        info!(
            "Done. Processed {} rows ({} new variants). Output: {}",
            total,
            summary.variants_written,
            config.output.display()
        );
        Ok(summary)
    }

    /// Write one input row and its accepted variants.
    fn process_row(
        &self,
        row: &Row,
        filter: &CandidateFilter<'_>,
        written: &mut WrittenWordSet,
        writer: &mut RowWriter,
        summary: &mut RunSummary,
    ) -> Result<()> {
        let word = row.word();
        if word.is_empty() || written.insert(word) {
            writer.write_row(row)?;
            summary.originals_written += 1;
        } else {
            debug!("'{word}' already in output, not rewriting its row");
            summary.originals_skipped += 1;
        }

        for candidate in self.candidates(row) {
            match filter.check(&candidate.word, written) {
                Ok(()) => {
                    writer.write_row(&variant_row(&candidate, row.rarity()))?;
                    written.insert(&candidate.word);
                    summary.variants_written += 1;
                }
                Err(reason) => {
                    debug!(
                        "Rejected {:?} '{}' of '{}': {reason:?}",
                        candidate.kind, candidate.word, candidate.source_word
                    );
                }
            }
        }
        Ok(())
    }
}

/// Run the expansion with inflectors chosen from `config`.
pub fn run(config: &ExpandConfig) -> Result<RunSummary> {
    Expander::from_config(config)?.run(config)
}

fn has_content(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.len() > 0).unwrap_or(false)
}
