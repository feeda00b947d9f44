use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;
use vocab_expand_lib::filters;
use vocab_expand_lib::pipeline::{self, DEFAULT_CHECKPOINT, DEFAULT_INPUT, DEFAULT_INTERVAL, DEFAULT_OUTPUT};
use vocab_expand_lib::{ExpandConfig, ExpandError, RunSummary};

#[derive(Parser)]
#[command(name = "vocab-expand", about = "Vocabulary CSV expansion and clean-up tools")]
struct Cli {
    /// Log level: trace, debug, info, warn or error. RUST_LOG overrides it.
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add plural, past tense and -ing rows. Resumable via checkpoint.
    Expand {
        /// Input CSV file.
        #[arg(short, long, default_value = DEFAULT_INPUT)]
        input: PathBuf,

        /// Output CSV file.
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,

        /// Checkpoint file path.
        #[arg(short = 'c', long = "checkpoint-file", default_value = DEFAULT_CHECKPOINT)]
        checkpoint: PathBuf,

        /// Save a checkpoint every N rows.
        #[arg(short = 'n', long = "checkpoint-interval", default_value_t = DEFAULT_INTERVAL)]
        interval: usize,

        /// Extra word list (CSV with an 'ngram' or 'word' column) for verification.
        #[arg(short, long)]
        dictionary: Option<PathBuf>,

        /// Inflection lexicon (CSV with lemma,tag,form) consulted before the rules.
        #[arg(long)]
        lexicon: Option<PathBuf>,

        /// Process only the first N rows.
        #[arg(short, long)]
        limit: Option<usize>,

        /// Pretty-print the JSON run summary.
        #[arg(long)]
        pretty: bool,
    },

    /// Drop all-caps acronym entries of the given lengths.
    RemoveAcronyms {
        /// Input CSV (must include a 'word' column).
        #[arg(long)]
        input: PathBuf,

        /// Output CSV.
        #[arg(long)]
        output: PathBuf,

        /// Comma-separated acronym lengths to remove.
        #[arg(long, default_value = "3,4")]
        lengths: String,
    },

    /// Keep only the first '|'-separated sentence in the Sentence column.
    TrimSentences {
        /// Input CSV.
        #[arg(long, default_value = DEFAULT_INPUT)]
        input: PathBuf,

        /// Output CSV. Defaults to <input>_single_sentence.<ext>.
        #[arg(long, conflicts_with = "in_place")]
        output: Option<PathBuf>,

        /// Overwrite the input file.
        #[arg(long)]
        in_place: bool,
    },

    /// Fill missing example sentences from the first gloss.
    FillExamples {
        /// Input CSV.
        #[arg(long)]
        input: PathBuf,

        /// Output CSV.
        #[arg(long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match cli.command {
        Command::Expand {
            input,
            output,
            checkpoint,
            interval,
            dictionary,
            lexicon,
            limit,
            pretty,
        } => {
            let config = ExpandConfig {
                input,
                output,
                checkpoint,
                interval,
                dictionary,
                lexicon,
                limit,
            };
            match pipeline::run(&config) {
                Ok(summary) => print_summary(&summary, pretty),
                // Reported, but not a failure: nothing was written.
                Err(ExpandError::MissingInput(path)) => {
                    error!("Input file not found: {}", path.display());
                    Ok(())
                }
                Err(e) => Err(anyhow::Error::new(e).context("variant expansion failed")),
            }
        }
        Command::RemoveAcronyms {
            input,
            output,
            lengths,
        } => {
            let lengths = filters::parse_lengths(&lengths)
                .with_context(|| format!("invalid --lengths '{lengths}'"))?;
            filters::remove_acronyms(&input, &output, &lengths)
                .with_context(|| format!("cannot filter {}", input.display()))?;
            Ok(())
        }
        Command::TrimSentences {
            input,
            output,
            in_place,
        } => {
            let output = if in_place {
                input.clone()
            } else {
                output.unwrap_or_else(|| filters::single_sentence_path(&input))
            };
            filters::trim_sentences(&input, &output)
                .with_context(|| format!("cannot trim sentences in {}", input.display()))?;
            Ok(())
        }
        Command::FillExamples { input, output } => {
            filters::fill_examples(&input, &output)
                .with_context(|| format!("cannot fill examples in {}", input.display()))?;
            Ok(())
        }
    }
}

fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "vocab_expand={level},vocab_expand_lib={level}",
            level = level.as_str().to_lowercase()
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn print_summary(summary: &RunSummary, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(summary)
    } else {
        serde_json::to_string(summary)
    };
    println!("{}", json.context("cannot serialize run summary")?);
    info!(
        "{} originals and {} variants written",
        summary.originals_written, summary.variants_written
    );
    Ok(())
}
