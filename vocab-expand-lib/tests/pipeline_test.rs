// End-to-end runs of the expansion pipeline against files in a temp directory.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use vocab_expand_lib::csv_io::read_dataset;
use vocab_expand_lib::{run, Checkpoint, ExpandConfig, ExpandError, Row};

const HEADER: &str = "word,pos,rarity,Definition,Sentence\n";

const WORDS: &str = "word,pos,rarity,Definition,Sentence
cat,noun,common,a small domesticated feline,The cat sat.
run,verb,common,to move swiftly,I run daily.
hope,verb,uncommon,to wish for,We hope so.
sheep,noun,common,a woolly animal,Sheep graze.
geese,noun,rare,Plural of goose.,Geese honk.
quick,adjective,common,fast,Be quick.
try,verb,common,to attempt,Try again.
box,noun,common,a container,Open the box.
";

const NGRAMS: &str = "ngram,count
cats,100
ran,90
running,80
runned,1
hoped,70
hoping,60
sheeps,1
tried,50
trying,40
boxes,30
";

/// Full expected output for WORDS + NGRAMS, in write order.
const EXPECTED_WORDS: &[&str] = &[
    "cat", "cats", "run", "ran", "running", "hope", "hoped", "hoping", "sheep", "geese",
    "quick", "try", "tried", "trying", "box", "boxes",
];

struct Fixture {
    dir: TempDir,
    config: ExpandConfig,
}

impl Fixture {
    fn new(input: &str, ngrams: Option<&str>) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = |name: &str| dir.path().join(name);
        fs::write(path("words.csv"), input).unwrap();
        let dictionary = ngrams.map(|text| {
            fs::write(path("ngrams.csv"), text).unwrap();
            path("ngrams.csv")
        });
        let config = ExpandConfig {
            input: path("words.csv"),
            output: path("expanded.csv"),
            checkpoint: path("checkpoint.json"),
            interval: 3,
            dictionary,
            lexicon: None,
            limit: None,
        };
        Self { dir, config }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn output_rows(&self) -> Vec<Row> {
        read_dataset(&self.config.output).unwrap().rows
    }

    fn output_words(&self) -> Vec<String> {
        self.output_rows()
            .iter()
            .map(|r| r.word().to_string())
            .collect()
    }

    fn output_text(&self) -> String {
        fs::read_to_string(&self.config.output).unwrap()
    }
}

fn find<'a>(rows: &'a [Row], word: &str) -> &'a Row {
    rows.iter()
        .find(|r| r.word() == word)
        .unwrap_or_else(|| panic!("no row for '{word}'"))
}

fn assert_no_duplicates(words: &[String]) {
    let mut seen = HashSet::new();
    for w in words {
        assert!(seen.insert(w.to_lowercase()), "duplicate word '{w}' in output");
    }
}

/// Every output row as its cells, sorted, for set comparison.
fn row_set(path: &Path) -> Vec<Vec<String>> {
    let data = read_dataset(path).unwrap();
    let mut rows: Vec<Vec<String>> = data
        .rows
        .iter()
        .map(|r| r.values(&data.columns).map(String::from).collect())
        .collect();
    rows.sort();
    rows
}

#[test]
fn plural_scenario() {
    let fx = Fixture::new(
        &format!("{HEADER}cat,noun,common,a small domesticated feline,The cat sat.\n"),
        Some("ngram\ncats\n"),
    );
    run(&fx.config).unwrap();

    let rows = fx.output_rows();
    assert_eq!(rows.len(), 2);
    let cats = find(&rows, "cats");
    assert_eq!(cats.pos(), "noun");
    assert_eq!(cats.rarity(), "common");
    assert_eq!(cats.definition(), "Plural of cat.");
    assert_eq!(cats.sentence(), "cats means Plural of cat.");
}

#[test]
fn irregular_verb_scenario() {
    let fx = Fixture::new(
        &format!("{HEADER}run,verb,common,to move swiftly,I run.\n"),
        Some("ngram\nran\nrunning\nrunned\n"),
    );
    run(&fx.config).unwrap();

    assert_eq!(fx.output_words(), vec!["run", "ran", "running"]);
    let rows = fx.output_rows();
    assert_eq!(find(&rows, "ran").definition(), "Past of run.");
    assert_eq!(find(&rows, "running").definition(), "Ing of run.");
    assert_eq!(find(&rows, "running").sentence(), "running means Ing of run.");
}

#[test]
fn full_expansion() {
    let fx = Fixture::new(WORDS, Some(NGRAMS));
    let summary = run(&fx.config).unwrap();

    assert_eq!(fx.output_words(), EXPECTED_WORDS);
    assert!(!summary.resumed);
    assert_eq!(summary.total_rows, 8);
    assert_eq!(summary.rows_processed, 8);
    assert_eq!(summary.originals_written, 8);
    assert_eq!(summary.variants_written, 8);
    assert!(fx.output_text().starts_with(HEADER));
}

#[test]
fn unknown_words_are_never_written() {
    // No external dictionary: only the input's own words count as real.
    let fx = Fixture::new(WORDS, None);
    let summary = run(&fx.config).unwrap();

    assert_eq!(summary.variants_written, 0);
    assert_eq!(fx.output_words().len(), 8);
    let words = fx.output_words();
    assert!(!words.contains(&"runned".to_string()));
    assert!(!words.contains(&"sheeps".to_string()));
}

#[test]
fn base_word_is_not_preempted_by_variant() {
    let fx = Fixture::new(
        &format!(
            "{HEADER}cat,noun,common,a small domesticated feline,The cat sat.\n\
             cats,noun,rare,a jazz musician's audience,The cats swung.\n"
        ),
        Some("ngram\ncats\n"),
    );
    run(&fx.config).unwrap();

    let rows = fx.output_rows();
    assert_eq!(fx.output_words(), vec!["cat", "cats"]);
    assert_eq!(find(&rows, "cats").definition(), "a jazz musician's audience");
}

#[test]
fn no_duplicates_with_repeated_input_words() {
    let fx = Fixture::new(
        &format!(
            "{HEADER}cat,noun,common,a feline,.\nCat,noun,common,a feline again,.\n\
             lie,verb,common,to recline,.\nlay,verb,common,to put down,.\n"
        ),
        Some("ngram\ncats\nlying\nlaid\nlaying\n"),
    );
    let summary = run(&fx.config).unwrap();

    let words = fx.output_words();
    assert_no_duplicates(&words);
    assert_eq!(words, vec!["cat", "cats", "lie", "lying", "lay", "laid", "laying"]);
    assert_eq!(summary.originals_skipped, 1);
}

#[test]
fn rerun_after_completion_adds_nothing() {
    let fx = Fixture::new(WORDS, Some(NGRAMS));
    run(&fx.config).unwrap();
    let before = fx.output_text();

    let summary = run(&fx.config).unwrap();
    assert!(summary.resumed);
    assert_eq!(summary.start_index, 8);
    assert_eq!(summary.rows_processed, 0);
    assert_eq!(summary.variants_written, 0);
    assert_eq!(fx.output_text(), before);
}

#[test]
fn resumed_run_matches_uninterrupted_run() {
    let whole = Fixture::new(WORDS, Some(NGRAMS));
    run(&whole.config).unwrap();

    // First session stops after three rows, second picks up the rest.
    let split = Fixture::new(WORDS, Some(NGRAMS));
    let first = ExpandConfig {
        limit: Some(3),
        interval: 2,
        ..split.config.clone()
    };
    let s1 = run(&first).unwrap();
    assert_eq!(s1.rows_processed, 3);
    assert_eq!(
        Checkpoint::load(&split.config.checkpoint),
        Some(Checkpoint::new(2, 3))
    );

    let s2 = run(&split.config).unwrap();
    assert!(s2.resumed);
    assert_eq!(s2.start_index, 3);
    assert_eq!(s2.rows_processed, 5);

    assert_eq!(row_set(&split.config.output), row_set(&whole.config.output));
    assert_no_duplicates(&split.output_words());
    // The header is written once.
    assert_eq!(split.output_text().matches("word,pos,rarity").count(), 1);
}

#[test]
fn replay_after_stale_checkpoint_is_idempotent() {
    // Simulates an exit between the last rows reaching disk and the next
    // checkpoint: the checkpoint lags the output.
    let fx = Fixture::new(WORDS, Some(NGRAMS));
    run(&fx.config).unwrap();
    let before = fx.output_text();
    Checkpoint::new(2, 8).save(&fx.config.checkpoint).unwrap();

    let summary = run(&fx.config).unwrap();
    assert_eq!(summary.start_index, 3);
    assert_eq!(summary.rows_processed, 5);
    assert_eq!(summary.originals_written, 0);
    assert_eq!(summary.originals_skipped, 5);
    assert_eq!(summary.variants_written, 0);
    assert_eq!(fx.output_text(), before);
}

/// Resume onto an output whose last row was cut off by `torn_tail`, and check
/// the result matches an uninterrupted run.
fn resume_onto_torn_tail(torn_tail: &str) {
    let input = format!(
        "{HEADER}cat,noun,common,a small domesticated feline,The cat sat.
box,noun,common,\"a container, lidded\",Open the box.
run,verb,common,to move swiftly,I run daily.
"
    );
    let ngrams = Some("ngram\ncats\nboxes\nran\nrunning\n");

    let whole = Fixture::new(&input, ngrams);
    run(&whole.config).unwrap();

    let fx = Fixture::new(&input, ngrams);
    // Header, "cat" and "cats" reached disk before the exit.
    let flushed: String = whole.output_text().split_inclusive('\n').take(3).collect();
    assert!(flushed.ends_with("cats means Plural of cat.\n"));
    fs::write(&fx.config.output, format!("{flushed}{torn_tail}")).unwrap();
    Checkpoint::new(0, 3).save(&fx.config.checkpoint).unwrap();

    let summary = run(&fx.config).unwrap();
    assert!(summary.resumed);
    assert_eq!(summary.start_index, 1);
    assert_eq!(summary.originals_skipped, 0);
    assert_eq!(
        fx.output_words(),
        vec!["cat", "cats", "box", "boxes", "run", "ran", "running"]
    );
    assert_eq!(fx.output_text(), whole.output_text());
}

#[test]
fn resume_drops_row_cut_inside_quoted_field() {
    resume_onto_torn_tail("box,noun,common,\"a cont");
}

#[test]
fn resume_drops_row_missing_its_terminator() {
    resume_onto_torn_tail("box,noun,common,\"a container, lidded\",Open the b");
}

#[test]
fn resume_drops_row_cut_after_newline_in_quotes() {
    resume_onto_torn_tail("box,noun,common,\"a container,\n");
}

#[test]
fn corrupt_checkpoint_starts_fresh() {
    let fx = Fixture::new(WORDS, Some(NGRAMS));
    fs::write(&fx.config.checkpoint, "{\"last_processed_index\": ").unwrap();
    fs::write(&fx.config.output, "stale,output\n").unwrap();

    let summary = run(&fx.config).unwrap();
    assert!(!summary.resumed);
    assert_eq!(summary.start_index, 0);
    assert_eq!(fx.output_words(), EXPECTED_WORDS);
    assert!(fx.output_text().starts_with(HEADER));
}

#[test]
fn checkpoints_follow_interval() {
    let fx = Fixture::new(WORDS, Some(NGRAMS));
    let summary = run(&fx.config).unwrap();

    // Interval 3 over 8 rows: after rows 3 and 6, then once at the end.
    assert_eq!(summary.checkpoints_saved, 3);
    assert_eq!(
        Checkpoint::load(&fx.config.checkpoint),
        Some(Checkpoint::new(7, 8))
    );
}

#[test]
fn zero_interval_is_treated_as_one() {
    let mut fx = Fixture::new(WORDS, Some(NGRAMS));
    fx.config.interval = 0;
    let summary = run(&fx.config).unwrap();
    assert_eq!(summary.checkpoints_saved, 9);
}

#[test]
fn missing_input_writes_nothing() {
    let fx = Fixture::new(WORDS, None);
    let config = ExpandConfig {
        input: fx.path("absent.csv"),
        ..fx.config.clone()
    };
    let err = run(&config).unwrap_err();
    assert!(matches!(err, ExpandError::MissingInput(_)));
    assert!(!config.output.exists());
    assert!(!config.checkpoint.exists());
}

#[test]
fn missing_dictionary_is_skipped() {
    let mut fx = Fixture::new(WORDS, None);
    fx.config.dictionary = Some(fx.path("absent.csv"));
    let summary = run(&fx.config).unwrap();
    assert_eq!(summary.originals_written, 8);
    assert_eq!(summary.variants_written, 0);
}

#[test]
fn extra_columns_pass_through() {
    let fx = Fixture::new(
        "word,pos,notes,Definition\ncat,noun,keep me,a feline\n",
        Some("ngram\ncats\n"),
    );
    run(&fx.config).unwrap();

    assert_eq!(
        fx.output_text(),
        "word,pos,notes,Definition\ncat,noun,keep me,a feline\ncats,noun,,Plural of cat.\n"
    );
}

#[test]
fn rows_without_words_or_known_pos_are_copied() {
    let fx = Fixture::new(
        &format!("{HEADER},noun,common,orphan definition,.\nquickly,adverb,common,fast,.\n"),
        Some("ngram\nquicklies\n"),
    );
    let summary = run(&fx.config).unwrap();
    assert_eq!(summary.originals_written, 2);
    assert_eq!(summary.variants_written, 0);
    assert_eq!(fx.output_rows()[0].definition(), "orphan definition");
}

#[test]
fn empty_input_uses_default_header() {
    let fx = Fixture::new("", None);
    let summary = run(&fx.config).unwrap();
    assert_eq!(summary.total_rows, 0);
    assert_eq!(fx.output_text(), "word,rarity,pos,Definition,Sentence\n");
    assert!(!fx.config.checkpoint.exists());
}

#[test]
fn resume_without_output_writes_header() {
    let fx = Fixture::new(WORDS, Some(NGRAMS));
    Checkpoint::new(5, 8).save(&fx.config.checkpoint).unwrap();

    let summary = run(&fx.config).unwrap();
    assert!(summary.resumed);
    assert!(fx.output_text().starts_with(HEADER));
    assert_eq!(fx.output_words(), vec!["try", "tried", "trying", "box", "boxes"]);
}

#[test]
fn lexicon_is_consulted_before_rules() {
    let mut fx = Fixture::new(
        &format!("{HEADER}dream,verb,common,to have a vision,.\n"),
        Some("ngram\ndreamt\ndreamed\ndreaming\n"),
    );
    let lexicon = fx.path("lexicon.csv");
    fs::write(&lexicon, "lemma,tag,form\ndream,VBD,dreamt\n").unwrap();
    fx.config.lexicon = Some(lexicon);

    run(&fx.config).unwrap();
    assert_eq!(fx.output_words(), vec!["dream", "dreamt", "dreaming"]);
}
