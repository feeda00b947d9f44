// Output formatting for accepted variants.

use crate::types::*;

/// Output header: the input's own columns, or the default set when it had none.
pub fn output_columns(input_columns: &[String]) -> Vec<String> {
    if input_columns.is_empty() {
        DEFAULT_COLUMNS.iter().map(|c| c.to_string()).collect()
    } else {
        input_columns.to_vec()
    }
}

/// Definition written for a variant.
///
/// Format: `<Kind> of <source word>.`, e.g. `Plural of cat.`, `Past of run.`,
/// `Ing of run.`
pub fn variant_definition(kind: VariantKind, source_word: &str) -> String {
    format!("{} of {source_word}.", kind.label())
}

/// Example sentence written for a variant: `<variant> means <definition>`.
/// The definition already carries the closing full stop.
pub fn variant_sentence(variant: &str, definition: &str) -> String {
    format!("{variant} means {definition}")
}

/// Materialise an accepted candidate. Rarity is inherited from the source row;
/// every other column is left blank.
pub fn variant_row(candidate: &VariantCandidate, rarity: &str) -> Row {
    let definition = variant_definition(candidate.kind, &candidate.source_word);
    let sentence = variant_sentence(&candidate.word, &definition);
    Row::new()
        .with(WORD, candidate.word.as_str())
        .with(RARITY, rarity)
        .with(POS, candidate.pos.as_str())
        .with(DEFINITION, definition)
        .with(SENTENCE, sentence)
}
