// English noun pluralisation and "already plural" detection.

use crate::inflect::NounInflector;

/// Definition text marking an entry that is itself a plural ("Plural of goose.").
pub const PLURAL_MARKER: &str = "plural of";

// Nouns whose plural is the same word.
const INVARIANT: &[&str] = &[
    "aircraft", "bison", "cattle", "deer", "fish", "means", "moose", "news", "offspring",
    "pants", "police", "salmon", "scissors", "series", "sheep", "spacecraft", "species",
    "swine", "trousers", "trout",
];

// Singular → plural for nouns no suffix rule covers.
const IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("child", "children"),
    ("person", "people"),
    ("man", "men"),
    ("woman", "women"),
    ("foot", "feet"),
    ("tooth", "teeth"),
    ("goose", "geese"),
    ("mouse", "mice"),
    ("louse", "lice"),
    ("ox", "oxen"),
    ("die", "dice"),
    ("quiz", "quizzes"),
    ("criterion", "criteria"),
    ("phenomenon", "phenomena"),
    ("datum", "data"),
    ("cactus", "cacti"),
    ("fungus", "fungi"),
    ("nucleus", "nuclei"),
    ("radius", "radii"),
    ("stimulus", "stimuli"),
    ("appendix", "appendices"),
    ("index", "indices"),
    ("matrix", "matrices"),
    ("vertex", "vertices"),
];

// -f / -fe nouns that take -ves.
const F_TO_VES: &[&str] = &[
    "calf", "elf", "half", "knife", "leaf", "life", "loaf", "scarf", "self", "sheaf", "shelf",
    "thief", "wife", "wolf",
];

// -o nouns that take -es.
const O_TO_OES: &[&str] = &[
    "echo", "embargo", "hero", "potato", "tomato", "torpedo", "veto", "volcano",
];

// Words ending in "man" that are not compounds of "man".
const NOT_MAN_COMPOUNDS: &[&str] = &[
    "caiman", "german", "human", "ottoman", "roman", "shaman", "talisman",
];

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Plural of `noun`, lowercase. Known plural forms map to themselves.
pub fn pluralize(noun: &str) -> String {
    let word = noun.trim().to_lowercase();
    if word.is_empty() {
        return word;
    }
    if INVARIANT.contains(&word.as_str()) {
        return word;
    }
    for (singular, plural) in IRREGULAR_PLURALS {
        if word == *singular || word == *plural {
            return plural.to_string();
        }
    }
    if let Some(stem) = word.strip_suffix("man") {
        if !stem.is_empty() && !NOT_MAN_COMPOUNDS.contains(&word.as_str()) {
            return format!("{stem}men");
        }
    }
    if let Some(stem) = word.strip_suffix("sis") {
        return format!("{stem}ses");
    }
    if F_TO_VES.contains(&word.as_str()) {
        let stem = word
            .strip_suffix("fe")
            .or_else(|| word.strip_suffix('f'))
            .unwrap_or(word.as_str());
        return format!("{stem}ves");
    }
    if O_TO_OES.contains(&word.as_str()) {
        return format!("{word}es");
    }
    if ["s", "x", "z", "ch", "sh"].iter().any(|s| word.ends_with(*s)) {
        return format!("{word}es");
    }
    if let Some(stem) = word.strip_suffix('y') {
        if stem.chars().last().is_some_and(|c| !is_vowel(c)) {
            return format!("{stem}ies");
        }
    }
    format!("{word}s")
}

/// Rule-based noun inflector; the fallback when no provider knows a noun.
#[derive(Debug, Clone, Copy, Default)]
pub struct PluralRules;

impl NounInflector for PluralRules {
    fn plural(&self, noun: &str) -> Option<String> {
        let plural = pluralize(noun);
        (!plural.is_empty()).then_some(plural)
    }
}

/// True when a row's word should not be pluralised: its definition says it is
/// a plural, or pluralising it gives back the same word.
pub fn is_already_plural(nouns: &dyn NounInflector, word: &str, definition: &str) -> bool {
    let word = word.trim();
    if word.is_empty() {
        return false;
    }
    if definition.to_lowercase().contains(PLURAL_MARKER) {
        return true;
    }
    nouns.is_plural(word)
}
