// Rule-based verb inflection: irregular table first, then spelling rules.

use crate::inflect::VerbInflector;
use crate::irregular;

// Final consonants that double before a vowel suffix (hop → hopped).
const DOUBLING_CONSONANTS: &[char] = &['b', 'd', 'g', 'm', 'n', 'p', 'r', 't'];

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Lowercase the verb and reject anything no rule can safely inflect:
/// fewer than two letters, or non-alphabetic characters (phrases, numbers).
fn normalize(verb: &str) -> Option<(String, Vec<char>)> {
    let lower = verb.trim().to_lowercase();
    let chars: Vec<char> = lower.chars().collect();
    if chars.len() < 2 || !chars.iter().all(|c| c.is_alphabetic()) {
        return None;
    }
    Some((lower, chars))
}

/// Past tense by rule. Returns `None` when no safe form exists.
pub fn past_tense(verb: &str) -> Option<String> {
    let (word, chars) = normalize(verb)?;
    if let Some(forms) = irregular::lookup(&word) {
        return Some(forms.past.to_string());
    }

    let n = chars.len();
    let last = chars[n - 1];
    let prev = chars[n - 2];

    if last == 'e' {
        return Some(format!("{word}d"));
    }
    // Simplified CVC doubling: only the final vowel + consonant pair is checked.
    if DOUBLING_CONSONANTS.contains(&last) && is_vowel(prev) && prev != last {
        return Some(format!("{word}{last}ed"));
    }
    if last == 'y' && !is_vowel(prev) {
        return Some(format!("{}ied", &word[..word.len() - 1]));
    }
    Some(format!("{word}ed"))
}

/// Present participle ("-ing" form) by rule. Returns `None` when no safe form exists.
pub fn present_participle(verb: &str) -> Option<String> {
    let (word, chars) = normalize(verb)?;
    if let Some(forms) = irregular::lookup(&word) {
        if forms.present_participle.ends_with("ing") {
            return Some(forms.present_participle.to_string());
        }
        return Some(format!("{word}ing"));
    }

    let n = chars.len();
    let last = chars[n - 1];

    if last == 'e' && n >= 3 && chars[n - 2] != 'e' {
        return Some(format!("{}ing", &word[..word.len() - 1]));
    }
    if n >= 3
        && DOUBLING_CONSONANTS.contains(&last)
        && is_vowel(chars[n - 2])
        && !is_vowel(chars[n - 3])
    {
        return Some(format!("{word}{last}ing"));
    }
    Some(format!("{word}ing"))
}

/// The guaranteed fallback inflector.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleInflector;

impl VerbInflector for RuleInflector {
    fn past(&self, verb: &str) -> Option<String> {
        past_tense(verb)
    }

    fn present_participle(&self, verb: &str) -> Option<String> {
        present_participle(verb)
    }
}
