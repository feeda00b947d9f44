// Inflection capabilities and the provider → fallback combinator.
//
// The driver is handed one `VerbInflector` and one `NounInflector` at startup.
// With no external provider those are the rule engines; with a provider they
// are `WithFallback` wrappers that ask the provider first and the rules on a miss.

use crate::plural::PluralRules;
use crate::rules::RuleInflector;

/// Can produce the past tense and present participle of a verb.
pub trait VerbInflector {
    /// Past tense of `verb`, lowercase, or `None` if no safe form exists.
    fn past(&self, verb: &str) -> Option<String>;

    /// Present participle ("-ing" form) of `verb`, lowercase, or `None`.
    fn present_participle(&self, verb: &str) -> Option<String>;
}

/// Can produce the plural of a noun and recognise plural forms.
pub trait NounInflector {
    /// Plural of `noun`, lowercase, or `None` if no opinion.
    fn plural(&self, noun: &str) -> Option<String>;

    /// True when `noun` is already a plural form.
    fn is_plural(&self, noun: &str) -> bool {
        let lower = noun.trim().to_lowercase();
        self.plural(&lower).is_some_and(|p| p == lower)
    }
}

impl<T: VerbInflector + ?Sized> VerbInflector for Box<T> {
    fn past(&self, verb: &str) -> Option<String> {
        (**self).past(verb)
    }

    fn present_participle(&self, verb: &str) -> Option<String> {
        (**self).present_participle(verb)
    }
}

impl<T: NounInflector + ?Sized> NounInflector for Box<T> {
    fn plural(&self, noun: &str) -> Option<String> {
        (**self).plural(noun)
    }

    fn is_plural(&self, noun: &str) -> bool {
        (**self).is_plural(noun)
    }
}

/// Consult `primary`; on `None`, consult `fallback`.
#[derive(Debug, Clone)]
pub struct WithFallback<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> WithFallback<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: VerbInflector, F: VerbInflector> VerbInflector for WithFallback<P, F> {
    fn past(&self, verb: &str) -> Option<String> {
        self.primary.past(verb).or_else(|| self.fallback.past(verb))
    }

    fn present_participle(&self, verb: &str) -> Option<String> {
        self.primary
            .present_participle(verb)
            .or_else(|| self.fallback.present_participle(verb))
    }
}

impl<P: NounInflector, F: NounInflector> NounInflector for WithFallback<P, F> {
    fn plural(&self, noun: &str) -> Option<String> {
        self.primary.plural(noun).or_else(|| self.fallback.plural(noun))
    }

    fn is_plural(&self, noun: &str) -> bool {
        self.primary.is_plural(noun) || self.fallback.is_plural(noun)
    }
}

/// Verb inflector for a run: the provider in front of the rules, or the rules alone.
pub fn verb_inflector<P>(provider: Option<P>) -> Box<dyn VerbInflector>
where
    P: VerbInflector + 'static,
{
    match provider {
        Some(p) => Box::new(WithFallback::new(p, RuleInflector)),
        None => Box::new(RuleInflector),
    }
}

/// Noun inflector for a run: the provider in front of the rules, or the rules alone.
pub fn noun_inflector<P>(provider: Option<P>) -> Box<dyn NounInflector>
where
    P: NounInflector + 'static,
{
    match provider {
        Some(p) => Box::new(WithFallback::new(p, PluralRules)),
        None => Box::new(PluralRules),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Knows exactly one verb and one noun.
    struct Tiny;

    impl VerbInflector for Tiny {
        fn past(&self, verb: &str) -> Option<String> {
            (verb == "dream").then(|| "dreamt".to_string())
        }

        fn present_participle(&self, _verb: &str) -> Option<String> {
            None
        }
    }

    impl NounInflector for Tiny {
        fn plural(&self, noun: &str) -> Option<String> {
            (noun == "octopus").then(|| "octopodes".to_string())
        }

        fn is_plural(&self, noun: &str) -> bool {
            noun == "octopodes"
        }
    }

    #[test]
    fn test_provider_consulted_first() {
        let v = verb_inflector(Some(Tiny));
        assert_eq!(v.past("dream").as_deref(), Some("dreamt"));
    }

    #[test]
    fn test_rules_used_on_miss() {
        let v = verb_inflector(Some(Tiny));
        assert_eq!(v.past("walk").as_deref(), Some("walked"));
        assert_eq!(v.present_participle("dream").as_deref(), Some("dreaming"));
    }

    #[test]
    fn test_rules_alone_without_provider() {
        let v = verb_inflector::<Tiny>(None);
        assert_eq!(v.past("dream").as_deref(), Some("dreamed"));
    }

    #[test]
    fn test_noun_fallback_chain() {
        let n = noun_inflector(Some(Tiny));
        assert_eq!(n.plural("octopus").as_deref(), Some("octopodes"));
        assert_eq!(n.plural("cat").as_deref(), Some("cats"));
        assert!(n.is_plural("octopodes"));
        assert!(n.is_plural("sheep"));
        assert!(!n.is_plural("cat"));
    }
}
