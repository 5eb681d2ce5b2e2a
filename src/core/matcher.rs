// File: src/core/matcher.rs
use crate::core::lexicon::LexiconIndex;
use crate::core::roots::RootTable;
use crate::core::stemmer::{is_plural, stem};
use crate::core::types::{Method, RenderHint};
use crate::fuzzy::containment::best_containment;
use crate::fuzzy::negation::NegationTable;
use crate::options::TranslateOptions;

/// How one input token (or phrase) resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub original: String,
    pub leading: String,
    /// Resolved target word without surrounding punctuation. Empty for a
    /// punctuation-only token.
    pub core: String,
    pub trailing: String,
    pub method: Method,
    pub explanation: String,
    pub hint: Option<RenderHint>,
}

impl Resolution {
    /// The resolved word with the token's punctuation re-attached.
    pub fn text(&self) -> String {
        format!("{}{}{}", self.leading, self.core, self.trailing)
    }

    pub fn is_passthrough(&self) -> bool {
        self.core.is_empty()
    }
}

/// Outcome of one cascade step.
struct Step {
    word: String,
    method: Method,
    explanation: String,
    hint: Option<RenderHint>,
}

impl Step {
    fn new(word: impl Into<String>, method: Method, explanation: String) -> Self {
        Self {
            word: word.into(),
            method,
            explanation,
            hint: None,
        }
    }
}

/// Splits a token into leading punctuation, core word and trailing
/// punctuation. The core runs from the first to the last alphanumeric char.
pub fn split_punctuation(token: &str) -> (&str, &str, &str) {
    let Some(start) = token.find(char::is_alphanumeric) else {
        return (token, "", "");
    };
    let end = token
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_alphanumeric())
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(token.len());
    (&token[..start], &token[start..end], &token[end..])
}

fn single_letter(word: &str) -> Option<char> {
    let mut chars = word.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_alphabetic() => Some(c),
        _ => None,
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Resolves single words through the fallback cascade:
/// letter name, direct, plural, fuzzy, root construction, missing.
pub struct WordMatcher<'a> {
    lexicon: &'a LexiconIndex,
    roots: &'a RootTable,
    negation: &'a NegationTable,
}

impl<'a> WordMatcher<'a> {
    pub fn new(lexicon: &'a LexiconIndex, roots: &'a RootTable, negation: &'a NegationTable) -> Self {
        Self {
            lexicon,
            roots,
            negation,
        }
    }

    pub fn resolve(&self, token: &str, options: &TranslateOptions) -> Resolution {
        let (leading, core, trailing) = split_punctuation(token);
        if core.is_empty() {
            return Resolution {
                original: token.to_string(),
                leading: token.to_string(),
                core: String::new(),
                trailing: String::new(),
                method: Method::Direct,
                explanation: "Punctuation passed through unchanged".to_string(),
                hint: None,
            };
        }

        let word = core.to_lowercase();
        let step = self
            .letter_name(&word)
            .or_else(|| self.direct(&word))
            .or_else(|| options.plural_handling.then(|| self.plural(&word)).flatten())
            .or_else(|| options.fuzzy_matching.then(|| self.fuzzy(&word)).flatten())
            .or_else(|| options.root_construction.then(|| self.construct(&word)).flatten())
            .unwrap_or_else(|| {
                Step::new(
                    format!("[{word}]"),
                    Method::Missing,
                    format!("No translation found for \"{word}\""),
                )
            });

        log::debug!("{token:?} -> {} ({:?})", step.word, step.method);
        Resolution {
            original: token.to_string(),
            leading: leading.to_string(),
            core: step.word,
            trailing: trailing.to_string(),
            method: step.method,
            explanation: step.explanation,
            hint: step.hint,
        }
    }

    /// A lone letter renders as its alphabet name even when the lexicon has
    /// an entry for it; the lexicon is used only if the letter has no root.
    fn letter_name(&self, word: &str) -> Option<Step> {
        let letter = single_letter(word)?;
        if let Some(root) = self.roots.find_root_for_letter(letter) {
            return Some(Step::new(
                root.name.clone(),
                Method::Direct,
                format!("Letter \"{letter}\" is the alphabet letter {}", root.name),
            ));
        }
        self.direct(word)
    }

    fn direct(&self, word: &str) -> Option<Step> {
        self.lexicon.word_for(word).map(|target| {
            Step::new(target, Method::Direct, format!("Direct match: \"{word}\""))
        })
    }

    fn plural(&self, word: &str) -> Option<Step> {
        if !is_plural(word) {
            return None;
        }
        let singular = &word[..word.len() - 1];
        self.lexicon.word_for(singular).map(|target| {
            Step::new(
                target,
                Method::Direct,
                format!("Plural of \"{singular}\""),
            )
        })
    }

    /// Negation first, so a negated form never reaches the generic
    /// containment rule; then stem lookup, then containment.
    fn fuzzy(&self, word: &str) -> Option<Step> {
        self.negated(word)
            .or_else(|| self.stemmed(word))
            .or_else(|| {
                best_containment(word, self.lexicon, self.negation).map(|m| {
                    Step::new(
                        m.word,
                        Method::Partial,
                        format!(
                            "Partial match: \"{word}\" ~ \"{}\" ({:.0}% similar)",
                            m.meaning,
                            m.score * 100.0
                        ),
                    )
                })
            })
    }

    fn negated(&self, word: &str) -> Option<Step> {
        let found = self.negation.find(word, self.lexicon)?;
        let prefix_letter = found.prefix.chars().next()?;
        let initial = self
            .roots
            .find_root_for_letter(prefix_letter)
            .and_then(|root| root.name.chars().next())
            .unwrap_or(prefix_letter);
        let compound = format!("{}-{}", initial.to_uppercase(), found.target);

        Some(Step {
            explanation: format!(
                "Negation: \"{}\" + \"{}\" ({} match {}) -> {compound}",
                found.prefix, found.base, found.via, found.target
            ),
            hint: Some(RenderHint::Negation {
                prefix_letter,
                base: found.target.clone(),
            }),
            word: compound,
            method: Method::Partial,
        })
    }

    fn stemmed(&self, word: &str) -> Option<Step> {
        let stemmed = stem(word);
        let via_meaning = (stemmed != word)
            .then(|| self.lexicon.word_for(&stemmed))
            .flatten();
        via_meaning
            .or_else(|| self.lexicon.words_for_stem(&stemmed).first().map(String::as_str))
            .map(|target| {
                Step::new(
                    target,
                    Method::Partial,
                    format!("Stem match: \"{word}\" -> \"{stemmed}\""),
                )
            })
    }

    /// Last resort before "missing". A word that appears whole inside a
    /// lexicon meaning takes that entry; anything else is kept verbatim with
    /// its letter roots, provided at least one letter has a root.
    fn construct(&self, word: &str) -> Option<Step> {
        let inside = self.lexicon.meanings().find(|(meaning, _)| {
            meaning
                .split(|c: char| !c.is_alphanumeric() && c != '\'')
                .any(|part| part == word)
        });
        if let Some((meaning, target)) = inside {
            return Some(Step::new(
                target,
                Method::Direct,
                format!("Constructed from lexicon: \"{word}\" is a word of \"{meaning}\""),
            ));
        }

        let analysis = self.roots.analyze(word);
        if analysis.iter().all(|lr| lr.root.is_none()) {
            return None;
        }
        let described: Vec<String> = analysis
            .iter()
            .map(|lr| match &lr.root {
                Some(root) => format!("{}={}", lr.letter, root.name),
                None => format!("{}=?", lr.letter),
            })
            .collect();

        Some(Step {
            word: capitalize(word),
            method: Method::Constructed,
            explanation: format!("Constructed from letter roots: {}", described.join(", ")),
            hint: Some(RenderHint::Roots(analysis)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{LexiconEntry, RootEntry};

    struct Fixture {
        lexicon: LexiconIndex,
        roots: RootTable,
        negation: NegationTable,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                lexicon: LexiconIndex::build(&[
                    LexiconEntry::new("in", "with"),
                    LexiconEntry::new("agel", "mortal"),
                    LexiconEntry::new("vooan", "truth"),
                    LexiconEntry::new("ol", "walk"),
                    LexiconEntry::new("od", "and of the"),
                    LexiconEntry::new("ar", "a"),
                    LexiconEntry::new("luciftian", "brightness"),
                ]),
                roots: RootTable::build(&[
                    RootEntry::new('a', "Un", 6, "", "A"),
                    RootEntry::new('i', "Gon", 10, "", "I"),
                    RootEntry::new('n', "Drun", 40, "", "N"),
                    RootEntry::new('o', "Med", 30, "", "O"),
                ]),
                negation: NegationTable::default(),
            }
        }

        fn resolve(&self, token: &str) -> Resolution {
            self.resolve_with(token, &TranslateOptions::default())
        }

        fn resolve_with(&self, token: &str, options: &TranslateOptions) -> Resolution {
            WordMatcher::new(&self.lexicon, &self.roots, &self.negation).resolve(token, options)
        }
    }

    #[test]
    fn splits_surrounding_punctuation() {
        assert_eq!(split_punctuation("\"truth.\""), ("\"", "truth", ".\""));
        assert_eq!(split_punctuation("don't"), ("", "don't", ""));
        assert_eq!(split_punctuation("..."), ("...", "", ""));
    }

    #[test]
    fn direct_keeps_punctuation() {
        let r = Fixture::new().resolve("With,");
        assert_eq!(r.text(), "in,");
        assert_eq!(r.method, Method::Direct);
    }

    #[test]
    fn single_letter_prefers_root_name() {
        let r = Fixture::new().resolve("a");
        assert_eq!(r.core, "Un");
        assert_eq!(r.method, Method::Direct);
    }

    #[test]
    fn single_letter_without_root_uses_lexicon() {
        let mut f = Fixture::new();
        f.roots = RootTable::default();
        assert_eq!(f.resolve("a").core, "ar");
    }

    #[test]
    fn plural_strip() {
        let f = Fixture::new();
        assert_eq!(f.resolve("truths").core, "vooan");
        let off = TranslateOptions {
            plural_handling: false,
            fuzzy_matching: false,
            root_construction: false,
            ..TranslateOptions::default()
        };
        assert_eq!(f.resolve_with("truths", &off).core, "[truths]");
    }

    #[test]
    fn negation_builds_compound_from_prefix_root() {
        let r = Fixture::new().resolve("immortal");
        assert_eq!(r.core, "G-agel");
        assert_eq!(r.method, Method::Partial);
        assert!(r.explanation.contains("Negation"));
        assert_eq!(
            r.hint,
            Some(RenderHint::Negation {
                prefix_letter: 'i',
                base: "agel".to_string()
            })
        );
    }

    #[test]
    fn negation_without_prefix_root_uses_the_letter() {
        let r = Fixture::new().resolve("unmortal");
        assert_eq!(r.core, "U-agel");
    }

    #[test]
    fn stem_match_is_partial() {
        let r = Fixture::new().resolve("walked");
        assert_eq!(r.core, "ol");
        assert_eq!(r.method, Method::Partial);
    }

    #[test]
    fn containment_match_is_partial() {
        let r = Fixture::new().resolve("bright");
        assert_eq!(r.core, "luciftian");
        assert_eq!(r.method, Method::Partial);
        assert!(r.explanation.contains("brightness"));
    }

    #[test]
    fn whole_word_inside_meaning_is_direct() {
        // "of" is too short to be indexed as a stem of "and of the".
        let r = Fixture::new().resolve("of");
        assert_eq!(r.core, "od");
        assert_eq!(r.method, Method::Direct);
    }

    #[test]
    fn unknown_word_is_constructed_from_roots() {
        let r = Fixture::new().resolve("noon");
        assert_eq!(r.core, "Noon");
        assert_eq!(r.method, Method::Constructed);
        match r.hint {
            Some(RenderHint::Roots(list)) => assert_eq!(list.len(), 4),
            other => panic!("expected roots, got {other:?}"),
        }
    }

    #[test]
    fn word_without_any_root_is_missing() {
        let r = Fixture::new().resolve("help!");
        assert_eq!(r.text(), "[help]!");
        assert_eq!(r.method, Method::Missing);
    }

    #[test]
    fn punctuation_only_passes_through() {
        let r = Fixture::new().resolve("--");
        assert!(r.is_passthrough());
        assert_eq!(r.text(), "--");
        assert_eq!(r.method, Method::Direct);
    }
}
