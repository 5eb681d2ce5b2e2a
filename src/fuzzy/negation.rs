// File: src/fuzzy/negation.rs
use crate::core::lexicon::LexiconIndex;
use crate::core::stemmer::stem;
use serde::{Deserialize, Serialize};

/// Negation prefixes tried in table order, and the minimum length of what
/// must remain after the prefix.
///
/// The default set is heuristic. `a` in particular collides with many
/// unrelated words; the remainder must still resolve in the lexicon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NegationTable {
    pub prefixes: Vec<String>,
    pub min_base_len: usize,
}

impl Default for NegationTable {
    fn default() -> Self {
        Self {
            prefixes: ["im", "in", "ir", "il", "un", "non", "dis", "a", "anti"]
                .iter()
                .map(|p| p.to_string())
                .collect(),
            min_base_len: 3,
        }
    }
}

/// A negated word whose base resolved in the lexicon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NegationMatch<'a> {
    pub prefix: &'a str,
    pub base: &'a str,
    pub target: String,
    /// How the base resolved: `"direct"` or `"stem"`.
    pub via: &'static str,
}

impl NegationTable {
    /// Splits `word` into every `(prefix, remainder)` the table allows.
    pub fn splits<'w>(&'w self, word: &'w str) -> impl Iterator<Item = (&'w str, &'w str)> {
        self.prefixes.iter().filter_map(move |prefix| {
            let rest = word.strip_prefix(prefix.as_str())?;
            (rest.chars().count() >= self.min_base_len).then_some((prefix.as_str(), rest))
        })
    }

    /// True when `word` is exactly a table prefix followed by `meaning`.
    pub fn is_negated_form(&self, word: &str, meaning: &str) -> bool {
        self.prefixes
            .iter()
            .any(|prefix| word.strip_prefix(prefix.as_str()) == Some(meaning))
    }

    pub fn find<'w>(&'w self, word: &'w str, lexicon: &LexiconIndex) -> Option<NegationMatch<'w>> {
        self.splits(word).find_map(|(prefix, base)| {
            if let Some(target) = lexicon.word_for(base) {
                return Some(NegationMatch {
                    prefix,
                    base,
                    target: target.to_string(),
                    via: "direct",
                });
            }
            let stemmed = stem(base);
            lexicon
                .word_for(&stemmed)
                .or_else(|| lexicon.words_for_stem(&stemmed).first().map(String::as_str))
                .map(|target| NegationMatch {
                    prefix,
                    base,
                    target: target.to_string(),
                    via: "stem",
                })
        })
    }
}
