// src/options.rs
use serde::{Deserialize, Serialize};

/// Per-call switches for the translation cascade. Every flag defaults to on,
/// and a partial JSON object only overrides the flags it names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TranslateOptions {
    /// Negation prefixes, stem lookup and substring containment.
    pub fuzzy_matching: bool,
    /// Retry a failed lookup with one trailing `s` removed.
    pub plural_handling: bool,
    /// Keep unmatched words verbatim with their letter roots instead of
    /// reporting them missing.
    pub root_construction: bool,
    /// Whole-input and multi-word phrase detection.
    pub check_phrases: bool,
    /// Reserved. Accepted and ignored.
    pub context_aware: bool,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self {
            fuzzy_matching: true,
            plural_handling: true,
            root_construction: true,
            check_phrases: true,
            context_aware: true,
        }
    }
}

impl TranslateOptions {
    /// Sets a flag by its camelCase or snake_case name. Returns `false` for
    /// an unknown name.
    pub fn set(&mut self, flag: &str, value: bool) -> bool {
        let slot = match flag {
            "fuzzyMatching" | "fuzzy_matching" | "fuzzy" => &mut self.fuzzy_matching,
            "pluralHandling" | "plural_handling" | "plural" => &mut self.plural_handling,
            "rootConstruction" | "root_construction" | "roots" => &mut self.root_construction,
            "checkPhrases" | "check_phrases" | "phrases" => &mut self.check_phrases,
            "contextAware" | "context_aware" | "context" => &mut self.context_aware,
            _ => return false,
        };
        *slot = value;
        true
    }
}
