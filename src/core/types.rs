// src/core/types.rs
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// One target-language word and its English gloss(es).
/// The meaning may hold several glosses separated by `,` or `;` and
/// parenthetical annotations, e.g. `"-with (prep.); together"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconEntry {
    #[serde(default)]
    pub word: String,
    #[serde(default)]
    pub meaning: String,
}

impl LexiconEntry {
    pub fn new(word: &str, meaning: &str) -> Self {
        Self {
            word: word.to_string(),
            meaning: meaning.to_string(),
        }
    }
}

/// One letter of the target alphabet.
/// `letter` is kept as a string so a row with a missing letter can be
/// loaded and skipped instead of failing the whole table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootEntry {
    #[serde(default)]
    pub letter: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "numericValue")]
    pub numeric_value: i64,
    #[serde(default)]
    pub meaning: String,
    #[serde(default)]
    pub symbol: String,
}

impl RootEntry {
    pub fn new(letter: char, name: &str, numeric_value: i64, meaning: &str, symbol: &str) -> Self {
        Self {
            letter: letter.to_string(),
            name: name.to_string(),
            numeric_value,
            meaning: meaning.to_string(),
            symbol: symbol.to_string(),
        }
    }

    /// The letter as a lowercase char, if the row carries exactly one.
    pub fn letter_char(&self) -> Option<char> {
        let mut chars = self.letter.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.to_lowercase().next(),
            _ => None,
        }
    }
}

/// How a token or phrase was resolved. Exactly one per construction detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Direct,
    Partial,
    Constructed,
    Missing,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub direct: usize,
    pub partial: usize,
    pub constructed: usize,
    pub missing: usize,
    pub total: usize,
}

impl Stats {
    /// Counts `tokens` input tokens under `method`.
    pub fn record(&mut self, method: Method, tokens: usize) {
        match method {
            Method::Direct => self.direct += tokens,
            Method::Partial => self.partial += tokens,
            Method::Constructed => self.constructed += tokens,
            Method::Missing => self.missing += tokens,
        }
        self.total += tokens;
    }
}

/// A letter of a resolved word paired with its root entry, if the table has one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterRoot {
    pub letter: char,
    pub root: Option<RootEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructionDetail {
    pub original: String,
    pub result: String,
    pub method: Method,
    pub explanation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    pub translation_text: String,
    pub phonetic_text: String,
    pub symbol_text: String,
    pub stats: Stats,
    pub root_analysis: IndexMap<String, Vec<LetterRoot>>,
    pub construction_details: Vec<ConstructionDetail>,
    pub phrase_matches: IndexMap<String, String>,
}

impl TranslationResult {
    /// First construction detail recorded for `original`.
    pub fn detail_for(&self, original: &str) -> Option<&ConstructionDetail> {
        self.construction_details
            .iter()
            .find(|detail| detail.original == original)
    }
}

/// A token of the normalized input after phrase scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Plain(String),
    /// A run of input tokens resolved as one phrase. `span` indexes the
    /// original token list.
    PhraseMatch {
        word: String,
        original: String,
        explanation: String,
        span: Range<usize>,
    },
}

/// Hint passed from the matcher to the converter for words whose shape
/// alone does not say how to render them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderHint {
    /// Negation compound: `prefix_letter` is the letter whose root supplies
    /// the prefix, `base` the resolved target word.
    Negation { prefix_letter: char, base: String },
    /// Letter roots retained from root construction.
    Roots(Vec<LetterRoot>),
}
