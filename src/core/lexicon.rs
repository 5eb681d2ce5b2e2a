// File: src/core/lexicon.rs
use crate::core::stemmer::stem;
use crate::core::types::LexiconEntry;
use indexmap::IndexMap;
use regex::Regex;
use std::sync::OnceLock;

fn parenthetical() -> &'static Regex {
    static PARENTHETICAL: OnceLock<Regex> = OnceLock::new();
    PARENTHETICAL.get_or_init(|| Regex::new(r"\([^)]*\)").expect("static regex is valid"))
}

/// Strips one leading `-` and any `(...)` annotations, then splits the gloss
/// on `,` / `;` into lowercase candidate meanings. Empty candidates are dropped.
pub fn clean_meanings(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('-').unwrap_or(trimmed);
    let without_notes = parenthetical().replace_all(trimmed, "");

    without_notes
        .split([',', ';'])
        .map(|m| m.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase())
        .filter(|m| !m.is_empty())
        .collect()
}

/// Lookup structures built once from the raw word list.
///
/// All maps are insertion-ordered: fuzzy scans break ties by first-seen,
/// which must not depend on hashing.
#[derive(Debug, Clone, Default)]
pub struct LexiconIndex {
    meaning_to_word: IndexMap<String, String>,
    word_to_meanings: IndexMap<String, Vec<String>>,
    stem_to_words: IndexMap<String, Vec<String>>,
    /// Keys of `meaning_to_word` that contain a space, in insertion order.
    multi_word: Vec<String>,
}

impl LexiconIndex {
    pub fn build(lexicon: &[LexiconEntry]) -> Self {
        let mut index = Self::default();

        for entry in lexicon {
            let word = entry.word.trim();
            if word.is_empty() {
                log::debug!("skipping lexicon row with empty word: {:?}", entry.meaning);
                continue;
            }
            for meaning in clean_meanings(&entry.meaning) {
                index.insert(word, meaning);
            }
        }

        index.multi_word = index
            .meaning_to_word
            .keys()
            .filter(|m| m.contains(' '))
            .cloned()
            .collect();

        log::debug!(
            "lexicon index: {} meanings, {} words, {} stems, {} phrases",
            index.meaning_to_word.len(),
            index.word_to_meanings.len(),
            index.stem_to_words.len(),
            index.multi_word.len()
        );
        index
    }

    fn insert(&mut self, word: &str, meaning: String) {
        let stemmed = stem(&meaning);
        if stemmed != meaning {
            self.stem_to_words
                .entry(stemmed)
                .or_default()
                .push(word.to_string());
        }

        if meaning.contains(' ') {
            for part in meaning.split_whitespace() {
                if part.chars().count() > 2 {
                    self.stem_to_words
                        .entry(stem(part))
                        .or_default()
                        .push(word.to_string());
                }
            }
        }

        self.word_to_meanings
            .entry(word.to_string())
            .or_default()
            .push(meaning.clone());
        // Last write wins; the key keeps its first position.
        self.meaning_to_word.insert(meaning, word.to_string());
    }

    /// Exact lookup of a cleaned, lowercase meaning.
    pub fn word_for(&self, meaning: &str) -> Option<&str> {
        self.meaning_to_word.get(meaning).map(String::as_str)
    }

    pub fn meanings_of(&self, word: &str) -> &[String] {
        self.word_to_meanings
            .get(word)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn words_for_stem(&self, stemmed: &str) -> &[String] {
        self.stem_to_words
            .get(stemmed)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every (meaning, word) pair, in insertion order.
    pub fn meanings(&self) -> impl Iterator<Item = (&str, &str)> {
        self.meaning_to_word
            .iter()
            .map(|(m, w)| (m.as_str(), w.as_str()))
    }

    /// Whole-phrase lookup. Same content as `word_for`, kept separate so
    /// phrase matching reads as phrase matching.
    pub fn phrase(&self, phrase: &str) -> Option<&str> {
        self.word_for(phrase)
    }

    /// Multi-word meanings paired with their word, in insertion order.
    pub fn multi_word_phrases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.multi_word.iter().filter_map(|phrase| {
            self.meaning_to_word
                .get(phrase)
                .map(|word| (phrase.as_str(), word.as_str()))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.meaning_to_word.is_empty()
    }
}
