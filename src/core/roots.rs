// File: src/core/roots.rs
use crate::core::types::{LetterRoot, RootEntry};
use indexmap::IndexMap;

/// Pronounceable name and glyph of one alphabet letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterGlyph {
    pub name: String,
    pub symbol: String,
}

/// Letter lookups over the root/meaning table.
#[derive(Debug, Clone, Default)]
pub struct RootTable {
    roots: Vec<RootEntry>,
    letter_map: IndexMap<char, LetterGlyph>,
}

impl RootTable {
    pub fn build(roots: &[RootEntry]) -> Self {
        let mut letter_map = IndexMap::new();
        let mut kept = Vec::with_capacity(roots.len());

        for root in roots {
            let Some(letter) = root.letter_char() else {
                log::debug!("skipping root row without a single letter: {:?}", root.name);
                continue;
            };
            // First entry for a letter wins.
            letter_map.entry(letter).or_insert_with(|| LetterGlyph {
                name: root.name.clone(),
                symbol: root.symbol.clone(),
            });
            kept.push(root.clone());
        }

        log::debug!("root table: {} letters", letter_map.len());
        Self {
            roots: kept,
            letter_map,
        }
    }

    pub fn glyph(&self, letter: char) -> Option<&LetterGlyph> {
        letter
            .to_lowercase()
            .next()
            .and_then(|c| self.letter_map.get(&c))
    }

    /// Case-insensitive scan for the first root of `letter`.
    pub fn find_root_for_letter(&self, letter: char) -> Option<&RootEntry> {
        let wanted = letter.to_lowercase().next()?;
        self.roots
            .iter()
            .find(|root| root.letter_char() == Some(wanted))
    }

    /// Exact match on the root's name: tells a letter-name apart from a
    /// lexicon word.
    pub fn find_root_by_target_name(&self, name: &str) -> Option<&RootEntry> {
        self.roots.iter().find(|root| root.name == name)
    }

    /// First root whose name starts with `initial`, used for `X-word`
    /// compounds rendered without a hint.
    pub fn find_root_by_initial(&self, initial: char) -> Option<&RootEntry> {
        let wanted = initial.to_lowercase().next()?;
        self.roots.iter().find(|root| {
            root.name
                .chars()
                .next()
                .and_then(|c| c.to_lowercase().next())
                == Some(wanted)
        })
    }

    /// One entry per alphabetic char of `word` (every char if it has none).
    pub fn analyze(&self, word: &str) -> Vec<LetterRoot> {
        let letters: Vec<char> = if word.chars().any(char::is_alphabetic) {
            word.chars().filter(|c| c.is_alphabetic()).collect()
        } else {
            word.chars().collect()
        };
        letters
            .into_iter()
            .map(|letter| LetterRoot {
                letter,
                root: self.find_root_for_letter(letter).cloned(),
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn entries(&self) -> &[RootEntry] {
        &self.roots
    }
}
