use crate::core::converter::Renderer;
use crate::core::lexicon::LexiconIndex;
use crate::core::matcher::{Resolution, WordMatcher};
use crate::core::phrase::PhraseMatcher;
use crate::core::roots::RootTable;
use crate::core::types::{
    ConstructionDetail, LetterRoot, LexiconEntry, Method, RenderHint, RootEntry, Token, TranslationResult,
};
use crate::error::Result;
use crate::fuzzy::negation::NegationTable;
use crate::options::TranslateOptions;
use crate::persistence::{load_from_disk, save_to_disk, TableSnapshot};
use std::path::Path;

/// A resolved output segment and the number of input tokens it covers.
struct Segment {
    resolution: Resolution,
    tokens: usize,
    phrase: bool,
}

// The engine owns the raw tables and the indices built from them. Nothing is
// written after construction, so `translate` can be called from any number
// of readers.
pub struct TranslationEngine {
    tables: TableSnapshot,
    lexicon: LexiconIndex,
    roots: RootTable,
    negation: NegationTable,
}

impl TranslationEngine {
    pub fn new(lexicon: Vec<LexiconEntry>, roots: Vec<RootEntry>) -> Self {
        Self::from_tables(TableSnapshot { lexicon, roots })
    }

    pub fn from_tables(tables: TableSnapshot) -> Self {
        let lexicon = LexiconIndex::build(&tables.lexicon);
        let roots = RootTable::build(&tables.roots);
        Self {
            tables,
            lexicon,
            roots,
            negation: NegationTable::default(),
        }
    }

    /// Replaces the negation prefix table.
    pub fn with_negation_table(mut self, negation: NegationTable) -> Self {
        self.negation = negation;
        self
    }

    pub fn from_snapshot(path: &Path) -> Result<Self> {
        Ok(Self::from_tables(load_from_disk(path)?))
    }

    pub fn from_snapshot_or_empty(path: &Path) -> Self {
        Self::from_snapshot(path).unwrap_or_else(|e| {
            log::warn!("could not load snapshot {}: {e}; starting with empty tables", path.display());
            Self::from_tables(TableSnapshot::default())
        })
    }

    pub fn save_snapshot(&self, path: &Path) -> Result<()> {
        save_to_disk(&self.tables, path)
    }

    pub fn snapshot(&self) -> &TableSnapshot {
        &self.tables
    }

    pub fn lexicon(&self) -> &LexiconIndex {
        &self.lexicon
    }

    pub fn roots(&self) -> &RootTable {
        &self.roots
    }

    pub fn negation_table(&self) -> &NegationTable {
        &self.negation
    }

    pub fn translate_default(&self, text: &str) -> TranslationResult {
        self.translate(text, &TranslateOptions::default())
    }

    /// Translates `text` in one forward pass: whole-input phrase check,
    /// then multi-word phrase scan, then per-word resolution.
    pub fn translate(&self, text: &str, options: &TranslateOptions) -> TranslationResult {
        let words: Vec<String> = text.split_whitespace().map(str::to_string).collect();
        if words.is_empty() {
            return TranslationResult::default();
        }

        let phrases = PhraseMatcher::new(&self.lexicon);
        let normalized = words.join(" ");

        if options.check_phrases {
            if let Some(hit) = phrases.match_phrase(&normalized) {
                log::debug!("whole input {normalized:?} -> {}", hit.word);
                let segment = Segment {
                    resolution: phrase_resolution(normalized, hit.word, hit.explanation),
                    tokens: words.len(),
                    phrase: true,
                };
                return self.assemble(vec![segment]);
            }
        }

        let tokens = if options.check_phrases {
            phrases.detect(&words)
        } else {
            words.into_iter().map(Token::Plain).collect()
        };

        let matcher = WordMatcher::new(&self.lexicon, &self.roots, &self.negation);
        let segments = tokens
            .into_iter()
            .map(|token| match token {
                Token::Plain(word) => Segment {
                    resolution: matcher.resolve(&word, options),
                    tokens: 1,
                    phrase: false,
                },
                Token::PhraseMatch {
                    word,
                    original,
                    explanation,
                    span,
                } => Segment {
                    resolution: phrase_resolution(original, word, explanation),
                    tokens: span.len(),
                    phrase: true,
                },
            })
            .collect();

        self.assemble(segments)
    }

    fn assemble(&self, segments: Vec<Segment>) -> TranslationResult {
        let renderer = Renderer::new(&self.roots);
        let mut result = TranslationResult::default();
        let mut target = Vec::with_capacity(segments.len());
        let mut phonetic = Vec::with_capacity(segments.len());
        let mut symbols = Vec::with_capacity(segments.len());

        for Segment {
            resolution: r,
            tokens,
            phrase,
        } in segments
        {
            result.stats.record(r.method, tokens);
            if phrase {
                result
                    .phrase_matches
                    .insert(r.original.clone(), r.core.clone());
            }
            target.push(r.text());

            if r.is_passthrough() {
                phonetic.push(r.text());
                symbols.push(r.text());
            } else {
                let hint = r.hint.as_ref();
                phonetic.push(format!(
                    "{}{}{}",
                    r.leading,
                    renderer.to_phonetic(&r.core, hint),
                    r.trailing
                ));
                symbols.push(format!(
                    "{}{}{}",
                    r.leading,
                    renderer.to_symbols(&r.core, hint),
                    r.trailing
                ));

                if r.method != Method::Missing && !result.root_analysis.contains_key(&r.core) {
                    let analysis = match hint {
                        Some(RenderHint::Roots(letters)) => letters.clone(),
                        Some(RenderHint::Negation {
                            prefix_letter,
                            base,
                        }) => self.negation_analysis(&r.core, *prefix_letter, base),
                        None => self.roots.analyze(&r.core),
                    };
                    result.root_analysis.insert(r.core.clone(), analysis);
                }
            }

            result.construction_details.push(ConstructionDetail {
                original: r.original,
                result: r.core,
                method: r.method,
                explanation: r.explanation,
            });
        }

        result.translation_text = target.join(" ");
        result.phonetic_text = phonetic.join(" ");
        result.symbol_text = symbols.join(" ");
        debug_assert_eq!(
            result.stats.total,
            result.stats.direct + result.stats.partial + result.stats.constructed + result.stats.missing
        );
        result
    }

    /// The compound's initial stands for the prefix letter, not for itself.
    fn negation_analysis(&self, compound: &str, prefix_letter: char, base: &str) -> Vec<LetterRoot> {
        let initial = compound.chars().next().unwrap_or(prefix_letter);
        let mut analysis = vec![LetterRoot {
            letter: initial,
            root: self.roots.find_root_for_letter(prefix_letter).cloned(),
        }];
        analysis.extend(self.roots.analyze(base));
        analysis
    }
}

fn phrase_resolution(original: String, word: String, explanation: String) -> Resolution {
    Resolution {
        original,
        leading: String::new(),
        core: word,
        trailing: String::new(),
        method: Method::Direct,
        explanation,
        hint: None,
    }
}
