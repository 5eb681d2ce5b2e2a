// File: src/core/phrase.rs
use crate::core::lexicon::LexiconIndex;
use crate::core::types::Token;
use crate::fuzzy::containment::length_ratio;

/// Fuzzy phrase candidates must score above this.
pub const PHRASE_THRESHOLD: f64 = 0.7;
/// Longest run of input tokens tried as one phrase.
pub const MAX_PHRASE_WINDOW: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct PhraseHit {
    pub word: String,
    pub explanation: String,
}

pub struct PhraseMatcher<'a> {
    lexicon: &'a LexiconIndex,
}

impl<'a> PhraseMatcher<'a> {
    pub fn new(lexicon: &'a LexiconIndex) -> Self {
        Self { lexicon }
    }

    /// Exact phrase lookup, then containment against multi-word meanings.
    /// A lone letter never matches: letters always take the letter-root path.
    pub fn match_phrase(&self, text: &str) -> Option<PhraseHit> {
        let input = text.trim().to_lowercase();
        if input.is_empty() || is_single_letter(&input) {
            return None;
        }

        if let Some(word) = self.lexicon.phrase(&input) {
            return Some(PhraseHit {
                word: word.to_string(),
                explanation: format!("Exact phrase match: \"{input}\""),
            });
        }

        let mut best: Option<(&str, &str, f64)> = None;
        for (phrase, word) in self.lexicon.multi_word_phrases() {
            let score = if input.contains(phrase) || phrase.contains(input.as_str()) {
                length_ratio(&input, phrase)
            } else {
                continue;
            };
            if best.map_or(true, |(_, _, s)| score > s) {
                best = Some((phrase, word, score));
            }
        }

        best.filter(|&(_, _, score)| score > PHRASE_THRESHOLD)
            .map(|(phrase, word, score)| PhraseHit {
                word: word.to_string(),
                explanation: format!(
                    "Phrase match: \"{input}\" ~ \"{phrase}\" ({:.0}% similar)",
                    score * 100.0
                ),
            })
    }

    /// Greedy left-to-right scan replacing runs of 2..=4 tokens that match a
    /// phrase. At each start the longest window is tried first; there is no
    /// backtracking.
    pub fn detect(&self, words: &[String]) -> Vec<Token> {
        let mut tokens = Vec::with_capacity(words.len());
        let mut i = 0;

        while i < words.len() {
            let longest = MAX_PHRASE_WINDOW.min(words.len() - i);
            let hit = (2..=longest).rev().find_map(|len| {
                let original = words[i..i + len].join(" ");
                self.match_phrase(&original).map(|hit| (len, original, hit))
            });

            match hit {
                Some((len, original, hit)) => {
                    log::debug!("phrase {original:?} -> {}", hit.word);
                    tokens.push(Token::PhraseMatch {
                        word: hit.word,
                        original,
                        explanation: hit.explanation,
                        span: i..i + len,
                    });
                    i += len;
                }
                None => {
                    tokens.push(Token::Plain(words[i].clone()));
                    i += 1;
                }
            }
        }
        tokens
    }
}

fn is_single_letter(s: &str) -> bool {
    let mut chars = s.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::LexiconEntry;

    fn lexicon() -> LexiconIndex {
        LexiconIndex::build(&[
            LexiconEntry::new("ZIRDO", "I am"),
            LexiconEntry::new("ol", "I"),
            LexiconEntry::new("MADRIAX", "o ye heavens"),
            LexiconEntry::new("IAIDON", "all powerful one"),
            LexiconEntry::new("in", "with"),
        ])
    }

    fn words(s: &str) -> Vec<String> {
        s.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn exact_phrase_is_case_insensitive() {
        let lex = lexicon();
        let hit = PhraseMatcher::new(&lex).match_phrase("I AM").unwrap();
        assert_eq!(hit.word, "ZIRDO");
        assert!(hit.explanation.contains("Exact"));
    }

    #[test]
    fn single_letter_never_phrase_matches() {
        let lex = lexicon();
        assert!(PhraseMatcher::new(&lex).match_phrase("i").is_none());
    }

    #[test]
    fn fuzzy_containment_above_threshold() {
        let lex = lexicon();
        let m = PhraseMatcher::new(&lex);
        // "o ye heavens" inside "o ye heavens!" scores 12/13.
        assert_eq!(m.match_phrase("O ye heavens!").unwrap().word, "MADRIAX");
        // "all powerful" is 12/16 of "all powerful one".
        assert_eq!(m.match_phrase("all powerful").unwrap().word, "IAIDON");
        assert!(m.match_phrase("powerful one x y z").is_none());
    }

    #[test]
    fn phrase_score_at_threshold_is_rejected() {
        let lex = LexiconIndex::build(&[LexiconEntry::new("ABCD", "ab cd efgh")]);
        let m = PhraseMatcher::new(&lex);
        // 7 of 10 chars is not above the threshold.
        assert!(m.match_phrase("cd efgh").is_none());
        assert!(m.detect(&words("cd efgh")).iter().all(|t| matches!(t, Token::Plain(_))));
        assert_eq!(m.match_phrase("b cd efgh").unwrap().word, "ABCD");
    }

    #[test]
    fn equal_phrase_scores_keep_first_inserted() {
        let lex = LexiconIndex::build(&[
            LexiconEntry::new("FIRST", "ab cd x"),
            LexiconEntry::new("SECOND", "ab cd y"),
        ]);
        let hit = PhraseMatcher::new(&lex).match_phrase("ab cd").unwrap();
        assert_eq!(hit.word, "FIRST");

        let reversed = LexiconIndex::build(&[
            LexiconEntry::new("SECOND", "ab cd y"),
            LexiconEntry::new("FIRST", "ab cd x"),
        ]);
        assert_eq!(PhraseMatcher::new(&reversed).match_phrase("ab cd").unwrap().word, "SECOND");
    }

    #[test]
    fn detect_prefers_longest_window() {
        let lex = lexicon();
        let tokens = PhraseMatcher::new(&lex).detect(&words("everlasting all powerful one"));
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0], Token::Plain("everlasting".to_string()));
        match &tokens[1] {
            Token::PhraseMatch { word, original, span, .. } => {
                assert_eq!(word, "IAIDON");
                assert_eq!(original, "all powerful one");
                assert_eq!(span, &(1..4));
            }
            other => panic!("expected phrase, got {other:?}"),
        }
    }

    #[test]
    fn window_may_absorb_a_short_neighbour() {
        let lex = lexicon();
        // "with all powerful one" still scores 16/21 against the phrase.
        let tokens = PhraseMatcher::new(&lex).detect(&words("with all powerful one"));
        assert!(matches!(&tokens[..], [Token::PhraseMatch { span, .. }] if *span == (0..4)));
    }

    #[test]
    fn detect_leaves_unmatched_tokens_plain() {
        let lex = lexicon();
        let tokens = PhraseMatcher::new(&lex).detect(&words("hello there"));
        assert!(tokens.iter().all(|t| matches!(t, Token::Plain(_))));
    }

    #[test]
    fn detect_is_greedy_from_the_left() {
        let lex = lexicon();
        let tokens = PhraseMatcher::new(&lex).detect(&words("I am I am"));
        let words: Vec<_> = tokens
            .iter()
            .filter_map(|t| match t {
                Token::PhraseMatch { word, span, .. } => Some((word.as_str(), span.clone())),
                Token::Plain(_) => None,
            })
            .collect();
        assert_eq!(words, [("ZIRDO", 0..2), ("ZIRDO", 2..4)]);
    }
}
