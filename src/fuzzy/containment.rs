// File: src/fuzzy/containment.rs
use crate::core::lexicon::LexiconIndex;
use crate::fuzzy::negation::NegationTable;

/// Best containment score must exceed this to count as a match.
pub const CONTAINMENT_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, PartialEq)]
pub struct ContainmentMatch<'a> {
    pub meaning: &'a str,
    pub word: &'a str,
    pub score: f64,
}

/// Ratio of the shorter to the longer length, in chars.
pub fn length_ratio(a: &str, b: &str) -> f64 {
    let (a, b) = (a.chars().count(), b.chars().count());
    let (short, long) = if a < b { (a, b) } else { (b, a) };
    if long == 0 {
        return 0.0;
    }
    short as f64 / long as f64
}

/// Scans every lexicon meaning for one that contains `word` or is contained
/// by it. Ties keep the first meaning seen.
///
/// A word that is exactly a negation prefix plus the meaning is skipped:
/// "immortal" must not match "mortal" here.
pub fn best_containment<'a>(
    word: &str,
    lexicon: &'a LexiconIndex,
    negation: &NegationTable,
) -> Option<ContainmentMatch<'a>> {
    let mut best: Option<ContainmentMatch<'a>> = None;

    for (meaning, target) in lexicon.meanings() {
        if !(meaning.contains(word) || word.contains(meaning)) {
            continue;
        }
        if negation.is_negated_form(word, meaning) {
            continue;
        }
        let score = length_ratio(word, meaning);
        if best.as_ref().map_or(true, |b| score > b.score) {
            best = Some(ContainmentMatch {
                meaning,
                word: target,
                score,
            });
        }
    }

    best.filter(|b| b.score > CONTAINMENT_THRESHOLD)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::LexiconEntry;

    fn lexicon(rows: &[(&str, &str)]) -> LexiconIndex {
        let rows: Vec<_> = rows.iter().map(|(w, m)| LexiconEntry::new(w, m)).collect();
        LexiconIndex::build(&rows)
    }

    #[test]
    fn picks_highest_ratio() {
        let lex = lexicon(&[("a1", "power"), ("a2", "powerful ones")]);
        let m = best_containment("powers", &lex, &NegationTable::default()).unwrap();
        assert_eq!(m.word, "a1");
        assert!((m.score - 5.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_low_scores() {
        let lex = lexicon(&[("ds", "the mighty seat of justice")]);
        assert!(best_containment("seat", &lex, &NegationTable::default()).is_none());
    }

    #[test]
    fn negated_form_never_matches_plainly() {
        let lex = lexicon(&[("agel", "mortal")]);
        assert!(best_containment("immortal", &lex, &NegationTable::default()).is_none());
        // Not a negation prefix, so the generic rule applies.
        assert!(best_containment("mortals", &lex, &NegationTable::default()).is_some());
    }

    #[test]
    fn ties_keep_first_seen() {
        let lex = lexicon(&[("first", "darks"), ("second", "darky")]);
        let m = best_containment("dark", &lex, &NegationTable::default()).unwrap();
        assert_eq!(m.word, "first");
    }

    #[test]
    fn containment_at_half_is_rejected() {
        let lex = lexicon(&[("ar", "a")]);
        assert!(best_containment("at", &lex, &NegationTable::default()).is_none());
        let lex = lexicon(&[("ar", "ab")]);
        assert_eq!(best_containment("abc", &lex, &NegationTable::default()).unwrap().word, "ar");
    }

    #[test]
    fn ratio_of_empty_is_zero() {
        assert_eq!(length_ratio("", ""), 0.0);
    }
}
