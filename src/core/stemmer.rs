// File: src/core/stemmer.rs

/// Strips at most one of `s` (not `ss`), `ing`, `ed`, `ly` from a lowercased,
/// trimmed word. Words of three characters or fewer are returned unchanged.
///
/// This is a heuristic used to bridge simple variants to a lexicon entry.
/// It over-strips some short words and ignores irregular forms.
pub fn stem(s: &str) -> String {
    let word = s.trim().to_lowercase();
    if word.chars().count() <= 3 {
        return word;
    }

    let strip = if word.ends_with('s') && !word.ends_with("ss") {
        1
    } else if word.ends_with("ing") {
        3
    } else if word.ends_with("ed") || word.ends_with("ly") {
        2
    } else {
        0
    };

    // All suffixes are ASCII, so the cut is on a char boundary.
    word[..word.len() - strip].to_string()
}

/// True when `word` ends in a single plural `s`.
pub fn is_plural(word: &str) -> bool {
    word.ends_with('s') && !word.ends_with("ss")
}
