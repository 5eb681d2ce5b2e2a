use enochian_core::{LexiconEntry, RootEntry, TranslationEngine};

pub fn lexicon() -> Vec<LexiconEntry> {
    [
        ("in", "with"),
        ("ZIRDO", "I am"),
        ("ol", "I"),
        ("ZIR", "am"),
        ("agel", "mortal"),
        ("vooan", "truth"),
        ("MADRIAX", "-O ye heavens (vocative)"),
        ("luciftias", "brightness; brightnesses"),
        ("od", "and"),
    ]
    .iter()
    .map(|(word, meaning)| LexiconEntry::new(word, meaning))
    .collect()
}

pub fn roots() -> Vec<RootEntry> {
    vec![
        RootEntry::new('i', "Gon", 10, "faith", "ι"),
        RootEntry::new('n', "Drun", 40, "law", "ν"),
    ]
}

pub fn engine() -> TranslationEngine {
    TranslationEngine::new(lexicon(), roots())
}
