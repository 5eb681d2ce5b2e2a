use crate::core::roots::RootTable;
use crate::core::types::{LetterRoot, RenderHint};

/// Which surface form to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Face {
    Phonetic,
    Symbol,
}

/// Renders resolved target words as letter names or glyphs.
pub struct Renderer<'a> {
    roots: &'a RootTable,
}

impl<'a> Renderer<'a> {
    pub fn new(roots: &'a RootTable) -> Self {
        Self { roots }
    }

    /// Letter names joined with `-`, e.g. `in` -> `Gon-Drun`.
    pub fn to_phonetic(&self, word: &str, hint: Option<&RenderHint>) -> String {
        self.render(word, hint, Face::Phonetic)
    }

    /// Glyphs concatenated.
    pub fn to_symbols(&self, word: &str, hint: Option<&RenderHint>) -> String {
        self.render(word, hint, Face::Symbol)
    }

    fn render(&self, word: &str, hint: Option<&RenderHint>, face: Face) -> String {
        if is_bracketed(word) {
            return word.to_string();
        }

        // The word is itself a letter name.
        if let Some(root) = self.roots.find_root_by_target_name(word) {
            return match face {
                Face::Phonetic => word.to_string(),
                Face::Symbol => root.symbol.clone(),
            };
        }

        match hint {
            Some(RenderHint::Roots(letters)) => self.render_roots(word, letters, face),
            Some(RenderHint::Negation {
                prefix_letter,
                base,
            }) => {
                let prefix = match self.roots.find_root_for_letter(*prefix_letter) {
                    Some(root) => self.pick(&root.name, &root.symbol, face),
                    None => prefix_letter.to_uppercase().to_string(),
                };
                format!("{prefix}-{}", self.render(base, None, face))
            }
            None => match split_negation(word)
                .and_then(|(initial, rest)| self.roots.find_root_by_initial(initial).map(|r| (r, rest)))
            {
                Some((root, rest)) => format!(
                    "{}-{}",
                    self.pick(&root.name, &root.symbol, face),
                    self.render(rest, None, face)
                ),
                None => self.render_letters(word, face),
            },
        }
    }

    fn pick(&self, name: &str, symbol: &str, face: Face) -> String {
        match face {
            Face::Phonetic => name.to_string(),
            Face::Symbol => symbol.to_string(),
        }
    }

    /// `-` goes only between two consecutive mapped letters. An unmapped
    /// char is inserted verbatim and breaks the join, so `vooan` renders as
    /// `vooaDrun` when only `n` has a root.
    fn render_letters(&self, word: &str, face: Face) -> String {
        self.join(
            word.chars().map(|c| (c, self.roots.glyph(c).map(|g| (g.name.as_str(), g.symbol.as_str())))),
            face,
        )
    }

    /// Walks `word` and takes the next retained root for each char it
    /// stands for, ignoring case. Chars without a retained entry
    /// (apostrophes, digits) pass through.
    fn render_roots(&self, word: &str, letters: &[LetterRoot], face: Face) -> String {
        let mut retained = letters.iter().peekable();
        let units = word.chars().map(|c| {
            let root = retained
                .next_if(|lr| lr.letter.to_lowercase().eq(c.to_lowercase()))
                .and_then(|lr| lr.root.as_ref())
                .map(|root| (root.name.as_str(), root.symbol.as_str()));
            (c, root)
        });
        self.join(units, face)
    }

    fn join<'n>(&self, units: impl Iterator<Item = (char, Option<(&'n str, &'n str)>)>, face: Face) -> String {
        let mut out = String::new();
        let mut prev_mapped = false;

        for (c, mapped) in units {
            match mapped {
                Some((name, symbol)) => {
                    if face == Face::Phonetic && prev_mapped {
                        out.push('-');
                    }
                    out.push_str(match face {
                        Face::Phonetic => name,
                        Face::Symbol => symbol,
                    });
                    prev_mapped = true;
                }
                None => {
                    out.push(c);
                    prev_mapped = false;
                }
            }
        }
        out
    }
}

fn is_bracketed(word: &str) -> bool {
    word.len() >= 2 && word.starts_with('[') && word.ends_with(']')
}

/// `X-rest` with a single alphabetic `X` and a non-empty rest.
fn split_negation(word: &str) -> Option<(char, &str)> {
    let mut chars = word.chars();
    let initial = chars.next().filter(|c| c.is_alphabetic())?;
    let rest = chars.as_str().strip_prefix('-')?;
    (!rest.is_empty()).then_some((initial, rest))
}
