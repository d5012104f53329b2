//! Character normalization shared by the grid and the search words.
//!
//! Matching is case-insensitive. Rather than uppercasing whole strings (which can
//! change their length, e.g. `ß` -> `SS`), every character is folded on its own so a
//! grid cell is always exactly one `char` and a word keeps one `char` per letter.

pub(crate) trait SoupChar {
    /// Uppercase form of the char when Unicode maps it to exactly one char; the char
    /// itself otherwise.
    fn fold(self) -> char;
}

impl SoupChar for char {
    fn fold(self) -> char {
        let mut upper = self.to_uppercase();
        match (upper.next(), upper.next()) {
            (Some(single), None) => single,
            _ => self,
        }
    }
}

/// Fold each char of `word`, keeping one output char per input char.
pub(crate) fn fold_word(word: &str) -> Vec<char> {
    word.chars().map(SoupChar::fold).collect()
}
