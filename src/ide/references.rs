//! Find references implementation.
//!
//! Occurrences are found lexically with a whole-word regex; the symbol index
//! is not consulted.

use regex::Regex;

use crate::base::text_utils::{CharOffsets, word_at};
use crate::base::{LineIndex, Position, TextRange, TextSize};

/// One whole-word occurrence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reference {
    /// Character offset of the first character.
    pub start: usize,
    /// Character offset one past the last character.
    pub end: usize,
    /// Byte range in the text.
    pub range: TextRange,
    pub position: Position,
}

/// Every whole-word occurrence of `word` in `text`, in order.
pub fn find_references(text: &str, word: &str) -> Vec<Reference> {
    if word.is_empty() {
        return Vec::new();
    }
    let pattern = format!(r"\b{}\b", regex::escape(word));
    let Ok(regex) = Regex::new(&pattern) else {
        tracing::warn!(word, "could not build reference pattern");
        return Vec::new();
    };

    let lines = LineIndex::new(text);
    let mut offsets = CharOffsets::new(text);
    let word_len = word.chars().count();
    regex
        .find_iter(text)
        .map(|m| {
            let start = offsets.advance_to(m.start());
            Reference {
                start,
                end: start + word_len,
                range: TextRange::new(text_size(m.start()), text_size(m.end())),
                position: lines.position(start),
            }
        })
        .collect()
}

/// References to the word under character `offset`.
pub fn find_references_at(text: &str, offset: usize) -> Vec<Reference> {
    match word_at(text, offset) {
        Some(word) => find_references(text, &word.text),
        None => Vec::new(),
    }
}

fn text_size(offset: usize) -> TextSize {
    TextSize::new(u32::try_from(offset).unwrap_or(u32::MAX))
}
