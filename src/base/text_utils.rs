//! Text utilities for locating words in document text.
//!
//! Offsets taken and returned here are character offsets into the whole
//! document, not byte offsets.

/// Check if a character is considered part of a word (identifier).
///
/// Uses Unicode Standard Annex #31 continuation rules, which also admits `_`
/// and digits.
#[inline]
pub fn is_word_character(c: char) -> bool {
    unicode_ident::is_xid_continue(c)
}

/// A word located in document text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordAt {
    pub text: String,
    /// Character offset of the first character.
    pub start: usize,
    /// Character offset one past the last character.
    pub end: usize,
}

/// Find the word touching `offset`.
///
/// A cursor sitting immediately after a word (as it does while typing) still
/// counts as touching it.
///
/// # Example
/// ```
/// use symdex::base::text_utils::word_at;
///
/// let word = word_at("float4 color;", 9).unwrap();
/// assert_eq!(word.text, "color");
/// assert_eq!((word.start, word.end), (7, 12));
/// ```
pub fn word_at(text: &str, offset: usize) -> Option<WordAt> {
    let chars: Vec<char> = text.chars().collect();
    let on_word = |i: usize| chars.get(i).copied().is_some_and(is_word_character);

    let anchor = if on_word(offset) {
        offset
    } else if offset > 0 && on_word(offset - 1) {
        offset - 1
    } else {
        return None;
    };

    let mut start = anchor;
    while start > 0 && on_word(start - 1) {
        start -= 1;
    }
    let mut end = anchor;
    while on_word(end) {
        end += 1;
    }

    Some(WordAt {
        text: chars[start..end].iter().collect(),
        start,
        end,
    })
}

/// The part of a word that precedes `offset`, used as a completion prefix.
///
/// Returns an empty string when the cursor is not directly after a word
/// character.
pub fn word_before(text: &str, offset: usize) -> String {
    let before: Vec<char> = text.chars().take(offset).collect();
    let start = before
        .iter()
        .rposition(|c| !is_word_character(*c))
        .map_or(0, |i| i + 1);
    before[start..].iter().collect()
}

/// Converts increasing byte offsets into character offsets in one pass.
///
/// Regex matches report byte offsets; symbols and references record character
/// offsets. Offsets must be fed in non-decreasing order and fall on character
/// boundaries.
#[derive(Debug)]
pub struct CharOffsets<'a> {
    text: &'a str,
    byte: usize,
    chars: usize,
}

impl<'a> CharOffsets<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            byte: 0,
            chars: 0,
        }
    }

    /// Character offset of `byte_offset`.
    pub fn advance_to(&mut self, byte_offset: usize) -> usize {
        if byte_offset < self.byte {
            // Out of order; recount from the start.
            self.byte = 0;
            self.chars = 0;
        }
        self.chars += self.text[self.byte..byte_offset].chars().count();
        self.byte = byte_offset;
        self.chars
    }
}
