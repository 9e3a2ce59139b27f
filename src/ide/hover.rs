//! Hover information implementation.

use crate::base::text_utils::word_at;
use crate::base::{LineIndex, Position};
use crate::index::{SymbolIndex, SymbolInfo};

/// Result of a hover request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HoverResult {
    /// The hover content (markdown).
    pub contents: String,
    /// Start of the hovered word.
    pub start: Position,
    /// End of the hovered word (exclusive).
    pub end: Position,
}

/// Hover content for the symbol under character `offset` of `text`.
pub fn hover(index: &SymbolIndex, text: &str, offset: usize) -> Option<HoverResult> {
    let word = word_at(text, offset)?;
    let symbol = index.get_symbol(&word.text)?;
    let lines = LineIndex::new(text);
    Some(HoverResult {
        contents: hover_contents(symbol),
        start: lines.position(word.start),
        end: lines.position(word.end),
    })
}

fn hover_contents(symbol: &SymbolInfo) -> String {
    let signature = if symbol.detail.is_empty() {
        symbol.label.as_str()
    } else {
        symbol.detail.as_str()
    };
    let mut contents = format!("```\n{signature}\n```");
    if let Some(value) = symbol.value {
        contents.push_str(&format!("\n\nValue: `{value}`"));
    }
    if !symbol.documentation.is_empty() {
        contents.push_str("\n\n");
        contents.push_str(&symbol.documentation);
    }
    contents
}
