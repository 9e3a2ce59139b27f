//! Go-to-declaration and go-to-definition.
//!
//! Built-in symbols have no location in any document, so both requests
//! return `None` for them.

use crate::base::text_utils::word_at;
use crate::base::{DocumentId, LineIndex, Position};
use crate::index::SymbolInfo;
use crate::workspace::DocumentIndexManager;

/// Where a goto request lands, within the same document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GotoTarget {
    /// Character offset of the target.
    pub offset: usize,
    pub position: Position,
    /// End of a definition body, when known.
    pub end: Option<Position>,
}

/// Jump to where the symbol under the cursor was first declared.
pub fn goto_declaration(
    manager: &DocumentIndexManager,
    document: &DocumentId,
    text: &str,
    offset: usize,
) -> Option<GotoTarget> {
    let symbol = document_symbol_at(manager, document, text, offset)?;
    let lines = LineIndex::new(text);
    Some(GotoTarget {
        offset: symbol.declaration_offset,
        position: lines.position(symbol.declaration_offset),
        end: None,
    })
}

/// Jump to the symbol's definition, falling back to its declaration when no
/// separate definition was recorded.
pub fn goto_definition(
    manager: &DocumentIndexManager,
    document: &DocumentId,
    text: &str,
    offset: usize,
) -> Option<GotoTarget> {
    let symbol = document_symbol_at(manager, document, text, offset)?;
    let Some(definition) = symbol.definition else {
        return goto_declaration(manager, document, text, offset);
    };
    let lines = LineIndex::new(text);
    Some(GotoTarget {
        offset: definition.start(),
        position: lines.position(definition.start()),
        end: Some(lines.position(definition.end())),
    })
}

/// The indexed symbol under the cursor, unless it is a system symbol.
fn document_symbol_at<'a>(
    manager: &'a DocumentIndexManager,
    document: &DocumentId,
    text: &str,
    offset: usize,
) -> Option<&'a SymbolInfo> {
    let word = word_at(text, offset)?;
    let symbol = manager.lookup(document)?.get_symbol(&word.text)?;
    (!symbol.is_system()).then_some(symbol)
}
