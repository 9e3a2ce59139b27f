//! Completion suggestions implementation.

use smol_str::SmolStr;

use crate::base::text_utils::word_before;
use crate::index::{SymbolIndex, SymbolInfo, SymbolKind};

/// A completion suggestion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionItem {
    /// The text to insert.
    pub label: SmolStr,
    pub kind: SymbolKind,
    /// Detail text (shown after label).
    pub detail: Option<String>,
    /// Markdown documentation (shown in popup).
    pub documentation: Option<String>,
    /// Key the list is ordered by.
    pub sort_text: SmolStr,
}

impl CompletionItem {
    pub fn from_symbol(symbol: &SymbolInfo) -> Self {
        Self {
            label: symbol.label.clone(),
            kind: symbol.kind,
            detail: non_empty(&symbol.detail),
            documentation: non_empty(&symbol.documentation),
            sort_text: SmolStr::from(symbol.sort_key()),
        }
    }

    /// LSP `CompletionItemKind` number.
    pub fn lsp_kind(&self) -> u32 {
        self.kind.to_lsp()
    }
}

fn non_empty(text: &str) -> Option<String> {
    (!text.is_empty()).then(|| text.to_string())
}

/// Suggestions for every symbol starting with `prefix`, ordered by sort key
/// and then by label.
pub fn completions(index: &SymbolIndex, prefix: &str) -> Vec<CompletionItem> {
    let mut items: Vec<CompletionItem> = index
        .get_all_completions(prefix)
        .into_iter()
        .map(CompletionItem::from_symbol)
        .collect();
    items.sort_by(|a, b| {
        a.sort_text
            .cmp(&b.sort_text)
            .then_with(|| a.label.cmp(&b.label))
    });
    items
}

/// Suggestions for the partial word ending at character `offset` of `text`.
///
/// With no word before the cursor, every symbol is suggested.
pub fn completions_at(index: &SymbolIndex, text: &str, offset: usize) -> Vec<CompletionItem> {
    let prefix = word_before(text, offset);
    completions(index, &prefix)
}
