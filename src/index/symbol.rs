//! Symbol metadata records.

use std::fmt;
use std::str::FromStr;

use smol_str::SmolStr;
use thiserror::Error;

/// Kind of a symbol, mirroring the completion item kinds editors display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SymbolKind {
    #[default]
    Text,
    Method,
    Function,
    Constructor,
    Field,
    Variable,
    Class,
    Interface,
    Module,
    Property,
    Unit,
    Value,
    Enum,
    Keyword,
    Snippet,
    Color,
    File,
    Reference,
    Folder,
    EnumMember,
    Constant,
    Struct,
    Event,
    Operator,
    TypeParameter,
}

impl SymbolKind {
    const ALL: [SymbolKind; 25] = [
        SymbolKind::Text,
        SymbolKind::Method,
        SymbolKind::Function,
        SymbolKind::Constructor,
        SymbolKind::Field,
        SymbolKind::Variable,
        SymbolKind::Class,
        SymbolKind::Interface,
        SymbolKind::Module,
        SymbolKind::Property,
        SymbolKind::Unit,
        SymbolKind::Value,
        SymbolKind::Enum,
        SymbolKind::Keyword,
        SymbolKind::Snippet,
        SymbolKind::Color,
        SymbolKind::File,
        SymbolKind::Reference,
        SymbolKind::Folder,
        SymbolKind::EnumMember,
        SymbolKind::Constant,
        SymbolKind::Struct,
        SymbolKind::Event,
        SymbolKind::Operator,
        SymbolKind::TypeParameter,
    ];

    /// Name as written in symbol definition files.
    pub fn as_str(&self) -> &'static str {
        match self {
            SymbolKind::Text => "Text",
            SymbolKind::Method => "Method",
            SymbolKind::Function => "Function",
            SymbolKind::Constructor => "Constructor",
            SymbolKind::Field => "Field",
            SymbolKind::Variable => "Variable",
            SymbolKind::Class => "Class",
            SymbolKind::Interface => "Interface",
            SymbolKind::Module => "Module",
            SymbolKind::Property => "Property",
            SymbolKind::Unit => "Unit",
            SymbolKind::Value => "Value",
            SymbolKind::Enum => "Enum",
            SymbolKind::Keyword => "Keyword",
            SymbolKind::Snippet => "Snippet",
            SymbolKind::Color => "Color",
            SymbolKind::File => "File",
            SymbolKind::Reference => "Reference",
            SymbolKind::Folder => "Folder",
            SymbolKind::EnumMember => "EnumMember",
            SymbolKind::Constant => "Constant",
            SymbolKind::Struct => "Struct",
            SymbolKind::Event => "Event",
            SymbolKind::Operator => "Operator",
            SymbolKind::TypeParameter => "TypeParameter",
        }
    }

    /// Convert to the LSP `CompletionItemKind` number.
    pub fn to_lsp(&self) -> u32 {
        // LSP numbering starts at 1 and follows declaration order.
        Self::ALL
            .iter()
            .position(|kind| kind == self)
            .map_or(1, |i| i as u32 + 1)
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a kind name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown symbol kind '{0}'")]
pub struct UnknownSymbolKind(pub String);

impl FromStr for SymbolKind {
    type Err = UnknownSymbolKind;

    /// Parse a kind name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownSymbolKind(name.to_string()))
    }
}

/// Character offsets of a symbol's definition, e.g. a forward-declared
/// function whose body appears later.
///
/// Patterns build it from byte offsets; [`extract_symbols`](crate::extract_symbols)
/// converts those before insertion.
///
/// Only constructible with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DefinitionRange {
    start: usize,
    end: usize,
}

impl DefinitionRange {
    pub fn new(start: usize, end: usize) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }
}

/// Where a symbol was discovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SymbolOrigin {
    /// Extracted from, or added for, a document's own text.
    #[default]
    Document,
    /// Built-in, shared by every document.
    System,
}

/// One discovered or built-in symbol.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SymbolInfo {
    /// Original spelling, used for normalization and display.
    pub label: SmolStr,
    pub kind: SymbolKind,
    /// Short type or signature string.
    pub detail: String,
    /// Long-form markdown documentation.
    pub documentation: String,
    /// Explicit ordering key, independent of the label.
    pub sort_text: SmolStr,
    /// Value of a compile-time constant.
    pub value: Option<i64>,
    /// Character offset where the symbol was first seen. Zero for system symbols.
    pub declaration_offset: usize,
    pub definition: Option<DefinitionRange>,
    pub origin: SymbolOrigin,
}

impl SymbolInfo {
    pub fn new(label: impl Into<SmolStr>, kind: SymbolKind) -> Self {
        Self {
            label: label.into(),
            kind,
            ..Self::default()
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }

    pub fn with_documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = documentation.into();
        self
    }

    pub fn with_sort_text(mut self, sort_text: impl Into<SmolStr>) -> Self {
        self.sort_text = sort_text.into();
        self
    }

    pub fn with_value(mut self, value: i64) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_declaration_offset(mut self, offset: usize) -> Self {
        self.declaration_offset = offset;
        self
    }

    pub fn with_definition(mut self, definition: DefinitionRange) -> Self {
        self.definition = Some(definition);
        self
    }

    pub fn with_origin(mut self, origin: SymbolOrigin) -> Self {
        self.origin = origin;
        self
    }

    /// Built-in symbols have no location in any document.
    pub fn is_system(&self) -> bool {
        self.origin == SymbolOrigin::System
    }

    pub fn definition_offset(&self) -> Option<usize> {
        self.definition.map(|d| d.start())
    }

    pub fn definition_end_offset(&self) -> Option<usize> {
        self.definition.map(|d| d.end())
    }

    /// Key completion lists sort by: `sort_text`, or the label when unset.
    pub fn sort_key(&self) -> &str {
        if self.sort_text.is_empty() {
            &self.label
        } else {
            &self.sort_text
        }
    }
}
