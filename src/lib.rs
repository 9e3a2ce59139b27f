//! # symdex
//!
//! Per-document symbol indices for editor completion and existence lookups.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide        → Completion, hover, goto, find-references on top of an index
//!   ↓
//! project    → Loading system symbol definitions (JSON)
//!   ↓
//! workspace  → DocumentIndexManager: one SymbolIndex per open document
//!   ↓
//! extract    → Regex-driven population of a SymbolIndex
//!   ↓
//! index      → SymbolInfo, PrefixTrie (with frozen DAWG form), SymbolIndex
//!   ↓
//! base       → Primitives (Normalizer, DocumentId, LineIndex, text utils)
//! ```

// ============================================================================
// MODULES (dependency order: base → index → extract → workspace → project → ide)
// ============================================================================

/// Foundation types: Normalizer, DocumentId, LineIndex
pub mod base;

/// Core data structures: SymbolInfo, PrefixTrie, SymbolIndex
pub mod index;

/// Regex-driven symbol extraction
pub mod extract;

/// Document index lifecycle management
pub mod workspace;

/// System symbol loading (JSON)
#[cfg(feature = "json")]
pub mod project;

/// IDE features: completion, hover, goto, find-references
pub mod ide;

// Re-export commonly needed items
pub use base::{CaseInsensitive, CaseSensitive, DocumentId, Normalizer, normalize_symbol_name};
pub use extract::{ExtractRule, ExtractionStats, SymbolGrammar, SymbolPattern, extract_symbols};
pub use index::{
    DefinitionRange, FrozenInsertPolicy, IndexConfig, IndexError, IndexState, PrefixTrie,
    SymbolIndex, SymbolInfo, SymbolKind, SymbolOrigin,
};
pub use workspace::{DocumentIndexManager, SharedDocumentIndexManager, SystemSymbols};
