//! Core symbol index.
//!
//! A [`SymbolIndex`] pairs a [`PrefixTrie`] of normalized names with a map
//! from normalized name to the most recently inserted [`SymbolInfo`]. The trie
//! answers existence and prefix queries; the map supplies metadata.
//!
//! ## Lifecycle
//!
//! ```text
//! Empty ──add──▶ Populated ──freeze──▶ Frozen
//!   └───────────────freeze──────────────▲
//! ```
//!
//! Queries are valid in every state. Inserts after freezing follow the
//! configured [`FrozenInsertPolicy`].

mod config;
mod error;
mod symbol;
mod symbol_index;
mod trie;

pub use config::{FrozenInsertPolicy, IndexConfig};
pub use error::IndexError;
pub use symbol::{DefinitionRange, SymbolInfo, SymbolKind, SymbolOrigin, UnknownSymbolKind};
pub use symbol_index::{IndexState, SymbolIndex};
pub use trie::PrefixTrie;
