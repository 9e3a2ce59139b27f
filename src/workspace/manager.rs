use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::SystemSymbols;
use crate::base::DocumentId;
use crate::extract::SymbolGrammar;
use crate::index::{IndexConfig, IndexError, SymbolIndex};

/// Everything needed to build a document's index from its text.
#[derive(Debug, Clone)]
pub(super) struct IndexPipeline {
    pub(super) config: IndexConfig,
    pub(super) grammar: Arc<SymbolGrammar>,
    pub(super) system_symbols: SystemSymbols,
}

impl IndexPipeline {
    pub(super) fn empty_index(&self) -> SymbolIndex {
        SymbolIndex::with_config(&self.config)
    }

    /// Extract with every grammar pattern, merge the system symbols, then
    /// freeze if configured.
    pub(super) fn build(&self, id: &DocumentId, text: &str) -> Result<SymbolIndex, IndexError> {
        let mut index = self.empty_index();
        let stats = self.grammar.extract(&mut index, text)?;
        index.add_all(&self.system_symbols)?;
        if self.config.freeze_after_populate {
            index.freeze();
        }
        tracing::debug!(
            document = %id,
            extracted = stats.inserted,
            system = self.system_symbols.len(),
            symbols = index.len(),
            frozen = index.is_frozen(),
            "built document index"
        );
        Ok(index)
    }
}

/// Owns one [`SymbolIndex`] per open document.
///
/// Indices are never shared between documents. Edits are handled by
/// discarding the document's index and rebuilding it, never by patching it.
#[derive(Debug)]
pub struct DocumentIndexManager {
    indices: FxHashMap<DocumentId, SymbolIndex>,
    pipeline: IndexPipeline,
}

impl Default for DocumentIndexManager {
    fn default() -> Self {
        Self::new(SystemSymbols::empty(), SymbolGrammar::new(), IndexConfig::default())
    }
}

impl DocumentIndexManager {
    pub fn new(
        system_symbols: SystemSymbols,
        grammar: impl Into<Arc<SymbolGrammar>>,
        config: IndexConfig,
    ) -> Self {
        Self {
            indices: FxHashMap::default(),
            pipeline: IndexPipeline {
                config,
                grammar: grammar.into(),
                system_symbols,
            },
        }
    }

    pub fn system_symbols(&self) -> &SystemSymbols {
        &self.pipeline.system_symbols
    }

    pub fn grammar(&self) -> &SymbolGrammar {
        &self.pipeline.grammar
    }

    pub fn config(&self) -> &IndexConfig {
        &self.pipeline.config
    }

    // ============================================================
    // Index lifecycle
    // ============================================================

    /// Create an empty index for `id`, replacing any existing one.
    pub fn create(&mut self, id: impl Into<DocumentId>) -> &mut SymbolIndex {
        let id = id.into();
        tracing::debug!(document = %id, "created document index");
        let index = self.pipeline.empty_index();
        self.indices.entry(id).insert_entry(index).into_mut()
    }

    /// Merge every system symbol into the existing index for `id`.
    ///
    /// The index must already exist (see [`create`](Self::create)); a missing
    /// index is a caller ordering bug. It is logged and reported as
    /// [`IndexError::MissingDocument`], and nothing else happens.
    pub fn register_and_populate(&mut self, id: &DocumentId) -> Result<(), IndexError> {
        let Some(index) = self.indices.get_mut(id) else {
            tracing::error!(document = %id, "populate requested before the index was created");
            return Err(IndexError::missing_document(id));
        };
        index.add_all(&self.pipeline.system_symbols)
    }

    /// Discard the index for `id` and start over with only system symbols.
    ///
    /// The fresh index is left unfrozen so extraction passes can follow.
    pub fn reset(&mut self, id: &DocumentId) -> Result<(), IndexError> {
        tracing::debug!(document = %id, "resetting document index");
        self.remove(id);
        self.create(id.clone());
        self.register_and_populate(id)
    }

    /// Discard the index for `id`, returning it. No-op if absent.
    pub fn remove(&mut self, id: &DocumentId) -> Option<SymbolIndex> {
        let removed = self.indices.remove(id);
        if removed.is_some() {
            tracing::debug!(document = %id, "removed document index");
        }
        removed
    }

    pub fn lookup(&self, id: &DocumentId) -> Option<&SymbolIndex> {
        self.indices.get(id)
    }

    /// Mutable access, for callers driving extraction passes by hand.
    pub fn lookup_mut(&mut self, id: &DocumentId) -> Option<&mut SymbolIndex> {
        self.indices.get_mut(id)
    }

    pub fn has(&self, id: &DocumentId) -> bool {
        self.indices.contains_key(id)
    }

    pub fn documents(&self) -> impl Iterator<Item = &DocumentId> {
        self.indices.keys()
    }

    pub fn document_count(&self) -> usize {
        self.indices.len()
    }

    // ============================================================
    // Host events
    // ============================================================

    /// Index a newly opened document.
    ///
    /// The index is built off to the side and swapped in only when complete,
    /// so a failure leaves the previous state untouched.
    pub fn on_open(
        &mut self,
        id: impl Into<DocumentId>,
        text: &str,
    ) -> Result<&SymbolIndex, IndexError> {
        let id = id.into();
        let index = self.pipeline.build(&id, text)?;
        Ok(&*self.indices.entry(id).insert_entry(index).into_mut())
    }

    /// Rebuild a document's index from its edited text, replacing the old one
    /// wholesale. Nothing from the previous text survives.
    pub fn on_change(
        &mut self,
        id: impl Into<DocumentId>,
        text: &str,
    ) -> Result<&SymbolIndex, IndexError> {
        let id = id.into();
        tracing::debug!(document = %id, "reindexing changed document");
        self.on_open(id, text)
    }

    /// Returns `true` if the document had an index.
    pub fn on_close(&mut self, id: &DocumentId) -> bool {
        self.remove(id).is_some()
    }
}
