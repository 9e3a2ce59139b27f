use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use rustc_hash::FxHashMap;

use super::SystemSymbols;
use super::manager::IndexPipeline;
use crate::base::DocumentId;
use crate::extract::SymbolGrammar;
use crate::index::{IndexConfig, IndexError, SymbolIndex};

type SharedIndex = Arc<Mutex<SymbolIndex>>;

/// Thread-safe counterpart of [`DocumentIndexManager`](super::DocumentIndexManager).
///
/// The identity map sits behind a read-write lock and each document's index
/// behind its own mutex, so work on one document never blocks another.
/// Indices are built outside of any lock and swapped in when complete.
#[derive(Debug)]
pub struct SharedDocumentIndexManager {
    indices: RwLock<FxHashMap<DocumentId, SharedIndex>>,
    pipeline: IndexPipeline,
}

impl Default for SharedDocumentIndexManager {
    fn default() -> Self {
        Self::new(SystemSymbols::empty(), SymbolGrammar::new(), IndexConfig::default())
    }
}

impl SharedDocumentIndexManager {
    pub fn new(
        system_symbols: SystemSymbols,
        grammar: impl Into<Arc<SymbolGrammar>>,
        config: IndexConfig,
    ) -> Self {
        Self {
            indices: RwLock::new(FxHashMap::default()),
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

    /// Create an empty index for `id`, replacing any existing one.
    pub fn create(&self, id: impl Into<DocumentId>) -> SharedIndex {
        let index = Arc::new(Mutex::new(self.pipeline.empty_index()));
        self.indices.write().insert(id.into(), Arc::clone(&index));
        index
    }

    /// Merge the system symbols into the existing index for `id`.
    pub fn register_and_populate(&self, id: &DocumentId) -> Result<(), IndexError> {
        let Some(index) = self.lookup(id) else {
            tracing::error!(document = %id, "populate requested before the index was created");
            return Err(IndexError::missing_document(id));
        };
        let mut index = index.lock();
        index.add_all(&self.pipeline.system_symbols)
    }

    /// Replace the index for `id` with one holding only system symbols.
    pub fn reset(&self, id: &DocumentId) -> Result<(), IndexError> {
        tracing::debug!(document = %id, "resetting document index");
        let mut index = self.pipeline.empty_index();
        index.add_all(&self.pipeline.system_symbols)?;
        self.install(id.clone(), index);
        Ok(())
    }

    /// Returns `true` if the document had an index.
    pub fn remove(&self, id: &DocumentId) -> bool {
        let removed = self.indices.write().remove(id).is_some();
        if removed {
            tracing::debug!(document = %id, "removed document index");
        }
        removed
    }

    pub fn has(&self, id: &DocumentId) -> bool {
        self.indices.read().contains_key(id)
    }

    /// Handle to a document's index. The handle stays valid after the
    /// document is reindexed or closed but no longer reflects the manager.
    pub fn lookup(&self, id: &DocumentId) -> Option<SharedIndex> {
        self.indices.read().get(id).cloned()
    }

    /// Run `f` against the current index for `id`.
    pub fn with_index<R>(&self, id: &DocumentId, f: impl FnOnce(&SymbolIndex) -> R) -> Option<R> {
        let index = self.lookup(id)?;
        let guard = index.lock();
        Some(f(&guard))
    }

    pub fn with_index_mut<R>(
        &self,
        id: &DocumentId,
        f: impl FnOnce(&mut SymbolIndex) -> R,
    ) -> Option<R> {
        let index = self.lookup(id)?;
        let mut guard = index.lock();
        Some(f(&mut guard))
    }

    pub fn document_count(&self) -> usize {
        self.indices.read().len()
    }

    pub fn on_open(&self, id: impl Into<DocumentId>, text: &str) -> Result<(), IndexError> {
        let id = id.into();
        let index = self.pipeline.build(&id, text)?;
        self.install(id, index);
        Ok(())
    }

    pub fn on_change(&self, id: impl Into<DocumentId>, text: &str) -> Result<(), IndexError> {
        self.on_open(id, text)
    }

    pub fn on_close(&self, id: &DocumentId) -> bool {
        self.remove(id)
    }

    fn install(&self, id: DocumentId, index: SymbolIndex) {
        self.indices
            .write()
            .insert(id, Arc::new(Mutex::new(index)));
    }
}
