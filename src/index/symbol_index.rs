use std::sync::Arc;

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use super::{FrozenInsertPolicy, IndexConfig, IndexError, PrefixTrie, SymbolInfo};
use crate::base::Normalizer;

/// Where a [`SymbolIndex`] is in its one-way lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexState {
    Empty,
    Populated,
    Frozen,
}

/// Prefix-searchable collection of symbols for one document (or the system set).
///
/// Every key in the trie has exactly one entry in the symbol map and vice
/// versa. Re-inserting a name overwrites its metadata.
#[derive(Debug, Clone)]
pub struct SymbolIndex {
    trie: PrefixTrie,
    symbols: FxHashMap<SmolStr, SymbolInfo>,
    normalizer: Arc<dyn Normalizer>,
    frozen_insert: FrozenInsertPolicy,
}

impl Default for SymbolIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolIndex {
    /// Create an empty index with the default configuration.
    pub fn new() -> Self {
        Self::with_config(&IndexConfig::default())
    }

    pub fn with_config(config: &IndexConfig) -> Self {
        Self {
            trie: PrefixTrie::new(),
            symbols: FxHashMap::default(),
            normalizer: Arc::clone(&config.normalizer),
            frozen_insert: config.frozen_insert,
        }
    }

    /// The lookup key this index uses for `label`.
    pub fn normalize(&self, label: &str) -> SmolStr {
        self.normalizer.normalize(label)
    }

    /// Insert a symbol under its normalized label. Last write wins.
    ///
    /// After [`freeze`](Self::freeze) the insert is rejected with
    /// [`IndexError::Frozen`] or silently dropped, per the configured
    /// [`FrozenInsertPolicy`].
    pub fn add(&mut self, symbol: SymbolInfo) -> Result<(), IndexError> {
        let key = self.normalize(&symbol.label);
        if self.trie.is_frozen() {
            return match self.frozen_insert {
                FrozenInsertPolicy::Reject => {
                    tracing::warn!(key = %key, "rejected insert into frozen symbol index");
                    Err(IndexError::frozen(key))
                }
                FrozenInsertPolicy::Ignore => {
                    tracing::trace!(key = %key, "ignored insert into frozen symbol index");
                    Ok(())
                }
            };
        }

        self.trie.insert(&key)?;
        self.symbols.insert(key, symbol);
        Ok(())
    }

    /// Insert clones of every symbol, stopping at the first failure.
    pub fn add_all<'a>(
        &mut self,
        symbols: impl IntoIterator<Item = &'a SymbolInfo>,
    ) -> Result<(), IndexError> {
        for symbol in symbols {
            self.add(symbol.clone())?;
        }
        Ok(())
    }

    /// Whether `label` was ever inserted, regardless of its kind.
    pub fn contains(&self, label: &str) -> bool {
        self.trie.contains(&self.normalize(label))
    }

    pub fn get_symbol(&self, label: &str) -> Option<&SymbolInfo> {
        self.symbols.get(&self.normalize(label))
    }

    /// All symbols whose normalized name starts with the normalized `prefix`.
    ///
    /// Results come back in key order; completion UIs re-sort by
    /// [`SymbolInfo::sort_key`].
    pub fn get_all_completions(&self, prefix: &str) -> Vec<&SymbolInfo> {
        self.trie
            .keys_with_prefix(&self.normalize(prefix))
            .iter()
            .filter_map(|key| self.symbols.get(key))
            .collect()
    }

    /// Compact the trie for read-heavy use. One-way and idempotent.
    pub fn freeze(&mut self) {
        self.trie.freeze();
    }

    pub fn is_frozen(&self) -> bool {
        self.trie.is_frozen()
    }

    pub fn state(&self) -> IndexState {
        if self.trie.is_frozen() {
            IndexState::Frozen
        } else if self.symbols.is_empty() {
            IndexState::Empty
        } else {
            IndexState::Populated
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Every stored symbol, in no particular order.
    pub fn symbols(&self) -> impl Iterator<Item = &SymbolInfo> {
        self.symbols.values()
    }

    pub fn frozen_insert_policy(&self) -> FrozenInsertPolicy {
        self.frozen_insert
    }
}
