//! Index configuration.

use std::sync::Arc;

use crate::base::{CaseInsensitive, Normalizer};

/// What [`SymbolIndex::add`](super::SymbolIndex::add) does once the index is frozen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrozenInsertPolicy {
    /// Return [`IndexError::Frozen`](super::IndexError::Frozen).
    #[default]
    Reject,
    /// Drop the insert and report success.
    Ignore,
}

/// Settings shared by every index a manager creates.
#[derive(Debug, Clone)]
pub struct IndexConfig {
    pub frozen_insert: FrozenInsertPolicy,
    /// Freeze each document index once extraction and the system symbol
    /// merge are done.
    pub freeze_after_populate: bool,
    pub normalizer: Arc<dyn Normalizer>,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            frozen_insert: FrozenInsertPolicy::default(),
            freeze_after_populate: true,
            normalizer: Arc::new(CaseInsensitive),
        }
    }
}

impl IndexConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_frozen_insert(mut self, policy: FrozenInsertPolicy) -> Self {
        self.frozen_insert = policy;
        self
    }

    pub fn with_freeze_after_populate(mut self, freeze: bool) -> Self {
        self.freeze_after_populate = freeze;
        self
    }

    pub fn with_normalizer(mut self, normalizer: impl Normalizer + 'static) -> Self {
        self.normalizer = Arc::new(normalizer);
        self
    }
}
