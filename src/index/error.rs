//! Error types for index operations.

use smol_str::SmolStr;
use thiserror::Error;

use crate::base::DocumentId;

/// Recoverable faults raised by the symbol index and its manager.
///
/// Absent symbols and documents are not errors; lookups return `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    /// Insertion attempted after the index was frozen, under
    /// [`FrozenInsertPolicy::Reject`](super::FrozenInsertPolicy::Reject).
    #[error("cannot insert '{key}': index is frozen")]
    Frozen { key: SmolStr },

    /// Population requested for a document that has no index yet.
    /// Indicates a caller ordering bug.
    #[error("no symbol index exists for document '{document}'")]
    MissingDocument { document: DocumentId },
}

impl IndexError {
    pub fn frozen(key: impl Into<SmolStr>) -> Self {
        Self::Frozen { key: key.into() }
    }

    pub fn missing_document(document: &DocumentId) -> Self {
        Self::MissingDocument {
            document: document.clone(),
        }
    }
}
