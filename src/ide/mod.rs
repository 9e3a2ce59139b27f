//! IDE features: thin queries on top of a document's symbol index.
//!
//! Each function corresponds to an editor request. None of them mutate the
//! index; hosts convert the returned types to their own UI or protocol types.
//!
//! ## Usage
//!
//! ```
//! use symdex::{DocumentIndexManager, DocumentId};
//! use symdex::ide::completions;
//!
//! let mut manager = DocumentIndexManager::default();
//! let id = DocumentId::from("main.fx");
//! manager.on_open(id.clone(), "").unwrap();
//!
//! let index = manager.lookup(&id).unwrap();
//! let items = completions(index, "sat");
//! assert!(items.is_empty());
//! ```

mod completion;
mod goto;
mod hover;
mod references;

pub use completion::{CompletionItem, completions, completions_at};
pub use goto::{GotoTarget, goto_declaration, goto_definition};
pub use hover::{HoverResult, hover};
pub use references::{Reference, find_references, find_references_at};
