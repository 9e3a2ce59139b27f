//! Document index lifecycle.
//!
//! [`DocumentIndexManager`] owns one [`SymbolIndex`](crate::SymbolIndex) per
//! open document and rebuilds it from scratch whenever the host reports an
//! edit. Every index also receives the shared, immutable [`SystemSymbols`].
//!
//! ## Host events
//!
//! | Event                     | Effect                                             |
//! |---------------------------|----------------------------------------------------|
//! | `on_open(id, text)`       | build a fresh index, extract, merge system symbols |
//! | `on_change(id, text)`     | discard the old index, rebuild as on open          |
//! | `on_close(id)`            | discard the index                                  |
//!
//! [`SharedDocumentIndexManager`] offers the same operations for hosts that
//! deliver events from several threads.

mod manager;
mod shared;
mod system;

pub use manager::DocumentIndexManager;
pub use shared::SharedDocumentIndexManager;
pub use system::SystemSymbols;
