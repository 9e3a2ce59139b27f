//! Loading system symbol definitions.
//!
//! Built-in symbols (keywords, standard functions) are described in JSON files
//! holding an array of definitions:
//!
//! ```json
//! [
//!   { "name": "saturate", "kind": "Function", "detail": "saturate(x)",
//!     "documentation": "Clamps x to [0, 1].", "sortText": "b_saturate" }
//! ]
//! ```
//!
//! They are loaded once at startup into a [`SystemSymbols`](crate::SystemSymbols)
//! value that every document index shares.

mod error;
mod system_symbols;

pub use error::LoadError;
pub use system_symbols::{SymbolDefinition, SystemSymbolLoader};
