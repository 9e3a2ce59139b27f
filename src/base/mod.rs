//! Foundation types for symdex.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`Normalizer`] - Canonical lookup keys for symbol names
//! - [`DocumentId`] - Opaque identity of an open document
//! - [`LineIndex`], [`Position`] - Character offset to line/column conversion
//! - Text utilities for locating the word under a cursor
//!
//! This module has NO dependencies on other symdex modules.

mod document_id;
mod line_index;
mod normalize;
pub mod text_utils;

pub use document_id::DocumentId;
pub use line_index::{LineIndex, Position};
pub use normalize::{CaseInsensitive, CaseSensitive, Normalizer, normalize_symbol_name};

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
