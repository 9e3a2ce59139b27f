//! Canonicalization of symbol spellings into lookup keys.

use std::fmt::Debug;

use smol_str::SmolStr;

/// Maps a raw symbol spelling to the key used for every trie and map operation.
///
/// Implementations must be pure and total: the same input always yields the
/// same key, and every string (including the empty one) has a key.
pub trait Normalizer: Send + Sync + Debug {
    fn normalize(&self, name: &str) -> SmolStr;
}

/// Trims surrounding whitespace and lower-cases. The default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaseInsensitive;

impl Normalizer for CaseInsensitive {
    fn normalize(&self, name: &str) -> SmolStr {
        let trimmed = name.trim();
        if trimmed.chars().any(char::is_uppercase) {
            SmolStr::from(trimmed.to_lowercase())
        } else {
            SmolStr::from(trimmed)
        }
    }
}

/// Trims surrounding whitespace only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaseSensitive;

impl Normalizer for CaseSensitive {
    fn normalize(&self, name: &str) -> SmolStr {
        SmolStr::from(name.trim())
    }
}

/// Normalize a symbol name with the default [`CaseInsensitive`] rules.
///
/// # Example
/// ```
/// use symdex::normalize_symbol_name;
///
/// assert_eq!(normalize_symbol_name("  FooBar "), "foobar");
/// assert_eq!(normalize_symbol_name(""), "");
/// ```
pub fn normalize_symbol_name(name: &str) -> SmolStr {
    CaseInsensitive.normalize(name)
}
