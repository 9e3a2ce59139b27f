use std::ops::Deref;
use std::sync::Arc;

use crate::index::{SymbolInfo, SymbolOrigin};

/// Built-in symbols merged into every document index.
///
/// Constructed once and never mutated; clones share the same allocation.
/// Every entry is marked with [`SymbolOrigin::System`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemSymbols {
    symbols: Arc<[SymbolInfo]>,
}

impl SystemSymbols {
    pub fn new(symbols: impl IntoIterator<Item = SymbolInfo>) -> Self {
        symbols.into_iter().collect()
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[SymbolInfo] {
        &self.symbols
    }
}

impl Deref for SystemSymbols {
    type Target = [SymbolInfo];

    fn deref(&self) -> &[SymbolInfo] {
        &self.symbols
    }
}

impl FromIterator<SymbolInfo> for SystemSymbols {
    fn from_iter<I: IntoIterator<Item = SymbolInfo>>(iter: I) -> Self {
        Self {
            symbols: iter
                .into_iter()
                .map(|symbol| symbol.with_origin(SymbolOrigin::System))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SystemSymbols {
    type Item = &'a SymbolInfo;
    type IntoIter = std::slice::Iter<'a, SymbolInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter()
    }
}
