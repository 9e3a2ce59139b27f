use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;
use smol_str::SmolStr;

use super::LoadError;
use crate::base::normalize_symbol_name;
use crate::index::{SymbolInfo, SymbolKind};
use crate::workspace::SystemSymbols;

/// One entry of a symbol definition file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolDefinition {
    pub name: String,
    pub kind: String,
    #[serde(default)]
    pub detail: String,
    #[serde(default)]
    pub documentation: String,
    #[serde(default)]
    pub sort_text: String,
}

impl SymbolDefinition {
    /// Convert to a symbol. Value and offsets stay at their defaults.
    pub fn into_symbol(self, position: usize) -> Result<SymbolInfo, LoadError> {
        if self.name.trim().is_empty() {
            return Err(LoadError::EmptyName { position });
        }
        let kind: SymbolKind = self.kind.parse().map_err(|_| LoadError::UnknownKind {
            name: self.name.clone(),
            kind: self.kind.clone(),
        })?;
        Ok(SymbolInfo::new(self.name, kind)
            .with_detail(self.detail)
            .with_documentation(self.documentation)
            .with_sort_text(SmolStr::from(self.sort_text)))
    }
}

/// Accumulates definitions by normalized name. A later definition replaces an
/// earlier one but keeps its position.
///
/// Keys use the default case-insensitive normalization, so `Saturate` and
/// `saturate` are one definition.
#[derive(Debug, Default)]
struct DefinitionSet {
    symbols: IndexMap<SmolStr, SymbolInfo>,
}

impl DefinitionSet {
    fn extend_from_json(&mut self, json: &str) -> Result<(), LoadError> {
        let definitions: Vec<SymbolDefinition> = serde_json::from_str(json)?;
        for (position, definition) in definitions.into_iter().enumerate() {
            let symbol = definition.into_symbol(position)?;
            self.symbols.insert(normalize_symbol_name(&symbol.label), symbol);
        }
        Ok(())
    }

    fn extend_from_file(&mut self, path: &Path) -> Result<(), LoadError> {
        let json = std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
        self.extend_from_json(&json)?;
        tracing::debug!(
            path = %path.display(),
            total = self.symbols.len(),
            "loaded symbol definitions"
        );
        Ok(())
    }

    fn finish(self) -> SystemSymbols {
        self.symbols.into_values().collect()
    }
}

impl SystemSymbols {
    /// Parse a JSON array of [`SymbolDefinition`]s.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let mut set = DefinitionSet::default();
        set.extend_from_json(json)?;
        Ok(set.finish())
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        Self::from_json_files([path])
    }

    /// Load several definition files in order; later files override earlier
    /// definitions of the same name.
    pub fn from_json_files<P: AsRef<Path>>(
        paths: impl IntoIterator<Item = P>,
    ) -> Result<Self, LoadError> {
        let mut set = DefinitionSet::default();
        for path in paths {
            set.extend_from_file(path.as_ref())?;
        }
        Ok(set.finish())
    }
}

/// Loads system symbols from a fixed list of files, at most once.
#[derive(Debug, Clone)]
pub struct SystemSymbolLoader {
    paths: Vec<PathBuf>,
    loaded: Option<SystemSymbols>,
}

impl SystemSymbolLoader {
    pub fn new(paths: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            paths: paths.into_iter().collect(),
            loaded: None,
        }
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Returns true if symbols have been loaded by this loader
    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    /// Load on first call; later calls return the same symbols.
    ///
    /// A failed load is not cached, so the next call tries again.
    pub fn ensure_loaded(&mut self) -> Result<&SystemSymbols, LoadError> {
        if self.loaded.is_none() {
            let symbols = SystemSymbols::from_json_files(&self.paths)?;
            self.loaded = Some(symbols);
        }
        Ok(self.loaded.get_or_insert_with(SystemSymbols::empty))
    }
}
