//! Regex-driven symbol extraction.
//!
//! A [`SymbolPattern`] pairs a regular expression with a function from one
//! match's captures to an optional [`SymbolInfo`]. [`extract_symbols`] runs a
//! pattern over a document's full text and inserts every produced symbol into
//! a [`SymbolIndex`], stamping it with the character offset of the match.
//!
//! All knowledge of the host language lives in the patterns; the extraction
//! loop only scans, converts offsets, and inserts.

use std::fmt;

use regex::{Captures, Regex};

use crate::base::text_utils::CharOffsets;
use crate::index::{DefinitionRange, IndexError, SymbolIndex, SymbolInfo};

/// A grammar fragment that recognises one kind of declaration.
pub trait SymbolPattern: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &str;

    fn regex(&self) -> &Regex;

    /// Build a symbol from one match. `None` skips the match.
    ///
    /// A returned [`DefinitionRange`](crate::DefinitionRange) holds byte
    /// offsets into the scanned text, as [`Captures`] reports them; extraction
    /// converts it to character offsets before the symbol is stored.
    fn build(&self, captures: &Captures<'_>) -> Option<SymbolInfo>;
}

type BuildFn = dyn Fn(&Captures<'_>) -> Option<SymbolInfo> + Send + Sync;

/// A [`SymbolPattern`] built from a regex and a closure.
///
/// # Example
/// ```
/// use regex::Regex;
/// use symdex::{ExtractRule, SymbolIndex, SymbolInfo, SymbolKind, extract_symbols};
///
/// let rule = ExtractRule::new(
///     "define",
///     Regex::new(r"define\s+(\w+)\s+(\d+)").unwrap(),
///     |caps| {
///         let value = caps[2].parse().ok()?;
///         Some(SymbolInfo::new(&caps[1], SymbolKind::Constant).with_value(value))
///     },
/// );
///
/// let mut index = SymbolIndex::new();
/// extract_symbols(&mut index, "define X 5", &rule).unwrap();
/// assert_eq!(index.get_symbol("x").unwrap().value, Some(5));
/// ```
pub struct ExtractRule {
    name: String,
    regex: Regex,
    build: Box<BuildFn>,
}

impl ExtractRule {
    pub fn new(
        name: impl Into<String>,
        regex: Regex,
        build: impl Fn(&Captures<'_>) -> Option<SymbolInfo> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            regex,
            build: Box::new(build),
        }
    }
}

impl fmt::Debug for ExtractRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtractRule")
            .field("name", &self.name)
            .field("regex", &self.regex.as_str())
            .finish_non_exhaustive()
    }
}

impl SymbolPattern for ExtractRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn regex(&self) -> &Regex {
        &self.regex
    }

    fn build(&self, captures: &Captures<'_>) -> Option<SymbolInfo> {
        (self.build)(captures)
    }
}

/// Counts from one extraction pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionStats {
    /// Regex matches found.
    pub matched: usize,
    /// Symbols inserted into the index.
    pub inserted: usize,
    /// Matches the pattern declined to turn into a symbol.
    pub skipped: usize,
}

impl std::ops::AddAssign for ExtractionStats {
    fn add_assign(&mut self, other: Self) {
        self.matched += other.matched;
        self.inserted += other.inserted;
        self.skipped += other.skipped;
    }
}

/// Scan `text` with `pattern`, inserting every produced symbol into `index`.
///
/// Matches are non-overlapping and visited left to right. Each symbol's
/// `declaration_offset` is set to the character offset where its match
/// starts, and a definition range supplied in bytes is converted to
/// characters. A range that does not fall on character boundaries of `text`
/// is dropped. An error (an insert into a frozen index under the reject policy)
/// aborts the pass; the partially filled index should then be discarded.
pub fn extract_symbols(
    index: &mut SymbolIndex,
    text: &str,
    pattern: &(impl SymbolPattern + ?Sized),
) -> Result<ExtractionStats, IndexError> {
    let mut stats = ExtractionStats::default();
    let mut offsets = CharOffsets::new(text);

    for captures in pattern.regex().captures_iter(text) {
        stats.matched += 1;
        let Some(mut symbol) = pattern.build(&captures) else {
            stats.skipped += 1;
            continue;
        };
        // Group 0 always participates in a match.
        let start = captures.get(0).map_or(0, |m| m.start());
        symbol.declaration_offset = offsets.advance_to(start);
        if let Some(range) = symbol.definition {
            symbol.definition = char_range(text, &mut offsets, range);
            if symbol.definition.is_none() {
                tracing::warn!(
                    pattern = pattern.name(),
                    label = %symbol.label,
                    start = range.start(),
                    end = range.end(),
                    "dropped definition range outside the text"
                );
            }
        }
        index.add(symbol)?;
        stats.inserted += 1;
    }

    tracing::debug!(
        pattern = pattern.name(),
        matched = stats.matched,
        inserted = stats.inserted,
        skipped = stats.skipped,
        "extraction pass finished"
    );
    Ok(stats)
}

/// Convert a byte range of `text` to a character range.
fn char_range(
    text: &str,
    offsets: &mut CharOffsets<'_>,
    range: DefinitionRange,
) -> Option<DefinitionRange> {
    if !text.is_char_boundary(range.start()) || !text.is_char_boundary(range.end()) {
        return None;
    }
    let start = offsets.advance_to(range.start());
    let end = offsets.advance_to(range.end());
    DefinitionRange::new(start, end)
}

/// Ordered set of patterns run against every document.
///
/// Later patterns overwrite symbols from earlier ones with the same
/// normalized name.
#[derive(Default)]
pub struct SymbolGrammar {
    patterns: Vec<Box<dyn SymbolPattern>>,
}

impl fmt::Debug for SymbolGrammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.patterns.iter().map(|p| p.name()))
            .finish()
    }
}

impl SymbolGrammar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pattern; it runs after every pattern added before it.
    pub fn with_pattern(mut self, pattern: impl SymbolPattern + 'static) -> Self {
        self.patterns.push(Box::new(pattern));
        self
    }

    pub fn push(&mut self, pattern: impl SymbolPattern + 'static) {
        self.patterns.push(Box::new(pattern));
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Run every pattern over `text` in order.
    pub fn extract(
        &self,
        index: &mut SymbolIndex,
        text: &str,
    ) -> Result<ExtractionStats, IndexError> {
        let mut total = ExtractionStats::default();
        for pattern in &self.patterns {
            total += extract_symbols(index, text, pattern.as_ref())?;
        }
        Ok(total)
    }
}
