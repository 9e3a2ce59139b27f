//! Character offset ↔ line/column conversion.

/// A position in a document (0-indexed, columns counted in characters).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// Precomputed line starts for a document's text.
///
/// All offsets are character offsets, matching the offsets stored on
/// [`SymbolInfo`](crate::SymbolInfo).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Character offset of the first character of each line.
    line_starts: Vec<usize>,
    /// Total number of characters in the text.
    len: usize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        let mut len = 0;
        for ch in text.chars() {
            len += 1;
            if ch == '\n' {
                line_starts.push(len);
            }
        }
        Self { line_starts, len }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Number of characters in the indexed text.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Convert a character offset to a position. Offsets past the end clamp
    /// to the end of the text.
    pub fn position(&self, offset: usize) -> Position {
        let offset = offset.min(self.len);
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        let column = offset - self.line_starts[line];
        Position::new(to_u32(line), to_u32(column))
    }

    /// Convert a position back to a character offset.
    ///
    /// Returns `None` when the line does not exist or the column runs past the
    /// end of that line.
    pub fn offset(&self, position: Position) -> Option<usize> {
        let line = position.line as usize;
        let start = *self.line_starts.get(line)?;
        let end = match self.line_starts.get(line + 1) {
            // Exclude the newline that terminates the line.
            Some(next) => next - 1,
            None => self.len,
        };
        let offset = start + position.column as usize;
        (offset <= end).then_some(offset)
    }
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
