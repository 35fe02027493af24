use std::fmt;

/// A location in the source text.
///
/// The tokenizer's cursor keeps one of these up to date so failures can be
/// pinned to a line and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed, counted in characters)
    pub column: usize,
    /// Byte offset from the start of the input
    pub offset: usize,
}

impl Position {
    /// The position of the first character of any input.
    pub fn new() -> Self {
        Self {
            line: 1,
            column: 1,
            offset: 0,
        }
    }

    pub fn at(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    /// Returns the position just past `ch`, assuming `ch` starts at `self`.
    pub fn step(self, ch: char) -> Self {
        let offset = self.offset + ch.len_utf8();
        if ch == '\n' {
            Self::at(self.line + 1, 1, offset)
        } else {
            Self::at(self.line, self.column + 1, offset)
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
