use tally_common::Position;

/// A forward-only cursor over the characters of an input string.
///
/// The offset only grows and never passes `input.len()`; `advance` at the end
/// of input is refused rather than wrapped.
#[derive(Debug, Clone)]
pub struct Cursor {
    input: Box<str>,
    current: usize,
    position: Position,
}

impl Cursor {
    /// Creates a new cursor from the input string.
    pub fn new<S: Into<String>>(input: S) -> Self {
        Self {
            input: input.into().into_boxed_str(),
            current: 0,
            position: Position::new(),
        }
    }

    /// Returns the current position in the source.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the current offset in bytes.
    pub fn offset(&self) -> usize {
        self.current
    }

    /// Returns true if the cursor is at the end of the input.
    pub fn is_eof(&self) -> bool {
        self.current >= self.input.len()
    }

    /// Returns the next character without advancing the cursor.
    pub fn peek(&self) -> Option<char> {
        self.input[self.current..].chars().next()
    }

    /// Advances the cursor by one character and returns it.
    ///
    /// Calling this at the end of input is a caller bug: it trips a debug
    /// assertion, and in release builds returns `None` without moving.
    pub fn advance(&mut self) -> Option<char> {
        debug_assert!(!self.is_eof(), "cannot advance past the end of input");
        let ch = self.peek()?;
        self.current += ch.len_utf8();
        self.position = self.position.step(ch);
        Some(ch)
    }

    /// Consumes characters while the predicate returns true and returns the
    /// consumed text.
    pub fn consume_while<F>(&mut self, mut predicate: F) -> &str
    where
        F: FnMut(char) -> bool,
    {
        let start = self.current;
        while let Some(ch) = self.peek() {
            if !predicate(ch) {
                break;
            }
            self.advance();
        }
        &self.input[start..self.current]
    }

    /// Returns the input that has not been consumed yet.
    pub fn remaining(&self) -> &str {
        &self.input[self.current..]
    }
}
