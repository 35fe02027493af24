use log::trace;
use tally_common::Token;

/// An owned token sequence with a forward-only cursor.
///
/// The index never passes `tokens.len()`.
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: Vec<Token>,
    current: usize,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, current: 0 }
    }

    /// Creates a stream from an iterator of tokens.
    pub fn from_token_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Token>,
    {
        Self::new(iter.into_iter().collect())
    }

    /// Returns the current token without advancing.
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.current)
    }

    /// Consumes and returns the current token, or `None` once the stream is
    /// exhausted. The cursor does not move past the end.
    pub fn advance(&mut self) -> Option<Token> {
        let token = *self.tokens.get(self.current)?;
        trace!("token #{}: {token}", self.current);
        self.current += 1;
        Some(token)
    }

    pub fn is_eof(&self) -> bool {
        self.current >= self.tokens.len()
    }

    /// Index of the next token to be consumed.
    pub fn token_index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl From<Vec<Token>> for TokenStream {
    fn from(tokens: Vec<Token>) -> Self {
        Self::new(tokens)
    }
}
