use crate::context::TokenStream;
use crate::error::Result;
use crate::state::SumAccumulator;
use log::debug;
use tally_common::Token;

/// Evaluates a whole token sequence as a left-associative sum.
///
/// The parser owns its tokens and is consumed by [`parse`](Self::parse).
#[derive(Debug, Clone)]
pub struct Parser {
    stream: TokenStream,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            stream: TokenStream::new(tokens),
        }
    }

    /// Creates a parser from a token iterator.
    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = Token>,
    {
        Self {
            stream: TokenStream::from_token_iter(tokens),
        }
    }

    /// Returns a reference to the underlying token stream.
    pub fn stream(&self) -> &TokenStream {
        &self.stream
    }

    /// Consumes every token and returns the sum, or the first grammar
    /// violation.
    pub fn parse(mut self) -> Result<u64> {
        debug!("parsing {} tokens", self.stream.len());
        let mut acc = SumAccumulator::new();
        while let Some(token) = self.stream.advance() {
            if let Err(err) = acc.push(token) {
                debug!(
                    "parse failed at token #{}: {err}",
                    self.stream.token_index() - 1
                );
                return Err(err);
            }
        }
        let sum = acc.finish()?;
        debug!("parsed sum {sum}");
        Ok(sum)
    }
}

impl From<Vec<Token>> for Parser {
    fn from(tokens: Vec<Token>) -> Self {
        Self::new(tokens)
    }
}

/// Parses `tokens` in one call.
pub fn parse(tokens: Vec<Token>) -> Result<u64> {
    Parser::new(tokens).parse()
}
