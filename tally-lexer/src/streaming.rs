use crate::error::Result;
use crate::tokenizer::Tokenizer;
use tally_common::Token;

/// Produces tokens on demand, so a consumer can start work before the whole
/// input has been scanned.
pub trait TokenProducer {
    /// Emits the next token, the error that stopped scanning, or `None` once
    /// the input is exhausted.
    fn poll_token(&mut self) -> Option<Result<Token>>;
}

impl TokenProducer for Tokenizer {
    fn poll_token(&mut self) -> Option<Result<Token>> {
        self.next()
    }
}
