use crate::error::Result;
use crate::state::SumAccumulator;
use tally_common::Token;

/// Trait for consumers that accept tokens incrementally and produce a value
/// once the input ends.
pub trait TokenConsumer {
    type Output;

    /// Pushes a single token. An error means the consumer will accept no more.
    fn push_token(&mut self, token: Token) -> Result<()>;

    /// Signals the end of input and returns the result.
    fn finish(self) -> Result<Self::Output>;
}

impl TokenConsumer for SumAccumulator {
    type Output = u64;

    fn push_token(&mut self, token: Token) -> Result<()> {
        self.push(token)
    }

    fn finish(self) -> Result<u64> {
        SumAccumulator::finish(self)
    }
}
