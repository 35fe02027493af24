use crate::error::Result;
use log::debug;
use tally_lexer::{TokenProducer, Tokenizer};
use tally_parser::{SumAccumulator, TokenConsumer};

/// Drives a token producer and a token consumer in lockstep, without
/// materializing the token sequence.
///
/// Because tokens are consumed as soon as they are produced, a grammar error
/// early in the input is reported before an invalid character later on.
pub struct Pipeline<P, C>
where
    P: TokenProducer,
    C: TokenConsumer,
{
    producer: P,
    consumer: C,
}

impl<P, C> Pipeline<P, C>
where
    P: TokenProducer,
    C: TokenConsumer,
{
    pub fn new(producer: P, consumer: C) -> Self {
        Self { producer, consumer }
    }

    /// Runs until the producer is exhausted or either side fails.
    pub fn run(mut self) -> Result<C::Output> {
        let mut delivered = 0usize;
        while let Some(token) = self.producer.poll_token() {
            self.consumer.push_token(token?)?;
            delivered += 1;
        }
        debug!("pipeline delivered {delivered} tokens");
        Ok(self.consumer.finish()?)
    }
}

/// Evaluates `input` token by token.
pub fn evaluate_streaming(input: &str) -> Result<u64> {
    debug!("evaluating {input:?} (streaming)");
    Pipeline::new(Tokenizer::new(input), SumAccumulator::new()).run()
}
