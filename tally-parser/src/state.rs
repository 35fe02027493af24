use crate::error::{ParseError, Result};
use log::trace;
use tally_common::Token;

/// Where the sum grammar `number (PLUS number)*` currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SumState {
    /// At the start, or right after a `Plus`.
    ExpectNumber,
    /// Right after a number; a `Plus` or the end of input may follow.
    ExpectPlusOrEnd,
}

/// Push-driven recognizer for the sum grammar.
///
/// Tokens are fed one at a time with [`push`](Self::push); the end of input
/// is signalled with [`finish`](Self::finish), which yields the sum. The
/// first error is final.
#[derive(Debug, Clone)]
pub struct SumAccumulator {
    state: SumState,
    sum: u64,
}

impl SumAccumulator {
    pub fn new() -> Self {
        Self {
            state: SumState::ExpectNumber,
            sum: 0,
        }
    }

    pub fn state(&self) -> SumState {
        self.state
    }

    /// The sum of the numbers accepted so far.
    pub fn partial_sum(&self) -> u64 {
        self.sum
    }

    /// Feeds the next token.
    pub fn push(&mut self, token: Token) -> Result<()> {
        let next = match (self.state, token) {
            (SumState::ExpectNumber, Token::Number(value)) => {
                self.sum = self
                    .sum
                    .checked_add(value)
                    .ok_or(ParseError::Overflow {
                        lhs: self.sum,
                        rhs: value,
                    })?;
                SumState::ExpectPlusOrEnd
            }
            (SumState::ExpectPlusOrEnd, Token::Plus) => SumState::ExpectNumber,
            // Adjacent numbers report the second one; a stray `Plus` reports itself.
            (_, token) => return Err(ParseError::InvalidToken(token)),
        };
        trace!("{:?} --{token}--> {next:?}", self.state);
        self.state = next;
        Ok(())
    }

    /// Signals the end of input and returns the sum.
    pub fn finish(self) -> Result<u64> {
        match self.state {
            SumState::ExpectPlusOrEnd => Ok(self.sum),
            SumState::ExpectNumber => Err(ParseError::UnexpectedEndOfInput),
        }
    }
}

impl Default for SumAccumulator {
    fn default() -> Self {
        Self::new()
    }
}
