use tally_common::Token;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ParseError>;

/// Reasons a token sequence is not a valid sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A number was required but the tokens ran out.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,

    /// A token appeared where the grammar does not allow it: a `Plus` where
    /// a number belongs, or a second number directly after another.
    #[error("invalid token {0}")]
    InvalidToken(Token),

    /// The running sum left the `u64` range.
    #[error("sum overflowed: {lhs} + {rhs}")]
    Overflow { lhs: u64, rhs: u64 },
}
