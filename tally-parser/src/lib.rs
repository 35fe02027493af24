//! Tally Parser
//!
//! Evaluates `number (+ number)*` token sequences to their sum.
//!
//! ```
//! use tally_parser::{parse, ParseError, Token};
//!
//! assert_eq!(parse(vec![Token::Number(2), Token::Plus, Token::Number(3)]), Ok(5));
//! assert_eq!(parse(vec![]), Err(ParseError::UnexpectedEndOfInput));
//! ```

pub mod context;
pub mod error;
pub mod parser;
pub mod state;
#[cfg(feature = "streaming")]
pub mod streaming;

pub use context::TokenStream;
pub use error::{ParseError, Result};
pub use parser::{parse, Parser};
pub use state::{SumAccumulator, SumState};
#[cfg(feature = "streaming")]
pub use streaming::TokenConsumer;
pub use tally_common::Token;
