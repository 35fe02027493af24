//! Tally Lexer
//!
//! Turns a string into the flat [`Token`] sequence of a sum expression.
//!
//! ```
//! use tally_lexer::{lex, LexicalError, Token};
//!
//! assert_eq!(lex("10 + 3").unwrap(), vec![Token::Number(10), Token::Plus, Token::Number(3)]);
//! assert_eq!(lex("1 - 2"), Err(LexicalError::InvalidCharacter('-')));
//! ```

pub mod cursor;
pub mod error;
#[cfg(feature = "streaming")]
pub mod streaming;
pub mod tokenizer;

pub use cursor::Cursor;
pub use error::{LexicalError, Result};
#[cfg(feature = "streaming")]
pub use streaming::TokenProducer;
pub use tally_common::{Position, Token};
pub use tokenizer::{lex, Tokenizer};
