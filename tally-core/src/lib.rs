//! Tally Core
//!
//! Composes the tokenizer and the parser: a string goes in, its sum (or the
//! first thing wrong with it) comes out.
//!
//! ```
//! use tally_core::{evaluate, Report};
//!
//! assert_eq!(evaluate("10 + 3 + 5").unwrap(), 18);
//! assert_eq!(
//!     Report::evaluate("10 +").to_string(),
//!     "Evaluating: 10 +\nLexer output: [Number(10), Plus]\nUnexpected end of input during parsing"
//! );
//! ```

pub mod error;
pub mod evaluate;
#[cfg(feature = "streaming")]
pub mod pipeline;
pub mod report;

pub use error::{EvalError, Result};
pub use evaluate::evaluate;
#[cfg(feature = "streaming")]
pub use pipeline::{evaluate_streaming, Pipeline};
pub use report::Report;
pub use tally_common::{Position, Token};
pub use tally_lexer::LexicalError;
pub use tally_parser::ParseError;
