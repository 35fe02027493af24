//! Tally Common
//!
//! Data shared by the tokenizer and the parser: the [`Token`] both sides
//! agree on and the [`Position`] the character cursor reports.

pub mod position;
pub mod token;

pub use position::Position;
pub use token::Token;
